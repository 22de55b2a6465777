//! # API Client
//!
//! Main HTTP client for backend API communication.
//!
//! Every call attaches the bearer access token, the device id, and the
//! refresh token from the owned [`SessionStore`]. A 401 answer triggers
//! exactly one refresh against `/auth/refresh` and one retry of the original
//! request; when the refresh fails the injected [`Navigator`] is pointed at
//! the login route and the original 401 keeps flowing, surfacing as
//! [`ApiError::Http`].
//!
//! Calls whose path is the login or register endpoint persist the returned
//! credentials into the session store as a side effect; the logout endpoint
//! clears them.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{multipart, Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use shared::dto::auth::SessionData;
use shared::dto::common::ApiEnvelope;
use shared::utils::normalize_path;

use crate::core::config::Config;
use crate::core::error::{ApiError, Result};
use crate::core::navigation::{LoggingNavigator, Navigator};
use crate::core::session::SessionStore;

/// Header carrying the client-bound device identifier.
pub const DEVICE_ID_HEADER: &str = "X-Device-Id";
/// Header carrying the refresh token on every call.
pub const REFRESH_TOKEN_HEADER: &str = "refreshToken";
/// Route the navigator is pointed at when the session cannot be recovered.
pub const LOGIN_ROUTE: &str = "/login";

const REFRESH_PATH: &str = "/auth/refresh";

const BAD_REQUEST_STATUS: u16 = 400;
const AUTHENTICATION_ERROR_STATUS: u16 = 401;
const SERVER_ERROR_STATUS: u16 = 500;

/// Final status and decoded payload of an API call.
///
/// Statuses outside {400, 401, 5xx} are handed back here even when they are
/// not 2xx, so callers can react to 403/404/409 locally.
#[derive(Debug, Clone, PartialEq)]
pub struct Response<T> {
    pub status: u16,
    pub payload: T,
}

/// Multipart form body assembled from owned parts.
///
/// A wire-level multipart form is single-use; keeping the fields here lets
/// the client rebuild the form when the request is re-issued after a token
/// refresh.
#[derive(Debug, Clone, Default)]
pub struct FormData {
    fields: Vec<FormField>,
}

#[derive(Debug, Clone)]
enum FormField {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        mime: String,
        bytes: Vec<u8>,
    },
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text field.
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(FormField::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Append a binary file field.
    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        mime: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        self.fields.push(FormField::File {
            name: name.into(),
            file_name: file_name.into(),
            mime: mime.into(),
            bytes,
        });
        self
    }

    fn to_multipart(&self) -> multipart::Form {
        let mut form = multipart::Form::new();
        for field in &self.fields {
            match field {
                FormField::Text { name, value } => {
                    form = form.text(name.clone(), value.clone());
                }
                FormField::File {
                    name,
                    file_name,
                    mime,
                    bytes,
                } => {
                    let part = multipart::Part::bytes(bytes.clone()).file_name(file_name.clone());
                    let part = match part.mime_str(mime) {
                        Ok(part) => part,
                        Err(error) => {
                            tracing::warn!(mime = %mime, error = %error, "invalid mime type on form field, sending without one");
                            multipart::Part::bytes(bytes.clone()).file_name(file_name.clone())
                        }
                    };
                    form = form.part(name.clone(), part);
                }
            }
        }
        form
    }
}

/// Request body accepted by [`ApiClient::request`].
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// JSON-encoded body, sent with `Content-Type: application/json`.
    Json(Value),
    /// Multipart form data; the content type is left to the transport.
    Form(FormData),
}

/// Per-call overrides.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Replace the configured base URL for this call only.
    pub base_url: Option<String>,
    /// Extra headers, applied after the session headers (overrides win).
    pub headers: Vec<(String, String)>,
}

/// HTTP client for communicating with the backend API server.
///
/// Cheap to share: wrap in an `Arc` and hand clones of that to async tasks.
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Arc<SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    /// Create a client with the default (logging) navigator.
    pub fn new(config: &Config) -> Self {
        Self::with_navigator(config, Arc::new(LoggingNavigator))
    }

    /// Create a client with an injected navigation capability.
    ///
    /// The client is configured with a 10 second timeout to prevent callers
    /// from hanging on a stalled backend, and with a cookie store so
    /// HttpOnly session cookies ride along.
    pub fn with_navigator(config: &Config, navigator: Arc<dyn Navigator>) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(10))
            .cookie_store(true)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            session: Arc::new(SessionStore::new()),
            navigator,
        }
    }

    /// Base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The session store backing this client.
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Response<T>> {
        self.request(Method::GET, path, &[], None, None).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<Response<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body).map_err(ApiError::Encode)?;
        self.request(Method::POST, path, &[], Some(RequestBody::Json(body)), None)
            .await
    }

    /// POST a multipart form (e.g. image uploads). No JSON content type is
    /// set; the transport supplies the multipart boundary.
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: FormData,
    ) -> Result<Response<T>> {
        self.request(Method::POST, path, &[], Some(RequestBody::Form(form)), None)
            .await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<Response<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body).map_err(ApiError::Encode)?;
        self.request(Method::PUT, path, &[], Some(RequestBody::Json(body)), None)
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<Response<T>> {
        self.request(Method::DELETE, path, &[], None, None).await
    }

    /// Perform one API call.
    ///
    /// This is the full-control entry point behind the verb helpers: issue
    /// the request with session headers attached, refresh-and-retry once on
    /// 401, parse the final body (falling back to an empty JSON object when
    /// it is not valid JSON), raise [`ApiError::Http`] for 400/401/5xx, and
    /// persist or clear session credentials when the path is a login,
    /// register, refresh, or logout endpoint.
    ///
    /// Concurrent calls racing the same expired token each run their own
    /// refresh; the last refresh to complete wins the session store.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<RequestBody>,
        options: Option<&RequestOptions>,
    ) -> Result<Response<T>> {
        let url = self.join_url(path, options);

        let mut response = self
            .send(method.clone(), &url, query, body.as_ref(), options)
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            match self
                .refresh_and_retry(method, &url, query, body.as_ref(), options)
                .await
            {
                Some(retried) => response = retried,
                None => self.navigator.redirect(LOGIN_ROUTE),
            }
        }

        let status = response.status().as_u16();
        let bytes = response.bytes().await.unwrap_or_default();

        // Lossy recovery: bodies that are not valid JSON (empty responses,
        // proxy error pages) degrade to an empty object payload.
        let payload: Value = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        if status == BAD_REQUEST_STATUS
            || status == AUTHENTICATION_ERROR_STATUS
            || status >= SERVER_ERROR_STATUS
        {
            tracing::warn!(status = status, path = %path, "API call failed");
            return Err(ApiError::Http { status, payload });
        }

        self.capture_session(path, &payload);

        let payload = serde_json::from_value(payload).map_err(ApiError::Decode)?;
        Ok(Response { status, payload })
    }

    /// Issue a single attempt with the current session headers.
    async fn send(
        &self,
        method: Method,
        url: &str,
        query: &[(&str, String)],
        body: Option<&RequestBody>,
        options: Option<&RequestOptions>,
    ) -> Result<reqwest::Response> {
        let session = self.session.snapshot();

        let mut request = self.http.request(method, url);

        // Multipart bodies get their content type (and boundary) from the
        // transport; everything else is JSON.
        if !matches!(body, Some(RequestBody::Form(_))) {
            request = request.header(CONTENT_TYPE, "application/json");
        }

        let bearer = if session.access_token.is_empty() {
            String::new()
        } else {
            format!("Bearer {}", session.access_token)
        };
        request = request
            .header(reqwest::header::AUTHORIZATION, bearer)
            .header(DEVICE_ID_HEADER, session.device_id)
            .header(REFRESH_TOKEN_HEADER, session.refresh_token);

        if let Some(options) = options {
            for (name, value) in &options.headers {
                request = request.header(name.as_str(), value.as_str());
            }
        }

        if !query.is_empty() {
            request = request.query(query);
        }

        request = match body {
            Some(RequestBody::Json(value)) => request.json(value),
            Some(RequestBody::Form(form)) => request.multipart(form.to_multipart()),
            None => request,
        };

        request.send().await.map_err(ApiError::Network)
    }

    /// Refresh the session once and re-issue the original request.
    ///
    /// Returns `None` when either step fails, leaving the caller with the
    /// original 401 response.
    async fn refresh_and_retry(
        &self,
        method: Method,
        url: &str,
        query: &[(&str, String)],
        body: Option<&RequestBody>,
        options: Option<&RequestOptions>,
    ) -> Option<reqwest::Response> {
        if !self.refresh_session().await {
            return None;
        }

        tracing::debug!(url = %url, "retrying request with refreshed credentials");
        match self.send(method, url, query, body, options).await {
            Ok(response) => Some(response),
            Err(error) => {
                tracing::warn!(error = %error, "retry after refresh failed");
                None
            }
        }
    }

    /// Call the refresh endpoint with the stored device id and refresh token
    /// and replace the session credentials on success.
    async fn refresh_session(&self) -> bool {
        let session = self.session.snapshot();
        let url = format!("{}{}", self.base_url, REFRESH_PATH);

        let result = self
            .http
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(DEVICE_ID_HEADER, session.device_id)
            .header(REFRESH_TOKEN_HEADER, session.refresh_token)
            .send()
            .await;

        let response = match result {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!(error = %error, "token refresh failed on the wire");
                return false;
            }
        };

        if !response.status().is_success() {
            tracing::warn!(status = response.status().as_u16(), "token refresh rejected");
            return false;
        }

        match response.json::<ApiEnvelope<SessionData>>().await {
            Ok(envelope) => match envelope.data {
                Some(session) => {
                    self.session.set(session);
                    tracing::info!("session credentials refreshed");
                    true
                }
                None => {
                    tracing::warn!("refresh response carried no session data");
                    false
                }
            },
            Err(error) => {
                tracing::warn!(error = %error, "refresh response parse error");
                false
            }
        }
    }

    /// Session side effects keyed on the request path.
    fn capture_session(&self, path: &str, payload: &Value) {
        match normalize_path(path) {
            "auth/login" | "auth/register" | "auth/refresh" => {
                let data = payload.get("data").cloned().unwrap_or(Value::Null);
                match serde_json::from_value::<SessionData>(data) {
                    Ok(session) => {
                        self.session.set(session);
                        tracing::debug!(path = %path, "session credentials stored");
                    }
                    Err(error) => {
                        tracing::warn!(error = %error, path = %path, "response carried no usable session data");
                    }
                }
            }
            "auth/logout" => {
                self.session.clear();
                tracing::debug!("session credentials cleared");
            }
            _ => {}
        }
    }

    fn join_url(&self, path: &str, options: Option<&RequestOptions>) -> String {
        let base = options
            .and_then(|options| options.base_url.as_deref())
            .unwrap_or(&self.base_url);
        let base = base.trim_end_matches('/');

        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }
}
