//! # API Client Tests
//!
//! End-to-end tests for the authenticated HTTP client, driven against a
//! loopback axum server that plays the backend.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::{json, Value};

use dashboard::core::config::Config;
use dashboard::core::error::ApiError;
use dashboard::core::navigation::Navigator;
use dashboard::services::api::{auth, order, ApiClient, FormData};
use shared::dto::auth::{LoginRequest, SessionData};
use shared::dto::common::ApiEnvelope;
use shared::dto::order::OrderStatus;

/// Backend stand-in: knows one valid login, one valid refresh token, and
/// which access token it currently accepts.
#[derive(Default)]
struct ServerState {
    accepted_token: Mutex<String>,
    refresh_calls: AtomicUsize,
    orders_calls: AtomicUsize,
    refresh_fails: bool,
}

fn session_envelope(access: &str, refresh: &str) -> Value {
    json!({
        "status": 200,
        "message": "OK",
        "data": {"accessToken": access, "refreshToken": refresh, "deviceId": "device-1"}
    })
}

async fn login(
    State(state): State<Arc<ServerState>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if body["email"] == "admin@example.com" && body["password"] == "Admin123" {
        *state.accepted_token.lock() = "access-1".to_string();
        (StatusCode::OK, Json(session_envelope("access-1", "refresh-1")))
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"status": 401, "message": "Invalid credentials"})),
        )
    }
}

async fn refresh(
    State(state): State<Arc<ServerState>>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    state.refresh_calls.fetch_add(1, Ordering::SeqCst);

    let refresh_token = headers
        .get("refreshToken")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if state.refresh_fails || refresh_token != "refresh-1" {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"status": 401, "message": "Refresh token expired"})),
        );
    }

    *state.accepted_token.lock() = "access-2".to_string();
    (StatusCode::OK, Json(session_envelope("access-2", "refresh-2")))
}

async fn logout() -> Json<Value> {
    Json(json!({"status": 200, "message": "Logged out"}))
}

async fn orders(
    State(state): State<Arc<ServerState>>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    state.orders_calls.fetch_add(1, Ordering::SeqCst);

    let expected = format!("Bearer {}", state.accepted_token.lock());
    let authorization = headers
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if authorization != expected {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"status": 401, "message": "Token expired"})),
        );
    }

    let order = json!({
        "id": "o1",
        "userId": "u1",
        "userName": "Alice Nguyen",
        "phone": "0900000000",
        "address": "12 Nguyen Hue, District 1",
        "items": [
            {"id": "i1", "productId": "p1", "name": "Ao thun", "price": 150000.0, "quantity": 2}
        ],
        "total": 300000.0,
        "status": "NEW",
        "createdAt": "2026-01-01T00:00:00Z"
    });
    (
        StatusCode::OK,
        Json(json!({"status": 200, "message": "OK", "data": [order]})),
    )
}

/// Echoes the request's content type back inside the envelope.
async fn echo_content_type(headers: HeaderMap) -> Json<Value> {
    let content_type = headers
        .get("Content-Type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    Json(json!({"status": 200, "message": "OK", "data": content_type}))
}

async fn bad_request() -> (StatusCode, Json<Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({"status": 400, "message": "Ten danh muc la bat buoc"})),
    )
}

async fn server_error() -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"status": 500, "message": "Something broke"})),
    )
}

async fn not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"status": 404, "message": "Not found", "data": null})),
    )
}

async fn spawn_server(refresh_fails: bool) -> (Arc<ServerState>, String) {
    let state = Arc::new(ServerState {
        refresh_fails,
        ..Default::default()
    });

    let app = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/refresh", get(refresh))
        .route("/auth/logout", post(logout))
        .route("/orders", get(orders))
        .route("/uploads", post(echo_content_type))
        .route("/bad", get(bad_request))
        .route("/boom", get(server_error))
        .route("/missing", get(not_found))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("binding the loopback listener should succeed in test");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (state, format!("http://{}", addr))
}

#[derive(Default)]
struct RecordingNavigator {
    routes: Mutex<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, route: &str) {
        self.routes.lock().push(route.to_string());
    }
}

fn stale_session() -> SessionData {
    SessionData {
        access_token: "access-1".to_string(),
        refresh_token: "refresh-1".to_string(),
        device_id: "device-1".to_string(),
    }
}

#[tokio::test]
async fn test_login_populates_session_and_valid_token_skips_refresh() {
    // Arrange
    let (state, base_url) = spawn_server(false).await;
    let client = ApiClient::new(&Config::new(&base_url));

    // Act
    let login_request = LoginRequest {
        email: "admin@example.com".to_string(),
        password: "Admin123".to_string(),
    };
    let response = auth::login(&client, &login_request)
        .await
        .expect("login should succeed in test");

    // Assert
    assert_eq!(response.status, 200);
    assert!(client.session().is_authenticated());
    assert_eq!(client.session().snapshot().access_token, "access-1");

    let orders = order::list(&client)
        .await
        .expect("order listing should succeed with a fresh token");
    assert_eq!(orders.status, 200);
    let rows = orders.payload.data.expect("order list should carry data");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, OrderStatus::New);

    assert_eq!(state.refresh_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_expired_token_refreshes_once_and_retries_once() {
    // Arrange: the server only accepts access-2, the client still holds
    // access-1 with a valid refresh token.
    let (state, base_url) = spawn_server(false).await;
    *state.accepted_token.lock() = "access-2".to_string();

    let client = ApiClient::new(&Config::new(&base_url));
    client.session().set(stale_session());

    // Act
    let orders = order::list(&client)
        .await
        .expect("retry with refreshed credentials should succeed");

    // Assert
    assert_eq!(orders.status, 200);
    assert_eq!(state.refresh_calls.load(Ordering::SeqCst), 1);
    assert_eq!(state.orders_calls.load(Ordering::SeqCst), 2);
    assert_eq!(client.session().snapshot().access_token, "access-2");
    assert_eq!(client.session().snapshot().refresh_token, "refresh-2");
}

#[tokio::test]
async fn test_failed_refresh_redirects_to_login_and_raises() {
    // Arrange
    let (state, base_url) = spawn_server(true).await;
    *state.accepted_token.lock() = "access-2".to_string();

    let navigator = Arc::new(RecordingNavigator::default());
    let client = ApiClient::with_navigator(&Config::new(&base_url), navigator.clone());
    client.session().set(stale_session());

    // Act
    let result = order::list(&client).await;

    // Assert: one refresh attempt, no second try at the resource, a typed
    // 401, and the user pointed at the login route.
    let error = result.expect_err("401 with failing refresh should raise");
    match error {
        ApiError::Http { status, payload } => {
            assert_eq!(status, 401);
            assert_eq!(payload["message"], "Token expired");
        }
        other => panic!("expected ApiError::Http, got {other:?}"),
    }
    assert_eq!(state.refresh_calls.load(Ordering::SeqCst), 1);
    assert_eq!(state.orders_calls.load(Ordering::SeqCst), 1);
    assert_eq!(navigator.routes.lock().as_slice(), ["/login"]);
}

#[tokio::test]
async fn test_multipart_body_omits_json_content_type() {
    // Arrange
    let (_state, base_url) = spawn_server(false).await;
    let client = ApiClient::new(&Config::new(&base_url));

    // Act
    let form = FormData::new()
        .text("name", "Ao thun")
        .file("image", "front.png", "image/png", vec![0xFF, 0xD8]);
    let response: dashboard::services::api::Response<ApiEnvelope<String>> = client
        .post_form("/uploads", form)
        .await
        .expect("upload should succeed in test");

    // Assert
    let content_type = response.payload.data.unwrap_or_default();
    assert!(
        content_type.starts_with("multipart/form-data"),
        "got content type {content_type:?}"
    );
}

#[tokio::test]
async fn test_json_body_sets_json_content_type() {
    let (_state, base_url) = spawn_server(false).await;
    let client = ApiClient::new(&Config::new(&base_url));

    let response: dashboard::services::api::Response<ApiEnvelope<String>> = client
        .post("/uploads", &json!({"name": "Ao thun"}))
        .await
        .expect("post should succeed in test");

    assert_eq!(response.payload.data.as_deref(), Some("application/json"));
}

#[tokio::test]
async fn test_bad_request_raises_typed_error_with_payload() {
    let (_state, base_url) = spawn_server(false).await;
    let client = ApiClient::new(&Config::new(&base_url));

    let error = client
        .get::<Value>("/bad")
        .await
        .expect_err("400 should raise");

    match &error {
        ApiError::Http { status, payload } => {
            assert_eq!(*status, 400);
            assert_eq!(payload["message"], "Ten danh muc la bat buoc");
        }
        other => panic!("expected ApiError::Http, got {other:?}"),
    }
    assert_eq!(error.to_string(), "Ten danh muc la bat buoc");
}

#[tokio::test]
async fn test_server_error_raises_typed_error() {
    let (_state, base_url) = spawn_server(false).await;
    let client = ApiClient::new(&Config::new(&base_url));

    let error = client
        .get::<Value>("/boom")
        .await
        .expect_err("500 should raise");
    assert_eq!(error.status(), Some(500));
}

#[tokio::test]
async fn test_soft_non_2xx_status_is_returned_to_the_caller() {
    let (state, base_url) = spawn_server(false).await;
    let client = ApiClient::new(&Config::new(&base_url));

    let response: dashboard::services::api::Response<ApiEnvelope<Value>> = client
        .get("/missing")
        .await
        .expect("404 is not a raising status");

    assert_eq!(response.status, 404);
    assert_eq!(response.payload.message, "Not found");
    assert!(response.payload.data.is_none());
    // And it never touched the refresh endpoint
    assert_eq!(state.refresh_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_logout_clears_session() {
    // Arrange
    let (_state, base_url) = spawn_server(false).await;
    let client = ApiClient::new(&Config::new(&base_url));

    let login_request = LoginRequest {
        email: "admin@example.com".to_string(),
        password: "Admin123".to_string(),
    };
    auth::login(&client, &login_request)
        .await
        .expect("login should succeed in test");
    assert!(client.session().is_authenticated());

    // Act
    let response = auth::logout(&client)
        .await
        .expect("logout should succeed in test");

    // Assert
    assert_eq!(response.status, 200);
    assert!(!client.session().is_authenticated());
    assert_eq!(client.session().snapshot(), SessionData::default());
}

#[tokio::test]
async fn test_failed_login_raises_and_leaves_session_empty() {
    let (_state, base_url) = spawn_server(false).await;
    let client = ApiClient::new(&Config::new(&base_url));

    let login_request = LoginRequest {
        email: "admin@example.com".to_string(),
        password: "wrong".to_string(),
    };
    let error = auth::login(&client, &login_request)
        .await
        .expect_err("bad credentials should raise");

    assert_eq!(error.status(), Some(401));
    assert!(!client.session().is_authenticated());
}
