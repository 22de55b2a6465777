//! # Authentication Endpoints
//!
//! Login, registration, logout, and explicit session refresh. Successful
//! login/register responses populate the client's session store; logout
//! clears it (both side effects live in the client core).

use shared::dto::auth::{AuthRes, LoginRequest, LogoutRes, RegisterRequest};

use super::client::{ApiClient, Response};
use crate::core::error::Result;

/// Login with email and password.
#[tracing::instrument(skip(client, body), fields(email = %body.email))]
pub async fn login(client: &ApiClient, body: &LoginRequest) -> Result<Response<AuthRes>> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let result = client.post("/auth/login", body).await;

    match &result {
        Ok(response) => {
            tracing::info!(
                status = response.status,
                duration_ms = start.elapsed().as_millis(),
                "Login successful"
            );
        }
        Err(error) => {
            tracing::warn!(
                error = %error,
                duration_ms = start.elapsed().as_millis(),
                "Login failed"
            );
        }
    }

    result
}

/// Register a new account.
#[tracing::instrument(skip(client, body), fields(email = %body.email))]
pub async fn register(client: &ApiClient, body: &RegisterRequest) -> Result<Response<AuthRes>> {
    client.post("/auth/register", body).await
}

/// End the current session. Clears the stored credentials.
pub async fn logout(client: &ApiClient) -> Result<Response<LogoutRes>> {
    client.post("/auth/logout", &serde_json::json!({})).await
}

/// Slide the session: mint fresh tokens from the stored refresh token.
///
/// The refreshed credentials replace the stored ones on success.
pub async fn slide_session(client: &ApiClient) -> Result<Response<AuthRes>> {
    client.get("/auth/refresh").await
}
