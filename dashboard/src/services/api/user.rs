//! # User Endpoints

use serde_json::Value;
use shared::dto::user::{BlockUserBody, UpdateUserBody, UserListRes};

use super::client::{ApiClient, Response};
use crate::core::error::Result;

pub async fn list(client: &ApiClient) -> Result<Response<UserListRes>> {
    client.get("/users").await
}

pub async fn update(
    client: &ApiClient,
    id: &str,
    body: &UpdateUserBody,
) -> Result<Response<Value>> {
    client.put(&format!("/users/{}", id), body).await
}

/// Block or unblock an account.
#[tracing::instrument(skip(client), fields(user_id = %id, blocked = blocked))]
pub async fn block(client: &ApiClient, id: &str, blocked: bool) -> Result<Response<Value>> {
    client
        .put(&format!("/users/{}/block", id), &BlockUserBody { blocked })
        .await
}
