//! # Order Endpoints
//!
//! Admins list, inspect, and progress orders through their lifecycle; there
//! is no order creation from this surface.

use serde_json::Value;
use shared::dto::order::{OrderListRes, OrderRes, UpdateOrderStatusBody};

use super::client::{ApiClient, Response};
use crate::core::error::Result;

pub async fn list(client: &ApiClient) -> Result<Response<OrderListRes>> {
    client.get("/orders").await
}

pub async fn detail(client: &ApiClient, id: &str) -> Result<Response<OrderRes>> {
    client.get(&format!("/orders/{}", id)).await
}

/// Move an order to a new lifecycle state.
#[tracing::instrument(skip(client, body), fields(order_id = %id, status = ?body.status))]
pub async fn update_status(
    client: &ApiClient,
    id: &str,
    body: &UpdateOrderStatusBody,
) -> Result<Response<Value>> {
    client.put(&format!("/orders/{}/status", id), body).await
}

pub async fn remove(client: &ApiClient, id: &str) -> Result<Response<Value>> {
    client.delete(&format!("/orders/{}", id)).await
}
