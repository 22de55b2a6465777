//! # Coupon Endpoints

use serde_json::Value;
use shared::dto::coupon::{CouponBody, CouponListRes, CouponRes};

use super::client::{ApiClient, Response};
use crate::core::error::Result;

pub async fn list(client: &ApiClient) -> Result<Response<CouponListRes>> {
    client.get("/coupons").await
}

pub async fn detail(client: &ApiClient, id: &str) -> Result<Response<CouponRes>> {
    client.get(&format!("/coupons/{}", id)).await
}

#[tracing::instrument(skip(client, body), fields(code = %body.code))]
pub async fn create(client: &ApiClient, body: &CouponBody) -> Result<Response<CouponRes>> {
    client.post("/coupons", body).await
}

pub async fn update(
    client: &ApiClient,
    id: &str,
    body: &CouponBody,
) -> Result<Response<CouponRes>> {
    client.put(&format!("/coupons/{}", id), body).await
}

pub async fn remove(client: &ApiClient, id: &str) -> Result<Response<Value>> {
    client.delete(&format!("/coupons/{}", id)).await
}
