//! # Category Endpoints

use shared::dto::category::{
    CategoryBody, CategoryDetailRes, CategoryListRes, DeleteCategoryRes,
};

use super::client::{ApiClient, Response};
use crate::core::error::Result;

pub async fn list(client: &ApiClient) -> Result<Response<CategoryListRes>> {
    client.get("/categories").await
}

pub async fn detail(client: &ApiClient, id: &str) -> Result<Response<CategoryDetailRes>> {
    client.get(&format!("/categories/{}", id)).await
}

#[tracing::instrument(skip(client, body), fields(name = %body.name))]
pub async fn create(client: &ApiClient, body: &CategoryBody) -> Result<Response<CategoryDetailRes>> {
    client.post("/categories", body).await
}

pub async fn update(
    client: &ApiClient,
    id: &str,
    body: &CategoryBody,
) -> Result<Response<CategoryDetailRes>> {
    client.put(&format!("/categories/{}", id), body).await
}

pub async fn remove(client: &ApiClient, id: &str) -> Result<Response<DeleteCategoryRes>> {
    client.delete(&format!("/categories/{}", id)).await
}
