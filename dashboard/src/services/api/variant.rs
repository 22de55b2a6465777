//! # Product Variant Endpoints
//!
//! Size/color variants hang off products. Like the product routes these
//! answer with bare payloads (no envelope).

use reqwest::Method;
use serde_json::Value;
use shared::dto::product::{
    CreateVariantBody, PatchStockBody, StockCheck, UpdateVariantBody, Variant, VariantSummary,
};

use super::client::{ApiClient, Response};
use crate::core::error::Result;

pub async fn create(client: &ApiClient, body: &CreateVariantBody) -> Result<Response<Variant>> {
    client.post("/product-variants", body).await
}

pub async fn list(client: &ApiClient) -> Result<Response<Vec<VariantSummary>>> {
    client.get("/product-variants").await
}

pub async fn list_by_product(
    client: &ApiClient,
    product_id: &str,
) -> Result<Response<Vec<VariantSummary>>> {
    client
        .get(&format!("/product-variants/product/{}", product_id))
        .await
}

/// Sizes available for a product.
pub async fn sizes(client: &ApiClient, product_id: &str) -> Result<Response<Vec<String>>> {
    client
        .get(&format!("/product-variants/product/{}/sizes", product_id))
        .await
}

/// Colors available for a product, optionally narrowed to one size.
pub async fn colors(
    client: &ApiClient,
    product_id: &str,
    size: Option<&str>,
) -> Result<Response<Vec<String>>> {
    let path = format!("/product-variants/product/{}/colors", product_id);
    let mut query = Vec::new();
    if let Some(size) = size {
        query.push(("size", size.to_string()));
    }
    client.request(Method::GET, &path, &query, None, None).await
}

/// Resolve the variant matching a product/size/color combination.
pub async fn find_by_attributes(
    client: &ApiClient,
    product_id: &str,
    size: Option<&str>,
    color: Option<&str>,
) -> Result<Response<Variant>> {
    let query = [
        ("productId", product_id.to_string()),
        ("size", size.unwrap_or_default().to_string()),
        ("color", color.unwrap_or_default().to_string()),
    ];
    client
        .request(
            Method::GET,
            "/product-variants/find-by-attributes",
            &query,
            None,
            None,
        )
        .await
}

pub async fn detail(client: &ApiClient, id: &str) -> Result<Response<Variant>> {
    client.get(&format!("/product-variants/{}", id)).await
}

pub async fn update(
    client: &ApiClient,
    id: &str,
    body: &UpdateVariantBody,
) -> Result<Response<Variant>> {
    client.put(&format!("/product-variants/{}", id), body).await
}

pub async fn remove(client: &ApiClient, id: &str) -> Result<Response<Value>> {
    client.delete(&format!("/product-variants/{}", id)).await
}

/// Set the variant's stock level.
pub async fn patch_stock(client: &ApiClient, id: &str, quantity: u32) -> Result<Response<Variant>> {
    client
        .put(
            &format!("/product-variants/{}/stock", id),
            &PatchStockBody { quantity },
        )
        .await
}

/// Check whether `quantity` units of the variant can be fulfilled.
pub async fn check_stock(
    client: &ApiClient,
    id: &str,
    quantity: u32,
) -> Result<Response<StockCheck>> {
    client
        .request(
            Method::GET,
            &format!("/product-variants/{}/check-stock", id),
            &[("quantity", quantity.to_string())],
            None,
            None,
        )
        .await
}
