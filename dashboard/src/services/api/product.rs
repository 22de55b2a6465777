//! # Product Endpoints
//!
//! Unlike the enveloped category/coupon/order endpoints, the product routes
//! answer with bare payloads: the paginated list returns `{data, meta}`
//! directly and detail routes return the product object itself.

use reqwest::Method;
use serde_json::Value;
use shared::dto::product::{
    CreateProductBody, PatchStockBody, Product, ProductPage, StockCheck, UpdateProductBody,
};

use super::client::{ApiClient, Response};
use crate::core::error::Result;

/// Filters for the paginated product list.
///
/// Empty and absent values are dropped before hitting the wire, and the sort
/// field is sent under the backend's `sortBy` name.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    pub category_id: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

impl ProductListQuery {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        push_text(&mut pairs, "search", &self.search);
        push_text(&mut pairs, "categoryId", &self.category_id);
        push_text(&mut pairs, "sortBy", &self.sort);
        push_text(&mut pairs, "order", &self.order);
        pairs
    }
}

fn push_text(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<String>) {
    if let Some(value) = value {
        if !value.trim().is_empty() {
            pairs.push((key, value.clone()));
        }
    }
}

#[tracing::instrument(skip(client, body), fields(name = %body.name))]
pub async fn create(client: &ApiClient, body: &CreateProductBody) -> Result<Response<Product>> {
    client.post("/products", body).await
}

/// Fetch one page of products.
#[tracing::instrument(skip(client, query))]
pub async fn list(client: &ApiClient, query: &ProductListQuery) -> Result<Response<ProductPage>> {
    let start = std::time::Instant::now();

    let result: Result<Response<ProductPage>> = client
        .request(Method::GET, "/products", &query.to_pairs(), None, None)
        .await;

    if let Ok(page) = &result {
        tracing::debug!(
            duration_ms = start.elapsed().as_millis(),
            rows = page.payload.data.len(),
            total = page.payload.meta.total,
            "Products fetched"
        );
    }

    result
}

pub async fn detail(client: &ApiClient, id: &str) -> Result<Response<Product>> {
    client.get(&format!("/products/{}", id)).await
}

pub async fn update(
    client: &ApiClient,
    id: &str,
    body: &UpdateProductBody,
) -> Result<Response<Product>> {
    client.put(&format!("/products/{}", id), body).await
}

pub async fn remove(client: &ApiClient, id: &str) -> Result<Response<Value>> {
    client.delete(&format!("/products/{}", id)).await
}

/// Set the product's stock level.
pub async fn patch_stock(client: &ApiClient, id: &str, quantity: u32) -> Result<Response<Product>> {
    client
        .put(&format!("/products/{}/stock", id), &PatchStockBody { quantity })
        .await
}

/// Check whether `quantity` units can be fulfilled.
pub async fn check_stock(
    client: &ApiClient,
    id: &str,
    quantity: u32,
) -> Result<Response<StockCheck>> {
    client
        .request(
            Method::GET,
            &format!("/products/{}/check-stock", id),
            &[("quantity", quantity.to_string())],
            None,
            None,
        )
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_drops_empty_values() {
        let query = ProductListQuery {
            page: Some(2),
            limit: Some(20),
            search: Some("  ".to_string()),
            category_id: None,
            sort: Some("price".to_string()),
            order: Some("desc".to_string()),
        };
        let pairs = query.to_pairs();
        assert_eq!(
            pairs,
            vec![
                ("page", "2".to_string()),
                ("limit", "20".to_string()),
                ("sortBy", "price".to_string()),
                ("order", "desc".to_string()),
            ]
        );
    }

    #[test]
    fn test_default_query_is_empty() {
        assert!(ProductListQuery::default().to_pairs().is_empty());
    }
}
