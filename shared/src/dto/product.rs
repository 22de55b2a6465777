use serde::{Deserialize, Serialize};

use crate::dto::common::Paginated;

/// Body for creating a product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductBody {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<f64>,
    pub stock: u32,
    pub category_id: String,
}

/// Body for updating a product. Every field is optional; only the fields
/// present are touched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

/// Category reference embedded in product responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRef {
    pub id: String,
    pub name: String,
}

/// Product image
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    pub id: String,
    pub image_url: String,
    pub is_primary: bool,
}

/// Product row as returned by the paginated list endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub discount_price: Option<f64>,
    #[serde(default)]
    pub discount_percentage: Option<f64>,
    pub stock: u32,
    #[serde(default)]
    pub view_count: Option<u64>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub primary_image: Option<String>,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub total_reviews: Option<u64>,
    pub is_in_stock: bool,
    pub has_discount: bool,
}

/// Full product as returned by detail, create, and update endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub discount_price: Option<f64>,
    pub stock: u32,
    #[serde(default)]
    pub images: Vec<ProductImage>,
    #[serde(default)]
    pub variants: Vec<VariantSummary>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body for adjusting product stock
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PatchStockBody {
    pub quantity: u32,
}

/// Stock availability check. Sent bare, without the envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StockCheck {
    pub available: bool,
    pub stock: u32,
}

/// Paginated product lists arrive without the envelope wrapper.
pub type ProductPage = Paginated<ProductSummary>;

/// Body for creating a product variant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateVariantBody {
    pub product_id: String,
    pub size: String,
    pub color: String,
    pub price: f64,
    pub stock: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Body for updating a product variant. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVariantBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Variant row as embedded in product responses and list endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VariantSummary {
    pub id: String,
    pub size: String,
    pub color: String,
    pub price: f64,
    pub stock: u32,
    #[serde(default)]
    pub sku: Option<String>,
    pub is_in_stock: bool,
}

/// Product reference embedded in variant detail responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductRef {
    pub id: String,
    pub name: String,
    pub price: f64,
}

/// Full variant as returned by detail, create, and update endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub id: String,
    pub size: String,
    pub color: String,
    pub price: f64,
    pub stock: u32,
    #[serde(default)]
    pub sku: Option<String>,
    pub is_in_stock: bool,
    #[serde(default)]
    pub product: Option<ProductRef>,
    #[serde(default)]
    pub created_at: Option<String>,
}
