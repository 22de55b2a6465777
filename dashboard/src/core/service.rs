//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and
//! modularity. Consumers that render screens against the backend take an
//! `Arc<dyn AdminApi>` instead of the concrete client so tests can feed them
//! canned data.

use async_trait::async_trait;
use serde_json::Value;

use shared::dto::auth::{AuthRes, LoginRequest, LogoutRes, RegisterRequest};
use shared::dto::category::{CategoryBody, CategoryDetailRes, CategoryListRes, DeleteCategoryRes};
use shared::dto::coupon::{CouponBody, CouponListRes, CouponRes};
use shared::dto::order::{OrderListRes, OrderRes, UpdateOrderStatusBody};
use shared::dto::product::{
    CreateProductBody, CreateVariantBody, Product, ProductPage, StockCheck, UpdateProductBody,
    UpdateVariantBody, Variant, VariantSummary,
};
use shared::dto::user::{UpdateUserBody, UserListRes};

use crate::core::error::Result;
use crate::services::api::{self, ApiClient, ProductListQuery, Response};

/// Trait covering the full admin endpoint surface.
///
/// [`ApiClient`] implements this by delegating to the endpoint modules.
#[async_trait]
pub trait AdminApi: Send + Sync {
    // Auth
    async fn login(&self, body: &LoginRequest) -> Result<Response<AuthRes>>;
    async fn register(&self, body: &RegisterRequest) -> Result<Response<AuthRes>>;
    async fn logout(&self) -> Result<Response<LogoutRes>>;
    async fn slide_session(&self) -> Result<Response<AuthRes>>;

    // Categories
    async fn list_categories(&self) -> Result<Response<CategoryListRes>>;
    async fn category_detail(&self, id: &str) -> Result<Response<CategoryDetailRes>>;
    async fn create_category(&self, body: &CategoryBody) -> Result<Response<CategoryDetailRes>>;
    async fn update_category(
        &self,
        id: &str,
        body: &CategoryBody,
    ) -> Result<Response<CategoryDetailRes>>;
    async fn delete_category(&self, id: &str) -> Result<Response<DeleteCategoryRes>>;

    // Coupons
    async fn list_coupons(&self) -> Result<Response<CouponListRes>>;
    async fn coupon_detail(&self, id: &str) -> Result<Response<CouponRes>>;
    async fn create_coupon(&self, body: &CouponBody) -> Result<Response<CouponRes>>;
    async fn update_coupon(&self, id: &str, body: &CouponBody) -> Result<Response<CouponRes>>;
    async fn delete_coupon(&self, id: &str) -> Result<Response<Value>>;

    // Orders
    async fn list_orders(&self) -> Result<Response<OrderListRes>>;
    async fn order_detail(&self, id: &str) -> Result<Response<OrderRes>>;
    async fn update_order_status(
        &self,
        id: &str,
        body: &UpdateOrderStatusBody,
    ) -> Result<Response<Value>>;
    async fn delete_order(&self, id: &str) -> Result<Response<Value>>;

    // Products
    async fn create_product(&self, body: &CreateProductBody) -> Result<Response<Product>>;
    async fn list_products(&self, query: &ProductListQuery) -> Result<Response<ProductPage>>;
    async fn product_detail(&self, id: &str) -> Result<Response<Product>>;
    async fn update_product(&self, id: &str, body: &UpdateProductBody)
        -> Result<Response<Product>>;
    async fn delete_product(&self, id: &str) -> Result<Response<Value>>;
    async fn patch_product_stock(&self, id: &str, quantity: u32) -> Result<Response<Product>>;
    async fn check_product_stock(&self, id: &str, quantity: u32) -> Result<Response<StockCheck>>;

    // Product variants
    async fn create_variant(&self, body: &CreateVariantBody) -> Result<Response<Variant>>;
    async fn list_variants(&self) -> Result<Response<Vec<VariantSummary>>>;
    async fn variants_by_product(&self, product_id: &str)
        -> Result<Response<Vec<VariantSummary>>>;
    async fn variant_sizes(&self, product_id: &str) -> Result<Response<Vec<String>>>;
    async fn variant_colors(
        &self,
        product_id: &str,
        size: Option<&str>,
    ) -> Result<Response<Vec<String>>>;
    async fn find_variant(
        &self,
        product_id: &str,
        size: Option<&str>,
        color: Option<&str>,
    ) -> Result<Response<Variant>>;
    async fn variant_detail(&self, id: &str) -> Result<Response<Variant>>;
    async fn update_variant(&self, id: &str, body: &UpdateVariantBody)
        -> Result<Response<Variant>>;
    async fn delete_variant(&self, id: &str) -> Result<Response<Value>>;
    async fn patch_variant_stock(&self, id: &str, quantity: u32) -> Result<Response<Variant>>;
    async fn check_variant_stock(&self, id: &str, quantity: u32) -> Result<Response<StockCheck>>;

    // Users
    async fn list_users(&self) -> Result<Response<UserListRes>>;
    async fn update_user(&self, id: &str, body: &UpdateUserBody) -> Result<Response<Value>>;
    async fn block_user(&self, id: &str, blocked: bool) -> Result<Response<Value>>;
}

// Implement the trait for the concrete ApiClient
#[async_trait]
impl AdminApi for ApiClient {
    async fn login(&self, body: &LoginRequest) -> Result<Response<AuthRes>> {
        api::auth::login(self, body).await
    }

    async fn register(&self, body: &RegisterRequest) -> Result<Response<AuthRes>> {
        api::auth::register(self, body).await
    }

    async fn logout(&self) -> Result<Response<LogoutRes>> {
        api::auth::logout(self).await
    }

    async fn slide_session(&self) -> Result<Response<AuthRes>> {
        api::auth::slide_session(self).await
    }

    async fn list_categories(&self) -> Result<Response<CategoryListRes>> {
        api::category::list(self).await
    }

    async fn category_detail(&self, id: &str) -> Result<Response<CategoryDetailRes>> {
        api::category::detail(self, id).await
    }

    async fn create_category(&self, body: &CategoryBody) -> Result<Response<CategoryDetailRes>> {
        api::category::create(self, body).await
    }

    async fn update_category(
        &self,
        id: &str,
        body: &CategoryBody,
    ) -> Result<Response<CategoryDetailRes>> {
        api::category::update(self, id, body).await
    }

    async fn delete_category(&self, id: &str) -> Result<Response<DeleteCategoryRes>> {
        api::category::remove(self, id).await
    }

    async fn list_coupons(&self) -> Result<Response<CouponListRes>> {
        api::coupon::list(self).await
    }

    async fn coupon_detail(&self, id: &str) -> Result<Response<CouponRes>> {
        api::coupon::detail(self, id).await
    }

    async fn create_coupon(&self, body: &CouponBody) -> Result<Response<CouponRes>> {
        api::coupon::create(self, body).await
    }

    async fn update_coupon(&self, id: &str, body: &CouponBody) -> Result<Response<CouponRes>> {
        api::coupon::update(self, id, body).await
    }

    async fn delete_coupon(&self, id: &str) -> Result<Response<Value>> {
        api::coupon::remove(self, id).await
    }

    async fn list_orders(&self) -> Result<Response<OrderListRes>> {
        api::order::list(self).await
    }

    async fn order_detail(&self, id: &str) -> Result<Response<OrderRes>> {
        api::order::detail(self, id).await
    }

    async fn update_order_status(
        &self,
        id: &str,
        body: &UpdateOrderStatusBody,
    ) -> Result<Response<Value>> {
        api::order::update_status(self, id, body).await
    }

    async fn delete_order(&self, id: &str) -> Result<Response<Value>> {
        api::order::remove(self, id).await
    }

    async fn create_product(&self, body: &CreateProductBody) -> Result<Response<Product>> {
        api::product::create(self, body).await
    }

    async fn list_products(&self, query: &ProductListQuery) -> Result<Response<ProductPage>> {
        api::product::list(self, query).await
    }

    async fn product_detail(&self, id: &str) -> Result<Response<Product>> {
        api::product::detail(self, id).await
    }

    async fn update_product(
        &self,
        id: &str,
        body: &UpdateProductBody,
    ) -> Result<Response<Product>> {
        api::product::update(self, id, body).await
    }

    async fn delete_product(&self, id: &str) -> Result<Response<Value>> {
        api::product::remove(self, id).await
    }

    async fn patch_product_stock(&self, id: &str, quantity: u32) -> Result<Response<Product>> {
        api::product::patch_stock(self, id, quantity).await
    }

    async fn check_product_stock(&self, id: &str, quantity: u32) -> Result<Response<StockCheck>> {
        api::product::check_stock(self, id, quantity).await
    }

    async fn create_variant(&self, body: &CreateVariantBody) -> Result<Response<Variant>> {
        api::variant::create(self, body).await
    }

    async fn list_variants(&self) -> Result<Response<Vec<VariantSummary>>> {
        api::variant::list(self).await
    }

    async fn variants_by_product(
        &self,
        product_id: &str,
    ) -> Result<Response<Vec<VariantSummary>>> {
        api::variant::list_by_product(self, product_id).await
    }

    async fn variant_sizes(&self, product_id: &str) -> Result<Response<Vec<String>>> {
        api::variant::sizes(self, product_id).await
    }

    async fn variant_colors(
        &self,
        product_id: &str,
        size: Option<&str>,
    ) -> Result<Response<Vec<String>>> {
        api::variant::colors(self, product_id, size).await
    }

    async fn find_variant(
        &self,
        product_id: &str,
        size: Option<&str>,
        color: Option<&str>,
    ) -> Result<Response<Variant>> {
        api::variant::find_by_attributes(self, product_id, size, color).await
    }

    async fn variant_detail(&self, id: &str) -> Result<Response<Variant>> {
        api::variant::detail(self, id).await
    }

    async fn update_variant(
        &self,
        id: &str,
        body: &UpdateVariantBody,
    ) -> Result<Response<Variant>> {
        api::variant::update(self, id, body).await
    }

    async fn delete_variant(&self, id: &str) -> Result<Response<Value>> {
        api::variant::remove(self, id).await
    }

    async fn patch_variant_stock(&self, id: &str, quantity: u32) -> Result<Response<Variant>> {
        api::variant::patch_stock(self, id, quantity).await
    }

    async fn check_variant_stock(&self, id: &str, quantity: u32) -> Result<Response<StockCheck>> {
        api::variant::check_stock(self, id, quantity).await
    }

    async fn list_users(&self) -> Result<Response<UserListRes>> {
        api::user::list(self).await
    }

    async fn update_user(&self, id: &str, body: &UpdateUserBody) -> Result<Response<Value>> {
        api::user::update(self, id, body).await
    }

    async fn block_user(&self, id: &str, blocked: bool) -> Result<Response<Value>> {
        api::user::block(self, id, blocked).await
    }
}
