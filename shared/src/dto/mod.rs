//! # Data Transfer Objects (DTOs)
//!
//! All data structures used for communication between the admin dashboard and
//! the backend REST API.
//!
//! ## Module Organization
//!
//! - [`common`] - Response envelope and pagination types
//! - [`auth`] - Login, registration, and session DTOs
//! - [`category`] - Category management DTOs
//! - [`coupon`] - Coupon management DTOs
//! - [`order`] - Order management DTOs
//! - [`product`] - Product and product-variant DTOs
//! - [`user`] - User management DTOs
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json`:
//!
//! - **Field naming**: camelCase on the wire (`#[serde(rename_all = "camelCase")]`)
//! - **Optional request fields**: omitted when `None` using
//!   `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Enums**: serialize to SCREAMING_SNAKE_CASE strings, matching the
//!   backend's Java-style constants (`"SHIPPING"`, `"CANCEL_REQUEST"`, ...)
//! - **All types**: implement both `Serialize` and `Deserialize`

pub mod auth;
pub mod category;
pub mod common;
pub mod coupon;
pub mod order;
pub mod product;
pub mod user;

pub use auth::*;
pub use category::*;
pub use common::*;
pub use coupon::*;
pub use order::*;
pub use product::*;
pub use user::*;
