//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the admin dashboard client and the
//! Storefront backend API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Authentication and session DTOs
//!   - **[`dto::category`]**, **[`dto::coupon`]**, **[`dto::order`]**,
//!     **[`dto::product`]**, **[`dto::user`]**: resource DTOs
//!   - **[`dto::common`]**: the `{status, message, data}` response envelope
//!     and pagination types
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::normalize_path`]**: strip the leading slash from an API path
//!   - **[`utils::is_admin`]**: inspect JWT authority claims
//!
//! ## Wire Format
//!
//! The backend speaks camelCase JSON, so every DTO carries
//! `#[serde(rename_all = "camelCase")]`. Responses share the envelope shape:
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "status": 200,
//!   "message": "OK",
//!   "data": { "accessToken": "...", "refreshToken": "...", "deviceId": "..." }
//! }
//! ```
//!
//! A handful of endpoints (paginated product lists, variant size/color
//! lookups, stock checks) return bare payloads without the envelope; their
//! aliases in the resource modules reflect that.

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;
