//! # Backend API Client Module
//!
//! HTTP client for communicating with the Storefront backend REST API.
//! Handles authentication (with one-shot token refresh) and all admin
//! resources.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - ApiClient, session headers, refresh-and-retry core
//! ├── auth.rs     - Login, registration, logout, session slide
//! ├── category.rs - Category CRUD
//! ├── coupon.rs   - Coupon CRUD
//! ├── order.rs    - Order listing and status transitions
//! ├── product.rs  - Product CRUD, pagination, stock operations
//! ├── variant.rs  - Product variant CRUD and attribute lookups
//! └── user.rs     - User administration
//! ```

pub mod auth;
pub mod category;
pub mod client;
pub mod coupon;
pub mod order;
pub mod product;
pub mod user;
pub mod variant;

pub use client::{ApiClient, FormData, RequestBody, RequestOptions, Response};
pub use product::ProductListQuery;
