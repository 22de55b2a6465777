//! # Storefront Admin Dashboard Client - Library Root
//!
//! HTTP client library for the Storefront e-commerce platform's admin surface.
//! Wraps every backend resource (categories, coupons, orders, products,
//! product variants, users) behind an authenticated client with transparent
//! access-token refresh.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              dashboard (this crate)                    │
//! ├────────────────────────────────────────────────────────┤
//! │  Reqwest       - HTTP client                            │
//! │  Tokio         - Async runtime                          │
//! │  shared        - DTO contract crate                     │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ HTTP (bearer token + device id + refresh token)
//!          ▼
//! ┌─────────────────┐
//! │  Backend API    │
//! │  (REST server)  │
//! └─────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **core**: configuration, typed errors, session store, navigation
//!   capability, and the [`crate::core::service::AdminApi`] trait for
//!   dependency injection
//! - **services**: the HTTP client itself plus one endpoint module per
//!   backend resource
//! - **logging**: console tracing setup
//!
//! ## Session Handling
//!
//! The client owns a [`crate::core::session::SessionStore`] holding the
//! access token, refresh token, and device id. A 401 response triggers
//! exactly one refresh against `/auth/refresh` followed by one retry of the
//! original request; a failed refresh asks the injected
//! [`crate::core::navigation::Navigator`] to send the user to the login
//! route. Concurrent calls racing an expired token each refresh independently
//! and the last refresh to complete wins the store.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dashboard::core::config::Config;
//! use dashboard::services::api::{category, ApiClient};
//!
//! # async fn run() -> dashboard::core::error::Result<()> {
//! let config = Config::from_env().expect("API_BASE_URL must be set");
//! let client = ApiClient::new(&config);
//!
//! let categories = category::list(&client).await?;
//! println!("{} categories", categories.payload.data.unwrap_or_default().len());
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod logging;
pub mod services;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::error::{ApiError, Result};
pub use crate::core::navigation::Navigator;
pub use crate::core::service::AdminApi;
pub use crate::core::session::SessionStore;
pub use crate::services::api::{ApiClient, FormData, Response};
