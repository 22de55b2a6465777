//! # Common Error Types
//!
//! Consolidated error handling for the dashboard client.
//!
//! ## Error Categories
//!
//! - **Http**: the backend answered with 400, 401 (after the refresh attempt),
//!   or a 5xx status; carries the status and the parsed response payload
//! - **Network**: the request never produced a response (connection refused,
//!   timeout, DNS failure)
//! - **Encode**/**Decode**: a request body could not be serialized, or a
//!   response payload did not match the type the caller asked for
//!
//! Statuses outside the raising set (403, 404, 409, ...) are not errors; they
//! come back to the caller inside
//! [`Response`](crate::services::api::Response).

use serde_json::Value;
use thiserror::Error;

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Error raised by the API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend rejected the call with 400, 401, or a 5xx status.
    ///
    /// The display message prefers the payload's `message` field, falling
    /// back to a generic label when the payload carries none.
    #[error("{}", http_error_message(.status, .payload))]
    Http {
        /// Final HTTP status after the single refresh-and-retry attempt.
        status: u16,
        /// Parsed response payload, empty object when the body was not JSON.
        payload: Value,
    },

    /// The request could not be delivered at the transport level.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request body could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response payload did not match the requested type.
    #[error("failed to decode response payload: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ApiError {
    /// HTTP status attached to the error, when the backend produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn http_error_message(status: &u16, payload: &Value) -> String {
    match payload.get("message").and_then(Value::as_str) {
        Some(message) => message.to_string(),
        None => format!("HTTP error {}", status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_prefers_payload_message() {
        let error = ApiError::Http {
            status: 400,
            payload: serde_json::json!({"status": 400, "message": "Ten danh muc la bat buoc"}),
        };
        assert_eq!(error.to_string(), "Ten danh muc la bat buoc");
        assert_eq!(error.status(), Some(400));
    }

    #[test]
    fn test_http_error_without_message() {
        let error = ApiError::Http {
            status: 502,
            payload: serde_json::json!({}),
        };
        assert_eq!(error.to_string(), "HTTP error 502");
    }
}
