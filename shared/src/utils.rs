//! # Shared Utility Functions
//!
//! Helpers used by both the API client and consumers of the DTOs.
//!
//! ## Path Normalization
//!
//! [`normalize_path`] strips a single leading slash so `/auth/login` and
//! `auth/login` compare equal when matching session-affecting endpoints.
//!
//! ## JWT Claim Inspection
//!
//! [`has_authority`] and [`is_admin`] look inside an access token's claim set
//! without verifying the signature. Verification belongs to the backend; the
//! client only reads claims to decide which screens to offer.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

/// Strip a single leading `/` from an API path.
///
/// # Examples
///
/// ```rust
/// use shared::utils::normalize_path;
///
/// assert_eq!(normalize_path("/auth/login"), "auth/login");
/// assert_eq!(normalize_path("auth/login"), "auth/login");
/// ```
pub fn normalize_path(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

/// Decode the claim document from a JWT without verifying the signature.
///
/// Returns `None` for anything that is not a three-segment token with a
/// base64url JSON payload.
fn token_claims(token: &str) -> Option<serde_json::Value> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Check whether a JWT carries the given entry in its `authorities` claim.
///
/// Malformed tokens and tokens without an `authorities` claim return `false`.
pub fn has_authority(token: &str, authority: &str) -> bool {
    let Some(claims) = token_claims(token) else {
        return false;
    };
    claims
        .get("authorities")
        .and_then(|value| value.as_array())
        .map(|authorities| authorities.iter().any(|entry| entry.as_str() == Some(authority)))
        .unwrap_or(false)
}

/// Check whether a JWT carries `ROLE_ADMIN`.
pub fn is_admin(token: &str) -> bool {
    has_authority(token, "ROLE_ADMIN")
}
