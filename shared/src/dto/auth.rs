use serde::{Deserialize, Serialize};

use crate::dto::common::ApiEnvelope;

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// ISO 8601 date, e.g. `1990-04-21`
    pub birth_date: String,
    pub gender: Gender,
    pub address: String,
}

/// Gender options accepted by the registration endpoint
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Session credentials returned by login, register, and refresh
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SessionData {
    pub access_token: String,
    pub refresh_token: String,
    pub device_id: String,
}

/// Authentication response (login/register/refresh success)
pub type AuthRes = ApiEnvelope<SessionData>;

/// Logout response carries no data
pub type LogoutRes = ApiEnvelope<()>;
