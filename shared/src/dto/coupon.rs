use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dto::common::ApiEnvelope;

/// Discount target of a coupon.
///
/// Serialized as the wire field `type`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CouponKind {
    Shipping,
    Product,
}

/// Coupon as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub id: String,
    pub code: String,
    #[serde(rename = "type")]
    pub kind: CouponKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub discount: f64,
    pub min_order_value: f64,
    pub expired_at: DateTime<Utc>,
}

/// Body for creating or updating a coupon
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CouponBody {
    pub code: String,
    #[serde(rename = "type")]
    pub kind: CouponKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub discount: f64,
    pub min_order_value: f64,
    pub expired_at: DateTime<Utc>,
}

pub type CouponRes = ApiEnvelope<Coupon>;
pub type CouponListRes = ApiEnvelope<Vec<Coupon>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coupon_kind_uses_type_field() {
        let json = r#"{
            "id": "c1",
            "code": "FREESHIP",
            "type": "SHIPPING",
            "discount": 15000.0,
            "minOrderValue": 200000.0,
            "expiredAt": "2026-12-31T23:59:59Z"
        }"#;
        let coupon: Coupon = serde_json::from_str(json).unwrap();
        assert_eq!(coupon.kind, CouponKind::Shipping);
        assert_eq!(coupon.description, None);

        let value = serde_json::to_value(&coupon).unwrap();
        assert_eq!(value["type"], "SHIPPING");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_expired_at_round_trips_rfc3339() {
        let body = CouponBody {
            code: "SALE10".to_string(),
            kind: CouponKind::Product,
            description: Some("10% off".to_string()),
            discount: 10.0,
            min_order_value: 0.0,
            expired_at: "2026-06-01T00:00:00Z".parse().unwrap(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["expiredAt"], "2026-06-01T00:00:00Z");
    }
}
