use serde::{Deserialize, Serialize};

use crate::dto::common::ApiEnvelope;

/// Order lifecycle states
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    New,
    Confirmed,
    Preparing,
    Shipping,
    Delivered,
    Cancelled,
    CancelRequest,
}

/// Single line item within an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

/// Order as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub phone: String,
    pub address: String,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub status: OrderStatus,
    pub created_at: String,
}

/// Body for updating an order's status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderStatusBody {
    pub status: OrderStatus,
}

pub type OrderRes = ApiEnvelope<Order>;
pub type OrderListRes = ApiEnvelope<Vec<Order>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_wire_values() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::CancelRequest).unwrap(),
            r#""CANCEL_REQUEST""#
        );
        let status: OrderStatus = serde_json::from_str(r#""PREPARING""#).unwrap();
        assert_eq!(status, OrderStatus::Preparing);
    }
}
