//! Orders and checkout payloads.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::cart::CartLine;
use super::customer::CustomerInfo;

/// Lifecycle status of an order.
///
/// Orders are created as `Processing`; the admin surface may move them
/// through the remaining states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

/// A submitted order as stored by the catalog/order service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Opaque short alphanumeric token; uniqueness is best-effort (random).
    pub order_id: String,
    pub customer_info: CustomerInfo,
    /// Snapshot of the cart lines at submission time.
    pub cart_items: Vec<CartLine>,
    pub total: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Checkout submission body (`POST /api/checkout`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub customer_info: CustomerInfo,
    pub cart_items: Vec<CartLine>,
    pub total: Decimal,
}

/// Acknowledgment of a submitted order.
///
/// `simulated` is absent on the wire when the confirmation came from the
/// server; the storefront sets it when it synthesizes a demo confirmation
/// because the service could not be reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub success: bool,
    pub order_id: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub simulated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::id::ProductId;

    #[test]
    fn test_order_status_wire_values() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Processing).expect("serialize"),
            r#""processing""#
        );
        let status: OrderStatus = serde_json::from_str(r#""shipped""#).expect("deserialize");
        assert_eq!(status, OrderStatus::Shipped);
    }

    #[test]
    fn test_server_confirmation_defaults_to_genuine() {
        // Wire shape the service actually sends: no `simulated` key at all.
        let confirmation: OrderConfirmation = serde_json::from_str(
            r#"{"success": true, "orderId": "k2j9x7q1m", "message": "Order placed successfully!"}"#,
        )
        .expect("deserialize");
        assert!(confirmation.success);
        assert!(!confirmation.simulated);
        assert_eq!(confirmation.order_id, "k2j9x7q1m");
    }

    #[test]
    fn test_simulated_flag_survives_roundtrip() {
        let confirmation = OrderConfirmation {
            success: true,
            order_id: "abc123def".to_string(),
            message: "demo".to_string(),
            simulated: true,
        };
        let json = serde_json::to_value(&confirmation).expect("serialize");
        assert_eq!(json["simulated"], serde_json::json!(true));
    }

    #[test]
    fn test_checkout_request_wire_format() {
        let request = CheckoutRequest {
            customer_info: CustomerInfo {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                address: "1 Analytical Way".to_string(),
            },
            cart_items: vec![CartLine {
                id: ProductId::new(2),
                title: "Organic Coffee Beans".to_string(),
                price: Decimal::new(2499, 2),
                image: String::new(),
                quantity: 2,
            }],
            total: Decimal::new(4998, 2),
        };
        let json = serde_json::to_value(&request).expect("serialize");
        assert!(json.get("customerInfo").is_some());
        assert!(json.get("cartItems").is_some());
        assert_eq!(json["total"], serde_json::json!("49.98"));
    }
}
