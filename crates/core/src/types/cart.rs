//! Cart line items.
//!
//! A cart line is the denormalized slice of a product that checkout needs,
//! plus a quantity. The cart aggregate itself (items + derived total) lives
//! in the storefront crate; the line type is shared because submitted orders
//! embed a snapshot of it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::product::Product;

/// A single line in a cart: one product with a positive quantity.
///
/// Identity is the product id; a cart holds at most one line per product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: ProductId,
    pub title: String,
    pub price: Decimal,
    pub image: String,
    pub quantity: u32,
}

impl CartLine {
    /// Create a line for a product with the given quantity.
    #[must_use]
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity,
        }
    }

    /// The line subtotal: price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let line = CartLine {
            id: ProductId::new(1),
            title: "Organic Coffee Beans".to_string(),
            price: Decimal::new(2499, 2),
            image: String::new(),
            quantity: 3,
        };
        assert_eq!(line.line_total(), Decimal::new(7497, 2));
    }

    #[test]
    fn test_cart_line_wire_format() {
        let line = CartLine {
            id: ProductId::new(4),
            title: "Vintage Leather Wallet".to_string(),
            price: Decimal::new(7999, 2),
            image: "https://example.com/wallet.jpg".to_string(),
            quantity: 1,
        };
        let json = serde_json::to_value(&line).expect("serialize");
        assert_eq!(json["id"], serde_json::json!(4));
        assert_eq!(json["quantity"], serde_json::json!(1));
    }
}
