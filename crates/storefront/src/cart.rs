//! Cart state machine.
//!
//! The cart is a small reducer over an aggregate of line items plus a derived
//! total. Every operation is synchronous and total: invalid input degrades to
//! a no-op, never an error, and the total is recomputed before the operation
//! returns, so items and total are never observably divergent.
//!
//! The aggregate is an explicit per-session value rather than ambient global
//! state: routes load it from the session, mutate it through the operations
//! here, and write it back (see `routes::cart`).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use copperleaf_core::{CartLine, Product, ProductId};

/// The cart aggregate: ordered line items, derived total, and a UI flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    /// Ordered line items, at most one per product id.
    pub items: Vec<CartLine>,
    /// Always equals the sum of `price * quantity` over `items`.
    pub total: Decimal,
    /// Whether the cart panel is open. Purely a UI-visibility flag.
    pub is_open: bool,
}

impl CartState {
    /// An empty, closed cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Add one unit of a product.
    ///
    /// If a line for the product already exists its quantity is incremented;
    /// otherwise a new line with quantity 1 is appended. Adding is permitted
    /// regardless of `in_stock`; callers that want to gate on stock do so at
    /// the UI layer.
    pub fn add(&mut self, product: &Product) {
        match self.items.iter_mut().find(|line| line.id == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.items.push(CartLine::from_product(product, 1)),
        }
        self.recompute_total();
    }

    /// Set the quantity of an existing line.
    ///
    /// A non-positive quantity removes the line entirely. Unknown ids are a
    /// silent no-op.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove(id);
            return;
        }
        if let Some(line) = self.items.iter_mut().find(|line| line.id == id) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            self.recompute_total();
        }
    }

    /// Remove the line for `id` if present; no-op otherwise.
    pub fn remove(&mut self, id: ProductId) {
        self.items.retain(|line| line.id != id);
        self.recompute_total();
    }

    /// Reset to an empty cart. Leaves `is_open` unchanged.
    pub fn clear(&mut self) {
        self.items.clear();
        self.recompute_total();
    }

    /// Flip the cart-panel visibility flag. Has no effect on items or total.
    pub const fn toggle_open(&mut self) {
        self.is_open = !self.is_open;
    }

    fn recompute_total(&mut self) {
        self.total = self.items.iter().map(CartLine::line_total).sum();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, price: Decimal) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            description: String::new(),
            price,
            image: String::new(),
            category: "Test".to_string(),
            rating: Decimal::new(45, 1),
            in_stock: true,
        }
    }

    #[test]
    fn test_add_distinct_products() {
        let mut cart = CartState::new();
        cart.add(&product(1, Decimal::new(1000, 2)));
        cart.add(&product(2, Decimal::new(500, 2)));
        cart.add(&product(3, Decimal::new(250, 2)));

        assert_eq!(cart.items.len(), 3);
        assert_eq!(cart.total, Decimal::new(1750, 2));
    }

    #[test]
    fn test_add_same_product_twice_merges_lines() {
        let mut cart = CartState::new();
        let p = product(1, Decimal::new(1000, 2));
        cart.add(&p);
        cart.add(&p);

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.total, Decimal::new(2000, 2));
    }

    #[test]
    fn test_update_quantity_zero_removes_line() {
        let mut cart = CartState::new();
        cart.add(&product(1, Decimal::new(1000, 2)));
        cart.update_quantity(ProductId::new(1), 0);

        assert!(cart.items.is_empty());
        assert_eq!(cart.total, Decimal::ZERO);
    }

    #[test]
    fn test_update_quantity_negative_removes_line() {
        let mut cart = CartState::new();
        cart.add(&product(1, Decimal::new(1000, 2)));
        cart.update_quantity(ProductId::new(1), -1);

        assert!(cart.items.is_empty());
        assert_eq!(cart.total, Decimal::ZERO);
    }

    #[test]
    fn test_update_quantity_unknown_id_is_noop() {
        let mut cart = CartState::new();
        cart.add(&product(1, Decimal::new(1000, 2)));
        let before = cart.clone();

        cart.update_quantity(ProductId::new(99), 5);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut cart = CartState::new();
        cart.add(&product(1, Decimal::new(1000, 2)));
        let before = cart.clone();

        cart.remove(ProductId::new(99));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_clear_resets_items_and_total_but_not_open_flag() {
        let mut cart = CartState::new();
        cart.add(&product(1, Decimal::new(1000, 2)));
        cart.add(&product(2, Decimal::new(500, 2)));
        cart.toggle_open();

        cart.clear();
        assert!(cart.items.is_empty());
        assert_eq!(cart.total, Decimal::ZERO);
        assert!(cart.is_open);
    }

    #[test]
    fn test_toggle_open_does_not_touch_items() {
        let mut cart = CartState::new();
        cart.add(&product(1, Decimal::new(1000, 2)));

        cart.toggle_open();
        assert!(cart.is_open);
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.total, Decimal::new(1000, 2));

        cart.toggle_open();
        assert!(!cart.is_open);
    }

    // Scenario from the checkout flow: A at $10, B at $5, then A set to 3.
    #[test]
    fn test_mixed_scenario_total() {
        let mut cart = CartState::new();
        let a = product(1, Decimal::new(1000, 2));
        let b = product(2, Decimal::new(500, 2));

        cart.add(&a);
        cart.add(&b);
        cart.update_quantity(a.id, 3);

        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.items[0].id, a.id);
        assert_eq!(cart.items[0].quantity, 3);
        assert_eq!(cart.items[1].id, b.id);
        assert_eq!(cart.items[1].quantity, 1);
        assert_eq!(cart.total, Decimal::new(3500, 2));
    }

    #[test]
    fn test_total_tracks_every_mutation() {
        let mut cart = CartState::new();
        let a = product(1, Decimal::new(999, 2));
        let b = product(2, Decimal::new(100, 0));

        cart.add(&a);
        assert_eq!(cart.total, Decimal::new(999, 2));
        cart.add(&b);
        assert_eq!(cart.total, Decimal::new(10999, 2));
        cart.update_quantity(b.id, 2);
        assert_eq!(cart.total, Decimal::new(20999, 2));
        cart.remove(a.id);
        assert_eq!(cart.total, Decimal::new(200, 0));
    }

    #[test]
    fn test_out_of_stock_product_can_still_be_added() {
        let mut cart = CartState::new();
        let mut p = product(1, Decimal::new(1000, 2));
        p.in_stock = false;

        cart.add(&p);
        assert_eq!(cart.items.len(), 1);
    }

    #[test]
    fn test_item_count_sums_quantities() {
        let mut cart = CartState::new();
        cart.add(&product(1, Decimal::ONE));
        cart.add(&product(1, Decimal::ONE));
        cart.add(&product(2, Decimal::ONE));
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_cart_state_serde_roundtrip() {
        let mut cart = CartState::new();
        cart.add(&product(1, Decimal::new(1995, 2)));
        cart.toggle_open();

        let json = serde_json::to_string(&cart).expect("serialize");
        let back: CartState = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, cart);
    }
}
