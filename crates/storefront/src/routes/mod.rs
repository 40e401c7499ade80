//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check (in main)
//!
//! # Catalog (proxied through the resilient client)
//! GET  /products               - Product listing (optional ?category= filter)
//! GET  /products/{id}          - Product detail
//! GET  /categories             - Category listing
//!
//! # Cart (session-scoped state machine)
//! GET    /cart                 - Current cart state
//! POST   /cart/items           - Add a product (by id)
//! PUT    /cart/items           - Set a line quantity
//! DELETE /cart/items/{id}      - Remove a line
//! POST   /cart/clear           - Empty the cart
//! POST   /cart/toggle          - Flip the cart-panel flag
//!
//! # Checkout
//! POST /checkout               - Validate, submit, clear cart
//! ```
//!
//! Catalog responses carry a `source` tag (`remote` or `fallback`) so a UI
//! can disclose degraded fidelity; cart mutations return the full new state.

pub mod cart;
pub mod checkout;
pub mod products;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

/// Build the storefront router.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Catalog routes
        .route("/products", get(products::list))
        .route("/products/{id}", get(products::show))
        .route("/categories", get(products::categories))
        // Cart routes
        .route("/cart", get(cart::show))
        .route("/cart/items", post(cart::add).put(cart::update))
        .route("/cart/items/{id}", delete(cart::remove))
        .route("/cart/clear", post(cart::clear))
        .route("/cart/toggle", post(cart::toggle))
        // Checkout
        .route("/checkout", post(checkout::submit))
}
