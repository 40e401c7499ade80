//! HTTP route handlers for the catalog/order service.

pub mod categories;
pub mod checkout;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::ApiState;

/// Build the `/api` router.
pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/products", get(products::list).post(products::create))
        .route(
            "/products/{id}",
            get(products::get_one)
                .put(products::update)
                .delete(products::remove),
        )
        .route("/categories", get(categories::list).post(categories::create))
        .route(
            "/categories/{id}",
            put(categories::update).delete(categories::remove),
        )
        .route("/checkout", post(checkout::submit))
        .route("/orders", get(orders::list))
        .route(
            "/orders/{id}",
            get(orders::get_one)
                .put(orders::update)
                .delete(orders::remove),
        )
}

/// Wire shape for delete acknowledgments.
#[derive(Debug, serde::Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}
