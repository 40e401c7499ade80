//! Checkout endpoint.

use axum::{Json, extract::State};
use rust_decimal::Decimal;
use tracing::instrument;

use copperleaf_core::{CheckoutRequest, OrderConfirmation};

use crate::{
    error::{ApiError, Result},
    state::ApiState,
};

/// Confirmation message for orders the service actually recorded.
pub const CONFIRMATION_MESSAGE: &str = "Order placed successfully!";

/// Accept a checkout submission and record the order.
///
/// The submitted totals are taken at face value; the cart is priced by the
/// storefront and this service only archives what was submitted.
#[instrument(skip(state, checkout), fields(total = %checkout.total, items = checkout.cart_items.len()))]
pub async fn submit(
    State(state): State<ApiState>,
    Json(checkout): Json<CheckoutRequest>,
) -> Result<Json<OrderConfirmation>> {
    checkout
        .customer_info
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    if checkout.cart_items.is_empty() {
        return Err(ApiError::BadRequest("cart is empty".to_string()));
    }
    if checkout.total < Decimal::ZERO {
        return Err(ApiError::BadRequest("total cannot be negative".to_string()));
    }

    let order = state.store().create_order(checkout).await;
    tracing::info!(order_id = %order.order_id, "order recorded");

    Ok(Json(OrderConfirmation {
        success: true,
        order_id: order.order_id,
        message: CONFIRMATION_MESSAGE.to_string(),
        simulated: false,
    }))
}
