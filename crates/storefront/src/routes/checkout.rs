//! Checkout route handler.
//!
//! Control flow: validate customer info, snapshot the session cart, hand the
//! snapshot to the resilient catalog client, and clear the cart on any
//! confirmation. The client never fails order submission (it synthesizes a
//! simulated confirmation when the service is unreachable), so the cart is
//! always cleared once validation has passed.

use axum::{Json, extract::State};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use copperleaf_core::{CustomerInfo, OrderConfirmation};

use crate::error::{AppError, Result};
use crate::routes::cart::{load_cart, save_cart};
use crate::state::AppState;

/// Checkout form body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutBody {
    pub customer_info: CustomerInfo,
}

/// Submit the current cart as an order.
///
/// Rejects an empty cart and incomplete customer info with 400; otherwise
/// always succeeds with a confirmation, genuine or simulated.
#[instrument(skip(state, session, body))]
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<CheckoutBody>,
) -> Result<Json<OrderConfirmation>> {
    body.customer_info
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let mut cart = load_cart(&session).await?;
    if cart.items.is_empty() {
        return Err(AppError::BadRequest("cart is empty".to_string()));
    }

    let confirmation = state
        .catalog()
        .submit_order(body.customer_info, cart.items.clone(), cart.total)
        .await;

    // Any confirmation (remote or simulated) completes the purchase flow.
    cart.clear();
    save_cart(&session, &cart).await?;

    Ok(Json(confirmation))
}
