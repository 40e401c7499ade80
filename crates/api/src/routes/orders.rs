//! Order administration endpoints.
//!
//! All order routes require the admin bearer token when one is configured;
//! shoppers never read orders back, they only get the checkout confirmation.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use copperleaf_core::Order;

use crate::{
    error::{ApiError, Result},
    middleware::RequireAdminToken,
    state::ApiState,
    store::OrderPatch,
};

use super::DeleteResponse;

#[instrument(skip(state))]
pub async fn list(_auth: RequireAdminToken, State(state): State<ApiState>) -> Json<Vec<Order>> {
    Json(state.store().list_orders().await)
}

#[instrument(skip(state))]
pub async fn get_one(
    _auth: RequireAdminToken,
    State(state): State<ApiState>,
    Path(order_id): Path<String>,
) -> Result<Json<Order>> {
    state
        .store()
        .get_order(&order_id)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound("Order"))
}

#[instrument(skip(state, patch))]
pub async fn update(
    _auth: RequireAdminToken,
    State(state): State<ApiState>,
    Path(order_id): Path<String>,
    Json(patch): Json<OrderPatch>,
) -> Result<Json<Order>> {
    state
        .store()
        .update_order(&order_id, patch)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound("Order"))
}

#[instrument(skip(state))]
pub async fn remove(
    _auth: RequireAdminToken,
    State(state): State<ApiState>,
    Path(order_id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    if state.store().delete_order(&order_id).await {
        Ok(Json(DeleteResponse { success: true }))
    } else {
        Err(ApiError::NotFound("Order"))
    }
}
