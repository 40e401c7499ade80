//! Product catalog endpoints.
//!
//! Reads are public; mutations require the admin bearer token when one is
//! configured. `PUT` answers with the updated document so callers can
//! reconcile their view from the response instead of re-fetching.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use copperleaf_core::{Product, ProductId};

use crate::{
    error::{ApiError, Result},
    middleware::RequireAdminToken,
    state::ApiState,
    store::{NewProduct, ProductPatch},
};

use super::DeleteResponse;

#[instrument(skip(state))]
pub async fn list(State(state): State<ApiState>) -> Json<Vec<Product>> {
    Json(state.store().list_products().await)
}

#[instrument(skip(state))]
pub async fn get_one(
    State(state): State<ApiState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>> {
    state
        .store()
        .get_product(id)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound("Product"))
}

#[instrument(skip(state, new))]
pub async fn create(
    _auth: RequireAdminToken,
    State(state): State<ApiState>,
    Json(new): Json<NewProduct>,
) -> (StatusCode, Json<Product>) {
    let product = state.store().insert_product(new).await;
    tracing::info!(product_id = %product.id, title = %product.title, "product created");
    (StatusCode::CREATED, Json(product))
}

#[instrument(skip(state, patch))]
pub async fn update(
    _auth: RequireAdminToken,
    State(state): State<ApiState>,
    Path(id): Path<ProductId>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<Product>> {
    state
        .store()
        .update_product(id, patch)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound("Product"))
}

#[instrument(skip(state))]
pub async fn remove(
    _auth: RequireAdminToken,
    State(state): State<ApiState>,
    Path(id): Path<ProductId>,
) -> Result<Json<DeleteResponse>> {
    if state.store().delete_product(id).await {
        Ok(Json(DeleteResponse { success: true }))
    } else {
        Err(ApiError::NotFound("Product"))
    }
}
