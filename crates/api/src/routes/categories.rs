//! Category endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use copperleaf_core::{Category, CategoryId};

use crate::{
    error::{ApiError, Result},
    middleware::RequireAdminToken,
    state::ApiState,
    store::{CategoryPatch, NewCategory},
};

use super::DeleteResponse;

#[instrument(skip(state))]
pub async fn list(State(state): State<ApiState>) -> Json<Vec<Category>> {
    Json(state.store().list_categories().await)
}

#[instrument(skip(state, new))]
pub async fn create(
    _auth: RequireAdminToken,
    State(state): State<ApiState>,
    Json(new): Json<NewCategory>,
) -> (StatusCode, Json<Category>) {
    let category = state.store().insert_category(new).await;
    tracing::info!(category_id = %category.id, name = %category.name, "category created");
    (StatusCode::CREATED, Json(category))
}

#[instrument(skip(state, patch))]
pub async fn update(
    _auth: RequireAdminToken,
    State(state): State<ApiState>,
    Path(id): Path<CategoryId>,
    Json(patch): Json<CategoryPatch>,
) -> Result<Json<Category>> {
    state
        .store()
        .update_category(id, patch)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound("Category"))
}

#[instrument(skip(state))]
pub async fn remove(
    _auth: RequireAdminToken,
    State(state): State<ApiState>,
    Path(id): Path<CategoryId>,
) -> Result<Json<DeleteResponse>> {
    if state.store().delete_category(id).await {
        Ok(Json(DeleteResponse { success: true }))
    } else {
        Err(ApiError::NotFound("Category"))
    }
}
