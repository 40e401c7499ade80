//! Catalog route handlers.
//!
//! Thin JSON wrappers over the resilient catalog client. These handlers
//! inherit the client's no-fail contract: listing endpoints always answer
//! with data (remote or fallback), and the only error a caller can see is a
//! 404 for an id unknown to every data source.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use copperleaf_core::{Category, Product, ProductId};

use crate::catalog::DataSource;
use crate::error::Result;
use crate::state::AppState;

/// Query parameters for the product listing.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Optional category label filter.
    pub category: Option<String>,
}

/// Product listing response.
#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
    pub source: DataSource,
}

/// Product detail response.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub product: Product,
    pub source: DataSource,
}

/// Category listing response.
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
    pub source: DataSource,
}

/// List products, optionally filtered by category label.
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<ProductsResponse> {
    let sourced = state.catalog().fetch_products().await;

    let products = match query.category {
        Some(category) => sourced
            .data
            .into_iter()
            .filter(|product| product.category == category)
            .collect(),
        None => sourced.data,
    };

    Json(ProductsResponse {
        products,
        source: sourced.source,
    })
}

/// Show a single product.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ProductResponse>> {
    let sourced = state.catalog().fetch_product(ProductId::new(id)).await?;

    Ok(Json(ProductResponse {
        product: sourced.data,
        source: sourced.source,
    }))
}

/// List categories.
#[instrument(skip(state))]
pub async fn categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    let sourced = state.catalog().fetch_categories().await;

    Json(CategoriesResponse {
        categories: sourced.data,
        source: sourced.source,
    })
}
