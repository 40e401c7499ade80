//! Copperleaf Storefront library.
//!
//! This crate provides the storefront functionality as a library, allowing
//! it to be tested and reused: the cart state machine, the resilient catalog
//! client with bundled fallback data, and the JSON route surface.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use state::AppState;

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the catalog
/// service; the storefront is designed to work without it.
async fn health() -> &'static str {
    "ok"
}

/// Build the complete storefront application.
///
/// Includes the session layer and request-id middleware, so the returned
/// router is what the binary serves and what integration tests boot.
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer();

    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .layer(axum::middleware::from_fn(
            middleware::request_id_middleware,
        ))
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
