//! Integration tests for Copperleaf.
//!
//! Both services are libraries, so the tests boot real servers in-process on
//! ephemeral ports and talk to them over HTTP with `reqwest`. No external
//! processes or databases are required.
//!
//! # Test Categories
//!
//! - `catalog_resilience` - Fallback behavior of the storefront's catalog client
//! - `api_service` - Catalog/order service REST surface and admin gating
//! - `storefront_flow` - Full cart and checkout flows over a cookie session

use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use secrecy::SecretString;

use copperleaf_api::{config::ApiConfig, state::ApiState, store::DocumentStore};
use copperleaf_storefront::{
    config::{CatalogConfig, StorefrontConfig},
    state::AppState,
};

/// Serve an axum router on an ephemeral port, returning its base URL.
async fn spawn(app: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has a local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server error");
    });

    format!("http://{addr}")
}

/// Boot the catalog/order service with a seeded store.
///
/// Returns the base URL (no `/api` suffix).
pub async fn spawn_api(admin_token: Option<&str>) -> String {
    let config = ApiConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        admin_token: admin_token.map(SecretString::from),
        sentry_dsn: None,
    };
    let state = ApiState::new(config, DocumentStore::seeded());
    spawn(copperleaf_api::app(state)).await
}

/// Catalog client configuration pointed at `base_url`.
///
/// Timeouts are short so tests that exercise the failure paths finish
/// quickly; in-process servers answer well within them.
#[must_use]
pub fn catalog_config(base_url: &str) -> CatalogConfig {
    CatalogConfig {
        base_url: base_url.to_string(),
        read_timeout: Duration::from_millis(500),
        write_timeout: Duration::from_millis(500),
    }
}

/// Boot the storefront against the given catalog API base URL
/// (including the `/api` suffix).
pub async fn spawn_storefront(catalog_api_url: &str) -> String {
    let config = StorefrontConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        catalog: catalog_config(catalog_api_url),
        sentry_dsn: None,
    };
    let state = AppState::new(config);
    spawn(copperleaf_storefront::app(state)).await
}

/// A catalog API URL nothing listens on. Port 9 (discard) is unassigned on
/// loopback, so connections fail immediately.
#[must_use]
pub fn dead_catalog_url() -> String {
    "http://127.0.0.1:9/api".to_string()
}

/// HTTP client with a cookie store, so the storefront session persists
/// across requests the way a browser would carry it.
#[must_use]
pub fn session_client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}
