//! Copperleaf Catalog API library.
//!
//! This crate provides the catalog/order service as a library so the binary
//! and tests boot the same router: an in-memory document store, the public
//! read/checkout surface, and the token-gated admin CRUD surface.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod store;

use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use state::ApiState;

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Build the complete catalog service application.
///
/// The JSON surface is nested under `/api`; CORS is permissive because the
/// storefront may be served from a different origin.
pub fn app(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", routes::router())
        .layer(axum::middleware::from_fn(
            middleware::request_id_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use secrecy::SecretString;
    use tower::ServiceExt;

    use crate::config::ApiConfig;
    use crate::store::DocumentStore;

    fn test_config(admin_token: Option<&str>) -> ApiConfig {
        ApiConfig {
            host: std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
            port: 0,
            admin_token: admin_token.map(SecretString::from),
            sentry_dsn: None,
        }
    }

    fn request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = app(ApiState::new(test_config(None), DocumentStore::seeded()));
        let response = app.oneshot(request("GET", "/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_products_are_public() {
        let app = app(ApiState::new(test_config(None), DocumentStore::seeded()));
        let response = app.oneshot(request("GET", "/api/products")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let products: Vec<serde_json::Value> = serde_json::from_slice(&body).unwrap();
        assert_eq!(products.len(), 8);
        assert_eq!(products[0]["title"], "Premium Wireless Headphones");
        assert_eq!(products[0]["inStock"], true);
    }

    #[tokio::test]
    async fn test_missing_product_is_404() {
        let app = app(ApiState::new(test_config(None), DocumentStore::seeded()));
        let response = app
            .oneshot(request("GET", "/api/products/9999"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(error["message"], "Product not found");
    }

    #[tokio::test]
    async fn test_admin_route_requires_token_when_configured() {
        let token = "kP2mX9rT4wQ8nL6vB3cJ";
        let app = app(ApiState::new(
            test_config(Some(token)),
            DocumentStore::seeded(),
        ));

        let response = app
            .clone()
            .oneshot(request("GET", "/api/orders"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let authed = Request::builder()
            .method("GET")
            .uri("/api/orders")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(authed).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_admin_route_is_open_without_configured_token() {
        let app = app(ApiState::new(test_config(None), DocumentStore::seeded()));
        let response = app.oneshot(request("GET", "/api/orders")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_checkout_round_trip() {
        let app = app(ApiState::new(test_config(None), DocumentStore::seeded()));
        let body = serde_json::json!({
            "customerInfo": {
                "name": "Ada",
                "email": "ada@example.com",
                "address": "1 Analytical Way"
            },
            "cartItems": [{
                "id": 1,
                "title": "Premium Wireless Headphones",
                "price": "299.99",
                "image": "",
                "quantity": 1
            }],
            "total": "299.99"
        });
        let request = Request::builder()
            .method("POST")
            .uri("/api/checkout")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let confirmation: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(confirmation["success"], true);
        assert_eq!(confirmation["message"], "Order placed successfully!");
        assert_eq!(confirmation["orderId"].as_str().unwrap().len(), 9);
        assert!(confirmation.get("simulated").is_none());
    }
}
