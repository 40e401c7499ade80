//! Bearer-token extractor for the admin mutation endpoints.
//!
//! When `API_ADMIN_TOKEN` is configured, write operations on the catalog
//! and orders require `Authorization: Bearer <token>`. When no token is
//! configured the extractor is a pass-through, which keeps local
//! development and demos friction-free.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use secrecy::ExposeSecret;

use crate::{error::ApiError, state::ApiState};

/// Extractor that requires the admin bearer token on protected routes.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     _auth: RequireAdminToken,
///     State(state): State<ApiState>,
/// ) -> impl IntoResponse {
///     // only reached with a valid token (or in open demo mode)
/// }
/// ```
#[derive(Debug)]
pub struct RequireAdminToken;

impl FromRequestParts<ApiState> for RequireAdminToken {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ApiState,
    ) -> Result<Self, Self::Rejection> {
        let Some(expected) = state.config().admin_token.as_ref() else {
            // Open demo mode: no token configured, no gate
            return Ok(Self);
        };

        let presented = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        match presented {
            Some(token) if token == expected.expose_secret() => Ok(Self),
            _ => {
                tracing::warn!(path = %parts.uri.path(), "rejected admin request without a valid bearer token");
                Err(ApiError::Unauthorized)
            }
        }
    }
}
