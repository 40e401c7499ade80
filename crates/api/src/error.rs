//! Unified error handling with Sentry integration.
//!
//! All endpoints answer errors as a JSON object with a human-readable
//! `message` field and a non-2xx status code, matching the wire contract the
//! storefront client expects.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type for the API service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Missing or wrong admin token.
    #[error("Unauthorized")]
    Unauthorized,

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        assert_eq!(ApiError::NotFound("Product").to_string(), "Product not found");
        assert_eq!(
            ApiError::BadRequest("missing field".to_string()).to_string(),
            "Bad request: missing field"
        );
    }

    #[test]
    fn test_api_error_status_codes() {
        fn get_status(err: ApiError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(get_status(ApiError::NotFound("Product")), StatusCode::NOT_FOUND);
        assert_eq!(get_status(ApiError::Unauthorized), StatusCode::UNAUTHORIZED);
        assert_eq!(
            get_status(ApiError::BadRequest("x".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(ApiError::Internal("x".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
