//! Unified error handling with Sentry integration.
//!
//! Provides a unified `ApiError` type that captures internal errors to
//! Sentry before responding to the client. All route handlers return
//! `Result<T, ApiError>`, and every error renders as a
//! `{"message": string}` JSON body with the mapped status code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use aurelia_core::ErrorBody;

use crate::store::CartStoreError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Cart store operation failed.
    #[error("Cart error: {0}")]
    Cart(#[from] CartStoreError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // A dangling product reference means the store is corrupt; an add
        // against an unknown product is ordinary absence.
        let is_internal = matches!(
            self,
            Self::Internal(_) | Self::Cart(CartStoreError::DanglingProduct { .. })
        );

        // Capture server errors to Sentry
        if is_internal {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::NotFound(_) | Self::Cart(CartStoreError::UnknownProduct(_)) => {
                StatusCode::NOT_FOUND
            }
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Cart(CartStoreError::DanglingProduct { .. }) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Don't expose internal error details to clients
        let message = match self {
            Self::NotFound(message) | Self::BadRequest(message) => message,
            Self::Cart(CartStoreError::UnknownProduct(_)) => "Product not found".to_string(),
            Self::Cart(CartStoreError::DanglingProduct { .. }) | Self::Internal(_) => {
                "Internal server error".to_string()
            }
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use aurelia_core::{CartItemId, ProductId};

    use super::*;

    fn status_of(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::NotFound("Product not found".to_string());
        assert_eq!(err.to_string(), "Not found: Product not found");

        let err = ApiError::BadRequest("Invalid quantity".to_string());
        assert_eq!(err.to_string(), "Bad request: Invalid quantity");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            status_of(ApiError::NotFound("x".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(ApiError::BadRequest("x".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ApiError::Internal("x".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_unknown_product_maps_to_404() {
        let err = ApiError::from(CartStoreError::UnknownProduct(ProductId::new(9)));
        assert_eq!(status_of(err), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_dangling_product_is_internal_and_redacted() {
        let err = ApiError::from(CartStoreError::DanglingProduct {
            item: CartItemId::new(1),
            product: ProductId::new(9),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
