//! Unified error handling.
//!
//! Provides a unified `AppError` type mapped onto the three-valued error
//! taxonomy of the wishlist contract: invalid-argument, conflict, and
//! not-found. All route handlers return `Result<T, AppError>`; failures are
//! surfaced immediately as the corresponding response status, nothing is
//! retried internally.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::store::StoreError;

/// Application-level error type for the wishlist service.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad request from client (unresolvable owner, invalid caller headers).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Resource identifier already in use.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateWishlist(id) => {
                Self::Conflict(format!("wishlist '{id}' already exists"))
            }
            StoreError::Poisoned => Self::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Internal(_)) {
            tracing::error!(error = %self, "Request error");
        }

        let status = match &self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Internal(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use wishlist_core::WishlistId;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("wishlist 'wl-123'".to_string());
        assert_eq!(err.to_string(), "Not found: wishlist 'wl-123'");

        let err = AppError::BadRequest("unknown owner".to_string());
        assert_eq!(err.to_string(), "Bad request: unknown owner");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            let response = err.into_response();
            response.status()
        }

        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Conflict("test".to_string())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_duplicate_store_error_maps_to_conflict() {
        let err: AppError = StoreError::DuplicateWishlist(WishlistId::new("wl-1")).into();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[test]
    fn test_internal_error_message_is_hidden() {
        let response = AppError::Internal("lock poisoned".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
