//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use portal_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorResponse {
    /// Human-readable message.
    pub error: String,
}

/// Wrapper giving [`AppError`] an HTTP representation.
///
/// Handlers return `Result<_, ApiError>` so domain errors propagate with
/// the ? operator.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, message) = match err.kind {
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, err.message),
            ErrorKind::Unauthorized => (StatusCode::UNAUTHORIZED, err.message),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, err.message),
            ErrorKind::Expired => (StatusCode::GONE, err.message),
            ErrorKind::Conflict => (StatusCode::CONFLICT, err.message),
            // Backend internals are logged but never exposed to clients.
            ErrorKind::Internal
            | ErrorKind::Database
            | ErrorKind::Storage
            | ErrorKind::Configuration
            | ErrorKind::Serialization => {
                tracing::error!(kind = %err.kind, error = %err.message, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ApiErrorResponse { error: message })).into_response()
    }
}
