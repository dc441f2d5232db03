//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use campushub_core::error::{AppError, ErrorKind};

/// Wrapper turning [`AppError`] into an Axum response.
///
/// Handlers return `Result<_, ApiError>`; the `From` impl lets `?`
/// propagate any `AppError` directly.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Human-readable message.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;

        let (status, message) = match err.kind {
            ErrorKind::Validation | ErrorKind::Duplicate => {
                (StatusCode::BAD_REQUEST, err.message.clone())
            }
            ErrorKind::Authentication => (StatusCode::UNAUTHORIZED, err.message.clone()),
            ErrorKind::Authorization => (StatusCode::FORBIDDEN, err.message.clone()),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, err.message.clone()),
            // Dependency failures: log the detail, hand the client an
            // opaque message.
            _ => {
                tracing::error!(kind = %err.kind, error = %err, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server error".to_string(),
                )
            }
        };

        (status, Json(ApiErrorResponse { message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        ApiError(err).into_response().status()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_of(AppError::validation("missing")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::duplicate("Student already exists")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::authentication("Not authenticated")),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(AppError::authorization("no")),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_of(AppError::not_found("Resource not found")),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(AppError::database("connection reset")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
