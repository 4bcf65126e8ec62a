//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use callblocker_domain::error::{CallBlockerError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`CallBlockerError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(CallBlockerError);

impl From<CallBlockerError> for ApiError {
    fn from(err: CallBlockerError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            CallBlockerError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            CallBlockerError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            CallBlockerError::Decode(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            CallBlockerError::Storage(err) => {
                tracing::error!(error = %err, details = ?err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
