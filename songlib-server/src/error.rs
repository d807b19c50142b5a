//! Error types for songlib-server

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::services::lyrics_client::LyricsApiError;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid request (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Request conflicts with existing data (409)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Song info lookup failed (500)
    #[error("Failed to get song info: {0}")]
    Lookup(#[from] LyricsApiError),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),

    /// songlib-common error
    #[error(transparent)]
    Common(#[from] songlib_common::Error),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        use songlib_common::Error as CommonError;

        let (status, error_code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            ApiError::Lookup(_) => (StatusCode::INTERNAL_SERVER_ERROR, "LOOKUP_FAILED"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ApiError::Common(err) => match err {
                CommonError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
                CommonError::InvalidInput(_) | CommonError::InvalidDate(_) => {
                    (StatusCode::BAD_REQUEST, "BAD_REQUEST")
                }
                CommonError::NoFieldsToUpdate => (StatusCode::BAD_REQUEST, "NO_FIELDS_TO_UPDATE"),
                CommonError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
                CommonError::Io(_) | CommonError::Config(_) | CommonError::Internal(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
                }
            },
        };

        let message = self.to_string();
        if status.is_server_error() {
            error!(code = error_code, "{}", message);
        } else {
            warn!(code = error_code, "{}", message);
        }

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
