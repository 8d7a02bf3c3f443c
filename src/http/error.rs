// src/http/error.rs
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use crate::error::TodoError;

/// Errors resolved into HTTP statuses at the handler boundary
#[derive(Debug)]
pub enum ApiError {
    /// No resolvable caller identity
    Unauthorized,
    BadRequest(String),
    /// Absent or owned by someone else
    NotFound,
    /// Corrupt ciphertext, storage failure or a crashed worker
    Internal,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl From<TodoError> for ApiError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::Validation(msg) => ApiError::BadRequest(msg),
            TodoError::NotFound => ApiError::NotFound,
            other => {
                error!(error = %other, "todo store failure");
                ApiError::Internal
            }
        }
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        error!(error = %err, "blocking store task failed");
        ApiError::Internal
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Todo not found".to_string()),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
