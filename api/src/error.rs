//! HTTP error mapping
//!
//! Every failure leaves the handler as an [`ApiError`], which renders as a
//! bare status line with an empty body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::time::Duration;
use thiserror::Error;
use todo_core::TodoError;

/// Errors surfaced by the HTTP layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("TODO not found: {0}")]
    NotFound(i64),

    #[error("Request body exceeds {0} bytes")]
    PayloadTooLarge(usize),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal(_) | ApiError::Timeout(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TodoError> for ApiError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::NotFound(id) => ApiError::NotFound(id),
            TodoError::Validation(msg) => ApiError::BadRequest(msg),
            TodoError::Database(msg) => ApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal(cause) => tracing::error!(%cause, "Request failed"),
            ApiError::Timeout(deadline) => tracing::warn!(?deadline, "Request deadline exceeded"),
            ApiError::BadRequest(_) | ApiError::NotFound(_) | ApiError::PayloadTooLarge(_) => {
                tracing::debug!(error = %self, "Request rejected")
            }
        }

        self.status_code().into_response()
    }
}
