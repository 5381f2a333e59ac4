// API Error Models

use crate::error::CheckerError;
use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::error;

/// Errors that fail a whole request
///
/// The cause is logged server side; the client only sees the reason phrase
/// of the status code.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Certificate discovery failed: {0}")]
    Locate(#[from] CheckerError),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Convert to HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Locate(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        error!("Request failed with {}: {}", status.as_u16(), self);

        let body = status.canonical_reason().unwrap_or_default();
        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            body,
        )
            .into_response()
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        ApiError::Internal(format!("Task join error: {}", err))
    }
}
