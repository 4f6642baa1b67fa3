//! Cliffhanger — API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cliffhanger_core::error::DomainError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
}

/// HTTP-layer error that implements `IntoResponse`.
#[derive(Debug)]
pub enum ApiError {
    /// A domain error from a command or query handler.
    Domain(DomainError),
    /// The choice route received a missing, malformed or unknown session id.
    InvalidSession,
    /// A session lookup used an id that cannot name any session.
    SessionNotFound,
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidSession => (StatusCode::BAD_REQUEST, "Invalid session".to_owned()),
            ApiError::SessionNotFound | ApiError::Domain(DomainError::SessionNotFound(_)) => {
                (StatusCode::NOT_FOUND, "Session not found".to_owned())
            }
            ApiError::Domain(DomainError::Validation(msg)) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Domain(DomainError::ConcurrencyConflict { .. }) => (
                StatusCode::CONFLICT,
                "Session was modified by another request".to_owned(),
            ),
            ApiError::Domain(err @ DomainError::Interpolation { .. }) => {
                error!(error = %err, "story template could not be filled");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Story generation failed".to_owned(),
                )
            }
            ApiError::Domain(err @ DomainError::Infrastructure(_)) => {
                error!(error = %err, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_owned(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
