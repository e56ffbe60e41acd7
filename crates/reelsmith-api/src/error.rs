//! API error types and the error envelope.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use reelsmith_core::error::{AgentError, ValidationIssue};
use serde::Serialize;
use thiserror::Error;

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

/// The `error` half of the envelope: the full violation list for schema
/// failures, a single message for everything else.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    /// Every violation found, each naming a field path.
    Issues(Vec<ValidationIssue>),
    /// A plain message.
    Message(String),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Always `false`.
    pub success: bool,
    /// What went wrong.
    pub error: ErrorDetail,
}

/// HTTP-layer error that renders the `{success: false, error}` envelope.
/// The agent endpoint speaks exactly two status codes; every error is 400.
#[derive(Debug)]
pub struct ApiError(ErrorDetail);

impl ApiError {
    /// An error envelope carrying a plain message.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self(ErrorDetail::Message(message.into()))
    }
}

impl From<AgentError> for ApiError {
    fn from(err: AgentError) -> Self {
        match err {
            AgentError::Validation(issues) => Self(ErrorDetail::Issues(issues)),
            AgentError::Generation(message) => Self(ErrorDetail::Message(message)),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            success: false,
            error: self.0,
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
