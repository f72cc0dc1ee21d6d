//! API error types with JSON responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use notepad_core::ValidationErrors;
use notepad_store::StoreError;
use serde::Serialize;

use crate::summarizer::SummarizeError;

/// Message returned for any summarization failure.
pub const SUMMARIZE_FAILED: &str = "Failed to summarize note!";

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Required field missing or empty (400).
    #[error("{}", .0.first_message())]
    Validation(#[from] ValidationErrors),

    /// Request rejected before validation, e.g. unparseable JSON (400).
    #[error("{message}")]
    BadRequest {
        message: String,
        detail: Option<String>,
    },

    /// Store operation failed (500). The cause is reported to the client.
    #[error("{message}")]
    Store {
        message: &'static str,
        #[source]
        source: StoreError,
    },

    /// Summarization service call failed (500). The cause is only logged.
    #[error("{}", SUMMARIZE_FAILED)]
    Summarize(#[from] SummarizeError),
}

impl ApiError {
    /// Bad request with a message and no detail.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            detail: None,
        }
    }

    /// Wrap a store failure under `message`, for use with `map_err`.
    pub fn store(message: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| {
            tracing::error!(error = %source, "{}", message);
            Self::Store { message, source }
        }
    }

    /// Get the error code string for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) | Self::BadRequest { .. } => "BAD_REQUEST",
            Self::Store { .. } => "STORAGE_ERROR",
            Self::Summarize(_) => "SUMMARIZE_FAILED",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Store { .. } | Self::Summarize(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Detail exposed to the client in the `error` field, if any.
    fn detail(&self) -> Option<String> {
        match self {
            Self::BadRequest { detail, .. } => detail.clone(),
            Self::Store { source, .. } => Some(source.to_string()),
            Self::Validation(_) | Self::Summarize(_) => None,
        }
    }
}

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub message: String,
    /// Error code (e.g., "BAD_REQUEST", "STORAGE_ERROR").
    pub code: &'static str,
    /// Underlying failure, when it is safe to expose.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            message: self.to_string(),
            code: self.code(),
            error: self.detail(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
