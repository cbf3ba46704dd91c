//! HTTP error handling and conversion.
//!
//! Player sentinels map onto bare status codes with an empty body. Request
//! validation failures carry a JSON [`ErrorResponse`]. Anything else is a 500
//! whose detail is logged and never returned to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use basketball_domain::PlayerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

/// API-specific error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Error from the player use case
    #[error(transparent)]
    Player(#[from] PlayerError),

    /// Request body or query failed its schema
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// Malformed request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Player(PlayerError::NotFound) => StatusCode::NOT_FOUND,
            Self::Player(PlayerError::TeamNotFound)
            | Self::Player(PlayerError::InvalidPageSize)
            | Self::Player(PlayerError::InvalidPageNumber) => StatusCode::BAD_REQUEST,
            Self::Player(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code for API response
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Player(PlayerError::NotFound) => "NOT_FOUND",
            Self::Player(err) if err.is_sentinel() => "BAD_REQUEST",
            Self::Player(_) | Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Standardized error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error code
    pub error: String,

    /// Human-readable message
    pub message: String,

    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Add details to the error response
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// The body returned for every unclassified failure
    pub fn internal() -> Self {
        Self::new("INTERNAL_ERROR", "An internal error occurred")
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();

        match self {
            Self::Player(err) if err.is_sentinel() => status.into_response(),
            Self::Validation(errors) => {
                let body = ErrorResponse::new(code, "Request validation failed");
                let body = match serde_json::to_value(&errors) {
                    Ok(details) => body.with_details(details),
                    Err(_) => body,
                };
                (status, Json(body)).into_response()
            }
            Self::BadRequest(message) => {
                (status, Json(ErrorResponse::new(code, message))).into_response()
            }
            Self::Player(err) => {
                error!(error = %err, source = ?std::error::Error::source(&err), "Request failed");
                (status, Json(ErrorResponse::internal())).into_response()
            }
            Self::Internal(message) => {
                error!(error = %message, "Request failed");
                (status, Json(ErrorResponse::internal())).into_response()
            }
        }
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
