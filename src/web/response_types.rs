//! # Transport Error Types
//!
//! Error types specific to the HTTP transport and their response
//! conversions. Leverages thiserror for structured error handling and
//! Axum's IntoResponse for HTTP conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::error::RelayError;

/// Transport-level errors with HTTP status code mappings.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The envelope was rejected: unrecognized type or undecodable payload.
    #[error("Invalid request: {message}")]
    BadRequest { message: String },

    /// The relay is running without a registered dispatch callback.
    #[error("Event relay is not configured: {message}")]
    NotConfigured { message: String },

    /// The registered callback failed while processing the event.
    #[error("Event callback failed: {message}")]
    CallbackFailed { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// JSON body returned for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, error_code, message) = match self {
            ApiError::BadRequest { message } => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", message)
            }
            ApiError::NotConfigured { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "NOT_CONFIGURED",
                message,
            ),
            ApiError::CallbackFailed { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CALLBACK_FAILED",
                message,
            ),
            ApiError::Internal { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                message,
            ),
        };

        let body = Json(ErrorResponse {
            error: error_code.to_string(),
            message,
        });

        (status_code, body).into_response()
    }
}

impl From<RelayError> for ApiError {
    fn from(err: RelayError) -> Self {
        match err {
            RelayError::UnrecognizedEventType(_) | RelayError::PayloadDecode { .. } => {
                ApiError::BadRequest {
                    message: err.to_string(),
                }
            }
            RelayError::NoCallbackRegistered | RelayError::Configuration(_) => {
                ApiError::NotConfigured {
                    message: err.to_string(),
                }
            }
            RelayError::Callback(inner) => ApiError::CallbackFailed {
                message: inner.to_string(),
            },
            RelayError::Transport(inner) => ApiError::Internal {
                message: inner.to_string(),
            },
        }
    }
}
