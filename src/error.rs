//! # Service Error Types
//!
//! Defines the error types for the task status service and their HTTP
//! response conversions. Leverages thiserror for structured error handling
//! and Axum's IntoResponse for HTTP conversion.
//!
//! A status lookup miss is NOT an error: the lookup returns a fallback
//! string instead. These types cover startup failures (configuration,
//! bind/serve) and requests rejected before the lookup runs.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Service errors with HTTP status code mappings
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Server error: {message}")]
    Server { message: String },

    #[error("Invalid request: {message}")]
    BadRequest { message: String },
}

impl ServiceError {
    /// Create a Configuration error with a custom message
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a Server error with a custom message
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server {
            message: message.into(),
        }
    }

    /// Create a BadRequest error with a custom message
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status_code, error_code, message) = match &self {
            ServiceError::Configuration { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIGURATION_ERROR",
                message.as_str(),
            ),

            ServiceError::Server { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "SERVER_ERROR",
                message.as_str(),
            ),

            ServiceError::BadRequest { message } => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", message.as_str())
            }
        };

        let error_response = json!({
            "error": {
                "code": error_code,
                "message": message
            }
        });

        (status_code, Json(error_response)).into_response()
    }
}

/// Convert listener/serve I/O errors to service errors
impl From<std::io::Error> for ServiceError {
    fn from(err: std::io::Error) -> Self {
        ServiceError::server(err.to_string())
    }
}

/// Convert TOML parse errors to service errors
impl From<toml::de::Error> for ServiceError {
    fn from(err: toml::de::Error) -> Self {
        ServiceError::configuration(err.to_string())
    }
}

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
