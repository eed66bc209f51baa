//! Error types for hateoas-links
//!
//! Parsing and link building never fail; invalid input degrades to defaults.
//! This error type covers the surrounding layers: configuration loading
//! (file read failures are reported as `Config`), request context
//! extraction and the CLI.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// The main error type for hateoas-links
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Request Errors
    // ============================================================================
    #[error("Request has no host (missing Host header and URI authority)")]
    MissingHost,

    #[error("Header '{name}' is not valid UTF-8")]
    InvalidHeader { name: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid header error
    pub fn invalid_header(name: impl Into<String>) -> Self {
        Self::InvalidHeader { name: name.into() }
    }

    /// HTTP status used when this error surfaces from an extractor
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::MissingHost | Error::InvalidHeader { .. } | Error::InvalidUrl(_) => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::debug!(%status, error = %self, "Rejecting request");
        let body = json!({
            "success": false,
            "error": self.to_string(),
        });
        (status, Json(body)).into_response()
    }
}

/// Result type alias for hateoas-links
pub type Result<T> = std::result::Result<T, Error>;
