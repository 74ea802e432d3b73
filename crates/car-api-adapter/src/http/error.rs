/*
[INPUT]:  Error sources (transport, HTTP status, serialization, URL, query and path shape)
[OUTPUT]: One error type surfaced unchanged by every API operation
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the car API adapter
#[derive(Error, Debug)]
pub enum CarApiError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-2xx status; body kept verbatim
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Query input is not a key/value mapping
    #[error("Invalid query parameters: {0}")]
    InvalidQuery(String),

    /// Path segment would be collapsed by URL normalization
    #[error("Invalid path segment: {0:?}")]
    InvalidPath(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CarApiError {
    /// Create a status error from a response status and its raw body
    pub fn status_error(status: StatusCode, body: impl Into<String>) -> Self {
        CarApiError::Status {
            status: status.as_u16(),
            body: body.into(),
        }
    }

    /// HTTP status code, if the server produced one
    pub fn status(&self) -> Option<u16> {
        match self {
            CarApiError::Status { status, .. } => Some(*status),
            CarApiError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if the request timed out
    pub fn is_timeout(&self) -> bool {
        matches!(self, CarApiError::Http(err) if err.is_timeout())
    }

    /// Check if the backend rejected the caller's credentials
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}

/// Result type alias for car API operations
pub type Result<T> = std::result::Result<T, CarApiError>;
