//! Client error types

use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error; no response was observed
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Session not recognised by the server
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Session recognised but not allowed
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Any other non-success status, redirects included
    #[error("Server returned {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            401 => Self::Unauthorized(message),
            403 => Self::Forbidden(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }
}
