//! Error types for calls against the Quizzer service.

use thiserror::Error;

/// Errors that can occur while talking to the service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Base URL is not an absolute http(s) URL
    #[error("Invalid base URL '{url}'")]
    InvalidBaseUrl { url: String },

    /// Failed to build the HTTP client
    #[error("Failed to initialise HTTP client: {source}")]
    ClientInit {
        #[source]
        source: reqwest::Error,
    },

    /// Transport failure (DNS, refused connection, reset)
    #[error("Connection to '{url}' failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured timeout
    #[error("Request to '{url}' timed out after {duration}s")]
    Timeout { url: String, duration: u64 },

    /// Service answered with a non-success status
    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Unexpected response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// Short label for display in the UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::InvalidBaseUrl { .. } | ApiError::ClientInit { .. } => {
                "Client is misconfigured"
            }
            ApiError::Connection { .. } => "Cannot reach the server",
            ApiError::Timeout { .. } => "Server did not answer in time",
            ApiError::Status { status: 401, .. } | ApiError::Status { status: 403, .. } => {
                "Not authorised"
            }
            ApiError::Status { status: 404, .. } => "Not found",
            ApiError::Status { .. } => "Request rejected by the server",
            ApiError::Decode { .. } => "Unexpected response from the server",
        }
    }

    /// HTTP status for `Status` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
