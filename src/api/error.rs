//! Relay failures and the JSON error body they turn into
//!
//! The relay only ever rejects a request it cannot route or an event it
//! cannot read, so every variant maps to 404 or 400.

use serde::Serialize;
use thiserror::Error;

/// Why the relay refused a request
#[derive(Debug, Error)]
pub enum RelayError {
    /// No handler for this method and path
    #[error("no route for {method} {path}")]
    UnknownRoute {
        /// Request method
        method: String,
        /// Request path without its query string
        path: String,
    },

    /// The request body could not be read off the connection
    #[error("failed to read request body: {0}")]
    UnreadableBody(#[from] std::io::Error),

    /// A `POST` arrived without an event
    #[error("empty event body")]
    EmptyBody,

    /// The event was not valid JSON
    #[error("invalid event JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl RelayError {
    /// HTTP status code for this failure
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::UnknownRoute { .. } => 404,
            Self::UnreadableBody(_) | Self::EmptyBody | Self::InvalidJson(_) => 400,
        }
    }

    /// Machine-readable code carried in the error body
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnknownRoute { .. } => "NOT_FOUND",
            Self::UnreadableBody(_) | Self::EmptyBody | Self::InvalidJson(_) => "BAD_REQUEST",
        }
    }
}

/// Serializable error data for JSON responses
#[derive(Debug, Serialize)]
pub struct ErrorData {
    /// Error code string
    pub code: &'static str,
    /// Human-readable message
    pub message: String,
}

impl From<&RelayError> for ErrorData {
    fn from(err: &RelayError) -> Self {
        Self {
            code: err.code(),
            message: err.to_string(),
        }
    }
}
