//! Error taxonomy for remote repository operations
//!
//! Leaf operations (post/get) only surface [`ApiError::TransportFailure`] and
//! [`ApiError::MissingIdentifier`]; an unexpected HTTP code is logged and turned
//! into a sentinel value instead. Orchestrating operations that combine several
//! fetches upgrade those sentinels to [`ApiError::FetchFailed`].

use thiserror::Error;

use crate::core::models::ParseRepositoryError;

/// Errors raised while talking to the hosted repository service
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be made at all (network, TLS, auth handshake)
    #[error("transport failure during {operation}: {message}")]
    TransportFailure {
        /// Operation that was being attempted
        operation: &'static str,
        /// Underlying transport error
        message: String,
    },

    /// The service answered with a code outside the expected success set
    #[error("{operation} returned unexpected status code {code}")]
    UnexpectedStatusCode {
        /// Operation that was being attempted
        operation: &'static str,
        /// HTTP status code returned by the service
        code: u16,
    },

    /// A required identifier (SHA, issue number, token, ...) was not supplied
    #[error("missing required identifier: {0}")]
    MissingIdentifier(&'static str),

    /// A repository was supplied but is not `owner/name`
    #[error(transparent)]
    InvalidRepository(#[from] ParseRepositoryError),

    /// A fetch needed to build a review verdict did not succeed
    #[error("failed to fetch {operation} (returned {code})")]
    FetchFailed {
        /// What was being fetched
        operation: &'static str,
        /// HTTP status code returned by the service
        code: u16,
    },

    /// A lookup reached the service but produced nothing usable
    #[error("no {operation} available")]
    Unavailable {
        /// What was being looked up
        operation: &'static str,
    },

    /// The sign-off pattern is not a valid regular expression
    #[error("invalid sign-off pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A fetched document did not have the expected shape
    #[error("malformed {operation} response: {source}")]
    MalformedResponse {
        /// What was being decoded
        operation: &'static str,
        /// Decoding error
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Build a transport failure from any displayable error
    #[must_use]
    pub fn transport(operation: &'static str, err: impl std::fmt::Display) -> Self {
        Self::TransportFailure {
            operation,
            message: err.to_string(),
        }
    }

    /// Process exit code used by the CLI for this kind of failure
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::MissingIdentifier(_) | Self::InvalidRepository(_) => 2,
            Self::FetchFailed { .. }
            | Self::UnexpectedStatusCode { .. }
            | Self::Unavailable { .. } => 3,
            Self::TransportFailure { .. } => 4,
            Self::InvalidPattern(_) | Self::MalformedResponse { .. } => 5,
        }
    }
}
