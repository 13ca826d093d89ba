//! Relay request and response types
//!
//! All types are framework-agnostic and can be used by any server.

use serde::{Deserialize, Serialize};

use super::error::{ErrorData, RelayError};

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Standard response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorData>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response
    #[must_use]
    pub fn error(err: &RelayError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ErrorData::from(err)),
        }
    }
}

// =============================================================================
// INBOUND EVENTS
// =============================================================================

/// Issue-comment webhook event, reduced to the fields the relay reads
///
/// Every field is optional: the relay acknowledges any JSON object and
/// records whatever it can find.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookEvent {
    /// Action that triggered the event (`created`, `edited`, ...)
    #[serde(default)]
    pub action: Option<String>,
    /// Issue (or pull request) the event concerns
    #[serde(default)]
    pub issue: Option<EventIssue>,
    /// Comment carried by the event
    #[serde(default)]
    pub comment: Option<EventComment>,
}

/// Issue part of a webhook event
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct EventIssue {
    /// Issue number
    pub number: u64,
}

/// Comment part of a webhook event
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventComment {
    /// Comment text
    #[serde(default)]
    pub body: Option<String>,
}

// =============================================================================
// RESPONSE DATA
// =============================================================================

/// Acknowledgment returned for every accepted event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventAck {
    /// Always `true` for an accepted event
    pub acknowledged: bool,
    /// Event type from the `X-GitHub-Event` header, when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    /// Issue number found in the event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_number: Option<u64>,
    /// Comment body found in the event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_body: Option<String>,
}
