//! Pure relay handlers
//!
//! These handlers are HTTP-agnostic: they take the raw request body and
//! return `Result<T, RelayError>`. The relay only observes events; it never
//! evaluates reviews or posts statuses.

use crate::logging::Diagnostics;

use super::error::RelayError;
use super::types::{EventAck, WebhookEvent};

/// Body served on `GET` of the relay endpoint
pub const LIVENESS_BODY: &str = "chatter is listening";

/// Record an inbound webhook event and acknowledge it
///
/// `event_type` is the `X-GitHub-Event` header value, if any.
pub fn relay_event(
    body: &str,
    event_type: Option<&str>,
    diagnostics: &Diagnostics,
) -> Result<EventAck, RelayError> {
    if body.trim().is_empty() {
        return Err(RelayError::EmptyBody);
    }

    let event: WebhookEvent = serde_json::from_str(body)?;

    let issue_number = event.issue.map(|issue| issue.number);
    let comment_body = event.comment.and_then(|comment| comment.body);

    diagnostics.info(format_args!(
        "Received {} event (action: {})",
        event_type.unwrap_or("unknown"),
        event.action.as_deref().unwrap_or("none")
    ));
    match issue_number {
        Some(number) => diagnostics.info(format_args!("Issue number: {number}")),
        None => diagnostics.info(format_args!("Issue number: (none)")),
    }
    diagnostics.info(format_args!(
        "Comment body: {}",
        comment_body.as_deref().unwrap_or("(none)")
    ));

    Ok(EventAck {
        acknowledged: true,
        event: event_type.map(String::from),
        issue_number,
        comment_body,
    })
}
