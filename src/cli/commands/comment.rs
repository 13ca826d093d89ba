//! Comment posting

use chatter::ApiError;
use chatter::core::services::{StatusReporter, WriteOutcome};
use chatter::output::OperationResult;

use super::Invocation;

/// Post `message` as a comment on the invocation's issue
pub fn comment(invocation: &Invocation, message: &str) -> anyhow::Result<()> {
    let (settings, client) = invocation.connect()?;
    let issue = invocation.require_issue()?;

    let repository = settings.repository.to_string();
    let reporter = StatusReporter::new(client, settings.repository);
    match reporter.post_comment(issue, message)? {
        WriteOutcome::Created => {
            OperationResult {
                success: true,
                message: format!("Commented on {repository}#{issue}"),
            }
            .render(invocation.output_mode);
            Ok(())
        },
        WriteOutcome::Rejected { code } => {
            OperationResult {
                success: false,
                message: format!("Failed to comment on {repository}#{issue} (returned {code})"),
            }
            .render(invocation.output_mode);
            Err(ApiError::UnexpectedStatusCode {
                operation: "post comment",
                code,
            }
            .into())
        },
    }
}
