//! Build and test status reporting

use chatter::ApiError;
use chatter::core::models::{CommitStatus, StatusContext, StatusState};
use chatter::core::services::{StatusReporter, WriteOutcome};
use chatter::output::StatusReport;

use super::Invocation;

/// Post `state` under `context` for the invocation's commit
pub fn report(
    invocation: &Invocation,
    context: StatusContext,
    state: StatusState,
) -> anyhow::Result<()> {
    let (settings, client) = invocation.connect()?;
    let sha = invocation.require_sha()?;

    let description = invocation
        .description
        .clone()
        .or_else(|| context.default_description(state).map(String::from));

    let mut status = CommitStatus::new(context, state);
    if let Some(description) = description {
        status = status.with_description(description);
    }
    if let Some(url) = &invocation.url {
        status = status.with_target_url(url);
    }

    let reporter = StatusReporter::new(client, settings.repository);
    let outcome = reporter.set_status(sha, &status)?;

    let rejected_code = match outcome {
        WriteOutcome::Created => None,
        WriteOutcome::Rejected { code } => Some(code),
    };
    StatusReport::new(sha, &status, rejected_code).render(invocation.output_mode);

    match rejected_code {
        None => Ok(()),
        Some(code) => Err(ApiError::UnexpectedStatusCode {
            operation: "post status",
            code,
        }
        .into()),
    }
}
