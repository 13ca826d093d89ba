//! Code review gate

use chatter::ApiError;
use chatter::core::services::{ReviewEvaluator, SignoffPattern, StatusReporter, WriteOutcome};
use chatter::output::ReviewReport;

use super::Invocation;

/// Evaluate the pull request and post its `code_review` status
///
/// The status goes to `--sha` when given, else to the pull request's head.
pub fn code_review(invocation: &Invocation) -> anyhow::Result<()> {
    let (settings, client) = invocation.connect()?;
    let issue = invocation.require_issue()?;
    let sha = invocation.sha.as_deref();

    let pattern = SignoffPattern::new(&settings.signoff_pattern).map_err(ApiError::from)?;
    let evaluator =
        ReviewEvaluator::new(&client, settings.repository.clone()).with_pattern(pattern);
    let verdict = evaluator.pull_request_reviewed_by(issue)?;

    let status_sha = sha.unwrap_or_else(|| verdict.head_sha()).to_string();
    if sha.is_some_and(|s| s != verdict.head_sha()) {
        log::warn!(
            "Requested commit {status_sha} is not the head of #{issue} ({})",
            verdict.head_sha()
        );
    }

    let reporter = StatusReporter::new(&client, settings.repository);
    let outcome = reporter.set_status(&status_sha, &verdict.to_commit_status())?;

    ReviewReport::new(issue, &verdict, &status_sha, outcome.is_created())
        .render(invocation.output_mode);

    match outcome {
        WriteOutcome::Created => Ok(()),
        WriteOutcome::Rejected { code } => Err(ApiError::UnexpectedStatusCode {
            operation: "post status",
            code,
        }
        .into()),
    }
}
