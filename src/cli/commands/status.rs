//! Combined status lookup

use anyhow::Context as _;
use chatter::ApiError;
use chatter::core::services::StatusReporter;
use chatter::output::CombinedStatusReport;

use super::Invocation;

/// Print the combined status of the invocation's commit
pub fn status(invocation: &Invocation) -> anyhow::Result<()> {
    let (settings, client) = invocation.connect()?;
    let sha = invocation.require_sha()?;

    let reporter = StatusReporter::new(client, settings.repository);
    // `None` means the reporter already logged why
    let status = reporter
        .get_status(sha)?
        .ok_or(ApiError::Unavailable {
            operation: "combined status",
        })
        .with_context(|| format!("No combined status available for {sha}"))?;

    CombinedStatusReport {
        sha: sha.to_string(),
        status,
    }
    .render(invocation.output_mode);
    Ok(())
}
