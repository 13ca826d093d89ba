//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::core::models::{CombinedStatus, CommitStatus, ReviewVerdict};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of posting a commit status
#[derive(Debug, Serialize)]
pub struct StatusReport {
    /// Commit the status was posted for
    pub sha: String,
    /// Status context
    pub context: String,
    /// Status state
    pub state: String,
    /// Description sent, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Link sent, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_url: Option<String>,
    /// Whether the service created the status
    pub created: bool,
    /// HTTP code when the service rejected the status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_code: Option<u16>,
}

impl StatusReport {
    /// Describe an attempt to post `status` for `sha`
    #[must_use]
    pub fn new(sha: &str, status: &CommitStatus, rejected_code: Option<u16>) -> Self {
        Self {
            sha: sha.to_string(),
            context: status.context.to_string(),
            state: status.state.to_string(),
            description: status.description.clone(),
            target_url: status.target_url.clone(),
            created: rejected_code.is_none(),
            rejected_code,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        let short_sha = short(&self.sha);
        match self.rejected_code {
            None => println!("Set {} status to {} on {}", self.context, self.state, short_sha),
            Some(code) => {
                println!("Failed to set {} status on {} (returned {})", self.context, short_sha, code);
            },
        }
        if let Some(description) = &self.description {
            println!("  {description}");
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of a code review evaluation
#[derive(Debug, Serialize)]
pub struct ReviewReport {
    /// Pull request number
    pub pull_request: u64,
    /// `success` or `pending`
    pub state: String,
    /// Head commit of the pull request
    pub head_sha: String,
    /// Commit the `code_review` status was posted to
    pub status_sha: String,
    /// Author id of the approving comment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    /// Body of the approving comment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Whether the service created the status
    pub status_created: bool,
}

impl ReviewReport {
    /// Describe `verdict` for pull request `pull_request`
    #[must_use]
    pub fn new(
        pull_request: u64,
        verdict: &ReviewVerdict,
        status_sha: &str,
        status_created: bool,
    ) -> Self {
        let comment = verdict.matching_comment();
        Self {
            pull_request,
            state: verdict.state().to_string(),
            head_sha: verdict.head_sha().to_string(),
            status_sha: status_sha.to_string(),
            approved_by: comment.map(|c| c.author.to_string()),
            comment: comment.map(|c| c.body.clone()),
            status_created,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        match (&self.approved_by, &self.comment) {
            (Some(author), Some(body)) => {
                println!("Pull request #{} signed off by {}", self.pull_request, author);
                println!("  \"{}\"", body.trim());
            },
            _ => println!("Pull request #{}: code review pending", self.pull_request),
        }
        if self.status_created {
            println!("Set code_review status to {} on {}", self.state, short(&self.status_sha));
        } else {
            println!("Failed to set code_review status on {}", short(&self.status_sha));
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Combined status of a commit
#[derive(Debug, Serialize)]
pub struct CombinedStatusReport {
    /// Commit that was queried
    pub sha: String,
    /// Status returned by the service
    pub status: CombinedStatus,
}

impl CombinedStatusReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("Status of {}: {}", short(&self.sha), self.status.state);
        if self.status.statuses.is_empty() {
            println!("  No statuses reported.");
            return;
        }
        for entry in &self.status.statuses {
            println!(
                "  [{}] {}{}",
                entry.state.as_str().to_uppercase(),
                entry.context,
                entry.description.as_deref().map(|d| format!(" - {d}")).unwrap_or_default()
            );
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// First seven characters of a commit SHA
fn short(sha: &str) -> &str {
    sha.get(..7).unwrap_or(sha)
}
