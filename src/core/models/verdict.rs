//! Review verdicts

use std::fmt;

use serde::Serialize;

use super::comment::Comment;
use super::status::{CommitStatus, StatusContext, StatusState};

/// Whether a pull request has a qualifying sign-off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewState {
    /// No qualifying sign-off yet
    Pending,
    /// Signed off by someone other than the author
    Success,
}

impl ReviewState {
    /// Matching commit status state
    #[must_use]
    pub const fn status_state(self) -> StatusState {
        match self {
            Self::Pending => StatusState::Pending,
            Self::Success => StatusState::Success,
        }
    }
}

impl fmt::Display for ReviewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.status_state().as_str())
    }
}

/// Result of evaluating a pull request for sign-off
///
/// A `success` verdict always carries the comment that approved it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewVerdict {
    state: ReviewState,
    matching_comment: Option<Comment>,
    head_sha: String,
}

impl ReviewVerdict {
    /// Verdict for a pull request approved by `comment`
    #[must_use]
    pub fn approved(comment: Comment, head_sha: impl Into<String>) -> Self {
        Self {
            state: ReviewState::Success,
            matching_comment: Some(comment),
            head_sha: head_sha.into(),
        }
    }

    /// Verdict for a pull request still waiting on sign-off
    #[must_use]
    pub fn pending(head_sha: impl Into<String>) -> Self {
        Self {
            state: ReviewState::Pending,
            matching_comment: None,
            head_sha: head_sha.into(),
        }
    }

    /// Review state
    #[must_use]
    pub const fn state(&self) -> ReviewState {
        self.state
    }

    /// The approving comment, present only for `success`
    #[must_use]
    pub const fn matching_comment(&self) -> Option<&Comment> {
        self.matching_comment.as_ref()
    }

    /// Head commit of the pull request when it was evaluated
    #[must_use]
    pub fn head_sha(&self) -> &str {
        &self.head_sha
    }

    /// Whether the pull request is signed off
    #[must_use]
    pub const fn is_approved(&self) -> bool {
        matches!(self.state, ReviewState::Success)
    }

    /// The `code_review` status describing this verdict
    #[must_use]
    pub fn to_commit_status(&self) -> CommitStatus {
        let context = StatusContext::CodeReview;
        let state = self.state.status_state();
        let status = CommitStatus::new(context.clone(), state);
        match context.default_description(state) {
            Some(description) => status.with_description(description),
            None => status,
        }
    }
}
