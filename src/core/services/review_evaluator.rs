//! Review evaluator - decides whether a pull request is signed off
//!
//! The sign-off policy:
//!
//! 1. Fetch the pull request (author, head SHA)
//! 2. Fetch up to [`COMMENT_PAGE_SIZE`] issue comments for the same number
//! 3. Scan them in the order the service returned them
//! 4. The first comment matching the pattern whose author is not the PR author
//!    approves the pull request; otherwise the review is pending
//!
//! Comments are never re-sorted by timestamp, so the outcome depends on the
//! service's ordering.
//!
//! Either fetch failing aborts the evaluation with [`ApiError::FetchFailed`]:
//! a verdict built from partial data would be misleading.

use serde::de::DeserializeOwned;

use crate::core::models::{Comment, PullRequest, RepositoryRef, ReviewVerdict};
use crate::core::ports::{ClientResponse, RepositoryClient};
use crate::core::services::signoff::{SignoffMatches, SignoffPattern};
use crate::error::ApiError;
use crate::logging::Diagnostics;

/// Number of comments requested when evaluating a pull request
pub const COMMENT_PAGE_SIZE: u32 = 100;

/// HTTP code for a successful fetch
const OK: u16 = 200;

/// Evaluates pull requests of one repository against the sign-off policy
#[derive(Debug)]
pub struct ReviewEvaluator<C> {
    client: C,
    repository: RepositoryRef,
    pattern: SignoffPattern,
    diagnostics: Diagnostics,
}

impl<C: RepositoryClient> ReviewEvaluator<C> {
    /// Create an evaluator using the default sign-off pattern
    #[must_use]
    pub fn new(client: C, repository: RepositoryRef) -> Self {
        Self {
            client,
            repository,
            pattern: SignoffPattern::default(),
            diagnostics: Diagnostics::global(),
        }
    }

    /// Use `pattern` to recognise sign-off comments
    #[must_use]
    pub fn with_pattern(mut self, pattern: SignoffPattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// Use `diagnostics` for log output
    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Comments on issue `issue_number` whose body matches `pattern`
    ///
    /// Returns `Ok(None)` when the comments could not be fetched, and an empty
    /// sequence when none match. Each call fetches again.
    pub fn find_signoff(
        &self,
        issue_number: u64,
        pattern: &str,
    ) -> Result<Option<SignoffMatches>, ApiError> {
        let pattern = SignoffPattern::new(pattern)?;

        let response = self.client.get_comments(&self.repository, issue_number, None)?;
        if response.code != OK {
            self.warn_response("Couldn't read comments", &response);
            return Ok(None);
        }

        match serde_json::from_value::<Vec<Comment>>(response.body) {
            Ok(comments) => Ok(Some(SignoffMatches::new(comments, pattern))),
            Err(e) => {
                self.diagnostics.warn(format_args!("Couldn't parse comments: {e}"));
                Ok(None)
            },
        }
    }

    /// Fetch metadata for pull request `pr_number`
    pub fn get_pull_request(&self, pr_number: u64) -> Result<PullRequest, ApiError> {
        let response = self.client.get_pull_request(&self.repository, pr_number)?;
        self.decode_fetch("pull request", response)
    }

    /// Apply the sign-off policy to pull request `pr_number`
    pub fn pull_request_reviewed_by(&self, pr_number: u64) -> Result<ReviewVerdict, ApiError> {
        let pr = self.get_pull_request(pr_number)?;

        let response =
            self.client.get_comments(&self.repository, pr_number, Some(COMMENT_PAGE_SIZE))?;
        let comments: Vec<Comment> = self.decode_fetch("issue comments", response)?;
        self.diagnostics.debug(format_args!(
            "Scanning {} comment(s) on #{pr_number} for sign-off",
            comments.len()
        ));

        let approval = comments
            .into_iter()
            .find(|comment| self.pattern.approves(comment, &pr.author));

        Ok(match approval {
            Some(comment) => {
                self.diagnostics.info(format_args!(
                    "#{pr_number} signed off by {}",
                    comment.author
                ));
                ReviewVerdict::approved(comment, pr.head_sha)
            },
            None => ReviewVerdict::pending(pr.head_sha),
        })
    }

    /// Decode a fetch that must succeed for the evaluation to continue
    fn decode_fetch<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        response: ClientResponse,
    ) -> Result<T, ApiError> {
        if response.code != OK {
            self.warn_response(&format!("Couldn't fetch {operation}"), &response);
            return Err(ApiError::FetchFailed {
                operation,
                code: response.code,
            });
        }

        serde_json::from_value(response.body)
            .map_err(|source| ApiError::MalformedResponse { operation, source })
    }

    fn warn_response(&self, what: &str, response: &ClientResponse) {
        self.diagnostics.warn(format_args!("{what} (returned {})", response.code));
        self.diagnostics.warn(format_args!("Response: {}", response.pretty_body()));
    }
}
