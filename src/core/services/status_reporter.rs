//! Status reporter - posts and reads commit statuses
//!
//! Leaf operations: an unexpected HTTP code is logged at warning level and
//! reported through the return value, never raised.

use serde_json::json;

use crate::core::models::{CombinedStatus, CommitStatus, RepositoryRef};
use crate::core::ports::RepositoryClient;
use crate::error::ApiError;
use crate::logging::Diagnostics;

/// HTTP code the service answers with when a status or comment is created
const CREATED: u16 = 201;

/// HTTP code for a successful fetch
const OK: u16 = 200;

/// Outcome of a write that reached the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The service created the resource
    Created,
    /// The service answered with some other code
    Rejected {
        /// HTTP status code returned
        code: u16,
    },
}

impl WriteOutcome {
    /// Whether the write was accepted
    #[must_use]
    pub const fn is_created(self) -> bool {
        matches!(self, Self::Created)
    }
}

/// Posts and fetches commit statuses for one repository
#[derive(Debug)]
pub struct StatusReporter<C> {
    client: C,
    repository: RepositoryRef,
    diagnostics: Diagnostics,
}

impl<C: RepositoryClient> StatusReporter<C> {
    /// Create a reporter logging through the global logger
    #[must_use]
    pub const fn new(client: C, repository: RepositoryRef) -> Self {
        Self {
            client,
            repository,
            diagnostics: Diagnostics::global(),
        }
    }

    /// Use `diagnostics` for log output
    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Post `status` for commit `sha`
    ///
    /// Fails only when `sha` or the context is empty, or the request cannot be
    /// made. A non-201 answer is logged and returned as
    /// [`WriteOutcome::Rejected`].
    pub fn set_status(&self, sha: &str, status: &CommitStatus) -> Result<WriteOutcome, ApiError> {
        if sha.trim().is_empty() {
            return Err(ApiError::MissingIdentifier("sha"));
        }
        if status.context.as_str().trim().is_empty() {
            return Err(ApiError::MissingIdentifier("context"));
        }

        self.diagnostics.debug(format_args!("sha={sha}"));
        let response = self.client.post_status(&self.repository, sha, &status.to_payload())?;
        if response.code == CREATED {
            self.diagnostics.info(format_args!("Set status successfully"));
            Ok(WriteOutcome::Created)
        } else {
            self.diagnostics
                .warn(format_args!("Couldn't post status (returned {})", response.code));
            self.diagnostics.warn(format_args!("Response: {}", response.pretty_body()));
            Ok(WriteOutcome::Rejected {
                code: response.code,
            })
        }
    }

    /// Fetch the combined status for commit `sha`
    ///
    /// Returns `None` when the service answers with anything but 200, or when
    /// the payload cannot be understood.
    pub fn get_status(&self, sha: &str) -> Result<Option<CombinedStatus>, ApiError> {
        if sha.trim().is_empty() {
            return Err(ApiError::MissingIdentifier("sha"));
        }

        let response = self.client.get_combined_status(&self.repository, sha)?;
        if response.code != OK {
            self.diagnostics
                .warn(format_args!("Couldn't get status (returned {})", response.code));
            self.diagnostics.warn(format_args!("Response: {}", response.pretty_body()));
            return Ok(None);
        }

        match serde_json::from_value(response.body) {
            Ok(combined) => Ok(Some(combined)),
            Err(e) => {
                self.diagnostics.warn(format_args!("Couldn't parse status: {e}"));
                Ok(None)
            },
        }
    }

    /// Post `text` as a comment on issue `issue_number`
    pub fn post_comment(&self, issue_number: u64, text: &str) -> Result<WriteOutcome, ApiError> {
        let body = json!({ "body": text });
        let response = self.client.post_comment(&self.repository, issue_number, &body)?;
        if response.code == CREATED {
            self.diagnostics.info(format_args!("Posted comment successfully"));
            Ok(WriteOutcome::Created)
        } else {
            self.diagnostics
                .warn(format_args!("Couldn't post comment (returned {})", response.code));
            self.diagnostics.warn(format_args!("Response: {}", response.pretty_body()));
            Ok(WriteOutcome::Rejected {
                code: response.code,
            })
        }
    }
}
