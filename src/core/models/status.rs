//! Commit status entries
//!
//! A [`CommitStatus`] is built fresh for every report and serialized verbatim
//! as the body of the status endpoint. [`CombinedStatus`] is what the service
//! returns when asked for the aggregate state of a commit.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Named status channel on a commit
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StatusContext {
    /// Build outcome
    Build,
    /// Test-suite outcome
    Tests,
    /// Human code-review sign-off
    CodeReview,
    /// Any other context name
    Custom(String),
}

impl StatusContext {
    /// Context name as sent to the service
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Build => "build",
            Self::Tests => "tests",
            Self::CodeReview => "code_review",
            Self::Custom(name) => name,
        }
    }

    /// Description used when the caller does not supply one
    #[must_use]
    pub const fn default_description(&self, state: StatusState) -> Option<&'static str> {
        match (self, state) {
            (Self::Build, StatusState::Success) => Some("Build succeeded."),
            (Self::Build, StatusState::Failure) => Some("Build failed."),
            (Self::Build, StatusState::Error) => Some("There was an error building."),
            (Self::Build, StatusState::Pending) => Some("Build results pending."),
            (Self::Tests, StatusState::Success) => Some("All tests passed."),
            (Self::Tests, StatusState::Failure) => Some("Some tests failed."),
            (Self::Tests, StatusState::Error) => Some("There was an error testing."),
            (Self::Tests, StatusState::Pending) => Some("Test results pending."),
            (Self::CodeReview, StatusState::Success) => Some("Code review completed"),
            (Self::CodeReview, StatusState::Pending) => Some("Code review pending"),
            _ => None,
        }
    }
}

impl From<String> for StatusContext {
    fn from(name: String) -> Self {
        match name.as_str() {
            "build" => Self::Build,
            "tests" => Self::Tests,
            "code_review" => Self::CodeReview,
            _ => Self::Custom(name),
        }
    }
}

impl From<StatusContext> for String {
    fn from(context: StatusContext) -> Self {
        match context {
            StatusContext::Custom(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for StatusContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusState {
    /// Waiting on results
    #[default]
    Pending,
    /// Finished successfully
    Success,
    /// Could not run to completion
    Error,
    /// Ran and failed
    Failure,
}

impl StatusState {
    /// State name as sent to the service
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Success => "success",
            Self::Error => "error",
            Self::Failure => "failure",
        }
    }
}

impl fmt::Display for StatusState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "success" => Ok(Self::Success),
            "error" => Ok(Self::Error),
            "failure" | "failed" => Ok(Self::Failure),
            _ => Err(format!("Invalid state: {s}. Use: success, pending, error, failure")),
        }
    }
}

/// One status report for a commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitStatus {
    /// Status channel
    pub context: StatusContext,
    /// Reported state
    pub state: StatusState,
    /// Short human-readable explanation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Link to the job that produced the status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_url: Option<String>,
}

impl CommitStatus {
    /// Create a status with no description or link
    #[must_use]
    pub const fn new(context: StatusContext, state: StatusState) -> Self {
        Self {
            context,
            state,
            description: None,
            target_url: None,
        }
    }

    /// Attach a description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach a link
    #[must_use]
    pub fn with_target_url(mut self, target_url: impl Into<String>) -> Self {
        self.target_url = Some(target_url.into());
        self
    }

    /// Request body for the status endpoint
    ///
    /// `description` and `target_url` are left out when unset.
    #[must_use]
    pub fn to_payload(&self) -> Value {
        let mut payload = Map::new();
        payload.insert("context".into(), self.context.as_str().into());
        payload.insert("state".into(), self.state.as_str().into());
        if let Some(description) = &self.description {
            payload.insert("description".into(), description.as_str().into());
        }
        if let Some(target_url) = &self.target_url {
            payload.insert("target_url".into(), target_url.as_str().into());
        }
        Value::Object(payload)
    }
}

/// A single context within a [`CombinedStatus`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntry {
    /// Status channel
    pub context: String,
    /// Reported state
    pub state: StatusState,
    /// Description, if any
    #[serde(default)]
    pub description: Option<String>,
    /// Link, if any
    #[serde(default)]
    pub target_url: Option<String>,
}

/// Aggregate status of every context reported for a commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedStatus {
    /// Overall state
    pub state: StatusState,
    /// Commit the status belongs to
    #[serde(default)]
    pub sha: String,
    /// Number of contexts reported
    #[serde(default)]
    pub total_count: u64,
    /// Latest status per context
    #[serde(default)]
    pub statuses: Vec<StatusEntry>,
}

impl CombinedStatus {
    /// Find the entry for a context, if one was reported
    #[must_use]
    pub fn context(&self, context: &StatusContext) -> Option<&StatusEntry> {
        self.statuses.iter().find(|s| s.context == context.as_str())
    }
}
