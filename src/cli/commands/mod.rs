//! Command implementations
//!
//! Each command resolves the identifiers it needs from the [`Invocation`],
//! builds the core service it drives, and renders the outcome. A write the
//! service rejected is turned into an error here so the process exits
//! non-zero; the services themselves only log it.

mod code_review;
mod comment;
mod report;
mod serve;
mod status;

use std::path::PathBuf;

use chatter::ApiError;
use chatter::adapters::GitHubClient;
use chatter::config::{ChatterConfig, Overrides, Settings};
use chatter::output::OutputMode;

pub use code_review::code_review;
pub use comment::comment;
pub use report::report;
pub use serve::serve;
pub use status::status;

/// Global values shared by every command
#[derive(Debug)]
pub struct Invocation {
    pub sha: Option<String>,
    pub issue: Option<u64>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub config: Option<PathBuf>,
    pub overrides: Overrides,
    pub output_mode: OutputMode,
}

impl Invocation {
    /// Load the config file
    pub fn config_file(&self) -> anyhow::Result<ChatterConfig> {
        ChatterConfig::load(self.config.as_deref())
    }

    /// Resolve settings and build a client, failing on a missing token or repository
    pub fn connect(&self) -> anyhow::Result<(Settings, GitHubClient)> {
        let file = self.config_file()?;
        let settings = Settings::resolve(self.overrides.clone(), &file).inspect_err(|e| match e {
            ApiError::MissingIdentifier(what) => log::error!("{}", missing_message(what)),
            ApiError::InvalidRepository(_) => {
                log::error!("Repository must be given as owner/name, e.g. --repository wrvb/chatter");
            },
            _ => {},
        })?;
        let client = GitHubClient::new(&settings.api_url, &settings.token)?;
        Ok((settings, client))
    }

    /// The commit SHA, or an error naming how to supply it
    pub fn require_sha(&self) -> Result<&str, ApiError> {
        self.sha.as_deref().ok_or_else(|| {
            log::error!("{}", missing_message("sha"));
            ApiError::MissingIdentifier("sha")
        })
    }

    /// The issue number, or an error naming how to supply it
    pub fn require_issue(&self) -> Result<u64, ApiError> {
        self.issue.ok_or_else(|| {
            log::error!("{}", missing_message("issue"));
            ApiError::MissingIdentifier("issue")
        })
    }
}

/// Error line explaining how to supply a missing identifier
fn missing_message(what: &str) -> String {
    match what {
        "sha" => "No commit hash available. Either pass a hash via --sha, or set the \
                  environment variable 'ghprbActualCommit'."
            .to_string(),
        "issue" => "No issue number available. Either pass an issue via --issue, or set the \
                    environment variable 'ghprbPullId'."
            .to_string(),
        "token" => "No authorization token supplied; please set environment variable \
                    GITHUB_AUTH_TOKEN or pass --token."
            .to_string(),
        "repository" => "No repository configured. Pass --repository owner/name, set the \
                         environment variable 'ghprbGhRepository', or add `repository` to \
                         the config file."
            .to_string(),
        other => format!("Missing required value: {other}"),
    }
}
