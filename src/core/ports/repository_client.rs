//! Repository client port
//!
//! Defines the interface for the hosted repository service's REST endpoints.

use serde_json::Value;

use crate::core::models::RepositoryRef;
use crate::error::ApiError;

/// Raw answer from the service: HTTP status code plus decoded JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct ClientResponse {
    /// HTTP status code
    pub code: u16,
    /// Response body (`Null` when empty)
    pub body: Value,
}

impl ClientResponse {
    /// Create a response
    #[must_use]
    pub const fn new(code: u16, body: Value) -> Self {
        Self { code, body }
    }

    /// Body pretty-printed for log output
    #[must_use]
    pub fn pretty_body(&self) -> String {
        serde_json::to_string_pretty(&self.body).unwrap_or_default()
    }
}

/// Access to the repository service endpoints chatter uses
///
/// Every method is a single request. An `Err` means the request could not be
/// made; any HTTP answer, successful or not, comes back as `Ok`.
pub trait RepositoryClient {
    /// `POST` a status for `sha`
    fn post_status(
        &self,
        repo: &RepositoryRef,
        sha: &str,
        body: &Value,
    ) -> Result<ClientResponse, ApiError>;

    /// `GET` the combined status for `sha`
    fn get_combined_status(&self, repo: &RepositoryRef, sha: &str)
    -> Result<ClientResponse, ApiError>;

    /// `POST` a comment on an issue
    fn post_comment(
        &self,
        repo: &RepositoryRef,
        issue_number: u64,
        body: &Value,
    ) -> Result<ClientResponse, ApiError>;

    /// `GET` one page of issue comments, optionally sized
    fn get_comments(
        &self,
        repo: &RepositoryRef,
        issue_number: u64,
        page_size: Option<u32>,
    ) -> Result<ClientResponse, ApiError>;

    /// `GET` pull request metadata
    fn get_pull_request(
        &self,
        repo: &RepositoryRef,
        pr_number: u64,
    ) -> Result<ClientResponse, ApiError>;
}

impl<C: RepositoryClient + ?Sized> RepositoryClient for &C {
    fn post_status(
        &self,
        repo: &RepositoryRef,
        sha: &str,
        body: &Value,
    ) -> Result<ClientResponse, ApiError> {
        (**self).post_status(repo, sha, body)
    }

    fn get_combined_status(
        &self,
        repo: &RepositoryRef,
        sha: &str,
    ) -> Result<ClientResponse, ApiError> {
        (**self).get_combined_status(repo, sha)
    }

    fn post_comment(
        &self,
        repo: &RepositoryRef,
        issue_number: u64,
        body: &Value,
    ) -> Result<ClientResponse, ApiError> {
        (**self).post_comment(repo, issue_number, body)
    }

    fn get_comments(
        &self,
        repo: &RepositoryRef,
        issue_number: u64,
        page_size: Option<u32>,
    ) -> Result<ClientResponse, ApiError> {
        (**self).get_comments(repo, issue_number, page_size)
    }

    fn get_pull_request(
        &self,
        repo: &RepositoryRef,
        pr_number: u64,
    ) -> Result<ClientResponse, ApiError> {
        (**self).get_pull_request(repo, pr_number)
    }
}
