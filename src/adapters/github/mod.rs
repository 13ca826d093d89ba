//! GitHub REST adapter
//!
//! Blocking HTTP implementation of [`RepositoryClient`]. Each method issues
//! exactly one request and hands back the status code and JSON body untouched;
//! deciding what a code means is left to the core services.

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::Value;

use crate::core::models::RepositoryRef;
use crate::core::ports::{ClientResponse, RepositoryClient};
use crate::error::ApiError;

/// Public GitHub API endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Token-authenticated GitHub API client
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    api_url: String,
}

impl GitHubClient {
    /// Create a client for `api_url` authenticating with `token`
    pub fn new(api_url: &str, token: &str) -> Result<Self, ApiError> {
        let mut auth = HeaderValue::from_str(&format!("token {token}"))
            .map_err(|e| ApiError::transport("configure client", e))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
        headers.insert(AUTHORIZATION, auth);

        let http = Client::builder()
            .user_agent(format!("chatter/{}", crate::VERSION))
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::transport("configure client", e))?;

        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    fn repo_url(&self, repo: &RepositoryRef, path: &str) -> String {
        format!("{}/repos/{}/{}/{path}", self.api_url, repo.organization, repo.name)
    }

    fn execute(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<ClientResponse, ApiError> {
        let response = request.send().map_err(|e| ApiError::transport(operation, e))?;
        let code = response.status().as_u16();
        let text = response.text().map_err(|e| ApiError::transport(operation, e))?;
        log::debug!("{operation} -> {code}");
        Ok(ClientResponse::new(code, decode_body(text)))
    }
}

/// Parse a response body, keeping non-JSON text as a string
fn decode_body(text: String) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(&text).unwrap_or_else(|_| Value::String(text))
}

impl RepositoryClient for GitHubClient {
    fn post_status(
        &self,
        repo: &RepositoryRef,
        sha: &str,
        body: &Value,
    ) -> Result<ClientResponse, ApiError> {
        let url = self.repo_url(repo, &format!("statuses/{sha}"));
        self.execute("post status", self.http.post(url).json(body))
    }

    fn get_combined_status(
        &self,
        repo: &RepositoryRef,
        sha: &str,
    ) -> Result<ClientResponse, ApiError> {
        let url = self.repo_url(repo, &format!("commits/{sha}/status"));
        self.execute("get status", self.http.get(url))
    }

    fn post_comment(
        &self,
        repo: &RepositoryRef,
        issue_number: u64,
        body: &Value,
    ) -> Result<ClientResponse, ApiError> {
        let url = self.repo_url(repo, &format!("issues/{issue_number}/comments"));
        self.execute("post comment", self.http.post(url).json(body))
    }

    fn get_comments(
        &self,
        repo: &RepositoryRef,
        issue_number: u64,
        page_size: Option<u32>,
    ) -> Result<ClientResponse, ApiError> {
        let mut url = self.repo_url(repo, &format!("issues/{issue_number}/comments"));
        if let Some(per_page) = page_size {
            url.push_str(&format!("?per_page={per_page}"));
        }
        self.execute("get comments", self.http.get(url))
    }

    fn get_pull_request(
        &self,
        repo: &RepositoryRef,
        pr_number: u64,
    ) -> Result<ClientResponse, ApiError> {
        let url = self.repo_url(repo, &format!("pulls/{pr_number}"));
        self.execute("get pull request", self.http.get(url))
    }
}
