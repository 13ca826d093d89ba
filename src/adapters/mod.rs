//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `github/` - REST client for the GitHub API (`RepositoryClient`)

pub mod github;

pub use github::{DEFAULT_API_URL, GitHubClient};
