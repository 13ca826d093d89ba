//! Configuration management
//!
//! Values come from three layers, highest priority first:
//!
//! 1. CLI flags (each with a named environment-variable fallback)
//! 2. An optional TOML file, `~/.config/chatter/config.toml` by default
//! 3. Built-in defaults
//!
//! [`Settings::resolve`] merges them once at the boundary; the core only ever
//! sees the resulting plain values.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::adapters::DEFAULT_API_URL;
use crate::core::models::RepositoryRef;
use crate::core::services::DEFAULT_SIGNOFF_PATTERN;
use crate::error::ApiError;

/// Environment variable naming the configuration file
pub const CONFIG_ENV: &str = "CHATTER_CONFIG";

/// Default address for the webhook relay
pub const DEFAULT_BIND: &str = "0.0.0.0:5000";

/// Contents of the configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChatterConfig {
    /// Repository as `owner/name`
    #[serde(default)]
    pub repository: Option<String>,
    /// API base URL (GitHub Enterprise installs)
    #[serde(default)]
    pub api_url: Option<String>,
    /// Regular expression recognising sign-off comments
    #[serde(default)]
    pub signoff_pattern: Option<String>,
    /// Webhook relay settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// Webhook relay settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Address to listen on
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl ChatterConfig {
    /// Default configuration file location
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("chatter")
            .join("config.toml")
    }

    /// Load configuration
    ///
    /// An explicit path must exist. Without one, the default location is used
    /// when present and built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => {
                let path = Self::default_path();
                if path.exists() { Self::load_from(&path) } else { Ok(Self::default()) }
            },
        }
    }

    /// Load configuration from `path`
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// API token
    pub token: Option<String>,
    /// Repository as `owner/name`
    pub repository: Option<String>,
    /// API base URL
    pub api_url: Option<String>,
}

/// Fully resolved settings for talking to the service
#[derive(Clone)]
pub struct Settings {
    /// API token
    pub token: String,
    /// Repository to act on
    pub repository: RepositoryRef,
    /// API base URL
    pub api_url: String,
    /// Sign-off pattern source
    pub signoff_pattern: String,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("token", &"<redacted>")
            .field("repository", &self.repository)
            .field("api_url", &self.api_url)
            .field("signoff_pattern", &self.signoff_pattern)
            .finish()
    }
}

impl Settings {
    /// Merge `overrides` over `file` over defaults
    ///
    /// Fails with [`ApiError::MissingIdentifier`] when no usable token or
    /// repository is available, and with [`ApiError::InvalidRepository`] when
    /// the repository is not `owner/name`.
    pub fn resolve(overrides: Overrides, file: &ChatterConfig) -> Result<Self, ApiError> {
        let token = overrides
            .token
            .filter(|t| !t.trim().is_empty())
            .ok_or(ApiError::MissingIdentifier("token"))?;

        let repository: RepositoryRef = overrides
            .repository
            .or_else(|| file.repository.clone())
            .ok_or(ApiError::MissingIdentifier("repository"))?
            .parse()?;

        let api_url = overrides
            .api_url
            .or_else(|| file.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let signoff_pattern = file
            .signoff_pattern
            .clone()
            .unwrap_or_else(|| DEFAULT_SIGNOFF_PATTERN.to_string());

        Ok(Self {
            token,
            repository,
            api_url,
            signoff_pattern,
        })
    }
}
