//! Repository reference (`owner/name`)

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Organization and repository name, fixed when a client is constructed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryRef {
    /// Owning organization or user
    pub organization: String,
    /// Repository name
    pub name: String,
}

/// Error returned when a `owner/name` string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid repository '{0}': expected <organization>/<name>")]
pub struct ParseRepositoryError(pub String);

impl RepositoryRef {
    /// Create a repository reference
    #[must_use]
    pub fn new(organization: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.organization, self.name)
    }
}

impl FromStr for RepositoryRef {
    type Err = ParseRepositoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches(".git");
        match trimmed.split_once('/') {
            Some((org, name)) if !org.is_empty() && !name.is_empty() && !name.contains('/') => {
                Ok(Self::new(org, name))
            },
            _ => Err(ParseRepositoryError(s.to_string())),
        }
    }
}
