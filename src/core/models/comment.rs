//! Issue comments

use serde::{Deserialize, Serialize};

use super::user::{UserId, UserRef};

/// A comment on an issue or pull request, as returned by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawComment")]
pub struct Comment {
    /// Who wrote the comment
    pub author: UserId,
    /// Comment text
    pub body: String,
}

#[derive(Deserialize)]
struct RawComment {
    user: UserRef,
    #[serde(default)]
    body: Option<String>,
}

impl From<RawComment> for Comment {
    fn from(raw: RawComment) -> Self {
        Self {
            author: raw.user.id,
            body: raw.body.unwrap_or_default(),
        }
    }
}

impl Comment {
    /// Create a comment
    #[must_use]
    pub fn new(author: impl Into<UserId>, body: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            body: body.into(),
        }
    }
}
