//! Pull request snapshot

use serde::{Deserialize, Serialize};

use super::user::{UserId, UserRef};

/// The parts of a pull request the sign-off policy needs
///
/// Fetched fresh for every evaluation; never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawPullRequest")]
pub struct PullRequest {
    /// Pull request (and issue) number
    pub number: u64,
    /// Who opened the pull request
    pub author: UserId,
    /// Current head commit
    pub head_sha: String,
}

#[derive(Deserialize)]
struct RawPullRequest {
    number: u64,
    user: UserRef,
    head: RawHead,
}

#[derive(Deserialize)]
struct RawHead {
    sha: String,
}

impl From<RawPullRequest> for PullRequest {
    fn from(raw: RawPullRequest) -> Self {
        Self {
            number: raw.number,
            author: raw.user.id,
            head_sha: raw.head.sha,
        }
    }
}
