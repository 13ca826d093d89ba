//! Domain models for chatter
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`RepositoryRef`] - Which repository a client talks to
//! - [`CommitStatus`] - One status line attached to a commit
//! - [`Comment`] - An issue comment on a pull request
//! - [`PullRequest`] - Snapshot of a pull request's author and head commit
//! - [`ReviewVerdict`] - Outcome of evaluating a pull request for sign-off

mod comment;
mod pull_request;
mod repository;
mod status;
mod user;
mod verdict;

pub use comment::Comment;
pub use pull_request::PullRequest;
pub use repository::{ParseRepositoryError, RepositoryRef};
pub use status::{CombinedStatus, CommitStatus, StatusContext, StatusEntry, StatusState};
pub use user::UserId;
pub use verdict::{ReviewState, ReviewVerdict};
