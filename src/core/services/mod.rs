//! Business logic services
//!
//! Each service owns a [`RepositoryClient`](crate::core::ports::RepositoryClient)
//! and the repository it acts on, and builds every answer fresh from the
//! service; nothing is cached between calls.
//!
//! - [`status_reporter`] - Post and read commit statuses, post comments
//! - [`review_evaluator`] - Decide whether a pull request is signed off
//! - [`signoff`] - Case-insensitive sign-off matching

pub mod review_evaluator;
pub mod signoff;
pub mod status_reporter;

pub use review_evaluator::{COMMENT_PAGE_SIZE, ReviewEvaluator};
pub use signoff::{DEFAULT_SIGNOFF_PATTERN, SignoffMatches, SignoffPattern};
pub use status_reporter::{StatusReporter, WriteOutcome};
