//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the review/status logic and the
//! hosted repository service. Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core depends only on these traits, never on an HTTP client. This
//! enables:
//!
//! - **Testability**: Scripted implementations for unit tests
//! - **Flexibility**: Swap transports without touching the sign-off policy
//! - **Clarity**: One typed method per remote endpoint used

mod repository_client;

pub use repository_client::{ClientResponse, RepositoryClient};
