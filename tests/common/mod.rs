//! Common test utilities shared across test types
//!
//! - `mocks.rs` - In-memory `RepositoryClient` with per-endpoint responses
//! - `fixtures.rs` - JSON payload builders shaped like the service's answers

pub mod fixtures;
