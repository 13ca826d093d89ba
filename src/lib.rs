//! chatter - Keep CI results and code-review sign-off in sync with GitHub
//!
//! This library reports build/test outcomes as commit statuses and decides
//! whether a pull request carries a qualifying human sign-off comment, so a
//! pipeline can gate merges on it.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod output;
pub mod server;

pub use error::ApiError;
