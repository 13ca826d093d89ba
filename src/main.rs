//! chatter - Report CI results and code-review sign-off to GitHub
//!
//! Posts build and test outcomes as commit statuses, gates merges on a
//! sign-off comment from someone other than the pull request's author, and
//! relays issue-comment webhooks.

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

mod cli;

use std::process::ExitCode;

use chatter::ApiError;

/// Main entry point for the chatter CLI
fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            let code = e.downcast_ref::<ApiError>().map_or(1, ApiError::exit_code);
            ExitCode::from(code)
        },
    }
}
