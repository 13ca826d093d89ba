//! HTTP-agnostic webhook relay layer
//!
//! This module provides typed request/response structures and pure handlers
//! that any HTTP server implementation (`tiny_http`, axum, etc.) can call.
//!
//! ## Design
//!
//! - **Handlers are pure functions**: Take the raw body, return `Result<T, RelayError>`
//! - **Types are framework-agnostic**: No HTTP types leak into this module
//! - **Errors carry HTTP semantics**: `RelayError` knows its status code for translation

mod error;
mod handlers;
mod types;

pub use error::{ErrorData, RelayError};
pub use handlers::{LIVENESS_BODY, relay_event};
pub use types::{ApiResponse, EventAck, EventComment, EventIssue, WebhookEvent};
