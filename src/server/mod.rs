//! HTTP server adapters
//!
//! This module translates between HTTP frameworks and the HTTP-agnostic
//! relay layer in [`crate::api`].
//!
//! Currently supported:
//! - `tiny_http` - Lightweight blocking server for the webhook relay

pub mod tiny_http;

pub use self::tiny_http::{RELAY_PATH, Reply, dispatch, serve};
