//! Core domain logic for chatter
//!
//! This module contains the review-determination and status-reporting logic.
//! All remote interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`CommitStatus`, `Comment`, `PullRequest`, `ReviewVerdict`)
//! - `services/` - `StatusReporter` and `ReviewEvaluator`
//! - `ports/` - Trait definitions for the hosted repository service

pub mod models;
pub mod ports;
pub mod services;
