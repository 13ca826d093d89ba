//! Tests for status and comment reporting

use std::sync::Arc;

use chatter::ApiError;
use chatter::core::models::{CommitStatus, StatusContext, StatusState};
use chatter::core::services::{StatusReporter, WriteOutcome};
use chatter::logging::{Diagnostics, MemoryLogger};
use log::Level;
use serde_json::json;

use crate::common::fixtures;
use crate::common::mocks::MockRepositoryClient;

fn reporter(
    client: &MockRepositoryClient,
    logger: Arc<MemoryLogger>,
) -> StatusReporter<&MockRepositoryClient> {
    StatusReporter::new(client, "wrvb/chatter".parse().unwrap())
        .with_diagnostics(Diagnostics::with_logger(logger))
}

#[test]
fn test_build_success_posts_status_body() {
    let client = MockRepositoryClient::new();
    let logger = Arc::new(MemoryLogger::new());
    let status = CommitStatus::new(StatusContext::Build, StatusState::Success)
        .with_description("Build succeeded.")
        .with_target_url("https://ci.example/job/1");

    let outcome = reporter(&client, logger.clone()).set_status("abc123", &status).unwrap();

    assert_eq!(outcome, WriteOutcome::Created);
    let posted = client.posted();
    assert_eq!(posted.len(), 1);
    assert_eq!(posted[0].target, "wrvb/chatter@abc123");
    assert_eq!(
        posted[0].body,
        json!({
            "context": "build",
            "state": "success",
            "description": "Build succeeded.",
            "target_url": "https://ci.example/job/1"
        })
    );
    assert!(logger.messages_at(Level::Info).contains(&"Set status successfully".to_string()));
}

#[test]
fn test_optional_fields_are_omitted() {
    let client = MockRepositoryClient::new();
    let status = CommitStatus::new(StatusContext::Tests, StatusState::Pending);

    reporter(&client, Arc::new(MemoryLogger::new())).set_status("abc123", &status).unwrap();

    assert_eq!(client.posted()[0].body, json!({"context": "tests", "state": "pending"}));
}

#[test]
fn test_rejected_write_logs_warning() {
    let client = MockRepositoryClient::new().with_write_code(422);
    let logger = Arc::new(MemoryLogger::new());
    let status = CommitStatus::new(StatusContext::Build, StatusState::Failure);

    let outcome = reporter(&client, logger.clone()).set_status("abc123", &status).unwrap();

    assert_eq!(outcome, WriteOutcome::Rejected { code: 422 });
    let warnings = logger.messages_at(Level::Warn);
    assert!(warnings.contains(&"Couldn't post status (returned 422)".to_string()));
    assert!(warnings.iter().any(|w| w.starts_with("Response:")));
}

#[test]
fn test_empty_sha_is_missing_identifier() {
    let client = MockRepositoryClient::new();
    let status = CommitStatus::new(StatusContext::Build, StatusState::Success);

    let err = reporter(&client, Arc::new(MemoryLogger::new())).set_status("", &status).unwrap_err();

    assert!(matches!(err, ApiError::MissingIdentifier(_)));
    assert!(client.posted().is_empty());
}

#[test]
fn test_empty_context_is_missing_identifier() {
    let client = MockRepositoryClient::new();
    let status = CommitStatus::new(StatusContext::Custom(String::new()), StatusState::Pending);

    let err = reporter(&client, Arc::new(MemoryLogger::new()))
        .set_status("abc123", &status)
        .unwrap_err();

    assert!(matches!(err, ApiError::MissingIdentifier("context")));
    assert!(client.calls().is_empty());
}

#[test]
fn test_get_status_reads_entries() {
    let client = MockRepositoryClient::new().with_combined_status(
        200,
        fixtures::combined_status("abc123", "pending", &[("build", "success"), ("tests", "pending")]),
    );

    let combined = reporter(&client, Arc::new(MemoryLogger::new()))
        .get_status("abc123")
        .unwrap()
        .unwrap();

    assert_eq!(combined.state, StatusState::Pending);
    assert_eq!(
        combined.context(&StatusContext::Build).map(|entry| entry.state),
        Some(StatusState::Success)
    );
    assert!(combined.context(&StatusContext::CodeReview).is_none());
}

#[test]
fn test_get_status_absent_on_error_code() {
    let client = MockRepositoryClient::new().with_combined_status(404, json!({"message": "Not Found"}));
    let logger = Arc::new(MemoryLogger::new());

    let combined = reporter(&client, logger.clone()).get_status("abc123").unwrap();

    assert!(combined.is_none());
    assert!(!logger.messages_at(Level::Warn).is_empty());
}

#[test]
fn test_post_comment_wraps_body() {
    let client = MockRepositoryClient::new();

    let outcome = reporter(&client, Arc::new(MemoryLogger::new()))
        .post_comment(7, "Deployed to staging")
        .unwrap();

    assert!(outcome.is_created());
    assert_eq!(client.posted()[0].target, "wrvb/chatter#7");
    assert_eq!(client.posted()[0].body, json!({"body": "Deployed to staging"}));
}

#[test]
fn test_rejected_comment_is_reported() {
    let client = MockRepositoryClient::new().with_write_code(403);
    let logger = Arc::new(MemoryLogger::new());

    let outcome = reporter(&client, logger.clone()).post_comment(7, "Build finished").unwrap();

    assert_eq!(outcome, WriteOutcome::Rejected { code: 403 });
    assert_eq!(logger.messages_at(Level::Warn)[0], "Couldn't post comment (returned 403)");
    assert_eq!(client.calls(), vec!["post comment"]);
}

#[test]
fn test_transport_failure_is_error() {
    let client = MockRepositoryClient::new().unreachable();
    let status = CommitStatus::new(StatusContext::Build, StatusState::Success);

    let err = reporter(&client, Arc::new(MemoryLogger::new()))
        .set_status("abc123", &status)
        .unwrap_err();

    assert!(matches!(err, ApiError::TransportFailure { .. }));
}
