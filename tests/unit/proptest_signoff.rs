//! Property-based tests for the sign-off policy
//!
//! Uses proptest to verify properties that should hold for every comment set.

use std::sync::Arc;

use chatter::core::models::{ReviewState, UserId};
use chatter::core::services::{ReviewEvaluator, SignoffPattern};
use chatter::logging::{Diagnostics, MemoryLogger};
use proptest::prelude::*;

use crate::common::fixtures;
use crate::common::mocks::MockRepositoryClient;

const PR_AUTHOR: u64 = 1;

/// Comment bodies mixing approvals, near misses, and noise
fn body() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("LGTM".to_string()),
        Just("looks good to me".to_string()),
        Just("Looks Good".to_string()),
        Just("needs another pass".to_string()),
        "[a-z ]{0,20}",
        "[a-z ]{0,10}(lgtm|LGTM|LgTm)[a-z !.]{0,10}",
    ]
}

/// Up to a dozen comments by the author (1) or reviewers (2..=4)
fn comment_set() -> impl Strategy<Value = Vec<(u64, String)>> {
    prop::collection::vec((1_u64..=4, body()), 0..12)
}

fn evaluate(comments: &[(u64, String)]) -> chatter::core::models::ReviewVerdict {
    let entries: Vec<(u64, &str)> = comments.iter().map(|(a, b)| (*a, b.as_str())).collect();
    let client = MockRepositoryClient::new()
        .with_pull_request(200, fixtures::pull_request(9, PR_AUTHOR, "feedface"))
        .with_comments(200, fixtures::comments(&entries));
    ReviewEvaluator::new(&client, "wrvb/chatter".parse().unwrap())
        .with_diagnostics(Diagnostics::with_logger(Arc::new(MemoryLogger::new())))
        .pull_request_reviewed_by(9)
        .unwrap()
}

proptest! {
    /// Success exactly when some non-author comment matches
    #[test]
    fn success_iff_reviewer_signed_off(comments in comment_set()) {
        let pattern = SignoffPattern::default();
        let expected = comments
            .iter()
            .any(|(author, body)| *author != PR_AUTHOR && pattern.is_match(body));

        let verdict = evaluate(&comments);

        prop_assert_eq!(verdict.state() == ReviewState::Success, expected);
        prop_assert_eq!(verdict.matching_comment().is_some(), expected);
    }

    /// The approving comment is the first qualifying one in fetch order
    #[test]
    fn first_qualifying_comment_is_reported(comments in comment_set()) {
        let pattern = SignoffPattern::default();
        let first = comments
            .iter()
            .find(|(author, body)| *author != PR_AUTHOR && pattern.is_match(body));

        let verdict = evaluate(&comments);

        match (first, verdict.matching_comment()) {
            (Some((author, body)), Some(found)) => {
                prop_assert_eq!(&found.author, &UserId::from(*author));
                prop_assert_eq!(&found.body, body);
            },
            (None, None) => {},
            (expected, found) => prop_assert!(false, "expected {:?}, found {:?}", expected, found),
        }
    }

    /// The author's own comments never change the verdict
    #[test]
    fn author_comments_are_ignored(comments in comment_set()) {
        let without_author: Vec<(u64, String)> = comments
            .iter()
            .filter(|(author, _)| *author != PR_AUTHOR)
            .cloned()
            .collect();

        prop_assert_eq!(evaluate(&comments), evaluate(&without_author));
    }

    /// The verdict always carries the pull request's head commit
    #[test]
    fn head_sha_is_carried(comments in comment_set()) {
        let verdict = evaluate(&comments);
        prop_assert_eq!(verdict.head_sha(), "feedface");
    }
}
