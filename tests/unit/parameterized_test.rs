//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use chatter::core::models::{Comment, RepositoryRef, StatusContext, StatusState, UserId};
use chatter::core::services::SignoffPattern;
use test_case::test_case;

// =============================================================================
// Sign-off Matching Tests
// =============================================================================

#[test_case("LGTM", true ; "upper case")]
#[test_case("lgtm", true ; "lower case")]
#[test_case("LgTm, merge away", true ; "mixed case with suffix")]
#[test_case("Looks Good To Me", true ; "long phrase title case")]
#[test_case("I think this looks good to me now", true ; "phrase inside sentence")]
#[test_case("looks good", false ; "partial phrase")]
#[test_case("needs work", false ; "unrelated text")]
#[test_case("", false ; "empty body")]
fn test_default_pattern_matches(body: &str, expected: bool) {
    assert_eq!(SignoffPattern::default().is_match(body), expected);
}

#[test_case(1, 2, true ; "reviewer approves")]
#[test_case(1, 1, false ; "author cannot approve")]
fn test_approval_requires_other_author(pr_author: u64, commenter: u64, expected: bool) {
    let comment = Comment::new(commenter, "LGTM");
    let author = UserId::from(pr_author);
    assert_eq!(SignoffPattern::default().approves(&comment, &author), expected);
}

// =============================================================================
// Status State Tests
// =============================================================================

#[test_case("success", StatusState::Success ; "success")]
#[test_case("pending", StatusState::Pending ; "pending")]
#[test_case("error", StatusState::Error ; "error")]
#[test_case("failure", StatusState::Failure ; "failure")]
#[test_case("failed", StatusState::Failure ; "failed alias")]
#[test_case("SUCCESS", StatusState::Success ; "upper case")]
fn test_state_parsing(input: &str, expected: StatusState) {
    assert_eq!(input.parse::<StatusState>().unwrap(), expected);
}

#[test_case(StatusContext::Build, StatusState::Success, Some("Build succeeded.") ; "build success")]
#[test_case(StatusContext::Build, StatusState::Failure, Some("Build failed.") ; "build failure")]
#[test_case(StatusContext::Build, StatusState::Error, Some("There was an error building.") ; "build error")]
#[test_case(StatusContext::Build, StatusState::Pending, Some("Build results pending.") ; "build pending")]
#[test_case(StatusContext::Tests, StatusState::Success, Some("All tests passed.") ; "tests success")]
#[test_case(StatusContext::Tests, StatusState::Failure, Some("Some tests failed.") ; "tests failure")]
#[test_case(StatusContext::Tests, StatusState::Error, Some("There was an error testing.") ; "tests error")]
#[test_case(StatusContext::Tests, StatusState::Pending, Some("Test results pending.") ; "tests pending")]
#[test_case(StatusContext::CodeReview, StatusState::Success, Some("Code review completed") ; "review success")]
#[test_case(StatusContext::CodeReview, StatusState::Pending, Some("Code review pending") ; "review pending")]
#[test_case(StatusContext::Custom("deploy".into()), StatusState::Success, None ; "custom context")]
fn test_default_descriptions(context: StatusContext, state: StatusState, expected: Option<&str>) {
    assert_eq!(context.default_description(state), expected);
}

// =============================================================================
// Repository Parsing Tests
// =============================================================================

#[test_case("wrvb/chatter", Some(("wrvb", "chatter")) ; "owner and name")]
#[test_case("wrvb/chatter.git", Some(("wrvb", "chatter")) ; "git suffix")]
#[test_case("chatter", None ; "missing owner")]
#[test_case("a/b/c", None ; "too many parts")]
#[test_case("/chatter", None ; "empty owner")]
fn test_repository_parsing(input: &str, expected: Option<(&str, &str)>) {
    let parsed = input.parse::<RepositoryRef>().ok();
    assert_eq!(parsed, expected.map(|(owner, name)| RepositoryRef::new(owner, name)));
}
