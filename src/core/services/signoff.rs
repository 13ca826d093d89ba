//! Sign-off matching
//!
//! A sign-off is a comment whose body matches the approval pattern,
//! case-insensitively, anywhere in the text.

use std::vec;

use regex::{Regex, RegexBuilder};

use crate::core::models::{Comment, UserId};

/// Approval phrases recognised by default
pub const DEFAULT_SIGNOFF_PATTERN: &str = "lgtm|looks good to me";

/// Compiled, case-insensitive sign-off pattern
#[derive(Debug, Clone)]
pub struct SignoffPattern {
    regex: Regex,
}

impl SignoffPattern {
    /// Compile `pattern` as a case-insensitive regular expression
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self { regex })
    }

    /// The pattern source
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Whether `text` contains a match
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Whether `comment` signs off on a pull request opened by `pr_author`
    ///
    /// Self-approval never counts.
    #[must_use]
    pub fn approves(&self, comment: &Comment, pr_author: &UserId) -> bool {
        comment.author != *pr_author && self.is_match(&comment.body)
    }
}

impl Default for SignoffPattern {
    fn default() -> Self {
        Self {
            regex: RegexBuilder::new(DEFAULT_SIGNOFF_PATTERN)
                .case_insensitive(true)
                .build()
                .expect("built-in sign-off pattern is a valid regex"),
        }
    }
}

/// Lazy view over a fetched page of comments, yielding only matches
///
/// Single pass and finite. Obtaining a fresh sequence means fetching again.
#[derive(Debug)]
pub struct SignoffMatches {
    comments: vec::IntoIter<Comment>,
    pattern: SignoffPattern,
}

impl SignoffMatches {
    /// Filter `comments` by `pattern`, in the order given
    #[must_use]
    pub fn new(comments: Vec<Comment>, pattern: SignoffPattern) -> Self {
        Self {
            comments: comments.into_iter(),
            pattern,
        }
    }
}

impl Iterator for SignoffMatches {
    type Item = Comment;

    fn next(&mut self) -> Option<Self::Item> {
        let pattern = &self.pattern;
        self.comments.find(|comment| pattern.is_match(&comment.body))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.comments.size_hint().1)
    }
}
