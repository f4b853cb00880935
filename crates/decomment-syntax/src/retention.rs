//! Rules that force comments to be kept.

use std::str::FromStr;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Errors raised while compiling a [`RetentionPattern`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RetentionPatternError {
    /// The pattern text is empty.
    #[error("retention pattern is empty")]
    Empty,

    /// A flag character is not understood.
    #[error("unsupported flag '{flag}' in retention pattern")]
    UnsupportedFlag {
        /// The rejected flag.
        flag: char,
    },

    /// The pattern does not compile.
    #[error("invalid retention pattern: {message}")]
    Syntax {
        /// Description from the regex compiler.
        message: String,
    },
}

impl RetentionPatternError {
    /// Creates a syntax error from any displayable cause.
    #[must_use]
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::Syntax {
            message: message.into(),
        }
    }
}

const KNOWN_FLAGS: &str = "dgimsuy";

/// A user-supplied regular expression with JavaScript-style flags.
///
/// Supported flags are `i` (case-insensitive), `m` (multi-line anchors),
/// `s` (dot matches newline), `y` (anchored at the start of the comment text),
/// plus `u`, `g` and `d`, which have no effect on a single test.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetentionPattern {
    /// Regular expression source.
    pub pattern: String,
    /// Flag characters.
    #[serde(default)]
    pub flags: String,
}

impl RetentionPattern {
    /// Creates a pattern with flags.
    #[must_use]
    pub fn new(pattern: impl Into<String>, flags: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            flags: flags.into(),
        }
    }

    /// Compiles the pattern.
    ///
    /// # Errors
    ///
    /// Returns an error when the pattern is empty, uses an unknown flag, or is
    /// not a valid regular expression.
    pub fn compile(&self) -> Result<Regex, RetentionPatternError> {
        if self.pattern.is_empty() {
            return Err(RetentionPatternError::Empty);
        }
        let mut anchored = false;
        let mut case_insensitive = false;
        let mut multi_line = false;
        let mut dot_all = false;
        for flag in self.flags.chars() {
            match flag {
                'i' => case_insensitive = true,
                'm' => multi_line = true,
                's' => dot_all = true,
                'y' => anchored = true,
                'u' | 'g' | 'd' => {}
                other => return Err(RetentionPatternError::UnsupportedFlag { flag: other }),
            }
        }
        let source = if anchored {
            format!(r"\A(?:{})", self.pattern)
        } else {
            self.pattern.clone()
        };
        RegexBuilder::new(&source)
            .case_insensitive(case_insensitive)
            .multi_line(multi_line)
            .dot_matches_new_line(dot_all)
            .build()
            .map_err(|err| RetentionPatternError::syntax(err.to_string()))
    }
}

impl FromStr for RetentionPattern {
    type Err = RetentionPatternError;

    /// Parses `pattern` or `/pattern/flags`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(RetentionPatternError::Empty);
        }
        let delimited = s
            .strip_prefix('/')
            .and_then(|body| body.rsplit_once('/'))
            .filter(|(_, flags)| flags.chars().all(|flag| KNOWN_FLAGS.contains(flag)));
        Ok(delimited.map_or_else(
            || Self::new(s, ""),
            |(pattern, flags)| Self::new(pattern, flags),
        ))
    }
}

/// A comment offered to [`RetentionPolicy::retains`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentCandidate<'a> {
    text: &'a str,
    opens_document: bool,
}

impl<'a> CommentCandidate<'a> {
    /// Creates a candidate from the comment body (text between its tokens,
    /// interior line breaks replaced by a tab) and whether the comment opens
    /// at the first character of the document.
    #[must_use]
    pub const fn new(text: &'a str, opens_document: bool) -> Self {
        Self {
            text,
            opens_document,
        }
    }

    /// Returns the comment body.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }
}

const ENCODING_MARKER: &str = "-*-";

fn is_encoding_marker(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.starts_with(ENCODING_MARKER) && trimmed.ends_with(ENCODING_MARKER)
}

/// Compiled force-keep rules.
#[derive(Debug, Clone, Default)]
pub struct RetentionPolicy {
    prefix: Option<String>,
    patterns: Vec<Regex>,
}

impl RetentionPolicy {
    /// Compiles a policy. An empty prefix counts as unset; empty or malformed
    /// patterns are skipped with a warning.
    #[must_use]
    pub fn new(prefix: Option<&str>, patterns: &[RetentionPattern]) -> Self {
        let compiled = patterns
            .iter()
            .filter(|pattern| !pattern.pattern.is_empty())
            .filter_map(|pattern| match pattern.compile() {
                Ok(regex) => Some(regex),
                Err(error) => {
                    warn!(
                        pattern = %pattern.pattern,
                        flags = %pattern.flags,
                        %error,
                        "skipping retention pattern"
                    );
                    None
                }
            })
            .collect();
        Self {
            prefix: prefix.filter(|value| !value.is_empty()).map(str::to_owned),
            patterns: compiled,
        }
    }

    /// Returns the number of usable patterns.
    #[must_use]
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Decides whether a comment is kept.
    ///
    /// A configured prefix decides alone. Otherwise an encoding marker opening
    /// the document is kept, then any matching pattern keeps the comment.
    #[must_use]
    pub fn retains(&self, candidate: &CommentCandidate<'_>) -> bool {
        if let Some(prefix) = &self.prefix {
            return candidate.text.starts_with(prefix.as_str());
        }
        if candidate.opens_document && is_encoding_marker(candidate.text) {
            return true;
        }
        self.patterns
            .iter()
            .any(|pattern| pattern.is_match(candidate.text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn candidate(text: &str) -> CommentCandidate<'_> {
        CommentCandidate::new(text, false)
    }

    #[rstest]
    #[case("! keep", true)]
    #[case(" drop", false)]
    #[case("!", true)]
    fn prefix_decides_alone(#[case] text: &str, #[case] kept: bool) {
        let policy = RetentionPolicy::new(Some("!"), &[RetentionPattern::new("drop", "")]);
        assert_eq!(policy.retains(&candidate(text)), kept);
    }

    #[test]
    fn empty_prefix_counts_as_unset() {
        let policy = RetentionPolicy::new(Some(""), &[RetentionPattern::new("keep", "")]);
        assert!(policy.retains(&candidate(" keep me")));
        assert!(!policy.retains(&candidate(" drop me")));
    }

    #[rstest]
    #[case(" -*- coding: utf-8 -*- ", true, true)]
    #[case(" -*- coding: utf-8 -*- ", false, false)]
    #[case(" coding: utf-8 ", true, false)]
    #[case(" -*- ", true, true)]
    #[case(" -*- coding", true, false)]
    fn encoding_marker_only_opens_document(
        #[case] text: &str,
        #[case] opens_document: bool,
        #[case] kept: bool,
    ) {
        let policy = RetentionPolicy::default();
        assert_eq!(
            policy.retains(&CommentCandidate::new(text, opens_document)),
            kept
        );
    }

    #[test]
    fn patterns_are_tested_in_order_and_malformed_entries_skipped() {
        let policy = RetentionPolicy::new(
            None,
            &[
                RetentionPattern::new("", ""),
                RetentionPattern::new("(unclosed", ""),
                RetentionPattern::new("todo", "x"),
                RetentionPattern::new("license", "i"),
            ],
        );
        assert_eq!(policy.pattern_count(), 1);
        assert!(policy.retains(&candidate(" LICENSE: MIT")));
        assert!(!policy.retains(&candidate(" todo")));
    }

    #[rstest]
    #[case("^a.b$", "s", "a\nb", true)]
    #[case("^b", "m", "a\nb", true)]
    #[case("^b", "", "a\nb", false)]
    #[case("b", "y", "ab", false)]
    #[case("a", "gu", "ab", true)]
    fn flags_map_to_regex_options(
        #[case] pattern: &str,
        #[case] flags: &str,
        #[case] text: &str,
        #[case] matches: bool,
    ) {
        let regex = RetentionPattern::new(pattern, flags)
            .compile()
            .expect("pattern should compile");
        assert_eq!(regex.is_match(text), matches);
    }

    #[test]
    fn unknown_flag_is_reported() {
        let error = RetentionPattern::new("a", "q").compile().err();
        assert_eq!(
            error,
            Some(RetentionPatternError::UnsupportedFlag { flag: 'q' })
        );
    }

    #[rstest]
    #[case("keep", RetentionPattern::new("keep", ""))]
    #[case("/keep/i", RetentionPattern::new("keep", "i"))]
    #[case("/a/b/", RetentionPattern::new("a/b", ""))]
    #[case("/path/to", RetentionPattern::new("/path/to", ""))]
    fn patterns_parse_from_cli_syntax(#[case] input: &str, #[case] expected: RetentionPattern) {
        assert_eq!(input.parse::<RetentionPattern>(), Ok(expected));
    }
}
