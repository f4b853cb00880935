//! Embedded-language section splitting.
//!
//! Markup languages host other languages inline (`<style>` holds CSS,
//! `<script>` holds JavaScript, `<?php ... ?>` holds PHP). Splitting runs
//! before scanning and tags each byte of the document with exactly one
//! language identifier.

use std::ops::Range;

use regex::{Captures, Regex};
use tracing::trace;

/// How a section rule decides the language of the text it opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionLanguage {
    /// Always the given language.
    Fixed(&'static str),
    /// The text of a capture group of the start match, or `fallback` when the
    /// group did not participate.
    Captured {
        /// Capture group index.
        group: usize,
        /// Language used when the group is absent or empty.
        fallback: &'static str,
    },
}

impl SectionLanguage {
    fn resolve(&self, captures: &Captures<'_>) -> String {
        match *self {
            Self::Fixed(language) => language.to_owned(),
            Self::Captured { group, fallback } => captures
                .get(group)
                .map(|found| found.as_str())
                .filter(|language| !language.is_empty())
                .unwrap_or(fallback)
                .to_ascii_lowercase(),
        }
    }
}

/// A start/stop pattern pair introducing an embedded language.
#[derive(Debug, Clone)]
pub struct SectionRule {
    start: Regex,
    stop: Regex,
    language: SectionLanguage,
}

impl SectionRule {
    /// Creates a rule from compiled start and stop patterns.
    #[must_use]
    pub const fn new(start: Regex, stop: Regex, language: SectionLanguage) -> Self {
        Self {
            start,
            stop,
            language,
        }
    }
}

/// A boundary at which the language changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionBreak {
    /// Byte offset at which the section begins.
    pub offset: usize,
    /// Language identifier of the section.
    pub language: String,
}

/// A language-tagged sub-range of a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    /// Byte range within the document.
    pub range: Range<usize>,
    /// Language identifier for the range.
    pub language: String,
}

/// Split rules for one host language.
#[derive(Debug, Clone)]
pub struct SectionRules {
    default_language: &'static str,
    rules: Vec<SectionRule>,
}

impl SectionRules {
    /// Creates split rules. Earlier rules win when two start matches begin at
    /// the same offset.
    #[must_use]
    pub const fn new(default_language: &'static str, rules: Vec<SectionRule>) -> Self {
        Self {
            default_language,
            rules,
        }
    }

    /// Partitions `text` into language-tagged sections.
    ///
    /// A start tag belongs to the section it opens; the matching stop tag
    /// belongs to the host language. A start without a stop extends its
    /// section to the end of the text.
    #[must_use]
    pub fn split(&self, text: &str) -> Sections {
        let mut breaks = vec![SectionBreak {
            offset: 0,
            language: self.default_language.to_owned(),
        }];
        let mut offset = 0;
        while offset < text.len() {
            let Some((rule, captures)) = self.earliest_start(text, offset) else {
                break;
            };
            let Some(whole) = captures.get(0) else {
                break;
            };
            let language = rule.language.resolve(&captures);
            trace!(offset = whole.start(), language = %language, "section start");
            push_break(&mut breaks, whole.start(), language);
            offset = whole.end().max(whole.start() + 1);
            let Some(stop) = rule.stop.find_at(text, offset.min(text.len())) else {
                break;
            };
            trace!(offset = stop.start(), "section stop");
            push_break(&mut breaks, stop.start(), self.default_language.to_owned());
            offset = stop.end().max(offset);
        }
        Sections {
            breaks,
            len: text.len(),
        }
    }

    fn earliest_start<'t>(
        &self,
        text: &'t str,
        offset: usize,
    ) -> Option<(&SectionRule, Captures<'t>)> {
        self.rules
            .iter()
            .filter_map(|rule| {
                rule.start
                    .captures_at(text, offset)
                    .map(|captures| (rule, captures))
            })
            .min_by_key(|(_, captures)| captures.get(0).map_or(usize::MAX, |m| m.start()))
    }
}

fn push_break(breaks: &mut Vec<SectionBreak>, offset: usize, language: String) {
    match breaks.last_mut() {
        Some(last) if last.offset >= offset => last.language = language,
        _ => breaks.push(SectionBreak { offset, language }),
    }
}

/// Ordered section breaks covering a whole document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sections {
    breaks: Vec<SectionBreak>,
    len: usize,
}

impl Sections {
    /// Returns the breaks in ascending offset order. The first break is at
    /// offset zero; each section runs to the next break or the end of text.
    #[must_use]
    pub fn breaks(&self) -> &[SectionBreak] {
        &self.breaks
    }

    /// Returns the language at `offset`.
    #[must_use]
    pub fn language_at(&self, offset: usize) -> Option<&str> {
        self.breaks
            .iter()
            .take_while(|section| section.offset <= offset)
            .last()
            .map(|section| section.language.as_str())
    }

    /// Intersects `selection` with the sections, yielding non-empty pieces in
    /// document order.
    #[must_use]
    pub fn pieces(&self, selection: Range<usize>) -> Vec<Piece> {
        let ends = self
            .breaks
            .iter()
            .skip(1)
            .map(|section| section.offset)
            .chain(std::iter::once(self.len));
        self.breaks
            .iter()
            .zip(ends)
            .filter_map(|(section, end)| {
                let start = section.offset.max(selection.start);
                let stop = end.min(selection.end);
                (start < stop).then(|| Piece {
                    range: start..stop,
                    language: section.language.clone(),
                })
            })
            .collect()
    }
}
