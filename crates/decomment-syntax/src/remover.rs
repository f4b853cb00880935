//! Comment removal over whole documents.
//!
//! [`Remover`] ties the stages together: resolve the language profile, split
//! embedded sections, scan each piece, collapse blank lines, then merge and
//! apply every deletion in a single pass.

use std::collections::HashMap;
use std::ops::Range;

use tracing::debug;

use crate::blank_lines::{BlankLineCollapser, LineWindow};
use crate::document::{Document, TextRange, floor_boundary};
use crate::language::{LanguageProfile, ProfileOptions};
use crate::retention::{RetentionPattern, RetentionPolicy};
use crate::scanner::{CommentKinds, ScanState, Scanner};
use crate::sections::Piece;

/// Settings for a [`Remover`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalOptions {
    /// Remove line comments and block comments closed on their opening line.
    pub remove_single_line: bool,
    /// Remove block comments spanning several lines.
    pub remove_multi_line: bool,
    /// Keep only comments whose body starts with this prefix.
    pub retention_prefix: Option<String>,
    /// Keep comments matching any of these patterns.
    pub retention_patterns: Vec<RetentionPattern>,
    /// Blank lines to remove above each removed comment line.
    pub blank_lines_before: usize,
    /// Blank lines to remove below each removed comment line.
    pub blank_lines_after: usize,
    /// Treat `//` as a comment in C.
    pub c99_line_comments: bool,
    /// Keep JavaScript and TypeScript `/** */` blocks.
    pub preserve_doc_blocks: bool,
}

impl Default for RemovalOptions {
    fn default() -> Self {
        Self {
            remove_single_line: true,
            remove_multi_line: true,
            retention_prefix: None,
            retention_patterns: Vec::new(),
            blank_lines_before: 0,
            blank_lines_after: 0,
            c99_line_comments: false,
            preserve_doc_blocks: true,
        }
    }
}

/// Outcome of a removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal {
    /// No comment was removed.
    Unchanged,
    /// The full replacement text.
    Rewritten(String),
}

impl Removal {
    /// Returns true when the text changed.
    #[must_use]
    pub const fn has_changes(&self) -> bool {
        matches!(self, Self::Rewritten(_))
    }

    /// Returns the resulting text, borrowing `original` when unchanged.
    #[must_use]
    pub fn text<'a>(&'a self, original: &'a str) -> &'a str {
        match self {
            Self::Unchanged => original,
            Self::Rewritten(text) => text,
        }
    }
}

/// Strips comments from documents.
///
/// A remover holds only compiled, immutable settings and may be shared across
/// threads.
#[derive(Debug, Clone)]
pub struct Remover {
    options: RemovalOptions,
    policy: RetentionPolicy,
}

impl Remover {
    /// Compiles `options`. Malformed retention patterns are skipped with a
    /// warning.
    #[must_use]
    pub fn new(options: RemovalOptions) -> Self {
        let policy = RetentionPolicy::new(
            options.retention_prefix.as_deref(),
            &options.retention_patterns,
        );
        Self { options, policy }
    }

    /// Removes comments from the whole of `text`.
    #[must_use]
    pub fn remove(&self, text: &str, language: &str) -> Removal {
        self.remove_in(text, language, &[])
    }

    /// Removes comments inside `selections`, given as byte ranges.
    ///
    /// Empty selections are ignored; when none remain the whole text is
    /// processed. Unsupported languages leave the text unchanged.
    #[must_use]
    pub fn remove_in(&self, text: &str, language: &str, selections: &[Range<usize>]) -> Removal {
        let profile_options = self.profile_options();
        let profile = LanguageProfile::resolve(language, &profile_options);
        if !profile.is_supported() {
            debug!(language, "unsupported language, leaving text unchanged");
            return Removal::Unchanged;
        }

        let document = Document::new(text);
        let selections = normalise_selections(text, selections);
        let sections = profile.sections().map(|rules| rules.split(text));
        let pieces = selections.into_iter().enumerate().flat_map(|(index, range)| {
            let tagged = sections.as_ref().map_or_else(
                || {
                    vec![Piece {
                        range: range.clone(),
                        language: profile.language().to_owned(),
                    }]
                },
                |split| split.pieces(range.clone()),
            );
            tagged.into_iter().map(move |piece| (index, piece))
        });

        let mut run = Run::new(self, &document, profile_options);
        run.profiles.insert(profile.language().to_owned(), profile.clone());
        for (selection, piece) in pieces {
            run.scan_piece(selection, &piece);
        }
        let deletions = run.finish();
        apply(text, deletions)
    }

    fn profile_options(&self) -> ProfileOptions {
        ProfileOptions {
            c99_line_comments: self.options.c99_line_comments,
            preserve_doc_blocks: self.options.preserve_doc_blocks,
        }
    }

    const fn kinds(&self) -> CommentKinds {
        CommentKinds {
            single_line: self.options.remove_single_line,
            multi_line: self.options.remove_multi_line,
        }
    }

    const fn collapser(&self) -> BlankLineCollapser {
        BlankLineCollapser::new(self.options.blank_lines_before, self.options.blank_lines_after)
    }
}

/// Consecutive pieces scanned with carried state. A run ends when the state
/// is settled at a piece boundary, or when an open span meets a different
/// language or selection.
struct Run<'r, 'd> {
    remover: &'r Remover,
    document: &'r Document<'d>,
    profile_options: ProfileOptions,
    profiles: HashMap<String, LanguageProfile>,
    state: Option<(usize, ScanState)>,
    ranges: Vec<TextRange>,
    window: Option<LineWindow>,
    deletions: Vec<Range<usize>>,
}

impl<'r, 'd> Run<'r, 'd> {
    fn new(
        remover: &'r Remover,
        document: &'r Document<'d>,
        profile_options: ProfileOptions,
    ) -> Self {
        Self {
            remover,
            document,
            profile_options,
            profiles: HashMap::new(),
            state: None,
            ranges: Vec::new(),
            window: None,
            deletions: Vec::new(),
        }
    }

    fn scan_piece(&mut self, selection: usize, piece: &Piece) {
        let span = TextRange::new(
            self.document.position_at(piece.range.start),
            self.document.position_at(piece.range.end),
        );
        let carried = match self.state.take() {
            Some((previous, state))
                if state.is_mid_span()
                    && previous == selection
                    && state.language() == piece.language =>
            {
                Some(state)
            }
            Some((_, state)) => {
                if state.is_mid_span() {
                    debug!(
                        from = state.language(),
                        to = %piece.language,
                        "abandoning unterminated span at section boundary"
                    );
                }
                None
            }
            None => None,
        };
        let state = carried.unwrap_or_else(|| {
            self.flush();
            ScanState::new(piece.language.as_str())
        });

        let window = LineWindow::for_span(span);
        self.window = Some(
            self.window
                .map_or(window, |open| LineWindow::new(open.first, window.last)),
        );

        let profile_options = self.profile_options;
        let profile = self
            .profiles
            .entry(piece.language.clone())
            .or_insert_with(|| LanguageProfile::resolve(&piece.language, &profile_options));
        let scanner = Scanner::new(profile, &self.remover.policy, self.remover.kinds());
        let outcome = scanner.scan(self.document, span, state);
        self.ranges.extend(outcome.ranges);
        self.state = Some((selection, outcome.state));
    }

    /// Collapses the ranges gathered so far into deletions.
    fn flush(&mut self) {
        let ranges = std::mem::take(&mut self.ranges);
        if let Some(window) = self.window.take().filter(|_| !ranges.is_empty()) {
            self.deletions.extend(self.remover.collapser().collapse(
                self.document,
                &ranges,
                window,
            ));
        }
    }

    fn finish(mut self) -> Vec<Range<usize>> {
        if let Some((_, state)) = &self.state {
            if state.is_mid_span() {
                debug!(
                    language = state.language(),
                    "unterminated span at end of selection"
                );
            }
        }
        self.flush();
        self.deletions
    }
}

/// Clamps selections to the text, drops empty ones, and falls back to the
/// whole text when none remain.
fn normalise_selections(text: &str, selections: &[Range<usize>]) -> Vec<Range<usize>> {
    let clamped: Vec<Range<usize>> = selections
        .iter()
        .map(|range| floor_boundary(text, range.start)..floor_boundary(text, range.end))
        .filter(|range| range.start < range.end)
        .collect();
    if !clamped.is_empty() {
        return clamped;
    }
    if text.is_empty() {
        Vec::new()
    } else {
        vec![0..text.len()]
    }
}

/// Merges overlapping deletions and applies them in one pass.
fn apply(text: &str, mut deletions: Vec<Range<usize>>) -> Removal {
    deletions.retain(|range| range.start < range.end);
    if deletions.is_empty() {
        return Removal::Unchanged;
    }
    deletions.sort_by_key(|range| (range.start, range.end));

    let mut merged: Vec<Range<usize>> = Vec::with_capacity(deletions.len());
    for range in deletions {
        match merged.last_mut() {
            Some(last) if range.start <= last.end => last.end = last.end.max(range.end),
            _ => merged.push(range),
        }
    }

    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;
    for range in merged {
        output.push_str(text.get(cursor..range.start).unwrap_or_default());
        cursor = range.end;
    }
    output.push_str(text.get(cursor..).unwrap_or_default());

    if output == text {
        Removal::Unchanged
    } else {
        Removal::Rewritten(output)
    }
}
