//! Line-incremental comment scanner.
//!
//! The scanner walks a span of a [`Document`] one line at a time, tracking
//! whether it is in plain code, inside a string literal, or inside a
//! (possibly nested) block comment. It never builds a syntax tree. Its only
//! output is a list of candidate deletion ranges; the state is returned so a
//! caller can resume scanning in a following span of the same language.

use crate::document::{Document, Position, TextRange, floor_boundary, slice_between, slice_from};
use crate::language::{BlockClose, BlockComment, CommentDelimiter, LanguageProfile, StringClose};
use crate::retention::{CommentCandidate, RetentionPolicy};

/// Which comment shapes are removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentKinds {
    /// Line comments and block comments closed on their opening line.
    pub single_line: bool,
    /// Block comments spanning several lines.
    pub multi_line: bool,
}

impl Default for CommentKinds {
    fn default() -> Self {
        Self {
            single_line: true,
            multi_line: true,
        }
    }
}

/// Lexical mode at a line boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanMode {
    /// Plain code.
    #[default]
    Normal,
    /// Inside a string literal awaiting `close`.
    InString {
        /// Token ending the literal.
        close: &'static str,
    },
    /// Inside a block comment.
    InBlockComment {
        /// The comment form.
        comment: BlockComment,
        /// Current nesting depth, at least one.
        depth: usize,
    },
}

/// Where an unterminated span began.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenSpan {
    /// Start of the deletion, after sweeping back over whitespace.
    start: Position,
    /// First character after the open token.
    body: Position,
    /// Position of the open token.
    delimiter: Position,
}

/// Memory for whole-line comment rules, reset on any non-comment line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct LineRuleMemory {
    previous_was_comment: bool,
    indent: String,
    keep: bool,
}

/// Scanner state carried between lines and, for unterminated spans, between
/// spans of the same language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanState {
    mode: ScanMode,
    open: Option<OpenSpan>,
    language: String,
    line_rule: LineRuleMemory,
}

impl ScanState {
    /// Creates a fresh state for scanning `language`.
    #[must_use]
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            ..Self::default()
        }
    }

    /// Returns the current lexical mode.
    #[must_use]
    pub const fn mode(&self) -> ScanMode {
        self.mode
    }

    /// Returns the language this state belongs to.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Returns true while a string or block comment is unterminated.
    #[must_use]
    pub const fn is_mid_span(&self) -> bool {
        !matches!(self.mode, ScanMode::Normal)
    }
}

/// Result of scanning one span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    /// State at the end of the span.
    pub state: ScanState,
    /// Candidate deletions in document order.
    pub ranges: Vec<TextRange>,
}

/// Scans spans of a document with one language profile.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'p> {
    profile: &'p LanguageProfile,
    policy: &'p RetentionPolicy,
    kinds: CommentKinds,
}

impl<'p> Scanner<'p> {
    /// Creates a scanner.
    #[must_use]
    pub const fn new(
        profile: &'p LanguageProfile,
        policy: &'p RetentionPolicy,
        kinds: CommentKinds,
    ) -> Self {
        Self {
            profile,
            policy,
            kinds,
        }
    }

    /// Scans `span`, starting from `state`.
    ///
    /// Line-rule memory is reset at the start of every span. A string or
    /// comment left open at the end of the span is reported through the
    /// returned state; no range is emitted for it.
    #[must_use]
    pub fn scan(&self, document: &Document<'_>, span: TextRange, state: ScanState) -> ScanOutcome {
        let mut pass = Pass {
            scanner: *self,
            document,
            span,
            state,
            ranges: Vec::new(),
        };
        pass.state.line_rule = LineRuleMemory::default();
        let has_shebang = document.line(0).starts_with("#!");
        for line in span.start.line..=span.end.line {
            if line == 0 && has_shebang {
                continue;
            }
            pass.scan_line(line);
        }
        ScanOutcome {
            state: pass.state,
            ranges: pass.ranges,
        }
    }
}

struct Pass<'s, 'd> {
    scanner: Scanner<'s>,
    document: &'s Document<'d>,
    span: TextRange,
    state: ScanState,
    ranges: Vec<TextRange>,
}

impl Pass<'_, '_> {
    fn scan_line(&mut self, line: usize) {
        let full = self.document.line(line);
        let is_last = line == self.span.end.line;
        let text = if is_last {
            slice_between(full, 0, self.span.end.column)
        } else {
            full
        };
        if is_last && text.is_empty() {
            return;
        }
        let line_start = if line == self.span.start.line {
            floor_boundary(text, self.span.start.column)
        } else {
            0
        };

        let from = match self.state.mode {
            ScanMode::InString { close } => {
                let Some(end) = find_string_close(text, line_start, close) else {
                    return;
                };
                self.state.mode = ScanMode::Normal;
                self.state.open = None;
                end
            }
            ScanMode::InBlockComment { comment, depth } => {
                let mut remaining = depth;
                let Some(close) = find_block_close(text, line_start, &comment, &mut remaining)
                else {
                    self.state.mode = ScanMode::InBlockComment {
                        comment,
                        depth: remaining,
                    };
                    return;
                };
                self.close_open_comment(line, close);
                close.end
            }
            ScanMode::Normal => {
                if self.line_rule(line, text, line_start) {
                    return;
                }
                line_start
            }
        };

        self.state.line_rule = LineRuleMemory::default();
        self.scan_characters(line, text, from, line_start);
    }

    /// Applies the profile's whole-line rule. Returns true when the line is a
    /// comment line.
    fn line_rule(&mut self, line: usize, text: &str, line_start: usize) -> bool {
        let Some(rule) = self.scanner.profile.line_rule() else {
            return false;
        };
        if text.is_empty() {
            return false;
        }
        let memory = &self.state.line_rule;
        let indent = leading_indent(text);
        let continues = self.scanner.profile.is_indent_sensitive()
            && memory.previous_was_comment
            && indent.starts_with(memory.indent.as_str())
            && indent.len() > memory.indent.len();
        if !continues {
            let Some(body) = rule.match_end(text) else {
                return false;
            };
            let candidate = CommentCandidate::new(
                slice_from(text, body),
                opens_document(self.document, Position::new(line, 0)),
            );
            self.state.line_rule.indent = indent.to_owned();
            self.state.line_rule.keep = self.scanner.policy.retains(&candidate);
        }
        if self.scanner.kinds.single_line && !self.state.line_rule.keep {
            self.ranges.push(TextRange::new(
                Position::new(line, line_start),
                Position::new(line, text.len()),
            ));
        }
        self.state.line_rule.previous_was_comment = true;
        true
    }

    fn scan_characters(&mut self, line: usize, text: &str, from: usize, line_start: usize) {
        let mut index = from;
        'chars: while index < text.len() {
            let rest = slice_from(text, index);

            for delimiter in self.scanner.profile.strings() {
                if !delimiter.opens(rest) {
                    continue;
                }
                let after_open = index + delimiter.open().len();
                let close = match delimiter.close() {
                    StringClose::EndOfLine => return,
                    StringClose::Open => delimiter.open(),
                    StringClose::Token(token) => token,
                };
                if let Some(end) = find_string_close(text, after_open, close) {
                    index = end;
                    continue 'chars;
                }
                self.state.mode = ScanMode::InString { close };
                self.state.open = Some(OpenSpan {
                    start: Position::new(line, index),
                    body: Position::new(line, after_open),
                    delimiter: Position::new(line, index),
                });
                return;
            }

            for delimiter in self.scanner.profile.comments() {
                let open = delimiter.open();
                if !rest.starts_with(open) {
                    continue;
                }
                let start = Position::new(line, sweep_whitespace(text, index, line_start));
                let body = index + open.len();
                let opened_at = Position::new(line, index);
                match delimiter {
                    CommentDelimiter::Line(_) => {
                        if self.scanner.kinds.single_line
                            && !self.retains(slice_from(text, body), opened_at)
                        {
                            self.ranges
                                .push(TextRange::new(start, Position::new(line, text.len())));
                        }
                        return;
                    }
                    CommentDelimiter::Block(comment) => {
                        let mut depth = 1;
                        if let Some(close) = find_block_close(text, body, comment, &mut depth) {
                            if self.scanner.kinds.single_line
                                && !self.retains(slice_between(text, body, close.start), opened_at)
                            {
                                self.ranges
                                    .push(TextRange::new(start, Position::new(line, close.end)));
                            }
                            index = close.end;
                            continue 'chars;
                        }
                        self.state.mode = ScanMode::InBlockComment {
                            comment: *comment,
                            depth,
                        };
                        self.state.open = Some(OpenSpan {
                            start,
                            body: Position::new(line, body),
                            delimiter: opened_at,
                        });
                        return;
                    }
                }
            }

            index += rest.chars().next().map_or(1, char::len_utf8);
        }
    }

    /// Emits the ranges for a block comment that opened on an earlier line and
    /// closes on `line`.
    fn close_open_comment(&mut self, line: usize, close: CloseMatch) {
        self.state.mode = ScanMode::Normal;
        let Some(open) = self.state.open.take() else {
            return;
        };
        if !self.scanner.kinds.multi_line {
            return;
        }
        let body = self.collect_body(open.body, Position::new(line, close.start));
        if self.retains(&body, open.delimiter) {
            return;
        }
        let close_end = Position::new(line, close.end);
        if open.start.line == line {
            self.ranges.push(TextRange::new(open.start, close_end));
            return;
        }
        let open_line_end = Position::new(open.start.line, self.document.line(open.start.line).len());
        self.ranges.push(TextRange::new(open.start, open_line_end));
        if open.start.line + 1 != line {
            self.ranges.push(TextRange::new(
                Position::new(open.start.line + 1, 0),
                Position::new(line, 0),
            ));
        }
        self.ranges
            .push(TextRange::new(Position::new(line, 0), close_end));
    }

    /// Joins the comment body across lines with tab separators.
    fn collect_body(&self, from: Position, to: Position) -> String {
        if from.line == to.line {
            return slice_between(self.document.line(from.line), from.column, to.column).to_owned();
        }
        let first = slice_from(self.document.line(from.line), from.column);
        let interior = (from.line + 1..to.line).map(|line| self.document.line(line));
        let last = slice_between(self.document.line(to.line), 0, to.column);
        std::iter::once(first)
            .chain(interior)
            .chain(std::iter::once(last))
            .collect::<Vec<_>>()
            .join("\t")
    }

    fn retains(&self, body: &str, opened_at: Position) -> bool {
        let candidate = CommentCandidate::new(body, opens_document(self.document, opened_at));
        self.scanner.policy.retains(&candidate)
    }
}

/// Byte offsets of a closing token within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CloseMatch {
    start: usize,
    end: usize,
}

/// Finds the end of a string literal on `text`, starting at `from`. A
/// backslash skips the following character.
fn find_string_close(text: &str, from: usize, close: &str) -> Option<usize> {
    let mut index = from;
    loop {
        let rest = slice_from(text, index);
        if rest.starts_with(close) {
            return Some(index + close.len());
        }
        let mut chars = rest.chars();
        match chars.next() {
            None => return None,
            Some('\\') => {
                index += 1 + chars.next().map_or(0, char::len_utf8);
            }
            Some(other) => index += other.len_utf8(),
        }
    }
}

/// Finds the close of a block comment on `text`, starting at `from` with the
/// given nesting depth. The depth is updated whether or not the close is
/// found on this line.
fn find_block_close(
    text: &str,
    from: usize,
    comment: &BlockComment,
    depth: &mut usize,
) -> Option<CloseMatch> {
    let close = match comment.close() {
        BlockClose::Token(token) => token,
        BlockClose::LineEndUnless(continuation) => {
            if text.ends_with(continuation) {
                return None;
            }
            *depth = 0;
            let end = text.len().max(from);
            return Some(CloseMatch { start: end, end });
        }
    };
    let mut index = from;
    while index < text.len() {
        let rest = slice_from(text, index);
        if let Some(nested) = comment.nested_open().filter(|open| rest.starts_with(*open)) {
            *depth += 1;
            index += nested.len();
            continue;
        }
        if rest.starts_with(close) {
            *depth = depth.saturating_sub(1);
            index += close.len();
            if *depth == 0 {
                return Some(CloseMatch {
                    start: index - close.len(),
                    end: index,
                });
            }
            continue;
        }
        index += rest.chars().next().map_or(1, char::len_utf8);
    }
    None
}

/// Moves `index` back over whitespace, never before `floor`.
fn sweep_whitespace(text: &str, index: usize, floor: usize) -> usize {
    let trailing = slice_between(text, floor, index)
        .chars()
        .rev()
        .take_while(|c| c.is_whitespace())
        .map(char::len_utf8)
        .sum::<usize>();
    index - trailing
}

fn leading_indent(text: &str) -> &str {
    let width = text.len() - text.trim_start_matches([' ', '\t']).len();
    slice_between(text, 0, width)
}

/// Returns true when `position` is the first character of the document, or of
/// the line following a shebang.
fn opens_document(document: &Document<'_>, position: Position) -> bool {
    position.column == 0
        && (position.line == 0 || (position.line == 1 && document.line(0).starts_with("#!")))
}
