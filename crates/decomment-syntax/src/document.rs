//! Line-indexed view over source text.
//!
//! Scanning is line-oriented, but deletions are applied to the flat text. A
//! [`Document`] pre-computes line start offsets so both views can be converted
//! cheaply. Columns are byte offsets within a line.

use std::ops::Range;

/// Zero-based line and byte column within a [`Document`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Zero-based line number.
    pub line: usize,
    /// Byte offset within the line text.
    pub column: usize,
}

impl Position {
    /// Creates a position from a line and column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Half-open span `[start, end)` between two positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TextRange {
    /// Inclusive start position.
    pub start: Position,
    /// Exclusive end position.
    pub end: Position,
}

impl TextRange {
    /// Creates a range from two positions.
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Returns true when the range starts and ends on the same line.
    #[must_use]
    pub const fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }
}

/// Immutable text plus a line index.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    text: &'a str,
    /// Byte offset where each line starts.
    line_starts: Vec<usize>,
}

impl<'a> Document<'a> {
    /// Builds the line index for `text`.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(index, _)| index + 1))
            .collect();
        Self { text, line_starts }
    }

    /// Returns the full text.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Returns the number of lines. A trailing newline opens a final empty line.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns the byte offset at which `line` starts, clamped to the text
    /// length for lines past the end.
    #[must_use]
    pub fn line_start(&self, line: usize) -> usize {
        self.line_starts
            .get(line)
            .copied()
            .unwrap_or(self.text.len())
    }

    /// Returns the text of `line` without its `\n` and any trailing `\r`.
    ///
    /// Lines past the end of the document are empty.
    #[must_use]
    pub fn line(&self, line: usize) -> &'a str {
        let Some(&start) = self.line_starts.get(line) else {
            return "";
        };
        let end = self
            .line_starts
            .get(line + 1)
            .map_or(self.text.len(), |next| next.saturating_sub(1));
        let content = slice_between(self.text, start, end);
        content.strip_suffix('\r').unwrap_or(content)
    }

    /// Returns the byte range of `line` including its line break.
    #[must_use]
    pub fn line_range_with_break(&self, line: usize) -> Range<usize> {
        self.line_start(line)..self.line_start(line + 1)
    }

    /// Converts a position to a byte offset, clamped to the text length.
    #[must_use]
    pub fn offset_at(&self, position: Position) -> usize {
        self.line_start(position.line)
            .saturating_add(position.column)
            .min(self.text.len())
    }

    /// Converts a byte offset to a position. Offsets past the end map to the
    /// end of the document.
    #[must_use]
    pub fn position_at(&self, offset: usize) -> Position {
        let clamped = offset.min(self.text.len());
        let line = match self.line_starts.binary_search(&clamped) {
            Ok(line) => line,
            Err(next) => next.saturating_sub(1),
        };
        Position::new(line, clamped - self.line_start(line))
    }

    /// Returns the position just past the last character.
    #[must_use]
    pub fn end_position(&self) -> Position {
        self.position_at(self.text.len())
    }
}

/// Rounds `index` down to the nearest character boundary of `text`.
pub(crate) fn floor_boundary(text: &str, index: usize) -> usize {
    let mut boundary = index.min(text.len());
    while !text.is_char_boundary(boundary) {
        boundary -= 1;
    }
    boundary
}

/// Returns `text[from..]`, tolerating out-of-range or mid-character offsets.
pub(crate) fn slice_from(text: &str, from: usize) -> &str {
    text.get(floor_boundary(text, from)..).unwrap_or_default()
}

/// Returns `text[from..to]`, tolerating out-of-range or mid-character offsets.
pub(crate) fn slice_between(text: &str, from: usize, to: usize) -> &str {
    let end = floor_boundary(text, to);
    let start = floor_boundary(text, from).min(end);
    text.get(start..end).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, Position::new(0, 0))]
    #[case(5, Position::new(0, 5))]
    #[case(6, Position::new(1, 0))]
    #[case(11, Position::new(1, 5))]
    #[case(12, Position::new(2, 0))]
    #[case(99, Position::new(2, 4))]
    fn offsets_map_to_positions(#[case] offset: usize, #[case] expected: Position) {
        let document = Document::new("hello\nworld\ntest");
        assert_eq!(document.position_at(offset), expected);
    }

    #[test]
    fn positions_round_trip_through_offsets() {
        let document = Document::new("hello\nworld\ntest");
        for offset in 0..=document.text().len() {
            assert_eq!(document.offset_at(document.position_at(offset)), offset);
        }
    }

    #[test]
    fn line_text_excludes_crlf() {
        let document = Document::new("one\r\ntwo\r\n");
        assert_eq!(document.line(0), "one");
        assert_eq!(document.line(1), "two");
        assert_eq!(document.line(2), "");
        assert_eq!(document.line_count(), 3);
    }

    #[test]
    fn line_range_includes_break() {
        let document = Document::new("ab\ncd\nef");
        assert_eq!(document.line_range_with_break(0), 0..3);
        assert_eq!(document.line_range_with_break(1), 3..6);
        assert_eq!(document.line_range_with_break(2), 6..8);
        assert_eq!(document.line_range_with_break(7), 8..8);
    }

    #[test]
    fn lines_past_the_end_are_empty() {
        let document = Document::new("only");
        assert_eq!(document.line(3), "");
        assert_eq!(document.end_position(), Position::new(0, 4));
    }

    #[test]
    fn slicing_helpers_respect_char_boundaries() {
        let text = "aé b";
        assert_eq!(slice_from(text, 2), "é b");
        assert_eq!(slice_between(text, 0, 2), "a");
        assert_eq!(slice_between(text, 3, 99), " b");
        assert_eq!(slice_between(text, 4, 1), "");
    }
}
