//! Post-pass that removes lines left blank by comment removal.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::Range;

use crate::document::{Document, TextRange, slice_between, slice_from};

/// Lines that blank-line sweeps may touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineWindow {
    /// First line of the window.
    pub first: usize,
    /// Last line of the window, inclusive.
    pub last: usize,
}

impl LineWindow {
    /// Creates a window covering `first..=last`.
    #[must_use]
    pub const fn new(first: usize, last: usize) -> Self {
        Self { first, last }
    }

    /// Creates the window for a scanned span. A span ending at column zero
    /// does not include its final line.
    #[must_use]
    pub const fn for_span(span: TextRange) -> Self {
        let last = if span.end.column == 0 && span.end.line > span.start.line {
            span.end.line - 1
        } else {
            span.end.line
        };
        Self::new(span.start.line, last)
    }

    /// Returns true when `line` lies inside the window.
    #[must_use]
    pub const fn contains(&self, line: usize) -> bool {
        self.first <= line && line <= self.last
    }
}

/// Turns candidate comment ranges into byte deletions, widening them to
/// whole lines when a line would otherwise be left blank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlankLineCollapser {
    before: usize,
    after: usize,
}

impl BlankLineCollapser {
    /// Creates a collapser that also removes up to `before` blank lines above
    /// and `after` blank lines below each removed comment line.
    #[must_use]
    pub const fn new(before: usize, after: usize) -> Self {
        Self { before, after }
    }

    /// Converts `ranges`, given in document order, into byte ranges to delete.
    ///
    /// The result may contain overlapping ranges; callers merge before
    /// applying.
    #[must_use]
    pub fn collapse(
        &self,
        document: &Document<'_>,
        ranges: &[TextRange],
        window: LineWindow,
    ) -> Vec<Range<usize>> {
        let mut deletions = Vec::new();
        let mut pending: BTreeMap<usize, Range<usize>> = BTreeMap::new();
        let mut block_lines = BTreeSet::new();

        for group in ranges.chunk_by(|a, b| a.start.line == b.start.line) {
            let (multi_line, single_line): (Vec<&TextRange>, Vec<&TextRange>) =
                group.iter().partition(|range| !range.is_single_line());
            for range in multi_line {
                deletions.push(document.offset_at(range.start)..document.offset_at(range.end));
                block_lines.extend(range.start.line..range.end.line);
            }
            let Some(line) = single_line.first().map(|range| range.start.line) else {
                continue;
            };
            if remainder(document.line(line), &single_line).trim().is_empty() {
                deletions.push(document.line_range_with_break(line));
                let above = (line.saturating_sub(self.before)..line).rev();
                let below = line + 1..=line + self.after;
                sweep(document, above, window, &mut pending);
                sweep(document, below, window, &mut pending);
            } else {
                deletions.extend(
                    single_line
                        .iter()
                        .map(|range| document.offset_at(range.start)..document.offset_at(range.end)),
                );
            }
        }

        for line in &block_lines {
            pending.remove(line);
        }
        deletions.extend(pending.into_values());
        deletions
    }
}

/// Returns the text of a line with the given single-line ranges removed.
fn remainder(text: &str, ranges: &[&TextRange]) -> String {
    let mut kept = String::with_capacity(text.len());
    let mut cursor = 0;
    for range in ranges {
        kept.push_str(slice_between(text, cursor, range.start.column));
        cursor = cursor.max(range.end.column);
    }
    kept.push_str(slice_from(text, cursor));
    kept
}

/// Marks consecutive blank lines for deletion, stopping at the first line
/// outside the window, already pending, or not blank.
fn sweep(
    document: &Document<'_>,
    lines: impl Iterator<Item = usize>,
    window: LineWindow,
    pending: &mut BTreeMap<usize, Range<usize>>,
) {
    for line in lines {
        if !window.contains(line)
            || pending.contains_key(&line)
            || !document.line(line).trim().is_empty()
        {
            break;
        }
        pending.insert(line, document.line_range_with_break(line));
    }
}
