//! Source positions and provenance range resolution.
//!
//! Ranges are supplied by the tokenizer and trusted as-is: nothing here checks
//! that a range's start precedes its end, or that a marker lies inside the
//! document. Reversed input produces reversed output.

use std::fmt;
use std::ops::Range;

/// A position in the source text.
///
/// Lines and columns are 1-based; columns count UTF-8 bytes. Ordering is
/// line-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceLocation {
    /// 1-based line number.
    pub line: usize,
    /// 1-based byte column within the line.
    pub column: usize,
}

impl SourceLocation {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Half-open interval `[start, end)` over source locations.
pub type SourceRange = Range<SourceLocation>;

/// Resolves a node's range from its opening and closing marker ranges.
///
/// - both markers: from the start marker's beginning to the end marker's end
/// - only one marker: that marker's own span
/// - neither: `None`, leaving the caller to fall back to its children
pub fn resolve_marker_range(
    start: Option<SourceRange>,
    end: Option<SourceRange>,
) -> Option<SourceRange> {
    match (start, end) {
        (Some(start), Some(end)) => Some(start.start..end.end),
        (Some(start), None) => Some(start),
        (None, Some(end)) => Some(end),
        (None, None) => None,
    }
}

/// Smallest range covering every given range: lowest start to highest end.
///
/// Returns `None` for an empty input.
pub fn union_range<'a>(ranges: impl IntoIterator<Item = &'a SourceRange>) -> Option<SourceRange> {
    ranges.into_iter().fold(None, |acc: Option<SourceRange>, range| {
        Some(match acc {
            Some(acc) => acc.start.min(range.start)..acc.end.max(range.end),
            None => range.clone(),
        })
    })
}
