//! Source positions and spans.
//!
//! Every token carries a [`Span`]: a half-open byte range `[start, end)` into the (newline-normalized)
//! source, plus the 1-based line/column of both ends so diagnostics and the token renderer never need to
//! rescan the text.

use miette::SourceSpan;

/// A 1-based line/column pair. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: u32,
    pub column: u32,
}

impl LineCol {
    /// The first position of any source text.
    pub const START: LineCol = LineCol { line: 1, column: 1 };

    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl Default for LineCol {
    fn default() -> Self {
        Self::START
    }
}

impl std::fmt::Display for LineCol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A half-open byte range with line/column information for both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub start_lc: LineCol,
    pub end_lc: LineCol,
}

impl Span {
    /// Construct a span from byte offsets and their line/column positions.
    pub fn new(start: usize, end: usize, start_lc: LineCol, end_lc: LineCol) -> Self {
        debug_assert!(start <= end, "span start {start} after end {end}");
        Self {
            start,
            end,
            start_lc,
            end_lc,
        }
    }

    /// Construct a zero-width span at a position.
    pub fn point(offset: usize, lc: LineCol) -> Self {
        Self::new(offset, offset, lc, lc)
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both `self` and `other`.
    pub fn to(self, other: Span) -> Span {
        let (start, start_lc) = if other.start < self.start {
            (other.start, other.start_lc)
        } else {
            (self.start, self.start_lc)
        };
        let (end, end_lc) = if other.end > self.end {
            (other.end, other.end_lc)
        } else {
            (self.end, self.end_lc)
        };
        Span::new(start, end, start_lc, end_lc)
    }
}

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        SourceSpan::new(span.start.into(), span.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_covers_both_spans() {
        let a = Span::new(2, 4, LineCol::new(1, 3), LineCol::new(1, 5));
        let b = Span::new(7, 9, LineCol::new(2, 1), LineCol::new(2, 3));
        let joined = a.to(b);
        assert_eq!((joined.start, joined.end), (2, 9));
        assert_eq!(joined.start_lc, LineCol::new(1, 3));
        assert_eq!(joined.end_lc, LineCol::new(2, 3));
        assert_eq!(b.to(a), joined);
    }

    #[test]
    fn point_spans_are_empty() {
        let p = Span::point(5, LineCol::new(3, 2));
        assert!(p.is_empty());
        assert_eq!(p.len(), 0);
    }

    #[test]
    fn converts_to_miette_span() {
        let s = Span::new(3, 8, LineCol::START, LineCol::new(1, 6));
        let source_span: SourceSpan = s.into();
        assert_eq!(source_span.offset(), 3);
        assert_eq!(source_span.len(), 5);
    }
}
