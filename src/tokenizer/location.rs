//! # Source Location
//!
//! Line/column cursor advanced by the lexer as it consumes bytes.
use std::fmt::Display;

/// A 1-based (line, column) position within a source buffer.
///
/// Columns count bytes, not characters. Ordering is lexicographic: line
/// first, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    /// Line number, starting at 1
    pub line: usize,
    /// Column number, starting at 1
    pub column: usize,
}

impl Location {
    /// Creates a location at the start of a buffer, `1:1`.
    #[must_use]
    pub const fn new() -> Self {
        Self { line: 1, column: 1 }
    }

    /// Consumes a single ordinary byte.
    pub const fn advance(&mut self) {
        self.column += 1;
    }

    /// Consumes `n` bytes of a lexeme in one step.
    pub const fn advance_by(&mut self, n: usize) {
        self.column += n;
    }

    /// Consumes a line feed.
    pub const fn next_line(&mut self) {
        self.line += 1;
        self.column = 1;
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
