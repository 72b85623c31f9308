//! Source locations for parsed ownership file content.

use serde::Serialize;

/// A location span in the ownership file.
///
/// Line and column are 1-based; the offset is a 0-based byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    /// Byte offset from the start of the input (0-based).
    pub offset: usize,
    /// Line number (1-based).
    pub line: usize,
    /// Column number (1-based).
    pub column: usize,
    /// Length of the span in bytes.
    pub length: usize,
}

impl Span {
    /// Creates a new span with the given position and length.
    pub fn new(offset: usize, line: usize, column: usize, length: usize) -> Self {
        Self {
            offset,
            line,
            column,
            length,
        }
    }

    /// Returns the end offset of this span.
    pub fn end_offset(&self) -> usize {
        self.offset + self.length
    }

    /// Extends this span to cover another span that ends later on the same line.
    pub fn extend(&self, other: &Span) -> Span {
        Span {
            offset: self.offset,
            line: self.line,
            column: self.column,
            length: other.end_offset().saturating_sub(self.offset),
        }
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::new(0, 1, 1, 0)
    }
}
