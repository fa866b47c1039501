//! # Source Span
//!
//! Byte ranges into the source text, carried by tokens and source AST nodes
//! so errors can point at the offending input.
//!
//! ## Usage
//!
//! ```rust
//! use callc_parser::Span;
//!
//! let span = Span::new(1, 4);
//! assert_eq!(span.len(), 3);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A range in the source code, represented as byte offsets.
///
/// # Fields
///
/// - `start`: Starting byte offset (inclusive)
/// - `end`: Ending byte offset (exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Starting byte offset (inclusive)
    pub start: usize,
    /// Ending byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Creates a new span from start and end byte offsets.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Creates an empty span at a single offset.
    #[inline]
    pub const fn at(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span covers no bytes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Smallest span covering both `self` and `other`.
    pub fn merge(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Anything that knows where it came from in the source.
pub trait Spanned {
    /// Source range of this item.
    fn span(&self) -> Span;
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len() {
        assert_eq!(Span::new(2, 7).len(), 5);
        assert!(Span::at(3).is_empty());
    }

    #[test]
    fn test_span_merge() {
        let merged = Span::new(4, 6).merge(Span::new(0, 2));
        assert_eq!(merged, Span::new(0, 6));
    }

    #[test]
    fn test_span_display() {
        assert_eq!(Span::new(1, 3).to_string(), "1..3");
    }
}
