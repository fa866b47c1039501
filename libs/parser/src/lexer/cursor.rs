//! # Character Cursor
//!
//! Peekable character cursor for the lexer.
//! Walks the source one Unicode code point at a time and tracks the byte
//! offset and code point index as it advances.
//!
//! ## Example
//!
//! ```rust
//! use callc_parser::lexer::Cursor;
//!
//! let mut cursor = Cursor::new("add");
//! assert_eq!(cursor.peek(), Some('a'));
//! cursor.advance();
//! assert_eq!(cursor.peek(), Some('d'));
//! ```

// =============================================================================
// CURSOR
// =============================================================================

/// Character cursor with position tracking.
///
/// ## Example
///
/// ```rust
/// use callc_parser::lexer::Cursor;
///
/// let mut cursor = Cursor::new("add");
/// assert_eq!(cursor.advance(), Some('a'));
/// assert_eq!(cursor.offset(), 1);
/// ```
pub struct Cursor<'a> {
    /// Source text.
    source: &'a str,
    /// Current byte offset.
    byte: usize,
    /// Number of code points consumed.
    index: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor for source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            byte: 0,
            index: 0,
        }
    }

    /// Current byte offset.
    pub fn offset(&self) -> usize {
        self.byte
    }

    /// Number of code points consumed so far.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if at end of input.
    pub fn is_eof(&self) -> bool {
        self.byte >= self.source.len()
    }

    /// Peek at current character without consuming it.
    ///
    /// ## Returns
    ///
    /// Current character or None if at end of input
    pub fn peek(&self) -> Option<char> {
        self.source[self.byte..].chars().next()
    }

    /// Advance to next character.
    ///
    /// ## Returns
    ///
    /// Character that was consumed, or None if at end of input
    ///
    /// ## Example
    ///
    /// ```rust
    /// use callc_parser::lexer::Cursor;
    ///
    /// let mut cursor = Cursor::new("ab");
    /// assert_eq!(cursor.advance(), Some('a'));
    /// assert_eq!(cursor.advance(), Some('b'));
    /// assert_eq!(cursor.advance(), None);
    /// ```
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.byte += c.len_utf8();
        self.index += 1;
        Some(c)
    }

    /// Advance while predicate is true.
    ///
    /// ## Returns
    ///
    /// The text that was consumed.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use callc_parser::lexer::Cursor;
    ///
    /// let mut cursor = Cursor::new("abc123");
    /// assert_eq!(cursor.advance_while(|c| c.is_ascii_alphabetic()), "abc");
    /// assert_eq!(cursor.peek(), Some('1'));
    /// ```
    pub fn advance_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let start = self.byte;
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
        &self.source[start..self.byte]
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_new() {
        let cursor = Cursor::new("hello");
        assert_eq!(cursor.offset(), 0);
        assert!(!cursor.is_eof());
    }

    #[test]
    fn test_cursor_empty() {
        let cursor = Cursor::new("");
        assert!(cursor.is_eof());
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_cursor_peek() {
        let cursor = Cursor::new("abc");
        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.peek(), Some('a')); // Should not advance
    }

    #[test]
    fn test_cursor_advance() {
        let mut cursor = Cursor::new("ab");
        assert_eq!(cursor.advance(), Some('a'));
        assert_eq!(cursor.offset(), 1);
        assert_eq!(cursor.advance(), Some('b'));
        assert_eq!(cursor.offset(), 2);
        assert_eq!(cursor.advance(), None);
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_cursor_advance_while() {
        let mut cursor = Cursor::new("123abc");
        let digits = cursor.advance_while(|c| c.is_ascii_digit());
        assert_eq!(digits, "123");
        assert_eq!(cursor.offset(), 3);
    }

    #[test]
    fn test_cursor_utf8() {
        let mut cursor = Cursor::new("é(");
        assert_eq!(cursor.advance(), Some('é'));
        assert_eq!(cursor.offset(), 2); // é is 2 bytes in UTF-8
        assert_eq!(cursor.index(), 1);
        assert_eq!(cursor.peek(), Some('('));
    }
}
