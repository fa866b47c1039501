//! # Tokens
//!
//! Token types for the callc lexer.
//!
//! ## Example
//!
//! ```rust
//! use callc_parser::lexer::{Token, TokenKind};
//! use callc_parser::Span;
//!
//! let token = Token::new(TokenKind::Number, Span::new(0, 2), "10");
//! assert_eq!(token.kind, TokenKind::Number);
//! ```

use crate::span::{Span, Spanned};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// TOKEN
// =============================================================================

/// A token produced by the lexer.
///
/// Tokens are immutable once produced; the parser reads them left to right
/// exactly once.
///
/// ## Example
///
/// ```rust
/// use callc_parser::lexer::{Token, TokenKind};
/// use callc_parser::Span;
///
/// let token = Token::new(TokenKind::Name, Span::new(1, 4), "add");
/// assert_eq!(token.text, "add");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Token type.
    pub kind: TokenKind,
    /// Source span.
    pub span: Span,
    /// Token text.
    pub text: String,
}

impl Token {
    /// Create a new token.
    ///
    /// ## Parameters
    ///
    /// - `kind`: Token type
    /// - `span`: Source location
    /// - `text`: Token text
    pub fn new(kind: TokenKind, span: Span, text: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            text: text.into(),
        }
    }

    /// Check if token is `(`.
    pub fn is_open_paren(&self) -> bool {
        self.kind == TokenKind::Paren && self.text == "("
    }

    /// Check if token is `)`.
    pub fn is_close_paren(&self) -> bool {
        self.kind == TokenKind::Paren && self.text == ")"
    }
}

impl Spanned for Token {
    fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.text)
    }
}

// =============================================================================
// TOKEN KIND
// =============================================================================

/// Types of tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// `(` or `)`; the token text tells which.
    Paren,
    /// Run of ASCII digits like `10`
    Number,
    /// Run of ASCII letters like `add`
    Name,
}

impl TokenKind {
    /// Human-readable name for error messages.
    pub const fn display(&self) -> &'static str {
        match self {
            Self::Paren => "parenthesis",
            Self::Number => "number",
            Self::Name => "name",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

// =============================================================================
// TESTS
// =============================================================================
