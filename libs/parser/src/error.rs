//! # Parse Errors
//!
//! Error types for the callc front end (lexer and parser).
//!
//! ## Example
//!
//! ```rust
//! use callc_parser::error::ParseError;
//!
//! let error = ParseError::unexpected_eof("')'");
//! assert!(error.to_string().contains("unexpected end of input"));
//! ```

use crate::lexer::Token;
use crate::span::Span;
use thiserror::Error;

// =============================================================================
// PARSE ERROR
// =============================================================================

/// A front-end error with location information.
///
/// Every variant is fatal: the compile that produced it yields no output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at byte {}", .span.start)]
pub struct ParseError {
    /// Error kind with details.
    pub kind: ParseErrorKind,
    /// Source location of error.
    pub span: Span,
}

impl ParseError {
    /// Create a new parse error.
    pub const fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Create unexpected token error pointing at `found`.
    ///
    /// ## Parameters
    ///
    /// - `found`: Token that was found
    /// - `expected`: Description of expected token
    pub fn unexpected_token(found: &Token, expected: &str) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedToken {
                found: found.text.clone(),
                expected: expected.to_string(),
            },
            found.span,
        )
    }

    /// Create unexpected end of input error.
    ///
    /// ## Parameters
    ///
    /// - `expected`: Description of expected token
    pub fn unexpected_eof(expected: &str) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedEof {
                expected: expected.to_string(),
            },
            Span::default(),
        )
    }

    /// Create error with span.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

// =============================================================================
// PARSE ERROR KIND
// =============================================================================

/// Kinds of front-end errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A token that cannot start or continue a node here, including a `(`
    /// not followed by a name.
    #[error("unexpected token '{found}', expected {expected}")]
    UnexpectedToken {
        /// Token text that was found.
        found: String,
        /// Description of what was expected.
        expected: String,
    },

    /// Tokens ran out inside an unterminated call.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof {
        /// Description of what was expected.
        expected: String,
    },

    /// Strict lexing met a character no rule accepts.
    #[error("unexpected character {found:?}")]
    UnexpectedCharacter {
        /// The offending character.
        found: char,
    },

    /// Calls nested deeper than the configured limit.
    #[error("calls nested deeper than {limit} levels")]
    NestingTooDeep {
        /// The configured limit.
        limit: usize,
    },
}

// =============================================================================
// TESTS
// =============================================================================
