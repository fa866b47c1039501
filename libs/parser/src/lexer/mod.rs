//! # callc Lexer
//!
//! Tokenizes call-expression source into parenthesis, number and name tokens.
//!
//! ## Rules
//!
//! Checked in order at each code point:
//!
//! 1. `(` / `)` produce a single-character `Paren` token
//! 2. a space is skipped (tabs and newlines are *not* whitespace)
//! 3. an ASCII digit starts a maximal run of digits (`Number`)
//! 4. an ASCII letter starts a maximal run of letters (`Name`)
//! 5. anything else ends the scan; in [`LexMode::Strict`] it is an error
//!
//! ## Example
//!
//! ```rust
//! use callc_parser::lexer::{Lexer, TokenKind};
//!
//! let tokens = Lexer::new("(add 10)").tokenize().unwrap().tokens;
//! assert_eq!(tokens[1].kind, TokenKind::Name);
//! ```

mod token;
mod cursor;

pub use token::{Token, TokenKind};
pub use cursor::Cursor;

use crate::error::{ParseError, ParseErrorKind};
use crate::span::Span;
use config::constants::LexMode;
use serde::{Deserialize, Serialize};

// =============================================================================
// TOKENS
// =============================================================================

/// Output of a lexer run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tokens {
    /// Tokens in source order.
    pub tokens: Vec<Token>,
    /// Where lenient lexing gave up on an unrecognized character, if it did.
    pub stopped_at: Option<Span>,
}

impl Tokens {
    /// Returns true if the whole input was consumed.
    pub fn is_complete(&self) -> bool {
        self.stopped_at.is_none()
    }
}

// =============================================================================
// LEXER
// =============================================================================

/// callc lexer.
///
/// Scans the source once, left to right, one code point at a time.
pub struct Lexer<'a> {
    /// Character cursor.
    cursor: Cursor<'a>,
    /// Collected tokens.
    tokens: Vec<Token>,
    /// Behavior on unrecognized characters.
    mode: LexMode,
}

impl<'a> Lexer<'a> {
    /// Create a lenient lexer for source text.
    pub fn new(source: &'a str) -> Self {
        Self::with_mode(source, LexMode::Lenient)
    }

    /// Create a lexer with an explicit [`LexMode`].
    pub fn with_mode(source: &'a str, mode: LexMode) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
            mode,
        }
    }

    /// Tokenize the entire source.
    ///
    /// ## Returns
    ///
    /// The tokens read before the end of input or the first unrecognized
    /// character.
    ///
    /// ## Errors
    ///
    /// Only in [`LexMode::Strict`]: `UnexpectedCharacter` for the first
    /// character no rule accepts.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use callc_parser::lexer::Lexer;
    ///
    /// let out = Lexer::new("(a 1)?(b)").tokenize().unwrap();
    /// assert_eq!(out.tokens.len(), 4);
    /// assert!(!out.is_complete());
    /// ```
    pub fn tokenize(mut self) -> Result<Tokens, ParseError> {
        let mut stopped_at = None;

        while let Some(c) = self.cursor.peek() {
            let start = self.cursor.offset();
            match c {
                '(' | ')' => {
                    self.cursor.advance();
                    self.push(TokenKind::Paren, start, c.to_string());
                }
                ' ' => {
                    self.cursor.advance();
                }
                c if c.is_ascii_digit() => {
                    let text = self.cursor.advance_while(|c| c.is_ascii_digit());
                    self.push(TokenKind::Number, start, text.to_string());
                }
                c if c.is_ascii_alphabetic() => {
                    let text = self.cursor.advance_while(|c| c.is_ascii_alphabetic());
                    self.push(TokenKind::Name, start, text.to_string());
                }
                other => {
                    let span = Span::new(start, start + other.len_utf8());
                    if self.mode == LexMode::Strict {
                        return Err(ParseError::new(
                            ParseErrorKind::UnexpectedCharacter { found: other },
                            span,
                        ));
                    }
                    log::warn!(
                        "lexing stopped at byte {} on {:?}; remaining input ignored",
                        start,
                        other
                    );
                    stopped_at = Some(span);
                    break;
                }
            }
        }

        log::debug!("tokenized {} tokens", self.tokens.len());
        Ok(Tokens {
            tokens: self.tokens,
            stopped_at,
        })
    }

    fn push(&mut self, kind: TokenKind, start: usize, text: String) {
        let span = Span::new(start, self.cursor.offset());
        self.tokens.push(Token::new(kind, span, text));
    }
}

// =============================================================================
// TESTS
// =============================================================================
