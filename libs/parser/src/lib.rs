//! # callc Parser
//!
//! Front end of the callc pipeline: turns call-expression source such as
//! `(add 10 (subtract 10 6))` into a source AST.
//!
//! ## Architecture
//!
//! ```text
//! Source Text → Lexer → Tokens → Parser → Program
//! ```
//!
//! ## Example
//!
//! ```rust
//! use callc_parser::parse;
//!
//! let program = parse("(add 1 2)").unwrap();
//! assert_eq!(program.body.len(), 1);
//! ```
//!
//! ## Pipeline Integration
//!
//! This crate is the first layer in the callc pipeline:
//!
//! ```text
//! callc-parser → callc-transform → callc-codegen → callc
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;

// Re-export public API
pub use ast::{CallExpression, Node, NumberLiteral, Program};
pub use error::{ParseError, ParseErrorKind};
pub use lexer::{Token, TokenKind, Tokens};
pub use span::{Span, Spanned};

use config::constants::LexMode;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Tokenize source leniently.
///
/// Unrecognized characters end the token stream without an error.
///
/// ## Example
///
/// ```rust
/// let tokens = callc_parser::tokenize("(a 1)");
/// assert_eq!(tokens.len(), 4);
/// ```
pub fn tokenize(source: &str) -> Vec<Token> {
    // Lenient lexing never reports errors.
    lexer::Lexer::new(source)
        .tokenize()
        .map(|out| out.tokens)
        .unwrap_or_default()
}

/// Tokenize source with an explicit [`LexMode`].
pub fn tokenize_with(source: &str, mode: LexMode) -> Result<Tokens, ParseError> {
    lexer::Lexer::with_mode(source, mode).tokenize()
}

/// Parse a token sequence into a program.
pub fn parse_tokens(tokens: Vec<Token>) -> Result<Program, ParseError> {
    parser::Parser::new(tokens).parse()
}

/// Parse a token sequence, rejecting calls nested deeper than `max_depth`.
pub fn parse_tokens_with(tokens: Vec<Token>, max_depth: usize) -> Result<Program, ParseError> {
    parser::Parser::with_max_depth(tokens, max_depth).parse()
}

/// Tokenize and parse source in one step.
///
/// ## Errors
///
/// See [`ParseErrorKind`]; lexing is lenient.
pub fn parse(source: &str) -> Result<Program, ParseError> {
    parse_tokens(tokenize(source))
}

// =============================================================================
// TESTS
// =============================================================================
