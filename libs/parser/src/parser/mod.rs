//! # callc Parser
//!
//! Recursive descent parser over the token sequence.
//! Produces the source AST rooted at [`Program`].
//!
//! The cursor lives inside the [`Parser`] value, so each parse owns its own
//! position and several parses can run side by side.
//!
//! ## Example
//!
//! ```rust
//! use callc_parser::lexer::Lexer;
//! use callc_parser::parser::Parser;
//!
//! let tokens = Lexer::new("(add 1 2)").tokenize().unwrap().tokens;
//! let program = Parser::new(tokens).parse().unwrap();
//! assert_eq!(program.body.len(), 1);
//! ```

mod expressions;

use crate::ast::Program;
use crate::error::ParseError;
use crate::lexer::Token;
use config::constants::MAX_NESTING_DEPTH;

// =============================================================================
// PARSER
// =============================================================================

/// Recursive descent parser for callc.
pub struct Parser {
    /// Token stream.
    tokens: Vec<Token>,
    /// Current token index.
    current: usize,
    /// Deepest call nesting accepted.
    max_depth: usize,
}

impl Parser {
    /// Create a new parser with the default nesting limit.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::with_max_depth(tokens, MAX_NESTING_DEPTH)
    }

    /// Create a parser accepting at most `max_depth` nested calls.
    pub fn with_max_depth(tokens: Vec<Token>, max_depth: usize) -> Self {
        Self {
            tokens,
            current: 0,
            max_depth,
        }
    }

    /// Parse the entire token stream into a program.
    ///
    /// Top-level nodes are read until the tokens run out.
    ///
    /// ## Errors
    ///
    /// The first unexpected token or premature end of input aborts the parse.
    pub fn parse(&mut self) -> Result<Program, ParseError> {
        let mut body = Vec::new();

        while !self.is_at_end() {
            body.push(self.walk(0)?);
        }

        log::debug!("parsed {} top-level nodes", body.len());
        Ok(Program::new(body))
    }

    // =========================================================================
    // TOKEN ACCESS
    // =========================================================================

    /// Get current token, if any remain.
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.current)
    }

    /// Check if every token has been consumed.
    fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// Consume the current token.
    ///
    /// ## Errors
    ///
    /// `UnexpectedEof` naming `expected` when no token is left.
    fn advance(&mut self, expected: &str) -> Result<Token, ParseError> {
        let token = self
            .tokens
            .get(self.current)
            .cloned()
            .ok_or_else(|| self.eof_error(expected))?;
        self.current += 1;
        Ok(token)
    }

    /// End-of-input error positioned just past the last token.
    fn eof_error(&self, expected: &str) -> ParseError {
        let end = self.tokens.last().map_or(0, |t| t.span.end);
        ParseError::unexpected_eof(expected).with_span(crate::span::Span::at(end))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Node;
    use crate::error::ParseErrorKind;
    use crate::lexer::Lexer;
    use crate::span::Span;

    fn parse(source: &str) -> Result<Program, ParseError> {
        let tokens = Lexer::new(source).tokenize().unwrap().tokens;
        Parser::new(tokens).parse()
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_multiple_top_level() {
        let program = parse("(a) (b) 7").unwrap();
        assert_eq!(program.body.len(), 3);
        assert!(matches!(program.body[2], Node::NumberLiteral(_)));
    }

    #[test]
    fn test_eof_error_points_past_last_token() {
        let err = parse("(add 10").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::UnexpectedEof { .. }));
        assert_eq!(err.span, Span::at(7));
    }

    #[test]
    fn test_parsers_are_independent() {
        let mut first = Parser::new(Lexer::new("(a 1)").tokenize().unwrap().tokens);
        let mut second = Parser::new(Lexer::new("(b 2 3)").tokenize().unwrap().tokens);
        let b = second.parse().unwrap();
        let a = first.parse().unwrap();
        assert_eq!(a.body.len(), 1);
        assert_eq!(b.body.len(), 1);
    }
}
