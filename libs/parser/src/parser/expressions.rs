//! # Node Parsing
//!
//! The recursive `walk` routine: one number literal or one call per
//! invocation, recursing into call arguments.
//!
//! ## Grammar
//!
//! ```text
//! node = NUMBER | "(" NAME node* ")"
//! ```

use super::Parser;
use crate::ast::{CallExpression, Node, NumberLiteral};
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::TokenKind;
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use stacker::maybe_grow;

const NODE_START: &str = "number or '('";
const CALLEE: &str = "function name";
const ARGUMENT_OR_CLOSE: &str = "argument or ')'";

impl Parser {
    /// Parse one node at call nesting `depth`.
    pub(super) fn walk(&mut self, depth: usize) -> Result<Node, ParseError> {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            self.walk_node(depth)
        })
    }

    fn walk_node(&mut self, depth: usize) -> Result<Node, ParseError> {
        let token = self.advance(NODE_START)?;

        match token.kind {
            TokenKind::Number => Ok(NumberLiteral::new(token.text, token.span).into()),
            TokenKind::Paren if token.is_open_paren() => {
                if depth >= self.max_depth {
                    return Err(ParseError::new(
                        ParseErrorKind::NestingTooDeep {
                            limit: self.max_depth,
                        },
                        token.span,
                    ));
                }
                self.parse_call(token.span, depth).map(Node::from)
            }
            _ => Err(ParseError::unexpected_token(&token, NODE_START)),
        }
    }

    /// Parse the rest of a call after its `(`.
    ///
    /// ## Example
    ///
    /// ```text
    /// (foo)
    /// (add 1 (neg 2))
    /// ```
    fn parse_call(
        &mut self,
        open: crate::span::Span,
        depth: usize,
    ) -> Result<CallExpression, ParseError> {
        let name = self.advance(CALLEE)?;
        if name.kind != TokenKind::Name {
            return Err(ParseError::unexpected_token(&name, CALLEE));
        }

        let mut call = CallExpression::new(name.text, open);
        loop {
            match self.peek() {
                None => return Err(self.eof_error(ARGUMENT_OR_CLOSE)),
                Some(t) if t.is_close_paren() => {
                    let close = self.advance(ARGUMENT_OR_CLOSE)?;
                    call.span = open.merge(close.span);
                    return Ok(call);
                }
                Some(_) => call.params.push(self.walk(depth + 1)?),
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Program;
    use crate::lexer::Lexer;
    use crate::span::Span;
    use pretty_assertions::assert_eq;

    fn parse(source: &str) -> Result<Program, ParseError> {
        let tokens = Lexer::new(source).tokenize().unwrap().tokens;
        Parser::new(tokens).parse()
    }

    fn call(node: &Node) -> &CallExpression {
        match node {
            Node::CallExpression(c) => c,
            other => panic!("expected call, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_nested_call() {
        let program = parse("(add 10 (subtract 10 6))").unwrap();
        let add = call(&program.body[0]);
        assert_eq!(add.callee, "add");
        assert_eq!(add.params.len(), 2);
        assert_eq!(
            add.params[0],
            Node::NumberLiteral(NumberLiteral::new("10", Span::new(5, 7)))
        );
        let sub = call(&add.params[1]);
        assert_eq!(sub.callee, "subtract");
        assert_eq!(sub.params.len(), 2);
        assert_eq!(sub.span, Span::new(8, 23));
        assert_eq!(add.span, Span::new(0, 24));
    }

    #[test]
    fn test_parse_zero_argument_call() {
        let program = parse("(foo)").unwrap();
        assert!(call(&program.body[0]).params.is_empty());
    }

    #[test]
    fn test_callee_must_be_name() {
        let err = parse("(1 2)").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedToken {
                found: "1".to_string(),
                expected: CALLEE.to_string(),
            }
        );
        assert_eq!(err.span, Span::new(1, 2));
    }

    #[test]
    fn test_nested_paren_as_callee_is_rejected() {
        let err = parse("((a))").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::UnexpectedToken { ref found, .. } if found == "("));
    }

    #[test]
    fn test_bare_name_is_rejected() {
        let err = parse("foo").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::UnexpectedToken { ref found, .. } if found == "foo"));
    }

    #[test]
    fn test_name_argument_is_rejected() {
        let err = parse("(add x)").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::UnexpectedToken { ref found, .. } if found == "x"));
    }

    #[test]
    fn test_stray_close_paren_is_rejected() {
        let err = parse(")").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::UnexpectedToken { ref found, .. } if found == ")"));
    }

    #[test]
    fn test_unterminated_call() {
        for source in ["(add 10", "(", "(add (sub 1)"] {
            let err = parse(source).unwrap_err();
            assert!(
                matches!(err.kind, ParseErrorKind::UnexpectedEof { .. }),
                "{source}: {err}"
            );
        }
    }

    #[test]
    fn test_nesting_limit() {
        let tokens = Lexer::new("(a (b (c)))").tokenize().unwrap().tokens;
        let err = Parser::with_max_depth(tokens.clone(), 2).parse().unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::NestingTooDeep { limit: 2 });
        assert!(Parser::with_max_depth(tokens, 3).parse().is_ok());
    }

    #[test]
    fn test_deep_nesting_does_not_overflow() {
        let depth = 2000;
        let source = format!("{}{}", "(f ".repeat(depth), ")".repeat(depth));
        let program = parse(&source).unwrap();
        assert_eq!(program.body.len(), 1);
    }
}
