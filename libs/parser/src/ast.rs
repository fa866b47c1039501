//! # Source AST
//!
//! Tree produced by the parser from the Lisp-like call syntax.
//!
//! ```text
//! (add 10 (subtract 10 6))
//!
//! Program
//! └── CallExpression "add"
//!     ├── NumberLiteral "10"
//!     └── CallExpression "subtract"
//!         ├── NumberLiteral "10"
//!         └── NumberLiteral "6"
//! ```
//!
//! The tree is strictly hierarchical: every node is owned by exactly one
//! parent and nothing is shared.

use crate::span::{Span, Spanned};
use serde::{Deserialize, Serialize};

// =============================================================================
// PROGRAM
// =============================================================================

/// Root of the source tree.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Program {
    /// Top-level nodes in source order.
    pub body: Vec<Node>,
}

impl Program {
    /// Create a program from its top-level nodes.
    pub fn new(body: Vec<Node>) -> Self {
        Self { body }
    }

    /// Returns true if the program has no top-level nodes.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

// =============================================================================
// NODES
// =============================================================================

/// A node below the program root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// Digit string like `10`.
    NumberLiteral(NumberLiteral),
    /// Parenthesized call like `(add 1 2)`.
    CallExpression(CallExpression),
}

impl Spanned for Node {
    fn span(&self) -> Span {
        match self {
            Node::NumberLiteral(n) => n.span,
            Node::CallExpression(c) => c.span,
        }
    }
}

impl From<NumberLiteral> for Node {
    fn from(value: NumberLiteral) -> Self {
        Node::NumberLiteral(value)
    }
}

impl From<CallExpression> for Node {
    fn from(value: CallExpression) -> Self {
        Node::CallExpression(value)
    }
}

/// Number literal; the digits are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberLiteral {
    /// Digit text.
    pub value: String,
    /// Span of the number token.
    pub span: Span,
}

impl NumberLiteral {
    /// Create a number literal.
    pub fn new(value: impl Into<String>, span: Span) -> Self {
        Self {
            value: value.into(),
            span,
        }
    }
}

/// Call expression `(callee params...)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallExpression {
    /// Callee name, taken verbatim from the name token after `(`.
    pub callee: String,
    /// Arguments in source order.
    pub params: Vec<Node>,
    /// Span from the opening to the closing parenthesis.
    pub span: Span,
}

impl CallExpression {
    /// Create a call with no arguments.
    pub fn new(callee: impl Into<String>, span: Span) -> Self {
        Self {
            callee: callee.into(),
            params: Vec::new(),
            span,
        }
    }

    /// Builder-style argument append, handy in tests.
    pub fn with_param(mut self, param: impl Into<Node>) -> Self {
        self.params.push(param.into());
        self
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_span() {
        let node = Node::from(NumberLiteral::new("7", Span::new(2, 3)));
        assert_eq!(node.span(), Span::new(2, 3));
    }

    #[test]
    fn test_call_builder() {
        let call = CallExpression::new("add", Span::new(0, 7))
            .with_param(NumberLiteral::new("1", Span::new(5, 6)));
        assert_eq!(call.callee, "add");
        assert_eq!(call.params.len(), 1);
    }
}
