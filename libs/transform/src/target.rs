//! # Target AST
//!
//! C-style call tree produced by the transformer and consumed by the code
//! generator.
//!
//! ```text
//! add(10, subtract(10, 6));
//!
//! Program
//! └── ExpressionStatement
//!     └── CallExpression
//!         ├── callee: Identifier "add"
//!         └── arguments
//!             ├── NumberLiteral "10"
//!             └── CallExpression
//!                 ├── callee: Identifier "subtract"
//!                 └── arguments: [NumberLiteral "10", NumberLiteral "6"]
//! ```
//!
//! Kept separate from the source AST on purpose: a target call splits its
//! callee from its arguments and top-level calls gain a statement wrapper.

use serde::{Deserialize, Serialize};

/// The five kinds of target node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetKind {
    Program,
    ExpressionStatement,
    CallExpression,
    Identifier,
    NumberLiteral,
}

/// Root of the target tree.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Program {
    /// Top-level items in source order.
    pub body: Vec<Statement>,
}

impl Program {
    /// Number of `ExpressionStatement`s in the body.
    pub fn statement_count(&self) -> usize {
        self.body
            .iter()
            .filter(|s| matches!(s, Statement::Expression(_)))
            .count()
    }
}

/// A top-level item of the target program.
///
/// A top-level source number has no statement form and is carried through as
/// a bare literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Statement {
    Expression(ExpressionStatement),
    Literal(NumberLiteral),
}

impl Statement {
    pub fn kind(&self) -> TargetKind {
        match self {
            Statement::Expression(_) => TargetKind::ExpressionStatement,
            Statement::Literal(_) => TargetKind::NumberLiteral,
        }
    }
}

/// A top-level call rendered with a trailing terminator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpressionStatement {
    pub expression: CallExpression,
}

/// An expression in argument position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Expression {
    NumberLiteral(NumberLiteral),
    CallExpression(CallExpression),
}

impl Expression {
    pub fn kind(&self) -> TargetKind {
        match self {
            Expression::NumberLiteral(_) => TargetKind::NumberLiteral,
            Expression::CallExpression(_) => TargetKind::CallExpression,
        }
    }
}

/// `callee(arguments...)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallExpression {
    pub callee: Identifier,
    pub arguments: Vec<Expression>,
}

impl CallExpression {
    /// Create a call with no arguments.
    pub fn new(callee: impl Into<String>) -> Self {
        Self {
            callee: Identifier::new(callee),
            arguments: Vec::new(),
        }
    }

    /// Builder-style argument append.
    pub fn with_argument(mut self, argument: Expression) -> Self {
        self.arguments.push(argument);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberLiteral {
    pub value: String,
}

impl NumberLiteral {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_count_skips_literals() {
        let program = Program {
            body: vec![
                Statement::Expression(ExpressionStatement {
                    expression: CallExpression::new("a"),
                }),
                Statement::Literal(NumberLiteral::new("1")),
            ],
        };
        assert_eq!(program.statement_count(), 1);
        assert_eq!(program.body[1].kind(), TargetKind::NumberLiteral);
    }
}
