//! Recursive rendering of target nodes.

use crate::error::CodegenError;
use callc_transform::target::{
    CallExpression, Expression, ExpressionStatement, Identifier, NumberLiteral, Program, Statement,
};
use config::constants::{
    ARGUMENT_SEPARATOR, STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, STATEMENT_SEPARATOR,
    STATEMENT_TERMINATOR,
};
use stacker::maybe_grow;
use std::fmt::Write;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Render any target node to a string.
///
/// ## Example
///
/// ```rust
/// use callc_codegen::generate;
/// use callc_transform::target::Identifier;
///
/// assert_eq!(generate(&Identifier::new("add")).unwrap(), "add");
/// ```
pub fn generate<N: Generate + ?Sized>(node: &N) -> Result<String, CodegenError> {
    let mut writer = CodeWriter::default();
    node.generate(&mut writer)?;
    let output = writer.finish();
    log::debug!("generated {} bytes", output.len());
    Ok(output)
}

/// Output buffer the nodes render into.
#[derive(Debug, Default)]
pub struct CodeWriter {
    out: String,
}

impl CodeWriter {
    /// Append raw text.
    pub fn write(&mut self, text: &str) -> Result<(), CodegenError> {
        self.out.write_str(text)?;
        Ok(())
    }

    /// Render `items` with `separator` between consecutive ones.
    pub fn write_separated<'a, T, I>(&mut self, items: I, separator: &str) -> Result<(), CodegenError>
    where
        T: Generate + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                self.write(separator)?;
            }
            item.generate(self)?;
        }
        Ok(())
    }

    /// Take the rendered text.
    pub fn finish(self) -> String {
        self.out
    }
}

/// A node that knows how to render itself.
pub trait Generate {
    fn generate(&self, w: &mut CodeWriter) -> Result<(), CodegenError>;
}

// =============================================================================
// NODE RENDERING
// =============================================================================

impl Generate for Program {
    fn generate(&self, w: &mut CodeWriter) -> Result<(), CodegenError> {
        w.write_separated(&self.body, STATEMENT_SEPARATOR)
    }
}

impl Generate for Statement {
    fn generate(&self, w: &mut CodeWriter) -> Result<(), CodegenError> {
        match self {
            Statement::Expression(s) => s.generate(w),
            Statement::Literal(n) => n.generate(w),
        }
    }
}

impl Generate for ExpressionStatement {
    fn generate(&self, w: &mut CodeWriter) -> Result<(), CodegenError> {
        self.expression.generate(w)?;
        w.write(STATEMENT_TERMINATOR)
    }
}

impl Generate for Expression {
    fn generate(&self, w: &mut CodeWriter) -> Result<(), CodegenError> {
        match self {
            Expression::NumberLiteral(n) => n.generate(w),
            Expression::CallExpression(c) => c.generate(w),
        }
    }
}

impl Generate for CallExpression {
    fn generate(&self, w: &mut CodeWriter) -> Result<(), CodegenError> {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            self.callee.generate(w)?;
            w.write("(")?;
            w.write_separated(&self.arguments, ARGUMENT_SEPARATOR)?;
            w.write(")")
        })
    }
}

impl Generate for Identifier {
    fn generate(&self, w: &mut CodeWriter) -> Result<(), CodegenError> {
        w.write(&self.name)
    }
}

impl Generate for NumberLiteral {
    fn generate(&self, w: &mut CodeWriter) -> Result<(), CodegenError> {
        w.write(&self.value)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn number(value: &str) -> Expression {
        Expression::NumberLiteral(NumberLiteral::new(value))
    }

    fn statement(call: CallExpression) -> Statement {
        Statement::Expression(ExpressionStatement { expression: call })
    }

    #[test]
    fn test_zero_argument_call() {
        assert_eq!(generate(&CallExpression::new("foo")).unwrap(), "foo()");
    }

    #[test]
    fn test_arguments_are_comma_separated() {
        let call = CallExpression::new("a")
            .with_argument(number("1"))
            .with_argument(number("2"))
            .with_argument(number("3"));
        assert_eq!(generate(&call).unwrap(), "a(1, 2, 3)");
    }

    #[test]
    fn test_statement_gets_terminator() {
        let stmt = ExpressionStatement {
            expression: CallExpression::new("f"),
        };
        assert_eq!(generate(&stmt).unwrap(), "f();");
    }

    #[test]
    fn test_nested_call_has_no_terminator() {
        let inner = CallExpression::new("subtract")
            .with_argument(number("10"))
            .with_argument(number("6"));
        let outer = CallExpression::new("add")
            .with_argument(number("10"))
            .with_argument(Expression::CallExpression(inner));
        let program = Program {
            body: vec![statement(outer)],
        };
        assert_eq!(generate(&program).unwrap(), "add(10, subtract(10, 6));");
    }

    #[test]
    fn test_program_joins_with_newlines() {
        let program = Program {
            body: vec![
                statement(CallExpression::new("a")),
                Statement::Literal(NumberLiteral::new("7")),
                statement(CallExpression::new("b")),
            ],
        };
        assert_eq!(generate(&program).unwrap(), "a();\n7\nb();");
    }

    #[test]
    fn test_empty_program() {
        assert_eq!(generate(&Program::default()).unwrap(), "");
    }

    #[test]
    fn test_deeply_nested_call() {
        let mut call = CallExpression::new("f");
        for _ in 0..2000 {
            call = CallExpression::new("f").with_argument(Expression::CallExpression(call));
        }
        let output = generate(&call).unwrap();
        assert!(output.starts_with("f(f(f("));
        assert_eq!(output.matches('(').count(), 2001);
    }
}
