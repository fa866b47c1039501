//! # callc Code Generator
//!
//! Last stage of the callc pipeline: renders the target AST as text.
//!
//! ## Rendering
//!
//! | Node                  | Output                                  |
//! |-----------------------|-----------------------------------------|
//! | `Program`             | items joined by newlines                |
//! | `ExpressionStatement` | expression followed by `;`              |
//! | `CallExpression`      | `callee(arg, arg, ...)`                 |
//! | `Identifier`          | the name                                |
//! | `NumberLiteral`       | the digits                              |
//!
//! ## Example
//!
//! ```rust
//! use callc_codegen::generate;
//! use callc_transform::target::{CallExpression, Expression, NumberLiteral};
//!
//! let call = CallExpression::new("f")
//!     .with_argument(Expression::NumberLiteral(NumberLiteral::new("1")));
//! assert_eq!(generate(&call).unwrap(), "f(1)");
//! ```

pub mod error;
mod generator;

pub use error::CodegenError;
pub use generator::{generate, CodeWriter, Generate};
