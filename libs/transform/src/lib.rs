//! # callc Transform
//!
//! Middle of the callc pipeline: walks the source AST with a generic
//! traversal engine and rebuilds it as a C-style target AST.
//!
//! ## Architecture
//!
//! ```text
//! callc_parser::Program → traverse + Transformer → target::Program
//! ```
//!
//! ## Modules
//!
//! - `traverse` - Visitor trait and depth-first traversal engine
//! - `transformer` - Insertion-stack visitor producing the target tree
//! - `target` - Target AST types
//! - `error` - Internal consistency errors
//!
//! ## Example
//!
//! ```rust
//! let source = callc_parser::parse("(foo)").unwrap();
//! let target = callc_transform::transform(&source).unwrap();
//! assert_eq!(target.body.len(), 1);
//! ```

pub mod error;
pub mod target;
pub mod transformer;
pub mod traverse;

// Re-export public API
pub use error::TransformError;
pub use transformer::{transform, Transformer};
pub use traverse::{traverse, FrameIndex, NodeKind, NodeRef, Visitor};
