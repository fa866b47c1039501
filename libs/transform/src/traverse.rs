//! # Traversal Engine
//!
//! Pre-order, depth-first walk over the source AST that hands every node and
//! its parent to a [`Visitor`].
//!
//! ## Protocol
//!
//! For each node:
//!
//! 1. `enter(node, parent)` runs and may hand back a frame index
//! 2. the children are walked (`Program` → body, `CallExpression` → params)
//! 3. if `enter` returned a frame, `leave(node, parent, frame)` runs
//!
//! A visitor that returns a frame from `enter` owns something that must be
//! torn down once the subtree is done; `leave` is where that happens.
//!
//! ## Example
//!
//! ```rust
//! use callc_transform::traverse::{traverse, NodeKind, NodeRef, Visitor};
//! use std::convert::Infallible;
//!
//! #[derive(Default)]
//! struct CountCalls(usize);
//!
//! impl Visitor for CountCalls {
//!     type Error = Infallible;
//!
//!     fn enter(&mut self, node: NodeRef<'_>, _: Option<NodeRef<'_>>) -> Result<Option<usize>, Infallible> {
//!         if node.kind() == NodeKind::CallExpression {
//!             self.0 += 1;
//!         }
//!         Ok(None)
//!     }
//! }
//!
//! let program = callc_parser::parse("(a (b) (c 1))").unwrap();
//! let mut counter = CountCalls::default();
//! traverse(&program, &mut counter).unwrap();
//! assert_eq!(counter.0, 3);
//! ```

use callc_parser::ast::{CallExpression, Node, NumberLiteral, Program};
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use serde::Serialize;
use stacker::maybe_grow;

/// Index of an open frame, handed from `enter` to the matching `leave`.
pub type FrameIndex = usize;

// =============================================================================
// NODE VIEW
// =============================================================================

/// Kinds of source node the engine dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    Program,
    NumberLiteral,
    CallExpression,
}

/// Borrowed view of any source node, including the root.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Program(&'a Program),
    NumberLiteral(&'a NumberLiteral),
    CallExpression(&'a CallExpression),
}

impl<'a> NodeRef<'a> {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeRef::Program(_) => NodeKind::Program,
            NodeRef::NumberLiteral(_) => NodeKind::NumberLiteral,
            NodeRef::CallExpression(_) => NodeKind::CallExpression,
        }
    }

    /// Children in visiting order.
    pub fn children(&self) -> &'a [Node] {
        match *self {
            NodeRef::Program(p) => &p.body,
            NodeRef::CallExpression(c) => &c.params,
            NodeRef::NumberLiteral(_) => &[],
        }
    }
}

impl<'a> From<&'a Node> for NodeRef<'a> {
    fn from(node: &'a Node) -> Self {
        match node {
            Node::NumberLiteral(n) => NodeRef::NumberLiteral(n),
            Node::CallExpression(c) => NodeRef::CallExpression(c),
        }
    }
}

impl<'a> From<&'a Program> for NodeRef<'a> {
    fn from(program: &'a Program) -> Self {
        NodeRef::Program(program)
    }
}

// =============================================================================
// VISITOR
// =============================================================================

/// Callbacks invoked by [`traverse`].
///
/// Both hooks default to doing nothing, so a visitor only implements the
/// ones it needs.
pub trait Visitor {
    /// Error that aborts the traversal.
    type Error;

    /// Called before the node's children are walked.
    ///
    /// Returning `Some(frame)` asks for `leave` to be called with that frame
    /// once the children are done.
    fn enter(
        &mut self,
        node: NodeRef<'_>,
        parent: Option<NodeRef<'_>>,
    ) -> Result<Option<FrameIndex>, Self::Error> {
        let _ = (node, parent);
        Ok(None)
    }

    /// Called after the node's children when `enter` returned a frame.
    fn leave(
        &mut self,
        node: NodeRef<'_>,
        parent: Option<NodeRef<'_>>,
        frame: FrameIndex,
    ) -> Result<(), Self::Error> {
        let _ = (node, parent, frame);
        Ok(())
    }
}

// =============================================================================
// TRAVERSAL
// =============================================================================

/// Walk `program` depth-first, calling `visitor` on every node.
///
/// The root is visited with no parent.
///
/// ## Errors
///
/// Stops at the first error returned by the visitor.
pub fn traverse<V: Visitor>(program: &Program, visitor: &mut V) -> Result<(), V::Error> {
    traverse_node(NodeRef::Program(program), None, visitor)
}

fn traverse_node<V: Visitor>(
    node: NodeRef<'_>,
    parent: Option<NodeRef<'_>>,
    visitor: &mut V,
) -> Result<(), V::Error> {
    maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
        log::trace!("enter {:?}", node.kind());
        let frame = visitor.enter(node, parent)?;

        for child in node.children() {
            traverse_node(NodeRef::from(child), Some(node), visitor)?;
        }

        if let Some(frame) = frame {
            log::trace!("leave {:?} frame {}", node.kind(), frame);
            visitor.leave(node, parent, frame)?;
        }
        Ok(())
    })
}

// =============================================================================
// TESTS
// =============================================================================
