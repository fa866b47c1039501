//! # Source to Target Transformation
//!
//! Rewrites the Lisp-like source tree into the C-style target tree by
//! reacting to source nodes during a [`traverse`] run.
//!
//! ## Insertion stack
//!
//! The transformer keeps a stack of insertion targets. It starts with one
//! frame, the new program's body. Entering a call appends the new call to
//! the container on top of the stack and pushes that call's own argument
//! list; leaving the call removes the frame again. The stack depth therefore
//! always mirrors the call nesting depth, which is what puts nested calls in
//! the right argument list.
//!
//! ## Example
//!
//! ```rust
//! use callc_transform::transform;
//!
//! let source = callc_parser::parse("(add 10 (subtract 10 6))").unwrap();
//! let target = transform(&source).unwrap();
//! assert_eq!(target.statement_count(), 1);
//! ```

mod arena;

use crate::error::TransformError;
use crate::target::Program;
use crate::traverse::{traverse, FrameIndex, NodeRef, Visitor};
use arena::{Arena, Container, Slot};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Transform a source program into a target program.
///
/// ## Errors
///
/// Only internal consistency failures; see [`TransformError`].
pub fn transform(program: &callc_parser::Program) -> Result<Program, TransformError> {
    let mut transformer = Transformer::new();
    traverse(program, &mut transformer)?;
    let target = transformer.finish()?;
    log::debug!(
        "transformed {} top-level nodes into {} statements",
        program.body.len(),
        target.statement_count()
    );
    Ok(target)
}

// =============================================================================
// TRANSFORMER
// =============================================================================

/// Visitor that builds the target tree.
///
/// Frames are local to one transformer, so separate transformations never
/// share insertion state.
#[derive(Debug)]
pub struct Transformer {
    arena: Arena,
    stack: Vec<Container>,
}

impl Transformer {
    /// Create a transformer whose only frame is the program body.
    pub fn new() -> Self {
        Self {
            arena: Arena::default(),
            stack: vec![Container::Body],
        }
    }

    /// Number of open frames, the program body included.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Check the stack is balanced and assemble the target program.
    pub fn finish(self) -> Result<Program, TransformError> {
        if self.stack != [Container::Body] {
            return Err(TransformError::UnbalancedFrames {
                open: self.stack.len().saturating_sub(1),
            });
        }
        self.arena.assemble()
    }

    fn insert(&mut self, slot: Slot) -> Result<arena::SlotId, TransformError> {
        let target = *self.stack.last().ok_or(TransformError::NoInsertionTarget)?;
        let id = self.arena.alloc(slot);
        self.arena.append(target, id)?;
        Ok(id)
    }
}

impl Default for Transformer {
    fn default() -> Self {
        Self::new()
    }
}

impl Visitor for Transformer {
    type Error = TransformError;

    fn enter(
        &mut self,
        node: NodeRef<'_>,
        parent: Option<NodeRef<'_>>,
    ) -> Result<Option<FrameIndex>, TransformError> {
        match node {
            NodeRef::Program(_) => Ok(None),
            NodeRef::NumberLiteral(number) => {
                self.insert(Slot::Number(number.value.clone()))?;
                Ok(None)
            }
            NodeRef::CallExpression(call) => {
                let id = self.arena.alloc(Slot::Call {
                    callee: call.callee.clone(),
                    arguments: Vec::new(),
                });
                if matches!(parent, Some(NodeRef::CallExpression(_))) {
                    let target = *self.stack.last().ok_or(TransformError::NoInsertionTarget)?;
                    self.arena.append(target, id)?;
                } else {
                    self.insert(Slot::Statement(id))?;
                }

                self.stack.push(Container::Arguments(id));
                let frame = self.stack.len() - 1;
                log::trace!("push frame {} for '{}'", frame, call.callee);
                Ok(Some(frame))
            }
        }
    }

    fn leave(
        &mut self,
        _node: NodeRef<'_>,
        _parent: Option<NodeRef<'_>>,
        frame: FrameIndex,
    ) -> Result<(), TransformError> {
        // Frame 0 is the program body and is never closed.
        if frame == 0 || frame >= self.stack.len() {
            return Err(TransformError::FrameOutOfRange {
                frame,
                depth: self.stack.len(),
            });
        }
        self.stack.remove(frame);
        log::trace!("pop frame {}", frame);
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
