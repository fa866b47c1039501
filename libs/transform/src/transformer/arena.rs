//! Arena of target nodes under construction.
//!
//! Nodes are appended to their container the moment they are created, so the
//! insertion stack only has to remember *which* container is current. Once
//! traversal is done the arena is folded into the owned target tree.

use crate::error::TransformError;
use crate::target::{
    CallExpression, Expression, ExpressionStatement, NumberLiteral, Program, Statement,
};
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use stacker::maybe_grow;

pub(crate) type SlotId = usize;

/// A target node whose children are arena ids.
#[derive(Debug)]
pub(crate) enum Slot {
    Number(String),
    Call { callee: String, arguments: Vec<SlotId> },
    Statement(SlotId),
}

/// A sequence new nodes can be appended to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Container {
    /// The program body.
    Body,
    /// The argument list of the call in this slot.
    Arguments(SlotId),
}

#[derive(Debug, Default)]
pub(crate) struct Arena {
    slots: Vec<Option<Slot>>,
    body: Vec<SlotId>,
}

impl Arena {
    pub(crate) fn alloc(&mut self, slot: Slot) -> SlotId {
        self.slots.push(Some(slot));
        self.slots.len() - 1
    }

    /// Append `id` to the end of `container`.
    pub(crate) fn append(&mut self, container: Container, id: SlotId) -> Result<(), TransformError> {
        match container {
            Container::Body => {
                self.body.push(id);
                Ok(())
            }
            Container::Arguments(owner) => match self.slots.get_mut(owner) {
                Some(Some(Slot::Call { arguments, .. })) => {
                    arguments.push(id);
                    Ok(())
                }
                _ => Err(TransformError::MalformedTree(format!(
                    "slot {owner} is not a call and cannot take arguments"
                ))),
            },
        }
    }

    /// Fold the arena into an owned program.
    ///
    /// Every slot must be reachable from the body exactly once.
    pub(crate) fn assemble(mut self) -> Result<Program, TransformError> {
        let body = std::mem::take(&mut self.body);
        let statements = body
            .into_iter()
            .map(|id| self.build_statement(id))
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(orphan) = self.slots.iter().position(Option::is_some) {
            return Err(TransformError::MalformedTree(format!(
                "slot {orphan} is not reachable from the program body"
            )));
        }
        Ok(Program { body: statements })
    }

    fn take(&mut self, id: SlotId) -> Result<Slot, TransformError> {
        self.slots
            .get_mut(id)
            .and_then(Option::take)
            .ok_or_else(|| TransformError::MalformedTree(format!("slot {id} is missing or shared")))
    }

    fn build_statement(&mut self, id: SlotId) -> Result<Statement, TransformError> {
        match self.take(id)? {
            Slot::Statement(call) => match self.take(call)? {
                Slot::Call { callee, arguments } => Ok(Statement::Expression(ExpressionStatement {
                    expression: self.build_call(callee, arguments)?,
                })),
                _ => Err(TransformError::MalformedTree(format!(
                    "statement slot {id} does not wrap a call"
                ))),
            },
            Slot::Number(value) => Ok(Statement::Literal(NumberLiteral { value })),
            Slot::Call { callee, .. } => Err(TransformError::MalformedTree(format!(
                "call '{callee}' at top level without a statement"
            ))),
        }
    }

    fn build_call(
        &mut self,
        callee: String,
        arguments: Vec<SlotId>,
    ) -> Result<CallExpression, TransformError> {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            let mut call = CallExpression::new(callee);
            for id in arguments {
                call.arguments.push(self.build_expression(id)?);
            }
            Ok(call)
        })
    }

    fn build_expression(&mut self, id: SlotId) -> Result<Expression, TransformError> {
        match self.take(id)? {
            Slot::Number(value) => Ok(Expression::NumberLiteral(NumberLiteral { value })),
            Slot::Call { callee, arguments } => {
                Ok(Expression::CallExpression(self.build_call(callee, arguments)?))
            }
            Slot::Statement(_) => Err(TransformError::MalformedTree(format!(
                "statement slot {id} in argument position"
            ))),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
