//! # Codegen Errors

use thiserror::Error;

/// Errors raised while rendering the target tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    /// The underlying formatter refused a write.
    #[error("failed to write generated code")]
    Format(#[from] std::fmt::Error),
}
