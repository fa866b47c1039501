//! # Compile Errors
//!
//! Stage-tagged wrapper over the errors of each pipeline layer.

use callc_codegen::CodegenError;
use callc_parser::ParseError;
use callc_transform::TransformError;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Pipeline stage an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Stage {
    Lex,
    Parse,
    Transform,
    Codegen,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Lex => "lex",
            Stage::Parse => "parse",
            Stage::Transform => "transform",
            Stage::Codegen => "codegen",
        };
        f.write_str(name)
    }
}

/// Errors that abort a compile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// Strict lexing rejected a character.
    #[error("lex error: {0}")]
    Lex(ParseError),

    /// The token stream is not a valid program.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The transformer lost track of its insertion frames.
    #[error("internal transform error: {0}")]
    Transform(#[from] TransformError),

    /// The generator could not write its output.
    #[error("internal codegen error: {0}")]
    Codegen(#[from] CodegenError),
}

impl CompileError {
    /// Stage that produced the error.
    pub fn stage(&self) -> Stage {
        match self {
            CompileError::Lex(_) => Stage::Lex,
            CompileError::Parse(_) => Stage::Parse,
            CompileError::Transform(_) => Stage::Transform,
            CompileError::Codegen(_) => Stage::Codegen,
        }
    }

    /// True when the error points at a bug in the pipeline rather than at
    /// the input.
    pub fn is_internal(&self) -> bool {
        matches!(self, CompileError::Transform(_) | CompileError::Codegen(_))
    }
}

// =============================================================================
// TESTS
// =============================================================================
