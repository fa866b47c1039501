//! # callc
//!
//! Compiles a tiny Lisp-like call language into C-style call statements.
//!
//! ```text
//! (add 10 (subtract 10 6))   →   add(10, subtract(10, 6));
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! source → tokenize → parse → transform → generate → text
//! ```
//!
//! Each stage fully consumes the output of the previous one. Any failure
//! aborts the whole compile with no partial output.
//!
//! ## Example
//!
//! ```rust
//! assert_eq!(callc::compile("(foo)").unwrap(), "foo();");
//! ```

mod error;

pub use error::{CompileError, Stage};

use callc_parser::{Program as SourceProgram, Token};
use callc_transform::target::Program as TargetProgram;
use config::constants::CompilerConfig;
use serde::Serialize;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Compile source text with the default configuration.
///
/// ## Errors
///
/// `Parse` for an unexpected token or an unterminated call; `Transform` and
/// `Codegen` only for pipeline bugs.
///
/// ## Example
///
/// ```rust
/// let out = callc::compile("(add 10 (subtract 10 6))").unwrap();
/// assert_eq!(out, "add(10, subtract(10, 6));");
/// ```
pub fn compile(source: &str) -> Result<String, CompileError> {
    compile_with(source, &CompilerConfig::default())
}

/// Compile source text with an explicit configuration.
pub fn compile_with(source: &str, config: &CompilerConfig) -> Result<String, CompileError> {
    compile_stages(source, config).map(|c| c.output)
}

/// Every artifact produced by one compile.
#[derive(Debug, Clone, Serialize)]
pub struct Compilation {
    /// Tokens read by the lexer.
    pub tokens: Vec<Token>,
    /// Parsed source tree.
    pub source: SourceProgram,
    /// Rewritten target tree.
    pub target: TargetProgram,
    /// Generated text.
    pub output: String,
}

/// Run the whole pipeline and keep the intermediate results.
///
/// ## Example
///
/// ```rust
/// use config::constants::CompilerConfig;
///
/// let c = callc::compile_stages("(a 1)", &CompilerConfig::default()).unwrap();
/// assert_eq!(c.tokens.len(), 4);
/// assert_eq!(c.output, "a(1);");
/// ```
pub fn compile_stages(source: &str, config: &CompilerConfig) -> Result<Compilation, CompileError> {
    let lexed = callc_parser::tokenize_with(source, config.lex_mode).map_err(CompileError::Lex)?;
    let tokens = lexed.tokens;

    let source_ast = callc_parser::parse_tokens_with(tokens.clone(), config.max_nesting_depth)?;
    let target = callc_transform::transform(&source_ast)?;
    let output = callc_codegen::generate(&target)?;

    log::debug!(
        "compiled {} bytes of source into {} statements",
        source.len(),
        target.statement_count()
    );
    Ok(Compilation {
        tokens,
        source: source_ast,
        target,
        output,
    })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use config::constants::{LexMode, DEFAULT_PROGRAM};

    #[test]
    fn test_default_program() {
        assert_eq!(compile(DEFAULT_PROGRAM).unwrap(), "add(10, subtract(10, 6));");
    }

    #[test]
    fn test_compile_stages_keeps_artifacts() {
        let c = compile_stages("(a (b))", &CompilerConfig::default()).unwrap();
        assert_eq!(c.tokens.len(), 6);
        assert_eq!(c.source.body.len(), 1);
        assert_eq!(c.target.statement_count(), 1);
        assert_eq!(c.output, "a(b());");
    }

    #[test]
    fn test_strict_config_reports_lex_stage() {
        let config = CompilerConfig::new(LexMode::Strict, 8).unwrap();
        let err = compile_with("(a) ; (b)", &config).unwrap_err();
        assert_eq!(err.stage(), Stage::Lex);
    }

    #[test]
    fn test_depth_limit_from_config() {
        let config = CompilerConfig::new(LexMode::Lenient, 1).unwrap();
        assert!(compile_with("(a)", &config).is_ok());
        assert!(compile_with("(a (b))", &config).is_err());
    }
}
