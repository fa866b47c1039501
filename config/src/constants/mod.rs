//! Centralized configuration values shared across the callc pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

/// Program compiled by the `callc` driver when no source is given.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_PROGRAM;
/// assert!(DEFAULT_PROGRAM.starts_with('('));
/// ```
pub const DEFAULT_PROGRAM: &str = "(add 10 (subtract 10 6))";

/// Maximum call nesting depth accepted by the parser.
///
/// # Examples
/// ```
/// use config::constants::MAX_NESTING_DEPTH;
/// assert!(MAX_NESTING_DEPTH >= 256);
/// ```
pub const MAX_NESTING_DEPTH: usize = 4096;

/// Bytes of stack space reserved when growing recursion limits using the
/// `stacker` crate.
///
/// # Examples
/// ```
/// use config::constants::STACKER_STACK_SIZE_BYTES;
/// assert!(STACKER_STACK_SIZE_BYTES >= 1024);
/// ```
pub const STACKER_STACK_SIZE_BYTES: usize = 8 * 1024 * 1024;

/// Remaining stack below which `stacker` allocates a new segment.
pub const STACKER_RED_ZONE_BYTES: usize = STACKER_STACK_SIZE_BYTES / 8;

/// Appended to every top-level call when it is rendered as a statement.
pub const STATEMENT_TERMINATOR: &str = ";";

/// Placed between rendered call arguments.
///
/// # Examples
/// ```
/// use config::constants::ARGUMENT_SEPARATOR;
/// assert_eq!(["1", "2"].join(ARGUMENT_SEPARATOR), "1, 2");
/// ```
pub const ARGUMENT_SEPARATOR: &str = ", ";

/// Placed between rendered top-level statements.
pub const STATEMENT_SEPARATOR: &str = "\n";

/// How the tokenizer treats a character it does not recognize.
///
/// # Examples
/// ```
/// use config::constants::LexMode;
/// assert_eq!(LexMode::default(), LexMode::Lenient);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexMode {
    /// Stop scanning and keep the tokens produced so far.
    #[default]
    Lenient,
    /// Report the character as an error.
    Strict,
}

/// Settings for a single `compile` call.
///
/// # Examples
/// ```
/// use config::constants::{CompilerConfig, LexMode};
/// let config = CompilerConfig::default();
/// assert_eq!(config.lex_mode, LexMode::Lenient);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompilerConfig {
    /// Tokenizer behavior on unrecognized characters.
    pub lex_mode: LexMode,
    /// Deepest call nesting the parser accepts.
    pub max_nesting_depth: usize,
}

impl CompilerConfig {
    /// Builds a configuration, rejecting a zero nesting depth.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{CompilerConfig, LexMode};
    /// let cfg = CompilerConfig::new(LexMode::Strict, 16).expect("valid config");
    /// assert_eq!(cfg.max_nesting_depth, 16);
    /// ```
    pub fn new(lex_mode: LexMode, max_nesting_depth: usize) -> Result<Self, ConfigError> {
        if max_nesting_depth == 0 {
            return Err(ConfigError::InvalidNestingDepth(max_nesting_depth));
        }
        Ok(Self {
            lex_mode,
            max_nesting_depth,
        })
    }

    /// Returns a copy using strict lexing.
    pub fn strict(mut self) -> Self {
        self.lex_mode = LexMode::Strict;
        self
    }
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            lex_mode: LexMode::Lenient,
            max_nesting_depth: MAX_NESTING_DEPTH,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the nesting limit would reject every call.
    InvalidNestingDepth(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNestingDepth(value) => {
                write!(f, "max_nesting_depth must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
