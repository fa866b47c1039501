//! # Config Crate
//!
//! Centralized configuration constants for the callc pipeline.
//! Limits, output punctuation and the driver's default program live here so
//! that the lexer, parser, transformer and code generator agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{CompilerConfig, LexMode, MAX_NESTING_DEPTH};
//!
//! let config = CompilerConfig::default();
//! assert_eq!(config.lex_mode, LexMode::Lenient);
//! assert_eq!(config.max_nesting_depth, MAX_NESTING_DEPTH);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Environment**: Nothing is read from env vars or files

pub mod constants;

#[cfg(test)]
mod tests;
