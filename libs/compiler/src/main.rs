//! `callc` command-line driver.
//!
//! ```text
//! $ callc
//! add(10, subtract(10, 6));
//! $ callc "(foo 1 2)" --emit target
//! ```

use callc::{compile_stages, Compilation, CompileError};
use clap::{Parser, ValueEnum};
use config::constants::{CompilerConfig, LexMode, DEFAULT_PROGRAM, MAX_NESTING_DEPTH};
use std::process::ExitCode;

/// Compile Lisp-style call expressions into C-style calls.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Source program (defaults to the built-in sample)
    #[arg(default_value = DEFAULT_PROGRAM)]
    source: String,

    /// Pipeline artifact to print
    #[arg(long, value_enum, default_value_t = Emit::Code)]
    emit: Emit,

    /// Reject characters the lexer does not recognize instead of ignoring
    /// the rest of the input
    #[arg(long)]
    strict: bool,

    /// Deepest call nesting accepted
    #[arg(long, default_value_t = MAX_NESTING_DEPTH)]
    max_depth: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// Generated code
    Code,
    /// Token list as JSON
    Tokens,
    /// Source AST as JSON
    Ast,
    /// Target AST as JSON
    Target,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let lex_mode = if cli.strict { LexMode::Strict } else { LexMode::Lenient };
    let config = match CompilerConfig::new(lex_mode, cli.max_depth) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(2);
        }
    };

    match compile_stages(&cli.source, &config) {
        Ok(compilation) => match render(&compilation, cli.emit) {
            Ok(text) => {
                println!("{text}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("error: failed to serialize {:?}: {err}", cli.emit);
                ExitCode::FAILURE
            }
        },
        Err(err) => report(&err),
    }
}

fn render(compilation: &Compilation, emit: Emit) -> serde_json::Result<String> {
    match emit {
        Emit::Code => Ok(compilation.output.clone()),
        Emit::Tokens => serde_json::to_string_pretty(&compilation.tokens),
        Emit::Ast => serde_json::to_string_pretty(&compilation.source),
        Emit::Target => serde_json::to_string_pretty(&compilation.target),
    }
}

fn report(err: &CompileError) -> ExitCode {
    log::debug!("compile failed in {} stage", err.stage());
    eprintln!("error: {err}");
    if err.is_internal() {
        ExitCode::from(2)
    } else {
        ExitCode::FAILURE
    }
}
