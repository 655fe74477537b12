//! CLI support for wildcard-tree
//!
//! The pieces behind the `wildcard` binary, usable without it: run one step
//! on one line, or drive a prompt loop over any reader and writers.

mod check;
mod repl;

pub use check::{execute_bytes, execute_line};
pub use repl::{PROMPT, Repl};

use thiserror::Error;

/// Which stage of the pipeline to run on each line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Step {
    /// Print every token as `KIND literal`
    Tokenize,
    /// Print the syntax tree as JSON
    #[default]
    Parse,
}

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Parse(#[from] crate::ParseError),

    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
