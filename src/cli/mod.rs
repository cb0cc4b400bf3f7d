//! CLI module for planstore
//!
//! Provides command-line interface for:
//! - serve: Load config, open the store, serve HTTP
//! - validate: One-shot document validation
//! - digest: One-shot content digest

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{digest, run, run_command, serve, validate, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_document, write_line};
