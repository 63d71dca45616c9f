//! CLI module for realtydash
//!
//! Provides command-line interface for:
//! - serve: Load configuration and run the HTTP API
//! - query: One-shot table query printed as JSON

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, TableArgs};
pub use commands::{query, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_json, write_json_to};
