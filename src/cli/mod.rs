//! CLI module for the benchplan engine.
//!
//! ## Commands
//!
//! - `check <plan>` - validate every test definition and group in a plan file
//! - `groups <plan>` - list the groups declared in a plan file
//! - `show <plan> <group>` - resolve one group and print its ordered tests
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Bench-test plan validation and group resolution
#[derive(Parser, Debug)]
#[command(name = "benchplan")]
#[command(version = VERSION)]
#[command(about = "Validate bench-test plans and resolve test groups", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate every test definition and group in a plan file
    Check {
        /// Plan file to validate
        #[arg(value_name = "PLAN")]
        plan: PathBuf,
    },

    /// List the groups declared in a plan file
    Groups {
        /// Plan file to read
        #[arg(value_name = "PLAN")]
        plan: PathBuf,
    },

    /// Resolve one group and print its ordered tests
    Show {
        /// Plan file to read
        #[arg(value_name = "PLAN")]
        plan: PathBuf,
        /// Group identifier to resolve
        #[arg(value_name = "GROUP")]
        group: String,
        /// Emit the resolved selection as JSON
        #[arg(long)]
        json: bool,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Check { plan } => commands::check(&plan),
        Command::Groups { plan } => commands::groups(&plan),
        Command::Show { plan, group, json } => commands::show(&plan, &group, json),
    }
}
