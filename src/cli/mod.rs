//! CLI module for the Fig syntax toolkit
//!
//! This module provides the command-line interface used to inspect what the scanner and the bracket
//! disambiguator do with a source file.
//!
//! ## Commands
//!
//! - `lex <file>` - Print the token stream (dump or JSON)
//! - `check <file>` - Report every scan error with source context
//! - `sites` - Print the bracket-site table of a grammar version, or the v1 → v2 diff
//! - `brackets <file> --site <site>` - Resolve every `[` in a file as one bracket site
//!
//! ## Modules
//!
//! - `commands` - Command implementations
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

use clap::{Args, Parser, Subcommand};
use fig_core::GrammarVersion;
use fig_syntax::grammar::SiteId;
use fig_syntax::lexer::{ErrorMode, LexerConfig};

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

/// Scanner and bracket-disambiguation toolkit for the Fig language family
#[derive(Parser, Debug)]
#[command(name = "fig")]
#[command(version = VERSION)]
#[command(about = "Scanner and bracket-disambiguation toolkit for the Fig language family", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Scanner options shared by every command that reads a source file.
#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Columns a tab advances indentation by
    #[arg(long = "tab-width", value_name = "N", default_value_t = 1)]
    pub tab_width: usize,
    /// Reject tabs in indentation
    #[arg(long = "no-tabs")]
    pub no_tabs: bool,
    /// Stop at the first error instead of recovering at the next line
    #[arg(long)]
    pub fatal: bool,
}

impl ScanArgs {
    /// Build and validate the scanner configuration.
    pub fn config(&self) -> CliResult<LexerConfig> {
        let mode = if self.fatal { ErrorMode::Fatal } else { ErrorMode::Recover };
        let config = LexerConfig::new()
            .with_tab_width(self.tab_width)
            .with_tabs_allowed(!self.no_tabs)
            .with_error_mode(mode);
        config
            .validate()
            .map_err(|e| CliError::failure(format!("Error: {e}")))?;
        Ok(config)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the token stream of a file
    Lex {
        /// Source file to scan
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[command(flatten)]
        scan: ScanArgs,
        /// Emit JSON instead of the text dump
        #[arg(long)]
        json: bool,
    },

    /// Report scan errors with source context
    Check {
        /// Source file to scan
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[command(flatten)]
        scan: ScanArgs,
    },

    /// Print the bracket-site table of a grammar version
    Sites {
        /// Grammar version (v1 or v2)
        #[arg(long, value_name = "VERSION", default_value = "v2", value_parser = parse_version)]
        grammar: GrammarVersion,
        /// Print what changed from v1 to v2 instead
        #[arg(long)]
        diff: bool,
    },

    /// Resolve every `[` in a file as the given bracket site
    Brackets {
        /// Source file to scan
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Bracket site name (see `fig sites`)
        #[arg(long, value_name = "SITE", value_parser = parse_site)]
        site: SiteId,
        /// Grammar version (v1 or v2)
        #[arg(long, value_name = "VERSION", default_value = "v2", value_parser = parse_version)]
        grammar: GrammarVersion,
        #[command(flatten)]
        scan: ScanArgs,
    },
}

fn parse_version(s: &str) -> Result<GrammarVersion, String> {
    GrammarVersion::from_str(s).ok_or_else(|| format!("unknown grammar version '{s}' (expected v1 or v2)"))
}

fn parse_site(s: &str) -> Result<SiteId, String> {
    SiteId::from_str(s).ok_or_else(|| {
        let names: Vec<_> = SiteId::ALL.iter().map(|site| site.as_str()).collect();
        format!("unknown site '{s}' (expected one of: {})", names.join(", "))
    })
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
        Command::Lex { file, scan, json } => commands::lex_file(&file.to_string_lossy(), scan.config()?, json),
        Command::Check { file, scan } => commands::check_file(&file.to_string_lossy(), scan.config()?),
        Command::Sites { grammar, diff } => commands::print_sites(grammar, diff),
        Command::Brackets {
            file,
            site,
            grammar,
            scan,
        } => commands::brackets_file(&file.to_string_lossy(), scan.config()?, site, grammar),
    }
}

// ============================================================================
// Tests
// ============================================================================
