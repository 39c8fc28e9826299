//! CLI module for the bundler planner
//!
//! This module provides the command-line interface over declaration manifests.
//!
//! ## Commands
//!
//! - `plan <manifest>` - Plan every annotated model and emit the plans
//! - `check <manifest>` - Validate annotated models without emitting anything
//! - `catalog` - Print the type-to-operation catalog
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

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::plan::{DiagnosticMode, PlannerConfig};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    /// At least one model was rejected, or the command itself failed.
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

/// Plans Bundle companion classes for annotated models
#[derive(Parser, Debug)]
#[command(name = "bundler")]
#[command(version = VERSION)]
#[command(about = "Plans Bundle companion classes for annotated models", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Plan every annotated model in a declaration manifest
    Plan {
        /// Declaration manifest (JSON)
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,
        /// Output format for accepted plans
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        /// Write plans to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
        #[command(flatten)]
        planner: PlannerArgs,
    },

    /// Validate annotated models without emitting plans
    Check {
        /// Declaration manifest (JSON)
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,
        #[command(flatten)]
        planner: PlannerArgs,
    },

    /// Print the type-to-operation catalog
    Catalog,
}

/// Planner options shared by `plan` and `check`.
#[derive(Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlannerArgs {
    /// Report every failure of a rejected model instead of the first one
    #[arg(long)]
    pub all_failures: bool,
    /// Accept models in which two fields derive the same container key
    #[arg(long)]
    pub allow_key_collisions: bool,
}

impl PlannerArgs {
    pub fn config(&self) -> PlannerConfig {
        let diagnostics = if self.all_failures {
            DiagnosticMode::AllFailures
        } else {
            DiagnosticMode::FirstFailure
        };
        PlannerConfig::new()
            .with_diagnostics(diagnostics)
            .with_key_collision_check(!self.allow_key_collisions)
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON array of generation plans
    #[default]
    Json,
    /// Indented human-readable listing
    Summary,
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
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Plan {
            manifest,
            format,
            output,
            planner,
        } => commands::plan_manifest(&manifest, format, output.as_deref(), planner.config()),
        Command::Check { manifest, planner } => {
            commands::check_manifest(&manifest, planner.config())
        }
        Command::Catalog => commands::print_catalog(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_plan_defaults() {
        let cli = Cli::try_parse_from(["bundler", "plan", "models.json"]).unwrap();
        if let Command::Plan {
            manifest,
            format,
            output,
            planner,
        } = cli.command
        {
            assert_eq!(manifest, PathBuf::from("models.json"));
            assert_eq!(format, OutputFormat::Json);
            assert!(output.is_none());
            assert_eq!(planner, PlannerArgs::default());
        } else {
            panic!("Expected Plan command");
        }
    }

    #[test]
    fn test_cli_parse_plan_with_options() {
        let cli = Cli::try_parse_from([
            "bundler",
            "plan",
            "models.json",
            "--format",
            "summary",
            "-o",
            "plans.txt",
            "--all-failures",
            "--allow-key-collisions",
        ])
        .unwrap();
        if let Command::Plan {
            format,
            output,
            planner,
            ..
        } = cli.command
        {
            assert_eq!(format, OutputFormat::Summary);
            assert_eq!(output, Some(PathBuf::from("plans.txt")));
            assert!(planner.all_failures);
            assert!(planner.allow_key_collisions);
        } else {
            panic!("Expected Plan command");
        }
    }

    #[test]
    fn test_cli_parse_check_and_catalog() {
        let cli = Cli::try_parse_from(["bundler", "check", "models.json", "--all-failures"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Check {
                planner: PlannerArgs {
                    all_failures: true,
                    ..
                },
                ..
            }
        ));

        let cli = Cli::try_parse_from(["bundler", "catalog"]).unwrap();
        assert!(matches!(cli.command, Command::Catalog));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["bundler"]).is_err());
        assert!(Cli::try_parse_from(["bundler", "plan"]).is_err());
        assert!(Cli::try_parse_from(["bundler", "plan", "m.json", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_planner_args_map_to_config() {
        let config = PlannerArgs::default().config();
        assert_eq!(config.diagnostics, DiagnosticMode::FirstFailure);
        assert!(config.check_key_collisions);

        let config = PlannerArgs {
            all_failures: true,
            allow_key_collisions: true,
        }
        .config();
        assert_eq!(config.diagnostics, DiagnosticMode::AllFailures);
        assert!(!config.check_key_collisions);
    }
}
