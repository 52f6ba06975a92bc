//! CLI commands.

mod check_digit;
mod identifiers;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::output::OutputFormat;

/// rutctl - Normalize, validate, and format RUT identifiers.
#[derive(Debug, Parser)]
#[command(name = "rutctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, env = "RUTCTL_FORMAT", default_value = "table")]
    format: String,

    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, global = true, env = "RUTCTL_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the normalized (storage) form of each identifier.
    Normalize(InputArgs),

    /// Print the display form of each identifier.
    Format(InputArgs),

    /// Check each identifier; exits non-zero if any is invalid.
    Validate(InputArgs),

    /// Compute the check character for numeric bodies.
    CheckDigit(check_digit::CheckDigitArgs),

    /// Show every form of each identifier side by side.
    Inspect(InputArgs),
}

/// Identifiers to process. Read from stdin, one per line, when omitted.
#[derive(Debug, Args)]
pub struct InputArgs {
    #[arg(value_name = "RUT")]
    inputs: Vec<String>,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let ctx = CommandContext {
            format: OutputFormat::from_flag(&self.format),
        };

        match self.command {
            Commands::Normalize(args) => identifiers::normalize(ctx, args),
            Commands::Format(args) => identifiers::format(ctx, args),
            Commands::Validate(args) => identifiers::validate(ctx, args),
            Commands::CheckDigit(args) => check_digit::run(ctx, args),
            Commands::Inspect(args) => identifiers::inspect(ctx, args),
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub format: OutputFormat,
}
