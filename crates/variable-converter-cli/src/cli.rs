//! Command-line surface of the build step.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::LogLevel;
use crate::step::StepConfig;

/// Derive an environment variable from a regular-expression match.
#[derive(Parser, Debug)]
#[command(name = "variable-converter", version, about)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,
    /// Action to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported actions.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert the source value and emit the destination variable.
    Convert(ConvertArgs),
    /// Check the configured fields without converting.
    Check(StepConfig),
}

/// Arguments of the `convert` action.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Step fields.
    #[command(flatten)]
    pub step: StepConfig,
    /// Emit a JSON object per variable instead of `NAME=VALUE` on stdout.
    #[arg(long)]
    pub json: bool,
    /// Append `NAME=VALUE` to this file instead of writing to stdout.
    #[arg(long)]
    pub env_file: Option<PathBuf>,
}

impl Command {
    /// Env file requested on the command line, if any.
    #[must_use]
    pub fn env_file(&self) -> Option<PathBuf> {
        match self {
            Self::Convert(args) => args.env_file.clone(),
            Self::Check(_) => None,
        }
    }
}
