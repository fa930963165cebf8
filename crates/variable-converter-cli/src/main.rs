//! `variable-converter` build step.
//!
//! Exit status: 0 when the step succeeds, 1 when the conversion or the field
//! checks fail, 2 when configuration is invalid or output cannot be written.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use variable_converter_cli::cli::Cli;
use variable_converter_cli::commands::{StepOutcome, run};
use variable_converter_cli::config::CliConfig;
use variable_converter_cli::environment::Environment;
use variable_converter_cli::error::CliError;
use variable_converter_cli::logging::init_logging;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            init_logging(&CliConfig::default());
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::from(2);
        }
    };
    init_logging(&config);

    debug!(
        version = env!("CARGO_PKG_VERSION"),
        "starting variable-converter"
    );

    let env = Environment::from_process();
    let mut stdout = io::stdout().lock();
    match run(&cli.command, &config, &env, &mut stdout) {
        Ok(StepOutcome::Success) => ExitCode::SUCCESS,
        Ok(StepOutcome::Unsuccessful) => ExitCode::from(1),
        Err(e) => {
            tracing::error!(error = %format_args!("{e:#}"), "build step aborted");
            ExitCode::from(2)
        }
    }
}

fn build_config(cli: &Cli) -> Result<CliConfig, CliError> {
    let config = CliConfig::from_env()?;
    let env_file = cli.command.env_file();
    Ok(config.apply_overrides(cli.log_level, env_file))
}
