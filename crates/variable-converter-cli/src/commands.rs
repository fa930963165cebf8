//! Execution of the `convert` and `check` actions.

use std::io::Write;

use eyre::{Context, Result};
use tracing::{debug, error, info, warn};
use variable_converter::{Conversion, ConversionFailure, convert};

use crate::check::{Verdict, check_step};
use crate::cli::{Command, ConvertArgs};
use crate::config::CliConfig;
use crate::environment::{EnvContribution, Environment};
use crate::output::{
    append_env_file, write_assignments, write_assignments_json, write_check_report,
};
use crate::step::StepConfig;

/// How a build step finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step did its job.
    Success,
    /// The step reported a problem; nothing was emitted.
    Unsuccessful,
}

/// Expand `step` against `env` and convert it.
///
/// # Errors
/// Returns the [`ConversionFailure`] when the conversion fails one of its
/// checks.
pub fn convert_step(step: &StepConfig, env: &Environment) -> Result<Conversion, ConversionFailure> {
    let request = step.expand(env).to_request();
    debug!(
        source = request.source_value(),
        pattern = request.source_pattern(),
        "converting"
    );
    convert(&request).into_result()
}

/// Run `command`, writing produced output to `stdout`.
///
/// # Errors
/// Returns an error when output cannot be written.
pub fn run(
    command: &Command,
    config: &CliConfig,
    env: &Environment,
    stdout: &mut dyn Write,
) -> Result<StepOutcome> {
    match command {
        Command::Convert(args) => run_convert(args, config, env, stdout),
        Command::Check(step) => run_check(step, env, stdout),
    }
}

/// Convert and emit the destination variable.
///
/// A failed conversion is logged and reported as
/// [`StepOutcome::Unsuccessful`]; nothing is written in that case.
///
/// # Errors
/// Returns an error when the env file or stdout cannot be written.
pub fn run_convert(
    args: &ConvertArgs,
    config: &CliConfig,
    env: &Environment,
    stdout: &mut dyn Write,
) -> Result<StepOutcome> {
    let conversion = match convert_step(&args.step, env) {
        Ok(conversion) => conversion,
        Err(failure) => {
            error!(reason = %failure.reason(), "{}", failure.detail());
            return Ok(StepOutcome::Unsuccessful);
        }
    };

    info!(
        "Adding environment variable named {} with value of {}",
        conversion.name(),
        conversion.value()
    );
    let contribution = EnvContribution::from(conversion);

    match (&config.env_file, args.json) {
        (Some(path), _) => append_env_file(path, &contribution)?,
        (None, true) => write_assignments_json(stdout, &contribution)?,
        (None, false) => write_assignments(stdout, &contribution)?,
    }
    stdout.flush().wrap_err("failed to flush stdout")?;
    Ok(StepOutcome::Success)
}

/// Check the expanded fields of `step` and print one line per field.
///
/// # Errors
/// Returns an error when the report cannot be written.
pub fn run_check(
    step: &StepConfig,
    env: &Environment,
    stdout: &mut dyn Write,
) -> Result<StepOutcome> {
    let report = check_step(&step.expand(env));
    for check in report.checks() {
        match &check.verdict {
            Verdict::Ok => {}
            Verdict::Warning(message) => warn!(field = %check.field, "{message}"),
            Verdict::Error(message) => error!(field = %check.field, "{message}"),
        }
    }

    write_check_report(stdout, &report)?;
    stdout.flush().wrap_err("failed to flush stdout")?;

    Ok(if report.has_errors() {
        StepOutcome::Unsuccessful
    } else {
        StepOutcome::Success
    })
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "tests exercise command fallibility")]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use variable_converter::FailureKind;

    #[fixture]
    fn env() -> Environment {
        [("GIT_BRANCH", "origin/release/4.2.0")].into_iter().collect()
    }

    fn convert_args(step: StepConfig, json: bool) -> ConvertArgs {
        ConvertArgs {
            step,
            json,
            env_file: None,
        }
    }

    fn release_step() -> StepConfig {
        StepConfig::new(
            "${GIT_BRANCH}",
            r"release/(\d+)\.(\d+)",
            "VERSION",
            "{1}.{2}",
        )
    }

    #[rstest]
    fn convert_step_expands_before_converting(env: Environment) {
        let conversion = convert_step(&release_step(), &env).unwrap();
        assert_eq!(conversion, Conversion::new("VERSION", "4.2"));
    }

    #[rstest]
    fn convert_step_surfaces_failure(env: Environment) {
        let step = StepConfig::new("$GIT_BRANCH", r"hotfix/(\d+)", "VERSION", "{1}");
        let failure = convert_step(&step, &env).unwrap_err();
        assert_eq!(failure.reason(), FailureKind::NoMatch);
        assert_eq!(
            failure.detail(),
            r"No match of reg ex value hotfix/(\d+) for variable value origin/release/4.2.0"
        );
    }

    #[rstest]
    fn doubled_dollar_keeps_reference_literal(env: Environment) {
        let step = StepConfig::new("$$GIT_BRANCH", r"\$(\w+)", "NAME", "{1}");
        let conversion = convert_step(&step, &env).unwrap();
        assert_eq!(conversion, Conversion::new("NAME", "GIT_BRANCH"));
    }

    #[rstest]
    fn run_convert_writes_assignment(env: Environment) {
        let mut out = Vec::new();
        let outcome = run_convert(
            &convert_args(release_step(), false),
            &CliConfig::default(),
            &env,
            &mut out,
        )
        .unwrap();
        assert_eq!(outcome, StepOutcome::Success);
        assert_eq!(String::from_utf8(out).unwrap(), "VERSION=4.2\n");
    }

    #[rstest]
    fn run_convert_writes_json(env: Environment) {
        let mut out = Vec::new();
        run_convert(
            &convert_args(release_step(), true),
            &CliConfig::default(),
            &env,
            &mut out,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"name\":\"VERSION\",\"value\":\"4.2\"}\n"
        );
    }

    #[rstest]
    fn run_convert_emits_nothing_on_failure(env: Environment) {
        let step = StepConfig::new("${GIT_BRANCH}", r"release/(\d+)", "", "{1}");
        let mut out = Vec::new();
        let args = convert_args(step, false);
        let outcome = run_convert(&args, &CliConfig::default(), &env, &mut out).unwrap();
        assert_eq!(outcome, StepOutcome::Unsuccessful);
        assert!(out.is_empty());
    }

    #[rstest]
    fn run_convert_appends_to_configured_env_file(env: Environment) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vars.env");
        let config = CliConfig::default().apply_overrides(None, Some(path.clone()));
        let mut out = Vec::new();
        run_convert(
            &convert_args(release_step(), false),
            &config,
            &env,
            &mut out,
        )
        .unwrap();
        assert!(out.is_empty());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "VERSION=4.2\n");
    }

    #[rstest]
    fn run_check_fails_on_errors(env: Environment) {
        let step = StepConfig::new("${GIT_BRANCH}", "", "VERSION", "{1}");
        let mut out = Vec::new();
        let outcome = run_check(&step, &env, &mut out).unwrap();
        assert_eq!(outcome, StepOutcome::Unsuccessful);
        let report = String::from_utf8(out).unwrap();
        assert!(report.contains("Please set a sourceVariablePattern"));
    }

    #[rstest]
    fn run_dispatches_check(env: Environment) {
        let mut out = Vec::new();
        let outcome = run(
            &Command::Check(release_step()),
            &CliConfig::default(),
            &env,
            &mut out,
        )
        .unwrap();
        assert_eq!(outcome, StepOutcome::Success);
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 4);
    }
}
