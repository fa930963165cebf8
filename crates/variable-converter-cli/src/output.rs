//! Helpers for rendering produced variables and check reports.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use eyre::{Context, Result};
use serde::Serialize;

use crate::check::{CheckReport, Verdict};
use crate::environment::EnvContribution;
use crate::error::CliError;

#[derive(Serialize)]
struct AssignmentReport<'a> {
    name: &'a str,
    value: &'a str,
}

pub(crate) fn write_assignments(
    writer: &mut dyn Write,
    contribution: &EnvContribution,
) -> Result<()> {
    for (name, value) in contribution.iter() {
        writeln!(writer, "{name}={value}")
            .wrap_err_with(|| format!("failed to write variable {name}"))?;
    }
    Ok(())
}

pub(crate) fn write_assignments_json(
    writer: &mut dyn Write,
    contribution: &EnvContribution,
) -> Result<()> {
    for (name, value) in contribution.iter() {
        serde_json::to_writer(&mut *writer, &AssignmentReport { name, value })
            .wrap_err_with(|| format!("failed to serialise variable {name}"))?;
        writeln!(writer).wrap_err("failed to terminate JSON record")?;
    }
    Ok(())
}

/// Append `NAME=VALUE` lines to `path`, creating the file if needed.
pub(crate) fn append_env_file(path: &Path, contribution: &EnvContribution) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| CliError::EnvFile {
            path: path.to_path_buf(),
            source,
        })?;
    write_assignments(&mut file, contribution)?;
    file.flush()
        .wrap_err_with(|| format!("failed to flush env file {}", path.display()))
}

pub(crate) fn write_check_report(writer: &mut dyn Write, report: &CheckReport) -> Result<()> {
    for check in report.checks() {
        let field = check.field;
        match &check.verdict {
            Verdict::Ok => writeln!(writer, "ok      {field}"),
            Verdict::Warning(message) => writeln!(writer, "warning {field}: {message}"),
            Verdict::Error(message) => writeln!(writer, "error   {field}: {message}"),
        }
        .wrap_err_with(|| format!("failed to write check result for {field}"))?;
    }
    Ok(())
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "tests exercise writer fallibility")]
mod tests {
    use super::*;
    use crate::check::check_step;
    use crate::step::StepConfig;

    fn contribution() -> EnvContribution {
        let mut contribution = EnvContribution::new();
        contribution.add("VERSION", "v2.1");
        contribution
    }

    #[test]
    fn writes_name_value_lines() {
        let mut out = Vec::new();
        write_assignments(&mut out, &contribution()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "VERSION=v2.1\n");
    }

    #[test]
    fn writes_json_records() {
        let mut out = Vec::new();
        write_assignments_json(&mut out, &contribution()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"name\":\"VERSION\",\"value\":\"v2.1\"}\n"
        );
    }

    #[test]
    fn appends_to_env_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("build.env");
        std::fs::write(&path, "EXISTING=1\n").unwrap();
        append_env_file(&path, &contribution()).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "EXISTING=1\nVERSION=v2.1\n"
        );
    }

    #[test]
    fn reports_unwritable_env_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("build.env");
        let err = append_env_file(&path, &contribution()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::EnvFile { .. })
        ));
    }

    #[test]
    fn renders_one_line_per_field() {
        let report = check_step(&StepConfig::new("abc", "", "V", "{1}"));
        let mut out = Vec::new();
        write_check_report(&mut out, &report).unwrap();
        let rendered = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            [
                "ok      sourceVariable",
                "error   sourceVariablePattern: Please set a sourceVariablePattern",
                "warning destinationVariable: Isn't the destinationVariable too short?",
                "warning destinationVariablePattern: {1} will be left as written; \
                 the source pattern has 0 capture group(s)",
            ]
        );
    }
}
