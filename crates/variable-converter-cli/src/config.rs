//! Host configuration parsed from environment variables.
//!
//! Settings use the `VARIABLE_CONVERTER_` prefix and may be overridden by
//! command-line flags.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::CliError;

const LOG_LEVEL_VAR: &str = "VARIABLE_CONVERTER_LOG_LEVEL";
const ENV_FILE_VAR: &str = "VARIABLE_CONVERTER_ENV_FILE";

/// Log level enumeration matching tracing crate levels.
///
/// Defaults to `Info` when not specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Most verbose logging, includes all trace spans.
    Trace,
    /// Debug-level information for development.
    Debug,
    /// Standard informational messages.
    #[default]
    Info,
    /// Warning messages for potentially problematic situations.
    Warn,
    /// Error messages for failures.
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(CliError::InvalidConfig(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Convert to a tracing filter directive string.
    #[must_use]
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Configuration for the build step host.
///
/// # Environment Variables
///
/// - `VARIABLE_CONVERTER_LOG_LEVEL`: Sets the log level (trace, debug, info,
///   warn, error)
/// - `VARIABLE_CONVERTER_ENV_FILE`: File that receives `NAME=VALUE` lines
///   instead of stdout
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: LogLevel,
    /// Where produced variables are appended, if not stdout.
    pub env_file: Option<PathBuf>,
}

impl CliConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if an environment variable contains
    /// an invalid value.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its
    /// value.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if a value cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|val| !val.is_empty());

        let log_level = read(LOG_LEVEL_VAR)
            .map_or_else(|| Ok(LogLevel::default()), |val| val.parse())?;
        let env_file = read(ENV_FILE_VAR).map(PathBuf::from);

        Ok(Self {
            log_level,
            env_file,
        })
    }

    /// Apply optional overrides to an existing configuration.
    ///
    /// This is intended for CLI overrides that should take precedence over
    /// environment-based defaults.
    #[must_use]
    pub fn apply_overrides(
        mut self,
        log_level: Option<LogLevel>,
        env_file: Option<PathBuf>,
    ) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }

        if let Some(path) = env_file {
            self.env_file = Some(path);
        }

        self
    }

    /// Create a new configuration with the specified log level.
    #[must_use]
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests require explicit panic messages for debugging failures"
)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn log_level_parses_valid_values() {
        assert_eq!("trace".parse::<LogLevel>().ok(), Some(LogLevel::Trace));
        assert_eq!("debug".parse::<LogLevel>().ok(), Some(LogLevel::Debug));
        assert_eq!("info".parse::<LogLevel>().ok(), Some(LogLevel::Info));
        assert_eq!("warning".parse::<LogLevel>().ok(), Some(LogLevel::Warn));
        assert_eq!("ERROR".parse::<LogLevel>().ok(), Some(LogLevel::Error));
    }

    #[test]
    fn log_level_rejects_invalid_values() {
        let result = "loud".parse::<LogLevel>();
        let message = result.unwrap_err().to_string();
        assert!(message.contains("unknown log level"));
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = CliConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn reads_prefixed_variables() {
        let config = CliConfig::from_lookup(lookup(&[
            (LOG_LEVEL_VAR, "debug"),
            (ENV_FILE_VAR, "build.env"),
        ]))
        .unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.env_file, Some(PathBuf::from("build.env")));
    }

    #[test]
    fn empty_values_count_as_unset() {
        let vars = lookup(&[(LOG_LEVEL_VAR, ""), (ENV_FILE_VAR, "")]);
        let config = CliConfig::from_lookup(vars).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn surfaces_invalid_log_level() {
        let err = CliConfig::from_lookup(lookup(&[(LOG_LEVEL_VAR, "chatty")])).unwrap_err();
        assert!(matches!(err, CliError::InvalidConfig(_)));
    }

    #[test]
    fn apply_overrides_updates_selected_fields() {
        let config = CliConfig::default()
            .apply_overrides(Some(LogLevel::Error), Some(PathBuf::from("out.env")));
        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.env_file, Some(PathBuf::from("out.env")));

        let config = CliConfig::default()
            .with_log_level(LogLevel::Warn)
            .apply_overrides(None, None);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.env_file, None);
    }
}
