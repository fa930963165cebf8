//! Error types for the build-step host.
//!
//! A failed conversion is not a host error: it is reported as an
//! unsuccessful step, so it never appears here.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while configuring or running the build step.
#[derive(Debug, Error)]
pub enum CliError {
    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The env file could not be opened or written.
    #[error("cannot write env file {}: {source}", path.display())]
    EnvFile {
        /// Target file.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },
}
