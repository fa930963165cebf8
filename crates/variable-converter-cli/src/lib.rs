//! Build-step host for `variable-converter`.
//!
//! The host reads the four step fields from the command line and expands
//! `${NAME}` references from the process environment. It hands the result to
//! [`variable_converter::convert`] and publishes the produced variable, either
//! as `NAME=VALUE` on stdout or appended to an env file for later steps.
//!
//! # Configuration
//!
//! - `VARIABLE_CONVERTER_LOG_LEVEL`: Log verbosity (trace, debug, info, warn,
//!   error)
//! - `VARIABLE_CONVERTER_ENV_FILE`: Append produced variables to this file

pub mod check;
pub mod cli;
pub mod commands;
pub mod config;
pub mod environment;
pub mod error;
pub mod logging;
mod output;
pub mod step;
