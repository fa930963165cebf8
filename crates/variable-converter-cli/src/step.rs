//! The four configured fields of a build step.

use std::fmt;

use clap::Args;
use variable_converter::ConversionRequest;

use crate::environment::Environment;

/// One configured field of the step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Value, or variable reference, to search.
    SourceVariable,
    /// Regular expression applied to the source value.
    SourceVariablePattern,
    /// Name of the variable to produce.
    DestinationVariable,
    /// Template with `{i}` placeholders.
    DestinationVariablePattern,
}

impl Field {
    /// Every field, in configuration order.
    pub const ALL: [Self; 4] = [
        Self::SourceVariable,
        Self::SourceVariablePattern,
        Self::DestinationVariable,
        Self::DestinationVariablePattern,
    ];

    /// Configuration key of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SourceVariable => "sourceVariable",
            Self::SourceVariablePattern => "sourceVariablePattern",
            Self::DestinationVariable => "destinationVariable",
            Self::DestinationVariablePattern => "destinationVariablePattern",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Step configuration as supplied by the user, before expansion.
///
/// Missing fields default to empty and are reported by the checks or by the
/// conversion itself.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct StepConfig {
    /// Source value; `${NAME}` and `$NAME` reference environment variables.
    #[arg(long = "source", default_value = "")]
    pub source_variable: String,
    /// Regular expression searched for in the source value.
    #[arg(long = "source-pattern", default_value = "")]
    pub source_variable_pattern: String,
    /// Name of the variable to produce.
    #[arg(long = "destination", default_value = "")]
    pub destination_variable: String,
    /// Template for the produced value; `{i}` receives capture group `i`.
    #[arg(long = "destination-pattern", default_value = "")]
    pub destination_variable_pattern: String,
}

impl StepConfig {
    /// Create a configuration from its four fields.
    #[must_use]
    pub fn new(
        source_variable: impl Into<String>,
        source_variable_pattern: impl Into<String>,
        destination_variable: impl Into<String>,
        destination_variable_pattern: impl Into<String>,
    ) -> Self {
        Self {
            source_variable: source_variable.into(),
            source_variable_pattern: source_variable_pattern.into(),
            destination_variable: destination_variable.into(),
            destination_variable_pattern: destination_variable_pattern.into(),
        }
    }

    /// Raw value of `field`.
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::SourceVariable => &self.source_variable,
            Field::SourceVariablePattern => &self.source_variable_pattern,
            Field::DestinationVariable => &self.destination_variable,
            Field::DestinationVariablePattern => &self.destination_variable_pattern,
        }
    }

    /// Expand variable references in every field.
    #[must_use]
    pub fn expand(&self, env: &Environment) -> Self {
        Self {
            source_variable: env.expand(&self.source_variable),
            source_variable_pattern: env.expand(&self.source_variable_pattern),
            destination_variable: env.expand(&self.destination_variable),
            destination_variable_pattern: env.expand(&self.destination_variable_pattern),
        }
    }

    /// Conversion request built from the fields as they stand.
    #[must_use]
    pub fn to_request(&self) -> ConversionRequest {
        ConversionRequest::new(
            self.source_variable.as_str(),
            self.source_variable_pattern.as_str(),
            self.destination_variable.as_str(),
            self.destination_variable_pattern.as_str(),
        )
    }
}
