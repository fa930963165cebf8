//! Failure model reported by the converter.

use std::fmt;
use thiserror::Error;

/// Reason a conversion did not produce a variable.
///
/// Variants are listed in the order the converter checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The destination variable name is empty or whitespace.
    BlankDestinationName,
    /// The source pattern is empty or whitespace.
    BlankSourcePattern,
    /// The source pattern is not a valid regular expression.
    InvalidPattern,
    /// The source pattern does not occur anywhere in the source value.
    NoMatch,
    /// The destination template is empty or whitespace.
    BlankDestinationTemplate,
}

impl FailureKind {
    /// Stable kebab-case identifier, suitable for logs and machine output.
    ///
    /// # Examples
    /// ```
    /// use variable_converter::FailureKind;
    /// assert_eq!(FailureKind::NoMatch.as_str(), "no-match");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BlankDestinationName => "blank-destination-name",
            Self::BlankSourcePattern => "blank-source-pattern",
            Self::InvalidPattern => "invalid-pattern",
            Self::NoMatch => "no-match",
            Self::BlankDestinationTemplate => "blank-destination-template",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A conversion that stopped at one of the validation or matching checks.
///
/// The `detail` carries the human-readable message a host surfaces to its
/// log; `Display` renders it verbatim.
///
/// # Examples
/// ```
/// use variable_converter::{ConversionFailure, FailureKind};
/// let failure = ConversionFailure::new(FailureKind::NoMatch, "nothing found");
/// assert_eq!(failure.reason(), FailureKind::NoMatch);
/// assert_eq!(failure.to_string(), "nothing found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{detail}")]
pub struct ConversionFailure {
    reason: FailureKind,
    detail: String,
}

impl ConversionFailure {
    /// Create a failure with the given reason and message.
    #[must_use]
    pub fn new(reason: FailureKind, detail: impl Into<String>) -> Self {
        Self {
            reason,
            detail: detail.into(),
        }
    }

    /// Which check failed.
    #[must_use]
    pub fn reason(&self) -> FailureKind {
        self.reason
    }

    /// Message describing the failure.
    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

pub(crate) fn no_match(pattern: &str, value: &str) -> ConversionFailure {
    ConversionFailure::new(
        FailureKind::NoMatch,
        format!("No match of reg ex value {pattern} for variable value {value}"),
    )
}

pub(crate) fn invalid_pattern(err: &regex::Error) -> ConversionFailure {
    ConversionFailure::new(FailureKind::InvalidPattern, err.to_string())
}
