//! Outcome of a conversion.

use crate::errors::{ConversionFailure, FailureKind};

/// A variable produced by a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    name: String,
    value: String,
}

impl Conversion {
    /// Create a name/value pair.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Destination variable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value synthesised from the template.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Split into `(name, value)`.
    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.name, self.value)
    }
}

/// Exactly one of these is produced per request.
///
/// # Examples
/// ```
/// use variable_converter::{convert, ConversionRequest, ConversionResult};
/// let result = convert(&ConversionRequest::new("abc123", r"([a-z]+)(\d+)", "OUT", "{2}-{1}"));
/// let ConversionResult::Success(conversion) = result else {
///     panic!("expected a conversion");
/// };
/// assert_eq!(conversion.value(), "123-abc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionResult {
    /// The destination variable and its value.
    Success(Conversion),
    /// The first check that failed.
    Failure(ConversionFailure),
}

impl ConversionResult {
    /// Whether the conversion produced a variable.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The failure reason, if any.
    #[must_use]
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure.reason()),
        }
    }

    /// Convert into a [`Result`] so callers can propagate with `?`.
    ///
    /// # Errors
    /// Returns the [`ConversionFailure`] when the conversion failed.
    pub fn into_result(self) -> Result<Conversion, ConversionFailure> {
        match self {
            Self::Success(conversion) => Ok(conversion),
            Self::Failure(failure) => Err(failure),
        }
    }
}

impl From<Result<Conversion, ConversionFailure>> for ConversionResult {
    fn from(result: Result<Conversion, ConversionFailure>) -> Self {
        result.map_or_else(Self::Failure, Self::Success)
    }
}
