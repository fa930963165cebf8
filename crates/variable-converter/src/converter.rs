//! The validate, match, substitute pipeline.

use regex::Regex;

use crate::capture::extract_captured_values;
use crate::errors::{ConversionFailure, FailureKind, invalid_pattern, no_match};
use crate::request::{ConversionRequest, is_blank};
use crate::result::{Conversion, ConversionResult};
use crate::template::substitute_captures;

/// Run one conversion.
///
/// Checks run in a fixed order and the first failing one is reported:
///
/// 1. blank destination name,
/// 2. blank source pattern,
/// 3. source pattern does not compile,
/// 4. source pattern does not occur in the source value,
/// 5. blank destination name (repeated, with the destination wording),
/// 6. blank destination template.
///
/// On success the destination template has each `{i}` replaced by capture
/// group `i` (see [`substitute_captures`](crate::substitute_captures)).
///
/// # Examples
/// ```
/// use variable_converter::{convert, ConversionRequest, FailureKind};
///
/// let request = ConversionRequest::new("abc", r"\d+", "OUT", "{1}");
/// assert_eq!(convert(&request).failure_kind(), Some(FailureKind::NoMatch));
/// ```
#[must_use]
pub fn convert(request: &ConversionRequest) -> ConversionResult {
    try_convert(request).into()
}

fn try_convert(request: &ConversionRequest) -> Result<Conversion, ConversionFailure> {
    let name = request.destination_name();
    let pattern = request.source_pattern();
    let value = request.source_value();
    let template = request.destination_template();

    if is_blank(name) {
        return Err(ConversionFailure::new(
            FailureKind::BlankDestinationName,
            "Source variable name should not be blank",
        ));
    }
    if is_blank(pattern) {
        return Err(ConversionFailure::new(
            FailureKind::BlankSourcePattern,
            "Source variable pattern should not be blank",
        ));
    }

    let regex = Regex::new(pattern).map_err(|err| invalid_pattern(&err))?;
    let captures = extract_captured_values(&regex, value).ok_or_else(|| no_match(pattern, value))?;

    if is_blank(name) {
        return Err(ConversionFailure::new(
            FailureKind::BlankDestinationName,
            "Destination variable name should not be blank",
        ));
    }
    if is_blank(template) {
        return Err(ConversionFailure::new(
            FailureKind::BlankDestinationTemplate,
            "Destination variable pattern should not be blank",
        ));
    }

    Ok(Conversion::new(
        name,
        substitute_captures(template, &captures),
    ))
}
