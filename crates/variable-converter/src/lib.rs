//! Derive a variable from a regular-expression match.
//!
//! A [`ConversionRequest`] names a source value, a pattern to search it for,
//! a destination variable and a destination template. [`convert`] finds the
//! first match, substitutes capture group `i` for every `{i}` token in the
//! template and returns the resulting name/value pair, or the first check
//! that failed.
//!
//! The crate performs no I/O and keeps no state between calls. Expanding
//! variable references in the inputs and publishing the result are left to
//! the caller.

mod capture;
mod converter;
mod errors;
mod request;
mod result;
mod template;

pub use capture::extract_captured_values;
pub use converter::convert;
pub use errors::{ConversionFailure, FailureKind};
pub use request::ConversionRequest;
pub use result::{Conversion, ConversionResult};
pub use template::{placeholder_indices, placeholder_token, substitute_captures};
