//! Destination templates and their positional `{i}` placeholders.

mod placeholder;
mod substitute;

pub use placeholder::placeholder_indices;
pub use substitute::substitute_captures;

/// Literal token replaced by capture group `index`.
///
/// # Examples
/// ```
/// assert_eq!(variable_converter::placeholder_token(3), "{3}");
/// ```
#[must_use]
pub fn placeholder_token(index: usize) -> String {
    format!("{{{index}}}")
}
