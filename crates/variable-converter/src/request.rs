//! Input to a single conversion.

/// The four already-expanded strings a conversion works from.
///
/// # Examples
/// ```
/// use variable_converter::ConversionRequest;
/// let request = ConversionRequest::new("release-1.4", r"(\d+)\.(\d+)", "VERSION", "v{1}_{2}");
/// assert_eq!(request.destination_name(), "VERSION");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionRequest {
    source_value: String,
    source_pattern: String,
    destination_name: String,
    destination_template: String,
}

impl ConversionRequest {
    /// Build a request from its source value, source pattern, destination
    /// variable name and destination template.
    #[must_use]
    pub fn new(
        source_value: impl Into<String>,
        source_pattern: impl Into<String>,
        destination_name: impl Into<String>,
        destination_template: impl Into<String>,
    ) -> Self {
        Self {
            source_value: source_value.into(),
            source_pattern: source_pattern.into(),
            destination_name: destination_name.into(),
            destination_template: destination_template.into(),
        }
    }

    /// Text searched by the source pattern.
    #[must_use]
    pub fn source_value(&self) -> &str {
        &self.source_value
    }

    /// Regular expression searched for in the source value.
    #[must_use]
    pub fn source_pattern(&self) -> &str {
        &self.source_pattern
    }

    /// Name of the variable to produce.
    #[must_use]
    pub fn destination_name(&self) -> &str {
        &self.destination_name
    }

    /// Template whose `{i}` tokens receive capture group `i`.
    #[must_use]
    pub fn destination_template(&self) -> &str {
        &self.destination_template
    }
}

/// Whether `text` is empty or holds only blank characters.
pub(crate) fn is_blank(text: &str) -> bool {
    text.chars().all(is_blank_char)
}

/// Separators and control whitespace, excluding the non-breaking spaces.
///
/// `U+001C..=U+001F` count as blank; `U+0085` and the non-breaking spaces
/// `U+00A0`, `U+2007` and `U+202F` do not.
fn is_blank_char(c: char) -> bool {
    match c {
        '\u{1c}'..='\u{1f}' => true,
        '\u{85}' | '\u{a0}' | '\u{2007}' | '\u{202f}' => false,
        _ => c.is_whitespace(),
    }
}
