//! Capture extraction for the first match of a source pattern.

use regex::Regex;

/// Search `text` for the first occurrence of `re` and return capture groups
/// `1..=N`, or `None` when the pattern does not occur.
///
/// The search is unanchored. Group 0 (the whole match) is skipped. Optional
/// groups that did not participate yield empty strings so positions stay
/// aligned with group indices.
///
/// # Examples
/// ```
/// # use regex::Regex;
/// # use variable_converter::extract_captured_values;
/// let regex = Regex::new(r"(\d+)-(\w+)").expect("valid pattern");
/// let values = extract_captured_values(&regex, "id 42-answer!").expect("pattern occurs");
/// assert_eq!(values, vec!["42".to_string(), "answer".to_string()]);
/// ```
///
/// ```
/// # use regex::Regex;
/// # use variable_converter::extract_captured_values;
/// let regex = Regex::new(r"\d+").expect("valid pattern");
/// assert!(extract_captured_values(&regex, "nope").is_none());
/// ```
#[must_use]
pub fn extract_captured_values(re: &Regex, text: &str) -> Option<Vec<String>> {
    let caps = re.captures(text)?;
    let groups = caps
        .iter()
        .skip(1)
        .map(|group| group.map_or("", |m| m.as_str()).to_owned());
    Some(groups.collect())
}
