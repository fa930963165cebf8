//! Scanner for positional placeholder tokens.

/// Distinct group indices referenced by `{i}` tokens in `template`, ascending.
///
/// Only canonical decimal tokens are reported (`{7}`, not `{07}` or `{ 7}`),
/// since those are the only spellings substitution replaces. `{0}` is
/// reported even though substitution never fills it.
///
/// # Examples
/// ```
/// use variable_converter::placeholder_indices;
/// assert_eq!(placeholder_indices("{2}-{1}-{2}"), vec![1, 2]);
/// assert!(placeholder_indices("{name}").is_empty());
/// ```
#[must_use]
pub fn placeholder_indices(template: &str) -> Vec<usize> {
    let mut indices = scan_placeholders(template);
    indices.sort_unstable();
    indices.dedup();
    indices
}

/// Indices of every `{i}` token in `template`, in order of appearance.
pub(crate) fn scan_placeholders(template: &str) -> Vec<usize> {
    let bytes = template.as_bytes();
    let mut found = Vec::new();
    let mut pos = 0;

    while let Some(&b) = bytes.get(pos) {
        let token = if b == b'{' {
            parse_index(bytes, pos)
        } else {
            None
        };
        let Some((next_pos, index)) = token else {
            pos += 1;
            continue;
        };
        found.push(index);
        pos = next_pos;
    }

    found
}

fn parse_index(bytes: &[u8], start: usize) -> Option<(usize, usize)> {
    let digits_start = start + 1;
    let mut end = digits_start;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    if end == digits_start || bytes.get(end) != Some(&b'}') {
        return None;
    }

    let digits = bytes.get(digits_start..end)?;
    if digits.len() > 1 && digits.first() == Some(&b'0') {
        return None;
    }
    let index = std::str::from_utf8(digits).ok()?.parse().ok()?;
    Some((end + 1, index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_tokens_in_order() {
        assert_eq!(scan_placeholders("v{2}.{1}.{2}"), vec![2, 1, 2]);
    }

    #[test]
    fn finds_token_inside_doubled_braces() {
        assert_eq!(scan_placeholders("{{1}}"), vec![1]);
    }

    #[test]
    fn skips_leading_zero_and_padded_tokens() {
        assert!(scan_placeholders("{01} { 1} {1 } {}").is_empty());
    }

    #[test]
    fn keeps_group_zero() {
        assert_eq!(placeholder_indices("{0}{3}"), vec![0, 3]);
    }

    #[test]
    fn ignores_unterminated_tokens() {
        assert!(placeholder_indices("{12").is_empty());
    }

    #[test]
    fn ignores_indices_that_overflow() {
        assert!(
            placeholder_indices("{99999999999999999999999999}").is_empty()
        );
    }
}
