//! Sequential placeholder substitution.

use super::placeholder_token;

/// Replace `{1}`, `{2}`, ... in `template` with the matching entry of
/// `captures`.
///
/// Groups are applied in ascending order, each to the output of the previous
/// pass. Text inserted for group `i` is therefore still subject to the
/// replacement of every group after `i`. Tokens naming a group beyond
/// `captures.len()` are left untouched.
///
/// # Examples
/// ```
/// use variable_converter::substitute_captures;
/// let captures = vec!["abc".to_string(), "123".to_string()];
/// assert_eq!(substitute_captures("{2}-{1}", &captures), "123-abc");
/// assert_eq!(substitute_captures("{1}{3}", &captures), "abc{3}");
/// ```
#[must_use]
pub fn substitute_captures(template: &str, captures: &[String]) -> String {
    let mut output = template.to_owned();
    for (index, value) in (1..).zip(captures) {
        output = output.replace(&placeholder_token(index), value);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn replaces_every_occurrence() {
        assert_eq!(substitute_captures("{1}/{1}", &owned(&["x"])), "x/x");
    }

    #[test]
    fn leaves_group_zero_token() {
        assert_eq!(substitute_captures("{0}{1}", &owned(&["x"])), "{0}x");
    }

    #[test]
    fn substitutes_empty_groups() {
        assert_eq!(substitute_captures("[{1}]", &owned(&[""])), "[]");
    }

    #[test]
    fn later_groups_rewrite_earlier_replacements() {
        assert_eq!(substitute_captures("{1}", &owned(&["{2}", "tail"])), "tail");
    }

    #[test]
    fn earlier_groups_do_not_see_later_tokens_twice() {
        assert_eq!(substitute_captures("{2}", &owned(&["head", "{1}"])), "{1}");
    }

    #[test]
    fn ignores_non_canonical_tokens() {
        assert_eq!(
            substitute_captures("{01} { 1}", &owned(&["x"])),
            "{01} { 1}"
        );
    }
}
