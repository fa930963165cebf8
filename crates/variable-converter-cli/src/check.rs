//! Field checks run before a step is saved or executed.
//!
//! Every field gets a [`Verdict`]. Empty fields are errors and one-character
//! fields are warnings. The source pattern must compile, and the template
//! should only name capture groups the pattern defines.

use regex::Regex;
use variable_converter::{placeholder_indices, placeholder_token};

use crate::step::{Field, StepConfig};

/// Outcome of checking one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Nothing to report.
    Ok,
    /// Suspicious but usable.
    Warning(String),
    /// The step cannot succeed with this value.
    Error(String),
}

impl Verdict {
    const fn severity(&self) -> u8 {
        match self {
            Self::Ok => 0,
            Self::Warning(_) => 1,
            Self::Error(_) => 2,
        }
    }

    /// Keep whichever verdict is more severe, preferring `self` on ties.
    #[must_use]
    fn or_worse(self, other: Self) -> Self {
        if other.severity() > self.severity() {
            other
        } else {
            self
        }
    }

    /// Whether this verdict is an error.
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Verdict for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCheck {
    /// Checked field.
    pub field: Field,
    /// What was found.
    pub verdict: Verdict,
}

/// Verdicts for every field, in configuration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    checks: Vec<FieldCheck>,
}

impl CheckReport {
    /// All field checks.
    #[must_use]
    pub fn checks(&self) -> &[FieldCheck] {
        &self.checks
    }

    /// Verdict recorded for `field`.
    #[must_use]
    pub fn verdict(&self, field: Field) -> Option<&Verdict> {
        self.checks
            .iter()
            .find(|check| check.field == field)
            .map(|check| &check.verdict)
    }

    /// Whether any field failed.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.checks.iter().any(|check| check.verdict.is_error())
    }
}

/// Presence and length check shared by every field.
///
/// # Examples
/// ```
/// use variable_converter_cli::check::{check_field, Verdict};
/// use variable_converter_cli::step::Field;
///
/// assert_eq!(
///     check_field(Field::SourceVariable, ""),
///     Verdict::Error("Please set a sourceVariable".into())
/// );
/// assert_eq!(check_field(Field::SourceVariable, "${BRANCH}"), Verdict::Ok);
/// ```
#[must_use]
pub fn check_field(field: Field, value: &str) -> Verdict {
    if value.is_empty() {
        return Verdict::Error(format!("Please set a {field}"));
    }
    if value.chars().count() < 2 {
        return Verdict::Warning(format!("Isn't the {field} too short?"));
    }
    Verdict::Ok
}

/// Check every field of `config`.
#[must_use]
pub fn check_step(config: &StepConfig) -> CheckReport {
    let mut checks: Vec<FieldCheck> = Field::ALL
        .iter()
        .map(|&field| FieldCheck {
            field,
            verdict: check_field(field, config.value(field)),
        })
        .collect();

    let refinement = Regex::new(&config.source_variable_pattern).map_or_else(
        |err| {
            Some((
                Field::SourceVariablePattern,
                Verdict::Error(format!("Invalid regular expression: {err}")),
            ))
        },
        |regex| {
            unknown_placeholders(&regex, &config.destination_variable_pattern)
                .map(|verdict| (Field::DestinationVariablePattern, verdict))
        },
    );
    if let Some((field, verdict)) = refinement {
        refine(&mut checks, field, verdict);
    }

    CheckReport { checks }
}

/// Warning for `{i}` tokens that no capture group of `regex` will fill.
fn unknown_placeholders(regex: &Regex, template: &str) -> Option<Verdict> {
    let group_count = regex.captures_len().saturating_sub(1);
    let unknown: Vec<String> = placeholder_indices(template)
        .into_iter()
        .filter(|&index| index == 0 || index > group_count)
        .map(placeholder_token)
        .collect();
    if unknown.is_empty() {
        return None;
    }
    Some(Verdict::Warning(format!(
        "{} will be left as written; the source pattern has {group_count} capture group(s)",
        unknown.join(", ")
    )))
}

fn refine(checks: &mut [FieldCheck], field: Field, verdict: Verdict) {
    if let Some(check) = checks.iter_mut().find(|check| check.field == field) {
        let current = std::mem::replace(&mut check.verdict, Verdict::Ok);
        check.verdict = current.or_worse(verdict);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        Field::SourceVariable,
        "",
        Verdict::Error("Please set a sourceVariable".into())
    )]
    #[case(
        Field::DestinationVariable,
        "V",
        Verdict::Warning("Isn't the destinationVariable too short?".into())
    )]
    #[case(
        Field::SourceVariablePattern,
        "é",
        Verdict::Warning("Isn't the sourceVariablePattern too short?".into())
    )]
    #[case(Field::DestinationVariablePattern, "{1}", Verdict::Ok)]
    fn checks_presence_and_length(
        #[case] field: Field,
        #[case] value: &str,
        #[case] expected: Verdict,
    ) {
        assert_eq!(check_field(field, value), expected);
    }

    #[test]
    fn accepts_complete_step() {
        let step = StepConfig::new("release-1.2", r"(\d+)\.(\d+)", "VERSION", "{1}{2}");
        let report = check_step(&step);
        assert!(!report.has_errors());
        assert!(report.checks().iter().all(|c| c.verdict == Verdict::Ok));
    }

    #[test]
    fn reports_invalid_pattern() {
        let report = check_step(&StepConfig::new("abc", "([", "OUT", "{1}"));
        assert!(report.has_errors());
        let Some(Verdict::Error(message)) = report.verdict(Field::SourceVariablePattern) else {
            panic!("expected pattern error");
        };
        assert!(message.starts_with("Invalid regular expression"));
    }

    #[test]
    fn empty_pattern_keeps_presence_message() {
        let report = check_step(&StepConfig::new("abc", "", "OUT", "{1}"));
        assert_eq!(
            report.verdict(Field::SourceVariablePattern),
            Some(&Verdict::Error("Please set a sourceVariablePattern".into()))
        );
    }

    #[test]
    fn warns_about_placeholders_without_groups() {
        let report = check_step(&StepConfig::new("abc", r"(\w)", "OUT", "{0}{1}{3}"));
        assert!(!report.has_errors());
        assert_eq!(
            report.verdict(Field::DestinationVariablePattern),
            Some(&Verdict::Warning(
                "{0}, {3} will be left as written; the source pattern has 1 capture group(s)".into()
            ))
        );
    }

    #[test]
    fn skips_placeholder_analysis_for_invalid_pattern() {
        let report = check_step(&StepConfig::new("abc", "([", "OUT", "{5}"));
        assert_eq!(
            report.verdict(Field::DestinationVariablePattern),
            Some(&Verdict::Ok)
        );
    }

    #[test]
    fn more_severe_verdict_wins() {
        let warning = Verdict::Warning("first".into());
        assert_eq!(
            warning.clone().or_worse(Verdict::Warning("second".into())),
            warning
        );
        assert!(warning.or_worse(Verdict::Error("bad".into())).is_error());
    }
}
