//! Build environment: variable lookup, reference expansion, and the
//! variables a step contributes back.

use std::collections::BTreeMap;
use std::env;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use variable_converter::Conversion;

static VARIABLE_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z0-9_.]+)\}|\$([A-Za-z0-9_]+)|\$\$")
        .unwrap_or_else(|_| unreachable!())
});

/// Variables visible to a build step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    /// Snapshot the current process environment.
    ///
    /// Variables whose name or value is not valid Unicode are skipped.
    #[must_use]
    pub fn from_process() -> Self {
        env::vars_os()
            .filter_map(|(key, value)| {
                Some((key.into_string().ok()?, value.into_string().ok()?))
            })
            .collect()
    }

    /// Value of `name`, if defined.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Replace `${NAME}` and `$NAME` references with their values.
    ///
    /// References to undefined variables are left as written. `$$` produces
    /// a literal `$`.
    ///
    /// # Examples
    /// ```
    /// use variable_converter_cli::environment::Environment;
    ///
    /// let env: Environment = [("BRANCH", "release/2.1")].into_iter().collect();
    /// assert_eq!(env.expand("${BRANCH} on $HOST"), "release/2.1 on $HOST");
    /// assert_eq!(env.expand("$$BRANCH"), "$BRANCH");
    /// ```
    #[must_use]
    pub fn expand(&self, text: &str) -> String {
        VARIABLE_REFERENCE
            .replace_all(text, |caps: &Captures<'_>| self.resolve(caps))
            .into_owned()
    }

    fn resolve(&self, caps: &Captures<'_>) -> String {
        let Some(name) = caps.get(1).or_else(|| caps.get(2)) else {
            return "$".to_owned();
        };
        self.get(name.as_str()).map_or_else(
            || caps.get(0).map_or_else(String::new, |m| m.as_str().to_owned()),
            ToOwned::to_owned,
        )
    }

    /// Merge contributed variables, replacing existing values.
    pub fn apply(&mut self, contribution: &EnvContribution) {
        for (name, value) in contribution.iter() {
            self.vars.insert(name.to_owned(), value.to_owned());
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Environment
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Variables produced by a step, to be merged into the host's environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvContribution {
    vars: BTreeMap<String, String>,
}

impl EnvContribution {
    /// Create an empty contribution.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name=value`, replacing an earlier value for `name`.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Iterate over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Whether nothing was contributed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl From<Conversion> for EnvContribution {
    fn from(conversion: Conversion) -> Self {
        let (name, value) = conversion.into_parts();
        let mut contribution = Self::new();
        contribution.add(name, value);
        contribution
    }
}
