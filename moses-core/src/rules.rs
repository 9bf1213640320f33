//! Ordered rewrite rules
//!
//! A [`RuleTable`] is applied front to back over the whole string; each rule
//! sees the output of the ones before it, so order matters.

use crate::error::{Error, Result};
use regex::{Regex, RegexBuilder};
use std::borrow::Cow;

/// What a rule looks for
#[derive(Debug, Clone)]
enum Matcher {
    /// Exact substring, every occurrence
    Literal(String),
    /// Regular expression; replacements may use `$1` / `${name}`
    Pattern(Regex),
}

/// A single substitution
#[derive(Debug, Clone)]
pub struct Rule {
    matcher: Matcher,
    replacement: String,
    repeat: bool,
}

impl Rule {
    pub fn literal(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            matcher: Matcher::Literal(from.into()),
            replacement: to.into(),
            repeat: false,
        }
    }

    pub fn regex(pattern: &str, replacement: impl Into<String>) -> Result<Self> {
        Self::compile(pattern, replacement.into(), false)
    }

    pub fn regex_case_insensitive(pattern: &str, replacement: impl Into<String>) -> Result<Self> {
        Self::compile(pattern, replacement.into(), true)
    }

    fn compile(pattern: &str, replacement: String, case_insensitive: bool) -> Result<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(case_insensitive)
            .build()
            .map_err(|source| Error::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(Self {
            matcher: Matcher::Pattern(regex),
            replacement,
            repeat: false,
        })
    }

    /// Re-apply until the text stops changing
    ///
    /// Needed where consecutive matches share a character, e.g. the `b` in
    /// `a-b-c`.
    pub fn repeated(mut self) -> Self {
        self.repeat = true;
        self
    }

    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let mut current = self.apply_once(Cow::Borrowed(text));
        while self.repeat {
            let next = match self.apply_once(Cow::Borrowed(current.as_ref())) {
                Cow::Owned(next) if next != *current => next,
                _ => break,
            };
            current = Cow::Owned(next);
        }
        current
    }

    fn apply_once<'t>(&self, text: Cow<'t, str>) -> Cow<'t, str> {
        match &self.matcher {
            Matcher::Literal(needle) => {
                if needle.is_empty() || !text.contains(needle.as_str()) {
                    text
                } else {
                    Cow::Owned(text.replace(needle.as_str(), &self.replacement))
                }
            }
            Matcher::Pattern(regex) => {
                let replaced = match regex.replace_all(&text, self.replacement.as_str()) {
                    Cow::Owned(replaced) => Some(replaced),
                    Cow::Borrowed(_) => None,
                };
                replaced.map_or(text, Cow::Owned)
            }
        }
    }
}

/// Ordered sequence of rules, immutable once built
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile `(pattern, replacement)` pairs into regex rules
    pub fn from_patterns(pairs: &[(&str, &str)]) -> Result<Self> {
        let rules = pairs
            .iter()
            .map(|(pattern, replacement)| Rule::regex(pattern, *replacement))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// `(needle, replacement)` pairs as literal rules
    pub fn from_literals(pairs: &[(&str, &str)]) -> Self {
        Self {
            rules: pairs
                .iter()
                .map(|(from, to)| Rule::literal(*from, *to))
                .collect(),
        }
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Append another table's rules after this one's
    pub fn append(&mut self, other: RuleTable) {
        self.rules.extend(other.rules);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule in order
    pub fn apply(&self, text: &str) -> String {
        let mut current = text.to_string();
        for (index, rule) in self.rules.iter().enumerate() {
            if let Cow::Owned(next) = rule.apply(&current) {
                tracing::trace!(rule = index, "rewrite rule applied");
                current = next;
            }
        }
        current
    }
}

impl FromIterator<Rule> for RuleTable {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
