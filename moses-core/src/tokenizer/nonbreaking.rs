//! Sentence-final period resolution
//!
//! The one tokenizer stage that needs token lookahead: whether `word.` keeps
//! its period depends on the prefix lists and on the token that follows.

use crate::charclass::CharClass;
use crate::language::NonBreakingPrefixes;

pub(crate) struct PeriodResolver<'a> {
    pub prefixes: &'a NonBreakingPrefixes,
    pub alpha: &'a CharClass,
    pub lower: &'a CharClass,
}

impl PeriodResolver<'_> {
    /// Split the final period off every token that ends a sentence
    pub(crate) fn resolve(&self, text: &str) -> String {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let mut out: Vec<String> = Vec::with_capacity(tokens.len());

        for (i, token) in tokens.iter().enumerate() {
            let next = tokens.get(i + 1).copied();
            match token.strip_suffix('.') {
                Some(prefix) if !prefix.is_empty() && self.splits(prefix, next) => {
                    out.push(format!("{prefix} ."));
                }
                _ => out.push((*token).to_string()),
            }
        }
        out.join(" ")
    }

    fn splits(&self, prefix: &str, next: Option<&str>) -> bool {
        // Checked in this order; the first hit keeps the period attached.
        if prefix.contains('.') && self.alpha.any_in(prefix) {
            return false;
        }
        if self.prefixes.is_nonbreaking(prefix) {
            return false;
        }
        if let Some(first) = next.and_then(|t| t.chars().next()) {
            if self.lower.contains(first) {
                return false;
            }
        }

        let before_number = next
            .and_then(|t| t.chars().next())
            .is_some_and(|c| c.is_ascii_digit());
        !(self.prefixes.is_numeric_only(prefix) && before_number)
    }
}
