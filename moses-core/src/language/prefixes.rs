//! Non-breaking prefix sets
//!
//! A non-breaking prefix is a word after which a period does not end the
//! sentence ("Mr.", "e.g."). Entries marked `#NUMERIC_ONLY#` only suppress
//! the break when a number follows ("No. 5").

use super::{loader, Language};
use crate::error::{Error, Result};
use std::collections::HashSet;
use std::path::Path;

const NUMERIC_ONLY_MARKER: &str = "#NUMERIC_ONLY#";

/// Per-language prefix set plus its numeric-only subset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NonBreakingPrefixes {
    plain: HashSet<String>,
    numeric_only: HashSet<String>,
}

impl NonBreakingPrefixes {
    /// Create an empty prefix set
    pub fn new() -> Self {
        Self::default()
    }

    /// Embedded prefix list for a language
    ///
    /// Languages without their own list use the English one.
    pub fn for_language(language: &Language) -> Self {
        match loader::embedded_prefixes(language.code()) {
            Some(prefixes) => prefixes.clone(),
            None => {
                tracing::warn!(
                    "No non-breaking prefixes for '{}', falling back to English",
                    language.code()
                );
                loader::embedded_prefixes("en").cloned().unwrap_or_default()
            }
        }
    }

    /// Parse the one-prefix-per-line text format
    pub fn parse(text: &str) -> Result<Self> {
        let mut prefixes = Self::new();
        for (lineno, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match line.strip_suffix(NUMERIC_ONLY_MARKER) {
                Some(head) => {
                    let prefix = head.trim_end();
                    if prefix.is_empty() || prefix.len() == head.len() {
                        return Err(Error::config_load(
                            "non-breaking prefixes",
                            format!("line {}: malformed numeric-only entry `{line}`", lineno + 1),
                        ));
                    }
                    prefixes.numeric_only.insert(prefix.to_string());
                }
                None => {
                    if line.contains(char::is_whitespace) {
                        return Err(Error::config_load(
                            "non-breaking prefixes",
                            format!("line {}: prefix `{line}` contains whitespace", lineno + 1),
                        ));
                    }
                    prefixes.plain.insert(line.to_string());
                }
            }
        }
        Ok(prefixes)
    }

    /// Read a prefix file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let what = format!("non-breaking prefixes from {}", path.display());
        Self::parse(&text).map_err(|e| match e {
            Error::ConfigLoad { reason, .. } => Error::config_load(what, reason),
            other => other,
        })
    }

    /// Add every entry of `other` to this set
    pub fn extend(&mut self, other: &NonBreakingPrefixes) {
        self.plain.extend(other.plain.iter().cloned());
        self.numeric_only.extend(other.numeric_only.iter().cloned());
    }

    /// Add plain prefixes
    pub fn extend_plain<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.plain.extend(words.into_iter().map(Into::into));
    }

    /// True if a period after `prefix` never breaks
    pub fn is_nonbreaking(&self, prefix: &str) -> bool {
        self.plain.contains(prefix) && !self.numeric_only.contains(prefix)
    }

    /// True if a period after `prefix` only holds before a number
    pub fn is_numeric_only(&self, prefix: &str) -> bool {
        self.numeric_only.contains(prefix)
    }

    /// Numeric-only prefixes, in no particular order
    pub fn numeric_only(&self) -> impl Iterator<Item = &str> {
        self.numeric_only.iter().map(String::as_str)
    }

    /// Total number of prefixes
    pub fn len(&self) -> usize {
        self.plain.len() + self.numeric_only.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plain.is_empty() && self.numeric_only.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let prefixes = NonBreakingPrefixes::parse("# header\n\nMr\n  Dr  \nNo #NUMERIC_ONLY# \n")
            .unwrap();
        assert!(prefixes.is_nonbreaking("Mr"));
        assert!(prefixes.is_nonbreaking("Dr"));
        assert!(!prefixes.is_nonbreaking("No"));
        assert!(prefixes.is_numeric_only("No"));
        assert_eq!(prefixes.len(), 3);
    }

    #[test]
    fn test_parse_rejects_malformed_lines() {
        let commented = "#NUMERIC_ONLY# is a comment\n ok\n";
        assert!(NonBreakingPrefixes::parse(commented).is_ok());
        assert!(NonBreakingPrefixes::parse("Mr Mrs\n").is_err());
        assert!(NonBreakingPrefixes::parse("No#NUMERIC_ONLY#\n").is_err());
    }

    #[test]
    fn test_for_language_fallback() {
        let en = NonBreakingPrefixes::for_language(&Language::English);
        let other = NonBreakingPrefixes::for_language(&Language::from_code("xx"));
        assert_eq!(en, other);
        assert!(en.is_nonbreaking("Mr"));
        assert!(en.is_numeric_only("pp"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Foo\nBar #NUMERIC_ONLY#").unwrap();
        let prefixes = NonBreakingPrefixes::from_file(file.path()).unwrap();
        assert!(prefixes.is_nonbreaking("Foo"));
        assert!(prefixes.is_numeric_only("Bar"));
    }

    #[test]
    fn test_from_missing_file() {
        let result = NonBreakingPrefixes::from_file("/nonexistent/prefixes.txt");
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_extend_is_union() {
        let mut prefixes = NonBreakingPrefixes::for_language(&Language::English);
        let before = prefixes.len();
        prefixes.extend_plain(["Blvd"]);
        assert!(prefixes.is_nonbreaking("Blvd"));
        assert!(prefixes.is_nonbreaking("Mr"));
        assert_eq!(prefixes.len(), before + 1);
    }
}
