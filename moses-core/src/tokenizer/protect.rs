//! Protected patterns
//!
//! Matches of a protected pattern are swapped for opaque placeholders before
//! the rewrite rules run and put back verbatim afterwards, so URLs, e-mail
//! addresses and markup survive tokenization in one piece.

use super::marker::unique_marker;
use crate::error::{Error, Result};
use regex::{Regex, RegexBuilder};
use std::path::Path;

/// Markup tags, e-mail addresses and URLs with a path
pub const BASIC_PROTECTED_PATTERNS: [&str; 5] = [
    r"</?\S+/?>",
    r#"<\S+( [a-zA-Z0-9]+="?[^"]")+ ?/?>"#,
    r"<\S+( [a-zA-Z0-9]+='?[^']')+ ?/?>",
    r"[\w\-_.]+@([\w\-_]+\.)+[a-zA-Z]{2,}",
    r"(http[s]?|ftp)://[^:/\s]+(/\w+)*/[\w\-.]+",
];

/// URLs, e-mail addresses, @handles and #hashtags
pub const WEB_PROTECTED_PATTERNS: [&str; 4] = [
    r"((https?|ftp|rsync)://|www\.)[^ ]*",
    r"[\w\-_.]+@([\w\-_]+\.)+[a-zA-Z]{2,}",
    r"@[a-zA-Z0-9_]+",
    r"#[a-zA-Z0-9_]+",
];

const PLACEHOLDER: &str = "THISISPROTECTED";

/// A compiled list of protected patterns, matched case-insensitively
#[derive(Debug, Clone, Default)]
pub struct ProtectedPatterns {
    patterns: Vec<Regex>,
}

impl ProtectedPatterns {
    /// No protection
    pub fn none() -> Self {
        Self::default()
    }

    /// Compile patterns, skipping any that fail with a warning
    pub fn compile<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut compiled = Vec::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            match build(pattern) {
                Ok(regex) => compiled.push(regex),
                Err(e) => tracing::warn!("Skipping protected pattern: {e}"),
            }
        }
        Self { patterns: compiled }
    }

    /// Compile patterns, failing on the first invalid one
    pub fn try_compile<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| build(p.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn basic() -> Self {
        Self::compile(BASIC_PROTECTED_PATTERNS)
    }

    pub fn web() -> Self {
        Self::compile(WEB_PROTECTED_PATTERNS)
    }

    /// Read one pattern per line; blank lines are ignored
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Ok(Self::compile(
            text.lines().map(str::trim).filter(|line| !line.is_empty()),
        ))
    }

    /// Append another set after this one
    pub fn extend(&mut self, other: ProtectedPatterns) {
        self.patterns.extend(other.patterns);
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Replace every protected span with a numbered placeholder
    ///
    /// Spans are collected pattern by pattern, then substituted as plain
    /// substrings, so a span that occurs twice is replaced everywhere by the
    /// first placeholder that names it. The placeholder stem is chosen so
    /// that it never occurs in `text`.
    pub(crate) fn protect(&self, text: &str) -> (String, ProtectedSpans) {
        let spans: Vec<String> = self
            .patterns
            .iter()
            .flat_map(|regex| regex.find_iter(text).map(|m| m.as_str().to_string()))
            .filter(|span| !span.is_empty())
            .collect();

        let protected = ProtectedSpans {
            marker: unique_marker(PLACEHOLDER, &[text]),
            spans,
        };
        let mut masked = text.to_string();
        for (i, span) in protected.spans.iter().enumerate() {
            masked = masked.replace(span.as_str(), &protected.placeholder(i));
        }
        (masked, protected)
    }
}

/// Spans masked out of one input, in placeholder order
#[derive(Debug, Default)]
pub(crate) struct ProtectedSpans {
    marker: String,
    spans: Vec<String>,
}

impl ProtectedSpans {
    /// Put protected spans back in place of their placeholders
    ///
    /// Highest index first, so `...010` is never clobbered by `...01`.
    pub(crate) fn restore(&self, text: &str) -> String {
        let mut restored = text.to_string();
        for (i, span) in self.spans.iter().enumerate().rev() {
            restored = restored.replace(&self.placeholder(i), span);
        }
        restored
    }

    fn placeholder(&self, index: usize) -> String {
        format!("{}{index:03}", self.marker)
    }
}

fn build(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_sets_compile() {
        let basic = ProtectedPatterns::basic();
        assert_eq!(basic.len(), BASIC_PROTECTED_PATTERNS.len());
        let web = ProtectedPatterns::web();
        assert_eq!(web.len(), WEB_PROTECTED_PATTERNS.len());
    }

    #[test]
    fn test_invalid_pattern_is_skipped() {
        let patterns = ProtectedPatterns::compile(["(open", r"\d+"]);
        assert_eq!(patterns.len(), 1);
        assert!(ProtectedPatterns::try_compile(["(open"]).is_err());
    }

    #[test]
    fn test_protect_and_restore() {
        let patterns = ProtectedPatterns::web();
        let (masked, protected) = patterns.protect("mail me@example.com or ping @alice");
        // the handle pattern also sees "@example" inside the address
        assert_eq!(
            protected.spans,
            vec!["me@example.com", "@example", "@alice"]
        );
        assert_eq!(masked, "mail THISISPROTECTED000 or ping THISISPROTECTED002");
        assert_eq!(
            protected.restore(&masked),
            "mail me@example.com or ping @alice"
        );
    }

    #[test]
    fn test_protect_is_case_insensitive() {
        let patterns = ProtectedPatterns::compile(["hello"]);
        let (masked, protected) = patterns.protect("HeLLo there");
        assert_eq!(masked, "THISISPROTECTED000 there");
        assert_eq!(protected.spans, vec!["HeLLo"]);
    }

    #[test]
    fn test_placeholder_stem_avoids_input() {
        let patterns = ProtectedPatterns::compile([r"<\w+>"]);
        let text = "keep THISISPROTECTED000 and <tag>";
        let (masked, protected) = patterns.protect(text);
        assert_eq!(masked, "keep THISISPROTECTED000 and THISISPROTECTEDX000");
        assert_eq!(protected.restore(&masked), text);
    }

    #[test]
    fn test_restore_many_placeholders() {
        let protected = ProtectedSpans {
            marker: PLACEHOLDER.to_string(),
            spans: (0..12).map(|i| format!("<{i}>")).collect(),
        };
        let masked: Vec<String> = (0..12).map(|i| protected.placeholder(i)).collect();
        let restored = protected.restore(&masked.join(" "));
        assert_eq!(restored, protected.spans.join(" "));
    }

    #[test]
    fn test_empty_spans_restore_is_identity() {
        let text = "a THISISPROTECTED000 b";
        assert_eq!(ProtectedSpans::default().restore(text), text);
    }

    #[test]
    fn test_from_file_trims_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"  https?://\\S+  \n\n#\\w+\n").unwrap();
        let patterns = ProtectedPatterns::from_file(file.path()).unwrap();
        assert_eq!(patterns.len(), 2);
    }
}
