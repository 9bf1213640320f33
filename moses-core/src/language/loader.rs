//! Embedded non-breaking-prefix data
//!
//! Parsed once on first access and shared for the lifetime of the process.

use super::prefixes::NonBreakingPrefixes;
use std::collections::HashMap;
use std::sync::OnceLock;

static EMBEDDED: OnceLock<HashMap<&'static str, NonBreakingPrefixes>> = OnceLock::new();

macro_rules! embed_prefixes {
    ($code:expr) => {
        (
            $code,
            include_str!(concat!(
                "../../data/nonbreaking_prefixes/nonbreaking_prefix.",
                $code
            )),
        )
    };
}

fn load_embedded() -> HashMap<&'static str, NonBreakingPrefixes> {
    let sources = [
        embed_prefixes!("cs"),
        embed_prefixes!("de"),
        embed_prefixes!("en"),
        embed_prefixes!("es"),
        embed_prefixes!("fi"),
        embed_prefixes!("fr"),
        embed_prefixes!("ga"),
        embed_prefixes!("it"),
        embed_prefixes!("nl"),
        embed_prefixes!("pt"),
        embed_prefixes!("zh"),
    ];

    let mut map = HashMap::new();
    for (code, text) in sources {
        match NonBreakingPrefixes::parse(text) {
            Ok(prefixes) => {
                map.insert(code, prefixes);
            }
            Err(e) => {
                tracing::warn!("Failed to parse embedded prefixes for {code}: {e}");
            }
        }
    }
    map
}

/// Look up the embedded prefix list for a language code
pub(crate) fn embedded_prefixes(code: &str) -> Option<&'static NonBreakingPrefixes> {
    EMBEDDED.get_or_init(load_embedded).get(code)
}

/// Language codes that ship with an embedded prefix list
pub fn available_prefix_languages() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = EMBEDDED
        .get_or_init(load_embedded)
        .keys()
        .copied()
        .collect();
    codes.sort_unstable();
    codes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_embedded_list_parses() {
        assert_eq!(available_prefix_languages().len(), 11);
    }

    #[test]
    fn test_numeric_only_entries() {
        let expected: [(&str, &[&str]); 5] = [
            ("en", &["No", "Art", "pp"]),
            ("it", &["No", "Art", "pp"]),
            ("pt", &["No", "Art", "p", "pp"]),
            ("zh", &["No", "Nr"]),
            ("ga", &["lch", "lgh", "uimh"]),
        ];
        for (code, prefixes) in expected {
            let data = embedded_prefixes(code).expect("embedded language");
            let mut actual: Vec<&str> = data.numeric_only().collect();
            let mut wanted = prefixes.to_vec();
            actual.sort_unstable();
            wanted.sort_unstable();
            assert_eq!(actual, wanted, "numeric-only prefixes for {code}");
        }
    }

    #[test]
    fn test_languages_without_numeric_only() {
        for code in ["de", "fr", "fi", "es", "cs"] {
            let data = embedded_prefixes(code).expect("embedded language");
            assert_eq!(data.numeric_only().count(), 0, "{code}");
        }
    }

    #[test]
    fn test_unknown_code() {
        assert!(embedded_prefixes("xx").is_none());
    }
}
