//! Language codes and per-language lookup data
//!
//! Most rewrite rules only care about a handful of languages; every other
//! code falls through to the generic branches, so unknown codes are kept
//! as [`Language::Other`] instead of being rejected.

pub(crate) mod loader;
pub mod prefixes;

pub use loader::available_prefix_languages;
pub use prefixes::NonBreakingPrefixes;

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Language selector for rule construction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    French,
    Italian,
    Irish,
    Czech,
    Finnish,
    German,
    Spanish,
    Portuguese,
    Dutch,
    Chinese,
    Japanese,
    Korean,
    /// Combined Chinese/Japanese/Korean pseudo-language
    Cjk,
    /// Any other code; handled by the generic rule branches
    Other(String),
}

impl Language {
    /// Create a Language from a language code
    ///
    /// Never fails: unrecognised codes become [`Language::Other`].
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "en" | "eng" | "english" => Language::English,
            "fr" | "fra" | "french" => Language::French,
            "it" | "ita" | "italian" => Language::Italian,
            "ga" | "gle" | "irish" => Language::Irish,
            "cs" | "cz" | "ces" | "czech" => Language::Czech,
            "fi" | "fin" | "finnish" => Language::Finnish,
            "de" | "deu" | "german" => Language::German,
            "es" | "spa" | "spanish" => Language::Spanish,
            "pt" | "por" | "portuguese" => Language::Portuguese,
            "nl" | "nld" | "dutch" => Language::Dutch,
            "zh" | "zho" | "chinese" => Language::Chinese,
            "ja" | "jpn" | "japanese" => Language::Japanese,
            "ko" | "kor" | "korean" => Language::Korean,
            "cjk" => Language::Cjk,
            other => Language::Other(other.to_string()),
        }
    }

    /// Get the language code
    pub fn code(&self) -> &str {
        match self {
            Language::English => "en",
            Language::French => "fr",
            Language::Italian => "it",
            Language::Irish => "ga",
            Language::Czech => "cs",
            Language::Finnish => "fi",
            Language::German => "de",
            Language::Spanish => "es",
            Language::Portuguese => "pt",
            Language::Dutch => "nl",
            Language::Chinese => "zh",
            Language::Japanese => "ja",
            Language::Korean => "ko",
            Language::Cjk => "cjk",
            Language::Other(code) => code,
        }
    }

    /// Get the full language name
    pub fn name(&self) -> &str {
        match self {
            Language::English => "English",
            Language::French => "French",
            Language::Italian => "Italian",
            Language::Irish => "Irish",
            Language::Czech => "Czech",
            Language::Finnish => "Finnish",
            Language::German => "German",
            Language::Spanish => "Spanish",
            Language::Portuguese => "Portuguese",
            Language::Dutch => "Dutch",
            Language::Chinese => "Chinese",
            Language::Japanese => "Japanese",
            Language::Korean => "Korean",
            Language::Cjk => "Chinese/Japanese/Korean",
            Language::Other(code) => code,
        }
    }

    /// Languages whose letter classes are extended with CJK scripts
    pub fn is_cjk(&self) -> bool {
        matches!(
            self,
            Language::Chinese | Language::Japanese | Language::Korean | Language::Cjk
        )
    }

    /// All languages with dedicated handling somewhere in the engine
    pub fn known() -> &'static [Language] {
        &[
            Language::English,
            Language::French,
            Language::Italian,
            Language::Irish,
            Language::Czech,
            Language::Finnish,
            Language::German,
            Language::Spanish,
            Language::Portuguese,
            Language::Dutch,
            Language::Chinese,
            Language::Japanese,
            Language::Korean,
            Language::Cjk,
        ]
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(Error::InvalidLanguage(s.to_string()));
        }
        Ok(Language::from_code(code))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_aliases() {
        assert_eq!(Language::from_code("en"), Language::English);
        assert_eq!(Language::from_code("CZ"), Language::Czech);
        assert_eq!(Language::from_code("cs"), Language::Czech);
        assert_eq!(Language::from_code("cjk"), Language::Cjk);
        assert_eq!(
            Language::from_code("hu"),
            Language::Other("hu".to_string())
        );
    }

    #[test]
    fn test_code_round_trip() {
        for lang in Language::known() {
            assert_eq!(&Language::from_code(lang.code()), lang);
        }
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        assert!("".parse::<Language>().is_err());
        assert!("e1".parse::<Language>().is_err());
        assert_eq!("fr".parse::<Language>().unwrap(), Language::French);
    }

    #[test]
    fn test_cjk_membership() {
        assert!(Language::Japanese.is_cjk());
        assert!(Language::Cjk.is_cjk());
        assert!(!Language::English.is_cjk());
    }
}
