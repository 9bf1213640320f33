//! Named character classes used to build language-specific rules
//!
//! Every class is stored as a bracketed regex class expression so it can be
//! spliced into larger patterns (`[^{alnum}\s]`) as well as tested one
//! character at a time. The built-in classes come from Unicode properties;
//! [`CharacterClasses::from_dir`] reads the one-file-per-category format
//! where each file lists its member characters verbatim.

use crate::error::{Error, Result};
use crate::language::Language;
use regex::Regex;
use std::fmt;
use std::path::Path;

/// Virama and nukta signs of Indic scripts, which count as letters
const INDIC_MARKS: &str = r"\x{093C}\x{094D}\x{09BC}\x{09CD}\x{0A3C}\x{0A4D}\x{0ABC}\x{0ACD}\x{0B3C}\x{0B4D}\x{0BCD}\x{0C4D}\x{0CBC}\x{0CCD}\x{0D4D}";

const CJK_SCRIPTS: &str = r"\p{Han}\p{Hiragana}\p{Katakana}\p{Hangul}";

/// Code point ranges treated as CJK by the detokenizer
const CJK_RANGES: [(u32, u32); 8] = [
    (0x1100, 0x11FF),   // Hangul Jamo
    (0x2E80, 0xA4CF),   // CJK radicals through Yi
    (0xA840, 0xA87F),   // Phags-pa
    (0xAC00, 0xD7AF),   // Hangul syllables
    (0xF900, 0xFAFF),   // CJK compatibility ideographs
    (0xFE30, 0xFE4F),   // CJK compatibility forms
    (0xFF65, 0xFFDC),   // halfwidth Katakana and Hangul
    (0x20000, 0x2FFFF), // supplementary ideographic plane
];

/// True if `ch` falls in one of the CJK blocks
pub fn is_cjk(ch: char) -> bool {
    let cp = ch as u32;
    CJK_RANGES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&cp))
}

/// A set of characters usable both as a regex fragment and as a predicate
#[derive(Clone)]
pub struct CharClass {
    expr: String,
    matcher: Regex,
}

impl CharClass {
    /// Wrap a bracketed class expression such as `[\p{N}]`
    pub fn new(expr: impl Into<String>) -> Result<Self> {
        let expr = expr.into();
        let anchored = format!("^{expr}$");
        let matcher = Regex::new(&anchored).map_err(|source| Error::InvalidPattern {
            pattern: expr.clone(),
            source,
        })?;
        Ok(Self { expr, matcher })
    }

    /// Build a class from a literal list of member characters
    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Result<Self> {
        let mut expr = String::from("[");
        let mut empty = true;
        for ch in chars {
            if ch.is_whitespace() {
                continue;
            }
            if matches!(ch, '\\' | ']' | '[' | '^' | '-' | '&' | '~') {
                expr.push('\\');
            }
            expr.push(ch);
            empty = false;
        }
        if empty {
            return Err(Error::config_load("character class", "no members"));
        }
        expr.push(']');
        Self::new(expr)
    }

    /// Union of two classes
    pub fn union(&self, other: &CharClass) -> Result<Self> {
        Self::new(format!("[{}{}]", self.expr, other.expr))
    }

    /// The class as a regex fragment, brackets included
    pub fn expr(&self) -> &str {
        &self.expr
    }

    pub fn contains(&self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        self.matcher.is_match(ch.encode_utf8(&mut buf))
    }

    /// True if at least one character of `text` is a member
    pub fn any_in(&self, text: &str) -> bool {
        text.chars().any(|c| self.contains(c))
    }

    /// True if `text` is non-empty and every character is a member
    pub fn all_in(&self, text: &str) -> bool {
        !text.is_empty() && text.chars().all(|c| self.contains(c))
    }
}

impl fmt::Debug for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CharClass").field(&self.expr).finish()
    }
}

/// The character categories the rewrite rules are built from
///
/// Construct once and share through an `Arc`; every tokenizer,
/// detokenizer and truecaser only ever reads it.
#[derive(Debug, Clone)]
pub struct CharacterClasses {
    pub alnum: CharClass,
    pub alpha: CharClass,
    /// Numeric characters (`IsN`)
    pub numeric: CharClass,
    /// Currency symbols (`IsSc`)
    pub currency: CharClass,
    /// Other symbols (`IsSo`)
    pub symbol: CharClass,
    pub lower: CharClass,
    pub han: CharClass,
    pub hangul: CharClass,
    pub hiragana: CharClass,
    pub katakana: CharClass,
}

impl CharacterClasses {
    /// Classes derived from Unicode properties
    ///
    /// CJK scripts are left out of `alpha`/`alnum`; see
    /// [`CharacterClasses::letters_for`].
    pub fn unicode() -> Result<Self> {
        Ok(Self {
            alnum: CharClass::new(format!(
                r"[[\p{{Alphabetic}}\p{{Nd}}{INDIC_MARKS}]--[{CJK_SCRIPTS}]]"
            ))?,
            alpha: CharClass::new(format!(
                r"[[\p{{Alphabetic}}{INDIC_MARKS}]--[{CJK_SCRIPTS}]]"
            ))?,
            numeric: CharClass::new(r"[\p{N}]")?,
            currency: CharClass::new(r"[\p{Sc}]")?,
            symbol: CharClass::new(r"[\p{So}]")?,
            lower: CharClass::new(r"[\p{Lowercase}]")?,
            han: CharClass::new(r"[\p{Han}]")?,
            hangul: CharClass::new(r"[\p{Hangul}]")?,
            hiragana: CharClass::new(r"[\p{Hiragana}]")?,
            katakana: CharClass::new(r"[\p{Katakana}]")?,
        })
    }

    /// Load classes from a directory with one file per category
    ///
    /// Expected files: `IsAlnum.txt`, `IsAlpha.txt`, `IsN.txt`, `IsSc.txt`,
    /// `IsSo.txt`, `IsLower.txt`, `Han.txt`, `Hangul.txt`, `Hiragana.txt`
    /// and `Katakana.txt`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let load = |name: &str| -> Result<CharClass> {
            let path = dir.join(format!("{name}.txt"));
            let text = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
            CharClass::from_chars(text.trim().chars()).map_err(|e| {
                Error::config_load(format!("character class {name}"), e.to_string())
            })
        };

        Ok(Self {
            alnum: load("IsAlnum")?,
            alpha: load("IsAlpha")?,
            numeric: load("IsN")?,
            currency: load("IsSc")?,
            symbol: load("IsSo")?,
            lower: load("IsLower")?,
            han: load("Han")?,
            hangul: load("Hangul")?,
            hiragana: load("Hiragana")?,
            katakana: load("Katakana")?,
        })
    }

    /// Alphabetic and alphanumeric classes for `language`
    ///
    /// CJK languages have their scripts added so that padding rules treat
    /// them as ordinary letters.
    pub fn letters_for(&self, language: &Language) -> Result<(CharClass, CharClass)> {
        if !language.is_cjk() {
            return Ok((self.alpha.clone(), self.alnum.clone()));
        }
        let extra = match language {
            Language::Korean => vec![&self.hangul],
            Language::Chinese => vec![&self.han],
            Language::Japanese => vec![&self.hiragana, &self.katakana, &self.han],
            _ => vec![&self.hangul, &self.han, &self.hiragana, &self.katakana],
        };

        let mut alpha = self.alpha.clone();
        let mut alnum = self.alnum.clone();
        for class in extra {
            alpha = alpha.union(class)?;
            alnum = alnum.union(class)?;
        }
        Ok((alpha, alnum))
    }
}
