//! Moses detokenizer
//!
//! Rebuilds running text from a token sequence. Each token decides whether
//! it attaches to the text before it and whether the next token may attach
//! to it; the first matching case wins, so the order of checks in
//! [`Detokenizer::detokenize_with`] matters.

use crate::charclass::{is_cjk, CharacterClasses};
use crate::error::{Error, Result};
use crate::escape::unescape_xml;
use crate::language::Language;
use regex::Regex;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

const FINNISH_CASE: &str = "N|n|A|a|Ä|ä|ssa|Ssa|ssä|Ssä|sta|stä|Sta|Stä|hun|Hun|hyn|Hyn|han|Han|hän|Hän|hön|Hön|un|Un|yn|Yn|an|An|än|Än|ön|Ön|seen|Seen|lla|Lla|llä|Llä|lta|Lta|ltä|Ltä|lle|Lle|ksi|Ksi|kse|Kse|tta|Tta|ine|Ine";
const FINNISH_POSSESSIVE: &str = "ni|si|mme|nne|nsa";
const FINNISH_CLITIC: &str = "ko|kö|han|hän|pa|pä|kaan|kään|kin";

#[derive(Debug, Clone)]
pub struct DetokenizeOptions {
    /// Turn XML entities back into characters before joining
    pub unescape: bool,
}

impl Default for DetokenizeOptions {
    fn default() -> Self {
        Self { unescape: true }
    }
}

#[derive(Debug)]
struct TokenPatterns {
    currency_or_open: Regex,
    closing: Regex,
    french_spaced: Regex,
    contraction: Regex,
    digits: Regex,
    decimal_sep: Regex,
    elided: Regex,
    starts_alpha: Regex,
    ends_alpha: Regex,
    dash: Regex,
    dash_compound: Regex,
    quote: Regex,
    curly_quote: Regex,
    finnish_suffix: Regex,
}

impl TokenPatterns {
    fn build(classes: &CharacterClasses) -> Result<Self> {
        let a = classes.alpha.expr();
        let sc = classes.currency.expr();
        Ok(Self {
            currency_or_open: re(&format!(r"^[{sc}(\[{{¿¡]+$"))?,
            closing: re(r"^[,.?!:;\\%}\])]+$")?,
            french_spaced: re(r"^[?!:;\\%]$")?,
            contraction: re(&format!("^'{a}"))?,
            digits: re("^[0-9]+$")?,
            decimal_sep: re("^[.,]$")?,
            elided: re(&format!("{a}'$"))?,
            starts_alpha: re(&format!("^{a}"))?,
            ends_alpha: re(&format!("{a}$"))?,
            dash: re("^[-–]$")?,
            dash_compound: re("(?i)^li$|^mail.*")?,
            quote: re("^['\"„“`]+$")?,
            curly_quote: re("^[„“”]+$")?,
            finnish_suffix: re(&format!(
                "^({FINNISH_CASE})({FINNISH_POSSESSIVE})?({FINNISH_CLITIC})?$"
            ))?,
        })
    }
}

fn re(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Language-specific detokenizer
#[derive(Debug)]
pub struct Detokenizer {
    language: Language,
    patterns: TokenPatterns,
}

impl Detokenizer {
    pub fn new(language: &str) -> Result<Self> {
        Self::builder().language(language).build()
    }

    pub fn builder() -> DetokenizerBuilder {
        DetokenizerBuilder::default()
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    /// Join tokens back into text, unescaping entities
    pub fn detokenize<S: AsRef<str>>(&self, tokens: &[S]) -> String {
        self.detokenize_with(tokens, &DetokenizeOptions::default())
    }

    pub fn detokenize_with<S: AsRef<str>>(
        &self,
        tokens: &[S],
        options: &DetokenizeOptions,
    ) -> String {
        let joined: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();
        let mut text = format!(" {} ", joined.join(" ")).replace(" @-@ ", "-");
        if options.unescape {
            text = unescape_xml(&text);
        }

        let p = &self.patterns;
        let lang = &self.language;
        let words: Vec<&str> = text.split_whitespace().collect();
        let mut quote_counts: HashMap<&str, usize> = HashMap::new();
        let mut prepend = " ";
        let mut out = String::with_capacity(text.len());

        let mut i = 0;
        while i < words.len() {
            let token = words[i];
            let prev = i.checked_sub(1).map(|j| words[j]);
            let next = words.get(i + 1).copied();

            let first = token.chars().next().unwrap_or(' ');
            if is_cjk(first) && *lang != Language::Korean {
                let after_cjk = prev
                    .and_then(|w| w.chars().last())
                    .is_some_and(is_cjk);
                if !after_cjk {
                    out.push_str(prepend);
                }
                out.push_str(token);
                prepend = " ";
            } else if p.currency_or_open.is_match(token) {
                out.push_str(prepend);
                out.push_str(token);
                prepend = "";
            } else if p.closing.is_match(token) {
                if *lang == Language::French && p.french_spaced.is_match(token) {
                    out.push(' ');
                }
                out.push_str(token);
                prepend = " ";
            } else if *lang == Language::English && i > 0 && p.contraction.is_match(token) {
                out.push_str(token);
                prepend = " ";
            } else if *lang == Language::Czech
                && i > 1
                && p.digits.is_match(words[i - 2])
                && p.decimal_sep.is_match(words[i - 1])
                && p.digits.is_match(token)
            {
                out.push_str(token);
                prepend = " ";
            } else if matches!(lang, Language::French | Language::Italian | Language::Irish)
                && p.elided.is_match(token)
                && next.is_some_and(|w| p.starts_alpha.is_match(w))
            {
                out.push_str(prepend);
                out.push_str(token);
                prepend = "";
            } else if *lang == Language::Czech
                && i + 2 < words.len()
                && p.ends_alpha.is_match(token)
                && p.dash.is_match(words[i + 1])
                && p.dash_compound.is_match(words[i + 2])
            {
                out.push_str(prepend);
                out.push_str(token);
                out.push_str(words[i + 1]);
                prepend = "";
                i += 1;
            } else if p.quote.is_match(token) {
                let normalized = if p.curly_quote.is_match(token) { "\"" } else { token };
                let count = quote_counts.entry(normalized).or_insert(0);
                if *lang == Language::Czech {
                    match token {
                        "„" => *count = 0,
                        "“" => *count = 1,
                        _ => {}
                    }
                }

                if *count % 2 == 0 {
                    let possessive = *lang == Language::English
                        && token == "'"
                        && prev.is_some_and(|w| w.ends_with('s'));
                    if possessive {
                        out.push_str(token);
                        prepend = " ";
                    } else {
                        out.push_str(prepend);
                        out.push_str(token);
                        prepend = "";
                        *count += 1;
                    }
                } else {
                    out.push_str(token);
                    prepend = " ";
                    *count += 1;
                }
            } else if *lang == Language::Finnish
                && prev.is_some_and(|w| w.ends_with(':'))
                && p.finnish_suffix.is_match(token)
            {
                out.push_str(token);
                prepend = " ";
            } else {
                out.push_str(prepend);
                out.push_str(token);
                prepend = " ";
            }
            i += 1;
        }

        collapse_spaces(&out)
    }
}

fn collapse_spaces(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_space = false;
    for ch in text.chars() {
        if ch == ' ' {
            if !last_space {
                out.push(' ');
            }
            last_space = true;
        } else {
            out.push(ch);
            last_space = false;
        }
    }
    out.trim().to_string()
}

/// Fluent builder for [`Detokenizer`]
#[derive(Debug, Default)]
pub struct DetokenizerBuilder {
    language: Option<String>,
    classes: Option<Arc<CharacterClasses>>,
}

impl DetokenizerBuilder {
    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.language = Some(code.into());
        self
    }

    pub fn character_classes(mut self, classes: Arc<CharacterClasses>) -> Self {
        self.classes = Some(classes);
        self
    }

    pub fn build(self) -> Result<Detokenizer> {
        let language = match self.language {
            Some(code) => Language::from_str(&code)?,
            None => Language::default(),
        };
        let classes = match self.classes {
            Some(classes) => classes,
            None => Arc::new(CharacterClasses::unicode()?),
        };
        let patterns = TokenPatterns::build(&classes)?;
        Ok(Detokenizer { language, patterns })
    }
}
