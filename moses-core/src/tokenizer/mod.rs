//! Moses tokenizer
//!
//! Text goes through a fixed, order-sensitive chain of rewrites:
//! whitespace cleanup, protected-span masking, punctuation padding,
//! optional dash splitting, multi-dot masking, comma separation,
//! language-specific apostrophe handling, sentence-final period
//! resolution, then unmasking and optional XML escaping.
//!
//! # Example
//!
//! ```rust
//! use moses_core::{TokenizeOptions, Tokenizer};
//!
//! let tokenizer = Tokenizer::new("en").unwrap();
//! let tokens = tokenizer.tokenize("abc def.", &TokenizeOptions::default());
//! assert_eq!(tokens, vec!["abc", "def", "."]);
//! ```

mod marker;
mod nonbreaking;
mod penn;
pub mod protect;

pub use protect::{ProtectedPatterns, BASIC_PROTECTED_PATTERNS, WEB_PROTECTED_PATTERNS};

use crate::charclass::{CharClass, CharacterClasses};
use crate::error::{Error, Result};
use crate::escape::{escape_xml, escape_xml_penn};
use crate::language::{Language, NonBreakingPrefixes};
use crate::rules::{Rule, RuleTable};
use marker::unique_marker;
use nonbreaking::PeriodResolver;
use penn::PennRules;
use protect::ProtectedSpans;
use regex::{Captures, Regex};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

/// Per-call tokenizer switches
#[derive(Debug, Clone)]
pub struct TokenizeOptions {
    /// Split `foo-bar` into `foo @-@ bar`
    pub aggressive_dash_splits: bool,
    /// Escape `& | < > ' " [ ]` as XML entities
    pub escape: bool,
    pub protected_patterns: ProtectedPatterns,
}

impl Default for TokenizeOptions {
    fn default() -> Self {
        Self {
            aggressive_dash_splits: false,
            escape: true,
            protected_patterns: ProtectedPatterns::none(),
        }
    }
}

impl TokenizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn aggressive_dash_splits(mut self, enabled: bool) -> Self {
        self.aggressive_dash_splits = enabled;
        self
    }

    pub fn escape(mut self, enabled: bool) -> Self {
        self.escape = enabled;
        self
    }

    pub fn protected_patterns(mut self, patterns: ProtectedPatterns) -> Self {
        self.protected_patterns = patterns;
        self
    }
}

/// Rewrite tables for one language, built once at construction
#[derive(Debug)]
struct MosesRules {
    clean: RuleTable,
    pad: Rule,
    dash_split: Rule,
    multidots: Regex,
    commas: RuleTable,
    apostrophes: RuleTable,
    squeeze: Rule,
    trailing_quote: Rule,
}

impl MosesRules {
    fn build(
        language: &Language,
        classes: &CharacterClasses,
        alpha: &CharClass,
        alnum: &CharClass,
    ) -> Result<Self> {
        let a = alpha.expr();
        let an = alnum.expr();
        let n = classes.numeric.expr();

        let apostrophes = match language {
            Language::English => vec![
                Rule::regex(&format!("([^{a}])[']([^{a}])"), "${1} ' ${2}")?,
                Rule::regex(&format!("([^{a}{n}])[']({a})"), "${1} ' ${2}")?,
                Rule::regex(&format!("({a})[']([^{a}])"), "${1} ' ${2}")?,
                Rule::regex(&format!("({a})[']({a})"), "${1} '${2}")?,
                Rule::regex(&format!("({n})[']([s])"), "${1} '${2}")?,
            ],
            Language::French | Language::Italian => vec![
                Rule::regex(&format!("([^{a}])[']([^{a}])"), "${1} ' ${2}")?,
                Rule::regex(&format!("([^{a}])[']({a})"), "${1} ' ${2}")?,
                Rule::regex(&format!("({a})[']([^{a}])"), "${1} ' ${2}")?,
                Rule::regex(&format!("({a})[']({a})"), "${1}' ${2}")?,
            ],
            _ => vec![Rule::literal("'", " ' ")],
        };

        Ok(Self {
            clean: RuleTable::from_patterns(&[(r"\s+", " "), (r"[\x00-\x1f]", "")])?,
            pad: Rule::regex(&format!(r"([^{an}\s.'`,\-])"), " ${1} ")?,
            dash_split: Rule::regex(&format!("({an})-({an})"), "${1} @-@ ${2}")?.repeated(),
            multidots: compile(MULTIDOTS)?,
            commas: [
                Rule::regex(&format!("([^{n}])[,]"), "${1} , ")?,
                Rule::regex(&format!("[,]([^{n}])"), " , ${1}")?,
                Rule::regex(&format!("({n})[,]$"), "${1} , ")?,
            ]
            .into_iter()
            .collect(),
            apostrophes: apostrophes.into_iter().collect(),
            squeeze: Rule::regex(r"\s+", " ")?,
            trailing_quote: Rule::regex(r"\.' ?$", " . ' ")?,
        })
    }

    /// Replace each run of `k >= 2` dots with `k - 1` copies of `DOT`
    /// followed by `marker`
    fn mask_multidots(&self, text: &str, marker: &str) -> String {
        self.multidots
            .replace_all(text, |caps: &Captures<'_>| {
                format!(" {}{marker} ", "DOT".repeat(caps[0].len() - 1))
            })
            .into_owned()
    }
}

const MULTIDOTS: &str = r"\.{2,}";
const MULTIDOT_MARKER: &str = "DOTMULTI";

fn unmask_multidots(text: &str, marker: &str) -> String {
    let dotted = format!("DOT{marker}");
    let undotted = format!("{marker}.");
    let mut text = text.to_string();
    while text.contains(dotted.as_str()) {
        text = text.replace(dotted.as_str(), &undotted);
    }
    text.replace(marker, ".")
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Language-specific tokenizer
#[derive(Debug)]
pub struct Tokenizer {
    language: Language,
    classes: Arc<CharacterClasses>,
    alpha: CharClass,
    prefixes: NonBreakingPrefixes,
    rules: MosesRules,
    penn: PennRules,
}

impl Tokenizer {
    /// Tokenizer with the built-in data for `language`
    pub fn new(language: &str) -> Result<Self> {
        Self::builder().language(language).build()
    }

    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::default()
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    pub fn prefixes(&self) -> &NonBreakingPrefixes {
        &self.prefixes
    }

    /// Tokenize into a token list
    pub fn tokenize(&self, text: &str, options: &TokenizeOptions) -> Vec<String> {
        self.tokenize_to_string(text, options)
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    /// Tokenize into a single space-joined string
    pub fn tokenize_to_string(&self, text: &str, options: &TokenizeOptions) -> String {
        let rules = &self.rules;
        let cleaned = rules.clean.apply(text);

        let (masked, protected) = if options.protected_patterns.is_empty() {
            (cleaned.clone(), ProtectedSpans::default())
        } else {
            options.protected_patterns.protect(&cleaned)
        };
        let dots = unique_marker(MULTIDOT_MARKER, &[&cleaned, &masked]);

        let mut text = rules.pad.apply(masked.trim()).into_owned();
        if options.aggressive_dash_splits {
            text = rules.dash_split.apply(&text).into_owned();
        }

        let text = rules.mask_multidots(&text, &dots);
        let text = rules.commas.apply(&text);
        let text = rules.apostrophes.apply(&text);
        let text = self.period_resolver().resolve(&text);

        let text = rules.squeeze.apply(&text);
        let text = rules.trailing_quote.apply(text.trim());
        let text = protected.restore(&text);
        let text = unmask_multidots(&text, &dots);

        let text = if options.escape { escape_xml(&text) } else { text };
        text.trim().to_string()
    }

    /// Penn Treebank style tokenization
    pub fn penn_tokenize(&self, text: &str) -> Vec<String> {
        self.penn_tokenize_to_string(text)
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    pub fn penn_tokenize_to_string(&self, text: &str) -> String {
        let ellipsis = unique_marker(penn::ELLIPSIS_MARKER, &[text]);
        let text = self.penn.quotes.apply(text);
        let text = text.replace("...", &format!(" {ellipsis} "));
        let text = self.penn.splits.apply(&text);
        let text = self.period_resolver().resolve(&text);
        let text = text.replace(ellipsis.as_str(), "...");
        let text = self.penn.cleanup.apply(&text);
        escape_xml_penn(&text)
    }

    fn period_resolver(&self) -> PeriodResolver<'_> {
        PeriodResolver {
            prefixes: &self.prefixes,
            alpha: &self.alpha,
            lower: &self.classes.lower,
        }
    }
}

/// Fluent builder for [`Tokenizer`]
#[derive(Debug, Default)]
pub struct TokenizerBuilder {
    language: Option<String>,
    classes: Option<Arc<CharacterClasses>>,
    custom_prefixes: Option<NonBreakingPrefixes>,
    custom_prefix_file: Option<PathBuf>,
}

impl TokenizerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the language by code
    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.language = Some(code.into());
        self
    }

    /// Share an already built set of character classes
    pub fn character_classes(mut self, classes: Arc<CharacterClasses>) -> Self {
        self.classes = Some(classes);
        self
    }

    /// Extra prefixes added to the language's own list
    pub fn custom_prefixes(mut self, prefixes: NonBreakingPrefixes) -> Self {
        self.custom_prefixes = Some(prefixes);
        self
    }

    /// Extra prefixes read from a file at build time
    pub fn custom_prefix_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.custom_prefix_file = Some(path.into());
        self
    }

    pub fn build(self) -> Result<Tokenizer> {
        let language = match self.language {
            Some(code) => Language::from_str(&code)?,
            None => Language::default(),
        };
        let classes = match self.classes {
            Some(classes) => classes,
            None => Arc::new(CharacterClasses::unicode()?),
        };

        let mut prefixes = NonBreakingPrefixes::for_language(&language);
        if let Some(custom) = &self.custom_prefixes {
            prefixes.extend(custom);
        }
        if let Some(path) = &self.custom_prefix_file {
            prefixes.extend(&NonBreakingPrefixes::from_file(path)?);
        }

        let (alpha, alnum) = classes.letters_for(&language)?;
        let rules = MosesRules::build(&language, &classes, &alpha, &alnum)?;
        let penn = PennRules::build(&classes, &alnum)?;

        tracing::debug!(
            language = language.code(),
            prefixes = prefixes.len(),
            "built tokenizer"
        );

        Ok(Tokenizer {
            language,
            classes,
            alpha,
            prefixes,
            rules,
            penn,
        })
    }
}
