//! Punctuation normalizer
//!
//! Unifies quotes, dashes and no-break spaces before tokenization. The
//! substitution groups and their order depend on the language and on
//! whether the text is Penn Treebank style.

use crate::error::Result;
use crate::language::Language;
use crate::rules::{Rule, RuleTable};
use std::str::FromStr;

const NBSP: &str = "\u{a0}";

fn extra_whitespace() -> Result<Vec<Rule>> {
    Ok(vec![
        Rule::literal("\r", ""),
        Rule::literal("(", " ("),
        Rule::literal(")", ") "),
        Rule::regex(" +", " ")?,
        Rule::regex(r"\) ([.!:?;,])", ")${1}")?,
        Rule::literal("( ", "("),
        Rule::literal(" )", ")"),
        Rule::regex(r"(\d) %", "${1}%")?,
        Rule::literal(" :", ":"),
        Rule::literal(" ;", ";"),
    ])
}

fn unicode_if_not_penn() -> Vec<Rule> {
    vec![Rule::literal("`", "'"), Rule::literal("''", " \" ")]
}

fn unicode() -> Result<Vec<Rule>> {
    Ok(vec![
        Rule::literal("„", "\""),
        Rule::literal("“", "\""),
        Rule::literal("”", "\""),
        Rule::literal("–", "-"),
        Rule::literal("—", " - "),
        Rule::regex(" +", " ")?,
        Rule::literal("´", "'"),
        Rule::regex_case_insensitive("([a-z])‘([a-z])", "${1}'${2}")?,
        Rule::regex_case_insensitive("([a-z])’([a-z])", "${1}'${2}")?,
        Rule::literal("‘", "\""),
        Rule::literal("‚", "\""),
        Rule::literal("’", "\""),
        Rule::literal("''", "\""),
        Rule::literal("´´", "\""),
        Rule::literal("…", "..."),
    ])
}

fn french_quotes() -> Vec<Rule> {
    [
        format!("{NBSP}«{NBSP}"),
        format!("«{NBSP}"),
        "«".to_string(),
        format!("{NBSP}»{NBSP}"),
        format!("{NBSP}»"),
        "»".to_string(),
    ]
    .into_iter()
    .map(|quote| Rule::literal(quote, "\""))
    .collect()
}

fn pseudo_spaces() -> Result<Vec<Rule>> {
    Ok(vec![
        Rule::literal(format!("{NBSP}%"), "%"),
        Rule::literal(format!("nº{NBSP}"), "nº "),
        Rule::literal(format!("{NBSP}:"), ":"),
        Rule::literal(format!("{NBSP}ºC"), " ºC"),
        Rule::literal(format!("{NBSP}cm"), " cm"),
        Rule::literal(format!("{NBSP}?"), "?"),
        Rule::literal(format!("{NBSP}!"), "!"),
        Rule::literal(format!("{NBSP};"), ";"),
        Rule::literal(format!(",{NBSP}"), ","),
        Rule::regex(" +", " ")?,
    ])
}

fn quote_commas(language: &Language) -> Result<Vec<Rule>> {
    Ok(match language {
        Language::English => vec![Rule::regex(r#""([,.]+)"#, "${1}\"")?],
        Language::German | Language::Spanish | Language::French => vec![
            Rule::literal(",\"", "\","),
            // a period closing the sentence stays outside the quote
            Rule::regex(r#"(\.+)"(\s*[^<])"#, "\"${1}${2}")?,
        ],
        _ => Vec::new(),
    })
}

fn digit_groups(language: &Language) -> Result<Rule> {
    let separator = match language {
        Language::German | Language::Spanish | Language::Czech | Language::French => ",",
        _ => ".",
    };
    Rule::regex(
        &format!(r"(\d){NBSP}(\d)"),
        format!("${{1}}{separator}${{2}}"),
    )
}

fn unicode_punctuation() -> Result<RuleTable> {
    let mut table = RuleTable::from_patterns(&[(r"。\s*", ". "), (r"．\s*", ". ")])?;
    table.append(RuleTable::from_literals(&[
        ("，", ","),
        ("、", ","),
        ("”", "\""),
        ("“", "\""),
        ("∶", ":"),
        ("：", ":"),
        ("？", "?"),
        ("《", "\""),
        ("》", "\""),
        ("）", ")"),
        ("！", "!"),
        ("（", "("),
        ("；", ";"),
        ("」", "\""),
        ("「", "\""),
        ("０", "0"),
        ("１", "1"),
        ("２", "2"),
        ("３", "3"),
        ("４", "4"),
        ("５", "5"),
        ("６", "6"),
        ("７", "7"),
        ("８", "8"),
        ("９", "9"),
        ("～", "~"),
        ("’", "'"),
        ("…", "..."),
        ("━", "-"),
        ("〈", "<"),
        ("〉", ">"),
        ("【", "["),
        ("】", "]"),
        ("％", "%"),
    ]));
    Ok(table)
}

/// Moses punctuation normalizer
#[derive(Debug)]
pub struct PunctNormalizer {
    language: Language,
    pre: Option<RuleTable>,
    rules: RuleTable,
    strip_control: Option<Rule>,
}

impl PunctNormalizer {
    /// Normalizer with default switches for `language`
    pub fn new(language: &str) -> Result<Self> {
        Self::builder().language(language).build()
    }

    pub fn builder() -> PunctNormalizerBuilder {
        PunctNormalizerBuilder::default()
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    /// Normalize one line of text
    pub fn normalize(&self, text: &str) -> String {
        let mut text = match &self.pre {
            Some(pre) => pre.apply(text),
            None => text.to_string(),
        };
        text = self.rules.apply(&text);
        if let Some(strip) = &self.strip_control {
            text = strip.apply(&text).into_owned();
        }
        text.trim().to_string()
    }
}

/// Fluent builder for [`PunctNormalizer`]
#[derive(Debug, Clone)]
pub struct PunctNormalizerBuilder {
    language: Option<String>,
    penn: bool,
    norm_quote_commas: bool,
    norm_numbers: bool,
    pre_replace_unicode_punct: bool,
    post_remove_control_chars: bool,
}

impl Default for PunctNormalizerBuilder {
    fn default() -> Self {
        Self {
            language: None,
            penn: false,
            norm_quote_commas: true,
            norm_numbers: true,
            pre_replace_unicode_punct: false,
            post_remove_control_chars: false,
        }
    }
}

impl PunctNormalizerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.language = Some(code.into());
        self
    }

    /// Input already uses Penn Treebank quotes, so backticks and doubled
    /// apostrophes are left alone
    pub fn penn(mut self, penn: bool) -> Self {
        self.penn = penn;
        self
    }

    pub fn norm_quote_commas(mut self, enabled: bool) -> Self {
        self.norm_quote_commas = enabled;
        self
    }

    pub fn norm_numbers(mut self, enabled: bool) -> Self {
        self.norm_numbers = enabled;
        self
    }

    /// Map full-width punctuation and digits to ASCII first
    pub fn pre_replace_unicode_punct(mut self, enabled: bool) -> Self {
        self.pre_replace_unicode_punct = enabled;
        self
    }

    /// Drop `\p{C}` characters at the end
    pub fn post_remove_control_chars(mut self, enabled: bool) -> Self {
        self.post_remove_control_chars = enabled;
        self
    }

    pub fn build(self) -> Result<PunctNormalizer> {
        let language = match &self.language {
            Some(code) => Language::from_str(code)?,
            None => Language::default(),
        };

        let mut rules: RuleTable = extra_whitespace()?.into_iter().collect();
        if !self.penn {
            rules.append(unicode_if_not_penn().into_iter().collect());
        }
        rules.append(unicode()?.into_iter().collect());
        rules.append(french_quotes().into_iter().collect());
        rules.append(pseudo_spaces()?.into_iter().collect());
        if self.norm_quote_commas {
            rules.append(quote_commas(&language)?.into_iter().collect());
        }
        if self.norm_numbers {
            rules.push(digit_groups(&language)?);
        }

        let pre = if self.pre_replace_unicode_punct {
            Some(unicode_punctuation()?)
        } else {
            None
        };
        let strip_control = if self.post_remove_control_chars {
            Some(Rule::regex(r"\p{C}", "")?)
        } else {
            None
        };

        tracing::debug!(
            language = language.code(),
            penn = self.penn,
            rules = rules.len(),
            "built punctuation normalizer"
        );

        Ok(PunctNormalizer {
            language,
            pre,
            rules,
            strip_control,
        })
    }
}
