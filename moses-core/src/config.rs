//! TOML configuration for the whole pipeline
//!
//! Every field has a default matching Moses' own scripts, so an empty file
//! is a valid configuration.

use crate::error::{Error, Result};
use crate::language::Language;
use crate::normalizer::PunctNormalizerBuilder;
use crate::tokenizer::{ProtectedPatterns, TokenizeOptions, TokenizerBuilder};
use crate::detokenizer::DetokenizeOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

fn default_language() -> String {
    "en".to_string()
}

fn enabled() -> bool {
    true
}

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MosesConfig {
    #[serde(default)]
    pub tokenizer: TokenizerConfig,

    #[serde(default)]
    pub detokenizer: DetokenizerConfig,

    #[serde(default)]
    pub truecaser: TruecaserConfig,

    #[serde(default)]
    pub normalizer: NormalizerConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TokenizerConfig {
    #[serde(default = "default_language")]
    pub language: String,

    #[serde(default)]
    pub aggressive_dash_splits: bool,

    #[serde(default = "enabled")]
    pub escape: bool,

    /// Use the Penn Treebank rules instead of the Moses ones
    #[serde(default)]
    pub penn: bool,

    /// Regexes whose matches are never split
    #[serde(default)]
    pub protected_patterns: Vec<String>,

    /// File with one protected regex per line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protected_pattern_file: Option<PathBuf>,

    /// Extra non-breaking prefixes in the Moses list format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_prefix_file: Option<PathBuf>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            aggressive_dash_splits: false,
            escape: true,
            penn: false,
            protected_patterns: Vec::new(),
            protected_pattern_file: None,
            custom_prefix_file: None,
        }
    }
}

impl TokenizerConfig {
    pub fn builder(&self) -> TokenizerBuilder {
        let mut builder = TokenizerBuilder::new().language(&self.language);
        if let Some(path) = &self.custom_prefix_file {
            builder = builder.custom_prefix_file(path);
        }
        builder
    }

    /// Per-call options, reading the pattern file if one is configured
    pub fn options(&self) -> Result<TokenizeOptions> {
        let mut patterns = ProtectedPatterns::compile(&self.protected_patterns);
        if let Some(path) = &self.protected_pattern_file {
            patterns.extend(ProtectedPatterns::from_file(path)?);
        }
        Ok(TokenizeOptions::new()
            .aggressive_dash_splits(self.aggressive_dash_splits)
            .escape(self.escape)
            .protected_patterns(patterns))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DetokenizerConfig {
    #[serde(default = "default_language")]
    pub language: String,

    #[serde(default = "enabled")]
    pub unescape: bool,
}

impl Default for DetokenizerConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            unescape: true,
        }
    }
}

impl DetokenizerConfig {
    pub fn options(&self) -> DetokenizeOptions {
        DetokenizeOptions {
            unescape: self.unescape,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TruecaserConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<PathBuf>,

    #[serde(default)]
    pub is_asr: bool,

    /// Count lowercase sentence-initial words during training
    #[serde(default)]
    pub possibly_use_first_token: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NormalizerConfig {
    #[serde(default = "default_language")]
    pub language: String,

    #[serde(default)]
    pub penn: bool,

    #[serde(default = "enabled")]
    pub norm_quote_commas: bool,

    #[serde(default = "enabled")]
    pub norm_numbers: bool,

    #[serde(default)]
    pub pre_replace_unicode_punct: bool,

    #[serde(default)]
    pub post_remove_control_chars: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            penn: false,
            norm_quote_commas: true,
            norm_numbers: true,
            pre_replace_unicode_punct: false,
            post_remove_control_chars: false,
        }
    }
}

impl NormalizerConfig {
    pub fn builder(&self) -> PunctNormalizerBuilder {
        PunctNormalizerBuilder::new()
            .language(&self.language)
            .penn(self.penn)
            .norm_quote_commas(self.norm_quote_commas)
            .norm_numbers(self.norm_numbers)
            .pre_replace_unicode_punct(self.pre_replace_unicode_punct)
            .post_remove_control_chars(self.post_remove_control_chars)
    }
}

impl MosesConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::ConfigLoad { reason, .. } => {
                Error::config_load(path.display().to_string(), reason)
            }
            other => other,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: MosesConfig = toml::from_str(content)
            .map_err(|e| Error::config_load("configuration", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config_load("configuration", e.to_string()))
    }

    /// Reject language codes that could never be resolved
    pub fn validate(&self) -> Result<()> {
        for code in [
            &self.tokenizer.language,
            &self.detokenizer.language,
            &self.normalizer.language,
        ] {
            Language::from_str(code)?;
        }
        Ok(())
    }
}
