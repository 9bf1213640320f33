//! Truecasing and detruecasing
//!
//! The truecaser learns, per lowercase word, which surface casing is most
//! frequent away from sentence starts, then restores that casing in new
//! text. The detruecaser is a fixed heuristic that capitalizes sentence
//! starts, and every content word in headline mode.

mod detruecase;
mod model;
mod split;
mod train;

pub use detruecase::Detruecaser;
pub use model::{CasingModel, CasingStats};
pub use split::split_xml;

use crate::error::{Error, Result};
use regex::Regex;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Tokens after which a new sentence starts
pub const SENT_END: [&str; 4] = [".", ":", "?", "!"];

/// Tokens that may precede the first word of a sentence
pub const DELAYED_SENT_START: [&str; 8] = [
    "(", "[", "\"", "'", "&apos;", "&quot;", "&#91;", "&#93;",
];

static XML_TAG: OnceLock<Regex> = OnceLock::new();

pub(crate) fn static_regex(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    // only ever called with literal patterns
    cell.get_or_init(|| Regex::new(pattern).expect("constant pattern compiles"))
}

pub(crate) fn is_xml_tag(token: &str) -> bool {
    static_regex(&XML_TAG, r"<\S[^>]*>").is_match(token)
}

/// Frequency-based truecaser
#[derive(Debug, Clone, Default)]
pub struct Truecaser {
    model: Option<CasingModel>,
    is_asr: bool,
}

impl Truecaser {
    /// Truecaser without a model; train or load one before use
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> TruecaserBuilder {
        TruecaserBuilder::default()
    }

    /// Load a model file
    pub fn load(path: impl AsRef<Path>, is_asr: bool) -> Result<Self> {
        Ok(Self {
            model: Some(CasingModel::load(path, is_asr)?),
            is_asr,
        })
    }

    pub fn from_model(model: CasingModel, is_asr: bool) -> Self {
        Self {
            model: Some(model),
            is_asr,
        }
    }

    /// ASR input carries no casing, so it is lowercased before lookup
    pub fn is_asr(&self) -> bool {
        self.is_asr
    }

    pub fn model(&self) -> Option<&CasingModel> {
        self.model.as_ref()
    }

    /// Train from tokenized sentences, replacing any current model
    pub fn train<D, S, T>(&mut self, documents: D, possibly_use_first_token: bool) -> &CasingModel
    where
        D: IntoIterator<Item = S>,
        S: AsRef<[T]>,
        T: AsRef<str>,
    {
        let mut stats = CasingStats::new();
        train::accumulate(&mut stats, documents, possibly_use_first_token);
        self.install(stats)
    }

    /// Train from a file with one whitespace-tokenized sentence per line
    pub fn train_from_file(
        &mut self,
        path: impl AsRef<Path>,
        possibly_use_first_token: bool,
    ) -> Result<&CasingModel> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| Error::io(path, e))?;

        let mut stats = CasingStats::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| Error::io(path, e))?;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            train::accumulate(&mut stats, [tokens], possibly_use_first_token);
        }
        Ok(self.install(stats))
    }

    fn install(&mut self, stats: CasingStats) -> &CasingModel {
        tracing::debug!(
            lowercase_forms = stats.len(),
            asr = self.is_asr,
            "trained truecasing model"
        );
        self.model.insert(CasingModel::from_stats(stats, self.is_asr))
    }

    pub fn save_model(&self, path: impl AsRef<Path>) -> Result<()> {
        self.model.as_ref().ok_or(Error::ModelAbsent)?.save(path)
    }

    /// Restore casing in one tokenized line
    pub fn truecase(&self, text: &str) -> Result<Vec<String>> {
        let model = self.model.as_ref().ok_or(Error::ModelAbsent)?;
        let mut is_first_word = true;
        let mut cased = Vec::new();

        for token in split_xml(text)? {
            if is_xml_tag(&token) {
                cased.push(token);
                continue;
            }

            let (word, factors) = match token.char_indices().find(|&(i, c)| c == '|' && i > 0) {
                Some((i, _)) => token.split_at(i),
                None => (token.as_str(), ""),
            };
            let word = if self.is_asr {
                word.to_lowercase()
            } else {
                word.to_string()
            };

            let best = model.best(&word.to_lowercase());
            let chosen = match best {
                Some(best) if is_first_word => best,
                _ if model.is_known(&word) => word.as_str(),
                Some(best) => best,
                None => word.as_str(),
            };
            cased.push(format!("{chosen}{factors}"));

            if SENT_END.contains(&word.as_str()) {
                is_first_word = true;
            } else if !DELAYED_SENT_START.contains(&word.as_str()) {
                is_first_word = false;
            }
        }
        Ok(cased)
    }

    pub fn truecase_to_string(&self, text: &str) -> Result<String> {
        Ok(self.truecase(text)?.join(" "))
    }
}

/// Fluent builder for [`Truecaser`]
#[derive(Debug, Default)]
pub struct TruecaserBuilder {
    is_asr: bool,
    model_path: Option<PathBuf>,
}

impl TruecaserBuilder {
    pub fn asr(mut self, is_asr: bool) -> Self {
        self.is_asr = is_asr;
        self
    }

    /// Load this model file at build time
    pub fn model_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.model_path = Some(path.into());
        self
    }

    pub fn build(self) -> Result<Truecaser> {
        match self.model_path {
            Some(path) => Truecaser::load(path, self.is_asr),
            None => Ok(Truecaser {
                model: None,
                is_asr: self.is_asr,
            }),
        }
    }
}
