//! Casing frequency statistics and the derived truecasing model

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::Path;

/// Weighted surface-form counts, grouped by lowercase form
///
/// Surface forms keep their first-seen order so ties resolve the same way
/// on every run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CasingStats {
    order: Vec<String>,
    forms: HashMap<String, Vec<(String, f64)>>,
}

impl CasingStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `weight` to the count of `surface` under its lowercase form
    pub fn add(&mut self, lower: &str, surface: &str, weight: f64) {
        if !self.forms.contains_key(lower) {
            self.order.push(lower.to_string());
        }
        let forms = self.forms.entry(lower.to_string()).or_default();
        match forms.iter_mut().find(|(form, _)| form == surface) {
            Some((_, count)) => *count += weight,
            None => forms.push((surface.to_string(), weight)),
        }
    }

    /// Surface forms of `lower`, most frequent first
    pub fn ranked(&self, lower: &str) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self
            .forms
            .get(lower)
            .map(|forms| {
                forms
                    .iter()
                    .map(|(form, count)| (form.as_str(), *count))
                    .collect()
            })
            .unwrap_or_default();
        // stable sort keeps first-seen order among equal counts
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }

    /// Lowercase keys in first-seen order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Serialize as `form (count/total) form (count) ...`, one key per line
    pub fn to_model_string(&self) -> String {
        let mut out = String::new();
        for key in self.keys() {
            let ranked = self.ranked(key);
            let total: f64 = ranked.iter().map(|(_, c)| c).sum();
            let entries: Vec<String> = ranked
                .iter()
                .enumerate()
                .map(|(i, (form, count))| {
                    if i == 0 {
                        format!("{form} ({count}/{total})")
                    } else {
                        format!("{form} ({count})")
                    }
                })
                .collect();
            let _ = writeln!(out, "{}", entries.join(" "));
        }
        out
    }

    /// Parse the model file format
    pub fn parse(text: &str) -> Result<Self> {
        let mut stats = Self::new();
        for (lineno, line) in text.lines().enumerate() {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() % 2 != 0 {
                return Err(Error::config_load(
                    "truecase model",
                    format!("line {}: expected `form (count)` pairs", lineno + 1),
                ));
            }
            for pair in fields.chunks(2) {
                let (form, count) = (pair[0], pair[1]);
                let raw = count
                    .split('/')
                    .next()
                    .unwrap_or(count)
                    .trim_matches(|c| c == '(' || c == ')');
                let weight: f64 = raw.parse().map_err(|_| {
                    Error::config_load(
                        "truecase model",
                        format!("line {}: bad count `{count}` for `{form}`", lineno + 1),
                    )
                })?;
                stats.add(&form.to_lowercase(), form, weight);
            }
        }
        Ok(stats)
    }
}

/// Best casing per lowercase form, plus forms seen under another casing
#[derive(Debug, Clone, Default)]
pub struct CasingModel {
    stats: CasingStats,
    best: HashMap<String, String>,
    known: HashMap<String, usize>,
}

impl CasingModel {
    /// Collapse frequency statistics into best/known lookups
    ///
    /// Every runner-up form is only flagged as known; its count is not
    /// kept. ASR models drop the known set entirely.
    pub fn from_stats(stats: CasingStats, is_asr: bool) -> Self {
        let mut best = HashMap::with_capacity(stats.len());
        let mut known = HashMap::new();

        for key in stats.keys() {
            let ranked = stats.ranked(key);
            let Some((top, _)) = ranked.first() else {
                continue;
            };
            best.insert(key.to_string(), (*top).to_string());
            if !is_asr {
                for (form, _) in &ranked[1..] {
                    *known.entry((*form).to_string()).or_insert(0) += 1;
                }
            }
        }

        Self { stats, best, known }
    }

    /// Load a model file
    pub fn load(path: impl AsRef<Path>, is_asr: bool) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let stats = CasingStats::parse(&text)?;
        Ok(Self::from_stats(stats, is_asr))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.stats.to_model_string()).map_err(|e| Error::io(path, e))
    }

    /// Most frequent surface form for a lowercase key
    pub fn best(&self, lower: &str) -> Option<&str> {
        self.best.get(lower).map(String::as_str)
    }

    pub fn is_known(&self, surface: &str) -> bool {
        self.known.contains_key(surface)
    }

    pub fn len(&self) -> usize {
        self.best.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}
