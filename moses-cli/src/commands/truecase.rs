//! Truecasing command implementations

use super::{run_lines, try_run_lines, CommonArgs};
use crate::error::CliError;
use crate::input::resolve_inputs;
use crate::output::{formatter, open_output, OutputFormat};
use anyhow::{Context, Result};
use clap::Args;
use moses_core::{Detruecaser, MosesConfig, Truecaser};
use std::path::PathBuf;

fn model_path(flag: &Option<PathBuf>, config: &MosesConfig) -> Result<PathBuf> {
    flag.clone()
        .or_else(|| config.truecaser.model.clone())
        .ok_or_else(|| CliError::MissingModel.into())
}

/// Arguments for the train-truecase command
#[derive(Debug, Args)]
pub struct TrainTruecaseArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Where to write the trained model
    #[arg(short, long, value_name = "FILE")]
    pub model: Option<PathBuf>,

    /// Count lowercase sentence-initial words
    #[arg(long)]
    pub possibly_use_first_token: bool,

    /// Train for ASR output (lowercased input)
    #[arg(long)]
    pub is_asr: bool,
}

impl TrainTruecaseArgs {
    /// Execute the train-truecase command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging();

        let config = self.common.load_config()?;
        let model_path = model_path(&self.model, &config)?;
        let is_asr = self.is_asr || config.truecaser.is_asr;
        let use_first = self.possibly_use_first_token || config.truecaser.possibly_use_first_token;

        let mut texts = Vec::new();
        for source in resolve_inputs(&self.common.input)? {
            texts.push(source.read_text()?);
        }
        let sentences: Vec<Vec<&str>> = texts
            .iter()
            .flat_map(|text| text.lines())
            .map(|line| line.split_whitespace().collect())
            .collect();

        let mut truecaser = Truecaser::builder().asr(is_asr).build()?;
        let entries = truecaser.train(&sentences, use_first).len();
        truecaser
            .save_model(&model_path)
            .with_context(|| format!("Failed to save model to {}", model_path.display()))?;

        log::info!(
            "Trained {} entries from {} sentences into {}",
            entries,
            sentences.len(),
            model_path.display()
        );
        if !self.common.quiet {
            eprintln!("✓ Model written to {}", model_path.display());
        }
        Ok(())
    }
}

/// Arguments for the truecase command
#[derive(Debug, Args)]
pub struct TruecaseArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Trained model file
    #[arg(short, long, value_name = "FILE")]
    pub model: Option<PathBuf>,

    /// Lowercase input before lookup (ASR output)
    #[arg(long)]
    pub is_asr: bool,
}

impl TruecaseArgs {
    /// Execute the truecase command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging();

        let config = self.common.load_config()?;
        let model_path = model_path(&self.model, &config)?;
        let truecaser = Truecaser::load(&model_path, self.is_asr || config.truecaser.is_asr)
            .with_context(|| format!("Failed to load model {}", model_path.display()))?;

        let writer = open_output(self.common.output.as_deref())?;
        let mut formatter = formatter(OutputFormat::Text, writer);
        try_run_lines(&self.common, formatter.as_mut(), |line| {
            Ok(truecaser.truecase_to_string(line)?)
        })
    }
}

/// Arguments for the detruecase command
#[derive(Debug, Args)]
pub struct DetruecaseArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Also capitalize every content word
    #[arg(long)]
    pub headline: bool,
}

impl DetruecaseArgs {
    /// Execute the detruecase command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging();

        let detruecaser = Detruecaser::new();
        let headline = self.headline;

        let writer = open_output(self.common.output.as_deref())?;
        let mut formatter = formatter(OutputFormat::Text, writer);
        run_lines(&self.common, formatter.as_mut(), |line| {
            detruecaser.detruecase_to_string(line, headline)
        })
    }
}
