//! Normalize command implementation

use super::{run_lines, CommonArgs};
use crate::output::{formatter, open_output, OutputFormat};
use anyhow::{Context, Result};
use clap::Args;

/// Arguments for the normalize command
#[derive(Debug, Args)]
pub struct NormalizeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Input uses Penn Treebank quotes
    #[arg(long)]
    pub penn: bool,

    /// Leave quote/comma order alone
    #[arg(long)]
    pub no_quote_commas: bool,

    /// Leave no-break spaces inside numbers alone
    #[arg(long)]
    pub no_numbers: bool,

    /// Map full-width punctuation to ASCII first
    #[arg(long)]
    pub replace_unicode_punct: bool,

    /// Remove control characters from the output
    #[arg(long)]
    pub remove_control_chars: bool,
}

impl NormalizeArgs {
    /// Execute the normalize command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging();

        let mut config = self.common.load_config()?;
        let section = &mut config.normalizer;
        section.language = self.common.language_or(&section.language);
        section.penn |= self.penn;
        section.norm_quote_commas &= !self.no_quote_commas;
        section.norm_numbers &= !self.no_numbers;
        section.pre_replace_unicode_punct |= self.replace_unicode_punct;
        section.post_remove_control_chars |= self.remove_control_chars;

        let normalizer = section
            .builder()
            .build()
            .with_context(|| format!("Failed to build normalizer for `{}`", section.language))?;

        let writer = open_output(self.common.output.as_deref())?;
        let mut formatter = formatter(OutputFormat::Text, writer);
        run_lines(&self.common, formatter.as_mut(), |line| normalizer.normalize(line))
    }
}
