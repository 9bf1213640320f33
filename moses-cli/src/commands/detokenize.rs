//! Detokenize command implementation

use super::{run_lines, CommonArgs};
use crate::output::{formatter, open_output, OutputFormat};
use anyhow::{Context, Result};
use clap::Args;
use moses_core::Detokenizer;

/// Arguments for the detokenize command
#[derive(Debug, Args)]
pub struct DetokenizeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Keep XML entities as they are
    #[arg(short = 'x', long)]
    pub no_unescape: bool,
}

impl DetokenizeArgs {
    /// Execute the detokenize command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging();

        let mut config = self.common.load_config()?;
        let section = &mut config.detokenizer;
        section.language = self.common.language_or(&section.language);
        section.unescape &= !self.no_unescape;

        let detokenizer = Detokenizer::new(&section.language)
            .with_context(|| format!("Failed to build detokenizer for `{}`", section.language))?;
        let options = section.options();

        let writer = open_output(self.common.output.as_deref())?;
        let mut formatter = formatter(OutputFormat::Text, writer);
        run_lines(&self.common, formatter.as_mut(), |line| {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            detokenizer.detokenize_with(&tokens, &options)
        })
    }
}
