//! Tokenize command implementation

use super::{run_lines, CommonArgs};
use crate::output::{formatter, open_output, OutputFormat};
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use moses_core::ProtectedPatterns;
use std::path::PathBuf;

/// Built-in protected pattern sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BuiltinPatterns {
    /// XML tags, e-mail addresses and URLs with paths
    Basic,
    /// URLs, e-mail addresses, @handles and #hashtags
    Web,
}

/// Arguments for the tokenize command
#[derive(Debug, Args)]
pub struct TokenizeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Split hyphenated words as `foo @-@ bar`
    #[arg(short, long)]
    pub aggressive_dash_splits: bool,

    /// Do not escape special characters as XML entities
    #[arg(short = 'x', long)]
    pub no_escape: bool,

    /// File with one protected regex per line
    #[arg(short, long, value_name = "FILE")]
    pub protected_patterns: Option<PathBuf>,

    /// Also protect one of the built-in pattern sets
    #[arg(long, value_enum, value_name = "SET")]
    pub protect: Option<BuiltinPatterns>,

    /// Use Penn Treebank tokenization
    #[arg(long)]
    pub penn: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl TokenizeArgs {
    /// Execute the tokenize command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging();
        log::debug!("Arguments: {:?}", self);

        let mut config = self.common.load_config()?;
        let section = &mut config.tokenizer;
        section.language = self.common.language_or(&section.language);
        section.aggressive_dash_splits |= self.aggressive_dash_splits;
        section.escape &= !self.no_escape;
        section.penn |= self.penn;
        if let Some(path) = &self.protected_patterns {
            section.protected_pattern_file = Some(path.clone());
        }

        let tokenizer = section
            .builder()
            .build()
            .with_context(|| format!("Failed to build tokenizer for `{}`", section.language))?;
        let mut options = section.options()?;
        let builtin = match self.protect {
            Some(BuiltinPatterns::Basic) => ProtectedPatterns::basic(),
            Some(BuiltinPatterns::Web) => ProtectedPatterns::web(),
            None => ProtectedPatterns::none(),
        };
        options.protected_patterns.extend(builtin);
        let penn = section.penn;

        let mut formatter = formatter(self.format, open_output(self.common.output.as_deref())?);
        run_lines(&self.common, formatter.as_mut(), |line| {
            if penn {
                tokenizer.penn_tokenize_to_string(line)
            } else {
                tokenizer.tokenize_to_string(line, &options)
            }
        })
    }
}
