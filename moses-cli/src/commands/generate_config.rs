//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Language code written into every section
    #[arg(short = 'l', long, value_name = "CODE", default_value = "en")]
    pub language: String,

    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = self.generate_template();
        // refuse to write a template that would not load back
        moses_core::MosesConfig::from_toml_str(&template)
            .with_context(|| format!("Invalid language code `{}`", self.language))?;

        let Some(output) = &self.output else {
            print!("{template}");
            return Ok(());
        };

        std::fs::write(output, template)
            .with_context(|| format!("Failed to write to {}", output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to adjust the pipeline");
        println!("2. Use it for processing:");
        println!(
            "   moses tokenize -i input.txt --config {}",
            output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        format!(
            r#"# Moses preprocessing configuration
#
# Every key is optional; the values shown are the defaults.
# Command-line flags override these settings.

[tokenizer]
language = "{lang}"
# Split hyphenated words as `foo @-@ bar`
aggressive_dash_splits = false
# Escape & | < > ' " [ ] as XML entities
escape = true
# Use Penn Treebank tokenization instead of the Moses rules
penn = false
# Regexes whose matches are never split, matched case-insensitively
protected_patterns = []
# protected_pattern_file = "protected.txt"
# Extra non-breaking prefixes, one per line, `#NUMERIC_ONLY#` marks
# prefixes that only stay attached before a number
# custom_prefix_file = "prefixes.txt"

[detokenizer]
language = "{lang}"
# Turn XML entities back into characters
unescape = true

[truecaser]
# model = "truecase.model"
# Lowercase input before lookup (ASR output)
is_asr = false
# Count lowercase sentence-initial words during training
possibly_use_first_token = false

[normalizer]
language = "{lang}"
# Input already uses Penn Treebank quotes
penn = false
# Move commas and periods inside closing quotes (en) or out of them (de/es/fr)
norm_quote_commas = true
# Replace no-break spaces between digits with the local group separator
norm_numbers = true
# Map full-width punctuation and digits to ASCII first
pre_replace_unicode_punct = false
# Remove control and format characters at the end
post_remove_control_chars = false
"#,
            lang = self.language
        )
    }
}
