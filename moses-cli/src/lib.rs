//! Moses CLI library
//!
//! This library provides the command-line interface for the Moses-compatible
//! tokenizer, detokenizer, truecaser and punctuation normalizer.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};

use clap::Parser;

/// Moses text preprocessing tools
#[derive(Debug, Parser)]
#[command(name = "moses", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: commands::Commands,
}

impl Cli {
    pub fn execute(&self) -> CliResult<()> {
        self.command.execute()
    }
}
