//! CLI command implementations

use crate::input::resolve_inputs;
use crate::output::OutputFormatter;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{ArgAction, Args, Subcommand};
use moses_core::MosesConfig;
use std::path::PathBuf;

pub mod detokenize;
pub mod generate_config;
pub mod list;
pub mod normalize;
pub mod tokenize;
pub mod truecase;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text into Moses tokens
    Tokenize(tokenize::TokenizeArgs),

    /// Join Moses tokens back into text
    Detokenize(detokenize::DetokenizeArgs),

    /// Normalize punctuation
    Normalize(normalize::NormalizeArgs),

    /// Train a truecasing model from tokenized text
    TrainTruecase(truecase::TrainTruecaseArgs),

    /// Restore casing with a trained model
    Truecase(truecase::TruecaseArgs),

    /// Capitalize sentence starts (and headline words)
    Detruecase(truecase::DetruecaseArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List supported languages and their prefix data
    Languages,
}

impl Commands {
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Tokenize(args) => args.execute(),
            Commands::Detokenize(args) => args.execute(),
            Commands::Normalize(args) => args.execute(),
            Commands::TrainTruecase(args) => args.execute(),
            Commands::Truecase(args) => args.execute(),
            Commands::Detruecase(args) => args.execute(),
            Commands::List {
                subcommand: ListCommands::Languages,
            } => list::languages(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Flags shared by every line-processing command
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Language code (defaults to the config file, then `en`)
    #[arg(short, long, value_name = "CODE")]
    pub language: Option<String>,

    /// Input files or patterns (supports glob; default: stdin)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Number of worker threads (0 = one per CPU)
    #[arg(short = 'j', long = "processes", value_name = "N", default_value_t = 1)]
    pub processes: usize,

    /// Configuration file
    #[arg(long, value_name = "FILE", env = "MOSES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommonArgs {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }

    pub fn load_config(&self) -> Result<MosesConfig> {
        crate::config::load(self.config.as_deref())
    }

    /// `-l` if given, else the configured language
    pub fn language_or(&self, configured: &str) -> String {
        self.language
            .clone()
            .unwrap_or_else(|| configured.to_string())
    }
}

/// Read every input, map `process` over its lines and write the results
/// in input order
pub(crate) fn run_lines<F>(
    common: &CommonArgs,
    formatter: &mut dyn OutputFormatter,
    process: F,
) -> Result<()>
where
    F: Fn(&str) -> String + Sync + Send,
{
    try_run_lines(common, formatter, |line| Ok(process(line)))
}

/// [`run_lines`] for a `process` that can reject a line; the first
/// rejection stops the command and names the offending line
pub(crate) fn try_run_lines<F>(
    common: &CommonArgs,
    formatter: &mut dyn OutputFormatter,
    process: F,
) -> Result<()>
where
    F: Fn(&str) -> Result<String> + Sync + Send,
{
    let sources = resolve_inputs(&common.input)?;
    let mut progress = ProgressReporter::new(common.quiet || sources.len() < 2);
    progress.init_files(sources.len() as u64);

    for source in &sources {
        let text = source.read_text()?;
        let lines: Vec<&str> = text.lines().collect();
        log::info!(
            "Processing {} ({} lines)",
            source.display_name(),
            lines.len()
        );

        let outputs = moses_core::batch::map_lines(&lines, common.processes, &process)?;
        for (number, (input, output)) in lines.iter().zip(outputs).enumerate() {
            let output = output
                .with_context(|| format!("{}: line {}", source.display_name(), number + 1))?;
            formatter.write_line(input, &output)?;
        }
        progress.file_completed(&source.display_name(), lines.len());
    }

    progress.finish();
    formatter.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{formatter, OutputFormat};
    use crate::Cli;
    use clap::Parser;

    #[test]
    fn test_common_flags_parse() {
        let cli = Cli::try_parse_from([
            "moses", "tokenize", "-l", "fr", "-i", "a.txt", "-i", "b/*.txt", "-j", "4", "-vv",
        ])
        .unwrap();
        let Commands::Tokenize(args) = cli.command else {
            panic!("expected tokenize");
        };
        assert_eq!(args.common.language.as_deref(), Some("fr"));
        assert_eq!(args.common.input, vec!["a.txt", "b/*.txt"]);
        assert_eq!(args.common.processes, 4);
        assert_eq!(args.common.verbose, 2);
        assert!(!args.common.quiet);
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["moses", "detokenize"]).unwrap();
        let Commands::Detokenize(args) = cli.command else {
            panic!("expected detokenize");
        };
        assert!(args.common.input.is_empty());
        assert_eq!(args.common.processes, 1);
        assert_eq!(args.common.language_or("cs"), "cs");
    }

    #[test]
    fn test_list_languages_parses() {
        let cli = Cli::try_parse_from(["moses", "list", "languages"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::List {
                subcommand: ListCommands::Languages
            }
        ));
    }

    #[test]
    fn test_rejected_line_names_its_position() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "one\nbad\nthree\n").unwrap();

        let common = CommonArgs {
            language: None,
            input: vec![path.display().to_string()],
            output: None,
            processes: 1,
            config: None,
            quiet: true,
            verbose: 0,
        };
        let mut formatter = formatter(OutputFormat::Text, Box::new(std::io::sink()));
        let err = try_run_lines(&common, formatter.as_mut(), |line| {
            if line == "bad" {
                anyhow::bail!("cannot process");
            }
            Ok(line.to_uppercase())
        })
        .unwrap_err();

        let message = format!("{err:#}");
        assert!(message.contains("line 2"), "{message}");
        assert!(message.contains("cannot process"), "{message}");
    }

    #[test]
    fn test_unknown_subcommand_rejected() {
        assert!(Cli::try_parse_from(["moses", "process"]).is_err());
    }
}
