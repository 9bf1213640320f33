use clap::Parser;
use moses_cli::Cli;

fn main() -> anyhow::Result<()> {
    Cli::parse().execute()
}
