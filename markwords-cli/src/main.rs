//! Markwords command-line entry point

use clap::Parser;
use markwords_cli::commands::Commands;
use std::process::ExitCode;

/// Highlight words and phrases in text
#[derive(Debug, Parser)]
#[command(name = "markwords", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
