//! CLI command implementations

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use markwords_core::Boundary;

pub mod generate_config;
pub mod mark;

use crate::output::OutputFormat;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Highlight words in text files or inline text
    Mark(mark::MarkArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Generate a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List word boundary modes
    Boundaries,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Mark(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Text printed by the list command
    pub fn render(&self) -> String {
        let mut out = String::new();
        match self {
            ListCommands::Formats => {
                out.push_str("Available output formats:\n");
                for format in OutputFormat::value_variants() {
                    if let Some(value) = format.to_possible_value() {
                        out.push_str(&format!("  {:<10} {}\n", value.get_name(), format.description()));
                    }
                }
            }
            ListCommands::Boundaries => {
                out.push_str("Available boundary modes:\n");
                for boundary in Boundary::ALL {
                    out.push_str(&format!(
                        "  {:<10} {}\n",
                        boundary.as_str(),
                        boundary_description(boundary)
                    ));
                }
            }
        }
        out
    }
}

fn boundary_description(boundary: Boundary) -> &'static str {
    match boundary {
        Boundary::Both => "whole words only (default)",
        Boundary::None => "anywhere in the text",
        Boundary::Start => "words starting with the word, excluding the word itself",
        Boundary::End => "words ending with the word, excluding the word itself",
    }
}
