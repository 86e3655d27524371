//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        fs::write(&self.output, Self::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template written to {}", self.output.display());
        println!();
        println!("Use it with:");
        println!(
            "   markwords mark -i input.txt -c {}",
            self.output.display()
        );

        Ok(())
    }

    /// Template configuration content
    pub fn template() -> &'static str {
        r#"# markwords configuration

[matching]
# Words highlighted when none are given with -w/--word or --words-file
words = []

# Escape regex metacharacters so each word matches literally
escape = true

# Match letter case exactly
case_sensitive = false

# Boundary mode:
#   true  - whole words only
#   false - anywhere in the text
#   start - longer words starting with the word
#   end   - longer words ending with the word
boundary = "true"

[output]
# text, markdown, json or html
default_format = "text"

# Pretty print JSON output
pretty_json = true

# Markers around matches in text output
open_marker = "["
close_marker = "]"

[html]
# Element wrapping each document
container_tag = "div"
# container_class = "content"

# Element and class for matched text
marked_tag = "mark"
marked_class = "marked"

# Element and class for unmatched text (bare text when unset)
# unmarked_tag = "span"
# unmarked_class = "unmarked"
"#
    }
}
