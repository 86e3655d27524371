//! Output formatting module

use crate::config::CliConfig;
use anyhow::Result;
use markwords_core::Segment;
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Render one document's segments
    fn format_document(&mut self, source: &str, text: &str, segments: &[Segment]) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod html;
pub mod json;
pub mod markdown;
pub mod text;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with matches wrapped in markers
    Text,
    /// Markdown with matches in bold
    Markdown,
    /// JSON array of documents and their segments
    Json,
    /// HTML with matches wrapped in mark elements
    Html,
}

impl OutputFormat {
    /// Short description for `list formats`
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "plain text, matches wrapped in configurable markers",
            OutputFormat::Markdown => "markdown, matches in bold with a match count footer",
            OutputFormat::Json => "JSON array of documents with segment offsets",
            OutputFormat::Html => "HTML container with <mark> elements around matches",
        }
    }
}

/// Writer type shared by all formatters
pub type BoxedWriter = Box<dyn Write + Send + Sync>;

/// Create the formatter for `format`
///
/// `headers` adds a per-document heading where the format has one, which is
/// used when more than one file is processed.
pub fn create_formatter(
    format: OutputFormat,
    writer: BoxedWriter,
    config: &CliConfig,
    headers: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(
            TextFormatter::new(writer)
                .with_markers(&config.output.open_marker, &config.output.close_marker)
                .with_headers(headers),
        ),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer).with_headers(headers)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
        OutputFormat::Html => Box::new(HtmlFormatter::new(writer, config.html.clone())),
    }
}
