//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use markwords_core::Segment;
use std::io::Write;

/// Plain text formatter - wraps matches in open/close markers
pub struct TextFormatter<W: Write> {
    writer: W,
    open: String,
    close: String,
    headers: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter with `[`/`]` markers
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            open: "[".to_string(),
            close: "]".to_string(),
            headers: false,
        }
    }

    /// Use custom markers around matches
    pub fn with_markers(mut self, open: &str, close: &str) -> Self {
        self.open = open.to_string();
        self.close = close.to_string();
        self
    }

    /// Print a `==> source <==` line before each document
    pub fn with_headers(mut self, headers: bool) -> Self {
        self.headers = headers;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, source: &str, text: &str, segments: &[Segment]) -> Result<()> {
        if self.headers {
            writeln!(self.writer, "==> {source} <==")?;
        }

        for segment in segments {
            let piece = segment.text(text);
            if segment.matched {
                write!(self.writer, "{}{}{}", self.open, piece, self.close)?;
            } else {
                write!(self.writer, "{piece}")?;
            }
        }

        if !text.ends_with('\n') {
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
