//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use markwords_core::Segment;
use std::io::Write;

/// Markdown formatter - matches in bold, match count footer
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    match_count: usize,
    headers: bool,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            match_count: 0,
            headers: false,
        }
    }

    /// Print a `## source` heading before each document
    pub fn with_headers(mut self, headers: bool) -> Self {
        self.headers = headers;
        self
    }
}

impl<W: Write> MarkdownFormatter<W> {
    /// Bold `piece`, keeping edge whitespace outside the delimiters
    ///
    /// `** x**` is not emphasis in markdown, and a whitespace-only match has
    /// nothing to embolden.
    fn write_bold(&mut self, piece: &str) -> Result<()> {
        let inner = piece.trim();
        if inner.is_empty() {
            write!(self.writer, "{piece}")?;
            return Ok(());
        }

        let leading = &piece[..piece.len() - piece.trim_start().len()];
        let trailing = &piece[piece.trim_end().len()..];
        write!(
            self.writer,
            "{leading}**{}**{trailing}",
            escape_markdown(inner)
        )?;
        Ok(())
    }
}

/// Backslash-escape characters that would open or close inline markup
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '\\' | '*' | '_' | '`') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_document(&mut self, source: &str, text: &str, segments: &[Segment]) -> Result<()> {
        if self.headers {
            writeln!(self.writer, "## {source}")?;
            writeln!(self.writer)?;
        }

        for segment in segments {
            let piece = segment.text(text);
            if segment.matched {
                self.match_count += 1;
                self.write_bold(piece)?;
            } else {
                write!(self.writer, "{}", escape_markdown(piece))?;
            }
        }

        if !text.ends_with('\n') {
            writeln!(self.writer)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total matches: {}*", self.match_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
