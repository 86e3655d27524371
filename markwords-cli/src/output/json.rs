//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use markwords_core::Segment;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs documents as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: Vec<DocumentData>,
}

/// One processed document
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// File name or `<text>`
    pub source: String,
    /// Number of matched segments
    pub match_count: usize,
    /// Segments in text order
    pub segments: Vec<SegmentData>,
}

/// Data structure for one segment
#[derive(Debug, Serialize, Deserialize)]
pub struct SegmentData {
    /// Byte offset of the segment start
    pub start: usize,
    /// Byte offset of the segment end
    pub end: usize,
    /// Character offset of the segment start
    pub char_start: usize,
    /// Character offset of the segment end
    pub char_end: usize,
    /// Whether the segment is a match
    pub matched: bool,
    /// The segment text
    pub text: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            documents: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, source: &str, text: &str, segments: &[Segment]) -> Result<()> {
        let segments: Vec<SegmentData> = segments
            .iter()
            .map(|segment| SegmentData {
                start: segment.start,
                end: segment.end,
                char_start: segment.char_start,
                char_end: segment.char_end,
                matched: segment.matched,
                text: segment.text(text).to_string(),
            })
            .collect();

        self.documents.push(DocumentData {
            source: source.to_string(),
            match_count: segments.iter().filter(|s| s.matched).count(),
            segments,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
