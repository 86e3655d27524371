//! HTML output formatter

use super::OutputFormatter;
use crate::config::HtmlConfig;
use anyhow::Result;
use markwords_core::Segment;
use std::io::Write;

/// HTML formatter - one container element per document
///
/// Matched segments are wrapped in the marked tag. Unmatched segments are
/// written as bare text unless an unmarked tag is configured.
pub struct HtmlFormatter<W: Write> {
    writer: W,
    config: HtmlConfig,
}

impl<W: Write> HtmlFormatter<W> {
    /// Create a new HTML formatter
    pub fn new(writer: W, config: HtmlConfig) -> Self {
        Self { writer, config }
    }

    fn open_tag(&mut self, tag: &str, class: Option<&str>) -> Result<()> {
        match class {
            Some(class) => write!(self.writer, "<{tag} class=\"{}\">", escape_html(class))?,
            None => write!(self.writer, "<{tag}>")?,
        }
        Ok(())
    }
}

/// Escape text for use in HTML content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

impl<W: Write + Send + Sync> OutputFormatter for HtmlFormatter<W> {
    fn format_document(&mut self, _source: &str, text: &str, segments: &[Segment]) -> Result<()> {
        let config = self.config.clone();

        self.open_tag(&config.container_tag, config.container_class.as_deref())?;
        for segment in segments {
            let piece = escape_html(segment.text(text));

            if segment.matched {
                self.open_tag(&config.marked_tag, Some(&config.marked_class))?;
                write!(self.writer, "{piece}</{}>", config.marked_tag)?;
            } else if let Some(tag) = &config.unmarked_tag {
                self.open_tag(tag, config.unmarked_class.as_deref())?;
                write!(self.writer, "{piece}</{tag}>")?;
            } else {
                write!(self.writer, "{piece}")?;
            }
        }
        writeln!(self.writer, "</{}>", config.container_tag)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use markwords_core::{slice, MatchStrategy};

    fn render(config: HtmlConfig, text: &str, words: &[&str]) -> String {
        let segments = slice(text, words, &MatchStrategy::default()).unwrap();
        let mut formatter = HtmlFormatter::new(Vec::new(), config);
        formatter.format_document("doc", text, &segments).unwrap();
        formatter.finish().unwrap();
        String::from_utf8(formatter.writer).unwrap()
    }

    #[test]
    fn test_default_tags() {
        let html = render(HtmlConfig::default(), "Hello World", &["World"]);
        assert_eq!(html, "<div>Hello <mark class=\"marked\">World</mark></div>\n");
    }

    #[test]
    fn test_custom_tags_and_classes() {
        let config = HtmlConfig {
            container_tag: "section".to_string(),
            container_class: Some("container".to_string()),
            marked_tag: "strong".to_string(),
            marked_class: "highlight".to_string(),
            unmarked_tag: Some("span".to_string()),
            unmarked_class: Some("normal".to_string()),
        };
        let html = render(config, "hello test", &["test"]);

        assert_eq!(
            html,
            "<section class=\"container\"><span class=\"normal\">hello </span>\
             <strong class=\"highlight\">test</strong></section>\n"
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let html = render(HtmlConfig::default(), "<b> & test", &["test"]);
        assert_eq!(
            html,
            "<div>&lt;b&gt; &amp; <mark class=\"marked\">test</mark></div>\n"
        );
    }

    #[test]
    fn test_unmarked_tag_without_class() {
        let config = HtmlConfig {
            unmarked_tag: Some("p".to_string()),
            ..HtmlConfig::default()
        };
        let html = render(config, "plain", &[]);
        assert_eq!(html, "<div><p>plain</p></div>\n");
    }
}
