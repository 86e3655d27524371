//! Configuration module

use crate::error::CliError;
use crate::input::FileReader;
use anyhow::{Context, Result};
use markwords_core::{Boundary, MatchOptions};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Matching configuration
    #[serde(default)]
    pub matching: MatchingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// HTML rendering configuration
    #[serde(default)]
    pub html: HtmlConfig,
}

/// Matching-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Words highlighted when none are given on the command line
    pub words: Vec<String>,

    /// Escape regex metacharacters in words
    pub escape: bool,

    /// Case-sensitive matching
    pub case_sensitive: bool,

    /// Boundary mode: true, false, start or end
    pub boundary: String,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            words: Vec::new(),
            escape: true,
            case_sensitive: false,
            boundary: "true".to_string(),
        }
    }
}

impl MatchingConfig {
    /// Convert to core match options
    pub fn to_options(&self) -> Result<MatchOptions, CliError> {
        let boundary: Boundary = self
            .boundary
            .parse()
            .map_err(|e| CliError::ConfigError(format!("{e}")))?;

        Ok(MatchOptions::builder()
            .escape(self.escape)
            .case_sensitive(self.case_sensitive)
            .boundary(boundary)
            .build())
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// Marker written before a match in text output
    pub open_marker: String,

    /// Marker written after a match in text output
    pub close_marker: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
            open_marker: "[".to_string(),
            close_marker: "]".to_string(),
        }
    }
}

/// HTML tags and class names used to render segments
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HtmlConfig {
    /// Element wrapping each document
    pub container_tag: String,

    /// Class name of the container element
    pub container_class: Option<String>,

    /// Element wrapping matched segments
    pub marked_tag: String,

    /// Class name of matched segments
    pub marked_class: String,

    /// Element wrapping unmatched segments (bare text when unset)
    pub unmarked_tag: Option<String>,

    /// Class name of unmatched segments
    pub unmarked_class: Option<String>,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            container_tag: "div".to_string(),
            container_class: None,
            marked_tag: "mark".to_string(),
            marked_class: "marked".to_string(),
            unmarked_tag: None,
            unmarked_class: None,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = FileReader::read_text(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;

        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate values that serde cannot check
    pub fn validate(&self) -> Result<(), CliError> {
        self.matching.to_options()?;

        if self.html.container_tag.trim().is_empty() || self.html.marked_tag.trim().is_empty() {
            return Err(CliError::ConfigError(
                "html tags must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
