//! Match configuration: per-call options or a custom matcher factory

use crate::error::BoxError;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Default option values
pub mod defaults {
    use super::Boundary;

    /// Regex metacharacters in words are escaped
    pub const ESCAPE: bool = true;

    /// Matching ignores letter case
    pub const CASE_SENSITIVE: bool = false;

    /// Words must match as whole tokens
    pub const BOUNDARY: Boundary = Boundary::Both;
}

/// How a match must line up with word edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Boundary {
    /// No constraint, the word matches anywhere
    None,
    /// The word is a complete token
    #[default]
    Both,
    /// The word is a strict prefix of a longer token
    Start,
    /// The word is a strict suffix of a longer token
    End,
}

impl Boundary {
    /// All variants in display order
    pub const ALL: [Boundary; 4] = [
        Boundary::Both,
        Boundary::None,
        Boundary::Start,
        Boundary::End,
    ];

    /// Canonical name, as accepted by `FromStr`
    pub fn as_str(&self) -> &'static str {
        match self {
            Boundary::None => "false",
            Boundary::Both => "true",
            Boundary::Start => "start",
            Boundary::End => "end",
        }
    }
}

impl From<bool> for Boundary {
    fn from(value: bool) -> Self {
        if value {
            Boundary::Both
        } else {
            Boundary::None
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized boundary name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown boundary '{0}' (expected true, false, start or end)")]
pub struct ParseBoundaryError(String);

impl FromStr for Boundary {
    type Err = ParseBoundaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "true" | "both" | "word" => Ok(Boundary::Both),
            "false" | "none" | "any" => Ok(Boundary::None),
            "start" => Ok(Boundary::Start),
            "end" => Ok(Boundary::End),
            _ => Err(ParseBoundaryError(s.to_string())),
        }
    }
}

/// Options used to turn each word into a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MatchOptions {
    /// Escape regex metacharacters so the word matches verbatim
    pub escape: bool,
    /// Respect letter case when matching
    pub case_sensitive: bool,
    /// Word-edge alignment of a match
    pub boundary: Boundary,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            escape: defaults::ESCAPE,
            case_sensitive: defaults::CASE_SENSITIVE,
            boundary: defaults::BOUNDARY,
        }
    }
}

impl MatchOptions {
    /// Create an options builder
    pub fn builder() -> MatchOptionsBuilder {
        MatchOptionsBuilder::default()
    }
}

/// Fluent builder for [`MatchOptions`]
#[derive(Debug, Default)]
pub struct MatchOptionsBuilder {
    options: MatchOptions,
}

impl MatchOptionsBuilder {
    /// Create a builder holding the default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether regex metacharacters are escaped
    pub fn escape(mut self, escape: bool) -> Self {
        self.options.escape = escape;
        self
    }

    /// Set case sensitivity
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.options.case_sensitive = case_sensitive;
        self
    }

    /// Set the boundary mode
    pub fn boundary(mut self, boundary: impl Into<Boundary>) -> Self {
        self.options.boundary = boundary.into();
        self
    }

    /// Build the options
    pub fn build(self) -> MatchOptions {
        self.options
    }
}

/// Factory producing a matcher for a raw word
pub type MatchFn = Arc<dyn Fn(&str) -> Result<Regex, BoxError> + Send + Sync>;

/// Where each word's matcher comes from
///
/// `Custom` bypasses escaping, boundaries and case handling entirely: the
/// factory's regex is used verbatim for every word.
#[derive(Clone)]
pub enum MatchStrategy {
    /// Build patterns from options
    Options(MatchOptions),
    /// Ask a caller-supplied factory for each matcher
    Custom(MatchFn),
}

impl MatchStrategy {
    /// Wrap a closure as a custom strategy
    pub fn custom<F>(factory: F) -> Self
    where
        F: Fn(&str) -> Result<Regex, BoxError> + Send + Sync + 'static,
    {
        MatchStrategy::Custom(Arc::new(factory))
    }

    /// Options in effect, if this is not a custom strategy
    pub fn options(&self) -> Option<&MatchOptions> {
        match self {
            MatchStrategy::Options(options) => Some(options),
            MatchStrategy::Custom(_) => None,
        }
    }
}

impl Default for MatchStrategy {
    fn default() -> Self {
        MatchStrategy::Options(MatchOptions::default())
    }
}

impl From<MatchOptions> for MatchStrategy {
    fn from(options: MatchOptions) -> Self {
        MatchStrategy::Options(options)
    }
}

impl fmt::Debug for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStrategy::Options(options) => f.debug_tuple("Options").field(options).finish(),
            MatchStrategy::Custom(_) => f.debug_tuple("Custom").field(&"<dyn Fn>").finish(),
        }
    }
}
