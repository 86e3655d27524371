//! Error types for slicing

use thiserror::Error;

/// Boxed error returned by a custom matcher factory
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while building the matchers for a word list
///
/// Slicing itself cannot fail once every matcher is built, so both variants
/// are construction-time failures and no partial result is ever returned.
#[derive(Error, Debug)]
pub enum SliceError {
    /// A custom matcher factory could not produce a matcher for a word
    #[error("invalid matcher for word '{word}': {source}")]
    InvalidMatcher {
        /// The word passed to the factory
        word: String,
        /// The factory's failure
        #[source]
        source: BoxError,
    },

    /// A pattern built from match options is not valid regex syntax
    #[error("invalid pattern '{pattern}' for word '{word}': {source}")]
    InvalidPattern {
        /// The word the pattern was built from
        word: String,
        /// The pattern string handed to the regex engine
        pattern: String,
        /// The compile error
        #[source]
        source: regex::Error,
    },
}

impl SliceError {
    /// The word whose matcher failed to build
    pub fn word(&self) -> &str {
        match self {
            SliceError::InvalidMatcher { word, .. } | SliceError::InvalidPattern { word, .. } => {
                word
            }
        }
    }
}

/// Result type for slicing operations
pub type Result<T> = std::result::Result<T, SliceError>;
