//! Pattern construction for a single word
//!
//! A word becomes a pattern string in two steps: metacharacter escaping
//! (when enabled) and boundary decoration. Case sensitivity is never encoded
//! in the pattern string; it is a compile-time flag applied by [`compile`].
//!
//! Boundary decorations use ASCII word semantics: only `[0-9A-Za-z_]` are
//! word characters, so `é` or `日` end a word the same way a space does.

use crate::error::{Result, SliceError};
use crate::options::{Boundary, MatchOptions};
use regex::{Regex, RegexBuilder};

/// Characters escaped by [`escape_regex`]
pub const METACHARACTERS: &[char] = &[
    '-', '[', ']', '/', '{', '}', '(', ')', '*', '+', '?', '.', '\\', '^', '$', '|',
];

/// Zero-width assertion between an ASCII word character and anything else
pub const WORD_BOUNDARY: &str = r"(?-u:\b)";

/// One or more ASCII word characters
pub const WORD_CHARS: &str = r"(?-u:\w)+";

/// Prefix every regex metacharacter in `word` with a backslash
pub fn escape_regex(word: &str) -> String {
    let mut escaped = String::with_capacity(word.len());
    for ch in word.chars() {
        if METACHARACTERS.contains(&ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Decorate `word` with the boundary assertions for `boundary`
///
/// Blank words and [`Boundary::None`] are returned unchanged.
pub fn build_pattern(word: &str, boundary: Boundary) -> String {
    if word.trim().is_empty() {
        return word.to_string();
    }

    match boundary {
        Boundary::None => word.to_string(),
        Boundary::Start => format!("{WORD_BOUNDARY}{word}{WORD_CHARS}"),
        Boundary::End => format!("{WORD_CHARS}{word}{WORD_BOUNDARY}"),
        Boundary::Both => format!("{WORD_BOUNDARY}{word}{WORD_BOUNDARY}"),
    }
}

/// Full pattern string for `word` under `options`
pub fn pattern_for(word: &str, options: &MatchOptions) -> String {
    if options.escape {
        build_pattern(&escape_regex(word), options.boundary)
    } else {
        build_pattern(word, options.boundary)
    }
}

/// Compile the pattern for `word` into a matcher
pub fn compile(word: &str, options: &MatchOptions) -> Result<Regex> {
    let pattern = pattern_for(word, options);
    RegexBuilder::new(&pattern)
        .case_insensitive(!options.case_sensitive)
        .build()
        .map_err(|source| SliceError::InvalidPattern {
            word: word.to_string(),
            pattern,
            source,
        })
}
