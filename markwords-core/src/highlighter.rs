//! Compiled word list, reusable across texts

use crate::error::{Result, SliceError};
use crate::options::{MatchOptions, MatchStrategy};
use crate::pattern;
use crate::segment::Segment;
use crate::slicer::{self, Candidate};
use regex::Regex;
use std::ops::Range;

/// Matchers for an ordered word list
///
/// Building a highlighter resolves the [`MatchStrategy`] once per word.
/// Slicing afterwards cannot fail and keeps no state between calls.
#[derive(Debug, Clone)]
pub struct Highlighter {
    matchers: Vec<Regex>,
}

impl Highlighter {
    /// Build matchers for `words` using `strategy`
    ///
    /// # Errors
    ///
    /// Fails on the first word whose matcher cannot be built; no highlighter
    /// is returned in that case.
    pub fn new<S: AsRef<str>>(words: &[S], strategy: &MatchStrategy) -> Result<Self> {
        let matchers = words
            .iter()
            .map(|word| Self::build_matcher(word.as_ref(), strategy))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { matchers })
    }

    /// Build matchers from plain options
    pub fn with_options<S: AsRef<str>>(words: &[S], options: MatchOptions) -> Result<Self> {
        Self::new(words, &MatchStrategy::Options(options))
    }

    fn build_matcher(word: &str, strategy: &MatchStrategy) -> Result<Regex> {
        match strategy {
            MatchStrategy::Options(options) => pattern::compile(word, options),
            MatchStrategy::Custom(factory) => {
                factory(word).map_err(|source| SliceError::InvalidMatcher {
                    word: word.to_string(),
                    source,
                })
            }
        }
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// True when no words were given
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Compiled matcher for each word, in word order
    pub fn matchers(&self) -> &[Regex] {
        &self.matchers
    }

    /// Accepted match ranges in `text`, sorted and non-overlapping
    pub fn matches(&self, text: &str) -> Vec<Range<usize>> {
        if text.is_empty() || self.matchers.is_empty() {
            return Vec::new();
        }

        let mut candidates: Vec<Candidate> = Vec::new();
        for (word_index, matcher) in self.matchers.iter().enumerate() {
            slicer::scan(matcher, text, word_index, &mut candidates);
        }

        slicer::resolve(candidates)
    }

    /// Partition `text` into matched and unmatched segments
    pub fn slice(&self, text: &str) -> Vec<Segment> {
        slicer::assemble(text, &self.matches(text))
    }
}
