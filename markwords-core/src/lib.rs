//! Word highlighting by text slicing
//!
//! This crate splits a block of text into an ordered, gapless sequence of
//! matched and unmatched [`Segment`]s for a list of target words. Rendering
//! those segments is left to the caller.
//!
//! Segment `start`/`end` are byte offsets, valid for slicing the `&str`
//! directly. `char_start`/`char_end` carry the same range in characters.
//!
//! # Architecture
//!
//! - **Pattern builder** ([`pattern`]): turns one word plus [`MatchOptions`]
//!   into a regex, handling escaping, word boundaries and case.
//! - **Slicer** ([`slicer`]): scans the text with every word's matcher,
//!   resolves overlaps by start offset and word order, and assembles the
//!   segment partition.
//! - **Highlighter** ([`Highlighter`]): a compiled word list that can slice
//!   any number of texts.
//!
//! # Example
//!
//! ```rust
//! use markwords_core::{slice, Boundary, MatchOptions, MatchStrategy};
//!
//! let text = "test testing tested";
//! let options = MatchOptions::builder().boundary(Boundary::Start).build();
//! let segments = slice(text, &["test"], &MatchStrategy::Options(options)).unwrap();
//!
//! let marked: Vec<&str> = segments
//!     .iter()
//!     .filter(|s| s.matched)
//!     .map(|s| s.text(text))
//!     .collect();
//! assert_eq!(marked, ["testing", "tested"]);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod highlighter;
pub mod options;
pub mod pattern;
pub mod segment;
pub mod slicer;

// Re-export key types
pub use error::{BoxError, Result, SliceError};
pub use highlighter::Highlighter;
pub use options::{Boundary, MatchFn, MatchOptions, MatchOptionsBuilder, MatchStrategy};
pub use pattern::{build_pattern, escape_regex, pattern_for};
pub use segment::Segment;
pub use slicer::slice;

// Re-export so custom factories can name the matcher type
pub use regex::Regex;
