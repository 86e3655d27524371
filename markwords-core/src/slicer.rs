//! Text slicing: scan, resolve overlaps, assemble segments
//!
//! The slicer runs in three passes over immutable input:
//!
//! 1. **Scan**: every word's matcher sweeps the text left to right with a
//!    monotonically advancing cursor, yielding non-overlapping candidates.
//! 2. **Resolve**: candidates from all words are ordered by start offset,
//!    then by word order, and accepted greedily. A candidate that begins
//!    inside an accepted range is dropped whole, never truncated.
//! 3. **Assemble**: accepted ranges and the gaps between them become the
//!    segment partition of the text.

use crate::error::Result;
use crate::highlighter::Highlighter;
use crate::options::MatchStrategy;
use crate::segment::{CharCounter, Segment};
use regex::Regex;
use std::ops::Range;

/// A match found by one word's matcher, before conflict resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub start: usize,
    pub end: usize,
    pub word_index: usize,
}

/// Split `text` into matched and unmatched segments for `words`
///
/// Segment `start`/`end` are **byte** offsets into `text`, so
/// `&text[segment.start..segment.end]` is the segment text. The same range
/// counted in characters is in `char_start`/`char_end`; use those when
/// positions are shown to a user or handed to a character-indexed API.
///
/// All matchers are built before any scanning, so a matcher failure aborts
/// the call even when `text` is empty.
///
/// # Errors
///
/// Returns [`SliceError::InvalidMatcher`](crate::SliceError::InvalidMatcher)
/// when a custom factory fails, and
/// [`SliceError::InvalidPattern`](crate::SliceError::InvalidPattern) when an
/// unescaped word is not valid regex syntax.
///
/// # Example
///
/// ```rust
/// use markwords_core::{slice, MatchOptions, MatchStrategy};
///
/// let text = "test testing tested";
/// let segments = slice(text, &["test"], &MatchStrategy::Options(MatchOptions::default())).unwrap();
///
/// assert_eq!(segments.len(), 2);
/// assert!(segments[0].matched);
/// assert_eq!(segments[0].text(text), "test");
///
/// let text = "日本 test";
/// let segments = slice(text, &["test"], &MatchStrategy::default()).unwrap();
/// assert_eq!((segments[1].start, segments[1].end), (7, 11));
/// assert_eq!((segments[1].char_start, segments[1].char_end), (3, 7));
/// ```
pub fn slice<S: AsRef<str>>(
    text: &str,
    words: &[S],
    strategy: &MatchStrategy,
) -> Result<Vec<Segment>> {
    let highlighter = Highlighter::new(words, strategy)?;
    Ok(highlighter.slice(text))
}

/// Collect every non-overlapping match of `matcher` in `text`
///
/// Empty matches never become candidates; the cursor steps over one
/// character instead so the sweep always makes progress.
pub(crate) fn scan(matcher: &Regex, text: &str, word_index: usize, out: &mut Vec<Candidate>) {
    let mut cursor = 0;

    while cursor <= text.len() {
        let Some(found) = matcher.find_at(text, cursor) else {
            break;
        };

        if found.start() == found.end() {
            cursor = next_char_boundary(text, found.end());
            continue;
        }

        out.push(Candidate {
            start: found.start(),
            end: found.end(),
            word_index,
        });
        cursor = found.end();
    }
}

fn next_char_boundary(text: &str, offset: usize) -> usize {
    match text[offset..].chars().next() {
        Some(ch) => offset + ch.len_utf8(),
        None => text.len() + 1,
    }
}

/// Accept candidates earliest-start first, earlier word first on ties
pub(crate) fn resolve(mut candidates: Vec<Candidate>) -> Vec<Range<usize>> {
    candidates.sort_by_key(|c| (c.start, c.word_index));

    let mut accepted: Vec<Range<usize>> = Vec::with_capacity(candidates.len());
    let mut last_end = 0;

    for candidate in candidates {
        if candidate.start < last_end {
            continue;
        }
        last_end = candidate.end;
        accepted.push(candidate.start..candidate.end);
    }

    accepted
}

/// Build the gapless segment partition of `text` around `accepted`
///
/// `accepted` must be sorted and non-overlapping. Touching matches collapse
/// into a single matched segment.
pub(crate) fn assemble(text: &str, accepted: &[Range<usize>]) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::with_capacity(accepted.len() * 2 + 1);
    let mut chars = CharCounter::new(text);
    let mut cursor = 0;
    let mut char_cursor = 0;

    for range in accepted {
        if range.start > cursor {
            let char_start = chars.advance_to(range.start);
            segments.push(Segment::new(
                cursor..range.start,
                char_cursor..char_start,
                false,
            ));
            char_cursor = char_start;
        }

        let char_end = chars.advance_to(range.end);
        match segments.last_mut() {
            Some(last) if last.matched && last.end == range.start => {
                last.end = range.end;
                last.char_end = char_end;
            }
            _ => segments.push(Segment::new(
                range.start..range.end,
                char_cursor..char_end,
                true,
            )),
        }
        cursor = range.end;
        char_cursor = char_end;
    }

    if cursor < text.len() {
        let char_end = chars.advance_to(text.len());
        segments.push(Segment::new(cursor..text.len(), char_cursor..char_end, false));
    }

    segments
}
