//! Segment type produced by the slicer

use std::ops::Range;

/// A contiguous range of the input text, tagged matched or unmatched
///
/// `start`/`end` are byte offsets, so `&text[start..end]` is always valid.
/// `char_start`/`char_end` give the same range in Unicode scalar values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
    /// Character offset of the first character
    pub char_start: usize,
    /// Character offset one past the last character
    pub char_end: usize,
    /// Whether this range is a highlighted match
    pub matched: bool,
}

impl Segment {
    /// Create a segment from byte and character ranges
    pub fn new(bytes: Range<usize>, chars: Range<usize>, matched: bool) -> Self {
        Self {
            start: bytes.start,
            end: bytes.end,
            char_start: chars.start,
            char_end: chars.end,
            matched,
        }
    }

    /// Byte range into the original text
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Character range into the original text
    pub fn char_range(&self) -> Range<usize> {
        self.char_start..self.char_end
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True for a zero-length segment (never produced by the slicer)
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The slice of `text` this segment covers
    ///
    /// `text` must be the string the segment was computed from.
    pub fn text<'a>(&self, text: &'a str) -> &'a str {
        &text[self.range()]
    }
}

/// Incremental byte-to-character offset conversion over one text
///
/// Offsets must be requested in non-decreasing order, which is how the
/// slicer walks the text.
#[derive(Debug)]
pub(crate) struct CharCounter<'a> {
    text: &'a str,
    byte_pos: usize,
    char_pos: usize,
}

impl<'a> CharCounter<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            text,
            byte_pos: 0,
            char_pos: 0,
        }
    }

    pub(crate) fn advance_to(&mut self, byte_offset: usize) -> usize {
        debug_assert!(byte_offset >= self.byte_pos);
        self.char_pos += self.text[self.byte_pos..byte_offset].chars().count();
        self.byte_pos = byte_offset;
        self.char_pos
    }
}
