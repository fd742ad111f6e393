//! Selection ranges over a text buffer
//!
//! Offsets count Unicode scalar values (`char`s), not bytes. The host input
//! surface reports the range; the composer reads it only at the moment of a
//! command and never caches it across edits.

use serde::{Deserialize, Serialize};

/// A range of text from start (inclusive) to end (exclusive)
///
/// Callers guarantee `start <= end <= char length of the buffer`. A range
/// with `start == end` is a caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SelectionRange {
    pub start: usize,
    pub end: usize,
}

impl SelectionRange {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "selection start {} past end {}", start, end);
        Self { start, end }
    }

    /// Create a collapsed selection (caret only)
    pub fn caret(offset: usize) -> Self {
        Self { start: offset, end: offset }
    }

    /// Create a range of `len` characters beginning at `start`
    pub fn spanning(start: usize, len: usize) -> Self {
        Self { start, end: start + len }
    }

    /// Check if this range is a caret (start == end)
    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.is_caret()
    }

    /// The selected substring of `text`
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        let start = char_to_byte(text, self.start);
        let end = char_to_byte(text, self.end);
        &text[start..end]
    }
}

/// Number of characters in `text`
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte index of the character at `char_offset`
///
/// Offsets past the end clamp to `text.len()`; that is a caller precondition
/// violation, not a recoverable condition.
pub fn char_to_byte(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len())
}
