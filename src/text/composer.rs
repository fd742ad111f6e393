//! Selection-aware markup composition
//!
//! Every operation is a pure function of `(buffer, selection-or-caret,
//! payload)` and returns the new buffer together with the selection the host
//! should restore. The host owns the actual focus/selection side effect.
//!
//! Offsets are char offsets and must satisfy
//! `start <= end <= char length of buffer`. Out-of-range offsets are a
//! precondition violation and clamp to the end of the buffer.

use serde::{Deserialize, Serialize};

use super::cursor::{char_len, char_to_byte, SelectionRange};
use super::markup::{EmojiToken, ImageSpec, LinkSpec, MarkupOperation, ToolbarAction};
use crate::errors::ValidationError;

/// Result of a composer operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Composition {
    /// The full new buffer content
    pub buffer: String,
    /// Selection the host should restore (collapsed for insertions)
    pub selection: SelectionRange,
}

impl Composition {
    /// Caret position after an insertion (start of the restored selection)
    pub fn caret(&self) -> usize {
        self.selection.start
    }

    /// Text covered by the restored selection
    pub fn selected_text(&self) -> &str {
        self.selection.slice(&self.buffer)
    }
}

/// Wrap the selection in `op.prefix` / `op.suffix`
///
/// The returned selection covers the originally selected text in its new
/// position, so a second wrap applied with it nests around the same span.
pub fn apply_markup(buffer: &str, selection: SelectionRange, op: &MarkupOperation) -> Composition {
    let start = char_to_byte(buffer, selection.start);
    let end = start + char_to_byte(&buffer[start..], selection.len());

    let mut out = String::with_capacity(buffer.len() + op.prefix.len() + op.suffix.len());
    out.push_str(&buffer[..start]);
    out.push_str(&op.prefix);
    out.push_str(&buffer[start..end]);
    out.push_str(&op.suffix);
    out.push_str(&buffer[end..]);

    let inner_start = selection.start + char_len(&op.prefix);
    log::debug!(
        "apply_markup {:?}..{:?} at {}..{}",
        op.prefix,
        op.suffix,
        selection.start,
        selection.end
    );

    Composition {
        buffer: out,
        selection: SelectionRange::spanning(inner_start, selection.len()),
    }
}

/// Apply the markup bound to a toolbar button
pub fn apply_action(buffer: &str, selection: SelectionRange, action: ToolbarAction) -> Composition {
    apply_markup(buffer, selection, &action.markup())
}

/// Insert `text` at the caret; the new caret sits right after the inserted text
pub fn insert_at_caret(buffer: &str, caret: usize, text: &str) -> Composition {
    let at = char_to_byte(buffer, caret);

    let mut out = String::with_capacity(buffer.len() + text.len());
    out.push_str(&buffer[..at]);
    out.push_str(text);
    out.push_str(&buffer[at..]);

    Composition {
        buffer: out,
        selection: SelectionRange::caret(caret + char_len(text)),
    }
}

/// Insert a `[text](url)` token at the start of the selection
///
/// A non-collapsed selection is not wrapped: its text stays in place after
/// the token and the caret lands right after the closing `)`.
pub fn insert_link(
    buffer: &str,
    selection: SelectionRange,
    spec: &LinkSpec,
) -> Result<Composition, ValidationError> {
    spec.validate()?;
    Ok(insert_at_caret(buffer, selection.start, &spec.render()))
}

/// Insert an `![alt](src)` token at the caret
pub fn insert_image(buffer: &str, caret: usize, spec: &ImageSpec) -> Composition {
    insert_at_caret(buffer, caret, &spec.render())
}

/// Insert a raw emoji glyph at the caret
pub fn insert_emoji(buffer: &str, caret: usize, token: &EmojiToken) -> Composition {
    insert_at_caret(buffer, caret, token.as_str())
}
