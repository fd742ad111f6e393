//! Text buffer for one editing session
//!
//! A question or answer form owns exactly one `TextBuffer`. Commands take the
//! host's current selection as a parameter and hand back the selection the
//! host should restore.

use serde::{Deserialize, Serialize};

use super::composer::{self, Composition};
use super::cursor::{char_len, SelectionRange};
use super::markup::{EmojiToken, ImageSpec, LinkSpec, MarkupOperation, ToolbarAction};
use crate::errors::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextBuffer {
    content: String,
    /// Hint shown by the host while the buffer is empty
    placeholder: Option<String>,
}

impl TextBuffer {
    /// Create a new empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: impl Into<String>) -> Self {
        Self { content: content.into(), placeholder: None }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// Replace the whole content (the host's own typing)
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Length in characters
    pub fn char_len(&self) -> usize {
        char_len(&self.content)
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn into_content(self) -> String {
        self.content
    }

    fn commit(&mut self, composition: Composition) -> SelectionRange {
        self.content = composition.buffer;
        composition.selection
    }

    pub fn apply_markup(&mut self, selection: SelectionRange, op: &MarkupOperation) -> SelectionRange {
        let composition = composer::apply_markup(&self.content, selection, op);
        self.commit(composition)
    }

    pub fn apply_action(&mut self, selection: SelectionRange, action: ToolbarAction) -> SelectionRange {
        let composition = composer::apply_action(&self.content, selection, action);
        self.commit(composition)
    }

    /// Returns the new caret offset
    pub fn insert_at_caret(&mut self, caret: usize, text: &str) -> usize {
        let composition = composer::insert_at_caret(&self.content, caret, text);
        self.commit(composition).start
    }

    /// Leaves the content untouched when the link is incomplete
    pub fn insert_link(
        &mut self,
        selection: SelectionRange,
        spec: &LinkSpec,
    ) -> Result<usize, ValidationError> {
        let composition = composer::insert_link(&self.content, selection, spec)?;
        Ok(self.commit(composition).start)
    }

    pub fn insert_image(&mut self, caret: usize, spec: &ImageSpec) -> usize {
        let composition = composer::insert_image(&self.content, caret, spec);
        self.commit(composition).start
    }

    pub fn insert_emoji(&mut self, caret: usize, token: &EmojiToken) -> usize {
        let composition = composer::insert_emoji(&self.content, caret, token);
        self.commit(composition).start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_chains_wraps() {
        let mut buffer = TextBuffer::with_content("make this loud").with_placeholder("Write your answer here...");

        let sel = buffer.apply_action(SelectionRange::new(10, 14), ToolbarAction::Bold);
        let sel = buffer.apply_action(sel, ToolbarAction::Italic);

        assert_eq!(buffer.content(), "make this ***loud***");
        assert_eq!(sel.slice(buffer.content()), "loud");
        assert_eq!(buffer.placeholder(), Some("Write your answer here..."));
    }

    #[test]
    fn test_failed_link_does_not_mutate() {
        let mut buffer = TextBuffer::with_content("unchanged");
        let result = buffer.insert_link(SelectionRange::caret(0), &LinkSpec::new("text", ""));

        assert_eq!(result, Err(ValidationError::EmptyLinkUrl));
        assert_eq!(buffer.content(), "unchanged");
    }

    #[test]
    fn test_insertions_return_caret() {
        let mut buffer = TextBuffer::new();
        assert!(buffer.is_empty());

        let caret = buffer.insert_emoji(0, &EmojiToken::new("🔥"));
        let caret = buffer.insert_at_caret(caret, " hot");
        let caret = buffer.insert_image(caret, &ImageSpec::new("a", "b"));

        assert_eq!(buffer.content(), "🔥 hot![a](b)");
        assert_eq!(caret, buffer.char_len());
    }

    #[test]
    fn test_set_content_replaces() {
        let mut buffer = TextBuffer::with_content("old");
        buffer.set_content("new text");
        assert_eq!(buffer.into_content(), "new text");
    }
}
