//! Shared types for the WASM API
//!
//! This module contains the result types handed back to JavaScript. Offsets
//! in these types are UTF-16 code units, ready for `setSelectionRange`.

use crate::api::position::selection_to_utf16;
use crate::models::{VoteOverlay, VoteState};
use crate::text::Composition;

/// Result of a composer operation
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ComposeResult {
    /// New textarea value
    pub buffer: String,
    /// Selection to restore after focusing the textarea
    pub selection_start: usize,
    pub selection_end: usize,
}

impl From<Composition> for ComposeResult {
    fn from(composition: Composition) -> Self {
        let (selection_start, selection_end) = selection_to_utf16(&composition.buffer, composition.selection);
        Self {
            buffer: composition.buffer,
            selection_start,
            selection_end,
        }
    }
}

/// Result of a vote click
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug)]
pub struct VoteResult {
    pub overlay: VoteOverlay,
    pub state: VoteState,
}
