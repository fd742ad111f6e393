//! Q&A Board WASM Module
//!
//! Core of the Q&A board front end: a selection-aware markup composer for
//! question and answer bodies, and the per-answer vote/acceptance model.
//! Everything else in the front end is display glue around these two.

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod text;
pub mod utils;

// Re-export commonly used types
pub use errors::{BoardError, NotFoundError, ValidationError};
pub use models::{Answer, AnswerId, Question, QuestionDraft, TagSet, VoteDirection, VoteOverlay, VoteState};
pub use text::{Composition, SelectionRange, TextBuffer, ToolbarAction};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    #[cfg(feature = "console_log")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            crate::wasm_warn!("Logger already initialized: {}", e);
        }
    }

    log::info!("Q&A board WASM module initialized");
}
