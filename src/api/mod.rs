//! Q&A Board WASM API
//!
//! This module provides the JavaScript-facing API for the board front end.
//! Every function here is a thin shell over the pure core: it converts
//! offsets and values at the boundary, logs, and maps errors to `JsValue`.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error handling, and logging
//! - `types`: Result types handed back to JavaScript
//! - `position`: UTF-16 / char offset conversion
//! - `composer`: Rich-text toolbar operations
//! - `votes`: Vote overlay and answer acceptance
//! - `question`: Tag editing, draft validation, relative time
//! - `config`: Board configuration

pub mod helpers;
pub mod types;
pub mod position;
pub mod composer;
pub mod votes;
pub mod question;
pub mod config;

// Re-export all public functions to keep a flat API surface
pub use composer::{
    apply_markup, apply_toolbar_action, get_emoji_palette, get_toolbar_actions, insert_at_caret,
    insert_emoji, insert_image, insert_link,
};
pub use config::{configure_board, get_board_config};
pub use position::{char_to_utf16_offset, utf16_to_char_offset};
pub use question::{add_tag, format_time_ago, get_popular_tags, remove_tag, validate_question_draft};
pub use types::{ComposeResult, VoteResult};
pub use votes::{accept_answer, get_answer_views, prune_vote_overlay, toggle_answer_vote, toggle_vote};
