//! Selection-aware text composer
//!
//! Pure text transformation for markup insertion, with no knowledge of how
//! the host renders or focuses its input surface.
//!
//! ## Modules
//!
//! - `cursor`: Selection ranges and char offset helpers
//! - `markup`: Markup templates, toolbar actions and insertion payloads
//! - `composer`: The pure wrap/insert operations
//! - `buffer`: Buffer owned by a single editing session

pub mod buffer;
pub mod composer;
pub mod cursor;
pub mod markup;

// Re-exports for convenience
pub use buffer::TextBuffer;
pub use composer::{
    apply_action, apply_markup, insert_at_caret, insert_emoji, insert_image, insert_link,
    Composition,
};
pub use cursor::SelectionRange;
pub use markup::{Alignment, EmojiToken, ImageSpec, LinkSpec, MarkupOperation, ToolbarAction};
