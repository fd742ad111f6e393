//! Utility modules for the Q&A board
//!
//! This module contains small helpers shared by the board records and the
//! JavaScript-facing API.

pub mod time;

// Re-export commonly used helpers
pub use time::format_time_ago;
