//! Models module for the Q&A board
//!
//! This module contains the board records and the vote/acceptance state
//! machine that operates on them.

pub mod answer;
pub mod question;
pub mod vote;

// Re-export commonly used types
pub use answer::{accept_answer, accepted_answer, Answer, AnswerId};
pub use question::{Question, QuestionDraft, QuestionId, TagSet, MAX_TAGS};
pub use vote::{answer_views, display_votes, toggle_vote, AnswerView, VoteDirection, VoteOverlay, VoteState};
