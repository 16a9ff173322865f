//! Core domain types for the word game
//!
//! This module contains the fundamental domain types with zero external state.
//! All types here are pure, testable, and have clear semantics.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterState};
pub use word::{WORD_LEN, Word, WordError};
