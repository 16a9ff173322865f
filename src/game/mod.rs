//! Game session layer
//!
//! Ties the generator, the crossword engine, and the Wordle mode together
//! behind a single per-player state value.

mod session;

pub use session::{FIRST_LEVEL_WORDS, GameSession, GameView, SessionError};
