//! Crossword play engine
//!
//! Pure state transitions over a generated [`CrosswordLevel`]: per-frame
//! input handling, cursor navigation, the shared letter bag, and word
//! validation. The engine never generates levels and never performs I/O;
//! the session layer owns both.
//!
//! [`CrosswordLevel`]: crate::grid::CrosswordLevel

mod bag;
mod input;
mod navigation;
mod state;
mod validation;

pub use bag::LetterBag;
pub use input::{FrameInput, apply};
pub use navigation::{first_editable_cell, next_incomplete_word, previous_filled_editable};
pub use state::CrosswordState;
pub use validation::{ValidationOutcome, run as validate};
