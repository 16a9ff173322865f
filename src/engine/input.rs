//! Per-frame crossword input processing
//!
//! One call per frame with that frame's debounced events. Every operation
//! is a no-op on invalid input (locked cell, empty bag slot, cursor outside
//! the mask) so each tick always produces a valid next state.

use super::bag::LetterBag;
use super::navigation;
use super::state::CrosswordState;
use crate::grid::{CrosswordLevel, Direction, GRID_SIZE};

/// Discrete input events sampled for one frame
///
/// All fields use "pressed this frame" semantics; the input collaborator is
/// responsible for debouncing.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub toggle_direction: bool,
    pub prev_word: bool,
    pub next_word: bool,
    pub up: bool,
    pub down: bool,
    /// A single pressed letter (uppercase A-Z), if any
    pub letter: Option<u8>,
    pub backspace: bool,
    pub commit: bool,
}

impl FrameInput {
    /// A frame with just one letter pressed
    #[must_use]
    pub fn letter(letter: u8) -> Self {
        Self {
            letter: Some(letter),
            ..Self::default()
        }
    }
}

/// Apply one frame of input to the crossword state
pub fn apply(
    state: &mut CrosswordState,
    level: &CrosswordLevel,
    bag: &mut LetterBag,
    input: &FrameInput,
) {
    if input.toggle_direction {
        state.cursor_direction = state.cursor_direction.opposite();
    }

    if input.prev_word {
        cycle_word(state, level, Wrap::Backward);
    }
    if input.next_word {
        cycle_word(state, level, Wrap::Forward);
    }

    if input.up {
        navigate_vertical(state, level, Step::Up);
    }
    if input.down {
        navigate_vertical(state, level, Step::Down);
    }

    if let Some(letter) = input.letter {
        place_letter(state, level, bag, letter);
    }

    if input.backspace {
        delete_letter(state, level, bag);
    }

    if input.commit {
        state.should_validate = true;
    }
}

enum Wrap {
    Forward,
    Backward,
}

/// Select the previous/next word, wrapping, and re-home the cursor
fn cycle_word(state: &mut CrosswordState, level: &CrosswordLevel, wrap: Wrap) {
    let count = level.word_count();
    if count == 0 {
        return;
    }

    state.current_word_index = match wrap {
        Wrap::Forward => (state.current_word_index + 1) % count,
        Wrap::Backward => (state.current_word_index + count - 1) % count,
    };

    let word = level.words()[state.current_word_index];
    state.cursor_direction = word.direction;

    // First editable cell, or the word start if the whole word is locked
    let (x, y) = navigation::first_editable_cell(state, level, state.current_word_index)
        .unwrap_or((word.start_x, word.start_y));
    state.cursor_x = x;
    state.cursor_y = y;
}

enum Step {
    Up,
    Down,
}

/// Move the cursor within a vertical word, skipping locked cells
fn navigate_vertical(state: &mut CrosswordState, level: &CrosswordLevel, step: Step) {
    let Some(&word) = level.words().get(state.current_word_index) else {
        return;
    };
    if word.direction != Direction::Vertical {
        return;
    }

    for i in 1..=word.length {
        let new_y = match step {
            Step::Up => match state.cursor_y.checked_sub(i) {
                Some(y) if y >= word.start_y => y,
                _ => break,
            },
            Step::Down => {
                let y = state.cursor_y + i;
                if y >= word.start_y + word.length {
                    break;
                }
                y
            }
        };

        if !level.is_word_cell(state.cursor_x, new_y) {
            break;
        }
        if !state.is_locked(state.cursor_x, new_y) {
            state.cursor_y = new_y;
            break;
        }
    }
}

/// Place a letter at the cursor, bag-gated, then auto-advance
fn place_letter(state: &mut CrosswordState, level: &CrosswordLevel, bag: &mut LetterBag, letter: u8) {
    if !level.is_word_cell(state.cursor_x, state.cursor_y) {
        return;
    }
    if state.is_locked(state.cursor_x, state.cursor_y) {
        return;
    }

    // No token for this letter: placement is a no-op
    if !bag.take(letter) {
        return;
    }

    // Any letter already in the cell goes back to the bag
    if let Some(existing) = state.grid[state.cursor_x][state.cursor_y] {
        bag.put(existing);
    }
    state.grid[state.cursor_x][state.cursor_y] = Some(letter);

    advance_cursor(state, level);
}

/// Move the cursor to the next unlocked cell along the current word
///
/// Stays put when the rest of the word is locked or the end is reached.
fn advance_cursor(state: &mut CrosswordState, level: &CrosswordLevel) {
    let Some(&word) = level.words().get(state.current_word_index) else {
        return;
    };

    for i in 1..word.length {
        let (next_x, next_y) = word.direction.step(state.cursor_x, state.cursor_y, i);

        let within_word = match word.direction {
            Direction::Horizontal => next_x < word.start_x + word.length,
            Direction::Vertical => next_y < word.start_y + word.length,
        };
        if !within_word {
            break;
        }

        if next_x < GRID_SIZE
            && next_y < GRID_SIZE
            && level.is_word_cell(next_x, next_y)
            && !state.is_locked(next_x, next_y)
        {
            state.cursor_x = next_x;
            state.cursor_y = next_y;
            break;
        }
    }
}

/// Direction-aware deletion
///
/// A locked cursor cell refuses deletion outright. A filled cell is cleared
/// in place; an empty cell deletes the nearest unlocked letter behind it
/// and pulls the cursor there.
fn delete_letter(state: &mut CrosswordState, level: &CrosswordLevel, bag: &mut LetterBag) {
    if !level.is_word_cell(state.cursor_x, state.cursor_y) {
        return;
    }
    if state.is_locked(state.cursor_x, state.cursor_y) {
        return;
    }

    if let Some(existing) = state.grid[state.cursor_x][state.cursor_y] {
        bag.put(existing);
        state.grid[state.cursor_x][state.cursor_y] = None;
    } else if let Some((x, y)) =
        navigation::previous_filled_editable(state, level, state.cursor_x, state.cursor_y)
    {
        if let Some(behind) = state.grid[x][y] {
            bag.put(behind);
            state.grid[x][y] = None;
        }
        state.cursor_x = x;
        state.cursor_y = y;
    }
}
