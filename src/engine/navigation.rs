//! Cursor navigation helpers
//!
//! All helpers are total: "no valid destination" is a `None`/fallback
//! return, never an error. Locked means validated-correct; cells validated
//! as wrong-position or absent stay editable.

use super::state::CrosswordState;
use crate::grid::CrosswordLevel;

/// First cell in a word that is not locked
///
/// Returns `None` for an out-of-range word index or a fully locked word.
#[must_use]
pub fn first_editable_cell(
    state: &CrosswordState,
    level: &CrosswordLevel,
    word_index: usize,
) -> Option<(usize, usize)> {
    let word = level.words().get(word_index)?;

    (0..word.length)
        .map(|i| word.cell(i))
        .find(|&(x, y)| !state.is_locked(x, y))
}

/// Next word (searching forward from the current one, wrapping) that still
/// has at least one editable cell
///
/// Falls back to the current index when every word is fully locked.
#[must_use]
pub fn next_incomplete_word(state: &CrosswordState, level: &CrosswordLevel) -> usize {
    let count = level.word_count();
    if count == 0 {
        return state.current_word_index;
    }

    for offset in 1..=count {
        let index = (state.current_word_index + offset) % count;
        if first_editable_cell(state, level, index).is_some() {
            return index;
        }
    }

    state.current_word_index
}

/// Nearest cell behind the cursor (along the current word) that holds a
/// letter and is not locked — the smart-backspace target
#[must_use]
pub fn previous_filled_editable(
    state: &CrosswordState,
    level: &CrosswordLevel,
    from_x: usize,
    from_y: usize,
) -> Option<(usize, usize)> {
    let word = level.words().get(state.current_word_index)?;

    for steps in 1..word.length {
        let (x, y) = word.direction.step_back(from_x, from_y, steps)?;

        // Stop at the word boundary
        match word.direction {
            crate::grid::Direction::Horizontal if x < word.start_x => return None,
            crate::grid::Direction::Vertical if y < word.start_y => return None,
            _ => {}
        }

        if level.is_word_cell(x, y) && state.letter_at(x, y).is_some() && !state.is_locked(x, y) {
            return Some((x, y));
        }
    }

    None
}
