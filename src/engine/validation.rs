//! Word validation and puzzle completion
//!
//! Runs when the one-shot `should_validate` flag is set. The word under the
//! cursor is located by walking backwards along the cursor direction, scored
//! with Wordle semantics, and its cells marked validated. A fully correct
//! word triggers the whole-board completion check.

use super::navigation;
use super::state::CrosswordState;
use crate::core::{Feedback, WORD_LEN};
use crate::grid::{CrosswordLevel, GRID_SIZE};

/// Result of one validation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Flag not set, cursor outside a full word, or the span is not fully
    /// filled — nothing was validated
    Skipped,
    /// Word validated but at least one letter is wrong
    Incorrect,
    /// Word fully correct; other words remain
    WordSolved,
    /// Word fully correct and every mask cell now matches the solution
    PuzzleCompleted,
}

/// Run a validation pass if one is pending
///
/// Always clears the `should_validate` flag.
pub fn run(state: &mut CrosswordState, level: &CrosswordLevel) -> ValidationOutcome {
    if !state.should_validate {
        return ValidationOutcome::Skipped;
    }
    state.should_validate = false;

    let Some((start_x, start_y)) = find_word_start(state, level) else {
        return ValidationOutcome::Skipped;
    };

    // Extract the guess and solution spans; bail on a short or partial span
    let mut guess = [0u8; WORD_LEN];
    let mut solution = [0u8; WORD_LEN];
    for i in 0..WORD_LEN {
        let (x, y) = state.cursor_direction.step(start_x, start_y, i);
        if !level.is_word_cell(x, y) {
            return ValidationOutcome::Skipped;
        }
        let (Some(placed), Some(expected)) = (state.letter_at(x, y), level.solution_at(x, y))
        else {
            // Partial words are never validated
            return ValidationOutcome::Skipped;
        };
        guess[i] = placed;
        solution[i] = expected;
    }

    let feedback = Feedback::score_letters(&guess, &solution);

    // Record per-cell states; every cell in the span counts as validated,
    // but only CORRECT cells become locked
    for (i, &letter_state) in feedback.states().iter().enumerate() {
        let (x, y) = state.cursor_direction.step(start_x, start_y, i);
        state.letter_states[x][y] = letter_state;
        state.validated[x][y] = true;
    }

    if feedback.is_perfect() {
        if board_complete(state, level) {
            state.puzzle_completed = true;
            return ValidationOutcome::PuzzleCompleted;
        }

        // Move on to the next word that still needs work
        let next_index = navigation::next_incomplete_word(state, level);
        if let Some((x, y)) = navigation::first_editable_cell(state, level, next_index) {
            state.current_word_index = next_index;
            state.cursor_x = x;
            state.cursor_y = y;
            state.cursor_direction = level.words()[next_index].direction;
        }
        ValidationOutcome::WordSolved
    } else {
        // Retry: re-home the cursor on the current word
        if let Some((x, y)) =
            navigation::first_editable_cell(state, level, state.current_word_index)
        {
            state.cursor_x = x;
            state.cursor_y = y;
        }
        ValidationOutcome::Incorrect
    }
}

/// Walk backwards from the cursor along its direction to the word's start
///
/// Returns `None` when the cursor is not on a word cell at all.
fn find_word_start(state: &CrosswordState, level: &CrosswordLevel) -> Option<(usize, usize)> {
    if !level.is_word_cell(state.cursor_x, state.cursor_y) {
        return None;
    }

    let mut x = state.cursor_x;
    let mut y = state.cursor_y;
    while let Some((px, py)) = state.cursor_direction.step_back(x, y, 1) {
        if !level.is_word_cell(px, py) {
            break;
        }
        x = px;
        y = py;
    }
    Some((x, y))
}

/// Whether every mask cell holds its solution letter
fn board_complete(state: &CrosswordState, level: &CrosswordLevel) -> bool {
    for x in 0..GRID_SIZE {
        for y in 0..GRID_SIZE {
            if level.is_word_cell(x, y) && state.letter_at(x, y) != level.solution_at(x, y) {
                return false;
            }
        }
    }
    true
}
