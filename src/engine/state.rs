//! Player-session crossword state
//!
//! One mutable value threaded through the per-frame transition functions.
//! The generated level itself is immutable; everything the player changes
//! lives here.

use crate::core::LetterState;
use crate::grid::{CrosswordLevel, Direction, GRID_SIZE};

/// Mutable crossword play state for the current level
#[derive(Debug, Clone)]
pub struct CrosswordState {
    /// Player-placed letters (`None` = empty cell)
    pub(crate) grid: [[Option<u8>; GRID_SIZE]; GRID_SIZE],
    /// Per-cell feedback from the last validation touching the cell
    pub(crate) letter_states: [[LetterState; GRID_SIZE]; GRID_SIZE],
    /// Cells that have been through a validation pass
    pub(crate) validated: [[bool; GRID_SIZE]; GRID_SIZE],
    pub cursor_x: usize,
    pub cursor_y: usize,
    pub cursor_direction: Direction,
    pub current_word_index: usize,
    pub should_validate: bool,
    pub puzzle_completed: bool,
}

impl CrosswordState {
    /// Fresh state positioned at the level's first word
    #[must_use]
    pub fn new(level: &CrosswordLevel) -> Self {
        let mut state = Self {
            grid: [[None; GRID_SIZE]; GRID_SIZE],
            letter_states: [[LetterState::Unknown; GRID_SIZE]; GRID_SIZE],
            validated: [[false; GRID_SIZE]; GRID_SIZE],
            cursor_x: 0,
            cursor_y: 0,
            cursor_direction: Direction::Horizontal,
            current_word_index: 0,
            should_validate: false,
            puzzle_completed: false,
        };
        state.reset_for_level(level);
        state
    }

    /// Clear per-level state and re-home the cursor for a new level
    pub fn reset_for_level(&mut self, level: &CrosswordLevel) {
        self.grid = [[None; GRID_SIZE]; GRID_SIZE];
        self.letter_states = [[LetterState::Unknown; GRID_SIZE]; GRID_SIZE];
        self.validated = [[false; GRID_SIZE]; GRID_SIZE];
        self.current_word_index = 0;
        self.should_validate = false;
        self.puzzle_completed = false;

        if let Some(first) = level.words().first() {
            self.cursor_x = first.start_x;
            self.cursor_y = first.start_y;
            self.cursor_direction = first.direction;
        } else {
            self.cursor_x = 0;
            self.cursor_y = 0;
            self.cursor_direction = Direction::Horizontal;
        }
    }

    /// Player letter at (x, y)
    #[must_use]
    pub fn letter_at(&self, x: usize, y: usize) -> Option<u8> {
        if x < GRID_SIZE && y < GRID_SIZE {
            self.grid[x][y]
        } else {
            None
        }
    }

    /// Validation state at (x, y)
    #[must_use]
    pub fn state_at(&self, x: usize, y: usize) -> LetterState {
        if x < GRID_SIZE && y < GRID_SIZE {
            self.letter_states[x][y]
        } else {
            LetterState::Unknown
        }
    }

    /// Whether (x, y) has been through a validation pass
    #[must_use]
    pub fn is_validated(&self, x: usize, y: usize) -> bool {
        x < GRID_SIZE && y < GRID_SIZE && self.validated[x][y]
    }

    /// A cell is locked once validated as correct; locked cells cannot be
    /// edited until the level resets
    #[must_use]
    pub fn is_locked(&self, x: usize, y: usize) -> bool {
        self.is_validated(x, y) && self.state_at(x, y) == LetterState::Correct
    }

    /// Number of letters currently placed on the board
    #[must_use]
    pub fn placed_letters(&self) -> u32 {
        self.grid
            .iter()
            .flatten()
            .filter(|cell| cell.is_some())
            .count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::level_with_word;

    #[test]
    fn new_state_homes_cursor_on_first_word() {
        let level = level_with_word(b"CRANE", 2, 4, Direction::Horizontal);
        let state = CrosswordState::new(&level);

        assert_eq!((state.cursor_x, state.cursor_y), (2, 4));
        assert_eq!(state.cursor_direction, Direction::Horizontal);
        assert_eq!(state.current_word_index, 0);
        assert!(!state.puzzle_completed);
    }

    #[test]
    fn new_state_on_empty_level_defaults_to_origin() {
        let level = CrosswordLevel::empty(1);
        let state = CrosswordState::new(&level);
        assert_eq!((state.cursor_x, state.cursor_y), (0, 0));
    }

    #[test]
    fn reset_clears_everything() {
        let level = level_with_word(b"CRANE", 2, 4, Direction::Horizontal);
        let mut state = CrosswordState::new(&level);

        state.grid[2][4] = Some(b'X');
        state.letter_states[2][4] = LetterState::Absent;
        state.validated[2][4] = true;
        state.puzzle_completed = true;
        state.should_validate = true;

        state.reset_for_level(&level);

        assert_eq!(state.letter_at(2, 4), None);
        assert_eq!(state.state_at(2, 4), LetterState::Unknown);
        assert!(!state.is_validated(2, 4));
        assert!(!state.puzzle_completed);
        assert!(!state.should_validate);
        assert_eq!(state.placed_letters(), 0);
    }

    #[test]
    fn locked_requires_validated_and_correct() {
        let level = level_with_word(b"CRANE", 2, 4, Direction::Horizontal);
        let mut state = CrosswordState::new(&level);

        state.letter_states[2][4] = LetterState::Correct;
        assert!(!state.is_locked(2, 4)); // correct but not validated

        state.validated[2][4] = true;
        assert!(state.is_locked(2, 4));

        state.letter_states[3][4] = LetterState::WrongPosition;
        state.validated[3][4] = true;
        assert!(!state.is_locked(3, 4)); // validated but not correct
    }

    #[test]
    fn out_of_bounds_queries_are_safe() {
        let level = CrosswordLevel::empty(1);
        let state = CrosswordState::new(&level);

        assert_eq!(state.letter_at(GRID_SIZE, 0), None);
        assert!(!state.is_locked(0, GRID_SIZE));
    }
}
