//! Crossword grid types
//!
//! A level is a fixed 9x9 board: a solution grid of letters plus a parallel
//! mask marking which cells belong to a word. Empty cells are `None` rather
//! than a sentinel character, so "is this a word cell" is always an explicit
//! predicate.

use crate::core::WORD_LEN;

/// Side length of the (square) crossword board
pub const GRID_SIZE: usize = 9;

/// Orientation of a placed word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Horizontal,
    Vertical,
}

impl Direction {
    /// The perpendicular orientation
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Per-step (dx, dy) offset along this orientation
    #[must_use]
    pub const fn delta(self) -> (usize, usize) {
        match self {
            Self::Horizontal => (1, 0),
            Self::Vertical => (0, 1),
        }
    }

    /// The cell `steps` cells along this orientation from (x, y)
    #[must_use]
    pub const fn step(self, x: usize, y: usize, steps: usize) -> (usize, usize) {
        let (dx, dy) = self.delta();
        (x + dx * steps, y + dy * steps)
    }

    /// The cell `steps` cells backwards from (x, y), if in bounds
    #[must_use]
    pub const fn step_back(self, x: usize, y: usize, steps: usize) -> Option<(usize, usize)> {
        match self {
            Self::Horizontal => match x.checked_sub(steps) {
                Some(nx) => Some((nx, y)),
                None => None,
            },
            Self::Vertical => match y.checked_sub(steps) {
                Some(ny) => Some((x, ny)),
                None => None,
            },
        }
    }
}

/// Placement record for one word in a generated level
///
/// Immutable once the level is built; the letters themselves live in the
/// level's solution grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrosswordWord {
    pub start_x: usize,
    pub start_y: usize,
    pub direction: Direction,
    pub length: usize,
}

impl CrosswordWord {
    /// The i-th cell along the word's span
    #[must_use]
    pub const fn cell(&self, i: usize) -> (usize, usize) {
        self.direction.step(self.start_x, self.start_y, i)
    }

    /// Whether (x, y) lies on the word's span
    #[must_use]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        (0..self.length).any(|i| self.cell(i) == (x, y))
    }
}

/// A generated crossword puzzle
///
/// Invariant: a mask cell is true iff the solution holds a letter at the
/// same coordinates. Both arrays are written together during placement.
#[derive(Debug, Clone)]
pub struct CrosswordLevel {
    solution: [[Option<u8>; GRID_SIZE]; GRID_SIZE],
    word_mask: [[bool; GRID_SIZE]; GRID_SIZE],
    level: u32,
    words: Vec<CrosswordWord>,
}

impl CrosswordLevel {
    /// Create an empty level with the given level number
    #[must_use]
    pub fn empty(level: u32) -> Self {
        Self {
            solution: [[None; GRID_SIZE]; GRID_SIZE],
            word_mask: [[false; GRID_SIZE]; GRID_SIZE],
            level,
            words: Vec::new(),
        }
    }

    /// Level number (1-based)
    #[must_use]
    pub const fn level(&self) -> u32 {
        self.level
    }

    pub(crate) fn set_level(&mut self, level: u32) {
        self.level = level;
    }

    /// Solution letter at (x, y), `None` outside any word
    #[must_use]
    pub fn solution_at(&self, x: usize, y: usize) -> Option<u8> {
        if x < GRID_SIZE && y < GRID_SIZE {
            self.solution[x][y]
        } else {
            None
        }
    }

    /// Whether (x, y) belongs to some word (out of bounds counts as not)
    #[must_use]
    pub fn is_word_cell(&self, x: usize, y: usize) -> bool {
        x < GRID_SIZE && y < GRID_SIZE && self.word_mask[x][y]
    }

    /// Placement records for every word in the level
    #[must_use]
    pub fn words(&self) -> &[CrosswordWord] {
        &self.words
    }

    /// Number of words actually placed (may be less than requested)
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Check the mask/solution consistency invariant over every cell
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        (0..GRID_SIZE).all(|x| {
            (0..GRID_SIZE).all(|y| self.word_mask[x][y] == self.solution[x][y].is_some())
        })
    }

    /// Write one letter into the solution and mark the mask
    pub(crate) fn set_cell(&mut self, x: usize, y: usize, letter: u8) {
        if x < GRID_SIZE && y < GRID_SIZE {
            self.solution[x][y] = Some(letter);
            self.word_mask[x][y] = true;
        }
    }

    /// Record a placed word's span
    pub(crate) fn push_word(&mut self, word: CrosswordWord) {
        self.words.push(word);
    }
}

/// Build a one-word test level; only compiled for tests
#[cfg(test)]
pub(crate) fn level_with_word(
    letters: &[u8; WORD_LEN],
    start_x: usize,
    start_y: usize,
    direction: Direction,
) -> CrosswordLevel {
    let mut level = CrosswordLevel::empty(1);
    for (i, &ch) in letters.iter().enumerate() {
        let (x, y) = direction.step(start_x, start_y, i);
        level.set_cell(x, y, ch);
    }
    level.push_word(CrosswordWord {
        start_x,
        start_y,
        direction,
        length: WORD_LEN,
    });
    level
}
