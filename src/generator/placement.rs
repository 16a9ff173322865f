//! Word placement on the crossword board
//!
//! Placement is first-fit: candidate intersections are tried in order and
//! the first one that passes the can-place test is committed. There is no
//! backtracking over placement order.

use crate::core::{WORD_LEN, Word};
use crate::grid::{CrosswordLevel, CrosswordWord, Direction};

/// A word committed to the board during generation
///
/// Transient: discarded once the level's placement records are built.
#[derive(Debug, Clone)]
pub(crate) struct PlacedWord {
    pub word: Word,
    pub start_x: usize,
    pub start_y: usize,
    pub direction: Direction,
}

impl PlacedWord {
    pub(crate) const fn placement(&self) -> CrosswordWord {
        CrosswordWord {
            start_x: self.start_x,
            start_y: self.start_y,
            direction: self.direction,
            length: WORD_LEN,
        }
    }
}

/// All index pairs (i, j) where `placed.letters[i] == candidate.letters[j]`
pub(crate) fn find_intersections(placed: &Word, candidate: &Word) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (i, &ch) in placed.letters().iter().enumerate() {
        for &j in candidate.positions_of(ch) {
            pairs.push((i, j));
        }
    }
    pairs
}

/// Test whether `word` fits at (start_x, start_y) along `direction`
///
/// The span must stay within the usable width/height and every cell it
/// covers must be empty or already hold the identical letter.
pub(crate) fn can_place(
    level: &CrosswordLevel,
    width: usize,
    height: usize,
    word: &Word,
    start_x: usize,
    start_y: usize,
    direction: Direction,
) -> bool {
    let (end_x, end_y) = direction.step(start_x, start_y, WORD_LEN - 1);
    if end_x >= width || end_y >= height {
        return false;
    }

    for (i, &letter) in word.letters().iter().enumerate() {
        let (x, y) = direction.step(start_x, start_y, i);
        if let Some(existing) = level.solution_at(x, y)
            && existing != letter
        {
            return false;
        }
    }

    true
}

/// Commit a word: write its letters into the solution and mark the mask
pub(crate) fn place(
    level: &mut CrosswordLevel,
    word: &Word,
    start_x: usize,
    start_y: usize,
    direction: Direction,
) {
    for (i, &letter) in word.letters().iter().enumerate() {
        let (x, y) = direction.step(start_x, start_y, i);
        level.set_cell(x, y, letter);
    }
}

/// Compute the start cell for `candidate` crossing `placed` at pair (i, j)
///
/// The new word runs perpendicular to the placed one, passing through the
/// placed word's i-th cell with its own j-th letter. Returns `None` when the
/// start would fall off the top or left edge.
pub(crate) fn crossing_start(
    placed: &PlacedWord,
    i: usize,
    j: usize,
) -> Option<(usize, usize, Direction)> {
    let (ix, iy) = placed.direction.step(placed.start_x, placed.start_y, i);
    let new_direction = placed.direction.opposite();
    let (sx, sy) = new_direction.step_back(ix, iy, j)?;
    Some((sx, sy, new_direction))
}
