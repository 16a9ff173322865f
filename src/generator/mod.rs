//! Crossword generation
//!
//! Builds a `CrosswordLevel` from a dictionary: selects connectable words,
//! places the first one centered horizontally, then hangs each later word
//! off an existing one at a shared letter. Generation is best-effort — a
//! word that cannot be placed is dropped silently and the level simply
//! contains fewer words. Shortfall is never an error.

mod placement;
mod selection;

use crate::core::{WORD_LEN, Word};
use crate::grid::{CrosswordLevel, Direction, GRID_SIZE};
use placement::PlacedWord;
use rand::Rng;

/// Hard cap on words per level
pub const MAX_WORDS: usize = 10;

/// Word cap applied to a full 9x9 board to avoid overcrowding
pub const MAX_WORDS_FULL_BOARD: usize = 6;

/// Generate a level on the full 9x9 board
pub fn generate<R: Rng>(rng: &mut R, dictionary: &[Word], word_count: usize) -> CrosswordLevel {
    generate_sized(rng, dictionary, word_count, GRID_SIZE, GRID_SIZE)
}

/// Generate a level on a board of up to 9x9 usable cells
///
/// Clamps: `word_count` to 10 (6 on a full 9x9 board), dimensions to 9.
/// The returned level may hold fewer words than requested.
pub fn generate_sized<R: Rng>(
    rng: &mut R,
    dictionary: &[Word],
    word_count: usize,
    width: usize,
    height: usize,
) -> CrosswordLevel {
    let width = width.min(GRID_SIZE);
    let height = height.min(GRID_SIZE);
    let mut word_count = word_count.min(MAX_WORDS);
    if width == GRID_SIZE && height == GRID_SIZE {
        word_count = word_count.min(MAX_WORDS_FULL_BOARD);
    }

    let mut level = CrosswordLevel::empty(1);
    let selected = selection::select_words(rng, dictionary, word_count);

    let mut placed: Vec<PlacedWord> = Vec::with_capacity(selected.len());

    // First word goes horizontally, centered
    if let Some(&first) = selected.first() {
        let start_x = (width.saturating_sub(WORD_LEN)) / 2;
        let start_y = height / 2;

        if placement::can_place(
            &level,
            width,
            height,
            first,
            start_x,
            start_y,
            Direction::Horizontal,
        ) {
            placement::place(&mut level, first, start_x, start_y, Direction::Horizontal);
            placed.push(PlacedWord {
                word: first.clone(),
                start_x,
                start_y,
                direction: Direction::Horizontal,
            });
        }
    }

    // Each later word crosses an already-placed one; first fit wins
    for &candidate in selected.iter().skip(1) {
        if let Some(record) = try_place_crossing(&mut level, width, height, &placed, candidate) {
            placed.push(record);
        }
        // No fit found across any partner: drop the word
    }

    for record in &placed {
        level.push_word(record.placement());
    }

    level
}

/// Try every (placed word, intersection) pair for `candidate`
///
/// Commits the first candidate placement that passes the can-place test and
/// returns its record; `None` if nothing fits anywhere.
fn try_place_crossing(
    level: &mut CrosswordLevel,
    width: usize,
    height: usize,
    placed: &[PlacedWord],
    candidate: &Word,
) -> Option<PlacedWord> {
    for partner in placed {
        for (i, j) in placement::find_intersections(&partner.word, candidate) {
            let Some((start_x, start_y, direction)) = placement::crossing_start(partner, i, j)
            else {
                continue;
            };

            if placement::can_place(level, width, height, candidate, start_x, start_y, direction) {
                placement::place(level, candidate, start_x, start_y, direction);
                return Some(PlacedWord {
                    word: candidate.clone(),
                    start_x,
                    start_y,
                    direction,
                });
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dict(words: &[&str]) -> Vec<Word> {
        words.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn two_word_dictionary_places_both() {
        // APPLE and ELBOW share E (and L); both must land on the board
        let dictionary = dict(&["apple", "elbow"]);

        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let level = generate(&mut rng, &dictionary, 2);

            assert_eq!(level.word_count(), 2, "seed {seed}");
            assert!(level.is_consistent());

            // The two words run perpendicular and share exactly one cell
            let words = level.words();
            assert_ne!(words[0].direction, words[1].direction);
            let shared: Vec<_> = (0..words[0].length)
                .map(|i| words[0].cell(i))
                .filter(|&(x, y)| words[1].contains(x, y))
                .collect();
            assert_eq!(shared.len(), 1, "seed {seed}");
        }
    }

    #[test]
    fn word_count_clamped_on_full_board() {
        let dictionary = dict(&[
            "apple", "elbow", "crane", "bread", "dream", "early", "grape", "lemon", "melon",
            "night", "tiger",
        ]);
        let mut rng = StdRng::seed_from_u64(42);

        let level = generate(&mut rng, &dictionary, 25);
        assert!(level.word_count() <= MAX_WORDS_FULL_BOARD);
    }

    #[test]
    fn mask_matches_solution_across_seeds() {
        let dictionary = dict(&[
            "apple", "elbow", "crane", "bread", "dream", "early", "grape", "lemon",
        ]);

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let level = generate(&mut rng, &dictionary, 5);
            assert!(level.is_consistent(), "seed {seed}");
        }
    }

    #[test]
    fn placements_agree_on_shared_cells() {
        let dictionary = dict(&[
            "apple", "elbow", "crane", "bread", "dream", "early", "grape", "lemon",
        ]);

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let level = generate(&mut rng, &dictionary, 6);

            // Every word's span must be masked and hold a letter
            for word in level.words() {
                for i in 0..word.length {
                    let (x, y) = word.cell(i);
                    assert!(level.is_word_cell(x, y), "seed {seed}");
                    assert!(level.solution_at(x, y).is_some(), "seed {seed}");
                }
            }
        }
    }

    #[test]
    fn unconnectable_words_are_dropped() {
        // FUZZY and TRAIN can never interlock
        let dictionary = dict(&["fuzzy", "train"]);
        let mut rng = StdRng::seed_from_u64(9);

        let level = generate(&mut rng, &dictionary, 2);
        assert_eq!(level.word_count(), 1);
        assert!(level.is_consistent());
    }

    #[test]
    fn empty_dictionary_yields_empty_level() {
        let dictionary: Vec<Word> = Vec::new();
        let mut rng = StdRng::seed_from_u64(1);

        let level = generate(&mut rng, &dictionary, 4);
        assert_eq!(level.word_count(), 0);
        assert!(level.is_consistent());
    }

    #[test]
    fn zero_words_requested() {
        let dictionary = dict(&["apple"]);
        let mut rng = StdRng::seed_from_u64(1);

        let level = generate(&mut rng, &dictionary, 0);
        assert_eq!(level.word_count(), 0);
    }

    #[test]
    fn first_word_is_horizontal_and_centered() {
        let dictionary = dict(&["apple"]);
        let mut rng = StdRng::seed_from_u64(2);

        let level = generate(&mut rng, &dictionary, 1);
        assert_eq!(level.word_count(), 1);

        let first = level.words()[0];
        assert_eq!(first.direction, Direction::Horizontal);
        assert_eq!(first.start_x, (GRID_SIZE - WORD_LEN) / 2);
        assert_eq!(first.start_y, GRID_SIZE / 2);
    }

    #[test]
    fn reduced_board_respects_dimension_clamp() {
        let dictionary = dict(&["apple", "elbow"]);
        let mut rng = StdRng::seed_from_u64(4);

        // Dimensions above 9 clamp back down to the 9x9 board
        let level = generate_sized(&mut rng, &dictionary, 2, 30, 30);
        assert!(level.is_consistent());
        for word in level.words() {
            let (end_x, end_y) = word.cell(word.length - 1);
            assert!(end_x < GRID_SIZE && end_y < GRID_SIZE);
        }
    }
}
