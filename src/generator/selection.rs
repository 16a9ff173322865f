//! Word selection for crossword generation
//!
//! Picks words with unique starting letters that are guaranteed to be
//! connectable (every word past the first shares at least one letter with a
//! previously selected word). A bounded fallback relaxes the
//! unique-starting-letter rule when the primary pass comes up short, so
//! selection always terminates even on tiny or homogeneous dictionaries.

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Attempt budget for each word in the primary selection pass
const MAX_ATTEMPTS_PER_WORD: usize = 500;

/// Attempt budget for the whole fallback sampling pass
const MAX_FALLBACK_ATTEMPTS: usize = 1000;

/// Select up to `count` connectable words from the dictionary
///
/// Best-effort: the returned set may be smaller than requested. Never loops
/// unbounded; both passes run under fixed attempt budgets.
pub(crate) fn select_words<'a, R: Rng>(
    rng: &mut R,
    dictionary: &'a [Word],
    count: usize,
) -> Vec<&'a Word> {
    let mut selected = select_with_unique_starting_letters(rng, dictionary, count);

    // Fallback: random sampling, starting letters may repeat but
    // connectivity is still required
    if selected.len() < count && !selected.is_empty() && !dictionary.is_empty() {
        let mut attempts = 0;
        while selected.len() < count && attempts < MAX_FALLBACK_ATTEMPTS {
            attempts += 1;
            let candidate = &dictionary[rng.random_range(0..dictionary.len())];

            if selected.iter().any(|w| w.text() == candidate.text()) {
                continue;
            }

            if selected.iter().any(|w| w.shares_letter_with(candidate)) {
                selected.push(candidate);
            }
        }
    }

    selected
}

/// Primary pass: unique starting letters plus the connectivity constraint
fn select_with_unique_starting_letters<'a, R: Rng>(
    rng: &mut R,
    dictionary: &'a [Word],
    count: usize,
) -> Vec<&'a Word> {
    let mut used_letters = [false; 26];
    let mut selected: Vec<&Word> = Vec::with_capacity(count);

    // First word: any unused starting letter, no connectivity constraint
    if count > 0 {
        let mut attempts = 0;
        while selected.is_empty() && attempts < MAX_ATTEMPTS_PER_WORD {
            attempts += 1;
            let target = b'A' + rng.random_range(0..26u8);
            if used_letters[(target - b'A') as usize] {
                continue;
            }

            let starting_with: Vec<&Word> = dictionary
                .iter()
                .filter(|w| w.first_letter() == target)
                .collect();

            if let Some(&word) = starting_with.choose(rng) {
                used_letters[(target - b'A') as usize] = true;
                selected.push(word);
            }
        }
    }

    // Subsequent words must share a letter with something already selected
    while selected.len() < count {
        let mut word_found = false;
        let mut attempts = 0;

        while !word_found && attempts < MAX_ATTEMPTS_PER_WORD {
            attempts += 1;
            let target = b'A' + rng.random_range(0..26u8);
            if used_letters[(target - b'A') as usize] {
                continue;
            }

            for candidate in dictionary.iter().filter(|w| w.first_letter() == target) {
                let can_connect = selected.iter().any(|w| w.shares_letter_with(candidate));
                if can_connect {
                    used_letters[(target - b'A') as usize] = true;
                    selected.push(candidate);
                    word_found = true;
                    break;
                }
            }
        }

        if !word_found {
            break;
        }
    }

    selected
}
