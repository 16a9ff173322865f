//! Guess feedback calculation and representation
//!
//! Scoring follows standard Wordle rules with duplicate-letter accounting:
//! exact matches consume a letter from the answer's pool before any
//! wrong-position matches are awarded. Both the Wordle board and the
//! crossword validation pass store these states per cell.

use super::word::{WORD_LEN, Word};

/// Per-letter validation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LetterState {
    /// Cell has not been validated yet
    #[default]
    Unknown,
    /// Letter matches the solution at this position
    Correct,
    /// Letter appears in the solution word at a different position
    WrongPosition,
    /// Letter does not appear in the solution word
    Absent,
}

/// Feedback for a full 5-letter guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback([LetterState; WORD_LEN]);

impl Feedback {
    /// All-correct feedback (solved word)
    pub const PERFECT: Self = Self([LetterState::Correct; WORD_LEN]);

    /// Score a guess against an answer, both given as raw letter arrays
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the answer's
    ///    available letter pool
    /// 2. Second pass: mark present-but-misplaced letters from the remaining
    ///    pool, everything else is absent
    #[must_use]
    pub fn score_letters(guess: &[u8; WORD_LEN], answer: &[u8; WORD_LEN]) -> Self {
        let mut states = [LetterState::Absent; WORD_LEN];
        let mut available = [0u8; 26];

        for &ch in answer {
            if ch.is_ascii_uppercase() {
                available[(ch - b'A') as usize] += 1;
            }
        }

        // First pass: exact matches consume from the pool
        for i in 0..WORD_LEN {
            if guess[i] == answer[i] {
                states[i] = LetterState::Correct;
                if guess[i].is_ascii_uppercase() {
                    let slot = (guess[i] - b'A') as usize;
                    available[slot] = available[slot].saturating_sub(1);
                }
            }
        }

        // Second pass: wrong-position matches from what's left
        for i in 0..WORD_LEN {
            if states[i] == LetterState::Correct || !guess[i].is_ascii_uppercase() {
                continue;
            }
            let slot = (guess[i] - b'A') as usize;
            if available[slot] > 0 {
                states[i] = LetterState::WrongPosition;
                available[slot] -= 1;
            }
        }

        Self(states)
    }

    /// Score a guess `Word` against an answer `Word`
    ///
    /// # Examples
    /// ```
    /// use gridword::core::{Feedback, LetterState, Word};
    ///
    /// let guess = Word::new("crate").unwrap();
    /// let answer = Word::new("crane").unwrap();
    /// let feedback = Feedback::score(&guess, &answer);
    ///
    /// // C R A match, T is absent, E matches
    /// assert_eq!(feedback.state_at(3), LetterState::Absent);
    /// assert_eq!(feedback.state_at(4), LetterState::Correct);
    /// ```
    #[must_use]
    pub fn score(guess: &Word, answer: &Word) -> Self {
        Self::score_letters(guess.letters(), answer.letters())
    }

    /// Get all five per-letter states
    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[LetterState; WORD_LEN] {
        &self.0
    }

    /// Get the state at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn state_at(&self, position: usize) -> LetterState {
        self.0[position]
    }

    /// Check if every letter is correct (solved word)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&s| s == LetterState::Correct)
    }

    /// Count the correct letters
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0
            .iter()
            .filter(|&&s| s == LetterState::Correct)
            .count()
    }
}
