//! Wordle guessing mode
//!
//! The producer side of the letter-token economy: each solved level deposits
//! one random letter from the target word into the shared [`LetterBag`].
//! Guessing is unlimited; levels only ever end in a solve.
//!
//! [`LetterBag`]: crate::engine::LetterBag

use rand::Rng;

use crate::core::{Feedback, WORD_LEN, Word};
use crate::engine::LetterBag;

/// Guess rows kept in the per-level history
pub const MAX_LEVEL_GUESSES: usize = 20;

/// One scored guess
#[derive(Debug, Clone, Copy)]
pub struct GuessRow {
    letters: [u8; WORD_LEN],
    feedback: Feedback,
}

impl GuessRow {
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LEN] {
        &self.letters
    }

    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

/// Whether the mode is accepting guesses or waiting on a level advance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Input,
    LevelComplete,
}

/// Lifetime statistics across solved levels
#[derive(Debug, Clone, Default)]
pub struct GameStats {
    pub levels_completed: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    pub total_guesses: u32,
    /// Fewest guesses any level took; `None` until the first solve
    pub best_level_score: Option<u32>,
}

impl GameStats {
    /// Mean guesses per completed level (0.0 before the first solve)
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        if self.levels_completed == 0 {
            0.0
        } else {
            f64::from(self.total_guesses) / f64::from(self.levels_completed)
        }
    }

    fn record_solve(&mut self, guesses_this_level: u32) {
        self.levels_completed += 1;
        self.current_streak += 1;
        self.max_streak = self.max_streak.max(self.current_streak);
        self.best_level_score = Some(
            self.best_level_score
                .map_or(guesses_this_level, |best| best.min(guesses_this_level)),
        );
    }
}

/// Outcome of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Buffer shorter than five letters, or the level is already complete
    Rejected,
    /// Scored, not a match
    Wrong,
    /// Level solved; `awarded` is the letter deposited into the bag
    Solved { awarded: u8 },
}

/// Mutable Wordle play state for the current level
#[derive(Debug, Clone)]
pub struct WordleState {
    target: Word,
    buffer: Vec<u8>,
    guesses: Vec<GuessRow>,
    level: u32,
    guesses_this_level: u32,
    play_state: PlayState,
}

impl WordleState {
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            target,
            buffer: Vec::with_capacity(WORD_LEN),
            guesses: Vec::new(),
            level: 1,
            guesses_this_level: 0,
            play_state: PlayState::Input,
        }
    }

    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn guesses(&self) -> &[GuessRow] {
        &self.guesses
    }

    #[must_use]
    pub const fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub const fn guesses_this_level(&self) -> u32 {
        self.guesses_this_level
    }

    #[must_use]
    pub const fn play_state(&self) -> PlayState {
        self.play_state
    }

    /// Append a letter to the guess buffer; ignored when the buffer is full,
    /// the input is not a letter, or the level is complete
    pub fn push_letter(&mut self, letter: u8) {
        if self.play_state != PlayState::Input
            || self.buffer.len() >= WORD_LEN
            || !letter.is_ascii_alphabetic()
        {
            return;
        }
        self.buffer.push(letter.to_ascii_uppercase());
    }

    /// Remove the last buffered letter
    pub fn backspace(&mut self) {
        if self.play_state == PlayState::Input {
            self.buffer.pop();
        }
    }

    /// Score the buffered guess against the target
    ///
    /// A solve deposits one random letter of the target into `bag` and
    /// updates `stats`; the mode then waits in
    /// [`PlayState::LevelComplete`] until [`advance_level`] is called.
    ///
    /// [`advance_level`]: Self::advance_level
    pub fn submit<R: Rng>(
        &mut self,
        rng: &mut R,
        bag: &mut LetterBag,
        stats: &mut GameStats,
    ) -> SubmitOutcome {
        if self.play_state != PlayState::Input || self.buffer.len() != WORD_LEN {
            return SubmitOutcome::Rejected;
        }

        let mut letters = [0u8; WORD_LEN];
        letters.copy_from_slice(&self.buffer);
        let feedback = Feedback::score_letters(&letters, self.target.letters());

        self.guesses_this_level += 1;
        stats.total_guesses += 1;
        if self.guesses.len() < MAX_LEVEL_GUESSES {
            self.guesses.push(GuessRow { letters, feedback });
        }
        self.buffer.clear();

        if feedback.is_perfect() {
            let awarded = self.target.letter_at(rng.random_range(0..WORD_LEN));
            bag.put(awarded);
            stats.record_solve(self.guesses_this_level);
            self.play_state = PlayState::LevelComplete;
            SubmitOutcome::Solved { awarded }
        } else {
            SubmitOutcome::Wrong
        }
    }

    /// Start the next level with a fresh target
    pub fn advance_level(&mut self, target: Word) {
        self.target = target;
        self.buffer.clear();
        self.guesses.clear();
        self.level += 1;
        self.guesses_this_level = 0;
        self.play_state = PlayState::Input;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn state() -> WordleState {
        WordleState::new(word("CRANE"))
    }

    fn type_guess(state: &mut WordleState, guess: &str) {
        for ch in guess.bytes() {
            state.push_letter(ch);
        }
    }

    #[test]
    fn buffer_edits_cap_at_word_length() {
        let mut state = state();
        type_guess(&mut state, "slates");
        assert_eq!(state.buffer(), b"SLATE");

        state.backspace();
        assert_eq!(state.buffer(), b"SLAT");

        state.push_letter(b'3'); // non-letters ignored
        assert_eq!(state.buffer(), b"SLAT");
    }

    #[test]
    fn short_buffer_is_rejected() {
        let mut state = state();
        let mut rng = StdRng::seed_from_u64(1);
        let mut bag = LetterBag::new();
        let mut stats = GameStats::default();

        type_guess(&mut state, "cra");
        assert_eq!(
            state.submit(&mut rng, &mut bag, &mut stats),
            SubmitOutcome::Rejected
        );
        assert_eq!(state.guesses_this_level(), 0);
        assert_eq!(state.buffer(), b"CRA"); // rejection keeps the buffer
    }

    #[test]
    fn wrong_guess_records_history_and_clears_buffer() {
        let mut state = state();
        let mut rng = StdRng::seed_from_u64(1);
        let mut bag = LetterBag::new();
        let mut stats = GameStats::default();

        type_guess(&mut state, "crate");
        assert_eq!(
            state.submit(&mut rng, &mut bag, &mut stats),
            SubmitOutcome::Wrong
        );

        assert_eq!(state.guesses().len(), 1);
        assert_eq!(state.guesses()[0].letters(), b"CRATE");
        assert!(state.buffer().is_empty());
        assert_eq!(state.play_state(), PlayState::Input);
        assert_eq!(stats.total_guesses, 1);
        assert_eq!(bag.total(), 0);
    }

    #[test]
    fn solve_awards_a_target_letter_and_updates_stats() {
        let mut state = state();
        let mut rng = StdRng::seed_from_u64(7);
        let mut bag = LetterBag::new();
        let mut stats = GameStats::default();

        type_guess(&mut state, "crate");
        state.submit(&mut rng, &mut bag, &mut stats);
        type_guess(&mut state, "crane");
        let outcome = state.submit(&mut rng, &mut bag, &mut stats);

        let SubmitOutcome::Solved { awarded } = outcome else {
            panic!("expected a solve, got {outcome:?}");
        };
        assert!(b"CRANE".contains(&awarded));
        assert_eq!(bag.count(awarded), 1);
        assert_eq!(bag.total(), 1);

        assert_eq!(stats.levels_completed, 1);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 1);
        assert_eq!(stats.total_guesses, 2);
        assert_eq!(stats.best_level_score, Some(2));
        assert!((stats.average_guesses() - 2.0).abs() < f64::EPSILON);

        assert_eq!(state.play_state(), PlayState::LevelComplete);
    }

    #[test]
    fn input_is_frozen_once_level_is_complete() {
        let mut state = state();
        let mut rng = StdRng::seed_from_u64(7);
        let mut bag = LetterBag::new();
        let mut stats = GameStats::default();

        type_guess(&mut state, "crane");
        state.submit(&mut rng, &mut bag, &mut stats);

        state.push_letter(b'A');
        assert!(state.buffer().is_empty());
        assert_eq!(
            state.submit(&mut rng, &mut bag, &mut stats),
            SubmitOutcome::Rejected
        );
        assert_eq!(stats.total_guesses, 1);
    }

    #[test]
    fn advance_level_resets_for_a_new_target() {
        let mut state = state();
        let mut rng = StdRng::seed_from_u64(7);
        let mut bag = LetterBag::new();
        let mut stats = GameStats::default();

        type_guess(&mut state, "crane");
        state.submit(&mut rng, &mut bag, &mut stats);
        state.advance_level(word("SPEED"));

        assert_eq!(state.level(), 2);
        assert_eq!(state.target().text(), "SPEED");
        assert!(state.guesses().is_empty());
        assert_eq!(state.guesses_this_level(), 0);
        assert_eq!(state.play_state(), PlayState::Input);
    }

    #[test]
    fn best_score_keeps_the_minimum() {
        let mut state = state();
        let mut rng = StdRng::seed_from_u64(3);
        let mut bag = LetterBag::new();
        let mut stats = GameStats::default();

        // Level 1: solved in 3
        type_guess(&mut state, "slate");
        state.submit(&mut rng, &mut bag, &mut stats);
        type_guess(&mut state, "crate");
        state.submit(&mut rng, &mut bag, &mut stats);
        type_guess(&mut state, "crane");
        state.submit(&mut rng, &mut bag, &mut stats);
        assert_eq!(stats.best_level_score, Some(3));

        // Level 2: solved in 1
        state.advance_level(word("SPEED"));
        type_guess(&mut state, "speed");
        state.submit(&mut rng, &mut bag, &mut stats);
        assert_eq!(stats.best_level_score, Some(1));
        assert_eq!(stats.levels_completed, 2);
        assert_eq!(stats.max_streak, 2);
    }

    #[test]
    fn history_is_capped() {
        let mut state = state();
        let mut rng = StdRng::seed_from_u64(3);
        let mut bag = LetterBag::new();
        let mut stats = GameStats::default();

        for _ in 0..MAX_LEVEL_GUESSES + 5 {
            type_guess(&mut state, "crate");
            state.submit(&mut rng, &mut bag, &mut stats);
        }
        assert_eq!(state.guesses().len(), MAX_LEVEL_GUESSES);
        assert_eq!(state.guesses_this_level(), (MAX_LEVEL_GUESSES + 5) as u32);
    }
}
