//! Session state threading the two game modes together
//!
//! Owns the letter bag, the stats, both modes' states, and the current
//! view. The crossword engine signals completion; the session reacts by
//! generating the next level and resetting per-level state.

use std::error::Error;
use std::fmt;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use crate::core::Word;
use crate::engine::{self, CrosswordState, FrameInput, LetterBag, ValidationOutcome};
use crate::generator;
use crate::grid::CrosswordLevel;
use crate::wordle::{GameStats, PlayState, SubmitOutcome, WordleState};

/// Word count for the first crossword level; each level adds one more
/// (the generator's own caps still apply)
pub const FIRST_LEVEL_WORDS: usize = 2;

/// Which screen is live, each variant dispatched by pattern matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameView {
    Home,
    Wordle,
    Crossword,
    CrosswordComplete,
}

/// Session construction failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// No words to pick targets or build levels from
    EmptyDictionary,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDictionary => write!(f, "dictionary contains no usable words"),
        }
    }
}

impl Error for SessionError {}

/// One player's full game state across both modes
#[derive(Debug)]
pub struct GameSession<'a> {
    dictionary: &'a [Word],
    rng: StdRng,
    view: GameView,
    bag: LetterBag,
    stats: GameStats,
    wordle: WordleState,
    crossword_level: CrosswordLevel,
    crossword: CrosswordState,
}

impl<'a> GameSession<'a> {
    /// Start a session on the home screen
    ///
    /// A seed makes the whole session (targets and levels) reproducible.
    pub fn new(dictionary: &'a [Word], seed: Option<u64>) -> Result<Self, SessionError> {
        let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        let target = dictionary
            .choose(&mut rng)
            .cloned()
            .ok_or(SessionError::EmptyDictionary)?;
        let crossword_level = generator::generate(&mut rng, dictionary, FIRST_LEVEL_WORDS);
        let crossword = CrosswordState::new(&crossword_level);

        Ok(Self {
            dictionary,
            rng,
            view: GameView::Home,
            bag: LetterBag::new(),
            stats: GameStats::default(),
            wordle: WordleState::new(target),
            crossword_level,
            crossword,
        })
    }

    #[must_use]
    pub const fn view(&self) -> GameView {
        self.view
    }

    #[must_use]
    pub const fn bag(&self) -> &LetterBag {
        &self.bag
    }

    #[must_use]
    pub const fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub const fn wordle(&self) -> &WordleState {
        &self.wordle
    }

    #[must_use]
    pub const fn crossword_level(&self) -> &CrosswordLevel {
        &self.crossword_level
    }

    #[must_use]
    pub const fn crossword(&self) -> &CrosswordState {
        &self.crossword
    }

    /// Leave the home screen into the Wordle mode
    pub fn start(&mut self) {
        if self.view == GameView::Home {
            self.view = GameView::Wordle;
        }
    }

    /// Return to the home screen without losing any progress
    pub fn go_home(&mut self) {
        self.view = GameView::Home;
    }

    /// Tab between the two play modes; other views keep their own navigation
    pub fn toggle_view(&mut self) {
        self.view = match self.view {
            GameView::Wordle => GameView::Crossword,
            GameView::Crossword => GameView::Wordle,
            other => other,
        };
    }

    /// Type a letter into the Wordle guess buffer
    pub fn wordle_letter(&mut self, letter: u8) {
        if self.view == GameView::Wordle {
            self.wordle.push_letter(letter);
        }
    }

    /// Delete the last buffered Wordle letter
    pub fn wordle_backspace(&mut self) {
        if self.view == GameView::Wordle {
            self.wordle.backspace();
        }
    }

    /// Submit the buffered Wordle guess
    pub fn wordle_submit(&mut self) -> SubmitOutcome {
        if self.view != GameView::Wordle {
            return SubmitOutcome::Rejected;
        }
        self.wordle
            .submit(&mut self.rng, &mut self.bag, &mut self.stats)
    }

    /// Move a completed Wordle level on to the next target
    pub fn wordle_continue(&mut self) {
        if self.view == GameView::Wordle
            && self.wordle.play_state() == PlayState::LevelComplete
            && let Some(target) = self.dictionary.choose(&mut self.rng).cloned()
        {
            self.wordle.advance_level(target);
        }
    }

    /// Apply one frame of crossword input, then any pending validation
    ///
    /// A completed puzzle switches to the completion view; the next level is
    /// not generated until [`crossword_continue`] is called.
    ///
    /// [`crossword_continue`]: Self::crossword_continue
    pub fn crossword_frame(&mut self, input: &FrameInput) -> ValidationOutcome {
        if self.view != GameView::Crossword {
            return ValidationOutcome::Skipped;
        }

        engine::apply(
            &mut self.crossword,
            &self.crossword_level,
            &mut self.bag,
            input,
        );
        let outcome = engine::validate(&mut self.crossword, &self.crossword_level);
        if outcome == ValidationOutcome::PuzzleCompleted {
            self.view = GameView::CrosswordComplete;
        }
        outcome
    }

    /// Generate the next crossword level and resume play
    pub fn crossword_continue(&mut self) {
        if self.view != GameView::CrosswordComplete {
            return;
        }

        let next_level = self.crossword_level.level() + 1;
        self.crossword_level = generator::generate(
            &mut self.rng,
            self.dictionary,
            FIRST_LEVEL_WORDS + next_level as usize - 1,
        );
        self.crossword_level.set_level(next_level);
        self.crossword.reset_for_level(&self.crossword_level);
        self.view = GameView::Crossword;
    }
}
