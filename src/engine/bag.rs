//! Shared letter-token bag
//!
//! Twenty-six non-negative counters, one per letter A-Z. The Wordle mode
//! deposits tokens when a level is solved; the crossword mode withdraws one
//! per placed letter and returns one per removed letter. A withdrawal from
//! an empty slot fails and leaves the bag unchanged, which is what keeps the
//! counts non-negative.

/// Letter-token inventory shared between game modes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterBag {
    counts: [u32; 26],
}

impl LetterBag {
    /// Create an empty bag
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(letter: u8) -> Option<usize> {
        letter
            .is_ascii_uppercase()
            .then(|| (letter - b'A') as usize)
    }

    /// Tokens held for a letter (0 for anything outside A-Z)
    #[must_use]
    pub fn count(&self, letter: u8) -> u32 {
        Self::slot(letter).map_or(0, |i| self.counts[i])
    }

    /// Withdraw one token; returns false (and changes nothing) if the slot
    /// is empty or the letter is not A-Z
    pub fn take(&mut self, letter: u8) -> bool {
        match Self::slot(letter) {
            Some(i) if self.counts[i] > 0 => {
                self.counts[i] -= 1;
                true
            }
            _ => false,
        }
    }

    /// Return one token to the bag; non A-Z letters are ignored
    pub fn put(&mut self, letter: u8) {
        if let Some(i) = Self::slot(letter) {
            self.counts[i] += 1;
        }
    }

    /// Deposit several tokens of one letter
    pub fn add(&mut self, letter: u8, amount: u32) {
        if let Some(i) = Self::slot(letter) {
            self.counts[i] += amount;
        }
    }

    /// Total tokens across all letters
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Per-letter counts, indexed A=0 .. Z=25
    #[must_use]
    pub const fn counts(&self) -> &[u32; 26] {
        &self.counts
    }
}
