//! Dictionary word representation
//!
//! A Word stores a 5-letter word along with letter position indices used by
//! the crossword generator when searching for intersections.

use rustc_hash::FxHashMap;
use std::fmt;

/// Fixed word length shared by the Wordle and crossword modes
pub const WORD_LEN: usize = 5;

/// A 5-letter word stored as uppercase ASCII bytes
///
/// Maintains a map of letter positions so intersection and containment
/// queries do not rescan the word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LEN],
    letter_positions: FxHashMap<u8, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LEN} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is normalized to uppercase so grid letters line up with the
    /// A-Z letter bag slots.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use gridword::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe by length validation.
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_uppercase();

        // Validate length
        if text.len() != WORD_LEN {
            return Err(WordError::InvalidLength(text.len()));
        }

        // Validate ASCII and alphabetic
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        // Convert to bytes - safe to unwrap as we validated length == 5
        let letters: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .expect("length already validated");

        // Build position map for fast lookup
        let mut letter_positions: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in letters.iter().enumerate() {
            letter_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            letters,
            letter_positions,
        })
    }

    /// Get the word as a string slice (uppercase)
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LEN] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Get the word's starting letter
    #[inline]
    #[must_use]
    pub const fn first_letter(&self) -> u8 {
        self.letters[0]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letter_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: u8) -> &[usize] {
        self.letter_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Check whether two words share at least one letter anywhere
    ///
    /// This is the connectivity test used during crossword word selection:
    /// words that share no letter can never intersect on the grid.
    #[must_use]
    pub fn shares_letter_with(&self, other: &Self) -> bool {
        self.letters.iter().any(|&ch| other.has_letter(ch))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "CRANE");
        assert_eq!(word.letters(), b"CRANE");
    }

    #[test]
    fn word_creation_case_normalized() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "CRANE");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word2.text(), "CRANE");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(
            Word::new("shrt"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("cran3").is_err()); // Number
        assert!(Word::new("cran ").is_err()); // Space
        assert!(Word::new("cran!").is_err()); // Punctuation
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.letter_at(0), b'C');
        assert_eq!(word.letter_at(1), b'R');
        assert_eq!(word.letter_at(2), b'A');
        assert_eq!(word.letter_at(3), b'N');
        assert_eq!(word.letter_at(4), b'E');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("crane").unwrap();
        assert!(word.has_letter(b'C'));
        assert!(word.has_letter(b'R'));
        assert!(word.has_letter(b'A'));
        assert!(!word.has_letter(b'Z'));
        assert!(!word.has_letter(b'X'));
    }

    #[test]
    fn word_positions_of() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.positions_of(b'C'), &[0]);
        assert_eq!(word.positions_of(b'R'), &[1]);
        assert_eq!(word.positions_of(b'A'), &[2]);
        assert_eq!(word.positions_of(b'Z'), &[]);
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = Word::new("speed").unwrap();
        assert_eq!(word.positions_of(b'E'), &[2, 3]); // Both E positions
        assert_eq!(word.positions_of(b'S'), &[0]);
        assert_eq!(word.positions_of(b'P'), &[1]);
        assert_eq!(word.positions_of(b'D'), &[4]);
    }

    #[test]
    fn word_shares_letter() {
        let apple = Word::new("apple").unwrap();
        let elbow = Word::new("elbow").unwrap();
        let track = Word::new("track").unwrap();

        assert!(apple.shares_letter_with(&elbow)); // E and L
        assert!(elbow.shares_letter_with(&apple)); // Symmetric
        assert!(apple.shares_letter_with(&track)); // A
    }

    #[test]
    fn word_shares_no_letter() {
        let fuzzy = Word::new("fuzzy").unwrap();
        let train = Word::new("train").unwrap();
        assert!(!fuzzy.shares_letter_with(&train));
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "CRANE");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("crane").unwrap();
        let word2 = Word::new("crane").unwrap();
        let word3 = Word::new("CRANE").unwrap();
        let word4 = Word::new("slate").unwrap();

        assert_eq!(word1, word2);
        assert_eq!(word1, word3); // Case insensitive
        assert_ne!(word1, word4);
    }
}
