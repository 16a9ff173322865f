//! Generate command
//!
//! Builds a single crossword level and reports what was placed.

use crate::core::Word;
use crate::generator;
use crate::grid::CrosswordLevel;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};

/// Configuration for a generate run
pub struct GenerateConfig {
    /// How many words to ask the generator for
    pub word_count: usize,
    /// Seed for reproducible output; `None` draws one from the OS
    pub seed: Option<u64>,
}

/// Result of a generate run
pub struct GenerateResult {
    pub level: CrosswordLevel,
    pub requested: usize,
    pub duration: Duration,
}

/// Generate one level from the dictionary
#[must_use]
pub fn run_generate(dictionary: &[Word], config: &GenerateConfig) -> GenerateResult {
    let mut rng = config
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    let start = Instant::now();
    let level = generator::generate(&mut rng, dictionary, config.word_count);

    GenerateResult {
        level,
        requested: config.word_count,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(words: &[&str]) -> Vec<Word> {
        words.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn generate_runs() {
        let dictionary = dict(&["apple", "elbow", "crane", "bread"]);
        let config = GenerateConfig {
            word_count: 3,
            seed: Some(42),
        };

        let result = run_generate(&dictionary, &config);
        assert_eq!(result.requested, 3);
        assert!(result.level.word_count() <= 3);
        assert!(result.level.is_consistent());
    }

    #[test]
    fn same_seed_same_level() {
        let dictionary = dict(&["apple", "elbow", "crane", "bread", "dream"]);
        let config = GenerateConfig {
            word_count: 4,
            seed: Some(7),
        };

        let a = run_generate(&dictionary, &config);
        let b = run_generate(&dictionary, &config);
        assert_eq!(a.level.words(), b.level.words());
    }
}
