//! Stress command - batch generator evaluation
//!
//! Generates many levels in parallel and checks every one for mask/solution
//! consistency, reporting how well the generator fills the board.

use crate::core::Word;
use crate::generator;
use crate::grid::GRID_SIZE;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Statistics from a stress run
#[derive(Debug)]
pub struct StressStatistics {
    pub total_levels: usize,
    pub requested_words: usize,
    /// placed word count -> number of levels
    pub placement_distribution: HashMap<usize, usize>,
    pub average_words: f64,
    pub average_filled_cells: f64,
    pub min_words: usize,
    pub max_words: usize,
    /// Levels whose mask and solution disagree; must be zero
    pub inconsistent_levels: usize,
    pub duration: Duration,
    pub levels_per_second: f64,
}

/// Generate `count` levels in parallel and aggregate statistics
///
/// Each level gets its own seed derived from the base seed, so a seeded run
/// is reproducible regardless of thread scheduling.
///
/// # Panics
///
/// Panics if the progress bar template fails to parse.
#[must_use]
pub fn run_stress(
    dictionary: &[Word],
    count: usize,
    word_count: usize,
    seed: Option<u64>,
) -> StressStatistics {
    let base_seed = seed.unwrap_or_else(|| rand::rng().random());

    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let per_level: Vec<(usize, usize, bool)> = (0..count as u64)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(i));
            let level = generator::generate(&mut rng, dictionary, word_count);

            let filled = (0..GRID_SIZE)
                .flat_map(|x| (0..GRID_SIZE).map(move |y| (x, y)))
                .filter(|&(x, y)| level.is_word_cell(x, y))
                .count();

            pb.inc(1);
            (level.word_count(), filled, level.is_consistent())
        })
        .collect();

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();

    let mut placement_distribution: HashMap<usize, usize> = HashMap::new();
    for &(words, _, _) in &per_level {
        *placement_distribution.entry(words).or_insert(0) += 1;
    }

    let total_words: usize = per_level.iter().map(|&(words, _, _)| words).sum();
    let total_filled: usize = per_level.iter().map(|&(_, filled, _)| filled).sum();
    let inconsistent_levels = per_level
        .iter()
        .filter(|&&(_, _, consistent)| !consistent)
        .count();

    let average = |total: usize| {
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    };

    StressStatistics {
        total_levels: count,
        requested_words: word_count,
        placement_distribution,
        average_words: average(total_words),
        average_filled_cells: average(total_filled),
        min_words: per_level.iter().map(|&(w, _, _)| w).min().unwrap_or(0),
        max_words: per_level.iter().map(|&(w, _, _)| w).max().unwrap_or(0),
        inconsistent_levels,
        duration,
        levels_per_second: count as f64 / duration.as_secs_f64(),
    }
}
