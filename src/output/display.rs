//! Display functions for command results

use super::formatters::{cell_char, count_bar, direction_arrow};
use crate::commands::{GenerateResult, StressStatistics};
use crate::grid::{CrosswordLevel, GRID_SIZE};
use colored::Colorize;

/// Print a generated level: the grid, the placed words, and timing
pub fn print_generate_result(result: &GenerateResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Generated level: {} of {} requested words placed",
        result.level.word_count().to_string().bright_yellow().bold(),
        result.requested
    );
    println!("{}", "─".repeat(60).cyan());

    print_level_grid(&result.level);

    println!();
    for (i, word) in result.level.words().iter().enumerate() {
        let letters: String = (0..word.length)
            .map(|k| {
                let (x, y) = word.cell(k);
                cell_char(result.level.solution_at(x, y))
            })
            .collect();

        println!(
            "  {}. {} {} at ({}, {})",
            i + 1,
            letters.bright_yellow(),
            direction_arrow(word.direction),
            word.start_x,
            word.start_y
        );
    }

    println!(
        "\nGenerated in {}",
        format!("{:.2?}", result.duration).green()
    );
}

/// Print the solution grid of a level
pub fn print_level_grid(level: &CrosswordLevel) {
    println!();
    for y in 0..GRID_SIZE {
        let row: String = (0..GRID_SIZE)
            .map(|x| format!("{} ", cell_char(level.solution_at(x, y))))
            .collect();
        println!("  {row}");
    }
}

/// Print the statistics gathered by a stress run
pub fn print_stress_statistics(stats: &StressStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GENERATOR STRESS RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\nLevels:      {} ({} words requested each)",
        stats.total_levels.to_string().bright_yellow(),
        stats.requested_words
    );
    println!(
        "Throughput:  {:.0} levels/s ({:.2?} total)",
        stats.levels_per_second, stats.duration
    );
    println!(
        "Words:       avg {:.2}, min {}, max {}",
        stats.average_words, stats.min_words, stats.max_words
    );
    println!("Fill:        avg {:.1} cells", stats.average_filled_cells);

    println!("\nPlaced-word distribution:");
    let max_count = stats
        .placement_distribution
        .values()
        .copied()
        .max()
        .unwrap_or(0);
    let mut rows: Vec<_> = stats.placement_distribution.iter().collect();
    rows.sort();
    for (&words, &count) in rows {
        println!(
            "  {words} words: {:>6}  {}",
            count,
            count_bar(count, max_count, 30).green()
        );
    }

    println!();
    if stats.inconsistent_levels == 0 {
        println!("{}", "✅ All levels mask/solution consistent".green().bold());
    } else {
        println!(
            "{}",
            format!(
                "❌ {} levels failed the consistency check",
                stats.inconsistent_levels
            )
            .red()
            .bold()
        );
    }
}
