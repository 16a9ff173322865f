//! Gridword - CLI
//!
//! Word-puzzle game with a TUI play mode plus generator tooling commands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use gridword::{
    commands::{GenerateConfig, run_generate, run_stress},
    core::Word,
    interactive::{App, run_tui},
    output::{print_generate_result, print_stress_statistics},
    wordlists::{WORDS, loader::load_from_file, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "gridword",
    about = "Wordle-meets-crossword puzzle game with a procedural level generator",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file of 5-letter words
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Seed for a reproducible session
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Generate a single crossword level and print it
    Generate {
        /// Number of words to place
        #[arg(short = 'n', long, default_value = "4")]
        words: usize,

        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Stress-test the generator across many levels
    Stress {
        /// Number of levels to generate
        #[arg(short, long, default_value = "1000")]
        count: usize,

        /// Words to request per level
        #[arg(short = 'n', long, default_value = "5")]
        words: usize,

        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist_mode: &str) -> Result<Vec<Word>> {
    match wordlist_mode {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => Ok(load_from_file(path)?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { seed: None });

    match command {
        Commands::Play { seed } => run_play_command(&dictionary, seed),
        Commands::Generate { words, seed } => {
            let config = GenerateConfig {
                word_count: words,
                seed,
            };
            let result = run_generate(&dictionary, &config);
            print_generate_result(&result);
            Ok(())
        }
        Commands::Stress { count, words, seed } => {
            let stats = run_stress(&dictionary, count, words, seed);
            print_stress_statistics(&stats);
            Ok(())
        }
    }
}

fn run_play_command(dictionary: &[Word], seed: Option<u64>) -> Result<()> {
    let app = App::new(dictionary, seed)?;
    run_tui(app)
}
