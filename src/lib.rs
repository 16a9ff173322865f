//! Gridword
//!
//! A casual word-puzzle game: Wordle-style guessing feeds a letter-token
//! bag, and the tokens are spent filling procedurally generated 9x9
//! crossword levels.
//!
//! # Quick Start
//!
//! ```rust
//! use gridword::core::{Feedback, Word};
//!
//! let guess = Word::new("crate").unwrap();
//! let answer = Word::new("crane").unwrap();
//!
//! let feedback = Feedback::score(&guess, &answer);
//! assert!(!feedback.is_perfect());
//! ```

// Core domain types
pub mod core;

// Grid coordinates and levels
pub mod grid;

// Procedural crossword generation
pub mod generator;

// Crossword play engine
pub mod engine;

// Wordle guessing mode
pub mod wordle;

// Game session and views
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
