//! The shared five-letter dictionary
//!
//! Provides the embedded word list compiled into the binary for zero-cost
//! access, plus a file loader for custom dictionaries.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
