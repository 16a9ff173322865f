//! Command implementations

pub mod generate;
pub mod stress;

pub use generate::{GenerateConfig, GenerateResult, run_generate};
pub use stress::{StressStatistics, run_stress};
