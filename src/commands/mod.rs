//! Command implementations

pub mod benchmark;
pub mod interactive;
pub mod lookup;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use interactive::{SessionSummary, run_interactive};
pub use lookup::run_lookup;
