//! Command implementations

pub mod benchmark;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use simple::{Command, apply, run_simple};
pub use solve::{SolveResult, SolveStep, parse_answer, solve_answer};
