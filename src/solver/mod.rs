//! Solving algorithms
//!
//! Candidate filtering plus minimax guess selection for the positional-only
//! score.

mod engine;
pub mod minimax;

pub use engine::{MINIMAX_LIMIT, Solver};
