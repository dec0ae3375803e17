//! Game orchestration
//!
//! Wires palette, answer, board, input and grading into a single session
//! with a not-started / in-progress / won lifecycle.

mod config;
mod session;

pub use config::{ConfigError, GameConfig, MissPolicy};
pub use session::{GameSession, GameStatus, Submission};
