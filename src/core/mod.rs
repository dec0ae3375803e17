//! Core domain types for the bottle puzzle
//!
//! Pure data and scoring: palette, answer, board, grade and history. Nothing
//! here knows about input devices or rendering.

mod answer;
mod board;
mod color;
mod grade;
mod history;

pub use answer::{Answer, AnswerError};
pub use board::{GuessBoard, Slot};
pub use color::{Color, ColorError, Palette, parse_colors};
pub use grade::Grade;
pub use history::{History, HistoryEntry};
