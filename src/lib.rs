//! Bottle Code
//!
//! A color-ordering puzzle: arrange distinct colored bottles into slots and
//! learn, after each guess, only how many sit in the right place. Includes a
//! drag-and-drop terminal UI, a line-oriented mode and an automatic solver.
//!
//! # Quick Start
//!
//! ```rust
//! use bottle_code::core::{Answer, Color::*, Palette};
//! use bottle_code::game::{GameConfig, GameSession, Submission};
//! use bottle_code::input::DragSource;
//!
//! let mut session = GameSession::new(&GameConfig::default());
//! let answer = Answer::from_colors(vec![Red, Blue, Green, Yellow], &Palette::default(), 4)?;
//! session.start_round_with(answer)?;
//!
//! for (slot, color) in [Red, Blue, Yellow, Green].into_iter().enumerate() {
//!     session.drag_start(DragSource::Pool(color));
//!     session.drop(slot);
//! }
//! assert_eq!(session.submit_guess(), Submission::Miss { correct: 2 });
//! # Ok::<(), bottle_code::core::AnswerError>(())
//! ```

// Core domain types
pub mod core;

// Round state and configuration
pub mod game;

// Drag-and-drop input
pub mod input;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
