//! Simple interactive CLI mode
//!
//! Line-oriented game without the TUI. Every command goes through the same
//! session operations the mouse does, so both front ends behave alike.

use crate::core::Color;
use crate::game::{GameSession, GameStatus, Submission};
use crate::input::DragSource;
use crate::output::{print_board, print_history};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

/// One line of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Grow,
    Shrink,
    /// Put a pool color into a slot (0-based)
    Place { slot: usize, color: Color },
    /// Drag a filled slot onto another (0-based)
    Move { from: usize, to: usize },
    Clear { slot: usize },
    Submit,
    Reveal,
    History,
    Back,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}' (type 'help')")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("slot numbers start at 1, got '{0}'")]
    BadSlot(String),
    #[error(transparent)]
    Color(#[from] crate::core::ColorError),
}

/// Parse a 1-based slot number into an index
fn slot(text: Option<&str>, usage: &'static str) -> Result<usize, CommandError> {
    let text = text.ok_or(CommandError::Usage(usage))?;
    match text.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(CommandError::BadSlot(text.to_string())),
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Empty);
        };

        let command = match head.to_lowercase().as_str() {
            "start" | "s" | "new" | "n" => Self::Start,
            "grow" | "+" => Self::Grow,
            "shrink" | "-" => Self::Shrink,
            "place" | "p" => {
                const USAGE: &str = "place <slot> <color>";
                let slot = slot(words.next(), USAGE)?;
                let color = words.next().ok_or(CommandError::Usage(USAGE))?.parse::<Color>()?;
                Self::Place { slot, color }
            }
            "move" | "m" => {
                const USAGE: &str = "move <from> <to>";
                Self::Move {
                    from: slot(words.next(), USAGE)?,
                    to: slot(words.next(), USAGE)?,
                }
            }
            "clear" | "x" => Self::Clear {
                slot: slot(words.next(), "clear <slot>")?,
            },
            "submit" | "go" => Self::Submit,
            "reveal" | "a" => Self::Reveal,
            "history" | "h" => Self::History,
            "back" | "b" => Self::Back,
            "help" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        if words.next().is_some() {
            return Err(CommandError::Usage("too many arguments"));
        }
        Ok(command)
    }
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// Run one command against the session and describe what happened
///
/// `Help` and `Quit` are handled by the caller; here they produce nothing.
pub fn apply(session: &mut GameSession, command: Command) -> Vec<String> {
    let not_playing = || vec!["No round in progress; type 'start'".to_string()];

    match command {
        Command::Start => {
            session.start_round();
            vec![format!(
                "New round: arrange {} in the right order",
                plural(session.difficulty(), "bottle")
            )]
        }
        Command::Grow | Command::Shrink => {
            let changed = if command == Command::Grow {
                session.grow_difficulty()
            } else {
                session.shrink_difficulty()
            };
            if changed {
                vec![format!("Difficulty: {}", plural(session.difficulty(), "bottle"))]
            } else if session.status() == GameStatus::NotStarted {
                vec!["Difficulty is already at its limit".to_string()]
            } else {
                vec!["Difficulty can only change before a round; type 'back'".to_string()]
            }
        }
        Command::Place { slot, color } => {
            if session.status() != GameStatus::InProgress {
                return not_playing();
            }
            if !session.palette().contains(color) {
                return vec![format!("{color} is not in play")];
            }
            session.drag_start(DragSource::Pool(color));
            match session.drop(slot) {
                Some(_) => Vec::new(),
                None => vec![format!("There is no slot {}", slot + 1)],
            }
        }
        Command::Move { from, to } => {
            if session.status() != GameStatus::InProgress {
                return not_playing();
            }
            if !session.drag_start(DragSource::Slot(from)) {
                return vec![format!("Slot {} has no bottle", from + 1)];
            }
            match session.drop(to) {
                Some(_) => Vec::new(),
                None if from == to => Vec::new(),
                None => vec![format!("There is no slot {}", to + 1)],
            }
        }
        Command::Clear { slot } => {
            if session.status() != GameStatus::InProgress {
                return not_playing();
            }
            match session.clear_slot(slot) {
                Some(_) => Vec::new(),
                None => vec![format!("Slot {} is already empty", slot + 1)],
            }
        }
        Command::Submit => match session.submit_guess() {
            Submission::Won { attempts } => {
                vec![format!("🏆 Perfect! Solved in {}!", plural(attempts, "attempt"))]
            }
            Submission::Miss { correct } => vec![format!(
                "{} of {} in the right place",
                correct,
                session.difficulty()
            )],
            Submission::Rejected if session.status() == GameStatus::InProgress => {
                let missing = session.remaining();
                let noun = if missing == 1 { "bottle" } else { "bottles" };
                vec![format!("Need {missing} more {noun}")]
            }
            Submission::Rejected => not_playing(),
        },
        Command::Reveal => {
            let on = !session.answer_revealed();
            session.reveal_answer(on);
            vec![if on { "Answer shown" } else { "Answer hidden" }.to_string()]
        }
        Command::History => {
            let on = !session.history_visible();
            session.toggle_history(on);
            vec![if on { "History shown" } else { "History hidden" }.to_string()]
        }
        Command::Back => {
            session.reset();
            vec!["Back at the start screen".to_string()]
        }
        Command::Help | Command::Quit => Vec::new(),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  start              start a round (or play again)");
    println!("  grow | shrink      change the number of bottles (start screen)");
    println!("  place <slot> <c>   put color <c> (name or letter) into a slot");
    println!("  move <from> <to>   move or swap bottles between slots");
    println!("  clear <slot>       take a bottle out of a slot");
    println!("  submit             grade a full board");
    println!("  reveal | history   toggle the answer or the history");
    println!("  back               return to the start screen");
    println!("  quit               leave");
    println!(
        "Colors: {}",
        Color::ALL
            .iter()
            .map(|c| format!("{}={}", c.code(), c.name()))
            .collect::<Vec<_>>()
            .join(" ")
    );
}

fn prompt(text: &str) -> io::Result<()> {
    print!("{text}> ");
    io::stdout().flush()
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading stdin or writing stdout fails.
pub fn run_simple(mut session: GameSession) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Color Bottle Puzzle - Simple Mode              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Arrange the bottles in the hidden order. After each guess you");
    println!("learn how many bottles are in the right place.\n");
    print_help();
    println!();
    print_board(&session);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        prompt("bottles")?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                println!("{}", format!("❌ {e}").red());
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                print_help();
                continue;
            }
            _ => {}
        }

        for message in apply(&mut session, command) {
            println!("{}", message.bright_cyan());
        }
        if session.history_visible()
            && matches!(command, Command::Submit | Command::History)
        {
            print_history(session.history());
        }
        print_board(&session);
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}
