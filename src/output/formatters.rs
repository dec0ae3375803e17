//! Formatting utilities for terminal output

use crate::core::{Color, Slot};
use colored::{ColoredString, Colorize};

/// A colored block standing for one bottle
#[must_use]
pub fn swatch(color: Color) -> ColoredString {
    let block = format!("{}", color.code().to_ascii_uppercase());
    match color {
        Color::Red => block.on_red(),
        Color::Blue => block.on_blue(),
        Color::Green => block.on_green(),
        Color::Yellow => block.on_yellow(),
        Color::Purple => block.on_magenta(),
        Color::Orange => block.on_truecolor(255, 165, 0),
        Color::Pink => block.on_truecolor(255, 105, 180),
        Color::Cyan => block.on_cyan(),
    }
    .black()
    .bold()
}

/// Colors as swatches separated by spaces
#[must_use]
pub fn format_guess(colors: &[Color]) -> String {
    colors
        .iter()
        .map(|&c| swatch(c).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Board slots, with `·` for empty ones
#[must_use]
pub fn format_slots(slots: &[Slot]) -> String {
    slots
        .iter()
        .map(|slot| slot.map_or_else(|| "·".dimmed().to_string(), |c| swatch(c).to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Plain-text color codes, e.g. `rgby`
#[must_use]
pub fn color_codes(colors: &[Color]) -> String {
    colors.iter().map(|c| c.code()).collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One cell per slot, filled for each correct position
#[must_use]
pub fn score_bar(correct: usize, slots: usize) -> String {
    create_progress_bar(correct as f64, slots as f64, slots)
}
