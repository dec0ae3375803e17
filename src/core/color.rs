//! Bottle colors and the in-play palette
//!
//! The palette is a prefix of the fixed superset [`Color::ALL`]: growing it
//! appends the next color of the superset, shrinking it drops the last one.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One bottle color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
    Pink,
    Cyan,
}

/// Error returned when text does not name a color
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color '{0}' (expected a name like 'red' or a code like 'r')")]
pub struct ColorError(pub String);

impl Color {
    /// Every color, in the order the palette grows
    pub const ALL: [Self; 8] = [
        Self::Red,
        Self::Blue,
        Self::Green,
        Self::Yellow,
        Self::Purple,
        Self::Orange,
        Self::Pink,
        Self::Cyan,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
            Self::Orange => "orange",
            Self::Pink => "pink",
            Self::Cyan => "cyan",
        }
    }

    /// Single-letter code used by the line-oriented front ends
    ///
    /// Pink uses `k` so it doesn't collide with purple.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Red => 'r',
            Self::Blue => 'b',
            Self::Green => 'g',
            Self::Yellow => 'y',
            Self::Purple => 'p',
            Self::Orange => 'o',
            Self::Pink => 'k',
            Self::Cyan => 'c',
        }
    }

    fn from_code(code: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.code() == code.to_ascii_lowercase())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            return Self::from_code(ch).ok_or_else(|| ColorError(trimmed.to_string()));
        }

        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ColorError(trimmed.to_string()))
    }
}

/// Parse a sequence of colors
///
/// Accepts comma/space separated names (`red, green blue`) or a run of
/// single-letter codes (`rgby`).
///
/// # Errors
/// Returns `ColorError` for the first token that is not a color.
///
/// # Examples
/// ```
/// use bottle_code::core::{Color, parse_colors};
///
/// let a = parse_colors("rgby").unwrap();
/// let b = parse_colors("red, green, blue, yellow").unwrap();
/// assert_eq!(a[2], Color::Blue);
/// assert_eq!(a, vec![Color::Red, Color::Green, Color::Blue, Color::Yellow]);
/// assert_eq!(b, a);
/// ```
pub fn parse_colors(text: &str) -> Result<Vec<Color>, ColorError> {
    let tokens: Vec<&str> = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();

    if let [single] = tokens.as_slice()
        && single.chars().count() > 1
        && single.parse::<Color>().is_err()
    {
        return single.chars().map(|ch| ch.to_string().parse()).collect();
    }

    tokens.iter().map(|t| t.parse()).collect()
}

/// The ordered set of colors currently in play
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Fewest colors a palette may hold
    pub const MIN: usize = 2;
    /// Most colors a palette may hold
    pub const MAX: usize = Color::ALL.len();
    /// Size used when nothing else is configured
    pub const DEFAULT_SIZE: usize = 4;

    /// Palette holding the first `size` colors, clamped to `[MIN, MAX]`
    #[must_use]
    pub fn with_size(size: usize) -> Self {
        let size = size.clamp(Self::MIN, Self::MAX);
        Self {
            colors: Color::ALL[..size].to_vec(),
        }
    }

    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; a palette never drops below [`Palette::MIN`]
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }

    /// Color at a pool position
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// Append the next color of the superset
    ///
    /// Returns `false` without changing anything when already at [`Palette::MAX`].
    pub fn grow(&mut self) -> bool {
        if self.colors.len() >= Self::MAX {
            return false;
        }
        self.colors.push(Color::ALL[self.colors.len()]);
        true
    }

    /// Drop the most recently appended color
    ///
    /// Returns `false` without changing anything when already at [`Palette::MIN`].
    pub fn shrink(&mut self) -> bool {
        if self.colors.len() <= Self::MIN {
            return false;
        }
        self.colors.pop();
        true
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::with_size(Self::DEFAULT_SIZE)
    }
}
