//! Scoring a guess against the answer
//!
//! Only exact-position matches count. A right color in the wrong slot earns
//! nothing; there is no "misplaced" feedback.

use super::Color;

/// Number of slots whose color matches the answer at the same position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Grade {
    correct: usize,
    slots: usize,
}

impl Grade {
    /// Grade a full guess
    ///
    /// Both sequences are expected to have the same length; extra positions
    /// on either side never match.
    ///
    /// # Examples
    /// ```
    /// use bottle_code::core::{Color, Grade};
    ///
    /// let answer = [Color::Red, Color::Green, Color::Blue];
    /// let guess = [Color::Red, Color::Blue, Color::Green];
    /// let grade = Grade::calculate(&guess, &answer);
    /// assert_eq!(grade.correct(), 1);
    /// assert!(!grade.is_perfect());
    /// ```
    #[must_use]
    pub fn calculate(guess: &[Color], answer: &[Color]) -> Self {
        debug_assert_eq!(guess.len(), answer.len(), "guess and answer lengths differ");

        let correct = guess
            .iter()
            .zip(answer)
            .filter(|(g, a)| g == a)
            .count();

        Self {
            correct,
            slots: answer.len(),
        }
    }

    /// Number of exact-position matches (0..=slots)
    #[inline]
    #[must_use]
    pub const fn correct(self) -> usize {
        self.correct
    }

    #[inline]
    #[must_use]
    pub const fn slots(self) -> usize {
        self.slots
    }

    /// Every slot matched
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.correct == self.slots
    }
}
