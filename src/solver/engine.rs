//! Automatic solver
//!
//! Keeps every arrangement the answer could still be and narrows it with each
//! scored guess. Guesses are always drawn from the remaining candidates.

use super::minimax::select_best_guess;
use crate::core::{Color, Grade, History, Palette};
use rayon::prelude::*;

/// Above this many candidates minimax is skipped (it is quadratic)
pub const MINIMAX_LIMIT: usize = 720;

/// Solver for one palette and slot count
pub struct Solver {
    slots: usize,
    arrangements: Vec<Vec<Color>>,
}

impl Solver {
    /// Enumerate every ordered selection of `slots` distinct palette colors
    #[must_use]
    pub fn new(palette: &Palette, slots: usize) -> Self {
        let slots = slots.min(palette.len());
        Self {
            slots,
            arrangements: arrangements(palette.colors(), slots),
        }
    }

    #[must_use]
    pub const fn slots(&self) -> usize {
        self.slots
    }

    /// Size of the full candidate space
    #[must_use]
    pub fn total(&self) -> usize {
        self.arrangements.len()
    }

    /// Arrangements that would have produced every score in `history`
    ///
    /// # Examples
    /// ```
    /// use bottle_code::core::{Color::*, History, Palette};
    /// use bottle_code::solver::Solver;
    ///
    /// let solver = Solver::new(&Palette::with_size(3), 3);
    /// let mut history = History::new();
    /// history.record(&[Red, Blue, Green], 3);
    ///
    /// let left = solver.candidates(&history);
    /// assert_eq!(left, vec![&[Red, Blue, Green][..]]);
    /// ```
    #[must_use]
    pub fn candidates(&self, history: &History) -> Vec<&[Color]> {
        self.arrangements
            .par_iter()
            .map(Vec::as_slice)
            .filter(|candidate| is_consistent(candidate, history))
            .collect()
    }

    #[must_use]
    pub fn count_candidates(&self, history: &History) -> usize {
        self.arrangements
            .par_iter()
            .filter(|candidate| is_consistent(candidate, history))
            .count()
    }

    /// Next guess given what has been scored so far
    ///
    /// Returns `None` only when the history is contradictory.
    #[must_use]
    pub fn next_guess(&self, history: &History) -> Option<Vec<Color>> {
        let candidates = self.candidates(history);

        let guess = match candidates.len() {
            0 => return None,
            1 => candidates[0],
            n if n <= MINIMAX_LIMIT => select_best_guess(&candidates).map(|(g, _)| g)?,
            _ => candidates[0],
        };
        Some(guess.to_vec())
    }
}

fn is_consistent(candidate: &[Color], history: &History) -> bool {
    history
        .entries()
        .iter()
        .all(|entry| Grade::calculate(entry.guess(), candidate).correct() == entry.correct())
}

/// Every ordered selection of `len` distinct items from `colors`
fn arrangements(colors: &[Color], len: usize) -> Vec<Vec<Color>> {
    fn extend(
        colors: &[Color],
        len: usize,
        used: &mut [bool],
        current: &mut Vec<Color>,
        out: &mut Vec<Vec<Color>>,
    ) {
        if current.len() == len {
            out.push(current.clone());
            return;
        }
        for (i, &color) in colors.iter().enumerate() {
            if used[i] {
                continue;
            }
            used[i] = true;
            current.push(color);
            extend(colors, len, used, current, out);
            current.pop();
            used[i] = false;
        }
    }

    let mut out = Vec::new();
    let mut used = vec![false; colors.len()];
    let mut current = Vec::with_capacity(len);
    extend(colors, len, &mut used, &mut current, &mut out);
    out
}
