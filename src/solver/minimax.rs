//! Minimax guess selection
//!
//! For a guess, candidates are grouped by the score they would produce; the
//! largest group is the worst case left after that guess.

use crate::core::{Color, Grade};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Worst-case number of candidates remaining after `guess`
///
/// # Examples
/// ```
/// use bottle_code::core::Color::{Blue, Green, Red};
/// use bottle_code::solver::minimax::calculate_max_remaining;
///
/// let a = [Red, Green, Blue];
/// let b = [Red, Blue, Green];
/// let c = [Blue, Red, Green];
/// let candidates = [a.as_slice(), b.as_slice(), c.as_slice()];
/// // Scores 3, 1, 0: every candidate ends up alone
/// assert_eq!(calculate_max_remaining(&[Red, Green, Blue], &candidates), 1);
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &[Color], candidates: &[&[Color]]) -> usize {
    group_by_score(guess, candidates)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}

fn group_by_score(guess: &[Color], candidates: &[&[Color]]) -> FxHashMap<usize, usize> {
    let mut counts = FxHashMap::default();
    for &candidate in candidates {
        let correct = Grade::calculate(guess, candidate).correct();
        *counts.entry(correct).or_insert(0) += 1;
    }
    counts
}

/// Candidate whose worst case is smallest, with that worst case
///
/// Ties go to the earliest candidate. Returns `None` for an empty slice.
#[must_use]
pub fn select_best_guess<'a>(candidates: &[&'a [Color]]) -> Option<(&'a [Color], usize)> {
    candidates
        .par_iter()
        .map(|&guess| (guess, calculate_max_remaining(guess, candidates)))
        .min_by_key(|(_, max)| *max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::{Blue, Green, Red};

    #[test]
    fn empty_candidates() {
        assert_eq!(calculate_max_remaining(&[Red, Blue], &[]), 0);
        assert!(select_best_guess(&[]).is_none());
    }

    #[test]
    fn all_in_one_group() {
        // Neither candidate matches the guess anywhere
        let (a, b) = ([Blue, Red], [Green, Red]);
        let candidates = [a.as_slice(), b.as_slice()];
        assert_eq!(calculate_max_remaining(&[Red, Green], &candidates), 2);
    }

    #[test]
    fn picks_the_splitting_guess() {
        let arrangements = [
            [Red, Green, Blue],
            [Red, Blue, Green],
            [Green, Red, Blue],
            [Blue, Green, Red],
        ];
        let candidates: Vec<&[Color]> = arrangements.iter().map(|a| a.as_slice()).collect();
        let (best, worst) = select_best_guess(&candidates).unwrap();
        assert!(worst <= 2);
        assert_eq!(calculate_max_remaining(best, &candidates), worst);
    }
}
