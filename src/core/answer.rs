//! The hidden color sequence a round is played against

use super::{Color, Palette};
use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;
use std::ops::Deref;
use thiserror::Error;

/// Hidden answer: distinct palette colors in a fixed order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer(Vec<Color>);

/// Reasons a caller-supplied answer is refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerError {
    #[error("answer must have {expected} colors, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("answer repeats {0}")]
    Duplicate(Color),
    #[error("{0} is not in the palette")]
    NotInPalette(Color),
    #[error("an answer needs 2 to 8 colors, got {0}")]
    SlotsOutOfRange(usize),
}

impl Answer {
    /// Draw a random answer from the palette
    ///
    /// Fisher–Yates shuffles a copy of the palette and keeps the first
    /// `num_slots` colors, so every ordered selection is equally likely.
    /// `num_slots` larger than the palette is capped at the palette size.
    ///
    /// # Examples
    /// ```
    /// use bottle_code::core::{Answer, Palette};
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let palette = Palette::default();
    /// let answer = Answer::generate(&palette, 4, &mut StdRng::seed_from_u64(7));
    /// assert_eq!(answer.len(), 4);
    /// assert!(answer.iter().all(|c| palette.contains(*c)));
    /// ```
    pub fn generate<R: Rng + ?Sized>(palette: &Palette, num_slots: usize, rng: &mut R) -> Self {
        let mut colors = palette.colors().to_vec();
        colors.shuffle(rng);
        colors.truncate(num_slots);
        Self(colors)
    }

    /// Build an answer from explicit colors, validated against the palette
    ///
    /// # Errors
    /// Returns `AnswerError` when `num_slots` is outside
    /// `[Palette::MIN, Palette::MAX]`, the length isn't `num_slots`, a color
    /// repeats, or a color is outside the palette.
    pub fn from_colors(
        colors: Vec<Color>,
        palette: &Palette,
        num_slots: usize,
    ) -> Result<Self, AnswerError> {
        if !(Palette::MIN..=Palette::MAX).contains(&num_slots) {
            return Err(AnswerError::SlotsOutOfRange(num_slots));
        }
        if colors.len() != num_slots {
            return Err(AnswerError::WrongLength {
                expected: num_slots,
                actual: colors.len(),
            });
        }

        let mut seen = FxHashSet::default();
        for &color in &colors {
            if !palette.contains(color) {
                return Err(AnswerError::NotInPalette(color));
            }
            if !seen.insert(color) {
                return Err(AnswerError::Duplicate(color));
            }
        }

        Ok(Self(colors))
    }

    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.0
    }
}

impl Deref for Answer {
    type Target = [Color];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rustc_hash::FxHashMap;

    #[test]
    fn generated_answers_are_distinct_palette_colors() {
        let mut rng = StdRng::seed_from_u64(42);
        for size in Palette::MIN..=Palette::MAX {
            let palette = Palette::with_size(size);
            for _ in 0..50 {
                let answer = Answer::generate(&palette, size, &mut rng);
                assert_eq!(answer.len(), size);
                let unique: FxHashSet<Color> = answer.iter().copied().collect();
                assert_eq!(unique.len(), size);
                assert!(answer.iter().all(|c| palette.contains(*c)));
            }
        }
    }

    #[test]
    fn shuffle_is_unbiased_over_full_permutations() {
        // 3 colors -> 6 permutations, each expected 1/6 of the draws
        let palette = Palette::with_size(3);
        let mut rng = StdRng::seed_from_u64(2024);
        let draws = 60_000;
        let mut counts: FxHashMap<Vec<Color>, usize> = FxHashMap::default();

        for _ in 0..draws {
            let answer = Answer::generate(&palette, 3, &mut rng);
            *counts.entry(answer.colors().to_vec()).or_insert(0) += 1;
        }

        assert_eq!(counts.len(), 6);
        let expected = draws / 6;
        for (perm, count) in &counts {
            assert!(
                count.abs_diff(expected) < expected / 20,
                "permutation {perm:?} drawn {count} times, expected about {expected}"
            );
        }
    }

    #[test]
    fn shuffle_is_unbiased_per_position() {
        // Each color should land in each position about 1/n of the time
        let palette = Palette::with_size(8);
        let mut rng = StdRng::seed_from_u64(99);
        let draws = 40_000;
        let mut grid = [[0usize; 8]; 8];

        for _ in 0..draws {
            let answer = Answer::generate(&palette, 8, &mut rng);
            for (pos, color) in answer.iter().enumerate() {
                let idx = Color::ALL.iter().position(|c| c == color).unwrap();
                grid[pos][idx] += 1;
            }
        }

        let expected = draws / 8;
        for row in &grid {
            for &count in row {
                assert!(count.abs_diff(expected) < expected / 10);
            }
        }
    }

    #[test]
    fn truncated_selection_covers_all_ordered_pairs() {
        let palette = Palette::with_size(4);
        let mut rng = StdRng::seed_from_u64(5);
        let mut counts: FxHashMap<Vec<Color>, usize> = FxHashMap::default();

        for _ in 0..24_000 {
            let answer = Answer::generate(&palette, 2, &mut rng);
            *counts.entry(answer.colors().to_vec()).or_insert(0) += 1;
        }

        // 4 * 3 ordered pairs
        assert_eq!(counts.len(), 12);
        for count in counts.values() {
            assert!(count.abs_diff(2_000) < 200);
        }
    }

    #[test]
    fn from_colors_validates() {
        let palette = Palette::default();
        let ok = Answer::from_colors(
            vec![Color::Red, Color::Green, Color::Blue, Color::Yellow],
            &palette,
            4,
        );
        assert!(ok.is_ok());

        assert_eq!(
            Answer::from_colors(vec![Color::Red], &palette, 4),
            Err(AnswerError::WrongLength {
                expected: 4,
                actual: 1
            })
        );
        assert_eq!(
            Answer::from_colors(
                vec![Color::Red, Color::Red, Color::Blue, Color::Yellow],
                &palette,
                4
            ),
            Err(AnswerError::Duplicate(Color::Red))
        );
        assert_eq!(
            Answer::from_colors(
                vec![Color::Red, Color::Cyan, Color::Blue, Color::Yellow],
                &palette,
                4
            ),
            Err(AnswerError::NotInPalette(Color::Cyan))
        );
    }

    #[test]
    fn slot_count_outside_range_is_rejected() {
        let palette = Palette::with_size(2);
        assert_eq!(
            Answer::from_colors(vec![Color::Red], &palette, 1),
            Err(AnswerError::SlotsOutOfRange(1))
        );

        let mut nine = Color::ALL.to_vec();
        nine.push(Color::Red);
        assert_eq!(
            Answer::from_colors(nine, &Palette::with_size(Palette::MAX), 9),
            Err(AnswerError::SlotsOutOfRange(9))
        );
    }
}
