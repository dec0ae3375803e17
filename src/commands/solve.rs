//! Answer solving command
//!
//! Runs the solver against a known answer and returns the solution path.

use crate::core::{Answer, Color, Grade, History, Palette, parse_colors};
use crate::solver::Solver;
use anyhow::{Context, Result, anyhow};
use tracing::debug;

/// Result of solving an answer
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<SolveStep>,
    pub answer: Vec<Color>,
}

/// A single guess in the solution
pub struct SolveStep {
    pub guess: Vec<Color>,
    pub correct: usize,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Parse an answer such as `bgry` or `blue green red yellow`
///
/// The palette is the first N colors, N being the answer's length, so the
/// answer must be an ordering of exactly those colors.
///
/// # Errors
///
/// Returns an error if a token is not a color or the colors don't form an
/// ordering of the palette.
pub fn parse_answer(text: &str) -> Result<(Answer, Palette)> {
    let colors = parse_colors(text)?;
    let palette = Palette::with_size(colors.len());
    let slots = colors.len();
    let answer = Answer::from_colors(colors, &palette, slots)
        .with_context(|| format!("'{text}' is not a valid answer"))?;
    Ok((answer, palette))
}

/// Solve `answer` from scratch with the automatic solver
///
/// Every step is recorded; the loop is bounded by the size of the candidate
/// space, which a consistent solver can never exceed.
///
/// # Errors
///
/// Returns an error if the answer doesn't fit the palette or the solver runs
/// out of candidates.
///
/// # Examples
/// ```
/// use bottle_code::commands::{parse_answer, solve_answer};
///
/// let (answer, palette) = parse_answer("bgry").unwrap();
/// let result = solve_answer(&answer, &palette).unwrap();
/// assert!(result.success);
/// assert_eq!(result.steps.last().unwrap().correct, 4);
/// ```
pub fn solve_answer(answer: &Answer, palette: &Palette) -> Result<SolveResult> {
    let solver = Solver::new(palette, answer.len());
    if solver.slots() != answer.len() {
        return Err(anyhow!(
            "answer has {} colors but the palette only has {}",
            answer.len(),
            palette.len()
        ));
    }

    let mut history = History::new();
    let mut steps = Vec::new();

    for _ in 0..solver.total() {
        let candidates_before = solver.count_candidates(&history);
        let guess = solver
            .next_guess(&history)
            .ok_or_else(|| anyhow!("no candidates remaining"))?;

        let grade = Grade::calculate(&guess, answer);
        history.record(&guess, grade.correct());
        let candidates_after = solver.count_candidates(&history);
        debug!(correct = grade.correct(), candidates_after, "solver step");

        steps.push(SolveStep {
            guess,
            correct: grade.correct(),
            candidates_before,
            candidates_after,
        });

        if grade.is_perfect() {
            return Ok(SolveResult {
                success: true,
                steps,
                answer: answer.to_vec(),
            });
        }
    }

    Ok(SolveResult {
        success: false,
        steps,
        answer: answer.to_vec(),
    })
}
