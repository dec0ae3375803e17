//! Benchmark command
//!
//! Tests solver performance across many random answers.

use crate::core::{Answer, Grade, History, Palette};
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::info;

/// What to benchmark
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Palette size, which is also the number of slots
    pub slots: usize,
    /// Number of random answers
    pub count: usize,
    /// Seed for the answer generator
    pub seed: u64,
    /// Draw a progress bar on stderr
    pub progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(slots: usize, count: usize) -> Self {
        Self {
            slots,
            count,
            seed: 0,
            progress: false,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub slots: usize,
    pub total_answers: usize,
    pub solved: usize,
    pub total_attempts: usize,
    pub average_attempts: f64,
    pub min_attempts: usize,
    pub max_attempts: usize,
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub answers_per_second: f64,
}

/// Attempts the solver needs for one answer, `None` if it gives up
fn attempts_for(solver: &Solver, answer: &Answer) -> Option<usize> {
    let mut history = History::new();
    for attempt in 1..=solver.total() {
        let guess = solver.next_guess(&history)?;
        let grade = Grade::calculate(&guess, answer);
        if grade.is_perfect() {
            return Some(attempt);
        }
        history.record(&guess, grade.correct());
    }
    None
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░");
    pb.set_style(style);
    pb
}

/// Run the solver against `config.count` seeded random answers
///
/// Answers are drawn up front from one seeded generator, so a given config
/// always benchmarks the same answers; solving then runs in parallel.
#[must_use]
pub fn run_benchmark(config: &BenchmarkConfig) -> BenchmarkResult {
    let palette = Palette::with_size(config.slots);
    let slots = palette.len();
    let solver = Solver::new(&palette, slots);

    let mut rng = StdRng::seed_from_u64(config.seed);
    let answers: Vec<Answer> = (0..config.count)
        .map(|_| Answer::generate(&palette, slots, &mut rng))
        .collect();

    let pb = if config.progress {
        progress_bar(answers.len())
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let attempts: Vec<Option<usize>> = answers
        .par_iter()
        .map(|answer| {
            let result = attempts_for(&solver, answer);
            pb.inc(1);
            result
        })
        .collect();
    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    for &n in attempts.iter().flatten() {
        *distribution.entry(n).or_insert(0) += 1;
    }

    let solved = attempts.iter().flatten().count();
    let total_attempts: usize = attempts.iter().flatten().sum();
    let total_answers = answers.len();
    info!(slots, total_answers, solved, "benchmark finished");

    BenchmarkResult {
        slots,
        total_answers,
        solved,
        total_attempts,
        average_attempts: if solved > 0 {
            total_attempts as f64 / solved as f64
        } else {
            0.0
        },
        min_attempts: distribution.keys().next().copied().unwrap_or(0),
        max_attempts: distribution.keys().next_back().copied().unwrap_or(0),
        distribution,
        duration,
        answers_per_second: total_answers as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
