//! Display functions for command results

use super::formatters::{format_guess, format_slots, score_bar};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::History;
use crate::game::{GameSession, GameStatus};
use colored::Colorize;

/// Print the result of solving an answer
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let slots = result.answer.len();
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", format_guess(&result.answer));
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {} {}/{}",
            turn,
            format_guess(&step.guess),
            score_bar(step.correct, slots).green(),
            step.correct,
            slots
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if step.candidates_after > 0 {
                println!(
                    "  Reduction:  {:.1}x",
                    step.candidates_before as f64 / step.candidates_after as f64
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} attempts!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} attempts", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Bottles:          {}", result.slots);
    println!("   Answers tested:   {}", result.total_answers);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average attempts: {}",
        format!("{:.2}", result.average_attempts)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_attempts).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_attempts).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Answers/second:   {:.1}", result.answers_per_second);

    if result.total_answers == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&attempts, &count) in &result.distribution {
        let pct = (count as f64 / result.total_answers as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {attempts:2}: {bar} {count:4} ({pct:5.1}%)");
    }
}

/// Print the board and round status for the line-oriented mode
pub fn print_board(session: &GameSession) {
    match session.status() {
        GameStatus::NotStarted => {
            println!(
                "Difficulty: {} bottles  {}",
                session.difficulty().to_string().bright_yellow().bold(),
                format_guess(session.palette().colors())
            );
        }
        GameStatus::InProgress | GameStatus::Won => {
            println!("Pool:  {}", format_guess(session.palette().colors()));
            let numbers: Vec<String> = (1..=session.board().len()).map(|n| n.to_string()).collect();
            println!("       {}", numbers.join(" ").bright_black());
            println!("Board: {}", format_slots(session.board().slots()));
            if let Some(answer) = session.answer() {
                println!("Answer: {}", format_guess(answer));
            }
        }
    }
}

/// Print every graded guess, oldest first
pub fn print_history(history: &History) {
    if history.is_empty() {
        println!("{}", "No guesses yet".bright_black());
        return;
    }
    for (i, entry) in history.entries().iter().enumerate() {
        let slots = entry.guess().len();
        println!(
            "  {}. {} {} {} correct",
            (i + 1).to_string().bright_black(),
            format_guess(entry.guess()),
            score_bar(entry.correct(), slots).green(),
            entry.correct()
        );
    }
}
