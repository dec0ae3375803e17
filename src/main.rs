//! Bottle Code - CLI
//!
//! Color bottle code-breaking puzzle with TUI and CLI modes plus an automatic
//! solver.

use anyhow::{Context, Result};
use bottle_code::{
    commands::{BenchmarkConfig, parse_answer, run_benchmark, run_simple, solve_answer},
    game::{GameConfig, GameSession, MissPolicy},
    output::{print_benchmark_result, print_solve_result},
};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "bottle_code",
    about = "Arrange colored bottles to crack the hidden order",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// TOML config file (slots, miss_policy, seed, show_history)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Number of bottles, 2-8 (overrides the config file)
    #[arg(long, global = true)]
    slots: Option<usize>,

    /// Seed for reproducible answers
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Empty the board after a wrong guess
    #[arg(long, global = true)]
    clear_on_miss: bool,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode with mouse drag-and-drop (default)
    Play,

    /// Simple CLI mode (line commands, no TUI)
    Simple,

    /// Let the solver crack a given answer, e.g. `bgry`
    Solve {
        /// The answer as color codes or names
        answer: String,

        /// Show candidate counts for each turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark solver performance on random answers
    Benchmark {
        /// Number of random answers to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

/// Merge the config file (if any) with command-line overrides
fn build_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    if let Some(slots) = cli.slots {
        config.slots = slots;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if cli.clear_on_miss {
        config.miss_policy = MissPolicy::Clear;
    }

    config.validate()?;
    Ok(config)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the log subscriber
///
/// The TUI owns the terminal, so it only logs when given a file.
fn init_logging(log_file: Option<&Path>, tui: bool) -> Result<()> {
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        // A subscriber may already be installed
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .try_init();
    } else if !tui {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .try_init();
    }
    Ok(())
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    init_logging(cli.log_file.as_deref(), matches!(command, Commands::Play))?;

    let config = build_config(&cli)?;

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple(GameSession::new(&config)),
        Commands::Solve { answer, verbose } => run_solve_command(&answer, verbose),
        Commands::Benchmark { count } => {
            run_benchmark_command(&config, count);
            Ok(())
        }
    }
}

fn run_solve_command(answer: &str, verbose: bool) -> Result<()> {
    let (answer, palette) = parse_answer(answer)?;
    let result = solve_answer(&answer, &palette)?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(config: &GameConfig, count: usize) {
    println!(
        "Running benchmark on {count} random answers with {} bottles...",
        config.slots
    );

    let result = run_benchmark(&BenchmarkConfig {
        slots: config.slots,
        count,
        seed: config.seed.unwrap_or(0),
        progress: true,
    });
    print_benchmark_result(&result);
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    use bottle_code::interactive::{App, run_tui};

    let app = App::new(config);
    run_tui(app)
}
