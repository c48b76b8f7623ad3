//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Headless dream story runner.
#[derive(Parser, Debug)]
#[command(name = "headless")]
#[command(about = "Run the dream story life simulation without a UI")]
pub struct Cli {
    /// TOML file with simulation settings (decay rates, timings).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the real-time tick interval in milliseconds.
    #[arg(long, global = true)]
    pub tick_ms: Option<u64>,

    /// Keep an action's usage record when it runs past midnight.
    #[arg(long, global = true)]
    pub keep_usage_across_midnight: bool,

    #[command(subcommand)]
    pub mode: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
    /// Run as fast as possible with an automated player.
    Batch(BatchArgs),
    /// Run in real time, reading commands from stdin.
    Live,
}

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Maximum number of clock ticks (simulated minutes at 1x).
    #[arg(long, default_value_t = 20_160)]
    pub ticks: u64,

    #[arg(long, value_enum, default_value_t = PlayerKind::Greedy)]
    pub player: PlayerKind,

    /// Random seed for the random player.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Chance per decision that the random player acts.
    #[arg(long, default_value_t = 0.05)]
    pub act_probability: f64,

    /// Lowest-need level below which the greedy player acts.
    #[arg(long, default_value_t = 60.0)]
    pub threshold: f64,

    /// Clock speed multiplier (1, 2 or 4).
    #[arg(long, default_value_t = 1)]
    pub speed: u32,

    /// Directory for `snapshots.csv` and `actions.csv`.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Write a snapshot row every N ticks.
    #[arg(long, default_value_t = 60)]
    pub snapshot_every: u64,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerKind {
    Idle,
    Greedy,
    Random,
}
