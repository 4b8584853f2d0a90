use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Markov-chain predictability analysis of a boss's attack pattern.
#[derive(Parser)]
#[command(
    name = "tell",
    version,
    about = "Simulate a boss attack chain and report how predictable it is"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(flatten)]
    pub args: AnalyzeArgs,
}

/// Report rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable sections.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Arguments for the analysis run. Every flag is optional.
#[derive(clap::Args, Default)]
pub struct AnalyzeArgs {
    /// Path to a TOML configuration file (defaults to the built-in boss chain).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the number of simulated transitions.
    #[arg(long)]
    pub steps: Option<usize>,

    /// Override the start state, by index or label.
    #[arg(long)]
    pub start: Option<String>,

    /// Override the RNG seed (random if unset everywhere).
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override how many frequent transitions to list.
    #[arg(long = "top-k")]
    pub top_k: Option<usize>,

    /// Report format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
