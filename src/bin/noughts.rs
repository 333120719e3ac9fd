//! noughts - Tic-Tac-Toe against an unbeatable minimax opponent
//!
//! This CLI provides:
//! - An interactive terminal game, against the computer or a second player
//! - Analysis of a single board: outcome, threats and move scores
//! - Exhaustive verification that the computer never loses

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use noughts::{cli::commands, config::GameConfig};

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Tic-Tac-Toe with an unbeatable computer opponent", long_about = None)]
struct Cli {
    /// JSON configuration file; defaults apply when it does not exist
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal
    Play(commands::play::PlayArgs),

    /// Evaluate a board and score every move
    Analyze(commands::analyze::AnalyzeArgs),

    /// Check that the computer never loses
    Verify(commands::verify::VerifyArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GameConfig::load_or_default(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    noughts::logging::setup(&config.log_filter)?;

    match cli.command {
        Commands::Play(args) => commands::play::execute(args, &config),
        Commands::Analyze(args) => commands::analyze::execute(args),
        Commands::Verify(args) => commands::verify::execute(args),
    }
}
