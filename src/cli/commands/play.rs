//! Play command - interactive game in the terminal

use anyhow::Result;
use clap::Parser;

use crate::{
    adapters::{TerminalDisplay, TerminalInput},
    config::GameConfig,
    search::Solver,
    session::Session,
    tictactoe::Game,
};

#[derive(Parser, Debug)]
#[command(about = "Play in the terminal")]
pub struct PlayArgs {
    /// Two humans share the keyboard
    #[arg(long)]
    pub two_player: bool,

    /// Search the full tree on every computer move
    #[arg(long)]
    pub no_cache: bool,
}

impl PlayArgs {
    /// Apply the flags on top of the loaded configuration
    pub fn apply(&self, config: GameConfig) -> GameConfig {
        let mut config = config;
        if self.two_player {
            config = config.with_vs_computer(false);
        }
        if self.no_cache {
            config = config.with_transposition_cache(false);
        }
        config
    }
}

pub fn execute(args: PlayArgs, config: &GameConfig) -> Result<()> {
    let config = args.apply(config.clone());
    config.validate()?;

    println!("Noughts and crosses. X moves first.");
    println!("Enter a cell 0-8, 'r' to restart, 'c' to toggle the computer, 'q' to quit.");

    let mut session = Session::new(
        Game::new(config.game_mode()),
        Solver::from_config(&config.search),
        TerminalInput::stdio(),
        TerminalDisplay::stdout(),
    );
    session.run()?;

    let stats = session.solver().stats();
    tracing::debug!(
        nodes = stats.nodes,
        cache_hits = stats.cache_hits,
        "search totals for the session"
    );
    Ok(())
}
