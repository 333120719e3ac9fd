//! Tic-Tac-Toe with an unbeatable computer opponent
//!
//! This crate provides:
//! - The 3x3 board model, outcome evaluation and winning-line analysis
//! - Minimax search for the optimal move, with an optional transposition cache
//! - Game flow with computer turns, restart and a two-player mode
//! - Input and display ports with terminal and in-memory adapters
//! - Exhaustive verification that the computer never loses
//!
//! ```
//! use noughts::{Board, Outcome, Player, best_move, evaluate};
//!
//! let board = Board::from_string("XX.OO....")?;
//! assert_eq!(evaluate(&board), Outcome::InProgress);
//! assert_eq!(best_move(&board, Player::O)?, 2);
//! # Ok::<(), noughts::Error>(())
//! ```

pub mod adapters;
pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod ports;
pub mod search;
pub mod session;
pub mod tictactoe;

pub use config::{GameConfig, SearchConfig};
pub use error::{Error, Result};
pub use search::{ScoredMove, SearchStats, Solver, best_move, score_moves};
pub use session::Session;
pub use tictactoe::{Board, Cell, Game, GameMode, Outcome, Player, Status, evaluate, winning_line};
