//! Tic-Tac-Toe board model, outcome evaluation and game flow

pub mod board;
pub mod game;
pub mod lines;
pub mod outcome;
pub mod symmetry;

pub use board::{Board, Cell, Player};
pub use game::{Game, GameMode, Move, Status};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use outcome::{Outcome, evaluate, winning_line};
pub use symmetry::D4Transform;
