//! High-level game management: turns, computer replies and status

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{
    board::{Board, Player},
    outcome::{Outcome, evaluate, winning_line},
};
use crate::search::Solver;

/// The side that always opens the game
pub const FIRST_PLAYER: Player = Player::X;

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Who controls the sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Human plays X; the computer plays the given side
    VsComputer { computer: Player },
    /// Two humans share the input
    TwoPlayer,
}

impl GameMode {
    pub fn computer(&self) -> Option<Player> {
        match self {
            GameMode::VsComputer { computer } => Some(*computer),
            GameMode::TwoPlayer => None,
        }
    }
}

/// Status line shown alongside the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Turn(Player),
    Won(Player),
    Tie,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Turn(player) => write!(f, "Turn: {player}"),
            Status::Won(player) => write!(f, "{player} wins!"),
            Status::Tie => f.write_str("It's a tie!"),
        }
    }
}

/// A game in progress.
///
/// The game owns the board and the turn; the search and the evaluator only
/// ever see copies of the board.
#[derive(Debug, Clone)]
pub struct Game {
    mode: GameMode,
    board: Board,
    to_move: Player,
    moves: Vec<Move>,
    outcome: Outcome,
}

impl Game {
    /// Create a new game in the given mode
    pub fn new(mode: GameMode) -> Self {
        Game {
            mode,
            board: Board::new(),
            to_move: FIRST_PLAYER,
            moves: Vec::new(),
            outcome: Outcome::InProgress,
        }
    }

    /// Human (X) against the computer (O)
    pub fn vs_computer() -> Self {
        Self::new(GameMode::VsComputer {
            computer: Player::O,
        })
    }

    pub fn two_player() -> Self {
        Self::new(GameMode::TwoPlayer)
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_decided()
    }

    /// Current status line
    pub fn status(&self) -> Status {
        match self.outcome {
            Outcome::InProgress => Status::Turn(self.to_move),
            Outcome::Win(player) => Status::Won(player),
            Outcome::Tie => Status::Tie,
        }
    }

    /// Cells of the winning line, if the game was won
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        winning_line(&self.board)
    }

    /// Whether the computer should move next
    pub fn is_computer_turn(&self) -> bool {
        !self.is_over() && self.mode.computer() == Some(self.to_move)
    }

    /// Play a human move for the side to move.
    ///
    /// # Errors
    ///
    /// Fails when the game is over, when it is the computer's turn, or when
    /// the position is out of range or occupied. A failed move leaves the
    /// game unchanged.
    pub fn play(&mut self, position: usize) -> Result<Outcome, crate::Error> {
        if self.is_over() {
            return Err(crate::Error::GameOver);
        }
        if let Some(computer) = self.mode.computer()
            && computer == self.to_move
        {
            return Err(crate::Error::NotHumanTurn { computer });
        }
        self.apply(position)
    }

    /// Let the computer choose and play its move; returns the chosen position.
    pub fn play_computer(&mut self, solver: &mut Solver) -> Result<usize, crate::Error> {
        if self.is_over() {
            return Err(crate::Error::GameOver);
        }
        let position = solver.best_move(&self.board, self.to_move)?;
        self.apply(position)?;
        Ok(position)
    }

    /// Start over with an empty board, keeping the mode
    pub fn restart(&mut self) {
        *self = Game::new(self.mode);
        info!("game restarted");
    }

    /// Switch between playing the computer and two-player mode.
    ///
    /// Changing the opponent starts a new game.
    pub fn set_vs_computer(&mut self, enabled: bool) {
        self.mode = if enabled {
            GameMode::VsComputer {
                computer: Player::O,
            }
        } else {
            GameMode::TwoPlayer
        };
        self.restart();
    }

    fn apply(&mut self, position: usize) -> Result<Outcome, crate::Error> {
        let player = self.to_move;
        self.board = self.board.place(position, player)?;
        self.moves.push(Move { position, player });
        self.outcome = evaluate(&self.board);
        info!(%player, position, "move played");

        match self.outcome {
            Outcome::InProgress => self.to_move = player.opponent(),
            Outcome::Win(winner) => info!(%winner, moves = self.moves.len(), "game won"),
            Outcome::Tie => info!(moves = self.moves.len(), "game tied"),
        }

        Ok(self.outcome)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::vs_computer()
    }
}
