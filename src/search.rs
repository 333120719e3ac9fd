//! Optimal move search (minimax) over the 3x3 board
//!
//! Scores are absolute from O's point of view through the whole tree: O is
//! the maximizing side, X the minimizing side, regardless of who is searching.
//! A won position scores [`WIN_SCORE`] for O and `-WIN_SCORE` for X; a tie
//! scores zero.
//!
//! Candidates are scanned in index order 0..8 and replaced only on a strict
//! improvement, so among equally good moves the lowest index is chosen.

pub mod solver;

use serde::{Deserialize, Serialize};

use crate::tictactoe::{Board, Outcome, Player, evaluate};

pub use solver::{SearchStats, Solver};

/// Magnitude of a decided win
pub const WIN_SCORE: i32 = 10;

/// The side whose wins score positive
pub const MAXIMIZER: Player = Player::O;

/// A candidate move and its minimax score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoredMove {
    /// `None` at terminal nodes
    pub position: Option<usize>,
    pub score: i32,
}

impl ScoredMove {
    pub fn new(position: usize, score: i32) -> Self {
        ScoredMove {
            position: Some(position),
            score,
        }
    }

    /// Score of a decided position, no move attached
    pub fn terminal(score: i32) -> Self {
        ScoredMove {
            position: None,
            score,
        }
    }
}

/// Score of a decided outcome, `None` while the game is in progress
pub fn terminal_score(outcome: Outcome) -> Option<i32> {
    match outcome {
        Outcome::Win(player) if player == MAXIMIZER => Some(WIN_SCORE),
        Outcome::Win(_) => Some(-WIN_SCORE),
        Outcome::Tie => Some(0),
        Outcome::InProgress => None,
    }
}

/// Keep `best` unless `candidate` is strictly better for `turn`
pub fn prefer(best: Option<ScoredMove>, candidate: ScoredMove, turn: Player) -> ScoredMove {
    match best {
        None => candidate,
        Some(best) => {
            let improves = if turn == MAXIMIZER {
                candidate.score > best.score
            } else {
                candidate.score < best.score
            };
            if improves { candidate } else { best }
        }
    }
}

/// Reject boards the search must not be asked about.
///
/// # Errors
///
/// [`crate::Error::GameOver`] for a won board, [`crate::Error::NoValidMoves`]
/// for a full one.
pub fn ensure_searchable(board: &Board) -> Result<(), crate::Error> {
    match evaluate(board) {
        Outcome::InProgress => Ok(()),
        Outcome::Win(_) => Err(crate::Error::GameOver),
        Outcome::Tie => Err(crate::Error::NoValidMoves),
    }
}

/// Best move for `side` on `board` by exhaustive minimax.
///
/// The caller's board is never modified.
pub fn best_move(board: &Board, side: Player) -> Result<usize, crate::Error> {
    Solver::new().best_move(board, side)
}

/// Minimax score of every legal move for `side`, in index order
pub fn score_moves(board: &Board, side: Player) -> Result<Vec<ScoredMove>, crate::Error> {
    Solver::new().score_moves(board, side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::LineAnalyzer;

    #[test]
    fn terminal_scores_are_absolute() {
        assert_eq!(terminal_score(Outcome::Win(Player::O)), Some(10));
        assert_eq!(terminal_score(Outcome::Win(Player::X)), Some(-10));
        assert_eq!(terminal_score(Outcome::Tie), Some(0));
        assert_eq!(terminal_score(Outcome::InProgress), None);
    }

    #[test]
    fn prefer_keeps_first_on_ties() {
        let first = ScoredMove::new(1, 0);
        let later = ScoredMove::new(5, 0);
        assert_eq!(prefer(Some(first), later, Player::O), first);
        assert_eq!(prefer(Some(first), later, Player::X), first);
    }

    #[test]
    fn prefer_direction_follows_turn() {
        let low = ScoredMove::new(0, -10);
        let high = ScoredMove::new(1, 10);
        assert_eq!(prefer(Some(low), high, Player::O), high);
        assert_eq!(prefer(Some(high), low, Player::X), low);
        assert_eq!(prefer(None, low, Player::O), low);
    }

    #[test]
    fn searching_a_decided_board_fails() {
        let won = Board::from_string("XXX.OO...").unwrap();
        assert!(matches!(best_move(&won, Player::O), Err(crate::Error::GameOver)));

        let full = Board::from_string("XOXXOOOXX").unwrap();
        assert!(matches!(
            best_move(&full, Player::O),
            Err(crate::Error::NoValidMoves)
        ));
    }

    #[test]
    fn takes_immediate_win() {
        // O O .
        // X . .
        // . X .
        let board = Board::from_string("OO.X...X.").unwrap();
        assert!(LineAnalyzer::winning_moves(board.cells(), Player::X).is_empty());
        assert_eq!(best_move(&board, Player::O).unwrap(), 2);
    }
}
