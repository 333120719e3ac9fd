//! Outcome evaluation: win, tie, or game still in progress

use serde::{Deserialize, Serialize};

use super::{Board, LineAnalyzer, Player};

/// Decided or undecided status of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No winning line and at least one empty cell
    InProgress,
    Win(Player),
    Tie,
}

impl Outcome {
    /// True for `Win` and `Tie`
    pub fn is_decided(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Evaluate a board.
///
/// Lines are checked before fullness, so a full board that contains a line is
/// a win, not a tie. Any board is accepted; if both marks hold a line the
/// first one in [`WINNING_LINES`](super::WINNING_LINES) order decides.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((_, owner)) = LineAnalyzer::completed_line(board.cells()) {
        Outcome::Win(owner)
    } else if board.is_full() {
        Outcome::Tie
    } else {
        Outcome::InProgress
    }
}

/// First completed line on the board, whichever mark holds it
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    LineAnalyzer::completed_line(board.cells()).map(|(line, _)| line)
}
