//! The eight winning lines and threat detection

use super::{Cell, Player};

/// Index triples of the 3x3 board: rows, then columns, then diagonals.
///
/// Order matters: when a board holds more than one complete line, the first
/// one listed here is reported.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Line queries over raw cells
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// First line in table order whose three cells hold the same mark
    pub fn completed_line(cells: &[Cell; 9]) -> Option<([usize; 3], Player)> {
        WINNING_LINES.into_iter().find_map(|line @ [a, b, c]| {
            let owner = cells[a].player()?;
            (cells[b] == cells[a] && cells[c] == cells[a]).then_some((line, owner))
        })
    }

    /// Empty cells that would complete a line for the player, ascending
    pub fn winning_moves(cells: &[Cell; 9], player: Player) -> Vec<usize> {
        let mut threats: Vec<usize> = WINNING_LINES
            .iter()
            .filter_map(|line| Self::completing_cell(cells, player, line))
            .collect();
        threats.sort_unstable();
        threats.dedup();
        threats
    }

    /// The single empty cell of a line whose other two cells are the player's
    fn completing_cell(cells: &[Cell; 9], player: Player, line: &[usize; 3]) -> Option<usize> {
        let mark = player.to_cell();
        let owned = line.iter().filter(|&&pos| cells[pos] == mark).count();
        let mut empty = line.iter().copied().filter(|&pos| cells[pos] == Cell::Empty);

        match (owned, empty.next(), empty.next()) {
            (2, Some(pos), None) => Some(pos),
            _ => None,
        }
    }
}
