//! Rotations and reflections of the 3x3 board (the dihedral group D4)
//!
//! Used to check that the search treats symmetric positions alike.

use serde::{Deserialize, Serialize};

use super::board::{BOARD_CELLS, Board, Cell};

/// One of the eight symmetries of the square.
///
/// Applied as: mirror left-right first (if `mirrored`), then turn clockwise
/// `quarter_turns` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct D4Transform {
    pub quarter_turns: u8,
    pub mirrored: bool,
}

impl D4Transform {
    /// All eight symmetries, identity first
    pub fn all() -> [D4Transform; 8] {
        std::array::from_fn(|i| D4Transform {
            quarter_turns: (i / 2) as u8,
            mirrored: i % 2 == 1,
        })
    }

    /// Where the cell at `pos` ends up
    pub fn transform_position(&self, pos: usize) -> usize {
        let (row, col) = (pos / 3, pos % 3);
        let col = if self.mirrored { 2 - col } else { col };

        // clockwise quarter turn: (row, col) -> (col, 2 - row)
        let (row, col) = match self.quarter_turns % 4 {
            0 => (row, col),
            1 => (col, 2 - row),
            2 => (2 - row, 2 - col),
            _ => (2 - col, row),
        };
        row * 3 + col
    }
}

impl Board {
    /// The board with every mark moved by `t`
    pub fn transform(&self, t: &D4Transform) -> Self {
        let mut cells = [Cell::Empty; BOARD_CELLS];
        for (pos, &cell) in self.cells().iter().enumerate() {
            cells[t.transform_position(pos)] = cell;
        }
        Board::from_cells(cells)
    }
}
