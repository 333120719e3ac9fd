//! Board representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Number of cells on the board
pub const BOARD_CELLS: usize = 9;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
///
/// X is the human side and always opens; O is the side the computer controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => f.write_str("X"),
            Player::O => f.write_str("O"),
        }
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(crate::Error::InvalidPlayerString {
                player: other.to_string(),
            }),
        }
    }
}

/// The nine cells of a 3x3 board in row-major order.
///
/// `Board` is a small `Copy` value. Moves never mutate a board in place;
/// [`Board::place`] returns the successor board, so a caller's board is never
/// changed behind its back. A marked cell cannot be cleared again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; BOARD_CELLS],
        }
    }

    /// Create a board from nine cells
    pub fn from_cells(cells: [Cell; BOARD_CELLS]) -> Self {
        Board { cells }
    }

    /// Parse a board from its text form.
    ///
    /// Whitespace between rows is ignored, so `"XO.\n.X.\n..O"` and
    /// `"XO..X...O"` describe the same board. Empty cells may be written as
    /// `.`, `-` or `_`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidBoardLength`] unless exactly nine cells
    /// are given, and [`crate::Error::InvalidCellCharacter`] for anything that
    /// is not a cell.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != BOARD_CELLS {
            return Err(crate::Error::InvalidBoardLength {
                expected: BOARD_CELLS,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; BOARD_CELLS];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// All nine cells
    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Check if every cell is marked
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Get all empty positions in ascending order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Count the marks a player has on the board.
    pub fn count(&self, player: Player) -> usize {
        let target = player.to_cell();
        self.cells.iter().filter(|&&c| c == target).count()
    }

    /// Mark a cell for `player` and return the new board
    #[must_use = "place returns a new board; the original is unchanged"]
    pub fn place(&self, pos: usize, player: Player) -> Result<Board, crate::Error> {
        if pos >= BOARD_CELLS {
            return Err(crate::Error::InvalidPosition { position: pos });
        }

        if !self.is_empty(pos) {
            return Err(crate::Error::InvalidMove { position: pos });
        }

        Ok(self.with_mark(pos, player))
    }

    /// Mark a cell known to be empty (used by the search)
    pub(crate) fn with_mark(&self, pos: usize, player: Player) -> Board {
        debug_assert!(self.is_empty(pos), "cell {pos} is already marked");
        let mut next = *self;
        next.cells[pos] = player.to_cell();
        next
    }

    /// Compact one-line encoding, e.g. `XO..X...O`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<&[Cell]> for Board {
    type Error = crate::Error;

    fn try_from(cells: &[Cell]) -> Result<Self, Self::Error> {
        let cells: [Cell; BOARD_CELLS] =
            cells
                .try_into()
                .map_err(|_| crate::Error::InvalidBoardLength {
                    expected: BOARD_CELLS,
                    got: cells.len(),
                    context: cells.iter().map(|c| c.to_char()).collect(),
                })?;
        Ok(Board { cells })
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_string(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        for i in 0..9 {
            assert_eq!(board.get(i), Cell::Empty);
        }
        assert_eq!(board.empty_positions().len(), 9);
        assert!(!board.is_full());
    }

    #[test]
    fn test_place() {
        let board = Board::new();

        let next = board.place(4, Player::X).unwrap();
        assert_eq!(next.get(4), Cell::X);
        // The original is untouched
        assert_eq!(board.get(4), Cell::Empty);

        let err = next.place(4, Player::O).unwrap_err();
        assert!(err.to_string().contains("occupied"));

        let err = next.place(9, Player::O).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidPosition { position: 9 }));
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string("XOX......").unwrap();
        assert_eq!(board.get(0), Cell::X);
        assert_eq!(board.get(1), Cell::O);
        assert_eq!(board.get(2), Cell::X);
        assert_eq!(board.occupied_count(), 3);

        let rows = Board::from_string("XOX\n...\n...").unwrap();
        assert_eq!(rows, board);
    }

    #[test]
    fn test_from_string_rejects_bad_length() {
        let err = Board::from_string("XO").unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidBoardLength {
                expected: 9,
                got: 2,
                ..
            }
        ));

        assert!(Board::from_string("XO........").is_err());
    }

    #[test]
    fn test_from_string_rejects_bad_character() {
        let err = Board::from_string("XOZ......").unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidCellCharacter {
                character: 'Z',
                position: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_try_from_slice() {
        let cells = vec![Cell::X; 9];
        assert!(Board::try_from(cells.as_slice()).unwrap().is_full());

        let short = vec![Cell::O; 8];
        assert!(Board::try_from(short.as_slice()).is_err());
    }

    #[test]
    fn test_counts() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        assert_eq!(board.count(Player::X), 3);
        assert_eq!(board.count(Player::O), 2);
        assert_eq!(board.empty_positions(), vec![3, 5, 7, 8]);
    }

    #[test]
    fn test_display() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        assert_eq!(format!("{board}"), "XOX\n.O.\nX..");
        assert_eq!(board.encode(), "XOX.O.X..");
    }

    #[test]
    fn test_player_parsing() {
        assert_eq!("x".parse::<Player>().unwrap(), Player::X);
        assert_eq!("O".parse::<Player>().unwrap(), Player::O);
        assert!("z".parse::<Player>().is_err());
        assert_eq!(Player::X.opponent(), Player::O);
    }

    #[test]
    fn test_digit_zero_is_not_a_mark() {
        let err = Board::from_string("XO0......").unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidCellCharacter {
                character: '0',
                position: 2,
                ..
            }
        ));
        assert_eq!(Cell::from_char('0'), None);
        assert_eq!(Cell::from_char(' '), None);
    }
}
