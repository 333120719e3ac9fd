//! Display port - where the board and status line are shown

use crate::{
    Result,
    tictactoe::{Board, Status},
};

/// Sink for everything the player sees
pub trait Display {
    /// Show the board and status line.
    ///
    /// `highlight` holds the winning line once the game has been won.
    fn render(
        &mut self,
        board: &Board,
        status: &Status,
        highlight: Option<[usize; 3]>,
    ) -> Result<()>;

    /// Show a one-line message, e.g. why an input was rejected.
    fn notice(&mut self, message: &str) -> Result<()>;
}
