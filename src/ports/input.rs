//! Input port - where the next player action comes from

use serde::{Deserialize, Serialize};

use crate::{Result, tictactoe::Board};

/// Something the player asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Mark the cell at this index (0-8, row-major)
    Place(usize),
    /// Clear the board and start over
    Restart,
    /// Switch between playing the computer and two-player mode
    ToggleComputer,
    /// Leave the session
    Quit,
}

/// Source of player actions.
///
/// Called only when a human is expected to act: on a human turn, or after
/// the game has ended (where only [`Action::Restart`],
/// [`Action::ToggleComputer`] and [`Action::Quit`] have an effect).
///
/// # Examples
///
/// ```
/// use noughts::{
///     ports::{Action, MoveInput},
///     tictactoe::Board,
/// };
///
/// struct AlwaysCenter;
///
/// impl MoveInput for AlwaysCenter {
///     fn next_action(&mut self, _board: &Board) -> noughts::Result<Action> {
///         Ok(Action::Place(4))
///     }
/// }
///
/// let mut input = AlwaysCenter;
/// assert_eq!(input.next_action(&Board::new())?, Action::Place(4));
/// # Ok::<(), noughts::Error>(())
/// ```
pub trait MoveInput {
    /// Block until the player chooses an action.
    ///
    /// An exhausted input (end of stream) should report [`Action::Quit`].
    fn next_action(&mut self, board: &Board) -> Result<Action>;
}
