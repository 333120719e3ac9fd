//! Scripted input for tests and demos

use std::collections::VecDeque;

use crate::{
    Result,
    ports::{Action, MoveInput},
    tictactoe::Board,
};

/// Replays a fixed list of actions, then quits.
///
/// # Examples
///
/// ```
/// use noughts::adapters::ScriptedInput;
/// use noughts::ports::{Action, MoveInput};
/// use noughts::tictactoe::Board;
///
/// let mut input = ScriptedInput::new([Action::Place(4)]);
/// assert_eq!(input.next_action(&Board::new())?, Action::Place(4));
/// assert_eq!(input.next_action(&Board::new())?, Action::Quit);
/// # Ok::<(), noughts::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    actions: VecDeque<Action>,
}

impl ScriptedInput {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }

    /// Script that places marks at the given positions in order
    pub fn placing(positions: impl IntoIterator<Item = usize>) -> Self {
        Self::new(positions.into_iter().map(Action::Place))
    }
}

impl MoveInput for ScriptedInput {
    fn next_action(&mut self, _board: &Board) -> Result<Action> {
        Ok(self.actions.pop_front().unwrap_or(Action::Quit))
    }
}
