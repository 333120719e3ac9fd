//! Game session: drives a [`Game`] through the input and display ports

use tracing::{debug, info};

use crate::{
    Error, Result,
    ports::{Action, Display, MoveInput},
    search::Solver,
    tictactoe::{Game, Outcome},
};

/// A game wired to a player and a screen.
///
/// The board is always rendered before the computer starts searching, so a
/// human move is visible before the reply appears.
pub struct Session<I, D> {
    game: Game,
    solver: Solver,
    input: I,
    display: D,
}

impl<I: MoveInput, D: Display> Session<I, D> {
    pub fn new(game: Game, solver: Solver, input: I, display: D) -> Self {
        Self {
            game,
            solver,
            input,
            display,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn solver(&self) -> &Solver {
        &self.solver
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    fn render(&mut self) -> Result<()> {
        self.display.render(
            self.game.board(),
            &self.game.status(),
            self.game.winning_line(),
        )
    }

    /// Play until the input asks to quit.
    ///
    /// Returns the outcome of the game on the board when the session ended.
    /// Rejected moves are reported through [`Display::notice`] and do not end
    /// the session; I/O failures do.
    pub fn run(&mut self) -> Result<Outcome> {
        info!(mode = ?self.game.mode(), "session started");
        self.render()?;

        loop {
            if self.game.is_computer_turn() {
                let position = self.game.play_computer(&mut self.solver)?;
                debug!(position, "computer moved");
                self.render()?;
                continue;
            }

            match self.input.next_action(self.game.board())? {
                Action::Quit => break,
                Action::Restart => {
                    self.game.restart();
                    self.render()?;
                }
                Action::ToggleComputer => {
                    let enabled = self.game.mode().computer().is_none();
                    self.game.set_vs_computer(enabled);
                    let message = if enabled {
                        "playing against the computer"
                    } else {
                        "two-player mode"
                    };
                    self.display.notice(message)?;
                    self.render()?;
                }
                Action::Place(position) => match self.game.play(position) {
                    Ok(_) => self.render()?,
                    Err(
                        err @ (Error::InvalidMove { .. }
                        | Error::InvalidPosition { .. }
                        | Error::GameOver
                        | Error::NotHumanTurn { .. }),
                    ) => {
                        debug!(position, error = %err, "move rejected");
                        self.display.notice(&err.to_string())?;
                    }
                    Err(err) => return Err(err),
                },
            }
        }

        info!(outcome = ?self.game.outcome(), "session ended");
        Ok(self.game.outcome())
    }
}
