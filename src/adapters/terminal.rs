//! Terminal adapters: line-based input and a text board

use std::io::{BufRead, Write};

use crate::{
    Error, Result,
    ports::{Action, Display, MoveInput},
    tictactoe::{Board, Cell, Status},
};

const HELP: &str = "enter a cell 0-8, 'r' to restart, 'c' to toggle the computer, 'q' to quit";

/// Parse one line of player input.
///
/// Returns `None` for anything that is not a recognised command. Positions
/// are only checked for being a number here; range and occupancy are the
/// game's business.
pub fn parse_action(line: &str) -> Option<Action> {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "r" | "restart" => Some(Action::Restart),
        "c" | "computer" => Some(Action::ToggleComputer),
        "q" | "quit" | "exit" => Some(Action::Quit),
        other => other.parse::<usize>().ok().map(Action::Place),
    }
}

/// Reads actions line by line, prompting on `prompt`.
pub struct TerminalInput<R, W> {
    reader: R,
    prompt: W,
}

impl<R: BufRead, W: Write> TerminalInput<R, W> {
    pub fn new(reader: R, prompt: W) -> Self {
        Self { reader, prompt }
    }
}

impl TerminalInput<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Input from stdin, prompts on stdout
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> MoveInput for TerminalInput<R, W> {
    fn next_action(&mut self, _board: &Board) -> Result<Action> {
        loop {
            write!(self.prompt, "> ").map_err(|e| Error::io("write prompt", e))?;
            self.prompt
                .flush()
                .map_err(|e| Error::io("flush prompt", e))?;

            let mut line = String::new();
            let read = self
                .reader
                .read_line(&mut line)
                .map_err(|e| Error::io("read player input", e))?;
            if read == 0 {
                return Ok(Action::Quit);
            }
            if line.trim().is_empty() {
                continue;
            }

            match parse_action(&line) {
                Some(action) => return Ok(action),
                None => writeln!(self.prompt, "unrecognised input \"{}\": {HELP}", line.trim())
                    .map_err(|e| Error::io("write prompt", e))?,
            }
        }
    }
}

/// Draws the board as a 3x3 grid.
///
/// Empty cells show their index so the player knows what to type. Cells of a
/// winning line are wrapped in brackets.
pub struct TerminalDisplay<W> {
    out: W,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TerminalDisplay<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

/// Text of one board as drawn by [`TerminalDisplay`]
pub fn draw_board(board: &Board, highlight: Option<[usize; 3]>) -> String {
    let rows: Vec<String> = (0..3)
        .map(|row| {
            (0..3)
                .map(|col| {
                    let pos = row * 3 + col;
                    let mark = match board.get(pos) {
                        Cell::Empty => char::from_digit(pos as u32, 10).unwrap_or('.'),
                        cell => cell.to_char(),
                    };
                    if highlight.is_some_and(|line| line.contains(&pos)) {
                        format!("[{mark}]")
                    } else {
                        format!(" {mark} ")
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

impl<W: Write> Display for TerminalDisplay<W> {
    fn render(
        &mut self,
        board: &Board,
        status: &Status,
        highlight: Option<[usize; 3]>,
    ) -> Result<()> {
        writeln!(self.out, "\n{}\n\n{status}", draw_board(board, highlight))
            .map_err(|e| Error::io("draw board", e))?;
        if !matches!(status, Status::Turn(_)) {
            writeln!(self.out, "'r' to play again, 'c' to toggle the computer, 'q' to quit")
                .map_err(|e| Error::io("draw board", e))?;
        }
        self.out.flush().map_err(|e| Error::io("flush output", e))
    }

    fn notice(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{message}").map_err(|e| Error::io("write notice", e))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::tictactoe::Player;

    #[test]
    fn parses_commands_and_positions() {
        assert_eq!(parse_action("4\n"), Some(Action::Place(4)));
        assert_eq!(parse_action(" R "), Some(Action::Restart));
        assert_eq!(parse_action("c"), Some(Action::ToggleComputer));
        assert_eq!(parse_action("quit"), Some(Action::Quit));
        assert_eq!(parse_action("12"), Some(Action::Place(12)));
        assert_eq!(parse_action("x"), None);
        assert_eq!(parse_action("-1"), None);
    }

    #[test]
    fn skips_garbage_and_quits_at_end_of_input() {
        let mut prompt = Vec::new();
        let mut input = TerminalInput::new(Cursor::new("hello\n\n7\n"), &mut prompt);
        let board = Board::new();

        assert_eq!(input.next_action(&board).unwrap(), Action::Place(7));
        assert_eq!(input.next_action(&board).unwrap(), Action::Quit);

        let prompt = String::from_utf8(prompt).unwrap();
        assert!(prompt.contains("unrecognised input \"hello\""));
    }

    #[test]
    fn empty_cells_show_their_index() {
        let board = Board::from_string("X...O....").unwrap();
        assert_eq!(
            draw_board(&board, None),
            " X | 1 | 2 \n---+---+---\n 3 | O | 5 \n---+---+---\n 6 | 7 | 8 "
        );
    }

    #[test]
    fn winning_line_is_bracketed() {
        let board = Board::from_string("XXXOO....").unwrap();
        let mut display = TerminalDisplay::new(Vec::new());
        display
            .render(&board, &Status::Won(Player::X), Some([0, 1, 2]))
            .unwrap();

        let text = String::from_utf8(display.into_inner()).unwrap();
        assert!(text.contains("[X]|[X]|[X]"));
        assert!(text.contains("X wins!"));
    }
}
