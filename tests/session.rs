//! Full sessions driven by scripted players

use noughts::{
    Result,
    adapters::{RecordingDisplay, ScriptedInput},
    ports::{Action, MoveInput},
    search::Solver,
    session::Session,
    tictactoe::{Board, Game, GameMode, Outcome, Player, Status, evaluate},
};

/// Always takes the lowest free cell; quits once the game is decided.
struct LowestFreeCell;

impl MoveInput for LowestFreeCell {
    fn next_action(&mut self, board: &Board) -> Result<Action> {
        if evaluate(board).is_decided() {
            return Ok(Action::Quit);
        }
        Ok(board
            .empty_positions()
            .first()
            .map_or(Action::Quit, |&pos| Action::Place(pos)))
    }
}

#[test]
fn test_computer_never_loses_a_played_out_game() {
    let mut session = Session::new(
        Game::vs_computer(),
        Solver::with_cache(),
        LowestFreeCell,
        RecordingDisplay::new(),
    );
    let outcome = session.run().unwrap();

    assert!(outcome.is_decided());
    assert_ne!(outcome, Outcome::Win(Player::X));
    assert!(session.display().notices().is_empty());

    // X moves first and the computer answers every human move
    let moves = session.game().moves();
    assert_eq!(moves[0].player, Player::X);
    for pair in moves.windows(2) {
        assert_ne!(pair[0].player, pair[1].player);
    }
}

#[test]
fn test_two_player_win_highlights_line() {
    let mut session = Session::new(
        Game::two_player(),
        Solver::new(),
        ScriptedInput::placing([0, 3, 1, 4, 2]),
        RecordingDisplay::new(),
    );
    let outcome = session.run().unwrap();
    assert_eq!(outcome, Outcome::Win(Player::X));

    let last = session.display().last_frame().unwrap();
    assert_eq!(last.status, Status::Won(Player::X));
    assert_eq!(last.status.to_string(), "X wins!");
    assert_eq!(last.highlight, Some([0, 1, 2]));
}

#[test]
fn test_moves_after_the_end_are_rejected() {
    let mut session = Session::new(
        Game::two_player(),
        Solver::new(),
        ScriptedInput::placing([0, 3, 1, 4, 2, 5]),
        RecordingDisplay::new(),
    );
    session.run().unwrap();

    let notices = session.display().notices();
    assert_eq!(notices, ["game already over"]);
    assert_eq!(session.game().board().count(Player::O), 2);
}

#[test]
fn test_restart_clears_the_board() {
    let mut session = Session::new(
        Game::two_player(),
        Solver::new(),
        ScriptedInput::new([Action::Place(0), Action::Restart, Action::Place(4)]),
        RecordingDisplay::new(),
    );
    session.run().unwrap();

    let board = session.game().board();
    assert_eq!(board.occupied_count(), 1);
    assert_eq!(board.get(4), noughts::Cell::X);
    assert_eq!(session.game().to_move(), Player::O);
}

#[test]
fn test_toggle_switches_to_two_player() {
    let mut session = Session::new(
        Game::vs_computer(),
        Solver::with_cache(),
        ScriptedInput::new([Action::ToggleComputer, Action::Place(0), Action::Place(1)]),
        RecordingDisplay::new(),
    );
    session.run().unwrap();

    assert_eq!(session.game().mode(), GameMode::TwoPlayer);
    assert_eq!(session.game().board().encode(), "XO.......");
    assert_eq!(session.display().notices(), ["two-player mode"]);
}

#[test]
fn test_toggle_back_restores_the_computer() {
    let mut session = Session::new(
        Game::two_player(),
        Solver::with_cache(),
        ScriptedInput::new([Action::ToggleComputer, Action::Place(4)]),
        RecordingDisplay::new(),
    );
    session.run().unwrap();

    // the computer replied to the center in a corner
    let board = session.game().board();
    assert_eq!(board.occupied_count(), 2);
    assert_eq!(board.get(0), noughts::Cell::O);
}
