//! Outcome evaluation over hand-built and enumerated boards

use noughts::{
    analysis::reachable_positions,
    tictactoe::{Board, Cell, Outcome, Player, WINNING_LINES, evaluate, winning_line},
};

fn board_with_line(line: [usize; 3], player: Player) -> Board {
    let mut cells = [Cell::Empty; 9];
    for pos in line {
        cells[pos] = player.to_cell();
    }
    Board::from_cells(cells)
}

mod wins {
    use super::*;

    #[test]
    fn test_every_line_wins_for_both_marks() {
        for line in WINNING_LINES {
            for player in [Player::X, Player::O] {
                let board = board_with_line(line, player);
                assert_eq!(evaluate(&board), Outcome::Win(player), "{line:?} for {player}");
                assert_eq!(winning_line(&board), Some(line));
            }
        }
    }

    #[test]
    fn test_win_on_full_board_is_not_a_tie() {
        // X completes the left column with the last empty cell
        let board = Board::from_string("XOOXXOXOX").unwrap();
        assert_eq!(evaluate(&board), Outcome::Win(Player::X));
    }

    #[test]
    fn test_first_line_in_table_order_decides_impossible_boards() {
        // Both marks own a row; the top row comes first
        let board = Board::from_string("OOOXXX...").unwrap();
        assert_eq!(evaluate(&board), Outcome::Win(Player::O));
        assert_eq!(winning_line(&board), Some([0, 1, 2]));
    }
}

mod ties_and_progress {
    use super::*;

    #[test]
    fn test_full_board_without_line_is_tie() {
        let board = Board::from_string("XOXXOOOXX").unwrap();
        assert_eq!(evaluate(&board), Outcome::Tie);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_no_line_with_empty_cell_is_in_progress_everywhere() {
        for board in reachable_positions() {
            let cells = board.cells();
            let has_line = WINNING_LINES
                .iter()
                .any(|&[a, b, c]| cells[a] != Cell::Empty && cells[a] == cells[b] && cells[a] == cells[c]);
            if !has_line && !board.is_full() {
                assert_eq!(evaluate(&board), Outcome::InProgress, "{}", board.encode());
            }
        }
    }
}

mod board_shape {
    use super::*;

    #[test]
    fn test_wrong_length_is_rejected() {
        let err = Board::from_string("XO.").unwrap_err();
        assert!(matches!(
            err,
            noughts::Error::InvalidBoardLength {
                expected: 9,
                got: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_character_is_rejected() {
        let err = Board::from_string("XO.Z.....").unwrap_err();
        assert!(matches!(
            err,
            noughts::Error::InvalidCellCharacter {
                character: 'Z',
                position: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_slice_of_wrong_length_is_rejected() {
        let cells = vec![Cell::Empty; 10];
        assert!(Board::try_from(cells.as_slice()).is_err());
    }
}
