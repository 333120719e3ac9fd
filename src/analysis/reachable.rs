//! Enumeration of positions reachable from the empty board

use std::collections::{HashSet, VecDeque};

use crate::tictactoe::{Board, Player, evaluate, game::FIRST_PLAYER};

/// Side to move on a board reached by alternating play from the empty board
pub fn side_to_move(board: &Board) -> Player {
    if board.count(Player::X) > board.count(Player::O) {
        FIRST_PLAYER.opponent()
    } else {
        FIRST_PLAYER
    }
}

/// Every board reachable by legal play, decided ones included, in
/// breadth-first order.
pub fn reachable_positions() -> Vec<Board> {
    let root = Board::new();
    let mut visited = HashSet::from([root]);
    let mut queue = VecDeque::from([root]);
    let mut positions = Vec::new();

    while let Some(board) = queue.pop_front() {
        positions.push(board);

        if evaluate(&board).is_decided() {
            continue;
        }

        let turn = side_to_move(&board);
        for pos in board.empty_positions() {
            let Ok(next) = board.place(pos, turn) else {
                continue;
            };
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    positions
}

/// Reachable undecided boards where `side` is to move
pub fn decision_positions(side: Player) -> Vec<Board> {
    reachable_positions()
        .into_iter()
        .filter(|board| !evaluate(board).is_decided() && side_to_move(board) == side)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_position_counts() {
        let all = reachable_positions();
        assert_eq!(all.len(), 5478);

        let decided = all.iter().filter(|b| evaluate(b).is_decided()).count();
        assert_eq!(decided, 958);

        let x_turns = decision_positions(Player::X).len();
        let o_turns = decision_positions(Player::O).len();
        assert_eq!(x_turns + o_turns, 5478 - 958);
    }

    #[test]
    fn side_to_move_alternates() {
        assert_eq!(side_to_move(&Board::new()), Player::X);
        assert_eq!(side_to_move(&Board::from_string("X........").unwrap()), Player::O);
        assert_eq!(side_to_move(&Board::from_string("XO.......").unwrap()), Player::X);
    }
}
