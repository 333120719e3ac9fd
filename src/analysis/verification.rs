//! Brute-force verification of the computer's play

use serde::Serialize;
use tracing::{debug, info, warn};

use super::reachable::decision_positions;
use crate::{
    Result,
    search::Solver,
    tictactoe::{Board, Move, Outcome, Player, evaluate},
};

/// Results of playing the computer against every human strategy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UnbeatableReport {
    /// Distinct finished games
    pub games: usize,
    pub computer_wins: usize,
    pub ties: usize,
    pub computer_losses: usize,
    /// Move list of the first lost game, if any
    pub first_loss: Option<Vec<Move>>,
}

impl UnbeatableReport {
    pub fn is_unbeatable(&self) -> bool {
        self.computer_losses == 0
    }

    fn record(&mut self, outcome: Outcome, computer: Player, moves: &[Move]) {
        self.games += 1;
        match outcome {
            Outcome::Win(winner) if winner == computer => self.computer_wins += 1,
            Outcome::Win(_) => {
                self.computer_losses += 1;
                if self.first_loss.is_none() {
                    self.first_loss = Some(moves.to_vec());
                }
            }
            Outcome::Tie => self.ties += 1,
            Outcome::InProgress => {}
        }
    }
}

/// Play X through every possible move sequence with O answering by `solver`.
///
/// X moves first; each X move branches over every empty cell, each O move is
/// the solver's choice.
pub fn verify_unbeatable(solver: &mut Solver) -> Result<UnbeatableReport> {
    let mut report = UnbeatableReport::default();
    let mut moves = Vec::with_capacity(9);
    explore_human_turn(Board::new(), solver, &mut moves, &mut report)?;

    if report.is_unbeatable() {
        info!(
            games = report.games,
            computer_wins = report.computer_wins,
            ties = report.ties,
            "computer never lost"
        );
    } else {
        warn!(
            losses = report.computer_losses,
            first_loss = ?report.first_loss,
            "computer lost"
        );
    }
    Ok(report)
}

fn explore_human_turn(
    board: Board,
    solver: &mut Solver,
    moves: &mut Vec<Move>,
    report: &mut UnbeatableReport,
) -> Result<()> {
    let (human, computer) = (Player::X, Player::O);

    for position in board.empty_positions() {
        let after_human = board.place(position, human)?;
        moves.push(Move {
            position,
            player: human,
        });

        let outcome = evaluate(&after_human);
        if outcome.is_decided() {
            report.record(outcome, computer, moves);
        } else {
            let reply = solver.best_move(&after_human, computer)?;
            let after_reply = after_human.place(reply, computer)?;
            moves.push(Move {
                position: reply,
                player: computer,
            });

            let outcome = evaluate(&after_reply);
            if outcome.is_decided() {
                report.record(outcome, computer, moves);
            } else {
                explore_human_turn(after_reply, solver, moves, report)?;
            }
            moves.pop();
        }
        moves.pop();
    }
    Ok(())
}

/// Comparison of the cached solver with the exhaustive search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AgreementReport {
    /// Positions compared
    pub positions: usize,
    /// Positions where the two searches chose different moves
    pub disagreements: Vec<String>,
}

impl AgreementReport {
    pub fn agrees(&self) -> bool {
        self.disagreements.is_empty()
    }
}

/// Check that the cached solver picks the same move as the exhaustive search
/// on every reachable decision position for `side`.
///
/// One cache is shared across all positions, so later positions are mostly
/// answered from entries stored while solving earlier ones.
pub fn verify_solver_agreement(side: Player) -> Result<AgreementReport> {
    let mut cached = Solver::with_cache();
    let mut report = AgreementReport::default();

    for board in decision_positions(side) {
        let exhaustive = Solver::new().best_move(&board, side)?;
        let from_cache = cached.best_move(&board, side)?;
        report.positions += 1;

        if exhaustive != from_cache {
            debug!(board = %board.encode(), exhaustive, from_cache, "searches disagree");
            report.disagreements.push(board.encode());
        }
    }

    info!(
        %side,
        positions = report.positions,
        disagreements = report.disagreements.len(),
        cache_hits = cached.stats().cache_hits,
        "solver agreement checked"
    );
    Ok(report)
}
