//! Analyze command - outcome, threats and move scores for one board

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    analysis::reachable::side_to_move,
    cli::output::{print_board, print_kv, print_section},
    search::{ScoredMove, Solver},
    tictactoe::{Board, LineAnalyzer, Outcome, Player, evaluate, winning_line},
};

#[derive(Parser, Debug)]
#[command(about = "Evaluate a board and score every move")]
pub struct AnalyzeArgs {
    /// Nine cells, row-major: `X`, `O`, and `.`, `-` or `_` for empty
    pub board: String,

    /// Side to move (`x` or `o`); inferred from the mark counts when omitted
    #[arg(long)]
    pub side: Option<Player>,

    /// Print a JSON report instead of text
    #[arg(long)]
    pub json: bool,
}

/// Everything the command reports about a board
#[derive(Debug, Clone, Serialize)]
pub struct BoardReport {
    pub board: String,
    pub side: Player,
    pub outcome: Outcome,
    pub winning_line: Option<[usize; 3]>,
    /// Cells that would complete a line for X
    pub x_threats: Vec<usize>,
    /// Cells that would complete a line for O
    pub o_threats: Vec<usize>,
    /// Minimax score of each legal move, empty once decided
    pub moves: Vec<ScoredMove>,
    pub best_move: Option<usize>,
}

/// Build the report for `board` with `side` to move
pub fn analyze_board(board: &Board, side: Player) -> crate::Result<BoardReport> {
    let outcome = evaluate(board);
    let cells = board.cells();

    let (moves, best_move) = if outcome.is_decided() {
        (Vec::new(), None)
    } else {
        let mut solver = Solver::with_cache();
        let moves = solver.score_moves(board, side)?;
        let best = solver.best_move(board, side)?;
        (moves, Some(best))
    };

    Ok(BoardReport {
        board: board.encode(),
        side,
        outcome,
        winning_line: winning_line(board),
        x_threats: LineAnalyzer::winning_moves(cells, Player::X),
        o_threats: LineAnalyzer::winning_moves(cells, Player::O),
        moves,
        best_move,
    })
}

fn format_positions(positions: &[usize]) -> String {
    if positions.is_empty() {
        return "none".to_string();
    }
    positions
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = Board::from_string(&args.board)
        .with_context(|| format!("could not parse board \"{}\"", args.board))?;
    let side = args.side.unwrap_or_else(|| side_to_move(&board));
    let report = analyze_board(&board, side)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_section("Board");
    print_board(&board);

    print_section("Evaluation");
    let outcome = match report.outcome {
        Outcome::InProgress => "in progress".to_string(),
        Outcome::Win(player) => format!("{player} wins"),
        Outcome::Tie => "tie".to_string(),
    };
    print_kv("Outcome", &outcome);
    if let Some(line) = report.winning_line {
        print_kv("Winning line", &format_positions(&line));
    }
    print_kv("X threats", &format_positions(&report.x_threats));
    print_kv("O threats", &format_positions(&report.o_threats));

    if let Some(best) = report.best_move {
        print_section(&format!("Moves for {side}"));
        for scored in &report.moves {
            if let Some(position) = scored.position {
                let marker = if position == best { "  <- best" } else { "" };
                print_kv(
                    &format!("Position {position}"),
                    &format!("{:+}{marker}", scored.score),
                );
            }
        }
        print_kv("Best move", &format!("{best} (row {}, col {})", best / 3, best % 3));
    }

    Ok(())
}
