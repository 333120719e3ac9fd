//! Reusable minimax searcher with an optional transposition cache

use std::collections::HashMap;

use tracing::debug;

use super::{ScoredMove, ensure_searchable, prefer, terminal_score};
use crate::tictactoe::{Board, Player, evaluate};

/// Counters collected while searching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered, terminal nodes included
    pub nodes: u64,
    /// Nodes answered from the cache
    pub cache_hits: u64,
}

/// Minimax searcher.
///
/// Without a cache every call explores the full tree below the board. With a
/// cache, the result of each `(board, side to move)` node is remembered. A
/// node's result depends only on those two values, so a cached answer is the
/// exact `ScoredMove` a fresh exploration would produce and the selected move
/// never changes.
#[derive(Debug, Default)]
pub struct Solver {
    cache: Option<HashMap<(Board, Player), ScoredMove>>,
    stats: SearchStats,
}

impl Solver {
    /// Exhaustive search, nothing remembered between nodes
    pub fn new() -> Self {
        Solver {
            cache: None,
            stats: SearchStats::default(),
        }
    }

    /// Search that remembers every node it has solved
    pub fn with_cache() -> Self {
        Solver {
            cache: Some(HashMap::new()),
            stats: SearchStats::default(),
        }
    }

    /// Build from the `transposition_cache` setting
    pub fn from_config(config: &crate::config::SearchConfig) -> Self {
        if config.transposition_cache {
            Self::with_cache()
        } else {
            Self::new()
        }
    }

    /// Counters accumulated since creation
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Best move for `side` on `board`.
    ///
    /// # Errors
    ///
    /// Fails on a board that is already won or full.
    pub fn best_move(&mut self, board: &Board, side: Player) -> Result<usize, crate::Error> {
        let before = self.stats;
        let best = self
            .score_moves(board, side)?
            .into_iter()
            .fold(None, |best, candidate| Some(prefer(best, candidate, side)));

        let chosen = best
            .and_then(|scored| scored.position)
            .ok_or(crate::Error::NoValidMoves)?;

        debug!(
            board = %board.encode(),
            %side,
            chosen,
            score = ?best.map(|s| s.score),
            nodes = self.stats.nodes - before.nodes,
            cache_hits = self.stats.cache_hits - before.cache_hits,
            "search finished"
        );
        Ok(chosen)
    }

    /// Minimax score of every legal move for `side`, in index order
    pub fn score_moves(
        &mut self,
        board: &Board,
        side: Player,
    ) -> Result<Vec<ScoredMove>, crate::Error> {
        ensure_searchable(board)?;

        Ok(board
            .empty_positions()
            .into_iter()
            .map(|position| {
                let child = board.with_mark(position, side);
                ScoredMove::new(position, self.search(child, side.opponent()).score)
            })
            .collect())
    }

    /// Minimax value of `board` with `turn` to move
    pub fn search(&mut self, board: Board, turn: Player) -> ScoredMove {
        self.stats.nodes += 1;

        if let Some(score) = terminal_score(evaluate(&board)) {
            return ScoredMove::terminal(score);
        }

        if let Some(hit) = self.cache.as_ref().and_then(|c| c.get(&(board, turn)).copied()) {
            self.stats.cache_hits += 1;
            return hit;
        }

        let mut best = None;
        for position in board.empty_positions() {
            let child = board.with_mark(position, turn);
            let score = self.search(child, turn.opponent()).score;
            best = Some(prefer(best, ScoredMove::new(position, score), turn));
        }
        let best = best.expect("an undecided board always has an empty cell");

        if let Some(cache) = self.cache.as_mut() {
            cache.insert((board, turn), best);
        }
        best
    }
}
