//! Minimax search with alpha-beta pruning.
//!
//! Features:
//! - Adaptive depth from material and mobility (`search_depth`)
//! - Move ordering by check/capture heuristics (`move_value`)
//! - Branch limiting: a node explores only its best `branch` moves, and
//!   each level down doubles the limit
//! - Memoized legal moves and evaluations via the board's memo tables

mod constants;
mod depth;
mod move_order;

use std::time::{Duration, Instant};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color, Move};
pub use constants::{DEFAULT_BRANCH, MATE_SCORE, MAX_DEPTH, MIN_DEPTH};
pub use move_order::order_value;

/// Search limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    /// Fixed depth; `None` picks one with `search_depth`
    pub depth: Option<u32>,
    /// Moves explored at the root
    pub branch: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: None,
            branch: DEFAULT_BRANCH,
        }
    }
}

/// Outcome of a search. `best_move` is `None` when the side to move has
/// no legal moves.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchResult {
    pub best_move: Option<Move>,
    /// Score from the mover's point of view
    pub score: f64,
    pub depth: u32,
    pub nodes: u64,
    pub evaluations: u64,
    pub elapsed: Duration,
}

/// Per-search counters and the side the scores are relative to.
struct SearchContext {
    root: Color,
    nodes: u64,
    evaluations: u64,
}

impl Board {
    /// Pick a move for the side to move with default limits.
    pub fn choose_move(&mut self) -> SearchResult {
        self.choose_move_with(&SearchConfig::default())
    }

    /// Pick a move for the side to move. The position is unchanged on
    /// return.
    pub fn choose_move_with(&mut self, config: &SearchConfig) -> SearchResult {
        let start = Instant::now();
        let depth = config.depth.unwrap_or_else(|| self.search_depth());
        let mut ctx = SearchContext {
            root: self.turn(),
            nodes: 0,
            evaluations: 0,
        };

        let (score, best_move) = self.minimax(
            &mut ctx,
            config.branch,
            depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
            true,
        );

        let result = SearchResult {
            best_move,
            score,
            depth,
            nodes: ctx.nodes,
            evaluations: ctx.evaluations,
            elapsed: start.elapsed(),
        };
        log::debug!(
            "search depth {} nodes {} evals {} time {}ms score {} move {}",
            result.depth,
            result.nodes,
            result.evaluations,
            result.elapsed.as_millis(),
            result.score,
            result
                .best_move
                .map_or_else(|| "none".to_string(), |mv| mv.to_string()),
        );
        result
    }

    fn minimax(
        &mut self,
        ctx: &mut SearchContext,
        branch: usize,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> (f64, Option<Move>) {
        ctx.nodes += 1;
        let side = if maximizing {
            ctx.root
        } else {
            ctx.root.opponent()
        };

        let mut moves = self.legal_moves(side);
        if moves.is_empty() {
            if !self.in_check(side) {
                return (0.0, None);
            }
            let mate = MATE_SCORE * f64::from(depth + 1);
            return (if maximizing { -mate } else { mate }, None);
        }
        if depth == 0 {
            ctx.evaluations += 1;
            return (self.evaluate(ctx.root), None);
        }

        self.order_moves(&mut moves);
        let child_branch = branch.saturating_mul(2);

        let mut best: Option<(f64, Move)> = None;
        for mv in moves.into_iter().take(branch) {
            self.push_move(mv, false);
            let (score, _) = self.minimax(ctx, child_branch, depth - 1, alpha, beta, !maximizing);
            self.undo_move();

            let improves = match best {
                None => true,
                Some((incumbent, _)) if maximizing => score > incumbent,
                Some((incumbent, _)) => score < incumbent,
            };
            if improves {
                best = Some((score, mv));
            }

            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }

        match best {
            Some((score, mv)) => (score, Some(mv)),
            // branch 0 explores nothing
            None => (if maximizing { f64::NEG_INFINITY } else { f64::INFINITY }, None),
        }
    }
}
