//! Fixed-depth minimax
//!
//! The perspective is fixed at the root: the root color maximizes on even
//! plies, its opponent minimizes on odd plies. Every candidate is explored on
//! its own clone of the position.
//!
//! - Leaves score `evaluate(root) - opponent_weight * evaluate(enemy)`.
//! - Capturing a king ends the line at `±king_capture_score`.
//! - A root-side capture at ply `d` earns `depth - d`, so earlier captures
//!   beat equal-valued later ones.
//! - A side with no legal moves yields no score, and the parent skips that
//!   candidate. Checkmate and stalemate are not told apart.

use super::config::SearchConfig;
use crate::board::Position;
use crate::evaluation::evaluate;
use crate::move_gen::all_legal_moves;
use crate::types::*;
use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A root move with its minimax score
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoredMove {
    pub score: f64,
    pub from: Square,
    pub to: Square,
}

struct Minimax<'a> {
    root: Color,
    config: &'a SearchConfig,
    nodes: u64,
}

impl Minimax<'_> {
    fn side_to_move(&self, ply: usize) -> Color {
        if ply % 2 == 0 {
            self.root
        } else {
            self.root.opposite()
        }
    }

    fn leaf(&self, position: &Position) -> f64 {
        let own = evaluate(position, self.root) as f64;
        let enemy = evaluate(position, self.root.opposite()) as f64;
        own - self.config.opponent_weight * enemy
    }

    /// Score every legal move of the side to move at `ply`
    fn score_moves(&mut self, position: &Position, ply: usize) -> Vec<ScoredMove> {
        let mover = self.side_to_move(ply);
        let maximizing = mover == self.root;
        let mut scored = Vec::new();

        for (from, to) in all_legal_moves(position, mover) {
            let Some(chessman) = position.chessman_at(from) else {
                continue;
            };
            let mut child = position.clone();
            let result = child.make_move(from, to, chessman);
            self.nodes += 1;

            let score = match result.captured {
                Some(victim) if victim.kind == PieceKind::King => {
                    if maximizing {
                        self.config.king_capture_score
                    } else {
                        -self.config.king_capture_score
                    }
                }
                captured => {
                    let Some(mut score) = self.value(&child, ply + 1) else {
                        continue;
                    };
                    if captured.is_some() && maximizing {
                        score += (self.config.depth - ply) as f64;
                    }
                    score
                }
            };

            scored.push(ScoredMove { score, from, to });
        }

        scored
    }

    /// Minimax value of `position` at `ply`, `None` without legal moves
    fn value(&mut self, position: &Position, ply: usize) -> Option<f64> {
        if ply >= self.config.depth {
            return Some(self.leaf(position));
        }
        let maximizing = self.side_to_move(ply) == self.root;
        let scores = self.score_moves(position, ply).into_iter().map(|m| m.score);
        if maximizing {
            scores.reduce(f64::max)
        } else {
            scores.reduce(f64::min)
        }
    }
}

/// Score every legal root move of `color`
///
/// Returns an empty list when `color` has no legal moves. The list keeps
/// generation order: pieces in scan order, then each piece's moves.
pub fn search_root(position: &Position, color: Color, config: &SearchConfig) -> Vec<ScoredMove> {
    let mut search = Minimax {
        root: color,
        config,
        nodes: 0,
    };
    let scored = search.score_moves(position, 0);

    for candidate in &scored {
        trace!(from = %candidate.from, to = %candidate.to, score = candidate.score, "root move");
    }
    debug!(
        color = %color,
        depth = config.depth,
        candidates = scored.len(),
        nodes = search.nodes,
        "search finished"
    );

    scored
}

/// Highest-scoring move, the first one on ties
pub fn best_move(scored: &[ScoredMove]) -> Option<ScoredMove> {
    let mut best: Option<ScoredMove> = None;
    for candidate in scored {
        if best.map_or(true, |current| candidate.score > current.score) {
            best = Some(*candidate);
        }
    }
    best
}
