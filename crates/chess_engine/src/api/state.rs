//! Game state queries and AI move selection

use crate::board::Position;
use crate::move_gen;
use crate::search::{best_move, search_root, SearchConfig};
use crate::types::*;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of a position for the side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        f.write_str(name)
    }
}

/// Whether the king of `color` is attacked
///
/// `false` when that king is missing from the board.
pub fn is_in_check(position: &Position, color: Color) -> bool {
    move_gen::is_in_check(position, color)
}

/// Get current game state (ongoing, checkmate, stalemate) for `color` to move
pub fn game_status(position: &Position, color: Color) -> GameStatus {
    if move_gen::has_any_legal_move(position, color) {
        GameStatus::Ongoing
    } else if is_in_check(position, color) {
        GameStatus::Checkmate
    } else {
        GameStatus::Stalemate
    }
}

/// Pick a move for `color` with a minimax search of `depth` plies
///
/// A `depth` of zero searches one ply. Returns `None` when `color` has no
/// legal move.
///
/// # Examples
///
/// ```rust,ignore
/// let position = new_game();
/// let (from, to) = choose_move(&position, Color::White, 2).unwrap();
/// ```
pub fn choose_move(position: &Position, color: Color, depth: usize) -> Option<(Square, Square)> {
    choose_move_with(position, color, &SearchConfig::default().with_depth(depth))
}

/// [`choose_move`] with every search parameter spelled out
pub fn choose_move_with(
    position: &Position,
    color: Color,
    config: &SearchConfig,
) -> Option<(Square, Square)> {
    let scored = search_root(position, color, config);
    best_move(&scored).map(|best| (best.from, best.to))
}
