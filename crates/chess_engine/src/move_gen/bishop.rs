//! Bishop move generation
//!
//! Bishops are sliding pieces that move diagonally until blocked by another
//! piece or the board edge.

use super::sliding;
use crate::board::Position;
use crate::constants::BISHOP_DIRS;
use crate::types::*;

/// Generate bishop moves from a given square
pub(crate) fn generate_bishop_moves(
    position: &Position,
    from: Square,
    color: Color,
    moves: &mut Vec<Square>,
) {
    sliding::generate_sliding_moves(position, from, color, &BISHOP_DIRS, moves);
}

pub(crate) fn possible_bishop_moves(from: Square, moves: &mut Vec<Square>) {
    sliding::possible_sliding_moves(from, &BISHOP_DIRS, moves);
}
