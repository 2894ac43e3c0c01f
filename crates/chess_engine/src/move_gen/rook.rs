//! Rook move generation
//!
//! Rooks are sliding pieces that move along ranks and files until blocked by
//! another piece or the board edge. Castling is generated from the king's side
//! (see `king.rs`); the rook is moved by the move applier.

use super::sliding;
use crate::board::Position;
use crate::constants::ROOK_DIRS;
use crate::types::*;

/// Generate rook moves from a given square
///
/// Delegates to the common sliding piece logic with the four orthogonal
/// directions.
pub(crate) fn generate_rook_moves(
    position: &Position,
    from: Square,
    color: Color,
    moves: &mut Vec<Square>,
) {
    sliding::generate_sliding_moves(position, from, color, &ROOK_DIRS, moves);
}

pub(crate) fn possible_rook_moves(from: Square, moves: &mut Vec<Square>) {
    sliding::possible_sliding_moves(from, &ROOK_DIRS, moves);
}
