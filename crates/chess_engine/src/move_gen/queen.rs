//! Queen move generation
//!
//! Queens combine the movement patterns of bishops and rooks.
//!
//! ## Queen Movement Rules
//!
//! - Queens move like bishops (diagonally) OR rooks (horizontally/vertically)
//! - Cannot jump over pieces
//! - Cannot move to squares occupied by own pieces
//! - Can capture opponent pieces on destination squares

use super::bishop;
use super::rook;
use crate::board::Position;
use crate::types::*;

/// Generate queen moves from a given square
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_queen_moves(&position, d1, Color::White, &mut moves);
/// // Diagonal moves first, then horizontal/vertical
/// ```
pub(crate) fn generate_queen_moves(
    position: &Position,
    from: Square,
    color: Color,
    moves: &mut Vec<Square>,
) {
    bishop::generate_bishop_moves(position, from, color, moves);
    rook::generate_rook_moves(position, from, color, moves);
}

pub(crate) fn possible_queen_moves(from: Square, moves: &mut Vec<Square>) {
    bishop::possible_bishop_moves(from, moves);
    rook::possible_rook_moves(from, moves);
}
