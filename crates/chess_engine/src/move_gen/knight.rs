//! Knight move generation
//!
//! Handles knight-specific move generation. Knights move in an L-shape pattern:
//! 2 squares in one direction, then 1 square perpendicular (or vice versa).
//!
//! ## Knight Movement Rules
//!
//! - Knights can jump over pieces (unlike sliding pieces)
//! - 8 possible destinations from most squares (fewer near edges)
//! - Cannot move to squares occupied by own pieces
//! - Can capture opponent pieces on destination squares

use crate::board::Position;
use crate::constants::KNIGHT_DIRS;
use crate::types::*;

/// Generate knight moves from a given square
///
/// # Arguments
///
/// * `position` - The current board state
/// * `from` - Square of the knight
/// * `color` - Color of the knight
/// * `moves` - Output vector to append valid moves to
pub(crate) fn generate_knight_moves(
    position: &Position,
    from: Square,
    color: Color,
    moves: &mut Vec<Square>,
) {
    for &(df, dr) in &KNIGHT_DIRS {
        if let Some(to) = from.offset(df, dr) {
            // Valid if destination is empty or contains opponent piece
            if position.color_at(to) != Some(color) {
                moves.push(to);
            }
        }
    }
}

pub(crate) fn possible_knight_moves(from: Square, moves: &mut Vec<Square>) {
    moves.extend(KNIGHT_DIRS.iter().filter_map(|&(df, dr)| from.offset(df, dr)));
}
