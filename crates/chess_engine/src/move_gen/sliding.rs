//! Sliding piece move generation
//!
//! Common functionality for sliding pieces (bishops, rooks, queens).
//! These pieces can move multiple squares in a direction until blocked.
//!
//! ## Algorithm
//!
//! For every direction we walk square by square from the origin:
//! 1. Empty squares are valid moves and the walk continues
//! 2. An opponent piece is a valid capture and ends the walk
//! 3. An own piece ends the walk without adding its square
//!
//! The pattern-only variant ignores occupancy and walks to the board edge.

use crate::board::Position;
use crate::types::*;

/// Generate moves for a sliding piece along the given directions
///
/// # Arguments
///
/// * `position` - The current board state
/// * `from` - Origin square
/// * `color` - Color of the moving piece
/// * `dirs` - `(file, rank)` step vectors to walk
/// * `moves` - Output vector to append valid moves to
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_sliding_moves(&position, a1, Color::White, &ROOK_DIRS, &mut moves);
/// ```
pub(crate) fn generate_sliding_moves(
    position: &Position,
    from: Square,
    color: Color,
    dirs: &[(i8, i8)],
    moves: &mut Vec<Square>,
) {
    for &(df, dr) in dirs {
        let mut current = from;
        while let Some(next) = current.offset(df, dr) {
            match position.color_at(next) {
                None => moves.push(next),
                Some(occupant) => {
                    if occupant != color {
                        moves.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}

/// Every square on each ray up to the board edge
pub(crate) fn possible_sliding_moves(from: Square, dirs: &[(i8, i8)], moves: &mut Vec<Square>) {
    for &(df, dr) in dirs {
        let mut current = from;
        while let Some(next) = current.offset(df, dr) {
            moves.push(next);
            current = next;
        }
    }
}
