//! King move generation
//!
//! Handles king-specific move generation. Kings move one square in any direction
//! (horizontally, vertically, or diagonally).
//!
//! ## King Movement Rules
//!
//! - Kings move one square in any direction (8 possible destinations)
//! - Cannot move to squares occupied by own pieces
//! - Cannot move into check (handled by the legality filter)
//! - Can capture opponent pieces on destination squares
//!
//! ## Castling
//!
//! Castling is generated separately and only on request, because it needs a
//! full attack scan rather than plain occupancy. A side may castle when:
//! - The king has never moved and stands on its home square
//! - The rook on the matching corner is its own and has never moved
//! - Every square strictly between king and rook is empty
//! - Neither the king's square nor the square it passes through is attacked
//!
//! The destination square is covered by the ordinary legality filter. The
//! generated move is the king's two-file step; the rook follows in the
//! move applier.

use super::attack::is_square_attacked;
use crate::board::Position;
use crate::constants::*;
use crate::types::*;

/// Generate king moves from a given square (excluding castling)
pub(crate) fn generate_king_moves(
    position: &Position,
    from: Square,
    color: Color,
    moves: &mut Vec<Square>,
) {
    for &(df, dr) in &KING_DIRS {
        if let Some(to) = from.offset(df, dr) {
            if position.color_at(to) != Some(color) {
                moves.push(to);
            }
        }
    }
}

pub(crate) fn possible_king_moves(from: Square, moves: &mut Vec<Square>) {
    moves.extend(KING_DIRS.iter().filter_map(|&(df, dr)| from.offset(df, dr)));
}

/// Append the castling destinations available to the king on `from`
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_castling_moves(&position, e1, Color::White, &mut moves);
/// // g1 and/or c1 when castling is available
/// ```
pub(crate) fn generate_castling_moves(
    position: &Position,
    from: Square,
    color: Color,
    moves: &mut Vec<Square>,
) {
    let home = Square::at(KING_FILE, color.back_rank());
    let king_unmoved = position
        .chessman_at(from)
        .is_some_and(|king| king.is(PieceKind::King, color) && !king.has_moved);
    if from != home || !king_unmoved {
        return;
    }

    let enemy = color.opposite();
    if is_square_attacked(position, from, enemy) {
        return;
    }

    for (rook_file, step) in [(KINGSIDE_ROOK_FILE, 1i8), (QUEENSIDE_ROOK_FILE, -1i8)] {
        let rank = from.rank();
        let rook_ready = position
            .chessman_at(Square::at(rook_file, rank))
            .is_some_and(|rook| rook.is(PieceKind::Rook, color) && !rook.has_moved);
        if !rook_ready {
            continue;
        }

        let (low, high) = if rook_file > KING_FILE {
            (KING_FILE, rook_file)
        } else {
            (rook_file, KING_FILE)
        };
        let path_clear = (low + 1..high).all(|file| position.is_empty(Square::at(file, rank)));
        if !path_clear {
            continue;
        }

        let (Some(transit), Some(destination)) =
            (from.offset(step, 0), from.offset(2 * step, 0))
        else {
            continue;
        };
        if is_square_attacked(position, transit, enemy) {
            continue;
        }
        moves.push(destination);
    }
}
