//! Pawn move generation
//!
//! Handles pawn-specific move generation including:
//! - Single and double forward pushes
//! - Diagonal captures
//! - En passant
//! - Promotion (flagged during move execution, see `make_move.rs`)
//!
//! ## Pawn Movement Rules
//!
//! - **Forward push**: Pawns move one square forward onto an empty square
//! - **Double push**: From the starting rank, two squares forward when both
//!   squares are empty
//! - **Captures**: Pawns capture diagonally forward (one square)
//! - **En passant**: Right after an enemy pawn double-steps past the square
//!   diagonally in front of us, we may capture onto that square
//!
//! Pawns on their promotion rank have no moves; they wait for the promotion
//! to be resolved.

use crate::board::Position;
use crate::types::*;

/// Generate pawn moves from a given square
///
/// # Arguments
///
/// * `position` - The current board state
/// * `from` - Square of the pawn
/// * `color` - Color of the pawn
/// * `moves` - Output vector to append valid moves to
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_pawn_moves(&position, e2, Color::White, &mut moves);
/// // Moves now contains e3, e4 and any diagonal captures
/// ```
pub(crate) fn generate_pawn_moves(
    position: &Position,
    from: Square,
    color: Color,
    moves: &mut Vec<Square>,
) {
    let forward = color.forward();

    for df in [-1, 1] {
        if let Some(to) = from.offset(df, forward) {
            let is_capture = position.color_at(to) == Some(color.opposite());
            if is_capture || is_en_passant_capture(position, to, color) {
                moves.push(to);
            }
        }
    }

    if let Some(one) = from.offset(0, forward) {
        if position.is_empty(one) {
            moves.push(one);
            if from.rank() == color.pawn_rank() {
                if let Some(two) = one.offset(0, forward) {
                    if position.is_empty(two) {
                        moves.push(two);
                    }
                }
            }
        }
    }
}

/// Whether a pawn of `color` landing on `to` captures en passant
///
/// `to` must be the recorded en-passant target and an enemy pawn must stand
/// directly behind it.
pub(crate) fn is_en_passant_capture(position: &Position, to: Square, color: Color) -> bool {
    position.en_passant() == Some(to)
        && to
            .offset(0, -color.forward())
            .and_then(|behind| position.chessman_at(behind))
            .is_some_and(|victim| victim.is(PieceKind::Pawn, color.opposite()))
}

/// Pattern-only pawn moves: both forward diagonals plus the pushes
pub(crate) fn possible_pawn_moves(from: Square, color: Color, moves: &mut Vec<Square>) {
    moves.extend([-1, 1].into_iter().filter_map(|df| from.offset(df, color.forward())));
    if let Some(one) = from.offset(0, color.forward()) {
        moves.push(one);
        if from.rank() == color.pawn_rank() {
            moves.extend(one.offset(0, color.forward()));
        }
    }
}
