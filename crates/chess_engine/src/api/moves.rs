//! Move execution and validation
//!
//! Checked entry points for the presentation layer. Unlike
//! [`Position::apply_move`], [`apply_move`] refuses anything outside the
//! legal-move set, so a bad request never corrupts the position.

use crate::board::Position;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::make_move::MoveResult;
use crate::move_gen;
use crate::types::*;
use tracing::debug;

/// Legal destinations of the piece on `square`, for move hinting
///
/// Empty when the square is empty or the piece cannot move.
pub fn legal_moves(position: &Position, square: Square) -> Vec<Square> {
    move_gen::legal_moves(position, square)
}

/// Validate and execute a move
///
/// # Errors
///
/// - `PromotionPending` while an earlier promotion is unresolved
/// - `NoPieceAtSquare` when `from` is empty
/// - `InvalidMove` when `to` is not a legal destination of that piece
///
/// # Examples
///
/// ```rust,ignore
/// // Move pawn from e2 to e4
/// let mut position = new_game();
/// let result = apply_move(&mut position, "e2".parse()?, "e4".parse()?)?;
/// assert!(result.captured.is_none());
/// ```
pub fn apply_move(
    position: &mut Position,
    from: Square,
    to: Square,
) -> ChessEngineResult<MoveResult> {
    if let Some(square) = position.pending_promotion() {
        return Err(ChessEngineError::PromotionPending { square });
    }

    let chessman = position
        .chessman_at(from)
        .ok_or(ChessEngineError::NoPieceAtSquare { square: from })?;

    if !move_gen::legal_moves(position, from).contains(&to) {
        return Err(ChessEngineError::InvalidMove { from, to });
    }

    let result = position.apply_move(from, to)?;
    debug!(
        %from,
        %to,
        color = %chessman.color,
        piece = %chessman.kind,
        captured = ?result.captured.map(|victim| victim.kind),
        castling = result.is_castling,
        promotion_pending = result.is_promotion_pending,
        "move applied"
    );
    Ok(result)
}

/// Complete a pending promotion
///
/// # Errors
///
/// `InvalidPromotion` for King or Pawn, `PromotionNotPending` when no pawn
/// waits on `square`.
pub fn resolve_promotion(
    position: &mut Position,
    square: Square,
    kind: PieceKind,
) -> ChessEngineResult<()> {
    position.resolve_promotion(square, kind)?;
    debug!(%square, %kind, "promotion resolved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_rejects_illegal_move_without_touching_board() {
        let mut position = Position::new();
        assert_eq!(
            apply_move(&mut position, sq("e2"), sq("e5")),
            Err(ChessEngineError::InvalidMove { from: sq("e2"), to: sq("e5") })
        );
        assert_eq!(
            apply_move(&mut position, sq("e3"), sq("e4")),
            Err(ChessEngineError::NoPieceAtSquare { square: sq("e3") })
        );
        assert_eq!(position, Position::new());
    }

    #[test]
    fn test_rejects_move_exposing_king() {
        let mut position = Position::empty();
        position.place(sq("e1"), Chessman::new(PieceKind::King, Color::White));
        position.place(sq("e2"), Chessman::new(PieceKind::Bishop, Color::White));
        position.place(sq("e7"), Chessman::new(PieceKind::Queen, Color::Black));
        position.place(sq("a8"), Chessman::new(PieceKind::King, Color::Black));

        assert!(matches!(
            apply_move(&mut position, sq("e2"), sq("d3")),
            Err(ChessEngineError::InvalidMove { .. })
        ));
    }

    #[test]
    fn test_moves_blocked_while_promotion_pending() {
        let mut position = Position::empty();
        position.place(sq("a1"), Chessman::new(PieceKind::King, Color::White));
        position.place(sq("h8"), Chessman::new(PieceKind::King, Color::Black));
        position.place(sq("c7"), Chessman::new(PieceKind::Pawn, Color::White));

        let result = apply_move(&mut position, sq("c7"), sq("c8")).unwrap();
        assert!(result.is_promotion_pending);
        assert_eq!(
            apply_move(&mut position, sq("h8"), sq("g8")),
            Err(ChessEngineError::PromotionPending { square: sq("c8") })
        );

        resolve_promotion(&mut position, sq("c8"), PieceKind::Rook).unwrap();
        assert!(apply_move(&mut position, sq("h8"), sq("h7")).is_ok());
    }

    #[test]
    fn test_legal_moves_for_empty_square() {
        assert!(legal_moves(&Position::new(), sq("d4")).is_empty());
    }
}
