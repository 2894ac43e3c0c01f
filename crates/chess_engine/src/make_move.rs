//! Move application
//!
//! Mutates a [`Position`] according to a chosen move, including the side
//! effects of special moves:
//!
//! - en-passant target bookkeeping and en-passant captures
//! - the rook's half of castling
//! - `has_moved` for kings and rooks
//! - flagging a pawn that reached its promotion rank
//!
//! Legality is not re-validated here; callers pass moves taken from
//! [`legal_moves`](crate::move_gen::legal_moves). The checked entry point for
//! the presentation layer is [`crate::api::apply_move`].

use crate::board::Position;
use crate::constants::*;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of an applied move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveResult {
    /// Square of the captured piece: `to`, or the passed pawn's square for
    /// an en-passant capture
    pub captured_square: Square,
    /// Piece removed from `captured_square`, if any
    pub captured: Option<Chessman>,
    pub is_castling: bool,
    /// The moved pawn waits on its promotion rank for `resolve_promotion`
    pub is_promotion_pending: bool,
}

impl Position {
    /// Move the piece on `from` to `to`
    ///
    /// # Errors
    ///
    /// `NoPieceAtSquare` when `from` is empty.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let mut position = Position::new();
    /// let result = position.apply_move("e2".parse()?, "e4".parse()?)?;
    /// assert_eq!(position.en_passant(), Some("e3".parse()?));
    /// ```
    pub fn apply_move(&mut self, from: Square, to: Square) -> ChessEngineResult<MoveResult> {
        let mover = self
            .chessman_at(from)
            .ok_or(ChessEngineError::NoPieceAtSquare { square: from })?;
        Ok(self.make_move(from, to, mover))
    }

    /// Move `mover`, known to stand on `from`, to `to`
    pub(crate) fn make_move(
        &mut self,
        from: Square,
        to: Square,
        mut mover: Chessman,
    ) -> MoveResult {
        let previous_en_passant = self.en_passant;
        let forward = mover.color.forward();
        let is_pawn = mover.kind == PieceKind::Pawn;
        let file_delta = to.file() as i8 - from.file() as i8;
        let rank_delta = to.rank() as i8 - from.rank() as i8;

        self.en_passant = if is_pawn && file_delta == 0 && rank_delta == 2 * forward {
            from.offset(0, forward)
        } else {
            None
        };

        if matches!(mover.kind, PieceKind::King | PieceKind::Rook) {
            mover.has_moved = true;
        }

        self.remove(from);
        let mut captured = self.remove(to);
        let mut captured_square = to;
        self.place(to, mover);

        if is_pawn && file_delta != 0 && captured.is_none() && previous_en_passant == Some(to) {
            if let Some(passed) = to.offset(0, -forward) {
                captured = self.remove(passed);
                captured_square = passed;
            }
        }

        let is_castling = mover.kind == PieceKind::King && file_delta.abs() == 2;
        if is_castling {
            let (rook_file, rook_target) = if file_delta > 0 {
                (KINGSIDE_ROOK_FILE, KINGSIDE_ROOK_TARGET)
            } else {
                (QUEENSIDE_ROOK_FILE, QUEENSIDE_ROOK_TARGET)
            };
            let rank = to.rank();
            if let Some(mut rook) = self.remove(Square::at(rook_file, rank)) {
                rook.has_moved = true;
                self.place(Square::at(rook_target, rank), rook);
            }
        }

        let is_promotion_pending = is_pawn && to.rank() == mover.color.promotion_rank();
        self.pending_promotion = is_promotion_pending.then_some(to);

        MoveResult {
            captured_square,
            captured,
            is_castling,
            is_promotion_pending,
        }
    }

    /// Replace the pawn waiting on `square` with a piece of `kind`
    ///
    /// # Errors
    ///
    /// - `InvalidPromotion` when `kind` is a King or Pawn
    /// - `PromotionNotPending` when no pawn is waiting on `square`
    pub fn resolve_promotion(&mut self, square: Square, kind: PieceKind) -> ChessEngineResult<()> {
        if !kind.is_promotion_target() {
            return Err(ChessEngineError::InvalidPromotion { kind });
        }
        if self.pending_promotion != Some(square) {
            return Err(ChessEngineError::PromotionNotPending { square });
        }
        let pawn = self
            .chessman_mut(square)
            .filter(|chessman| chessman.kind == PieceKind::Pawn)
            .ok_or(ChessEngineError::PromotionNotPending { square })?;
        pawn.kind = kind;
        self.pending_promotion = None;
        Ok(())
    }
}
