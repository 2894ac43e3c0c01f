//! Error types for chess engine
//!
//! Every variant is a precondition violation on the caller's side: bad
//! coordinates, a move outside the legal-move set, or a promotion resolved out
//! of order. Expected outcomes such as "no legal moves" or "no king on the
//! board" are not errors and are reported through `Option` instead.

use crate::types::{Color, PieceKind, Square};
use thiserror::Error;

/// Errors that can occur in the chess engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessEngineError {
    /// Square coordinates outside 0-7
    #[error("Invalid square: file {file}, rank {rank} (must be 0-7)")]
    InvalidSquare { file: i8, rank: i8 },

    /// Text that is not an algebraic square such as `e4`
    #[error("Cannot parse square from {input:?}")]
    ParseSquare { input: String },

    /// Move not present in the legal-move set of the piece
    #[error("Invalid move: from {from} to {to}")]
    InvalidMove { from: Square, to: Square },

    /// No piece at source square
    #[error("No piece at source square {square}")]
    NoPieceAtSquare { square: Square },

    /// Piece does not belong to the side to move
    #[error("Piece at square {square} does not belong to {color}")]
    WrongPieceColor { square: Square, color: Color },

    /// A pawn promotion must be resolved before the next move
    #[error("Promotion pending at {square}")]
    PromotionPending { square: Square },

    /// Promotion resolved where no pawn is waiting for one
    #[error("No promotion pending at {square}")]
    PromotionNotPending { square: Square },

    /// Pawns may only promote to Queen, Rook, Bishop or Knight
    #[error("Cannot promote to {kind}")]
    InvalidPromotion { kind: PieceKind },
}

/// Result type alias for chess engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
