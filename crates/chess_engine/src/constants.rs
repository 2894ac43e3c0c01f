//! # Chess Engine Constants
//!
//! Piece values, direction vectors, castling geometry and search defaults.
//!
//! ## Material Scale
//!
//! Values are in tenths of a pawn rather than centipawns:
//!
//! - **Pawn**: 10
//! - **Knight** / **Bishop**: 30
//! - **Rook**: 50
//! - **Queen**: 90
//! - **King**: 0 (never traded; losing it is scored by the search instead)
//!
//! ## Direction Vectors
//!
//! Directions are `(file delta, rank delta)` pairs. Rank deltas are positive
//! toward Black's side of the board.

pub const BOARD_SIZE: u8 = 8;

pub const PAWN_VALUE: i32 = 10;
pub const KNIGHT_VALUE: i32 = 30;
pub const BISHOP_VALUE: i32 = 30;
pub const ROOK_VALUE: i32 = 50;
pub const QUEEN_VALUE: i32 = 90;
pub const KING_VALUE: i32 = 0;

pub const ROOK_DIRS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
pub const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const QUEEN_DIRS: [(i8, i8); 8] = [
    (0, 1), (1, 0), (0, -1), (-1, 0),
    (1, 1), (1, -1), (-1, 1), (-1, -1),
];
pub const KING_DIRS: [(i8, i8); 8] = QUEEN_DIRS;
pub const KNIGHT_DIRS: [(i8, i8); 8] = [
    (1, 2), (-1, 2), (1, -2), (-1, -2),
    (2, 1), (2, -1), (-2, 1), (-2, -1),
];

/// File of both kings at the start
pub const KING_FILE: u8 = 4;
pub const QUEENSIDE_ROOK_FILE: u8 = 0;
pub const KINGSIDE_ROOK_FILE: u8 = 7;
/// Rook destination after castling kingside
pub const KINGSIDE_ROOK_TARGET: u8 = 5;
/// Rook destination after castling queenside
pub const QUEENSIDE_ROOK_TARGET: u8 = 3;

/// Penalty per pawn sharing a file with another friendly pawn
pub const DOUBLED_PAWN_PENALTY: i32 = 2;
/// Penalty per pawn with no friendly pawn on an adjacent file
pub const ISOLATED_PAWN_PENALTY: i32 = 2;
/// Files on which isolated pawns are penalised; edge files are exempt
pub const ISOLATION_FILES: core::ops::RangeInclusive<u8> = 1..=6;

pub const DEFAULT_SEARCH_DEPTH: usize = 4;
/// Weight of the opponent's evaluation at search leaves
pub const DEFAULT_OPPONENT_WEIGHT: f64 = 1.1;
/// Score of a line in which a king is captured
pub const KING_CAPTURE_SCORE: f64 = 1000.0;
