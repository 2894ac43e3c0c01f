//! # Chess Engine Core Types
//!
//! The board is an 8×8 grid addressed by [`Square`] `(file, rank)`, both
//! 0-7. Rank 0 is White's back rank and White pawns advance toward rank 7,
//! so `a1 = (0, 0)`, `e1 = (4, 0)` and `h8 = (7, 7)`.
//!
//! Pieces are [`Chessman`] values: a closed [`PieceKind`] plus a [`Color`].
//! The color is stored on every piece, which keeps the [`Position`] itself
//! turn-independent. An empty square is simply `None` wherever a chessman or
//! a color is expected.
//!
//! [`Position`]: crate::board::Position

use crate::constants::*;
use crate::error::{ChessEngineError, ChessEngineResult};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Side of a chessman
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// The other side
    #[inline]
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank delta of a pawn step
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank holding this side's king and rooks at the start
    #[inline]
    pub fn back_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Rank from which pawns may double-step
    #[inline]
    pub fn pawn_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Rank on which this side's pawns promote
    #[inline]
    pub fn promotion_rank(self) -> u8 {
        self.opposite().back_rank()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("White"),
            Color::Black => f.write_str("Black"),
        }
    }
}

/// Kind of a chessman; the set is closed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Kinds a pawn may promote to
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Material value used by the evaluator
    #[inline]
    pub fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => PAWN_VALUE,
            PieceKind::Knight => KNIGHT_VALUE,
            PieceKind::Bishop => BISHOP_VALUE,
            PieceKind::Rook => ROOK_VALUE,
            PieceKind::Queen => QUEEN_VALUE,
            PieceKind::King => KING_VALUE,
        }
    }

    #[inline]
    pub fn is_promotion_target(self) -> bool {
        Self::PROMOTIONS.contains(&self)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

/// A piece standing on the board
///
/// `has_moved` only changes for Kings and Rooks, on their own moves, and
/// decides castling eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Chessman {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Chessman {
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Chessman {
            kind,
            color,
            has_moved: false,
        }
    }

    /// Same chessman with `has_moved` set, for building mid-game positions
    pub const fn moved(mut self) -> Self {
        self.has_moved = true;
        self
    }

    #[inline]
    pub fn is(&self, kind: PieceKind, color: Color) -> bool {
        self.kind == kind && self.color == color
    }

    /// Unicode chess symbol
    pub fn glyph(&self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::King) => '♔',
            (Color::Black, PieceKind::Pawn) => '♟',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::King) => '♚',
        }
    }
}

impl fmt::Display for Chessman {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Board coordinate `(file, rank)`, both in 0-7
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSquare"))]
pub struct Square {
    file: u8,
    rank: u8,
}

/// Unchecked wire form of a [`Square`]
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawSquare {
    file: i8,
    rank: i8,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSquare> for Square {
    type Error = ChessEngineError;

    fn try_from(raw: RawSquare) -> Result<Self, Self::Error> {
        Square::new(raw.file, raw.rank)
    }
}

impl Square {
    /// Checked constructor
    ///
    /// # Errors
    ///
    /// [`ChessEngineError::InvalidSquare`] when either coordinate is outside 0-7.
    pub fn new(file: i8, rank: i8) -> ChessEngineResult<Square> {
        if is_on_board(file, rank) {
            Ok(Square {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            Err(ChessEngineError::InvalidSquare { file, rank })
        }
    }

    /// Constructor for coordinates already known to be on the board
    pub(crate) const fn at(file: u8, rank: u8) -> Square {
        Square { file, rank }
    }

    #[inline]
    pub fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub fn rank(self) -> u8 {
        self.rank
    }

    /// Square shifted by `(df, dr)`, or `None` past the edge
    #[inline]
    pub fn offset(self, df: i8, dr: i8) -> Option<Square> {
        let file = self.file as i8 + df;
        let rank = self.rank as i8 + dr;
        is_on_board(file, rank).then(|| Square::at(file as u8, rank as u8))
    }

    /// All 64 squares, rank-major
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|rank| (0..BOARD_SIZE).map(move |file| Square::at(file, rank)))
    }
}

#[inline]
fn is_on_board(file: i8, rank: i8) -> bool {
    (0..BOARD_SIZE as i8).contains(&file) && (0..BOARD_SIZE as i8).contains(&rank)
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, self.rank + 1)
    }
}

impl FromStr for Square {
    type Err = ChessEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = || ChessEngineError::ParseSquare {
            input: s.to_string(),
        };
        match s.as_bytes() {
            [file @ b'a'..=b'h', rank @ b'1'..=b'8'] => Ok(Square::at(file - b'a', rank - b'1')),
            _ => Err(parse_error()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_bounds() {
        assert!(Square::new(0, 0).is_ok());
        assert!(Square::new(7, 7).is_ok());
        assert_eq!(
            Square::new(8, 0),
            Err(ChessEngineError::InvalidSquare { file: 8, rank: 0 })
        );
        assert!(Square::new(0, -1).is_err());
    }

    #[test]
    fn test_square_algebraic_round_trip() {
        let e4: Square = "e4".parse().unwrap();
        assert_eq!((e4.file(), e4.rank()), (4, 3));
        assert_eq!(e4.to_string(), "e4");
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("e".parse::<Square>().is_err());
    }

    #[test]
    fn test_square_offset_stops_at_edge() {
        let h8: Square = "h8".parse().unwrap();
        assert_eq!(h8.offset(1, 0), None);
        assert_eq!(h8.offset(-1, -1), Some("g7".parse().unwrap()));
    }

    #[test]
    fn test_all_squares_rank_major() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0].to_string(), "a1");
        assert_eq!(squares[1].to_string(), "b1");
        assert_eq!(squares[63].to_string(), "h8");
    }

    #[test]
    fn test_color_geometry() {
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(Color::White.promotion_rank(), 7);
        assert_eq!(Color::Black.promotion_rank(), 0);
        assert_eq!(Color::Black.forward(), -1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_square_deserialize_checks_bounds() {
        let e4: Square = serde_json::from_str(r#"{"file":4,"rank":3}"#).unwrap();
        assert_eq!(e4.to_string(), "e4");
        assert_eq!(serde_json::to_string(&e4).unwrap(), r#"{"file":4,"rank":3}"#);
        assert!(serde_json::from_str::<Square>(r#"{"file":9,"rank":0}"#).is_err());
        assert!(serde_json::from_str::<Square>(r#"{"file":0,"rank":-1}"#).is_err());
    }

    #[test]
    fn test_promotion_targets() {
        assert!(PieceKind::Queen.is_promotion_target());
        assert!(PieceKind::Knight.is_promotion_target());
        assert!(!PieceKind::King.is_promotion_target());
        assert!(!PieceKind::Pawn.is_promotion_target());
    }
}
