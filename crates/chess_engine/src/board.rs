//! Board state
//!
//! [`Position`] is the authoritative game state: an 8×8 grid of optional
//! chessmen plus the en-passant target and any unresolved promotion. It is
//! created once from the standard layout and mutated in place by applied
//! moves. Legality checks and search work on clones, so speculative moves
//! never touch the position the caller holds.

use crate::constants::*;
use crate::error::ChessEngineResult;
use crate::types::*;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Board state: piece placement, en-passant target and pending promotion
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// Indexed `[rank][file]`
    grid: [[Option<Chessman>; 8]; 8],
    /// Square a pawn passed over on its double step during the last move
    pub(crate) en_passant: Option<Square>,
    /// Pawn standing on its promotion rank, waiting for a kind
    pub(crate) pending_promotion: Option<Square>,
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// Standard starting position
    pub fn new() -> Self {
        let mut position = Self::empty();
        for color in Color::ALL {
            let back = color.back_rank();
            let pawns = color.pawn_rank();
            for (file, kind) in BACK_RANK.iter().enumerate() {
                position.place(Square::at(file as u8, back), Chessman::new(*kind, color));
                let pawn = Chessman::new(PieceKind::Pawn, color);
                position.place(Square::at(file as u8, pawns), pawn);
            }
        }
        position
    }

    /// Board with no pieces
    pub fn empty() -> Self {
        Position {
            grid: [[None; 8]; 8],
            en_passant: None,
            pending_promotion: None,
        }
    }

    /// Put a chessman on a square, replacing whatever stood there
    pub fn place(&mut self, square: Square, chessman: Chessman) {
        self.grid[square.rank() as usize][square.file() as usize] = Some(chessman);
    }

    /// Clear a square, returning its previous occupant
    pub fn remove(&mut self, square: Square) -> Option<Chessman> {
        self.grid[square.rank() as usize][square.file() as usize].take()
    }

    #[inline]
    pub fn chessman_at(&self, square: Square) -> Option<Chessman> {
        self.grid[square.rank() as usize][square.file() as usize]
    }

    /// Lookup by raw coordinates
    ///
    /// # Errors
    ///
    /// `InvalidSquare` when either coordinate is outside 0-7.
    pub fn chessman_at_coords(&self, file: i8, rank: i8) -> ChessEngineResult<Option<Chessman>> {
        Ok(self.chessman_at(Square::new(file, rank)?))
    }

    /// Color of the occupant, `None` for an empty square
    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.chessman_at(square).map(|chessman| chessman.color)
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.chessman_at(square).is_none()
    }

    pub(crate) fn chessman_mut(&mut self, square: Square) -> Option<&mut Chessman> {
        self.grid[square.rank() as usize][square.file() as usize].as_mut()
    }

    /// Square the last double-stepping pawn passed over
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Override the en-passant target, for setting up positions
    pub fn set_en_passant(&mut self, square: Option<Square>) {
        self.en_passant = square;
    }

    /// Pawn waiting for `resolve_promotion`
    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion
    }

    /// First king of `color` in scan order
    pub fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|&square| {
            self.chessman_at(square)
                .is_some_and(|chessman| chessman.is(PieceKind::King, color))
        })
    }

    /// Pieces of one color in scan order (rank-major, file-minor)
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Chessman)> + '_ {
        Square::all().filter_map(move |square| {
            self.chessman_at(square)
                .filter(|chessman| chessman.color == color)
                .map(|chessman| (square, chessman))
        })
    }
}

impl fmt::Display for Position {
    /// Board diagram from White's side, rank 8 at the top
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for rank in (0..BOARD_SIZE).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..BOARD_SIZE {
                match self.chessman_at(Square::at(file, rank)) {
                    Some(chessman) => write!(f, "{} ", chessman)?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f, "{}", rank + 1)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
