//! Game lifecycle management
//!
//! [`new_game`] hands out a bare starting [`Position`]. [`Game`] wraps one
//! with the side to move and the list of played moves, and enforces turn
//! order: only the side to move may move, and a pending promotion keeps the
//! turn until it is resolved.

use super::moves;
use super::state::{self, GameStatus};
use crate::board::Position;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::make_move::MoveResult;
use crate::move_gen;
use crate::types::*;
use tracing::info;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Create a new game with initial position
pub fn new_game() -> Position {
    Position::new()
}

/// A move as it was played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlayedMove {
    pub color: Color,
    pub from: Square,
    pub to: Square,
    pub result: MoveResult,
}

/// A game in progress
///
/// # Examples
///
/// ```rust,ignore
/// let mut game = Game::new();
/// game.apply_move("e2".parse()?, "e4".parse()?)?;
/// assert_eq!(game.turn(), Color::Black);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Game {
    position: Position,
    turn: Color,
    history: Vec<PlayedMove>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard starting position, White to move
    pub fn new() -> Self {
        Game {
            position: new_game(),
            turn: Color::White,
            history: Vec::new(),
        }
    }

    /// Start from an arbitrary position with `turn` to move
    pub fn from_position(position: Position, turn: Color) -> Self {
        Game {
            position,
            turn,
            history: Vec::new(),
        }
    }

    /// Reset the game to starting position
    pub fn reset(&mut self) {
        *self = Game::new();
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    /// Legal destinations of the piece on `square`
    ///
    /// Empty unless that piece belongs to the side to move, and empty while a
    /// promotion waits to be resolved.
    pub fn legal_moves(&self, square: Square) -> Vec<Square> {
        if self.position.pending_promotion().is_some() {
            return Vec::new();
        }
        match self.position.color_at(square) {
            Some(color) if color == self.turn => moves::legal_moves(&self.position, square),
            _ => Vec::new(),
        }
    }

    /// Every legal move of the side to move, none while a promotion is pending
    pub fn all_legal_moves(&self) -> Vec<(Square, Square)> {
        if self.position.pending_promotion().is_some() {
            return Vec::new();
        }
        move_gen::all_legal_moves(&self.position, self.turn)
    }

    /// Play a move for the side to move
    ///
    /// The turn passes to the opponent unless the move leaves a promotion
    /// pending, in which case it passes after [`Game::resolve_promotion`].
    ///
    /// # Errors
    ///
    /// Everything [`moves::apply_move`] rejects, plus `WrongPieceColor` when
    /// the piece on `from` belongs to the opponent.
    pub fn apply_move(&mut self, from: Square, to: Square) -> ChessEngineResult<MoveResult> {
        if let Some(square) = self.position.pending_promotion() {
            return Err(ChessEngineError::PromotionPending { square });
        }
        match self.position.color_at(from) {
            None => return Err(ChessEngineError::NoPieceAtSquare { square: from }),
            Some(color) if color != self.turn => {
                return Err(ChessEngineError::WrongPieceColor {
                    square: from,
                    color: self.turn,
                })
            }
            Some(_) => {}
        }

        let result = moves::apply_move(&mut self.position, from, to)?;
        self.history.push(PlayedMove {
            color: self.turn,
            from,
            to,
            result,
        });
        if !result.is_promotion_pending {
            self.turn = self.turn.opposite();
        }
        Ok(result)
    }

    /// Finish the pending promotion and pass the turn
    ///
    /// # Errors
    ///
    /// `InvalidPromotion` or `PromotionNotPending`, see
    /// [`moves::resolve_promotion`].
    pub fn resolve_promotion(&mut self, square: Square, kind: PieceKind) -> ChessEngineResult<()> {
        moves::resolve_promotion(&mut self.position, square, kind)?;
        self.turn = self.turn.opposite();
        Ok(())
    }

    /// Search `depth` plies for the side to move
    pub fn choose_move(&self, depth: usize) -> Option<(Square, Square)> {
        state::choose_move(&self.position, self.turn, depth)
    }

    pub fn status(&self) -> GameStatus {
        state::game_status(&self.position, self.turn)
    }

    /// Whether the side to move is in check
    pub fn is_in_check(&self) -> bool {
        state::is_in_check(&self.position, self.turn)
    }

    /// Let the engine play one move for the side to move
    ///
    /// Promotions are resolved to a queen. Returns `None` once the side to
    /// move has no legal move.
    pub fn play_engine_move(&mut self, depth: usize) -> ChessEngineResult<Option<PlayedMove>> {
        let mover = self.turn;
        let Some((from, to)) = self.choose_move(depth) else {
            return Ok(None);
        };
        let result = self.apply_move(from, to)?;
        if result.is_promotion_pending {
            self.resolve_promotion(to, PieceKind::Queen)?;
        }
        info!(color = %mover, %from, %to, "engine move");
        Ok(Some(PlayedMove {
            color: mover,
            from,
            to,
            result,
        }))
    }
}
