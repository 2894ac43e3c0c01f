//! Static position evaluation
//!
//! Scores a position from one color's point of view:
//! - Material (piece values)
//! - Pawn advancement bonus
//! - Doubled and isolated pawn penalties
//!
//! The score only looks at the given color's own pieces; the search combines
//! both sides' scores into a differential.
//!
//! ## Module Organization
//!
//! - `material` - Material sum
//! - `pawns` - Pawn advancement and structure

mod material;
mod pawns;

pub use material::material;
pub use pawns::pawn_structure;

use crate::board::Position;
use crate::types::Color;

/// Static score of `position` for `color`
///
/// # Examples
///
/// ```rust,ignore
/// let position = Position::new();
/// assert_eq!(evaluate(&position, Color::White), evaluate(&position, Color::Black));
/// ```
pub fn evaluate(position: &Position, color: Color) -> i32 {
    material(position, color) + pawn_structure(position, color)
}
