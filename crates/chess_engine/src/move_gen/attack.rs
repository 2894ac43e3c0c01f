//! Attack detection and square checking
//!
//! Provides functions to check if squares are under attack and if kings are in check.
//! This module is critical for move legality validation and check detection.
//!
//! ## Algorithm
//!
//! To check if a square is attacked, we iterate through every piece of the
//! attacking color, generate its non-castling pseudo-legal moves and look for
//! the target. Pawns are no exception: an empty diagonal is not attacked, and
//! the square a pawn could push to is.

use super::generate_pseudo_legal;
use crate::board::Position;
use crate::types::*;

/// Check if a square is under attack by pieces of the specified color
///
/// Used for:
/// - Check detection (is the king attacked?)
/// - Move legality (does this move leave the king in check?)
/// - Castling (does the king start on or pass through an attacked square?)
///
/// # Examples
///
/// ```rust,ignore
/// // Check if square f1 is attacked by black pieces
/// let attacked = is_square_attacked(&position, f1, Color::Black);
/// ```
pub fn is_square_attacked(position: &Position, square: Square, by_color: Color) -> bool {
    let mut targets = Vec::with_capacity(32);

    for (from, chessman) in position.pieces(by_color) {
        targets.clear();
        generate_pseudo_legal(position, from, chessman, &mut targets);
        if targets.contains(&square) {
            return true;
        }
    }

    false
}

/// Check if the king of a color is in check
///
/// A side without a king is never in check.
pub fn is_in_check(position: &Position, color: Color) -> bool {
    position
        .find_king(color)
        .is_some_and(|king| is_square_attacked(position, king, color.opposite()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_starting_position_not_in_check() {
        let position = Position::new();
        assert!(!is_in_check(&position, Color::White));
        assert!(!is_in_check(&position, Color::Black));
    }

    #[test]
    fn test_knight_gives_check() {
        let mut position = Position::new();
        position.place(sq("d3"), Chessman::new(PieceKind::Knight, Color::Black));
        assert!(is_in_check(&position, Color::White));
        assert!(!is_in_check(&position, Color::Black));
    }

    #[test]
    fn test_slider_attack_blocked() {
        let mut position = Position::empty();
        position.place(sq("e1"), Chessman::new(PieceKind::King, Color::White));
        position.place(sq("e8"), Chessman::new(PieceKind::Rook, Color::Black));
        assert!(is_in_check(&position, Color::White));

        position.place(sq("e4"), Chessman::new(PieceKind::Bishop, Color::White));
        assert!(!is_in_check(&position, Color::White));
    }

    #[test]
    fn test_pawn_attacks_follow_its_moves() {
        let mut position = Position::empty();
        position.place(sq("d5"), Chessman::new(PieceKind::Pawn, Color::Black));
        assert!(is_square_attacked(&position, sq("d4"), Color::Black), "Push square counts");
        assert!(!is_square_attacked(&position, sq("c4"), Color::Black), "Empty diagonal does not");
        assert!(!is_square_attacked(&position, sq("c6"), Color::Black));

        position.place(sq("e4"), Chessman::new(PieceKind::Knight, Color::White));
        assert!(is_square_attacked(&position, sq("e4"), Color::Black));
    }

    #[test]
    fn test_pawn_next_to_king_gives_check() {
        let mut position = Position::empty();
        position.place(sq("e1"), Chessman::new(PieceKind::King, Color::White));
        position.place(sq("d2"), Chessman::new(PieceKind::Pawn, Color::Black));
        assert!(is_in_check(&position, Color::White));
    }

    #[test]
    fn test_no_king_is_never_in_check() {
        let mut position = Position::empty();
        position.place(sq("a1"), Chessman::new(PieceKind::Queen, Color::Black));
        assert!(!is_in_check(&position, Color::White));
    }
}
