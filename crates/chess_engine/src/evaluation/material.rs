//! Material evaluation
//!
//! Sums the values of one color's pieces.

use crate::board::Position;
use crate::types::*;

/// Total material of `color`
pub fn material(position: &Position, color: Color) -> i32 {
    position
        .pieces(color)
        .map(|(_, chessman)| chessman.kind.value())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{PAWN_VALUE, QUEEN_VALUE};

    #[test]
    fn test_starting_material() {
        let position = Position::new();
        assert_eq!(material(&position, Color::White), 390);
        assert_eq!(material(&position, Color::Black), 390);
    }

    #[test]
    fn test_king_is_worth_nothing() {
        let mut position = Position::empty();
        position.place("e1".parse().unwrap(), Chessman::new(PieceKind::King, Color::White));
        assert_eq!(material(&position, Color::White), 0);
    }

    #[test]
    fn test_white_up_queen() {
        let mut position = Position::new();
        position.remove("d8".parse().unwrap());
        position.remove("a2".parse().unwrap());
        let balance = material(&position, Color::White) - material(&position, Color::Black);
        assert_eq!(balance, QUEEN_VALUE - PAWN_VALUE);
    }
}
