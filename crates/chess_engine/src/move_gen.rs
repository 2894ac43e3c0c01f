//! Move generation
//!
//! Three modes, from cheapest to most expensive:
//!
//! - **Possible moves** ([`possible_moves`]): the movement pattern of a piece,
//!   ignoring every other piece on the board. Only used for hinting.
//! - **Pseudo-legal moves** ([`pseudo_legal_moves`]): pattern plus occupancy.
//!   Sliders stop at the first piece, nothing lands on a friendly piece, pawns
//!   capture diagonally and en passant.
//! - **Legal moves** ([`legal_moves`]): pseudo-legal moves (with castling for
//!   kings) that do not leave the mover's own king attacked.
//!
//! Legality is decided by simulation: each candidate is applied to a clone and
//! the clone is scanned for an attack on the mover's king. This costs one clone
//! and one board scan per candidate.
//!
//! ## Module Organization
//!
//! - `pawn`, `knight`, `bishop`, `rook`, `queen`, `king` - per-kind rules
//! - `sliding` - shared ray walking for bishops, rooks and queens
//! - `attack` - square attack detection and check

pub mod attack;
mod bishop;
mod king;
mod knight;
mod pawn;
mod queen;
mod rook;
mod sliding;

pub use attack::{is_in_check, is_square_attacked};

use crate::board::Position;
use crate::types::*;

/// Dispatch to the pseudo-legal generator of a chessman's kind (no castling)
pub(crate) fn generate_pseudo_legal(
    position: &Position,
    from: Square,
    chessman: Chessman,
    moves: &mut Vec<Square>,
) {
    let color = chessman.color;
    match chessman.kind {
        PieceKind::Pawn => pawn::generate_pawn_moves(position, from, color, moves),
        PieceKind::Knight => knight::generate_knight_moves(position, from, color, moves),
        PieceKind::Bishop => bishop::generate_bishop_moves(position, from, color, moves),
        PieceKind::Rook => rook::generate_rook_moves(position, from, color, moves),
        PieceKind::Queen => queen::generate_queen_moves(position, from, color, moves),
        PieceKind::King => king::generate_king_moves(position, from, color, moves),
    }
}

/// Pattern-only destinations of the piece on `from`
///
/// Empty for an empty square.
pub fn possible_moves(position: &Position, from: Square) -> Vec<Square> {
    let mut moves = Vec::new();
    let Some(chessman) = position.chessman_at(from) else {
        return moves;
    };
    match chessman.kind {
        PieceKind::Pawn => pawn::possible_pawn_moves(from, chessman.color, &mut moves),
        PieceKind::Knight => knight::possible_knight_moves(from, &mut moves),
        PieceKind::Bishop => bishop::possible_bishop_moves(from, &mut moves),
        PieceKind::Rook => rook::possible_rook_moves(from, &mut moves),
        PieceKind::Queen => queen::possible_queen_moves(from, &mut moves),
        PieceKind::King => king::possible_king_moves(from, &mut moves),
    }
    moves
}

/// Occupancy-aware destinations of the piece on `from`, without castling
pub fn pseudo_legal_moves(position: &Position, from: Square) -> Vec<Square> {
    let mut moves = Vec::with_capacity(28);
    if let Some(chessman) = position.chessman_at(from) {
        generate_pseudo_legal(position, from, chessman, &mut moves);
    }
    moves
}

/// Castling destinations of the king on `from`
///
/// Empty unless `from` holds a king that may castle.
pub fn castling_moves(position: &Position, from: Square) -> Vec<Square> {
    let mut moves = Vec::new();
    if let Some(chessman) = position.chessman_at(from).filter(|c| c.kind == PieceKind::King) {
        king::generate_castling_moves(position, from, chessman.color, &mut moves);
    }
    moves
}

/// Destinations of the piece on `from` that keep its own king safe
///
/// # Examples
///
/// ```rust,ignore
/// let position = Position::new();
/// let moves = legal_moves(&position, "g1".parse()?);
/// // f3 and h3
/// ```
pub fn legal_moves(position: &Position, from: Square) -> Vec<Square> {
    let Some(chessman) = position.chessman_at(from) else {
        return Vec::new();
    };

    let mut moves = Vec::with_capacity(28);
    generate_pseudo_legal(position, from, chessman, &mut moves);
    if chessman.kind == PieceKind::King {
        king::generate_castling_moves(position, from, chessman.color, &mut moves);
    }

    moves.retain(|&to| keeps_king_safe(position, from, to, chessman));
    moves
}

fn keeps_king_safe(position: &Position, from: Square, to: Square, chessman: Chessman) -> bool {
    let mut trial = position.clone();
    trial.make_move(from, to, chessman);
    !is_in_check(&trial, chessman.color)
}

/// Every legal `(from, to)` pair of one side, pieces in scan order
pub fn all_legal_moves(position: &Position, color: Color) -> Vec<(Square, Square)> {
    position
        .pieces(color)
        .flat_map(|(from, _)| legal_moves(position, from).into_iter().map(move |to| (from, to)))
        .collect()
}

/// Whether one side has at least one legal move
pub fn has_any_legal_move(position: &Position, color: Color) -> bool {
    position
        .pieces(color)
        .any(|(from, _)| !legal_moves(position, from).is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    /// A crowded middlegame-like position with pieces of both colors
    fn busy_position() -> Position {
        let mut position = Position::new();
        for (from, to) in [("e2", "e4"), ("d7", "d5"), ("g1", "f3"), ("c8", "g4"), ("f1", "b5")] {
            position.apply_move(sq(from), sq(to)).unwrap();
        }
        position
    }

    #[test]
    fn test_starting_position_has_twenty_moves() {
        let position = Position::new();
        let white = all_legal_moves(&position, Color::White);
        assert_eq!(white.len(), 20, "16 pawn moves + 4 knight moves");
        let knight_moves = white
            .iter()
            .filter(|(from, _)| position.chessman_at(*from).unwrap().kind == PieceKind::Knight)
            .count();
        assert_eq!(knight_moves, 4);
    }

    #[test]
    fn test_pseudo_legal_never_lands_on_friendly_piece() {
        for position in [Position::new(), busy_position()] {
            for from in Square::all() {
                let Some(chessman) = position.chessman_at(from) else {
                    continue;
                };
                for to in pseudo_legal_moves(&position, from) {
                    assert_ne!(
                        position.color_at(to),
                        Some(chessman.color),
                        "{} on {} must not land on a friendly piece at {}",
                        chessman.kind,
                        from,
                        to
                    );
                }
            }
        }
    }

    #[test]
    fn test_sliders_never_jump_blockers() {
        let position = busy_position();
        for from in Square::all() {
            let Some(chessman) = position.chessman_at(from) else {
                continue;
            };
            if !matches!(chessman.kind, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen) {
                continue;
            }
            for to in pseudo_legal_moves(&position, from) {
                let df = (to.file() as i8 - from.file() as i8).signum();
                let dr = (to.rank() as i8 - from.rank() as i8).signum();
                let mut current = from.offset(df, dr).unwrap();
                while current != to {
                    assert!(position.is_empty(current), "{} jumps over {}", from, current);
                    current = current.offset(df, dr).unwrap();
                }
            }
        }
    }

    #[test]
    fn test_legal_moves_subset_of_pseudo_legal() {
        let mut position = busy_position();
        position.place(sq("e5"), Chessman::new(PieceKind::Queen, Color::White));
        for from in Square::all() {
            let pseudo = pseudo_legal_moves(&position, from);
            let castling = castling_moves(&position, from);
            for to in legal_moves(&position, from) {
                assert!(
                    pseudo.contains(&to) || castling.contains(&to),
                    "{}-{} is legal but not pseudo-legal",
                    from,
                    to
                );
            }
        }
    }

    #[test]
    fn test_pinned_piece_cannot_leave_line() {
        let mut position = Position::empty();
        position.place(sq("e1"), Chessman::new(PieceKind::King, Color::White));
        position.place(sq("e2"), Chessman::new(PieceKind::Knight, Color::White));
        position.place(sq("e8"), Chessman::new(PieceKind::Rook, Color::Black));
        position.place(sq("a8"), Chessman::new(PieceKind::King, Color::Black));

        assert!(!pseudo_legal_moves(&position, sq("e2")).is_empty());
        assert!(legal_moves(&position, sq("e2")).is_empty());
    }

    #[test]
    fn test_king_cannot_step_into_check() {
        let mut position = Position::empty();
        position.place(sq("e1"), Chessman::new(PieceKind::King, Color::White).moved());
        position.place(sq("d8"), Chessman::new(PieceKind::Rook, Color::Black));
        position.place(sq("h8"), Chessman::new(PieceKind::King, Color::Black));

        let moves = legal_moves(&position, sq("e1"));
        assert!(!moves.iter().any(|m| m.file() == 3), "d-file is covered by the rook");
        assert!(moves.contains(&sq("f2")));
    }

    #[test]
    fn test_castling_only_in_legal_moves() {
        let mut position = Position::new();
        position.remove(sq("f1"));
        position.remove(sq("g1"));
        assert!(!pseudo_legal_moves(&position, sq("e1")).contains(&sq("g1")));
        assert!(legal_moves(&position, sq("e1")).contains(&sq("g1")));
    }

    #[test]
    fn test_castling_into_check_rejected() {
        let mut position = Position::empty();
        position.place(sq("e1"), Chessman::new(PieceKind::King, Color::White));
        position.place(sq("h1"), Chessman::new(PieceKind::Rook, Color::White));
        position.place(sq("g8"), Chessman::new(PieceKind::Rook, Color::Black));
        position.place(sq("a8"), Chessman::new(PieceKind::King, Color::Black));
        assert!(castling_moves(&position, sq("e1")).contains(&sq("g1")));
        assert!(!legal_moves(&position, sq("e1")).contains(&sq("g1")));
    }

    #[test]
    fn test_castling_past_pawn_with_empty_diagonals() {
        let mut position = Position::empty();
        position.place(sq("e1"), Chessman::new(PieceKind::King, Color::White));
        position.place(sq("h1"), Chessman::new(PieceKind::Rook, Color::White));
        position.place(sq("e2"), Chessman::new(PieceKind::Pawn, Color::Black));
        position.place(sq("a8"), Chessman::new(PieceKind::King, Color::Black));

        assert!(!is_square_attacked(&position, sq("f1"), Color::Black));
        assert!(legal_moves(&position, sq("e1")).contains(&sq("g1")));
    }

    #[test]
    fn test_possible_moves_ignore_pieces() {
        let position = Position::new();
        assert_eq!(possible_moves(&position, sq("a1")).len(), 14);
        assert_eq!(possible_moves(&position, sq("d1")).len(), 21);
        assert_eq!(possible_moves(&position, sq("g1")).len(), 3);
        assert!(possible_moves(&position, sq("e4")).is_empty());
    }

    #[test]
    fn test_checkmated_side_has_no_moves() {
        // Fool's mate
        let mut position = Position::new();
        for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
            position.apply_move(sq(from), sq(to)).unwrap();
        }
        assert!(is_in_check(&position, Color::White));
        assert!(!has_any_legal_move(&position, Color::White));
        assert!(all_legal_moves(&position, Color::White).is_empty());
    }
}
