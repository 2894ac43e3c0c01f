//! Pawn evaluation
//!
//! - **Advancement**: each pawn scores `8 - r`, where `r` is its distance in
//!   ranks from the promotion rank. A pawn on its start rank scores 2.
//! - **Doubled pawns**: `2 * (files with pawns - pawns)`, zero or negative.
//! - **Isolated pawns**: -2 for every pawn on files b-g with no friendly pawn
//!   on either neighbouring file. Pawns on the a- and h-files are exempt.

use crate::board::Position;
use crate::constants::*;
use crate::types::*;

/// Advancement bonus plus structure penalties for the pawns of `color`
pub fn pawn_structure(position: &Position, color: Color) -> i32 {
    let pawns: Vec<Square> = position
        .pieces(color)
        .filter(|(_, chessman)| chessman.kind == PieceKind::Pawn)
        .map(|(square, _)| square)
        .collect();

    let mut per_file = [0usize; BOARD_SIZE as usize];
    for pawn in &pawns {
        per_file[pawn.file() as usize] += 1;
    }

    let advancement: i32 = pawns.iter().map(|&pawn| advancement_bonus(pawn, color)).sum();

    let occupied_files = per_file.iter().filter(|&&count| count > 0).count() as i32;
    let doubled = DOUBLED_PAWN_PENALTY * (occupied_files - pawns.len() as i32);

    let isolated = pawns
        .iter()
        .filter(|pawn| {
            let file = pawn.file();
            ISOLATION_FILES.contains(&file)
                && per_file[file as usize - 1] == 0
                && per_file[file as usize + 1] == 0
        })
        .count() as i32;

    advancement + doubled - ISOLATED_PAWN_PENALTY * isolated
}

fn advancement_bonus(pawn: Square, color: Color) -> i32 {
    let ranks_to_go = (color.promotion_rank() as i32 - pawn.rank() as i32).abs();
    BOARD_SIZE as i32 - ranks_to_go
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_pawns(color: Color, squares: &[&str]) -> Position {
        let mut position = Position::empty();
        for name in squares {
            position.place(name.parse().unwrap(), Chessman::new(PieceKind::Pawn, color));
        }
        position
    }

    #[test]
    fn test_advancement_is_symmetric() {
        let white = with_pawns(Color::White, &["a2", "a4"]);
        let black = with_pawns(Color::Black, &["h7", "h5"]);
        // doubled on one file: 2 + 4 - 2
        assert_eq!(pawn_structure(&white, Color::White), 4);
        assert_eq!(pawn_structure(&black, Color::Black), 4);
    }

    #[test]
    fn test_doubled_pawns_penalised() {
        let position = with_pawns(Color::White, &["b2", "c2", "c3", "d2"]);
        // advancement 2 + 2 + 3 + 2, one doubled pawn
        assert_eq!(pawn_structure(&position, Color::White), 9 - 2);
    }

    #[test]
    fn test_isolated_pawn_penalised() {
        let position = with_pawns(Color::White, &["e4"]);
        assert_eq!(pawn_structure(&position, Color::White), 4 - 2);
    }

    #[test]
    fn test_edge_file_pawn_never_isolated() {
        let a_file = with_pawns(Color::White, &["a4"]);
        assert_eq!(pawn_structure(&a_file, Color::White), 4);
        let h_file = with_pawns(Color::Black, &["h5"]);
        assert_eq!(pawn_structure(&h_file, Color::Black), 4);
        let g_file = with_pawns(Color::White, &["g4"]);
        assert_eq!(pawn_structure(&g_file, Color::White), 2);
    }

    #[test]
    fn test_doubled_isolated_pawns_penalised_per_pawn() {
        let position = with_pawns(Color::White, &["e2", "e3"]);
        // advancement 5, doubled -2, two isolated pawns -4
        assert_eq!(pawn_structure(&position, Color::White), -1);
    }

    #[test]
    fn test_other_color_ignored() {
        let position = with_pawns(Color::Black, &["d5", "e5"]);
        assert_eq!(pawn_structure(&position, Color::White), 0);
    }
}
