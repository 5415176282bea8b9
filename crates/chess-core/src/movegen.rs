//! Candidate move generation.
//!
//! Generators enumerate every on-board destination reachable by a piece's
//! movement pattern. Occupancy is never consulted: sliding pieces scan their
//! full rays through other pieces, and the safety filters decide which
//! candidates survive.

use crate::{PieceKind, Square};

/// Rook ray directions as (file delta, rank delta) pairs.
///
/// Table order is observable through the API: results come out in ray
/// order, nearest square first.
pub const ROOK_RAYS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Bishop ray directions.
pub const BISHOP_RAYS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

/// Queen ray directions. Not rook rays followed by bishop rays; the
/// interleaving matters for output order.
pub const QUEEN_RAYS: [(i8, i8); 8] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, -1),
    (-1, 1),
];

/// Knight offsets as (file delta, rank delta) pairs.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// Walks each ray outward from `from`, collecting every square until the
/// board edge stops the ray.
pub fn ray_moves(from: Square, rays: &[(i8, i8)]) -> Vec<Square> {
    let mut moves = Vec::new();
    for &(file_delta, rank_delta) in rays {
        for step in 1..8 {
            match from.offset(file_delta * step, rank_delta * step) {
                Some(square) => moves.push(square),
                None => break,
            }
        }
    }
    moves
}

/// Enumerates knight destinations from `from` that land on the board.
pub fn knight_moves(from: Square) -> Vec<Square> {
    KNIGHT_OFFSETS
        .iter()
        .filter_map(|&(file_delta, rank_delta)| from.offset(file_delta, rank_delta))
        .collect()
}

impl PieceKind {
    /// Generates all candidate destinations for this kind from `from`.
    pub fn moves(self, from: Square) -> Vec<Square> {
        match self {
            PieceKind::Rook => ray_moves(from, &ROOK_RAYS),
            PieceKind::Bishop => ray_moves(from, &BISHOP_RAYS),
            PieceKind::Queen => ray_moves(from, &QUEEN_RAYS),
            PieceKind::Knight => knight_moves(from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::parse(s).unwrap()
    }

    fn coords(moves: &[Square]) -> Vec<String> {
        moves.iter().map(Square::to_string).collect()
    }

    #[test]
    fn rook_from_corner() {
        let moves = PieceKind::Rook.moves(sq("A1"));
        assert_eq!(
            coords(&moves),
            [
                "A2", "A3", "A4", "A5", "A6", "A7", "A8", // up the A-file
                "B1", "C1", "D1", "E1", "F1", "G1", "H1", // along rank 1
            ]
        );
    }

    #[test]
    fn rook_from_center_counts() {
        // 7 squares per axis regardless of where on the axis it stands.
        assert_eq!(PieceKind::Rook.moves(sq("E4")).len(), 14);
    }

    #[test]
    fn bishop_from_corner() {
        let moves = PieceKind::Bishop.moves(sq("A1"));
        assert_eq!(coords(&moves), ["B2", "C3", "D4", "E5", "F6", "G7", "H8"]);
    }

    #[test]
    fn queen_from_center_counts() {
        // 14 rook squares + 13 diagonal squares from D4.
        assert_eq!(PieceKind::Queen.moves(sq("D4")).len(), 27);
    }

    #[test]
    fn queen_ray_order_interleaves() {
        let moves = PieceKind::Queen.moves(sq("G7"));
        // First ray goes up, second right; both truncate at the edge.
        assert_eq!(coords(&moves[..2]), ["G8", "H7"]);
    }

    #[test]
    fn knight_from_corner() {
        assert_eq!(coords(&PieceKind::Knight.moves(sq("A1"))), ["C2", "B3"]);
    }

    #[test]
    fn knight_from_center() {
        let moves = PieceKind::Knight.moves(sq("D4"));
        assert_eq!(
            coords(&moves),
            ["F5", "E6", "C6", "B5", "B3", "C2", "E2", "F3"]
        );
    }

    #[test]
    fn every_kind_moves_from_every_square() {
        for kind in PieceKind::ALL {
            for index in 0u8..64 {
                let from = sq(&format!(
                    "{}{}",
                    (b'A' + index % 8) as char,
                    index / 8 + 1
                ));
                let moves = kind.moves(from);
                assert!(!moves.is_empty());
                assert!(!moves.contains(&from));
            }
        }
    }
}
