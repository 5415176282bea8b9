//! Top-level move calculation.

use std::collections::HashMap;

use thiserror::Error;

use crate::{is_acceptable, Board, InvalidCoordinate, PieceKind, Square};

/// Errors surfaced to API clients. Both are client-input failures; neither
/// is retried and no partial result is ever produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The position map has no usable entry for the piece being moved.
    #[error("{0} position not provided")]
    MissingPiece(PieceKind),

    /// A coordinate string somewhere in the input failed to decode.
    #[error(transparent)]
    InvalidCoordinate(#[from] InvalidCoordinate),
}

/// Computes the destinations the given piece may move to.
///
/// The moving piece is keyed by its capitalized kind name ("Rook"), and that
/// same name is the label excluded from the threat and capture scans; a
/// qualified key such as "Rook 1" is treated as a distinct piece.
///
/// Candidates come from the kind's movement pattern and survive when the
/// destination is unthreatened by every other piece, or occupied by one
/// (a capture). Returned squares keep generation order.
pub fn calculate_moves(
    kind: PieceKind,
    positions: &HashMap<String, String>,
) -> Result<Vec<Square>, MoveError> {
    // Absent and empty are both "not provided"; the check comes before any
    // coordinate parsing.
    let raw = positions
        .get(kind.name())
        .filter(|coord| !coord.is_empty())
        .ok_or(MoveError::MissingPiece(kind))?;

    let from = Square::parse(raw).map_err(|source| InvalidCoordinate {
        coord: raw.clone(),
        source,
    })?;
    let board = Board::parse(positions)?;

    let moving_label = kind.name();
    Ok(kind
        .moves(from)
        .into_iter()
        .filter(|&target| is_acceptable(&board, target, moving_label))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|&(label, coord)| (label.to_string(), coord.to_string()))
            .collect()
    }

    fn coords(moves: &[Square]) -> Vec<String> {
        moves.iter().map(Square::to_string).collect()
    }

    #[test]
    fn lone_rook_reaches_whole_rank_and_file() {
        let map = positions(&[("Rook", "A1")]);
        let moves = calculate_moves(PieceKind::Rook, &map).unwrap();
        // Nothing else on the board, so every candidate is vacuously safe.
        assert_eq!(
            coords(&moves),
            [
                "A2", "A3", "A4", "A5", "A6", "A7", "A8", //
                "B1", "C1", "D1", "E1", "F1", "G1", "H1",
            ]
        );
    }

    #[test]
    fn knight_keeps_capture_drops_threatened_square() {
        let map = positions(&[("Knight", "A1"), ("Queen", "B3")]);
        let moves = calculate_moves(PieceKind::Knight, &map).unwrap();
        // C2 sits on the queen's diagonal and is empty, so it goes; B3 is
        // the queen's own square and survives as a capture.
        assert_eq!(coords(&moves), ["B3"]);
    }

    #[test]
    fn sliders_scan_through_blockers() {
        // Real chess would stop the rook in front of D1; here rays never
        // consult occupancy, so the far side of the blocker stays reachable.
        let map = positions(&[("Rook", "A1"), ("Pawn 1", "D1")]);
        let moves = calculate_moves(PieceKind::Rook, &map).unwrap();
        let moves = coords(&moves);
        assert!(moves.contains(&"D1".to_string())); // capture of the blocker
        assert!(moves.contains(&"E1".to_string())); // beyond the blocker
        assert!(moves.contains(&"H1".to_string()));
        assert_eq!(moves.len(), 14);
    }

    #[test]
    fn invalid_rank_rejects_the_request() {
        let map = positions(&[("Rook", "E9")]);
        let err = calculate_moves(PieceKind::Rook, &map).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid coordinate \"E9\": invalid rank: expected 1-8, got \"9\""
        );
    }

    #[test]
    fn invalid_coordinate_on_another_piece_rejects_the_request() {
        let map = positions(&[("Rook", "A1"), ("Pawn 1", "Z5")]);
        let err = calculate_moves(PieceKind::Rook, &map).unwrap_err();
        assert!(matches!(err, MoveError::InvalidCoordinate(_)));
    }

    #[test]
    fn missing_piece_is_rejected() {
        let err = calculate_moves(PieceKind::Bishop, &positions(&[])).unwrap_err();
        assert_eq!(err, MoveError::MissingPiece(PieceKind::Bishop));
        assert_eq!(err.to_string(), "Bishop position not provided");
    }

    #[test]
    fn empty_coordinate_counts_as_missing() {
        let map = positions(&[("Queen", "")]);
        assert_eq!(
            calculate_moves(PieceKind::Queen, &map).unwrap_err(),
            MoveError::MissingPiece(PieceKind::Queen)
        );
    }

    #[test]
    fn qualified_label_is_not_the_moving_piece() {
        // The exclusion label is exactly "Rook": the qualified "Rook 1" is a
        // separate piece. It covers the A-file, so only its own square (a
        // capture) and the first rank survive.
        let map = positions(&[("Rook", "A1"), ("Rook 1", "A8")]);
        let moves = calculate_moves(PieceKind::Rook, &map).unwrap();
        assert_eq!(
            coords(&moves),
            ["A8", "B1", "C1", "D1", "E1", "F1", "G1", "H1"]
        );
    }

    #[test]
    fn queen_combines_rook_and_bishop_results() {
        let map = positions(&[("Queen", "D4")]);
        let moves = calculate_moves(PieceKind::Queen, &map).unwrap();
        assert_eq!(moves.len(), 27);
    }
}
