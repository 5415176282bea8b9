//! Safety and capture predicates over a board.

use crate::{threatens, Board, PieceKind, Square};

/// Returns true if any piece other than `moving_label` occupies `target`.
///
/// The data model carries no colors, so any occupant counts as capturable,
/// friend or foe.
pub fn can_capture(board: &Board, target: Square, moving_label: &str) -> bool {
    board
        .iter()
        .any(|(label, square)| label != moving_label && square == target)
}

/// Returns true if no piece other than `moving_label` threatens `target`.
///
/// A piece's kind comes from its label's first token; labels that do not
/// name a supported kind never threaten. The exclusion compares the full
/// label, so a qualified key like "Rook 1" is not excluded when the moving
/// label is "Rook".
pub fn is_safe(board: &Board, target: Square, moving_label: &str) -> bool {
    board.iter().all(|(label, square)| {
        if label == moving_label {
            return true;
        }
        match PieceKind::from_label(label) {
            Some(kind) => !threatens(kind, square, target),
            None => true,
        }
    })
}

/// Post-capture safety check. Always passes; kept as a placeholder in the
/// acceptance chain.
pub fn is_safe_after_capture(_board: &Board, _target: Square, _moving_label: &str) -> bool {
    true
}

/// The acceptance rule for a candidate destination: the square is safe, or
/// occupied by a capturable piece, and still safe after the capture.
pub fn is_acceptable(board: &Board, target: Square, moving_label: &str) -> bool {
    (is_safe(board, target, moving_label) || can_capture(board, target, moving_label))
        && is_safe_after_capture(board, target, moving_label)
}
