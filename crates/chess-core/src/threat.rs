//! Geometric threat detection.

use crate::{PieceKind, Square};

/// Returns true if a piece of `kind` standing on `from` attacks `target`.
///
/// The test is purely algebraic: shared file or rank for rook and queen,
/// equal absolute file and rank deltas for bishop and queen, and the knight
/// offset pattern for knights. Like move generation, it ignores any pieces
/// standing between `from` and `target`.
pub fn threatens(kind: PieceKind, from: Square, target: Square) -> bool {
    let file_delta = (target.file().index() as i8 - from.file().index() as i8).abs();
    let rank_delta = (target.rank().index() as i8 - from.rank().index() as i8).abs();

    match kind {
        PieceKind::Rook => file_delta == 0 || rank_delta == 0,
        PieceKind::Bishop => file_delta == rank_delta,
        PieceKind::Queen => file_delta == 0 || rank_delta == 0 || file_delta == rank_delta,
        PieceKind::Knight => {
            (file_delta == 2 && rank_delta == 1) || (file_delta == 1 && rank_delta == 2)
        }
    }
}
