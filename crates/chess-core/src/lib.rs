//! Core move calculation for the chess move API.
//!
//! This crate provides the pure logic behind the HTTP endpoints:
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`PieceKind`] for the supported piece types
//! - [`Board`] for request-scoped piece placement
//! - candidate generation, threat detection, and safety filtering
//! - [`calculate_moves`] tying it all together
//!
//! Everything is stateless and request-scoped; the HTTP layer in
//! `move-server` is a thin wrapper around [`calculate_moves`].

mod board;
mod calculator;
mod movegen;
mod piece;
mod safety;
mod square;
mod threat;

pub use board::{Board, InvalidCoordinate};
pub use calculator::{calculate_moves, MoveError};
pub use movegen::{knight_moves, ray_moves, BISHOP_RAYS, KNIGHT_OFFSETS, QUEEN_RAYS, ROOK_RAYS};
pub use piece::PieceKind;
pub use safety::{can_capture, is_acceptable, is_safe, is_safe_after_capture};
pub use square::{CoordError, File, Rank, Square};
pub use threat::threatens;
