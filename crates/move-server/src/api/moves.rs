//! Move calculation handlers.

use std::collections::HashMap;

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use chess_core::{calculate_moves, PieceKind};

/// Request body carrying the board state.
#[derive(Debug, Deserialize)]
pub struct PositionRequest {
    /// Piece labels (e.g. "Rook", "Knight 2") mapped to coordinates ("E4").
    pub positions: HashMap<String, String>,
}

/// Response body listing accepted destinations.
#[derive(Debug, Serialize)]
pub struct MovesResponse {
    /// Destinations in canonical coordinate form, in generation order.
    pub valid_moves: Vec<String>,
}

/// Calculate moves for the rook.
///
/// # Endpoint
///
/// `POST /chess/rook`
///
/// # Request
///
/// `{"positions": {"Rook": "A1", "Knight 1": "B3", ...}}` — the moving piece
/// is looked up under its capitalized kind name.
///
/// # Response
///
/// - `200 OK`: `{"valid_moves": ["A2", ...]}`
/// - `400 Bad Request`: the rook's position is missing, or any coordinate in
///   the request is malformed
pub async fn rook_moves(
    Json(request): Json<PositionRequest>,
) -> Result<Json<MovesResponse>, (StatusCode, String)> {
    piece_moves(PieceKind::Rook, request)
}

/// Calculate moves for the knight. See [`rook_moves`] for the contract;
/// only the movement pattern differs.
pub async fn knight_moves(
    Json(request): Json<PositionRequest>,
) -> Result<Json<MovesResponse>, (StatusCode, String)> {
    piece_moves(PieceKind::Knight, request)
}

/// Calculate moves for the bishop. See [`rook_moves`] for the contract.
pub async fn bishop_moves(
    Json(request): Json<PositionRequest>,
) -> Result<Json<MovesResponse>, (StatusCode, String)> {
    piece_moves(PieceKind::Bishop, request)
}

/// Calculate moves for the queen. See [`rook_moves`] for the contract.
pub async fn queen_moves(
    Json(request): Json<PositionRequest>,
) -> Result<Json<MovesResponse>, (StatusCode, String)> {
    piece_moves(PieceKind::Queen, request)
}

/// Runs the calculation and maps the outcome onto HTTP.
fn piece_moves(
    kind: PieceKind,
    request: PositionRequest,
) -> Result<Json<MovesResponse>, (StatusCode, String)> {
    let moves = calculate_moves(kind, &request.positions)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    Ok(Json(MovesResponse {
        valid_moves: moves.iter().map(ToString::to_string).collect(),
    }))
}
