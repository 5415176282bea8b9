//! Chess Move Server
//!
//! An Axum-based web server exposing move calculation for rook, knight,
//! bishop, and queen over a JSON API. The router is built here so tests can
//! drive the whole service in-process.

pub mod api;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Health check endpoint.
///
/// Returns "ok" to indicate the server is running.
async fn health() -> &'static str {
    "ok"
}

/// Builds the application router.
///
/// One route per piece kind, all backed by the same calculation. The route
/// table is the only dispatch; handlers are pure and the router carries no
/// shared state.
pub fn app() -> Router {
    // CORS layer for cross-origin requests
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/chess/rook", post(api::moves::rook_moves))
        .route("/chess/knight", post(api::moves::knight_moves))
        .route("/chess/bishop", post(api::moves::bishop_moves))
        .route("/chess/queen", post(api::moves::queen_moves))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
