//! API handlers for the move server.

pub mod moves;
