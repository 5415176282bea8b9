//! Request-scoped board state.

use std::collections::HashMap;

use thiserror::Error;

use crate::{CoordError, Square};

/// A coordinate string that failed to decode, with the offending input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid coordinate \"{coord}\": {source}")]
pub struct InvalidCoordinate {
    /// The coordinate string as it appeared in the request.
    pub coord: String,
    #[source]
    pub source: CoordError,
}

/// Piece labels mapped to the squares they occupy, for one request.
///
/// Labels are free-form strings such as "Rook" or "Knight 2"; the first
/// whitespace-delimited token names the piece kind. Keys are unique, and
/// nothing about a label is validated here beyond its coordinate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    pieces: HashMap<String, Square>,
}

impl Board {
    /// Decodes a raw label -> coordinate-string map.
    ///
    /// Any coordinate that fails to decode rejects the whole map; there are
    /// no partially parsed boards.
    pub fn parse(raw: &HashMap<String, String>) -> Result<Self, InvalidCoordinate> {
        let mut pieces = HashMap::with_capacity(raw.len());
        for (label, coord) in raw {
            let square = Square::parse(coord).map_err(|source| InvalidCoordinate {
                coord: coord.clone(),
                source,
            })?;
            pieces.insert(label.clone(), square);
        }
        Ok(Board { pieces })
    }

    /// Returns the square occupied by the piece with this exact label.
    pub fn get(&self, label: &str) -> Option<Square> {
        self.pieces.get(label).copied()
    }

    /// Iterates over (label, square) pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Square)> {
        self.pieces
            .iter()
            .map(|(label, &square)| (label.as_str(), square))
    }

    /// Number of pieces on the board.
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Returns true if no pieces are present.
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}
