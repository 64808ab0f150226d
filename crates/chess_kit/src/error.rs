use thiserror::Error;

use crate::coordinate::Coordinate;

/// Errors raised at the boundaries of the rules core.
///
/// Unmet movement requirements are not errors; they only prune candidate
/// paths. Everything here is recoverable and leaves game state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),
    #[error("square {0} is already occupied")]
    Occupied(Coordinate),
    #[error("illegal move {from} -> {to}: {reason}")]
    IllegalMove {
        from: Coordinate,
        to: Coordinate,
        reason: String,
    },
    #[error("malformed FEN: {0}")]
    MalformedFen(String),
    #[error("malformed UCI move: {0}")]
    MalformedUci(String),
}

impl ChessError {
    pub(crate) fn illegal(from: Coordinate, to: Coordinate, reason: impl Into<String>) -> Self {
        ChessError::IllegalMove {
            from,
            to,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ChessError>;
