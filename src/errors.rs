//! Error types for board-state text decoding.
//!
//! Every fallible decode in the crate (FEN fields, algebraic squares)
//! reports one of these kinds, so callers can match on exactly which field
//! was malformed instead of parsing a message string.

use thiserror::Error;

/// Decoding error for FEN strings and algebraic square notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    /// A required FEN field was absent.
    #[error("missing {0} field")]
    MissingField(&'static str),
    /// The FEN string carried more than six fields.
    #[error("unexpected trailing field: {0:?}")]
    TrailingField(String),
    /// The piece-placement field was malformed.
    #[error("invalid piece placement: {0}")]
    InvalidPlacement(String),
    /// The active-color field was neither `w` nor `b`.
    #[error("invalid side-to-move field: {0:?}")]
    InvalidSideToMove(String),
    /// The castling field was not a subset of `KQkq` in canonical order.
    #[error("invalid castling field: {0:?}")]
    InvalidCastling(String),
    /// A square was not two characters of file `a`-`h` and rank `1`-`8`.
    #[error("invalid square: {0:?}")]
    InvalidSquare(String),
    /// The halfmove clock was not a canonical non-negative integer.
    #[error("invalid halfmove clock: {0:?}")]
    InvalidHalfmoveClock(String),
    /// The fullmove number was not a canonical positive integer.
    #[error("invalid fullmove number: {0:?}")]
    InvalidFullmoveNumber(String),
}
