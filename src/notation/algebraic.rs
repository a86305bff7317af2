//! Algebraic square coordinate conversions.
//!
//! Two characters, file letter then rank digit (`e4`); the literal `-`
//! encodes the absence of a square. Input is accepted case-insensitively;
//! output is always lowercase.

use crate::board::chess_types::{file_of, rank_of, Square};
use crate::errors::NotationError;

/// Parse an algebraic coordinate (for example `"e4"`, `"E4"`).
///
/// `"-"` is the valid encoding of no square and parses to `None`.
#[inline]
pub fn square_from_str(text: &str) -> Result<Option<Square>, NotationError> {
    if text == "-" {
        return Ok(None);
    }

    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(NotationError::InvalidSquare(text.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(NotationError::InvalidSquare(text.to_owned()));
    }

    Ok(Some((rank - b'1') * 8 + (file - b'a')))
}

/// Render a square as a lowercase algebraic coordinate, `None` as `"-"`.
#[inline]
pub fn square_to_str(square: Option<Square>) -> Result<String, NotationError> {
    let Some(square) = square else {
        return Ok("-".to_owned());
    };

    if square > 63 {
        return Err(NotationError::InvalidSquare(square.to_string()));
    }

    let file_char = char::from(b'a' + file_of(square));
    let rank_char = char::from(b'1' + rank_of(square));
    Ok(format!("{file_char}{rank_char}"))
}

/// Parse an algebraic coordinate to a one-hot bitboard.
///
/// `"-"` names no square and has no bitboard, so it is an error here.
#[inline]
pub fn bitboard_from_str(text: &str) -> Result<u64, NotationError> {
    match square_from_str(text)? {
        Some(square) => Ok(1u64 << square),
        None => Err(NotationError::InvalidSquare(text.to_owned())),
    }
}

/// Render a one-hot bitboard as an algebraic coordinate.
#[inline]
pub fn bitboard_to_str(bitboard: u64) -> Result<String, NotationError> {
    if bitboard.count_ones() != 1 {
        return Err(NotationError::InvalidSquare(format!("{bitboard:#x}")));
    }

    square_to_str(Some(bitboard.trailing_zeros() as Square))
}
