//! Strict FEN decoder.
//!
//! Accepts exactly six space-separated fields in canonical form and rejects
//! everything else with a typed [`NotationError`]. Canonical means no
//! consecutive digit runs in the placement, castling letters as an ordered
//! subset of `KQkq`, a lowercase en-passant square, and clocks written as
//! plain decimal with no sign or leading zeros. Restricting decoding to the
//! canonical spelling is what makes re-encoding reproduce any accepted
//! string byte for byte.

use crate::board::bit_math;
use crate::board::chess_types::{
    make_square, CastlingRights, Color, Piece, Square, CASTLE_BLACK_KINGSIDE,
    CASTLE_BLACK_QUEENSIDE, CASTLE_WHITE_KINGSIDE, CASTLE_WHITE_QUEENSIDE,
};
use crate::board::position::Position;
use crate::errors::NotationError;
use crate::notation::algebraic::square_from_str;

/// Decode a six-field FEN string into a fully constructed [`Position`].
///
/// Requires `bit_math::init()` and `zobrist::init()` to have run.
pub fn parse_fen(fen: &str) -> Result<Position, NotationError> {
    let mut parts = fen.split(' ');

    let placement = parts.next().ok_or(NotationError::MissingField("piece placement"))?;
    let side = parts.next().ok_or(NotationError::MissingField("side to move"))?;
    let castling = parts.next().ok_or(NotationError::MissingField("castling availability"))?;
    let en_passant = parts.next().ok_or(NotationError::MissingField("en-passant target"))?;
    let halfmove = parts.next().ok_or(NotationError::MissingField("halfmove clock"))?;
    let fullmove = parts.next().ok_or(NotationError::MissingField("fullmove number"))?;

    if let Some(extra) = parts.next() {
        return Err(NotationError::TrailingField(extra.to_owned()));
    }

    let mut position = Position::empty();

    parse_placement(placement, &mut position)?;
    position.side_to_move = parse_side_to_move(side)?;
    position.castling_rights = parse_castling_rights(castling)?;
    position.en_passant_square = parse_en_passant(en_passant)?;
    position.halfmove_clock = parse_counter(halfmove)
        .ok_or_else(|| NotationError::InvalidHalfmoveClock(halfmove.to_owned()))?;
    position.fullmove_number = parse_counter(fullmove)
        .filter(|n| *n >= 1)
        .ok_or_else(|| NotationError::InvalidFullmoveNumber(fullmove.to_owned()))?;

    position.hash = position.compute_hash();

    Ok(position)
}

fn parse_placement(placement: &str, position: &mut Position) -> Result<(), NotationError> {
    let groups: Vec<&str> = placement.split('/').collect();
    if groups.len() != 8 {
        return Err(NotationError::InvalidPlacement(
            "placement must contain 8 rank groups".to_owned(),
        ));
    }

    // Groups run from rank 8 down to rank 1.
    for (group_idx, group) in groups.iter().enumerate() {
        let rank = 7 - group_idx as u8;
        let mut file = 0u8;
        let mut previous_was_digit = false;

        for ch in group.chars() {
            if let Some(run) = ch.to_digit(10) {
                if !(1..=8).contains(&run) {
                    return Err(NotationError::InvalidPlacement(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                if previous_was_digit {
                    return Err(NotationError::InvalidPlacement(
                        "consecutive digit runs are not canonical".to_owned(),
                    ));
                }
                previous_was_digit = true;
                file += run as u8;
                continue;
            }
            previous_was_digit = false;

            let piece = Piece::from_fen_char(ch).ok_or_else(|| {
                NotationError::InvalidPlacement(format!("invalid piece character '{ch}'"))
            })?;

            let square = make_square(file, rank).ok_or_else(|| {
                NotationError::InvalidPlacement(format!("rank group '{group}' overflows the board"))
            })?;

            place_piece(position, piece, square);
            file += 1;
        }

        if file != 8 {
            return Err(NotationError::InvalidPlacement(format!(
                "rank group '{group}' does not cover 8 files"
            )));
        }
    }

    Ok(())
}

/// Put `piece` on `square` in the mailbox, its piece bitboard, and its
/// color aggregate in one step, so the dual representation never diverges.
fn place_piece(position: &mut Position, piece: Piece, square: Square) {
    let color = piece.color().expect("placed piece has a color");
    let kind = piece.kind().expect("placed piece has a kind");
    let mask = bit_math::square_mask(square);

    position.mailbox[usize::from(square)] = piece;
    position.piece_bitboards[color.index()][kind.index()] |= mask;
    position.color_bitboards[color.index()] |= mask;
}

fn parse_side_to_move(side: &str) -> Result<Color, NotationError> {
    match side {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(NotationError::InvalidSideToMove(side.to_owned())),
    }
}

fn parse_castling_rights(castling: &str) -> Result<CastlingRights, NotationError> {
    if castling == "-" {
        return Ok(0);
    }
    if castling.is_empty() {
        return Err(NotationError::InvalidCastling(castling.to_owned()));
    }

    let mut rights: CastlingRights = 0;
    let mut last_bit: CastlingRights = 0;

    for ch in castling.chars() {
        let bit = match ch {
            'K' => CASTLE_WHITE_KINGSIDE,
            'Q' => CASTLE_WHITE_QUEENSIDE,
            'k' => CASTLE_BLACK_KINGSIDE,
            'q' => CASTLE_BLACK_QUEENSIDE,
            _ => return Err(NotationError::InvalidCastling(castling.to_owned())),
        };

        // Bits ascend in canonical `KQkq` order; anything else is a
        // duplicate or out-of-order letter.
        if bit <= last_bit {
            return Err(NotationError::InvalidCastling(castling.to_owned()));
        }
        rights |= bit;
        last_bit = bit;
    }

    Ok(rights)
}

fn parse_en_passant(field: &str) -> Result<Option<Square>, NotationError> {
    let square = square_from_str(field)?;

    // The shared codec accepts `E3`, but an uppercase field would not
    // re-encode to the same bytes, so only the lowercase spelling is FEN.
    if square.is_some() && !field.starts_with(|ch: char| ch.is_ascii_lowercase()) {
        return Err(NotationError::InvalidSquare(field.to_owned()));
    }

    Ok(square)
}

/// Parse a clock field written as canonical decimal (no sign, no leading
/// zeros); returns `None` for anything else.
fn parse_counter(field: &str) -> Option<u16> {
    let value: u16 = field.parse().ok()?;
    if value.to_string() != field {
        return None;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::chess_types::{PieceKind, STARTING_POSITION_FEN};

    fn setup() {
        crate::init();
    }

    #[test]
    fn parse_starting_position() {
        setup();

        let pos = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(pos.side_to_move(), Color::White);
        assert_eq!(pos.castling_rights(), 0b1111);
        assert_eq!(pos.en_passant_square(), None);
        assert_eq!(
            bit_math::pop_count(pos.piece_bitboard(Color::White, PieceKind::Pawn)),
            8
        );
        assert_eq!(bit_math::pop_count(pos.occupied()), 32);
    }

    #[test]
    fn parse_en_passant_field_value() {
        setup();

        let pos = parse_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
            .expect("FEN should parse");
        assert_eq!(pos.en_passant_square(), Some(20)); // e3
    }

    #[test]
    fn missing_and_trailing_fields() {
        setup();

        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/8 w - -"),
            Err(NotationError::MissingField("halfmove clock"))
        );
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/8 w - - 0 1 extra"),
            Err(NotationError::TrailingField("extra".to_owned()))
        );
    }

    #[test]
    fn malformed_placement_is_rejected() {
        setup();

        // Seven rank groups.
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8 w - - 0 1"),
            Err(NotationError::InvalidPlacement(_))
        ));
        // Rank does not sum to 8 files.
        assert!(matches!(
            parse_fen("7/8/8/8/8/8/8/8 w - - 0 1"),
            Err(NotationError::InvalidPlacement(_))
        ));
        // Rank overflows.
        assert!(matches!(
            parse_fen("8p/8/8/8/8/8/8/8 w - - 0 1"),
            Err(NotationError::InvalidPlacement(_))
        ));
        // Unknown piece letter.
        assert!(matches!(
            parse_fen("7x/8/8/8/8/8/8/8 w - - 0 1"),
            Err(NotationError::InvalidPlacement(_))
        ));
        // Non-canonical digit run (4+4 instead of 8).
        assert!(matches!(
            parse_fen("44/8/8/8/8/8/8/8 w - - 0 1"),
            Err(NotationError::InvalidPlacement(_))
        ));
        // Zero-length run.
        assert!(matches!(
            parse_fen("08/8/8/8/8/8/8/8 w - - 0 1"),
            Err(NotationError::InvalidPlacement(_))
        ));
    }

    #[test]
    fn malformed_state_fields_are_rejected() {
        setup();

        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/8 x - - 0 1"),
            Err(NotationError::InvalidSideToMove("x".to_owned()))
        );
        // Unknown castling letter.
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/8 w KX - 0 1"),
            Err(NotationError::InvalidCastling("KX".to_owned()))
        );
        // Duplicate and out-of-order castling letters.
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/8 w KK - 0 1"),
            Err(NotationError::InvalidCastling("KK".to_owned()))
        );
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/8 w QK - 0 1"),
            Err(NotationError::InvalidCastling("QK".to_owned()))
        );
        // Malformed or non-canonical en-passant squares.
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/8 w - e9 0 1"),
            Err(NotationError::InvalidSquare("e9".to_owned()))
        );
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/8 w - E3 0 1"),
            Err(NotationError::InvalidSquare("E3".to_owned()))
        );
        // Clocks must be canonical decimal; fullmove must be positive.
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/8 w - - x 1"),
            Err(NotationError::InvalidHalfmoveClock("x".to_owned()))
        );
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/8 w - - 007 1"),
            Err(NotationError::InvalidHalfmoveClock("007".to_owned()))
        );
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/8 w - - 0 +2"),
            Err(NotationError::InvalidFullmoveNumber("+2".to_owned()))
        );
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/8 w - - 0 0"),
            Err(NotationError::InvalidFullmoveNumber("0".to_owned()))
        );
    }
}
