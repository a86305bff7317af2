//! FEN encoder.
//!
//! Walks the mailbox rank 8 down to rank 1, run-length-encoding empty
//! squares, then emits the five state fields in decode order. Output is
//! always canonical, so decode-encode is byte-exact for accepted input.

use crate::board::chess_types::{
    make_square, CastlingRights, Color, Square, CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE,
    CASTLE_WHITE_KINGSIDE, CASTLE_WHITE_QUEENSIDE,
};
use crate::board::position::Position;
use crate::notation::algebraic::square_to_str;

/// Encode a position as a six-field FEN string.
pub fn generate_fen(position: &Position) -> String {
    format!(
        "{} {} {} {} {} {}",
        generate_placement_field(position),
        match position.side_to_move() {
            Color::White => "w",
            Color::Black => "b",
        },
        generate_castling_field(position.castling_rights()),
        generate_en_passant_field(position.en_passant_square()),
        position.halfmove_clock(),
        position.fullmove_number()
    )
}

fn generate_placement_field(position: &Position) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_run = 0u8;

        for file in 0..8u8 {
            let square = make_square(file, rank).expect("on-board square");
            match position.piece_at(square).fen_char() {
                Some(ch) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    out.push(ch);
                }
                None => empty_run += 1,
            }
        }

        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }
        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: CastlingRights) -> String {
    if rights == 0 {
        return "-".to_owned();
    }

    let mut out = String::new();
    if rights & CASTLE_WHITE_KINGSIDE != 0 {
        out.push('K');
    }
    if rights & CASTLE_WHITE_QUEENSIDE != 0 {
        out.push('Q');
    }
    if rights & CASTLE_BLACK_KINGSIDE != 0 {
        out.push('k');
    }
    if rights & CASTLE_BLACK_QUEENSIDE != 0 {
        out.push('q');
    }
    out
}

fn generate_en_passant_field(square: Option<Square>) -> String {
    square_to_str(square).expect("en-passant square is on the board")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::chess_types::STARTING_POSITION_FEN;
    use crate::notation::fen_parser::parse_fen;

    fn setup() {
        crate::init();
    }

    #[test]
    fn accepted_fens_round_trip_byte_exact() {
        setup();

        let fens = [
            STARTING_POSITION_FEN,
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "r1bqkbnr/pp1ppppp/2n5/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
            "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 4 6",
            "4k3/8/8/8/8/8/8/4K3 w - - 99 120",
            "8/8/8/8/8/8/8/8 w - - 0 1",
        ];

        for fen in fens {
            let position = parse_fen(fen).expect("FEN should parse");
            assert_eq!(position.to_fen(), fen);
        }
    }

    #[test]
    fn partial_castling_fields_render_in_canonical_order() {
        setup();

        let pos = parse_fen("4k2r/8/8/8/8/8/8/R3K3 w Qk - 0 1").expect("FEN should parse");
        assert_eq!(
            generate_castling_field(pos.castling_rights()),
            "Qk"
        );
        assert_eq!(pos.to_fen(), "4k2r/8/8/8/8/8/8/R3K3 w Qk - 0 1");
    }
}
