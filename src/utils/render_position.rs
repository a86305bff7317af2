//! Text renderers for positions and raw bitboards.
//!
//! Pure string building for debugging and test diagnostics; printing the
//! result is the caller's business. The grid runs rank 8 at the top down to
//! rank 1 with file labels `a`-`h` beneath.

use crate::board::bit_math;
use crate::board::chess_types::{make_square, Piece};
use crate::board::position::Position;

/// Render the board as an 8x8 grid: uppercase white, lowercase black, `.`
/// for empty squares.
pub fn render_position(position: &Position) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        for file in 0..8u8 {
            let square = make_square(file, rank).expect("on-board square");
            match position.piece_at(square) {
                Piece::None => out.push('.'),
                piece => out.push(piece.fen_char().expect("occupied square has a letter")),
            }
            if file < 7 {
                out.push(' ');
            }
        }
        out.push('\n');
    }

    out.push_str("a b c d e f g h");
    out
}

/// Render a raw bitboard in the same orientation, `X` for set bits.
pub fn render_bitboard(bitboard: u64) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        for file in 0..8u8 {
            let square = make_square(file, rank).expect("on-board square");
            out.push(if bit_math::test_bit(bitboard, square) {
                'X'
            } else {
                '.'
            });
            if file < 7 {
                out.push(' ');
            }
        }
        out.push('\n');
    }

    out.push_str("a b c d e f g h");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_grid() {
        crate::init();

        let expected = "\
r n b q k b n r
p p p p p p p p
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
P P P P P P P P
R N B Q K B N R
a b c d e f g h";

        assert_eq!(render_position(&Position::new_game()), expected);
    }

    #[test]
    fn bitboard_grid_marks_set_bits() {
        crate::init();

        let rendered = render_bitboard(1u64 | (1u64 << 63));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], ". . . . . . . X"); // h8 on the top rank
        assert_eq!(lines[7], "X . . . . . . ."); // a1 on the bottom rank
        assert_eq!(lines[8], "a b c d e f g h");
    }
}
