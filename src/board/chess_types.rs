//! Core board value types and the integer piece-code layout.
//!
//! The numeric encoding of [`Piece`] (`kind code + color * 8`) is
//! load-bearing: it is used directly as the row index into the Zobrist
//! piece-square key table, so all conversions in and out of it live here.

/// Board square index (`0..=63`), `a1 == 0`, `h1 == 7`, `h8 == 63`.
pub type Square = u8;

/// Compact castling rights bitmask (low four bits used).
pub type CastlingRights = u8;

pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;

/// Standard chess starting position in Forsyth-Edwards Notation.
pub const STARTING_POSITION_FEN: &str =
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Numeric stride between the white and black halves of the piece code.
const PIECE_COLOR_STRIDE: u8 = 8;

/// Side to move / piece ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Piece kind, colorless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// All six kinds in bitboard-table order, for iteration.
pub const PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

impl PieceKind {
    /// Bitboard-table index (`0..=5`).
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Nonzero kind code (`1..=6`), the low three bits of the piece code.
    #[inline]
    pub const fn code(self) -> u8 {
        self.index() as u8 + 1
    }
}

/// Colored piece, or none, with the explicit `kind code + color * 8` layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Piece {
    None = 0,
    WhitePawn = 1,
    WhiteKnight = 2,
    WhiteBishop = 3,
    WhiteRook = 4,
    WhiteQueen = 5,
    WhiteKing = 6,
    BlackPawn = 9,
    BlackKnight = 10,
    BlackBishop = 11,
    BlackRook = 12,
    BlackQueen = 13,
    BlackKing = 14,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        match (color, kind) {
            (Color::White, PieceKind::Pawn) => Piece::WhitePawn,
            (Color::White, PieceKind::Knight) => Piece::WhiteKnight,
            (Color::White, PieceKind::Bishop) => Piece::WhiteBishop,
            (Color::White, PieceKind::Rook) => Piece::WhiteRook,
            (Color::White, PieceKind::Queen) => Piece::WhiteQueen,
            (Color::White, PieceKind::King) => Piece::WhiteKing,
            (Color::Black, PieceKind::Pawn) => Piece::BlackPawn,
            (Color::Black, PieceKind::Knight) => Piece::BlackKnight,
            (Color::Black, PieceKind::Bishop) => Piece::BlackBishop,
            (Color::Black, PieceKind::Rook) => Piece::BlackRook,
            (Color::Black, PieceKind::Queen) => Piece::BlackQueen,
            (Color::Black, PieceKind::King) => Piece::BlackKing,
        }
    }

    /// Raw piece code, usable as a Zobrist table row index (`0..=14`).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Piece::None => None,
            _ => {
                if (self as u8) >= PIECE_COLOR_STRIDE {
                    Some(Color::Black)
                } else {
                    Some(Color::White)
                }
            }
        }
    }

    #[inline]
    pub const fn kind(self) -> Option<PieceKind> {
        match (self as u8) % PIECE_COLOR_STRIDE {
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Knight),
            3 => Some(PieceKind::Bishop),
            4 => Some(PieceKind::Rook),
            5 => Some(PieceKind::Queen),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Parse a FEN piece letter (uppercase white, lowercase black).
    pub fn from_fen_char(ch: char) -> Option<Piece> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else if ch.is_ascii_lowercase() {
            Color::Black
        } else {
            return None;
        };

        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };

        Some(Piece::new(kind, color))
    }

    /// FEN piece letter, or `None` for the empty piece.
    pub fn fen_char(self) -> Option<char> {
        let kind = self.kind()?;
        let base = match kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };

        match self.color()? {
            Color::White => Some(base.to_ascii_uppercase()),
            Color::Black => Some(base),
        }
    }
}

/// Compose a square index from file and rank, or `None` when off the board.
#[inline]
pub const fn make_square(file: u8, rank: u8) -> Option<Square> {
    if file > 7 || rank > 7 {
        return None;
    }
    Some(rank * 8 + file)
}

/// File index (`0..=7`) of a valid square.
#[inline]
pub const fn file_of(square: Square) -> u8 {
    square % 8
}

/// Rank index (`0..=7`) of a valid square.
#[inline]
pub const fn rank_of(square: Square) -> u8 {
    square / 8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_code_layout_is_kind_plus_color_times_eight() {
        for color in [Color::White, Color::Black] {
            for kind in PIECE_KINDS {
                let piece = Piece::new(kind, color);
                let expected = kind.code() as usize + color.index() * 8;
                assert_eq!(piece.index(), expected);
                assert_eq!(piece.kind(), Some(kind));
                assert_eq!(piece.color(), Some(color));
            }
        }

        assert_eq!(Piece::None.index(), 0);
        assert_eq!(Piece::None.kind(), None);
        assert_eq!(Piece::None.color(), None);
    }

    #[test]
    fn fen_char_round_trip() {
        for ch in ['P', 'N', 'B', 'R', 'Q', 'K', 'p', 'n', 'b', 'r', 'q', 'k'] {
            let piece = Piece::from_fen_char(ch).expect("piece letter should parse");
            assert_eq!(piece.fen_char(), Some(ch));
        }

        assert_eq!(Piece::from_fen_char('x'), None);
        assert_eq!(Piece::from_fen_char('1'), None);
        assert_eq!(Piece::None.fen_char(), None);
    }

    #[test]
    fn square_composition_and_decomposition() {
        assert_eq!(make_square(0, 0), Some(0));
        assert_eq!(make_square(7, 7), Some(63));
        assert_eq!(make_square(4, 3), Some(28)); // e4
        assert_eq!(make_square(8, 0), None);
        assert_eq!(make_square(0, 8), None);

        for sq in 0..64u8 {
            let file = file_of(sq);
            let rank = rank_of(sq);
            assert_eq!(make_square(file, rank), Some(sq));
        }
    }
}
