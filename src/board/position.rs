//! Immutable board state with a dual bitboard/mailbox representation.
//!
//! A `Position` is fully determined at construction: the FEN decoder fills
//! the piece bitboards, the per-color aggregates, and the mailbox in one
//! pass, then the Zobrist hash is computed once and cached. There is no
//! mutation after that; a future move-apply layer would build a new value.
//!
//! The cached hash covers piece placement, side to move, castling rights,
//! and the en-passant square. The halfmove clock and fullmove number are
//! excluded from the hash *and* from equality, so two positions that differ
//! only in those counters are the same position for transposition purposes.

use crate::board::chess_types::{
    CastlingRights, Color, Piece, PieceKind, Square, STARTING_POSITION_FEN,
};
use crate::errors::NotationError;
use crate::hashing::zobrist;
use crate::notation::fen_generator::generate_fen;
use crate::notation::fen_parser::parse_fen;

#[derive(Debug, Clone)]
pub struct Position {
    // [color][kind] piece occupancy.
    pub(crate) piece_bitboards: [[u64; 6]; 2],
    // Per-color aggregate occupancy; always the OR of that color's rows.
    pub(crate) color_bitboards: [u64; 2],
    // Square -> piece, redundant with the bitboards for O(1) point lookup.
    pub(crate) mailbox: [Piece; 64],

    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_square: Option<Square>,
    pub(crate) halfmove_clock: u16,
    pub(crate) fullmove_number: u16,

    pub(crate) hash: u64,
}

impl Position {
    /// The standard starting position.
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    /// Decode a six-field FEN string. Strict: every field must be present
    /// and in canonical form, so any accepted string re-encodes byte-exact.
    pub fn from_fen(fen: &str) -> Result<Self, NotationError> {
        parse_fen(fen)
    }

    /// Encode back to FEN.
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    /// An all-empty board, used by the decoder as its build target.
    pub(crate) fn empty() -> Self {
        Self {
            piece_bitboards: [[0; 6]; 2],
            color_bitboards: [0; 2],
            mailbox: [Piece::None; 64],
            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            hash: 0,
        }
    }

    /// Piece on `square`, or `Piece::None` for empty or off-board indices.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Piece {
        if square > 63 {
            return Piece::None;
        }
        self.mailbox[usize::from(square)]
    }

    /// Occupancy of one `(color, kind)` piece set.
    #[inline]
    pub fn piece_bitboard(&self, color: Color, kind: PieceKind) -> u64 {
        self.piece_bitboards[color.index()][kind.index()]
    }

    /// Aggregate occupancy of one color.
    #[inline]
    pub fn color_bitboard(&self, color: Color) -> u64 {
        self.color_bitboards[color.index()]
    }

    /// Occupancy of both colors combined.
    #[inline]
    pub fn occupied(&self) -> u64 {
        self.color_bitboards[Color::White.index()] | self.color_bitboards[Color::Black.index()]
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn has_castling_right(&self, right: CastlingRights) -> bool {
        self.castling_rights & right != 0
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Cached Zobrist hash, computed once at construction.
    #[inline]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Accumulate the Zobrist hash from scratch. Called once at the end of
    /// decoding; requires `zobrist::init()` to have run.
    pub(crate) fn compute_hash(&self) -> u64 {
        let mut hash = 0u64;

        for (square, piece) in self.mailbox.iter().enumerate() {
            if *piece != Piece::None {
                hash ^= zobrist::piece_square_key(*piece, square as Square);
            }
        }

        if self.side_to_move == Color::Black {
            hash ^= zobrist::side_to_move_key();
        }

        hash ^= zobrist::castling_key(self.castling_rights);
        hash ^= zobrist::en_passant_key(self.en_passant_square);

        hash
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new_game()
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        // Hash mismatch is a guaranteed fast inequality; equal hashes still
        // need the full field comparison.
        if self.hash != other.hash {
            return false;
        }

        self.mailbox == other.mailbox
            && self.side_to_move == other.side_to_move
            && self.castling_rights == other.castling_rights
            && self.en_passant_square == other.en_passant_square
    }
}

impl Eq for Position {}
