//! Deterministic Zobrist key table for position hashing.
//!
//! Every slot is filled from one fixed-seed generator, so the table is
//! byte-identical on every run; hashes stored in an external transposition
//! table remain comparable across processes. Xoshiro256++ is used because
//! its output stream is a documented, version-stable algorithm.

use std::sync::OnceLock;

use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::board::chess_types::{CastlingRights, Piece, Square};

const FIXED_SEED: u64 = 0x71E6_9E73_3F44_B6F4;

/// Rows of the piece-square table, indexed by the raw piece code
/// (`kind + color * 8`); rows 0, 7, and 8 are filled but never looked up.
const PIECE_CODE_COUNT: usize = 15;

/// Slot 64 is the no-en-passant sentinel.
const EN_PASSANT_SLOTS: usize = 65;

#[derive(Debug)]
struct ZobristTables {
    piece_square: [[u64; 64]; PIECE_CODE_COUNT],
    side_to_move: u64,
    castling: [u64; 16],
    en_passant: [u64; EN_PASSANT_SLOTS],
}

static TABLES: OnceLock<ZobristTables> = OnceLock::new();

/// Build the key table. Idempotent; must run before any key lookup.
pub fn init() {
    TABLES.get_or_init(build_tables);
}

fn build_tables() -> ZobristTables {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(FIXED_SEED);

    let mut piece_square = [[0u64; 64]; PIECE_CODE_COUNT];
    for row in &mut piece_square {
        for key in row {
            *key = rng.next_u64();
        }
    }

    let side_to_move = rng.next_u64();

    let mut castling = [0u64; 16];
    for key in &mut castling {
        *key = rng.next_u64();
    }

    let mut en_passant = [0u64; EN_PASSANT_SLOTS];
    for key in &mut en_passant {
        *key = rng.next_u64();
    }

    ZobristTables {
        piece_square,
        side_to_move,
        castling,
        en_passant,
    }
}

#[inline]
fn tables() -> &'static ZobristTables {
    TABLES
        .get()
        .expect("zobrist::init() must be called before key lookups")
}

/// Key for a `(piece, square)` occupancy term; 0 for the empty piece or an
/// off-board square index.
#[inline]
pub fn piece_square_key(piece: Piece, square: Square) -> u64 {
    if piece == Piece::None || square > 63 {
        return 0;
    }
    tables().piece_square[piece.index()][usize::from(square)]
}

/// Toggle key, xor-ed in when black is to move.
#[inline]
pub fn side_to_move_key() -> u64 {
    tables().side_to_move
}

/// Key for a castling-rights mask; only the low four bits are considered.
#[inline]
pub fn castling_key(rights: CastlingRights) -> u64 {
    tables().castling[usize::from(rights & 0x0F)]
}

/// Key for the en-passant target square, or the sentinel key when there is
/// no en-passant square.
#[inline]
pub fn en_passant_key(square: Option<Square>) -> u64 {
    match square {
        Some(sq) => tables().en_passant[usize::from(sq)],
        None => tables().en_passant[64],
    }
}
