//! Bitboard math: mask tables, directional shifts, and scan operations.
//!
//! Bit `i` of a bitboard is square `i` (`a1 == 0`, `h8 == 63`). The mask
//! tables are built once by [`init`] and read-only afterwards; every scan
//! function is total, returning `None` on the empty bitboard instead of
//! failing.

use std::sync::OnceLock;

use crate::board::chess_types::{file_of, make_square, rank_of, Square};

/// De Bruijn multiplier for the 64-entry bit-index lookup.
const DEBRUIJN: u64 = 0x03f7_9d71_b4cb_0a89;
const DEBRUIJN_SHIFT: u32 = 58;

/// Index table generated from [`DEBRUIJN`]: entry `(bit * DEBRUIJN) >> 58`
/// recovers the square index of a one-hot bitboard `bit`. The table and the
/// constant are a matched pair; the tests validate them together.
#[rustfmt::skip]
const DEBRUIJN_INDEX: [u8; 64] = [
     0,  1, 48,  2, 57, 49, 28,  3,
    61, 58, 50, 42, 38, 29, 17,  4,
    62, 55, 59, 36, 53, 51, 43, 22,
    45, 39, 33, 30, 24, 18, 12,  5,
    63, 47, 56, 27, 60, 41, 37, 16,
    54, 35, 52, 21, 44, 32, 23, 11,
    46, 26, 40, 15, 34, 20, 31, 10,
    25, 14, 19,  9, 13,  8,  7,  6,
];

/// Precomputed mask tables, populated once by [`init`].
#[derive(Debug)]
struct MaskTables {
    files: [u64; 8],
    ranks: [u64; 8],
    // Indexed by diagonal offset, center index 7 (the a1-h8 diagonal).
    diagonals: [u64; 15],
    // Indexed by anti-diagonal offset, center index 7 (the a8-h1 diagonal).
    anti_diagonals: [u64; 15],
    squares: [u64; 64],
}

static MASKS: OnceLock<MaskTables> = OnceLock::new();

/// Build the mask tables. Idempotent; must run before any mask accessor or
/// east/west shift is used.
pub fn init() {
    MASKS.get_or_init(build_tables);
}

fn build_tables() -> MaskTables {
    let mut files = [0u64; 8];
    for (file, mask) in files.iter_mut().enumerate() {
        for rank in 0..8 {
            *mask |= 1u64 << (rank * 8 + file);
        }
    }

    let mut ranks = [0u64; 8];
    for (rank, mask) in ranks.iter_mut().enumerate() {
        for file in 0..8 {
            *mask |= 1u64 << (rank * 8 + file);
        }
    }

    let mut diagonals = [0u64; 15];
    for (i, mask) in diagonals.iter_mut().enumerate() {
        let offset = i as i8 - 7;
        for file in 0..8i8 {
            let rank = file - offset;
            if let Some(sq) = square_if_on_board(file, rank) {
                *mask |= 1u64 << sq;
            }
        }
    }

    let mut anti_diagonals = [0u64; 15];
    for (i, mask) in anti_diagonals.iter_mut().enumerate() {
        let offset = i as i8 - 7;
        for file in 0..8i8 {
            let rank = 7 - file - offset;
            if let Some(sq) = square_if_on_board(file, rank) {
                *mask |= 1u64 << sq;
            }
        }
    }

    let mut squares = [0u64; 64];
    for (sq, mask) in squares.iter_mut().enumerate() {
        *mask = 1u64 << sq;
    }

    MaskTables {
        files,
        ranks,
        diagonals,
        anti_diagonals,
        squares,
    }
}

fn square_if_on_board(file: i8, rank: i8) -> Option<Square> {
    if !(0..8).contains(&file) || !(0..8).contains(&rank) {
        return None;
    }
    make_square(file as u8, rank as u8)
}

#[inline]
fn masks() -> &'static MaskTables {
    MASKS
        .get()
        .expect("bit_math::init() must be called before mask lookups")
}

/// Mask of all eight squares on `file` (`0 == a`-file).
#[inline]
pub fn file_mask(file: u8) -> u64 {
    masks().files[usize::from(file)]
}

/// Mask of all eight squares on `rank` (`0 == `rank 1).
#[inline]
pub fn rank_mask(rank: u8) -> u64 {
    masks().ranks[usize::from(rank)]
}

/// Diagonal mask by offset index; index 7 is the a1-h8 diagonal.
#[inline]
pub fn diagonal_mask(index: u8) -> u64 {
    masks().diagonals[usize::from(index)]
}

/// Anti-diagonal mask by offset index; index 7 is the a8-h1 diagonal.
#[inline]
pub fn anti_diagonal_mask(index: u8) -> u64 {
    masks().anti_diagonals[usize::from(index)]
}

/// One-hot mask for a single square.
#[inline]
pub fn square_mask(square: Square) -> u64 {
    masks().squares[usize::from(square)]
}

/// Diagonal table index containing `square`.
#[inline]
pub fn diagonal_index_of(square: Square) -> u8 {
    (file_of(square) as i8 - rank_of(square) as i8 + 7) as u8
}

/// Anti-diagonal table index containing `square`.
#[inline]
pub fn anti_diagonal_index_of(square: Square) -> u8 {
    14 - (file_of(square) + rank_of(square))
}

#[inline]
pub fn test_bit(bitboard: u64, square: Square) -> bool {
    if square > 63 {
        return false;
    }
    bitboard & (1u64 << square) != 0
}

#[inline]
pub fn set_bit(bitboard: &mut u64, square: Square) {
    if square > 63 {
        return;
    }
    *bitboard |= 1u64 << square;
}

#[inline]
pub fn clear_bit(bitboard: &mut u64, square: Square) {
    if square > 63 {
        return;
    }
    *bitboard &= !(1u64 << square);
}

/// Shift one rank up; bits on rank 8 fall off the board.
#[inline]
pub fn north_one(bitboard: u64) -> u64 {
    bitboard << 8
}

/// Shift one rank down; bits on rank 1 fall off the board.
#[inline]
pub fn south_one(bitboard: u64) -> u64 {
    bitboard >> 8
}

/// Shift one file toward `h`; bits on the h-file fall off instead of
/// wrapping to the a-file of the next rank.
#[inline]
pub fn east_one(bitboard: u64) -> u64 {
    (bitboard << 1) & !file_mask(0)
}

/// Shift one file toward `a`; bits on the a-file fall off instead of
/// wrapping to the h-file of the previous rank.
#[inline]
pub fn west_one(bitboard: u64) -> u64 {
    (bitboard >> 1) & !file_mask(7)
}

#[inline]
pub fn north_east_one(bitboard: u64) -> u64 {
    north_one(east_one(bitboard))
}

#[inline]
pub fn north_west_one(bitboard: u64) -> u64 {
    north_one(west_one(bitboard))
}

#[inline]
pub fn south_east_one(bitboard: u64) -> u64 {
    south_one(east_one(bitboard))
}

#[inline]
pub fn south_west_one(bitboard: u64) -> u64 {
    south_one(west_one(bitboard))
}

/// Square index of the lowest set bit, or `None` for the empty bitboard.
#[inline]
pub fn lsb(bitboard: u64) -> Option<Square> {
    if bitboard == 0 {
        return None;
    }

    let isolated = bitboard & bitboard.wrapping_neg();
    Some(DEBRUIJN_INDEX[(isolated.wrapping_mul(DEBRUIJN) >> DEBRUIJN_SHIFT) as usize])
}

/// Square index of the highest set bit, or `None` for the empty bitboard.
#[inline]
pub fn msb(bitboard: u64) -> Option<Square> {
    if bitboard == 0 {
        return None;
    }

    // Smear the top bit downward, then isolate it; the isolated bit goes
    // through the same multiply-and-lookup as `lsb`.
    let mut filled = bitboard;
    filled |= filled >> 1;
    filled |= filled >> 2;
    filled |= filled >> 4;
    filled |= filled >> 8;
    filled |= filled >> 16;
    filled |= filled >> 32;
    let isolated = filled ^ (filled >> 1);

    Some(DEBRUIJN_INDEX[(isolated.wrapping_mul(DEBRUIJN) >> DEBRUIJN_SHIFT) as usize])
}

/// Number of set bits, `0..=64`.
#[inline]
pub fn pop_count(bitboard: u64) -> u32 {
    bitboard.count_ones()
}

/// Clear the lowest set bit in place and return it as a one-hot bitboard.
///
/// Repeated calls drain the set bits in ascending square order; on the empty
/// bitboard this returns 0 and leaves the input untouched.
#[inline]
pub fn pop_lsb(bitboard: &mut u64) -> u64 {
    let before = *bitboard;
    *bitboard &= before.wrapping_sub(1);
    before & !*bitboard
}
