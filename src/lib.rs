//! Board-representation core for a bitboard chess engine.
//!
//! This crate covers the substrate a move generator and search stack build
//! on: 64-bit bitboard math with precomputed mask tables, a deterministic
//! Zobrist key table, and an immutable [`board::position::Position`] value
//! that decodes from and encodes to FEN while keeping a redundant
//! bitboard/mailbox representation consistent.
//!
//! The two process-wide lookup tables must be populated before anything else
//! runs; call [`init`] (or the per-module `init` functions) once at startup,
//! before constructing positions or touching the mask accessors.

pub mod board {
    pub mod bit_math;
    pub mod chess_types;
    pub mod position;
}

pub mod hashing {
    pub mod zobrist;
}

pub mod notation {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
}

pub mod utils {
    pub mod render_position;
}

pub mod errors;

/// Populate both process-wide lookup tables (bit masks, Zobrist keys).
///
/// Idempotent; safe to call more than once. Must complete before any
/// `Position` is constructed and before any mask or key accessor is used.
pub fn init() {
    board::bit_math::init();
    hashing::zobrist::init();
}
