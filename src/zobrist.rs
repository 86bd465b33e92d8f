//! Zobrist keys for Othello positions.
//!
//! One random 64-bit word per (square, color) plus a single black-to-move
//! word. The tables are process-wide and generated lazily from a fixed seed,
//! so hashes are stable across runs and the search determinism scenarios are
//! reproducible.

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::Color;

const ZOBRIST_SEED: u64 = 0x05B3_ADE1_57E1_10C4;

/// Per-square words, indexed `[square][color.index()]`.
pub static ZOBRIST_SQUARES: Lazy<[[u64; 2]; 64]> = Lazy::new(|| {
    let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);
    let mut table = [[0u64; 2]; 64];
    for square in &mut table {
        for word in square.iter_mut() {
            *word = rng.gen();
        }
    }
    table
});

/// Word XORed into the hash when Black is to move.
pub static ZOBRIST_BLACK_TO_MOVE: Lazy<u64> = Lazy::new(|| {
    // Continue the same stream past the 128 square words.
    let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);
    for _ in 0..128 {
        let _: u64 = rng.gen();
    }
    rng.gen()
});

/// Word for a disc of `color` on `square`.
#[inline]
#[must_use]
pub fn square_key(square: u8, color: Color) -> u64 {
    ZOBRIST_SQUARES[square as usize][color.index()]
}

/// Hash a position from scratch.
///
/// Used to seed constructed boards and to cross-check the incremental update
/// in `apply_move`; the search itself only ever updates incrementally.
#[must_use]
pub fn zobrist_hash(black: u64, white: u64, turn: Color) -> u64 {
    let mut hash = 0u64;
    let mut bb = black;
    while bb != 0 {
        let pos = bb.trailing_zeros() as usize;
        hash ^= ZOBRIST_SQUARES[pos][Color::Black.index()];
        bb &= bb - 1;
    }
    let mut bb = white;
    while bb != 0 {
        let pos = bb.trailing_zeros() as usize;
        hash ^= ZOBRIST_SQUARES[pos][Color::White.index()];
        bb &= bb - 1;
    }
    if turn == Color::Black {
        hash ^= *ZOBRIST_BLACK_TO_MOVE;
    }
    hash
}
