//! Bitboard primitives: directional shifts with edge masking and bit iteration.

use super::masks::{BOTTOM_EDGE_MASK, LEFT_EDGE_MASK, RIGHT_EDGE_MASK, TOP_EDGE_MASK};

/// One of the eight neighbor directions on the board.
///
/// The numeric offset is the square-index delta: west is -1, south is +8,
/// and so on. Shifting in a direction first clears the squares that would
/// wrap across a row or fall off the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    West,
    East,
    North,
    South,
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Direction {
    /// All eight directions, for exhaustive sweeps.
    pub const ALL: [Direction; 8] = [
        Direction::West,
        Direction::East,
        Direction::North,
        Direction::South,
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::SouthWest,
        Direction::SouthEast,
    ];

    /// Square-index delta for this direction.
    #[must_use]
    pub const fn offset(self) -> i8 {
        match self {
            Direction::West => -1,
            Direction::East => 1,
            Direction::North => -8,
            Direction::South => 8,
            Direction::NorthWest => -9,
            Direction::NorthEast => -7,
            Direction::SouthWest => 7,
            Direction::SouthEast => 9,
        }
    }

    /// Pre-shift mask: the AND of the edge masks that apply to this direction.
    #[must_use]
    pub const fn edge_mask(self) -> u64 {
        match self {
            Direction::West => LEFT_EDGE_MASK,
            Direction::East => RIGHT_EDGE_MASK,
            Direction::North => TOP_EDGE_MASK,
            Direction::South => BOTTOM_EDGE_MASK,
            Direction::NorthWest => TOP_EDGE_MASK & LEFT_EDGE_MASK,
            Direction::NorthEast => TOP_EDGE_MASK & RIGHT_EDGE_MASK,
            Direction::SouthWest => BOTTOM_EDGE_MASK & LEFT_EDGE_MASK,
            Direction::SouthEast => BOTTOM_EDGE_MASK & RIGHT_EDGE_MASK,
        }
    }
}

/// Shift every set bit one step in `dir`, dropping bits that would leave the
/// board or wrap to the adjacent row.
#[inline]
#[must_use]
pub const fn shift(bb: u64, dir: Direction) -> u64 {
    let masked = bb & dir.edge_mask();
    let offset = dir.offset();
    if offset > 0 {
        masked << offset
    } else {
        masked >> -offset
    }
}

/// Iterator over the square indices of set bits, low to high.
pub struct BitIter(u64);

impl Iterator for BitIter {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.0 == 0 {
            None
        } else {
            let idx = self.0.trailing_zeros() as u8;
            self.0 &= self.0 - 1;
            Some(idx)
        }
    }
}

/// Iterate the square indices of `bb`'s set bits, low to high.
#[inline]
#[must_use]
pub fn squares_of(bb: u64) -> BitIter {
    BitIter(bb)
}
