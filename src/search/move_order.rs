//! Move ordering: corners first, edges next, interior last, with the
//! transposition-table move promoted to the front.

use crate::board::masks::{CORNER_MASK, EDGE_MASK};
use crate::board::squares_of;
use crate::tt::TranspositionTable;

/// Order the moves of `moves_bb` for the position hashed as `hash`.
///
/// Within a class, moves come out in ascending square order, which keeps the
/// overall ordering deterministic. If `tt` remembers a best move for this
/// position it is swapped to the front regardless of its class.
#[must_use]
pub(crate) fn order_moves(moves_bb: u64, tt: &TranspositionTable, hash: u64) -> Vec<i8> {
    let corners = moves_bb & CORNER_MASK;
    let edges = moves_bb & EDGE_MASK & !CORNER_MASK;
    let interior = moves_bb & !EDGE_MASK;

    let mut moves = Vec::with_capacity(moves_bb.count_ones() as usize);
    moves.extend(squares_of(corners).map(|p| p as i8));
    moves.extend(squares_of(edges).map(|p| p as i8));
    moves.extend(squares_of(interior).map(|p| p as i8));

    if let Some(entry) = tt.probe(hash) {
        if let Some(idx) = moves.iter().position(|&m| m == entry.best_move) {
            moves.swap(0, idx);
        }
    }
    moves
}
