//! Transposition table for caching search results.
//!
//! Keys are Zobrist hashes; entries carry the score, the depth it was
//! computed at, the bound type, and the best move found. The search owns one
//! table per root move and drops them all when the call returns, so the map
//! never evicts: the search depth bounds its footprint.

use std::collections::HashMap;

/// How a stored score relates to the true value of the position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundType {
    /// Score from a full-window search.
    Exact,
    /// Beta cutoff: the true value is at least this score.
    Lower,
    /// Fail low: the true value is at most this score.
    Upper,
}

/// One cached search result. `best_move == -1` means none/pass.
#[derive(Clone, Copy, Debug)]
pub struct TTEntry {
    pub score: i32,
    pub depth: u8,
    pub bound: BoundType,
    pub best_move: i8,
}

/// Map from Zobrist key to [`TTEntry`].
pub struct TranspositionTable {
    entries: HashMap<u64, TTEntry>,
}

impl TranspositionTable {
    /// Empty table with room for a typical search's worth of positions.
    #[must_use]
    pub fn new() -> TranspositionTable {
        TranspositionTable {
            entries: HashMap::with_capacity(1 << 16),
        }
    }

    /// Look up the entry stored for `key`.
    #[inline]
    #[must_use]
    pub fn probe(&self, key: u64) -> Option<&TTEntry> {
        self.entries.get(&key)
    }

    /// Store `entry`, replacing any existing entry at `key`.
    #[inline]
    pub fn store(&mut self, key: u64, entry: TTEntry) {
        self.entries.insert(key, entry);
    }

    /// Number of stored positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been stored yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TranspositionTable {
    fn default() -> TranspositionTable {
        TranspositionTable::new()
    }
}
