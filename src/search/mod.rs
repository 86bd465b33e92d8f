//! Search engine: iterative deepening with root-level parallelism.
//!
//! Each depth searches the best-guess root move sequentially first (Young
//! Brothers Wait) to establish a real alpha bound, then dispatches the
//! remaining root moves to the worker pool. Brothers probe with a zero-width
//! scout window against the shared alpha and only re-search on a fail-high.
//! Every root move owns a private transposition table for the whole engine
//! call, so the hot path never synchronizes on shared search state.

mod move_order;
mod negamax;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use parking_lot::Mutex;

use crate::board::masks::{CORNER_MASK, EDGE_MASK};
use crate::board::{squares_of, Color, GameBoard};
use crate::eval::Evaluator;
use crate::pool::WorkerPool;
use crate::sync::SharedAlpha;
use crate::tt::TranspositionTable;

use negamax::SearchContext;

/// Window bound comfortably above every reachable score.
pub(crate) const INF: i32 = 1 << 20;

/// Diagnostic counters, updated with relaxed atomics so they never perturb
/// the search itself.
#[derive(Debug, Default)]
pub struct SearchStats {
    nodes_searched: AtomicU64,
    cache_hits: AtomicU64,
}

impl SearchStats {
    /// Negamax calls that got past the transposition-table gate.
    #[must_use]
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched.load(Ordering::Relaxed)
    }

    /// Searches answered from the transposition table.
    #[must_use]
    pub fn cache_hits(&self) -> u64 {
        self.cache_hits.load(Ordering::Relaxed)
    }

    fn reset(&self) {
        self.nodes_searched.store(0, Ordering::Relaxed);
        self.cache_hits.store(0, Ordering::Relaxed);
    }

    pub(crate) fn count_node(&self) {
        self.nodes_searched.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn count_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }
}

/// Snapshot reported after each completed iterative-deepening depth.
#[derive(Debug, Clone)]
pub struct SearchInfo {
    pub depth: u8,
    pub best_move: i8,
    pub score: i32,
    pub nodes: u64,
    pub tt_hits: u64,
    pub elapsed_ms: u64,
}

/// Callback invoked once per completed depth.
pub type SearchInfoCallback = Arc<dyn Fn(&SearchInfo) + Send + Sync>;

/// A root move and the transposition table it owns across depths.
struct RootMove {
    pos: i8,
    tt: Arc<Mutex<TranspositionTable>>,
}

/// The Othello search engine.
///
/// Owns a worker pool and an evaluator; one engine serves any number of
/// consecutive `find_best_move` calls. Transposition tables never outlive a
/// single call.
pub struct Engine {
    evaluator: Arc<dyn Evaluator>,
    pool: WorkerPool,
    stats: Arc<SearchStats>,
    info_callback: Option<SearchInfoCallback>,
}

impl Engine {
    /// Engine over `evaluator`, parallelized on `pool`.
    #[must_use]
    pub fn new(evaluator: Arc<dyn Evaluator>, pool: WorkerPool) -> Engine {
        Engine {
            evaluator,
            pool,
            stats: Arc::new(SearchStats::default()),
            info_callback: None,
        }
    }

    /// Report each completed depth through `callback`.
    #[must_use]
    pub fn with_info_callback(mut self, callback: SearchInfoCallback) -> Engine {
        self.info_callback = Some(callback);
        self
    }

    /// Counters from the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Pick the best square for `side`, searching up to `max_depth` plies
    /// within roughly `time_limit_ms` milliseconds.
    ///
    /// Returns the chosen square in `0..64`, or -1 when `side` has no legal
    /// move. The deadline is checked between depths: a depth that is already
    /// running completes, and the best move of the last fully completed
    /// depth is returned. `board.hash` must be consistent with its
    /// bitboards and turn.
    #[must_use]
    pub fn find_best_move(
        &self,
        board: &GameBoard,
        max_depth: u8,
        side: Color,
        time_limit_ms: u32,
    ) -> i32 {
        let root_bb = board.possible_moves(side);
        if root_bb == 0 {
            return -1;
        }

        self.stats.reset();
        let start = Instant::now();

        // One private table per root move, reused across depths.
        let mut roots: Vec<RootMove> = squares_of(root_bb)
            .map(|pos| RootMove {
                pos: pos as i8,
                tt: Arc::new(Mutex::new(TranspositionTable::new())),
            })
            .collect();

        let mut best = (-INF, -1i8);

        for depth in 1..=max_depth {
            if start.elapsed().as_millis() >= u128::from(time_limit_ms) {
                break;
            }

            order_roots(&mut roots, board.hash);
            best = self.search_depth(board, &roots, depth, side);

            if let Some(callback) = &self.info_callback {
                callback(&SearchInfo {
                    depth,
                    best_move: best.1,
                    score: best.0,
                    nodes: self.stats.nodes_searched(),
                    tt_hits: self.stats.cache_hits(),
                    elapsed_ms: start.elapsed().as_millis() as u64,
                });
            }
        }

        i32::from(best.1)
    }

    /// Run one full depth: YBW seed, then parallel brothers.
    fn search_depth(
        &self,
        board: &GameBoard,
        roots: &[RootMove],
        depth: u8,
        side: Color,
    ) -> (i32, i8) {
        let alpha = SharedAlpha::new(-INF);
        let beta = INF;
        let opponent = side.opponent();

        // Eldest brother first, sequentially, with a full window: its score
        // seeds alpha so the brothers scout against a meaningful bound.
        let seed = &roots[0];
        let seed_score = {
            let child = board.apply_move(seed.pos as u8, side);
            let mut tt = seed.tt.lock();
            let (score, _) =
                self.context()
                    .negamax(&child, &mut tt, depth - 1, -beta, -alpha.load(), opponent);
            -score
        };
        alpha.raise(seed_score);
        let mut depth_best = (seed_score, seed.pos);

        let handles: Vec<_> = roots[1..]
            .iter()
            .map(|root| {
                let mv = root.pos;
                let child = board.apply_move(mv as u8, side);
                let tt = Arc::clone(&root.tt);
                let alpha = alpha.clone();
                let ctx = self.context();
                self.pool
                    .submit(move || {
                        let mut tt = tt.lock();
                        let a = alpha.load();

                        let (score, _) =
                            ctx.negamax(&child, &mut tt, depth - 1, -a - 1, -a, opponent);
                        let probe = -score;

                        let score = if probe > a {
                            let (score, _) =
                                ctx.negamax(&child, &mut tt, depth - 1, -INF, -a, opponent);
                            -score
                        } else {
                            probe
                        };

                        alpha.raise(score);
                        (score, mv)
                    })
                    .expect("failed to submit search task")
            })
            .collect();

        // Fold in dispatch order with strict improvement: ties resolve to
        // the seed or the earliest brother, independent of pool scheduling.
        for handle in handles {
            let (score, mv) = handle.wait();
            if score > depth_best.0 {
                depth_best = (score, mv);
            }
        }
        depth_best
    }

    fn context(&self) -> SearchContext {
        SearchContext {
            evaluator: Arc::clone(&self.evaluator),
            stats: Arc::clone(&self.stats),
        }
    }
}

/// Order root moves in place: corners, edges, interior, ascending square
/// within each class, then promote the first table's remembered best move.
fn order_roots(roots: &mut [RootMove], root_hash: u64) {
    let class = |pos: i8| -> u8 {
        let bit = 1u64 << pos;
        if bit & CORNER_MASK != 0 {
            0
        } else if bit & EDGE_MASK != 0 {
            1
        } else {
            2
        }
    };
    roots.sort_unstable_by_key(|root| (class(root.pos), root.pos));

    let hint = roots[0].tt.lock().probe(root_hash).map(|e| e.best_move);
    if let Some(best_move) = hint {
        if let Some(idx) = roots.iter().position(|r| r.pos == best_move) {
            roots.swap(0, idx);
        }
    }
}
