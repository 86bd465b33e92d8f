//! Principal-variation negamax with alpha-beta pruning.

use std::sync::Arc;

use crate::board::{Color, GameBoard};
use crate::eval::Evaluator;
use crate::tt::{BoundType, TTEntry, TranspositionTable};

use super::move_order::order_moves;
use super::{SearchStats, INF};

/// Everything a recursive search needs besides its transposition table.
///
/// Cheap to clone into a worker task: two `Arc`s.
#[derive(Clone)]
pub(crate) struct SearchContext {
    pub evaluator: Arc<dyn Evaluator>,
    pub stats: Arc<SearchStats>,
}

impl SearchContext {
    /// Search `board` to `depth` plies with window `(alpha, beta)` for
    /// `side`, returning `(score, best_move)` from the mover's perspective.
    /// `best_move` is -1 at leaves, terminals and passes.
    pub(crate) fn negamax(
        &self,
        board: &GameBoard,
        tt: &mut TranspositionTable,
        depth: u8,
        mut alpha: i32,
        beta: i32,
        side: Color,
    ) -> (i32, i8) {
        let alpha_orig = alpha;

        if let Some(entry) = tt.probe(board.hash) {
            if entry.depth >= depth {
                let usable = match entry.bound {
                    BoundType::Exact => true,
                    BoundType::Lower => entry.score >= beta,
                    BoundType::Upper => entry.score <= alpha,
                };
                if usable {
                    self.stats.count_cache_hit();
                    return (entry.score, entry.best_move);
                }
            }
        }
        self.stats.count_node();

        if depth == 0 {
            return (side.sign() * self.evaluator.evaluate(board), -1);
        }

        let moves_bb = board.possible_moves(side);
        if moves_bb == 0 {
            if board.possible_moves(side.opponent()) == 0 {
                // Game over: score by disc margin, scaled past any
                // heuristic evaluation.
                let (black, white) = board.count_discs();
                let margin = black as i32 - white as i32;
                return (100 * side.sign() * margin, -1);
            }
            // Forced pass: same position, other side, one ply shallower.
            let (score, _) =
                self.negamax(board, tt, depth - 1, -beta, -alpha, side.opponent());
            return (-score, -1);
        }

        let moves = order_moves(moves_bb, tt, board.hash);
        let mut best = (-INF, moves[0]);

        for (i, &mv) in moves.iter().enumerate() {
            let child = board.apply_move(mv as u8, side);
            let opponent = side.opponent();

            let score = if i == 0 {
                let (s, _) = self.negamax(&child, tt, depth - 1, -beta, -alpha, opponent);
                -s
            } else {
                // Scout with a zero-width window; only a fail-high earns a
                // full re-search.
                let (s, _) =
                    self.negamax(&child, tt, depth - 1, -alpha - 1, -alpha, opponent);
                let probe = -s;
                if probe > alpha {
                    let (s, _) = self.negamax(&child, tt, depth - 1, -beta, -alpha, opponent);
                    -s
                } else {
                    probe
                }
            };

            if score > best.0 {
                best = (score, mv);
            }
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }

        let bound = if best.0 <= alpha_orig {
            BoundType::Upper
        } else if best.0 >= beta {
            BoundType::Lower
        } else {
            BoundType::Exact
        };
        tt.store(
            board.hash,
            TTEntry {
                score: best.0,
                depth,
                bound,
                best_move: best.1,
            },
        );

        best
    }
}
