//! Property-based tests over random legal playouts.

use proptest::prelude::*;

use crate::board::{squares_of, Color, GameBoard};
use crate::zobrist::zobrist_hash;

/// Strategy for a playout length in plies.
fn ply_count_strategy() -> impl Strategy<Value = usize> {
    1..=60usize
}

/// Strategy for the seed driving move selection.
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play `plies` random legal moves from the start, calling `check` after
/// every application. Stops early when the game ends.
fn random_playout(seed: u64, plies: usize, mut check: impl FnMut(&GameBoard, &GameBoard, u8)) {
    use rand::prelude::*;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = GameBoard::initial();

    for _ in 0..plies {
        let side = board.turn;
        let moves: Vec<u8> = squares_of(board.possible_moves(side)).collect();
        if moves.is_empty() {
            break;
        }
        let pos = moves[rng.gen_range(0..moves.len())];
        let next = board.apply_move(pos, side);
        check(&board, &next, pos);
        board = next;
    }
}

proptest! {
    /// Every applied move grows the board by exactly one disc, flips at
    /// least one, and keeps the bitboards disjoint.
    #[test]
    fn prop_moves_conserve_discs(seed in seed_strategy(), plies in ply_count_strategy()) {
        random_playout(seed, plies, |before, after, pos| {
            let before_total = before.black.count_ones() + before.white.count_ones();
            let after_total = after.black.count_ones() + after.white.count_ones();
            assert_eq!(after_total, before_total + 1, "move {pos}");
            assert_eq!(after.black & after.white, 0);
            let own_before = before.discs(before.turn).count_ones();
            let own_after = after.discs(before.turn).count_ones();
            assert!(own_after >= own_before + 2, "move {pos} flipped nothing");
        });
    }

    /// The incrementally maintained hash always equals a from-scratch hash.
    #[test]
    fn prop_incremental_hash_matches_full(seed in seed_strategy(), plies in ply_count_strategy()) {
        random_playout(seed, plies, |_, after, pos| {
            let recomputed = zobrist_hash(after.black, after.white, after.turn);
            assert_eq!(after.hash, recomputed, "after move {pos}");
        });
    }

    /// Legal moves always land on empty squares, and each claims to be valid.
    #[test]
    fn prop_legal_moves_are_empty_and_valid(seed in seed_strategy(), plies in ply_count_strategy()) {
        random_playout(seed, plies, |before, _, _| {
            for side in [Color::Black, Color::White] {
                let moves = before.possible_moves(side);
                assert_eq!(moves & (before.black | before.white), 0);
                for pos in squares_of(moves) {
                    assert!(before.is_valid_move(pos, side));
                }
            }
        });
    }
}
