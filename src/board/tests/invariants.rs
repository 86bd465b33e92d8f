//! Universal properties of move generation, application, and hashing.

use crate::board::{squares_of, Color, GameBoard};
use crate::zobrist::zobrist_hash;

#[test]
fn possible_moves_target_only_empty_squares() {
    let board = GameBoard::initial();
    for side in [Color::Black, Color::White] {
        let moves = board.possible_moves(side);
        assert_eq!(moves & (board.black | board.white), 0);
    }
}

#[test]
fn every_move_grows_the_board_by_one_disc() {
    let board = GameBoard::initial();
    for pos in squares_of(board.possible_moves(Color::Black)) {
        let next = board.apply_move(pos, Color::Black);
        let before = board.black.count_ones() + board.white.count_ones();
        let after = next.black.count_ones() + next.white.count_ones();
        assert_eq!(after, before + 1, "move {pos}");
        assert_eq!(next.black & next.white, 0, "move {pos}");
    }
}

#[test]
fn every_move_flips_at_least_one_disc() {
    let board = GameBoard::initial();
    for pos in squares_of(board.possible_moves(Color::Black)) {
        let next = board.apply_move(pos, Color::Black);
        // Own discs grow by the played square plus at least one flip.
        assert!(next.black.count_ones() >= board.black.count_ones() + 2);
        assert!(next.white.count_ones() < board.white.count_ones());
    }
}

#[test]
fn incremental_hash_matches_full_hash_after_each_move() {
    let board = GameBoard::initial();
    assert_eq!(board.hash, zobrist_hash(board.black, board.white, board.turn));

    let mut current = board;
    // A short fixed line keeps the assertion readable move by move.
    for (pos, side) in [(44u8, Color::Black), (29, Color::White), (20, Color::Black)] {
        assert!(current.is_valid_move(pos, side));
        current = current.apply_move(pos, side);
        assert_eq!(
            current.hash,
            zobrist_hash(current.black, current.white, current.turn),
            "after {side:?} plays {pos}"
        );
    }
}

#[test]
fn turn_passes_to_an_opponent_with_a_reply() {
    let opening = GameBoard::initial().apply_move(44, Color::Black);
    assert_eq!(opening.turn, Color::White);
}

#[test]
fn turn_stays_with_the_mover_on_a_forced_pass() {
    // White's discs on 15 and 33 sit on lines Black has walled off to the
    // board edge, so White never gets a reply; Black keeps a second
    // bracket (playing 7 against the disc on 15) after capturing on 32.
    let black: u64 = [23u8, 31, 39, 47, 55, 63, 34, 35, 36, 37, 38]
        .iter()
        .fold(0, |acc, p| acc | (1u64 << p));
    let white: u64 = (1 << 15) | (1 << 33);
    let board = GameBoard::from_bitboards(black, white, Color::Black);

    assert!(board.is_valid_move(32, Color::Black));
    assert_eq!(board.possible_moves(Color::White), 0);

    let next = board.apply_move(32, Color::Black);
    assert_eq!(next.white, 1 << 15, "the disc on 33 flipped");
    assert_eq!(next.turn, Color::Black, "White must pass");
    assert!(next.is_valid_move(7, Color::Black));
}

#[test]
fn wiping_out_the_opponent_hands_the_turn_over() {
    // Black on 0, White on 1: Black plays 2, flips the last white disc,
    // and the game is over with the turn left on the opponent.
    let board = GameBoard::from_bitboards(1 << 0, 1 << 1, Color::Black);
    let next = board.apply_move(2, Color::Black);
    assert_eq!(next.white, 0);
    assert_eq!(next.turn, Color::White);
    assert!(next.is_terminal());
}
