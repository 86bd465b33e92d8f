//! Self-playing Othello front-end.
//!
//! Drives the engine against itself from the starting position, printing
//! each board with its candidate moves until neither side can play.

use std::sync::Arc;

use othello_engine::board::display::board_to_string_with_moves;
use othello_engine::board::{Color, GameBoard};
use othello_engine::eval::MobilityEvaluator;
use othello_engine::pool::WorkerPool;
use othello_engine::search::Engine;

const SEARCH_DEPTH: u8 = 8;
const TIME_LIMIT_MS: u32 = 2_000;

fn main() {
    let engine = Engine::new(Arc::new(MobilityEvaluator), WorkerPool::with_default_size());
    let mut board = GameBoard::initial();
    let mut current = Color::Black;

    loop {
        if board.is_terminal() {
            println!("{}", board_to_string_with_moves(&board, 0));
            report_result(&board);
            break;
        }

        let moves = board.possible_moves(current);
        println!("{}", board_to_string_with_moves(&board, moves));

        let side_name = match current {
            Color::Black => "Black",
            Color::White => "White",
        };
        let chosen = engine.find_best_move(&board, SEARCH_DEPTH, current, TIME_LIMIT_MS);
        if chosen == -1 {
            println!("{side_name} has no move and passes.");
        } else {
            board = board.apply_move(chosen as u8, current);
            println!(
                "{side_name} plays {chosen} ({} nodes, {} tt hits)",
                engine.stats().nodes_searched(),
                engine.stats().cache_hits()
            );
        }
        current = current.opponent();
    }
}

fn report_result(board: &GameBoard) {
    let (black, white) = board.count_discs();
    println!("Game over! Black {black} - White {white}");
    if black > white {
        println!("Black wins!");
    } else if white > black {
        println!("White wins!");
    } else {
        println!("It's a draw!");
    }
}
