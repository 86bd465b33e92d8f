//! Othello (Reversi) engine library.
//!
//! Provides a complete Othello playing engine with:
//! - Bitboard-based board representation and move generation
//! - Incremental Zobrist hashing
//! - Iterative-deepening principal-variation search with alpha-beta pruning
//! - Per-root-move transposition tables with bound-typed entries
//! - Root-level parallelism on a fixed worker pool (Young Brothers Wait)
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use othello_engine::board::{Color, GameBoard};
//! use othello_engine::eval::MobilityEvaluator;
//! use othello_engine::pool::WorkerPool;
//! use othello_engine::search::Engine;
//!
//! let board = GameBoard::initial();
//! let engine = Engine::new(Arc::new(MobilityEvaluator), WorkerPool::new(4));
//!
//! // Search 6 plies deep within half a second.
//! let best = engine.find_best_move(&board, 6, Color::Black, 500);
//! assert!(board.is_valid_move(best as u8, Color::Black));
//! ```
//!
//! # Playing Moves
//!
//! ```
//! use othello_engine::board::{Color, GameBoard};
//!
//! let board = GameBoard::initial();
//! let moves = board.possible_moves(Color::Black);
//! assert_eq!(moves.count_ones(), 4);
//!
//! let next = board.apply_move(44, Color::Black);
//! assert_eq!(next.count_discs(), (4, 1));
//! assert_eq!(next.turn, Color::White);
//! ```
//!
//! # Features
//!
//! - `serde` - Enable serialization for `Color` and `GameBoard`

// Enable pedantic lints with sensible domain-specific exceptions
#![warn(clippy::pedantic)]
// Bitboard hex literals are clearer without separators (bit patterns visible)
#![allow(clippy::unreadable_literal)]
// Square-index casts are ubiquitous and bounded by the 8x8 board
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Module-level documentation is sufficient for this codebase
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod board;
pub mod eval;
pub mod pool;
pub mod search;
pub mod sync;
pub mod tt;
pub mod zobrist;
