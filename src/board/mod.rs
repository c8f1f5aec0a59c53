//! Chess board representation and game logic.
//!
//! An 8x8 mailbox of packed piece codes with a reversible move stack.
//! Covers legal move generation with castling and auto-queening
//! promotion (no en passant), static evaluation and minimax search.
//!
//! # Example
//! ```
//! use minimax_chess::board::{Board, Color};
//!
//! let mut board = Board::new();
//! let moves = board.legal_moves(Color::White);
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod builder;
mod check;
mod error;
mod eval;
mod key;
mod legal;
mod make_unmake;
mod movegen;
mod notation;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{KeyError, MoveError, NotationError, SquareError};
pub use eval::EvalTerms;
pub use key::PositionKey;
pub use search::{
    order_value, SearchConfig, SearchResult, DEFAULT_BRANCH, MATE_SCORE, MAX_DEPTH, MIN_DEPTH,
};
pub use state::{Board, GameStatus, GridDiagram, HistoryEntry};
pub use types::{Color, Move, MoveFlags, Piece, PieceCode, Segment, Square, Target};
