//! Minimax chess engine: board model, legal moves, evaluation, search and
//! a channel-driven worker for interactive front ends.

pub mod board;
pub mod engine;
pub mod logger;
pub mod memo;

pub use board::{Board, Color, Move, Piece, Square};
pub use engine::{Engine, EngineConfig, EngineHandle, EngineWorker, Request, Response};
pub use memo::{MemoKey, MemoStats, MemoTable};
