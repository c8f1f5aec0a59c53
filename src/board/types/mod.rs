//! Core chess types.
//!
//! - `Piece`, `Color` and the packed `PieceCode` stored on each square
//! - `Square` - (row, column) coordinates with row 0 at Black's back rank
//! - `Move`, `Segment`, `MoveFlags` - move records
//! - `Target` - pseudo-legal destinations produced by piece vision

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveFlags, Segment, Target};
pub use piece::{Color, Piece, PieceCode};
pub use square::Square;

pub(crate) use piece::CODE_BITS;
