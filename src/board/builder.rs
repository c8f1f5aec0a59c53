//! Fluent builder for constructing fixture positions.
//!
//! # Example
//! ```
//! use minimax_chess::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(7, 4), Color::White, Piece::King)
//!     .piece(Square(0, 4), Color::Black, Piece::King)
//!     .moved_piece(Square(1, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::Black)
//!     .build();
//! assert_eq!(board.turn(), Color::Black);
//! ```

use super::{Board, Color, Piece, PieceCode, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, PieceCode)>,
    side_to_move: Color,
    eval_slots: Option<usize>,
    legal_slots: Option<usize>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            eval_slots: None,
            legal_slots: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::new();
        let mut builder = Self::new();
        for color in Color::BOTH {
            builder.pieces.extend(board.pieces(color));
        }
        builder
    }

    fn place(mut self, square: Square, code: PieceCode) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, code));
        self
    }

    /// Place an unmoved piece.
    #[must_use]
    pub fn piece(self, square: Square, color: Color, piece: Piece) -> Self {
        self.place(square, PieceCode::new(color, piece))
    }

    /// Place a piece that has already moved.
    #[must_use]
    pub fn moved_piece(self, square: Square, color: Color, piece: Piece) -> Self {
        self.place(square, PieceCode::new(color, piece).with_moved())
    }

    /// Mark whatever stands on `square` as having moved.
    #[must_use]
    pub fn moved(mut self, square: Square) -> Self {
        for (sq, code) in &mut self.pieces {
            if *sq == square {
                *code = code.with_moved();
            }
        }
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Set the side to move. Black to move starts the ply count at 1.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Size the memo tables of the built board.
    #[must_use]
    pub const fn memo_capacity(mut self, eval_slots: usize, legal_slots: usize) -> Self {
        self.eval_slots = Some(eval_slots);
        self.legal_slots = Some(legal_slots);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        if let (Some(eval), Some(legal)) = (self.eval_slots, self.legal_slots) {
            board = board.with_memo_capacity(eval, legal);
        }
        for (sq, code) in self.pieces {
            board.set(sq, code);
        }
        board.start_ply = match self.side_to_move {
            Color::White => 0,
            Color::Black => 1,
        };
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position_matches_new() {
        assert_eq!(BoardBuilder::starting_position().build(), Board::new());
    }

    #[test]
    fn test_replace_and_clear() {
        let board = BoardBuilder::new()
            .piece(Square(4, 4), Color::White, Piece::Knight)
            .piece(Square(4, 4), Color::Black, Piece::Rook)
            .piece(Square(0, 0), Color::White, Piece::Pawn)
            .clear(Square(0, 0))
            .moved(Square(4, 4))
            .build();
        let code = board.piece_at(Square(4, 4));
        assert!(code.is(Color::Black, Piece::Rook));
        assert!(code.has_moved());
        assert!(board.piece_at(Square(0, 0)).is_empty());
    }

    #[test]
    fn test_black_to_move() {
        let board = BoardBuilder::new().side_to_move(Color::Black).build();
        assert_eq!(board.turn(), Color::Black);
        assert_eq!(board.ply(), 1);
    }
}
