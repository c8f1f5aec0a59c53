use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::KeyError;
use super::{Color, Move, Piece, PieceCode, PositionKey, Square};
use crate::memo::{BoardMemo, MemoStats};

/// Most squares a single move can touch (castling: king and rook, from and to).
const MAX_SAVED: usize = 4;

/// Undo record for one applied move.
///
/// Holds the move with its final flags and the prior contents of every
/// square the move touched, in the order they were first touched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HistoryEntry {
    pub(crate) mv: Move,
    pub(crate) saved: [(Square, PieceCode); MAX_SAVED],
    pub(crate) len: usize,
}

impl HistoryEntry {
    pub(crate) fn new(mv: Move) -> Self {
        HistoryEntry {
            mv,
            saved: [(Square(0, 0), PieceCode::EMPTY); MAX_SAVED],
            len: 0,
        }
    }

    /// Remember a square's prior contents, once per square.
    pub(crate) fn save(&mut self, sq: Square, code: PieceCode) {
        if self.saved().iter().any(|(s, _)| *s == sq) {
            return;
        }
        debug_assert!(self.len < MAX_SAVED, "move touches too many squares");
        if self.len < MAX_SAVED {
            self.saved[self.len] = (sq, code);
            self.len += 1;
        }
    }

    #[must_use]
    pub fn mv(&self) -> Move {
        self.mv
    }

    /// Prior contents of the touched squares.
    #[must_use]
    pub fn saved(&self) -> &[(Square, PieceCode)] {
        &self.saved[..self.len]
    }

    /// The piece that made the move (the king, for castling), as it stood
    /// before moving.
    #[must_use]
    pub fn moved_piece(&self) -> PieceCode {
        self.saved()
            .iter()
            .find(|(sq, _)| *sq == self.mv.from())
            .map_or(PieceCode::EMPTY, |(_, code)| *code)
    }

    /// Contents of the destination before the move landed.
    #[must_use]
    pub fn captured(&self) -> PieceCode {
        self.saved()
            .iter()
            .find(|(sq, _)| *sq == self.mv.to())
            .map_or(PieceCode::EMPTY, |(_, code)| *code)
    }
}

/// Outcome of the current position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

/// Mailbox board with its full move history and memo tables.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) squares: [[PieceCode; 8]; 8],
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) start_ply: u32,
    pub(crate) memo: BoardMemo,
}

impl Board {
    /// Standard initial layout, white to move.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (col, piece) in back_rank.iter().enumerate() {
            board.squares[0][col] = PieceCode::new(Color::Black, *piece);
            board.squares[1][col] = PieceCode::new(Color::Black, Piece::Pawn);
            board.squares[6][col] = PieceCode::new(Color::White, Piece::Pawn);
            board.squares[7][col] = PieceCode::new(Color::White, *piece);
        }
        board
    }

    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [[PieceCode::EMPTY; 8]; 8],
            history: Vec::new(),
            start_ply: 0,
            memo: BoardMemo::default(),
        }
    }

    /// Rebuild a board from its key. History starts empty.
    pub fn from_key(key: &PositionKey) -> Result<Self, KeyError> {
        let mut board = Board::empty();
        board.squares = key.to_grid()?;
        Ok(board)
    }

    /// Replace the memo tables with ones of the given sizes (0 disables).
    #[must_use]
    pub fn with_memo_capacity(mut self, eval_slots: usize, legal_slots: usize) -> Self {
        self.set_memo_capacity(eval_slots, legal_slots);
        self
    }

    /// Resize the memo tables in place, dropping their contents.
    pub fn set_memo_capacity(&mut self, eval_slots: usize, legal_slots: usize) {
        self.memo = BoardMemo::new(eval_slots, legal_slots);
    }

    pub fn clear_memo(&mut self) {
        self.memo.clear();
    }

    #[must_use]
    pub fn eval_memo_stats(&self) -> MemoStats {
        self.memo.eval.stats()
    }

    #[must_use]
    pub fn legal_memo_stats(&self) -> MemoStats {
        self.memo.legal.stats()
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> PieceCode {
        self.squares[sq.row()][sq.col()]
    }

    #[inline]
    pub(crate) fn set(&mut self, sq: Square, code: PieceCode) {
        self.squares[sq.row()][sq.col()] = code;
    }

    /// The 8x8 grid, row 0 = rank 8.
    #[must_use]
    pub fn grid(&self) -> &[[PieceCode; 8]; 8] {
        &self.squares
    }

    #[must_use]
    pub fn hash(&self) -> PositionKey {
        PositionKey::from_grid(&self.squares)
    }

    /// Total half-moves played, counting any offset the position started with.
    #[must_use]
    pub fn ply(&self) -> u32 {
        self.start_ply + self.history.len() as u32
    }

    #[must_use]
    pub fn turn(&self) -> Color {
        if self.ply() % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(HistoryEntry::mv)
    }

    /// Squares holding pieces of `color`, in index order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, PieceCode)> + '_ {
        Square::all()
            .map(move |sq| (sq, self.piece_at(sq)))
            .filter(move |(_, code)| code.is_color(color))
    }

    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.piece_at(sq).is(color, Piece::King))
    }

    /// Sum of conventional piece values for `color`.
    #[must_use]
    pub fn material_points(&self, color: Color) -> u32 {
        self.pieces(color)
            .filter_map(|(_, code)| code.piece())
            .map(Piece::points)
            .sum()
    }

    /// Check, mate or stalemate for the side to move.
    pub fn status(&mut self) -> GameStatus {
        let side = self.turn();
        let in_check = self.in_check(side);
        let has_moves = !self.legal_moves(side).is_empty();
        match (in_check, has_moves) {
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            (false, true) => GameStatus::Ongoing,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// Boards compare by position and history; memo contents are ignored.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.squares == other.squares
            && self.start_ply == other.start_ply
            && self.history == other.history
    }
}

impl Eq for Board {}

/// ASCII diagram of a grid, rank 8 first, uppercase for White.
pub struct GridDiagram<'a>(pub &'a [[PieceCode; 8]; 8]);

impl fmt::Display for GridDiagram<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, line) in self.0.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for code in line {
                write!(f, " {}", code.to_char())?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", GridDiagram(&self.squares))?;
        write!(f, "{} to move", self.turn())
    }
}
