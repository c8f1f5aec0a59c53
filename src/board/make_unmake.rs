use super::error::MoveError;
use super::state::HistoryEntry;
use super::{Board, Color, Move, MoveFlags, Piece, PieceCode};

/// Piece that actually lands on the destination: the mover with its
/// has-moved tag, or a queen for a pawn reaching the far row.
#[inline]
fn landing_code(code: PieceCode, to_row: usize) -> PieceCode {
    for color in Color::BOTH {
        if code.is(color, Piece::Pawn) && to_row == color.promotion_row() {
            return PieceCode::new(color, Piece::Queen).with_moved();
        }
    }
    code.with_moved()
}

impl Board {
    /// Apply a move and push its undo record.
    ///
    /// Refused without touching the board if any segment names a square
    /// off the board or starts on an empty square. On success the record gains `CHECK` when the side now
    /// to move is in check.
    pub fn apply_move(&mut self, mv: &Move) -> Result<(), MoveError> {
        if let Some(square) = mv
            .segments()
            .flat_map(|seg| [seg.from, seg.to])
            .find(|sq| !sq.is_on_board())
        {
            log::warn!("refusing move touching off-board square {square}");
            return Err(MoveError::OffBoard { square });
        }
        if let Some(seg) = mv.segments().find(|seg| self.piece_at(seg.from).is_empty()) {
            log::warn!("refusing {mv}: {} is empty", seg.from);
            return Err(MoveError::EmptySource { square: seg.from });
        }
        self.push_move(*mv, true);
        Ok(())
    }

    /// Apply a move known to come from this position's generator.
    ///
    /// `classify` controls whether the check test runs afterwards; search
    /// descent and legality filtering skip it.
    pub(crate) fn push_move(&mut self, mv: Move, classify: bool) {
        let mut entry = HistoryEntry::new(mv);
        for seg in mv.segments() {
            let mover = self.piece_at(seg.from);
            debug_assert!(!mover.is_empty(), "move {mv} from empty {}", seg.from);
            entry.save(seg.from, mover);
            entry.save(seg.to, self.piece_at(seg.to));
            self.set(seg.to, landing_code(mover, seg.to.row()));
            self.set(seg.from, PieceCode::EMPTY);
        }
        self.history.push(entry);

        if classify {
            let side = self.turn();
            if self.in_check(side) {
                if let Some(last) = self.history.last_mut() {
                    last.mv.add_flags(MoveFlags::CHECK);
                }
            }
        }
    }

    /// Pop the last record and restore every square it saved.
    ///
    /// Returns the undone move, or `None` when there is nothing to undo.
    pub fn undo_move(&mut self) -> Option<Move> {
        let entry = self.history.pop()?;
        for &(sq, code) in entry.saved().iter().rev() {
            self.set(sq, code);
        }
        Some(entry.mv)
    }
}
