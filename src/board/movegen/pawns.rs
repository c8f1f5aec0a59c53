use super::super::{Board, Color, MoveFlags, Square, Target};
use super::TargetList;

impl Board {
    /// Forward steps are quiet-only, forward diagonals capture-only.
    pub(super) fn pawn_vision(&self, from: Square, color: Color, targets: &mut TargetList) {
        let dir = color.pawn_direction();

        if let Some(one) = from.offset(dir, 0) {
            targets.push(Target::new(one, MoveFlags::QUIET));
            if from.row() == color.pawn_start_row() && self.piece_at(one).is_empty() {
                if let Some(two) = one.offset(dir, 0) {
                    targets.push(Target::new(two, MoveFlags::QUIET));
                }
            }
        }

        for dc in [-1, 1] {
            if let Some(diag) = from.offset(dir, dc) {
                targets.push(Target::new(diag, MoveFlags::CAPTURE));
            }
        }
    }
}
