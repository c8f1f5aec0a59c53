use once_cell::sync::Lazy;

use super::super::{Board, Color, MoveFlags, Piece, PieceCode, Segment, Square, Target};
use super::{mask_squares, TargetList};

/// Adjacent squares of each square, as square masks.
pub(crate) static KING_STEPS: Lazy<[u64; 64]> = Lazy::new(|| {
    let mut steps = [0u64; 64];
    let deltas = [
        (1, 0),
        (-1, 0),
        (0, 1),
        (0, -1),
        (1, 1),
        (1, -1),
        (-1, 1),
        (-1, -1),
    ];
    for (idx, slot) in steps.iter_mut().enumerate() {
        let from = Square::from_index(idx);
        *slot = deltas
            .iter()
            .filter_map(|&(dr, dc)| from.offset(dr, dc))
            .fold(0, |mask, to| mask | 1u64 << to.index());
    }
    steps
});

const KING_HOME_COL: usize = 4;

pub(super) fn king_vision(from: Square, targets: &mut TargetList) {
    for to in mask_squares(KING_STEPS[from.index()]) {
        targets.push(Target::new(to, MoveFlags::QUIET | MoveFlags::CAPTURE));
    }
}

impl Board {
    /// Castling candidates. Only occupancy and has-moved marks are
    /// checked here; attacked squares are rejected by the legality filter.
    pub(super) fn castle_vision(
        &self,
        from: Square,
        king: PieceCode,
        color: Color,
        targets: &mut TargetList,
    ) {
        let row = color.back_row();
        if king.has_moved() || from != Square(row, KING_HOME_COL) {
            return;
        }

        // (kingside, rook corner, squares between, king to, rook to)
        let sides: [(bool, usize, &[usize], usize, usize); 2] =
            [(true, 7, &[5, 6], 6, 5), (false, 0, &[1, 2, 3], 2, 3)];

        for (kingside, corner, between, king_to, rook_to) in sides {
            let rook = self.piece_at(Square(row, corner));
            if !rook.is(color, Piece::Rook) || rook.has_moved() {
                continue;
            }
            if between
                .iter()
                .any(|&col| !self.piece_at(Square(row, col)).is_empty())
            {
                continue;
            }
            targets.push(Target::castle(
                Square(row, king_to),
                Segment::new(Square(row, corner), Square(row, rook_to)),
                kingside,
            ));
        }
    }
}
