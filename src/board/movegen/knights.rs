use once_cell::sync::Lazy;

use super::super::{MoveFlags, Square, Target};
use super::{mask_squares, TargetList};

/// Knight destinations from each square, as square masks.
pub(crate) static KNIGHT_STEPS: Lazy<[u64; 64]> = Lazy::new(|| {
    let mut steps = [0u64; 64];
    let deltas = [
        (2, 1),
        (1, 2),
        (-1, 2),
        (-2, 1),
        (-2, -1),
        (-1, -2),
        (1, -2),
        (2, -1),
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

pub(super) fn knight_vision(from: Square, targets: &mut TargetList) {
    for to in mask_squares(KNIGHT_STEPS[from.index()]) {
        targets.push(Target::new(to, MoveFlags::QUIET | MoveFlags::CAPTURE));
    }
}
