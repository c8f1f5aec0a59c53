use super::super::{Board, MoveFlags, Square, Target};
use super::TargetList;

pub(crate) const STRAIGHTS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub(crate) const DIAGONALS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

impl Board {
    /// Ray-cast along each direction. The first occupied square is
    /// included whatever its color, then the ray stops.
    pub(crate) fn slider_vision(
        &self,
        from: Square,
        directions: &[(isize, isize)],
        targets: &mut TargetList,
    ) {
        for &(dr, dc) in directions {
            let mut current = from;
            while let Some(next) = current.offset(dr, dc) {
                targets.push(Target::new(next, MoveFlags::QUIET | MoveFlags::CAPTURE));
                if !self.piece_at(next).is_empty() {
                    break;
                }
                current = next;
            }
        }
    }

    /// First occupied square along a ray, if any.
    pub(crate) fn first_blocker(&self, from: Square, (dr, dc): (isize, isize)) -> Option<Square> {
        let mut current = from;
        while let Some(next) = current.offset(dr, dc) {
            if !self.piece_at(next).is_empty() {
                return Some(next);
            }
            current = next;
        }
        None
    }
}
