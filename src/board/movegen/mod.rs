//! Pseudo-legal piece vision.
//!
//! `Board::vision` lists every square a piece could reach or strike,
//! ignoring whether its own king would be left in check. Filtering into
//! legal moves happens in `legal.rs`.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use knights::KNIGHT_STEPS;
pub(crate) use kings::KING_STEPS;
pub(crate) use sliders::{DIAGONALS, STRAIGHTS};

use super::{Board, Piece, Square, Target};

/// Iterate the squares of a 64-bit square mask (bit = `Square::index`).
pub(crate) fn mask_squares(mut mask: u64) -> impl Iterator<Item = Square> {
    std::iter::from_fn(move || {
        if mask == 0 {
            return None;
        }
        let idx = mask.trailing_zeros() as usize;
        mask &= mask - 1;
        Some(Square::from_index(idx))
    })
}

/// Target list that never holds the same target twice.
#[derive(Default)]
pub(crate) struct TargetList(Vec<Target>);

impl TargetList {
    pub(crate) fn push(&mut self, target: Target) {
        if !self.0.contains(&target) {
            self.0.push(target);
        }
    }

    pub(crate) fn into_vec(self) -> Vec<Target> {
        self.0
    }
}

impl Board {
    /// Pseudo-legal destinations of the piece on `from`; empty for an
    /// empty square.
    #[must_use]
    pub fn vision(&self, from: Square) -> Vec<Target> {
        let code = self.piece_at(from);
        let (Some(color), Some(piece)) = (code.color(), code.piece()) else {
            return Vec::new();
        };

        let mut targets = TargetList::default();
        match piece {
            Piece::Pawn => self.pawn_vision(from, color, &mut targets),
            Piece::Knight => knights::knight_vision(from, &mut targets),
            Piece::Bishop => self.slider_vision(from, &DIAGONALS, &mut targets),
            Piece::Rook => self.slider_vision(from, &STRAIGHTS, &mut targets),
            Piece::Queen => {
                self.slider_vision(from, &STRAIGHTS, &mut targets);
                self.slider_vision(from, &DIAGONALS, &mut targets);
            }
            Piece::King => {
                kings::king_vision(from, &mut targets);
                self.castle_vision(from, code, color, &mut targets);
            }
        }
        targets.into_vec()
    }
}
