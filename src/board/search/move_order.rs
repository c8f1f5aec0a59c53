//! Move ordering heuristic.

use super::super::{Board, Move, Piece, PieceCode};
use super::constants::{CHECKING_CAPTURE_SCORE, QUIET_CHECK_SCORE};

/// Piece value used for victim-minus-attacker ordering
#[inline]
pub fn order_value(piece: Piece) -> i64 {
    match piece {
        Piece::Pawn => 1,
        Piece::Knight | Piece::Bishop => 3,
        Piece::Rook => 5,
        Piece::Queen => 9,
        Piece::King => 10,
    }
}

impl Board {
    /// Ordering score for a move of the side to move: checking captures
    /// first, then quiet checks, then captures by victim minus attacker.
    ///
    /// The move is applied to read its check flag and undone again.
    pub fn move_value(&mut self, mv: &Move) -> i64 {
        let attacker = self.piece_at(mv.from());
        if attacker.is_empty() {
            return 0;
        }
        let victim = self.piece_at(mv.to());

        self.push_move(*mv, true);
        let gives_check = self.last_move().is_some_and(|m| m.gives_check());
        self.undo_move();

        match (gives_check, mv.is_capture()) {
            (true, true) => CHECKING_CAPTURE_SCORE,
            (true, false) => QUIET_CHECK_SCORE,
            (false, true) => {
                let value = |code: PieceCode| code.piece().map_or(0, order_value);
                value(victim) - value(attacker)
            }
            (false, false) => 0,
        }
    }

    /// Order moves by `move_value`, best first. Equal values keep their
    /// generation order.
    pub(crate) fn order_moves(&mut self, moves: &mut Vec<Move>) {
        let mut scored: Vec<(i64, Move)> = moves
            .iter()
            .map(|mv| (self.move_value(mv), *mv))
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        moves.clear();
        moves.extend(scored.into_iter().map(|(_, mv)| mv));
    }
}
