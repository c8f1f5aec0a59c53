use super::movegen::{mask_squares, DIAGONALS, KING_STEPS, KNIGHT_STEPS, STRAIGHTS};
use super::{Board, Color, Piece, Square};

impl Board {
    /// Whether `color`'s king is attacked. A side with no king counts as
    /// in check.
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king) => self.is_attacked_by(king, color.opponent()),
            None => true,
        }
    }

    /// Whether any piece of `attacker` strikes `target`, scanning outward
    /// from the target square.
    #[must_use]
    pub fn is_attacked_by(&self, target: Square, attacker: Color) -> bool {
        let rays = [
            (&STRAIGHTS, Piece::Rook),
            (&DIAGONALS, Piece::Bishop),
        ];
        for (directions, slider) in rays {
            for &dir in directions {
                if let Some(sq) = self.first_blocker(target, dir) {
                    let code = self.piece_at(sq);
                    if code.is(attacker, slider) || code.is(attacker, Piece::Queen) {
                        return true;
                    }
                }
            }
        }

        // enemy pawns strike from the squares diagonally in front of the target
        let toward = attacker.opponent().pawn_direction();
        for dc in [-1, 1] {
            if let Some(sq) = target.offset(toward, dc) {
                if self.piece_at(sq).is(attacker, Piece::Pawn) {
                    return true;
                }
            }
        }

        if mask_squares(KNIGHT_STEPS[target.index()])
            .any(|sq| self.piece_at(sq).is(attacker, Piece::Knight))
        {
            return true;
        }

        mask_squares(KING_STEPS[target.index()]).any(|sq| self.piece_at(sq).is(attacker, Piece::King))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardBuilder;

    fn kings() -> BoardBuilder {
        BoardBuilder::new()
            .piece(Square(7, 4), Color::White, Piece::King)
            .piece(Square(0, 0), Color::Black, Piece::King)
    }

    #[test]
    fn test_missing_king_is_check() {
        let board = BoardBuilder::new()
            .piece(Square(7, 4), Color::White, Piece::King)
            .build();
        assert!(board.in_check(Color::Black));
        assert!(!board.in_check(Color::White));
    }

    #[test]
    fn test_pawn_attack_direction() {
        // black pawn on d2 hits e1
        let board = kings().piece(Square(6, 3), Color::Black, Piece::Pawn).build();
        assert!(board.in_check(Color::White));
        // black pawn on d1 does not
        let board = kings().piece(Square(7, 3), Color::Black, Piece::Pawn).build();
        assert!(!board.in_check(Color::White));
        // white pawn on d2 never attacks its own king
        let board = kings().piece(Square(6, 3), Color::White, Piece::Pawn).build();
        assert!(!board.in_check(Color::White));
    }

    #[test]
    fn test_blocked_slider() {
        let board = kings()
            .piece(Square(0, 4), Color::Black, Piece::Rook)
            .piece(Square(4, 4), Color::White, Piece::Knight)
            .build();
        assert!(!board.in_check(Color::White));

        let board = kings().piece(Square(0, 4), Color::Black, Piece::Queen).build();
        assert!(board.in_check(Color::White));

        let board = kings().piece(Square(4, 1), Color::Black, Piece::Bishop).build();
        assert!(board.in_check(Color::White));
    }

    #[test]
    fn test_knight_and_king_contact() {
        let board = kings().piece(Square(5, 5), Color::Black, Piece::Knight).build();
        assert!(board.in_check(Color::White));

        let board = BoardBuilder::new()
            .piece(Square(7, 4), Color::White, Piece::King)
            .piece(Square(6, 5), Color::Black, Piece::King)
            .build();
        assert!(board.in_check(Color::White));
        assert!(board.in_check(Color::Black));
    }
}
