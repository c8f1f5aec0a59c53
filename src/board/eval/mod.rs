//! Static evaluation.
//!
//! Four hand-tuned terms, each from the point of view of one side:
//! - pawn advancement, weighted up as the game goes on
//! - agility: credit (or debit) for pieces that have left their square
//! - stacked pawns on one file, penalized cubically
//! - material, blended with placement tables early in the game

mod tables;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use self::tables::{agility_weight, base_value, table};
use super::{Board, Color, Piece, Square};
use crate::memo::MemoKey;

/// The individual evaluation terms for one perspective.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvalTerms {
    pub pawn_advance: f64,
    pub agility: f64,
    pub stacked_pawns: f64,
    pub material: f64,
}

impl EvalTerms {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.pawn_advance + self.agility + self.stacked_pawns + self.material
    }
}

impl Board {
    /// Evaluate the position from `perspective`'s side, memoized by
    /// position, ply and perspective.
    pub fn evaluate(&mut self, perspective: Color) -> f64 {
        let key = MemoKey::new(self.hash(), self.ply(), perspective);
        if let Some(score) = self.memo.eval.probe(&key) {
            return score;
        }
        let score = self.evaluate_terms(perspective).total();
        self.memo.eval.store(key, score);
        score
    }

    /// Compute every term without touching the memo.
    #[must_use]
    pub fn evaluate_terms(&self, perspective: Color) -> EvalTerms {
        let ply = f64::from(self.ply());
        let sign = |color: Color| if color == perspective { 1.0 } else { -1.0 };

        let mut pawn_advance = 0.0;
        let mut agility = 0.0;
        let mut pawns_on_board = 0u32;
        let mut file_pawns = [[0i32; 2]; 8];

        for sq in Square::all() {
            let code = self.piece_at(sq);
            let (Some(color), Some(piece)) = (code.color(), code.piece()) else {
                continue;
            };
            if piece == Piece::Pawn {
                let progress = match color {
                    Color::White => (7 - sq.row()) as f64 / 7.0,
                    Color::Black => sq.row() as f64 / 7.0,
                };
                pawn_advance += progress * sign(color);
                pawns_on_board += 1;
                file_pawns[sq.col()][color.index()] += 1;
            }
            if code.has_moved() {
                agility += agility_weight(piece, ply) * sign(color);
            }
        }

        let mut stacked = 0.0;
        for [white, black] in file_pawns {
            if white > 1 {
                stacked -= f64::from(white.pow(3));
            }
            if black > 1 {
                stacked += f64::from(black.pow(3));
            }
        }
        if perspective == Color::Black {
            stacked = -stacked;
        }

        EvalTerms {
            pawn_advance: pawn_advance * 0.2 * (1.0 + ply / 30.0),
            agility: agility * 0.4,
            stacked_pawns: stacked * 0.25,
            material: self.material_term(perspective, f64::from(pawns_on_board)),
        }
    }

    /// Material blended with placement. `damp` starts at 0.7 and climbs
    /// toward 1, fading the placement tables out as moves accumulate.
    fn material_term(&self, perspective: Color, pawns: f64) -> f64 {
        let full_moves = f64::from(self.ply() / 2);
        let damp = 1.0 - 0.3 / (full_moves * 0.9 + 1.0);

        let mut material = 0.0;
        for sq in Square::all() {
            let code = self.piece_at(sq);
            let (Some(color), Some(piece)) = (code.color(), code.piece()) else {
                continue;
            };
            let row = match color {
                Color::White => sq.row(),
                Color::Black => sq.mirror().row(),
            };
            let mut value = base_value(piece, pawns) * damp;
            value += value * table(piece)[row][sq.col()] * (1.0 - damp);
            material += if color == perspective { value } else { -value };
        }
        material
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardBuilder;

    #[test]
    fn test_start_position_is_balanced() {
        let board = Board::new();
        for color in Color::BOTH {
            let terms = board.evaluate_terms(color);
            assert!(terms.total().abs() < 1e-9, "{terms:?}");
        }
    }

    #[test]
    fn test_perspectives_are_opposite() {
        let mut board = Board::new();
        for token in ["e2e4", "d7d5", "e4d5"] {
            let mv = board.parse_move_token(token).unwrap();
            board.apply_move(&mv).unwrap();
        }
        let white = board.evaluate(Color::White);
        let black = board.evaluate(Color::Black);
        assert!((white + black).abs() < 1e-9);
        assert!(white > 0.0, "white is a pawn up: {white}");
    }

    #[test]
    fn test_stacked_pawns_penalized() {
        let board = BoardBuilder::new()
            .piece(Square(7, 4), Color::White, Piece::King)
            .piece(Square(0, 4), Color::Black, Piece::King)
            .piece(Square(6, 0), Color::White, Piece::Pawn)
            .piece(Square(5, 0), Color::White, Piece::Pawn)
            .build();
        let terms = board.evaluate_terms(Color::White);
        assert!((terms.stacked_pawns - (-8.0 * 0.25)).abs() < 1e-12);
        let terms = board.evaluate_terms(Color::Black);
        assert!((terms.stacked_pawns - 8.0 * 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_agility_counts_moved_pieces_only() {
        let board = BoardBuilder::new()
            .moved_piece(Square(7, 4), Color::White, Piece::King)
            .piece(Square(0, 4), Color::Black, Piece::King)
            .build();
        let terms = board.evaluate_terms(Color::White);
        assert!((terms.agility - (-3.0 * 0.4)).abs() < 1e-12);
    }

    #[test]
    fn test_memo_hit_on_repeat() {
        let mut board = Board::new();
        let first = board.evaluate(Color::White);
        let second = board.evaluate(Color::White);
        assert_eq!(first, second);
        assert_eq!(board.eval_memo_stats().hits, 1);
    }
}
