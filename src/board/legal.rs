use super::{Board, Color, Move, MoveFlags, Segment, Square};
use crate::memo::MemoKey;

impl Board {
    /// Legal moves for `color`, memoized by position and side.
    ///
    /// The position is unchanged on return.
    pub fn legal_moves(&mut self, color: Color) -> Vec<Move> {
        let key = MemoKey::new(self.hash(), 0, color);
        if let Some(moves) = self.memo.legal.probe(&key) {
            return moves;
        }
        let moves = self.generate_legal_moves(color);
        self.memo.legal.store(key, moves.clone());
        moves
    }

    fn generate_legal_moves(&mut self, color: Color) -> Vec<Move> {
        let enemy = color.opponent();
        let origins: Vec<Square> = self.pieces(color).map(|(sq, _)| sq).collect();
        let mut moves = Vec::new();

        for from in origins {
            for target in self.vision(from) {
                if let Some(rook) = target.rook {
                    let kingside = target.flags.contains(MoveFlags::CASTLE_KINGSIDE);
                    if self.castle_path_safe(color, from, target.to) {
                        moves.push(Move::castle(Segment::new(from, target.to), rook, kingside));
                    }
                    continue;
                }

                let dest = self.piece_at(target.to);
                let candidate = if dest.is_empty() && target.flags.contains(MoveFlags::QUIET) {
                    Move::quiet(from, target.to)
                } else if dest.is_color(enemy) && target.flags.contains(MoveFlags::CAPTURE) {
                    Move::capture(from, target.to)
                } else {
                    continue;
                };

                self.push_move(candidate, false);
                let safe = !self.in_check(color);
                self.undo_move();
                if safe {
                    moves.push(candidate);
                }
            }
        }
        moves
    }

    /// Castling needs the king out of check now and after every single
    /// step toward its destination, the destination included.
    fn castle_path_safe(&mut self, color: Color, from: Square, to: Square) -> bool {
        if self.in_check(color) {
            return false;
        }

        let step: isize = if to.col() > from.col() { 1 } else { -1 };
        let mut current = from;
        let mut pushed = 0;
        let mut safe = true;
        while current != to {
            let Some(next) = current.offset(0, step) else {
                break;
            };
            self.push_move(Move::quiet(current, next), false);
            pushed += 1;
            if self.in_check(color) {
                safe = false;
                break;
            }
            current = next;
        }
        for _ in 0..pushed {
            self.undo_move();
        }
        safe
    }
}
