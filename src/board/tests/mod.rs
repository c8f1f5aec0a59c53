//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `make_unmake.rs` - Apply/undo correctness and history records
//! - `movegen.rs` - Piece vision and legal move counts
//! - `legality.rs` - Check detection and castling conditions
//! - `eval.rs` - Evaluation terms and memoization
//! - `search.rs` - Mate, stalemate and move choice
//! - `notation.rs` - Move list loading and export
//! - `proptest.rs` - Property-based tests

mod eval;
mod legality;
mod proptest;
mod search;

use crate::board::{Board, Color, Move, MoveFlags, Segment, Square};

/// Find the legal move of the side to move with the given squares.
fn find_move(board: &mut Board, from: Square, to: Square) -> Move {
    let side = board.turn();
    board
        .legal_moves(side)
        .into_iter()
        .find(|m| m.from() == from && m.to() == to)
        .unwrap_or_else(|| panic!("Expected move {from}{to} not found"))
}

/// Play a list of coordinate moves ("e2e4") from the current position.
fn play(board: &mut Board, moves: &[&str]) {
    for token in moves {
        let from: Square = token[..2].parse().unwrap();
        let to: Square = token[2..4].parse().unwrap();
        let mv = find_move(board, from, to);
        board.apply_move(&mv).unwrap();
    }
}

/// Every quiet, capture and castle candidate `color` sees, before the
/// legality filter. Includes moves that leave `color`'s king attacked.
fn pseudo_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for (from, _) in board.pieces(color) {
        for target in board.vision(from) {
            if let Some(rook) = target.rook {
                let kingside = target.flags.contains(MoveFlags::CASTLE_KINGSIDE);
                moves.push(Move::castle(Segment::new(from, target.to), rook, kingside));
                continue;
            }
            let dest = board.piece_at(target.to);
            if dest.is_empty() && target.flags.contains(MoveFlags::QUIET) {
                moves.push(Move::quiet(from, target.to));
            } else if dest.is_color(color.opponent()) && target.flags.contains(MoveFlags::CAPTURE) {
                moves.push(Move::capture(from, target.to));
            }
        }
    }
    moves
}
