//! Evaluation tests.

use super::play;
use crate::board::{Board, BoardBuilder, Color, Piece, Square};

#[test]
fn test_terms_sum_to_evaluation() {
    let mut board = Board::new();
    play(&mut board, &["e2e4", "d7d5", "e4d5", "d8d5"]);
    for color in Color::BOTH {
        let terms = board.evaluate_terms(color);
        let score = board.evaluate(color);
        assert!((terms.total() - score).abs() < 1e-12);
    }
}

#[test]
fn test_memo_disabled_gives_same_score() {
    let mut cached = Board::new();
    play(&mut cached, &["g1f3", "g8f6", "b1c3"]);
    let mut uncached = cached.clone().with_memo_capacity(0, 0);
    assert_eq!(cached.evaluate(Color::Black), uncached.evaluate(Color::Black));
    assert_eq!(uncached.eval_memo_stats().hits, 0);
}

#[test]
fn test_extra_queen_dominates() {
    let board = BoardBuilder::new()
        .piece(Square(7, 4), Color::White, Piece::King)
        .piece(Square(4, 3), Color::White, Piece::Queen)
        .piece(Square(0, 4), Color::Black, Piece::King)
        .build();
    let score = board.evaluate_terms(Color::White).total();
    assert!(score > 8.0, "score {score}");
    assert!((board.evaluate_terms(Color::Black).total() + score).abs() < 1e-9);
}

#[test]
fn test_pawn_advance_grows_with_rank() {
    let lone_pawn = |row: usize| {
        BoardBuilder::new()
            .piece(Square(7, 4), Color::White, Piece::King)
            .piece(Square(0, 4), Color::Black, Piece::King)
            .piece(Square(row, 0), Color::White, Piece::Pawn)
            .build()
            .evaluate_terms(Color::White)
            .pawn_advance
    };
    assert!(lone_pawn(3) > lone_pawn(5));
    assert!((lone_pawn(0) - 0.2).abs() < 1e-12);
}

#[test]
fn test_placement_fades_with_ply() {
    // same placement, different move counts: damp rises toward 1
    let early = BoardBuilder::new()
        .piece(Square(7, 4), Color::White, Piece::King)
        .piece(Square(0, 4), Color::Black, Piece::King)
        .piece(Square(3, 3), Color::White, Piece::Knight)
        .build();
    let mut late = early.clone();
    late.start_ply = 80;

    let early_material = early.evaluate_terms(Color::White).material;
    let late_material = late.evaluate_terms(Color::White).material;
    assert_ne!(early_material, late_material);
}
