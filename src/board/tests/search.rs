//! Search tests.

use crate::board::{
    Board, BoardBuilder, Color, GameStatus, Piece, SearchConfig, Square, MATE_SCORE,
};

fn fixed(depth: u32) -> SearchConfig {
    SearchConfig {
        depth: Some(depth),
        ..SearchConfig::default()
    }
}

/// Black king h8 mated by a queen on g7 guarded by the king on f6.
fn mated_black() -> Board {
    BoardBuilder::new()
        .piece(Square(0, 7), Color::Black, Piece::King)
        .piece(Square(1, 6), Color::White, Piece::Queen)
        .piece(Square(2, 5), Color::White, Piece::King)
        .side_to_move(Color::Black)
        .build()
}

/// Black king a8, white queen b6: no moves, no check.
fn stalemated_black() -> Board {
    BoardBuilder::new()
        .piece(Square(0, 0), Color::Black, Piece::King)
        .piece(Square(2, 1), Color::White, Piece::Queen)
        .piece(Square(7, 7), Color::White, Piece::King)
        .side_to_move(Color::Black)
        .build()
}

#[test]
fn test_checkmate_has_no_move() {
    let mut board = mated_black();
    assert!(board.in_check(Color::Black));
    assert!(board.legal_moves(Color::Black).is_empty());
    assert_eq!(board.status(), GameStatus::Checkmate);
    assert!(board.status().is_over());

    let result = board.choose_move_with(&fixed(3));
    assert_eq!(result.best_move, None);
    assert!(result.score <= -MATE_SCORE);
}

#[test]
fn test_stalemate_scores_zero() {
    let mut board = stalemated_black();
    assert!(!board.in_check(Color::Black));
    assert_eq!(board.status(), GameStatus::Stalemate);

    let result = board.choose_move();
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, 0.0);
}

#[test]
fn test_finds_back_rank_mate() {
    let mut board = BoardBuilder::new()
        .piece(Square(7, 6), Color::White, Piece::King)
        .piece(Square(7, 0), Color::White, Piece::Rook)
        .piece(Square(0, 6), Color::Black, Piece::King)
        .piece(Square(1, 5), Color::Black, Piece::Pawn)
        .piece(Square(1, 6), Color::Black, Piece::Pawn)
        .piece(Square(1, 7), Color::Black, Piece::Pawn)
        .build();
    let before = board.clone();

    let result = board.choose_move_with(&fixed(2));
    let best = result.best_move.expect("white has moves");
    assert_eq!((best.from(), best.to()), (Square(7, 0), Square(0, 0)));
    assert!(result.score >= MATE_SCORE);
    assert_eq!(board, before);
}

#[test]
fn test_search_leaves_position_unchanged() {
    let mut board = Board::new();
    super::play(&mut board, &["e2e4", "e7e5", "g1f3"]);
    let before = board.clone();
    assert_eq!(board.status(), GameStatus::Ongoing);
    assert!(!board.status().is_over());

    let result = board.choose_move_with(&fixed(2));
    assert!(result.best_move.is_some());
    assert!(result.nodes > 1);
    assert!(result.evaluations > 0);
    assert_eq!(board, before);
}

#[test]
fn test_narrow_branch_still_finds_a_move() {
    let mut board = Board::new();
    let config = SearchConfig {
        depth: Some(3),
        branch: 1,
    };
    let result = board.choose_move_with(&config);
    assert!(result.best_move.is_some());
}

#[test]
fn test_takes_hanging_queen() {
    let mut board = BoardBuilder::new()
        .piece(Square(7, 4), Color::White, Piece::King)
        .piece(Square(7, 0), Color::White, Piece::Rook)
        .piece(Square(0, 4), Color::Black, Piece::King)
        .piece(Square(3, 0), Color::Black, Piece::Queen)
        .build();
    let result = board.choose_move_with(&fixed(2));
    let best = result.best_move.unwrap();
    assert_eq!(best.to(), Square(3, 0));
    assert!(best.is_capture());
}
