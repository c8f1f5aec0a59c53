//! Castling and check legality fixtures.

use crate::board::{Board, BoardBuilder, Color, Move, Piece, Square};

const E1: Square = Square(7, 4);
const A1: Square = Square(7, 0);
const H1: Square = Square(7, 7);
const E8: Square = Square(0, 4);

/// White king and both rooks at home, black king on e8.
fn castle_fixture() -> BoardBuilder {
    BoardBuilder::new()
        .piece(E1, Color::White, Piece::King)
        .piece(A1, Color::White, Piece::Rook)
        .piece(H1, Color::White, Piece::Rook)
        .piece(E8, Color::Black, Piece::King)
}

fn castles(board: &mut Board) -> (bool, bool) {
    let moves = board.legal_moves(Color::White);
    (
        moves.iter().any(Move::is_castle_kingside),
        moves.iter().any(Move::is_castle_queenside),
    )
}

#[test]
fn test_both_castles_available() {
    let mut board = castle_fixture().build();
    assert_eq!(castles(&mut board), (true, true));
}

#[test]
fn test_king_moved_forbids_castling() {
    let mut board = castle_fixture().moved(E1).build();
    assert_eq!(castles(&mut board), (false, false));
}

#[test]
fn test_rook_moved_forbids_that_side() {
    let mut board = castle_fixture().moved(H1).build();
    assert_eq!(castles(&mut board), (false, true));
}

#[test]
fn test_enemy_rook_in_corner_forbids_castling() {
    let mut board = castle_fixture().piece(H1, Color::Black, Piece::Rook).build();
    assert!(!castles(&mut board).0);
}

#[test]
fn test_blocked_path_forbids_castling() {
    let mut board = castle_fixture()
        .piece(Square(7, 6), Color::White, Piece::Knight)
        .piece(Square(7, 1), Color::White, Piece::Knight)
        .build();
    assert_eq!(castles(&mut board), (false, false));
}

#[test]
fn test_in_check_forbids_castling() {
    let mut board = castle_fixture()
        .piece(Square(3, 4), Color::Black, Piece::Rook)
        .build();
    assert!(board.in_check(Color::White));
    assert_eq!(castles(&mut board), (false, false));
}

#[test]
fn test_attacked_transit_square_forbids_castling() {
    // f1 covered
    let mut board = castle_fixture()
        .piece(Square(3, 5), Color::Black, Piece::Rook)
        .build();
    assert_eq!(castles(&mut board), (false, true));

    // d1 covered
    let mut board = castle_fixture()
        .piece(Square(3, 3), Color::Black, Piece::Rook)
        .build();
    assert_eq!(castles(&mut board), (true, false));
}

#[test]
fn test_attacked_destination_forbids_castling() {
    // g1 covered
    let mut board = castle_fixture()
        .piece(Square(3, 6), Color::Black, Piece::Rook)
        .build();
    assert_eq!(castles(&mut board), (false, true));

    // c1 covered
    let mut board = castle_fixture()
        .piece(Square(3, 2), Color::Black, Piece::Rook)
        .build();
    assert_eq!(castles(&mut board), (true, false));
}

#[test]
fn test_attacked_b1_does_not_matter() {
    // the king never crosses b1, only the rook does
    let mut board = castle_fixture()
        .piece(Square(3, 1), Color::Black, Piece::Rook)
        .build();
    assert_eq!(castles(&mut board), (true, true));
}

#[test]
fn test_pinned_piece_cannot_move() {
    let mut board = BoardBuilder::new()
        .piece(E1, Color::White, Piece::King)
        .piece(Square(6, 4), Color::White, Piece::Knight)
        .piece(Square(0, 4), Color::Black, Piece::Rook)
        .piece(Square(0, 0), Color::Black, Piece::King)
        .build();
    let knight_moves = board
        .legal_moves(Color::White)
        .into_iter()
        .filter(|m| m.from() == Square(6, 4))
        .count();
    assert_eq!(knight_moves, 0);
}
