//! Placement tables, indexed `[row][col]` from White's point of view
//! (row 0 is the far rank). Black squares are mirrored before lookup.

use crate::board::Piece;

pub(crate) const PAWN_TABLE: [[f64; 8]; 8] = [
    [100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0],
    [25.0, 25.0, 25.0, 25.0, 25.0, 25.0, 25.0, 25.0],
    [10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0],
    [1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5],
    [1.0, 1.0, 1.1, 1.85, 1.85, 1.1, 1.0, 1.0],
    [1.0, 1.0, 1.35, 1.4, 1.4, 1.35, 1.0, 1.0],
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
];

pub(crate) const BISHOP_TABLE: [[f64; 8]; 8] = [
    [0.6, 0.7, 0.7, 0.7, 0.7, 0.7, 0.7, 0.6],
    [0.7, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.7],
    [0.7, 1.0, 1.0, 1.2, 1.2, 1.0, 1.0, 0.7],
    [0.7, 1.0, 1.0, 1.2, 1.2, 1.0, 1.0, 0.7],
    [0.7, 1.0, 1.3, 1.3, 1.3, 1.3, 1.0, 0.7],
    [0.7, 1.3, 1.3, 1.3, 1.3, 1.3, 1.3, 0.7],
    [0.7, 1.1, 1.0, 1.0, 1.0, 1.0, 1.1, 0.7],
    [0.6, 0.7, 0.7, 0.7, 0.7, 0.7, 0.7, 0.6],
];

pub(crate) const KNIGHT_TABLE: [[f64; 8]; 8] = [
    [0.5, 0.75, 0.75, 0.75, 0.75, 0.75, 0.75, 0.5],
    [0.75, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.75],
    [0.75, 1.0, 1.15, 1.15, 1.15, 1.15, 1.0, 0.75],
    [0.75, 1.0, 1.15, 1.4, 1.4, 1.15, 1.0, 0.75],
    [0.75, 1.0, 1.15, 1.4, 1.4, 1.15, 1.0, 0.75],
    [0.75, 1.0, 1.15, 1.15, 1.15, 1.15, 1.0, 0.75],
    [0.75, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.75],
    [0.5, 0.75, 0.75, 0.75, 0.75, 0.75, 0.75, 0.5],
];

pub(crate) const ROOK_TABLE: [[f64; 8]; 8] = [
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
    [1.5, 2.5, 2.5, 2.5, 2.5, 2.5, 2.5, 1.5],
    [0.7, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.7],
    [0.7, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.7],
    [0.7, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.7],
    [0.7, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.7],
    [0.7, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.7],
    [1.0, 1.0, 1.0, 1.2, 1.2, 1.0, 1.0, 1.0],
];

pub(crate) const QUEEN_TABLE: [[f64; 8]; 8] = [
    [0.7, 0.8, 0.8, 0.8, 0.8, 0.8, 0.8, 0.7],
    [0.8, 0.9, 1.0, 1.0, 1.0, 1.0, 0.9, 0.8],
    [0.8, 1.0, 1.1, 1.2, 1.2, 1.1, 1.0, 0.8],
    [0.8, 1.0, 1.2, 1.3, 1.3, 1.2, 1.0, 0.8],
    [0.8, 1.0, 1.2, 1.3, 1.3, 1.2, 1.0, 0.8],
    [0.8, 1.0, 1.1, 1.2, 1.2, 1.1, 1.0, 0.8],
    [0.8, 0.9, 1.0, 1.0, 1.0, 1.0, 0.9, 0.8],
    [0.7, 0.8, 0.8, 0.8, 0.8, 0.8, 0.8, 0.7],
];

pub(crate) const KING_TABLE: [[f64; 8]; 8] = [
    [-0.5, 0.3, 0.3, 0.3, 0.3, 0.3, 0.3, -0.5],
    [0.8, 0.65, 0.5, 0.5, 0.5, 0.5, 0.65, 0.8],
    [0.8, 0.65, 0.5, 0.5, 0.5, 0.5, 0.65, 0.8],
    [0.8, 0.65, 0.5, 0.3, 0.3, 0.5, 0.65, 0.8],
    [0.8, 0.65, 0.5, 0.3, 0.3, 0.5, 0.65, 0.8],
    [1.0, 1.0, 0.8, 0.5, 0.5, 0.8, 1.0, 1.0],
    [1.4, 1.4, 1.0, 1.0, 1.0, 1.0, 1.4, 1.4],
    [1.4, 2.5, 1.4, 1.0, 1.0, 1.4, 2.5, 1.4],
];

#[inline]
pub(crate) const fn table(piece: Piece) -> &'static [[f64; 8]; 8] {
    match piece {
        Piece::Pawn => &PAWN_TABLE,
        Piece::Knight => &KNIGHT_TABLE,
        Piece::Bishop => &BISHOP_TABLE,
        Piece::Rook => &ROOK_TABLE,
        Piece::Queen => &QUEEN_TABLE,
        Piece::King => &KING_TABLE,
    }
}

/// Agility weight for a piece that has moved, at ply `ply`.
#[inline]
pub(crate) fn agility_weight(piece: Piece, ply: f64) -> f64 {
    match piece {
        Piece::Knight | Piece::Pawn => 1.0,
        Piece::Bishop => 0.5 + ply / 80.0,
        Piece::Queen => -1.0 + ply / 40.0,
        Piece::Rook => -2.0 + ply / 40.0,
        Piece::King => -3.0 + ply / 40.0,
    }
}

/// Base material value given the number of pawns left on the board.
#[inline]
pub(crate) fn base_value(piece: Piece, pawns: f64) -> f64 {
    let fraction = pawns / 16.0;
    match piece {
        Piece::Pawn => 0.9 + 0.2 * fraction,
        Piece::Knight => 2.5 + fraction,
        Piece::Bishop => 3.5 - fraction,
        Piece::Rook => 5.1 - 0.2 * fraction,
        Piece::Queen => 9.1 - 0.2 * fraction,
        Piece::King => 1.0,
    }
}
