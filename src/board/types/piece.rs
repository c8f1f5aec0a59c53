//! Piece, color and the packed per-square piece code.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const EMPTY_BIT: u16 = 1 << 0;
const BLACK_BIT: u16 = 1 << 1;
const WHITE_BIT: u16 = 1 << 2;
const PAWN_BIT: u16 = 1 << 3;
const KNIGHT_BIT: u16 = 1 << 4;
const BISHOP_BIT: u16 = 1 << 5;
const ROOK_BIT: u16 = 1 << 6;
const QUEEN_BIT: u16 = 1 << 7;
const KING_BIT: u16 = 1 << 8;
const MOVED_BIT: u16 = 1 << 9;

const COLOR_BITS: u16 = BLACK_BIT | WHITE_BIT;
const TYPE_BITS: u16 = PAWN_BIT | KNIGHT_BIT | BISHOP_BIT | ROOK_BIT | QUEEN_BIT | KING_BIT;

/// Number of bits a piece code occupies in a position key.
pub const CODE_BITS: u32 = 10;

/// Chess piece types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    /// All piece types in index order
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Piece::Pawn => 0,
            Piece::Knight => 1,
            Piece::Bishop => 2,
            Piece::Rook => 3,
            Piece::Queen => 4,
            Piece::King => 5,
        }
    }

    #[inline]
    const fn bit(self) -> u16 {
        match self {
            Piece::Pawn => PAWN_BIT,
            Piece::Knight => KNIGHT_BIT,
            Piece::Bishop => BISHOP_BIT,
            Piece::Rook => ROOK_BIT,
            Piece::Queen => QUEEN_BIT,
            Piece::King => KING_BIT,
        }
    }

    /// Convert piece to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        }
    }

    /// Letter used in move notation; pawns have none.
    #[must_use]
    pub const fn notation_letter(self) -> Option<char> {
        match self {
            Piece::Pawn => None,
            Piece::Knight => Some('N'),
            Piece::Bishop => Some('B'),
            Piece::Rook => Some('R'),
            Piece::Queen => Some('Q'),
            Piece::King => Some('K'),
        }
    }

    /// Conventional point value (pawn 1 .. queen 9, king 0).
    #[inline]
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Piece::Pawn => 1,
            Piece::Knight | Piece::Bishop => 3,
            Piece::Rook => 5,
            Piece::Queen => 9,
            Piece::King => 0,
        }
    }
}

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    #[inline]
    const fn bit(self) -> u16 {
        match self {
            Color::White => WHITE_BIT,
            Color::Black => BLACK_BIT,
        }
    }

    /// Row of this color's back rank (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn back_row(self) -> usize {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Row delta of a pawn step (-1 for White, +1 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_direction(self) -> isize {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row pawns start on (6 for White, 1 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_start_row(self) -> usize {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row on which a pawn promotes (0 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn promotion_row(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Contents of one square as a union of independent tag bits.
///
/// A valid code is either the empty tag alone, or exactly one color tag
/// plus exactly one type tag, optionally with the has-moved tag. Bits are
/// tested independently: "white pawn" means both the white and the pawn
/// tag are present, whatever else is set.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceCode(u16);

impl PieceCode {
    pub const EMPTY: PieceCode = PieceCode(EMPTY_BIT);

    /// An unmoved piece of the given color and type.
    #[inline]
    #[must_use]
    pub const fn new(color: Color, piece: Piece) -> Self {
        PieceCode(color.bit() | piece.bit())
    }

    /// Decode raw bits, rejecting anything outside the valid shapes.
    #[must_use]
    pub fn from_bits(bits: u16) -> Option<Self> {
        if bits >> CODE_BITS != 0 {
            return None;
        }
        if bits == EMPTY_BIT {
            return Some(PieceCode::EMPTY);
        }
        let colors = (bits & COLOR_BITS).count_ones();
        let types = (bits & TYPE_BITS).count_ones();
        if bits & EMPTY_BIT != 0 || colors != 1 || types != 1 {
            return None;
        }
        Some(PieceCode(bits))
    }

    #[inline]
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 & EMPTY_BIT != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_color(self, color: Color) -> bool {
        self.0 & color.bit() != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_piece(self, piece: Piece) -> bool {
        self.0 & piece.bit() != 0
    }

    /// Conjunction of the color and type tags.
    #[inline]
    #[must_use]
    pub const fn is(self, color: Color, piece: Piece) -> bool {
        let want = color.bit() | piece.bit();
        self.0 & want == want
    }

    #[inline]
    #[must_use]
    pub const fn has_moved(self) -> bool {
        self.0 & MOVED_BIT != 0
    }

    /// The same piece with the has-moved tag set. Empty stays empty.
    #[inline]
    #[must_use]
    pub const fn with_moved(self) -> Self {
        if self.is_empty() {
            self
        } else {
            PieceCode(self.0 | MOVED_BIT)
        }
    }

    #[must_use]
    pub fn color(self) -> Option<Color> {
        Color::BOTH.into_iter().find(|&c| self.is_color(c))
    }

    #[must_use]
    pub fn piece(self) -> Option<Piece> {
        Piece::ALL.into_iter().find(|&p| self.is_piece(p))
    }

    /// Board-diagram character: uppercase for White, '.' when empty.
    #[must_use]
    pub fn to_char(self) -> char {
        match (self.color(), self.piece()) {
            (Some(Color::White), Some(p)) => p.to_char().to_ascii_uppercase(),
            (Some(Color::Black), Some(p)) => p.to_char(),
            _ => '.',
        }
    }
}

impl Default for PieceCode {
    fn default() -> Self {
        PieceCode::EMPTY
    }
}

impl fmt::Debug for PieceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "PieceCode(empty)");
        }
        write!(
            f,
            "PieceCode({}{})",
            self.to_char(),
            if self.has_moved() { ", moved" } else { "" }
        )
    }
}
