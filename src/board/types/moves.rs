//! Move flags, segments and move records.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// Classification bits attached to a move (and to vision targets).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveFlags(u8);

impl MoveFlags {
    pub const NONE: MoveFlags = MoveFlags(0);
    pub const CAPTURE: MoveFlags = MoveFlags(1 << 0);
    pub const QUIET: MoveFlags = MoveFlags(1 << 1);
    pub const CASTLE_KINGSIDE: MoveFlags = MoveFlags(1 << 2);
    pub const CASTLE_QUEENSIDE: MoveFlags = MoveFlags(1 << 3);
    // 1 << 4 is reserved for en passant, which is not generated.
    pub const CHECK: MoveFlags = MoveFlags(1 << 5);

    pub const CASTLE: MoveFlags = MoveFlags(Self::CASTLE_KINGSIDE.0 | Self::CASTLE_QUEENSIDE.0);

    #[inline]
    #[must_use]
    pub const fn contains(self, other: MoveFlags) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    #[must_use]
    pub const fn intersects(self, other: MoveFlags) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl BitOr for MoveFlags {
    type Output = MoveFlags;

    fn bitor(self, rhs: MoveFlags) -> MoveFlags {
        MoveFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for MoveFlags {
    fn bitor_assign(&mut self, rhs: MoveFlags) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for MoveFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(MoveFlags, &str); 5] = [
            (MoveFlags::CAPTURE, "capture"),
            (MoveFlags::QUIET, "quiet"),
            (MoveFlags::CASTLE_KINGSIDE, "O-O"),
            (MoveFlags::CASTLE_QUEENSIDE, "O-O-O"),
            (MoveFlags::CHECK, "check"),
        ];
        let names: Vec<&str> = NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "MoveFlags({})", names.join("|"))
    }
}

/// One piece relocation: whatever stands on `from` moves to `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment {
    pub from: Square,
    pub to: Square,
}

impl Segment {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Segment { from, to }
    }
}

/// A move record: one segment, or two for castling (king first, rook
/// second). Flags describe the whole move.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    primary: Segment,
    secondary: Option<Segment>,
    flags: MoveFlags,
}

impl Move {
    /// Create a quiet move onto an empty square
    #[inline]
    #[must_use]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Move {
            primary: Segment::new(from, to),
            secondary: None,
            flags: MoveFlags::QUIET,
        }
    }

    /// Create a capture move
    #[inline]
    #[must_use]
    pub const fn capture(from: Square, to: Square) -> Self {
        Move {
            primary: Segment::new(from, to),
            secondary: None,
            flags: MoveFlags::CAPTURE,
        }
    }

    /// Create a castle from the king and rook segments
    #[inline]
    #[must_use]
    pub const fn castle(king: Segment, rook: Segment, kingside: bool) -> Self {
        Move {
            primary: king,
            secondary: Some(rook),
            flags: if kingside {
                MoveFlags::CASTLE_KINGSIDE
            } else {
                MoveFlags::CASTLE_QUEENSIDE
            },
        }
    }

    /// Source of the first (king, for castling) segment
    #[inline]
    #[must_use]
    pub const fn from(&self) -> Square {
        self.primary.from
    }

    /// Destination of the first segment
    #[inline]
    #[must_use]
    pub const fn to(&self) -> Square {
        self.primary.to
    }

    #[inline]
    #[must_use]
    pub const fn flags(&self) -> MoveFlags {
        self.flags
    }

    #[inline]
    pub(crate) fn add_flags(&mut self, flags: MoveFlags) {
        self.flags |= flags;
    }

    /// Segments in application order.
    pub fn segments(&self) -> impl Iterator<Item = Segment> {
        std::iter::once(self.primary).chain(self.secondary)
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.flags.contains(MoveFlags::CAPTURE)
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(&self) -> bool {
        self.flags.intersects(MoveFlags::CASTLE)
    }

    #[inline]
    #[must_use]
    pub const fn is_castle_kingside(&self) -> bool {
        self.flags.contains(MoveFlags::CASTLE_KINGSIDE)
    }

    #[inline]
    #[must_use]
    pub const fn is_castle_queenside(&self) -> bool {
        self.flags.contains(MoveFlags::CASTLE_QUEENSIDE)
    }

    /// Set on history records whose application left the opponent in check.
    #[inline]
    #[must_use]
    pub const fn gives_check(&self) -> bool {
        self.flags.contains(MoveFlags::CHECK)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.primary.from, self.primary.to)?;
        if let Some(rook) = self.secondary {
            write!(f, " {}{}", rook.from, rook.to)?;
        }
        write!(f, " {:?})", self.flags)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_castle_kingside() {
            write!(f, "O-O")
        } else if self.is_castle_queenside() {
            write!(f, "O-O-O")
        } else {
            write!(f, "{}{}", self.primary.from, self.primary.to)
        }
    }
}

/// A pseudo-legal destination produced by piece vision.
///
/// `flags` says what the piece could do there: QUIET and/or CAPTURE, or a
/// castle flag, in which case `rook` holds the accompanying rook segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Target {
    pub to: Square,
    pub flags: MoveFlags,
    pub rook: Option<Segment>,
}

impl Target {
    #[inline]
    #[must_use]
    pub const fn new(to: Square, flags: MoveFlags) -> Self {
        Target {
            to,
            flags,
            rook: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn castle(to: Square, rook: Segment, kingside: bool) -> Self {
        Target {
            to,
            flags: if kingside {
                MoveFlags::CASTLE_KINGSIDE
            } else {
                MoveFlags::CASTLE_QUEENSIDE
            },
            rook: Some(rook),
        }
    }
}
