//! Lossless 640-bit position key.
//!
//! Every square's 10-bit piece code is packed at bit offset `10 * index`
//! across ten `u64` words, so two boards share a key exactly when their
//! grids are identical (has-moved marks included).

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::KeyError;
use super::types::CODE_BITS;
use super::{PieceCode, Square};

const WORDS: usize = 10;
const HEX_DIGITS: usize = WORDS * 16;
const CODE_MASK: u64 = (1 << CODE_BITS) - 1;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PositionKey([u64; WORDS]);

impl PositionKey {
    /// Pack a grid into a key.
    #[must_use]
    pub fn from_grid(grid: &[[PieceCode; 8]; 8]) -> Self {
        let mut words = [0u64; WORDS];
        for sq in Square::all() {
            let code = u64::from(grid[sq.row()][sq.col()].bits());
            let offset = sq.index() * CODE_BITS as usize;
            let (word, shift) = (offset / 64, offset % 64);
            words[word] |= code << shift;
            if shift + CODE_BITS as usize > 64 {
                words[word + 1] |= code >> (64 - shift);
            }
        }
        PositionKey(words)
    }

    /// Raw 10-bit code stored for `sq`.
    #[must_use]
    pub fn code_bits(&self, sq: Square) -> u16 {
        let offset = sq.index() * CODE_BITS as usize;
        let (word, shift) = (offset / 64, offset % 64);
        let mut bits = self.0[word] >> shift;
        if shift + CODE_BITS as usize > 64 {
            bits |= self.0[word + 1] << (64 - shift);
        }
        (bits & CODE_MASK) as u16
    }

    /// Unpack into a grid, rejecting squares whose code is malformed.
    pub fn to_grid(&self) -> Result<[[PieceCode; 8]; 8], KeyError> {
        let mut grid = [[PieceCode::EMPTY; 8]; 8];
        for sq in Square::all() {
            let bits = self.code_bits(sq);
            grid[sq.row()][sq.col()] =
                PieceCode::from_bits(bits).ok_or(KeyError::InvalidCode { square: sq, bits })?;
        }
        Ok(grid)
    }

    #[must_use]
    pub fn words(&self) -> &[u64; WORDS] {
        &self.0
    }
}

impl fmt::Display for PositionKey {
    /// Most significant word first, 16 hex digits per word.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in self.0.iter().rev() {
            write!(f, "{word:016x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for PositionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PositionKey({self})")
    }
}

impl FromStr for PositionKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let len = s.chars().count();
        if len != HEX_DIGITS {
            return Err(KeyError::InvalidLength { len });
        }
        if let Some(bad) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(KeyError::InvalidDigit { char: bad });
        }

        let mut words = [0u64; WORDS];
        for (i, chunk) in s.as_bytes().chunks(16).enumerate() {
            let mut word = 0u64;
            for &b in chunk {
                let digit = (b as char)
                    .to_digit(16)
                    .ok_or(KeyError::InvalidDigit { char: b as char })?;
                word = (word << 4) | u64::from(digit);
            }
            words[WORDS - 1 - i] = word;
        }
        Ok(PositionKey(words))
    }
}
