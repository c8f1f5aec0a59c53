//! Error types for board operations.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Square;

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for refused move application.
///
/// Applying a move whose source is empty or that names a square off the
/// board is a caller bug; the board is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveError {
    /// A segment's source square holds no piece
    EmptySource { square: Square },
    /// A segment names a square outside the 8x8 grid
    OffBoard { square: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptySource { square } => {
                write!(f, "Cannot move from empty square {square}")
            }
            MoveError::OffBoard { square } => {
                write!(f, "Square {square} is off the board")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for position key decoding
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KeyError {
    /// Hex text has the wrong number of digits
    InvalidLength { len: usize },
    /// Non-hex character in key text
    InvalidDigit { char: char },
    /// A square decodes to an impossible piece code
    InvalidCode { square: Square, bits: u16 },
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyError::InvalidLength { len } => {
                write!(f, "Position key must be 160 hex digits, found {len}")
            }
            KeyError::InvalidDigit { char } => {
                write!(f, "Invalid hex digit '{char}' in position key")
            }
            KeyError::InvalidCode { square, bits } => {
                write!(f, "Invalid piece code {bits:#05x} on {square}")
            }
        }
    }
}

impl std::error::Error for KeyError {}

/// Error type for move-list notation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NotationError {
    /// Token is not castling and does not contain two squares
    InvalidToken { token: String },
    /// No currently legal move matches the token
    NoMatchingMove { token: String },
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::InvalidToken { token } => {
                write!(f, "Cannot read move token '{token}'")
            }
            NotationError::NoMatchingMove { token } => {
                write!(f, "No legal move matches '{token}'")
            }
        }
    }
}

impl std::error::Error for NotationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_names_square() {
        let err = MoveError::EmptySource {
            square: Square(4, 4),
        };
        assert!(err.to_string().contains("e4"));
    }

    #[test]
    fn test_key_error_invalid_code() {
        let err = KeyError::InvalidCode {
            square: Square(0, 0),
            bits: 0x3,
        };
        assert!(err.to_string().contains("a8"));
    }

    #[test]
    fn test_notation_error_no_match() {
        let err = NotationError::NoMatchingMove {
            token: "Qh7".to_string(),
        };
        assert!(err.to_string().contains("Qh7"));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }
}
