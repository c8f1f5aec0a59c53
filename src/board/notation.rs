//! Coordinate move lists: `1. e2e4 e7e5` style text in and out.
//!
//! Tokens carry the source and destination squares, optionally with a
//! piece letter, `x` for captures and `+`/`#` suffixes, which are ignored
//! on input. Castling is written `O-O` / `O-O-O` (zeros accepted too).

use std::fmt::Write;

use super::error::NotationError;
use super::state::HistoryEntry;
use super::{Board, Move, Square};

const RESULT_MARKERS: [&str; 4] = ["1-0", "0-1", "1/2-1/2", "*"];
const IGNORED: [char; 8] = ['x', '+', '#', 'B', 'N', 'R', 'Q', 'K'];

/// `12.` or `12...`
fn is_move_number(token: &str) -> bool {
    let digits = token.trim_end_matches('.');
    digits.len() < token.len() && !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

fn castle_side(token: &str) -> Option<bool> {
    match token.trim_end_matches(['+', '#']) {
        "O-O" | "0-0" => Some(true),
        "O-O-O" | "0-0-0" => Some(false),
        _ => None,
    }
}

fn parse_coordinates(token: &str) -> Option<(Square, Square)> {
    let letters: String = token.chars().filter(|c| !IGNORED.contains(c)).collect();
    if letters.len() != 4 || !letters.is_ascii() {
        return None;
    }
    let from = letters[..2].parse().ok()?;
    let to = letters[2..].parse().ok()?;
    Some((from, to))
}

fn write_move(out: &mut String, entry: &HistoryEntry) {
    let mv = entry.mv();
    if mv.is_castle_kingside() {
        out.push_str("O-O");
    } else if mv.is_castle_queenside() {
        out.push_str("O-O-O");
    } else {
        if let Some(letter) = entry.moved_piece().piece().and_then(|p| p.notation_letter()) {
            out.push(letter);
        }
        let _ = write!(out, "{}", mv.from());
        if mv.is_capture() {
            out.push('x');
        }
        let _ = write!(out, "{}", mv.to());
    }
}

impl Board {
    /// Resolve one token against the legal moves of the side to move,
    /// without applying it.
    pub fn parse_move_token(&mut self, token: &str) -> Result<Move, NotationError> {
        let legal = self.legal_moves(self.turn());
        let no_match = || NotationError::NoMatchingMove {
            token: token.to_string(),
        };

        if let Some(kingside) = castle_side(token) {
            return legal
                .into_iter()
                .find(|mv| {
                    if kingside {
                        mv.is_castle_kingside()
                    } else {
                        mv.is_castle_queenside()
                    }
                })
                .ok_or_else(no_match);
        }

        let (from, to) = parse_coordinates(token).ok_or_else(|| NotationError::InvalidToken {
            token: token.to_string(),
        })?;
        legal
            .into_iter()
            .find(|mv| mv.from() == from && mv.to() == to)
            .ok_or_else(no_match)
    }

    /// Play a whitespace-separated move list from the current position.
    ///
    /// Move numbers and result markers are skipped. On the first bad token
    /// every move applied by this call is taken back and the error is
    /// returned. Returns the number of moves applied.
    pub fn load_game(&mut self, text: &str) -> Result<usize, NotationError> {
        let mut applied = 0;
        for token in text.split_whitespace() {
            if is_move_number(token) || RESULT_MARKERS.contains(&token) {
                continue;
            }
            match self.parse_move_token(token) {
                Ok(mv) => {
                    self.push_move(mv, true);
                    applied += 1;
                }
                Err(err) => {
                    log::warn!("move list rejected after {applied} moves: {err}");
                    for _ in 0..applied {
                        self.undo_move();
                    }
                    return Err(err);
                }
            }
        }
        Ok(applied)
    }

    /// Render the move history, one numbered line per move pair.
    pub fn export_game(&mut self) -> String {
        let mated = !self.history.is_empty() && self.legal_moves(self.turn()).is_empty();
        let last = self.history.len().saturating_sub(1);

        let mut out = String::new();
        for (i, entry) in self.history.iter().enumerate() {
            let ply = self.start_ply + i as u32;
            let number = ply / 2 + 1;
            if ply % 2 == 0 {
                if i > 0 {
                    out.push('\n');
                }
                let _ = write!(out, "{number}. ");
            } else if i == 0 {
                let _ = write!(out, "{number}... ");
            } else {
                out.push(' ');
            }

            write_move(&mut out, entry);
            if entry.mv().gives_check() {
                out.push(if i == last && mated { '#' } else { '+' });
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_numbers() {
        assert!(is_move_number("1."));
        assert!(is_move_number("12..."));
        assert!(!is_move_number("."));
        assert!(!is_move_number("12"));
        assert!(!is_move_number("e4."));
    }

    #[test]
    fn test_coordinates_ignore_decorations() {
        let expected = Some((Square(7, 6), Square(5, 5)));
        assert_eq!(parse_coordinates("Ng1f3"), expected);
        assert_eq!(parse_coordinates("g1f3+"), expected);
        assert_eq!(parse_coordinates("Bb5xc6"), Some((Square(3, 1), Square(2, 2))));
        assert_eq!(parse_coordinates("e4"), None);
        assert_eq!(parse_coordinates("Nf3"), None);
    }

    #[test]
    fn test_castle_tokens() {
        assert_eq!(castle_side("O-O"), Some(true));
        assert_eq!(castle_side("0-0-0+"), Some(false));
        assert_eq!(castle_side("O-O-O-O"), None);
    }
}
