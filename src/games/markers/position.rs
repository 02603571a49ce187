//! Board coordinates and their text form.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A cell coordinate on the board.
///
/// Positions are plain values: they carry no knowledge of the board size,
/// so bounds are checked by whoever reads or writes the grid.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_new::new,
)]
pub struct Position {
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based column index.
    pub col: usize,
}

impl Position {
    /// Returns the row index.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column index.
    pub fn col(&self) -> usize {
        self.col
    }

    /// True when both positions lie in the same row.
    pub fn shares_row(&self, other: &Position) -> bool {
        self.row == other.row
    }

    /// True when both positions lie in the same column.
    pub fn shares_col(&self, other: &Position) -> bool {
        self.col == other.col
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error produced when text does not describe a position.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParsePositionError {
    /// Input was not exactly two whitespace-separated tokens.
    #[display(
        "Invalid input format. Please enter two space-separated integers (got {} values).",
        _0
    )]
    WrongArity(usize),

    /// A token was not a non-negative integer.
    #[display("Invalid input format. '{}' is not a non-negative integer.", _0)]
    NotANumber(String),
}

impl std::error::Error for ParsePositionError {}

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Parses `"<row> <col>"`, e.g. `"0 2"`. Surrounding whitespace is ignored.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let [row, col] = tokens.as_slice() else {
            return Err(ParsePositionError::WrongArity(tokens.len()));
        };
        Ok(Position::new(parse_index(row)?, parse_index(col)?))
    }
}

fn parse_index(token: &str) -> Result<usize, ParsePositionError> {
    // `usize::from_str` accepts a leading '+', which is not a plain digit string.
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParsePositionError::NotANumber(token.to_string()));
    }
    token
        .parse()
        .map_err(|_| ParsePositionError::NotANumber(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_integers() {
        assert_eq!("0 2".parse::<Position>(), Ok(Position::new(0, 2)));
        assert_eq!("  3\t1 \n".parse::<Position>(), Ok(Position::new(3, 1)));
    }

    #[test]
    fn test_parse_rejects_wrong_arity() {
        assert_eq!(
            "".parse::<Position>(),
            Err(ParsePositionError::WrongArity(0))
        );
        assert_eq!(
            "1 2 3".parse::<Position>(),
            Err(ParsePositionError::WrongArity(3))
        );
    }

    #[test]
    fn test_parse_rejects_signs_and_words() {
        assert!(matches!(
            "-1 2".parse::<Position>(),
            Err(ParsePositionError::NotANumber(t)) if t == "-1"
        ));
        assert!(matches!(
            "+1 2".parse::<Position>(),
            Err(ParsePositionError::NotANumber(_))
        ));
        assert!(matches!(
            "a b".parse::<Position>(),
            Err(ParsePositionError::NotANumber(_))
        ));
    }

    #[test]
    fn test_parse_error_message_is_descriptive() {
        let err = "x".parse::<Position>().unwrap_err();
        assert!(err.to_string().contains("two space-separated integers"));
    }
}
