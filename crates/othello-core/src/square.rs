use std::fmt;
use std::str::FromStr;

use crate::constants::{BOARD_SIZE, BOARD_SQUARES};

/// Represents a cell on the board by zero-based row and column.
///
/// Cells are indexed in row-major order and named in algebraic notation,
/// where the file letter is the column and the rank digit is `row + 1`:
///
/// ```text
///      a  b  c  d  e  f  g  h
/// 1   00 01 02 03 04 05 06 07
/// 2   08 09 10 11 12 13 14 15
/// 3   16 17 18 19 20 21 22 23
/// 4   24 25 26 27 28 29 30 31
/// 5   32 33 34 35 36 37 38 39
/// 6   40 41 42 43 44 45 46 47
/// 7   48 49 50 51 52 53 54 55
/// 8   56 57 58 59 60 61 62 63
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Creates a `Square` from row and column coordinates.
    ///
    /// # Panics
    ///
    /// Panics if either `row` or `col` is >= 8. Out-of-range coordinates are
    /// a caller bug, not a recoverable condition.
    #[inline]
    pub fn new(row: usize, col: usize) -> Square {
        assert!(row < BOARD_SIZE, "Invalid row: {row}");
        assert!(col < BOARD_SIZE, "Invalid col: {col}");
        Square((row * BOARD_SIZE + col) as u8)
    }

    /// Returns the row-major index (0-63).
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the row (0-7), 0 being the top rank `1`.
    #[inline]
    pub fn row(self) -> usize {
        self.index() / BOARD_SIZE
    }

    /// Returns the column (0-7), 0 being file `a`.
    #[inline]
    pub fn col(self) -> usize {
        self.index() % BOARD_SIZE
    }

    /// Steps one cell in the given direction.
    ///
    /// # Returns
    ///
    /// `None` if the step leaves the board.
    #[inline]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Square> {
        let row = self.row().checked_add_signed(d_row)?;
        let col = self.col().checked_add_signed(d_col)?;
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square((row * BOARD_SIZE + col) as u8))
        } else {
            None
        }
    }

    /// Returns an iterator over all 64 squares in row-major order.
    #[inline]
    pub fn iter() -> impl Iterator<Item = Square> {
        (0..BOARD_SQUARES as u8).map(Square)
    }
}

/// Error type for parsing a square from algebraic notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SquareError {
    #[error("Invalid square format: must be 2 characters (e.g., 'd3')")]
    InvalidFormat,
    #[error("Invalid file '{0}': must be a-h or A-H")]
    InvalidFile(char),
    #[error("Invalid rank '{0}': must be 1-8")]
    InvalidRank(char),
}

impl FromStr for Square {
    type Err = SquareError;

    /// Parses algebraic notation such as `"d3"` (column d, row 2).
    /// Both uppercase and lowercase files are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(SquareError::InvalidFormat);
        };

        let file = file_char.to_ascii_lowercase();
        if !('a'..='h').contains(&file) {
            return Err(SquareError::InvalidFile(file_char));
        }
        if !('1'..='8').contains(&rank_char) {
            return Err(SquareError::InvalidRank(rank_char));
        }

        let col = (file as u8 - b'a') as usize;
        let row = (rank_char as u8 - b'1') as usize;
        Ok(Square::new(row, col))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (self.col() as u8 + b'a') as char;
        let rank = (self.row() as u8 + b'1') as char;
        write!(f, "{file}{rank}")
    }
}
