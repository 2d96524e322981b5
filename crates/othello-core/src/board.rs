//! Othello board representation as an 8x8 grid of cells.

use std::fmt;

use crate::constants::{BOARD_SIZE, BOARD_SQUARES};
use crate::disc::Disc;
use crate::square::Square;

/// An 8x8 grid of cell values.
///
/// The board has no identity beyond its cells: two boards with the same
/// contents compare equal and hash equal. It is `Copy`, so every copy is
/// fully independent of the original.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Disc; BOARD_SQUARES],
}

impl Default for Board {
    /// Creates a board with the standard starting position.
    ///
    /// The initial position has:
    /// - Black discs on e4 and d5
    /// - White discs on d4 and e5
    fn default() -> Self {
        let mut board = Board::empty();
        board.set(Square::new(3, 3), Disc::White);
        board.set(Square::new(4, 4), Disc::White);
        board.set(Square::new(3, 4), Disc::Black);
        board.set(Square::new(4, 3), Disc::Black);
        board
    }
}

/// Error type for parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("Invalid board length: expected 64 cells, got {0}")]
    InvalidLength(usize),
    #[error("Invalid cell character '{0}'")]
    InvalidCell(char),
}

impl Board {
    /// Creates a new `Board` with the initial setup.
    pub fn new() -> Board {
        Default::default()
    }

    /// Creates a board with every cell empty.
    pub fn empty() -> Board {
        Board {
            cells: [Disc::Empty; BOARD_SQUARES],
        }
    }

    /// Creates a `Board` from a string representation.
    ///
    /// The string holds 64 cell characters from a1 to h8 in row-major order.
    /// Whitespace is skipped, so a board may be written one row per line.
    /// - `'X'` for Black
    /// - `'O'` for White
    /// - `'-'` or `'.'` for empty
    ///
    /// # Errors
    ///
    /// Returns `BoardError` on an unknown character or a cell count other than 64.
    pub fn from_string(board_string: &str) -> Result<Board, BoardError> {
        let mut board = Board::empty();
        let mut n_cells = 0;
        for c in board_string.chars().filter(|c| !c.is_whitespace()) {
            let disc = Disc::from_char(c).ok_or(BoardError::InvalidCell(c))?;
            if n_cells < BOARD_SQUARES {
                board.cells[n_cells] = disc;
            }
            n_cells += 1;
        }

        if n_cells != BOARD_SQUARES {
            return Err(BoardError::InvalidLength(n_cells));
        }
        Ok(board)
    }

    /// Gets the disc on a square.
    #[inline(always)]
    pub fn get(&self, sq: Square) -> Disc {
        self.cells[sq.index()]
    }

    /// Gets the disc at a row and column.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of range.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> Disc {
        self.get(Square::new(row, col))
    }

    /// Sets the disc on a square.
    #[inline(always)]
    pub fn set(&mut self, sq: Square, disc: Disc) {
        self.cells[sq.index()] = disc;
    }

    /// Checks if a given square is empty.
    #[inline]
    pub fn is_square_empty(&self, sq: Square) -> bool {
        self.get(sq).is_empty()
    }

    /// Returns the number of cells holding `disc`.
    pub fn count(&self, disc: Disc) -> u32 {
        self.cells.iter().filter(|&&cell| cell == disc).count() as u32
    }

    /// Returns the number of empty cells.
    #[inline]
    pub fn empty_count(&self) -> u32 {
        self.count(Disc::Empty)
    }

    /// Returns the number of occupied cells.
    #[inline]
    pub fn disc_count(&self) -> u32 {
        BOARD_SQUARES as u32 - self.empty_count()
    }

    /// Returns `true` when all 64 cells are occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.disc_count() == BOARD_SQUARES as u32
    }

    /// Converts the board to an 8-line string, one row per line.
    pub fn to_string_as_board(&self) -> String {
        let mut s = String::with_capacity(BOARD_SQUARES + BOARD_SIZE);
        for sq in Square::iter() {
            if sq.index() > 0 && sq.col() == 0 {
                s.push('\n');
            }
            s.push(self.get(sq).to_char());
        }
        s
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_as_board())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_board() {
        let board = Board::default();
        assert_eq!(board.count(Disc::Black), 2);
        assert_eq!(board.count(Disc::White), 2);
        assert_eq!(board.empty_count(), 60);
        assert_eq!(board.disc_count(), 4);
        assert!(!board.is_full());
    }

    #[test]
    fn test_initial_diagonals() {
        let board = Board::new();
        assert_eq!(board.at(3, 3), Disc::White);
        assert_eq!(board.at(4, 4), Disc::White);
        assert_eq!(board.at(3, 4), Disc::Black);
        assert_eq!(board.at(4, 3), Disc::Black);

        for sq in Square::iter() {
            let center = (3..=4).contains(&sq.row()) && (3..=4).contains(&sq.col());
            assert_eq!(board.get(sq).is_empty(), !center, "{sq}");
        }
    }

    #[test]
    fn test_copy_is_independent() {
        let board = Board::new();
        let mut copy = board;
        copy.set(Square::new(0, 0), Disc::Black);

        assert_eq!(board.at(0, 0), Disc::Empty);
        assert_eq!(copy.at(0, 0), Disc::Black);
        assert_ne!(board, copy);
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string(
            "--------\
             --------\
             --------\
             ---OX---\
             ---XO---\
             --------\
             --------\
             --------",
        )
        .unwrap();
        assert_eq!(board, Board::new());

        let dotted = Board::from_string(&".".repeat(64)).unwrap();
        assert_eq!(dotted, Board::empty());
    }

    #[test]
    fn test_from_string_errors() {
        assert_eq!(
            Board::from_string("---"),
            Err(BoardError::InvalidLength(3))
        );
        assert_eq!(
            Board::from_string(&"-".repeat(65)),
            Err(BoardError::InvalidLength(65))
        );
        let mut bad = "-".repeat(63);
        bad.push('Z');
        assert_eq!(Board::from_string(&bad), Err(BoardError::InvalidCell('Z')));
    }

    #[test]
    fn test_is_full() {
        let full = Board::from_string(&"XO".repeat(32)).unwrap();
        assert!(full.is_full());
        assert_eq!(full.empty_count(), 0);
        assert_eq!(full.count(Disc::Black), 32);
        assert_eq!(full.count(Disc::White), 32);
    }

    #[test]
    fn test_display() {
        let board = Board::new();
        let expected_display = "--------\n\
                                --------\n\
                                --------\n\
                                ---OX---\n\
                                ---XO---\n\
                                --------\n\
                                --------\n\
                                --------";
        assert_eq!(format!("{board}"), expected_display);
        assert_eq!(Board::from_string(&board.to_string()).unwrap(), board);
    }
}
