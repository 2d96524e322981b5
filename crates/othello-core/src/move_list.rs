//! Legal move generation in row-major order.

use arrayvec::ArrayVec;
use std::slice;

use crate::board::Board;
use crate::constants::BOARD_SQUARES;
use crate::disc::Player;
use crate::flip;
use crate::square::Square;

/// Upper bound on the number of moves in a position (one per cell).
const MAX_MOVES: usize = BOARD_SQUARES;

/// The legal moves of one side, in row-major scan order.
///
/// The order is part of the contract: the search keeps the first of several
/// equally valued moves, so ties resolve toward the top-left.
#[derive(Clone, Debug, Default)]
pub struct MoveList {
    moves: ArrayVec<Square, MAX_MOVES>,
}

impl MoveList {
    /// Generates all legal moves for `player`.
    pub fn new(board: &Board, player: Player) -> MoveList {
        let moves = Square::iter()
            .filter(|&sq| board.is_square_empty(sq) && flip::has_flips(board, sq, player))
            .collect();
        MoveList { moves }
    }

    /// Returns the number of moves.
    #[inline]
    pub fn count(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns the first move in scan order.
    #[inline]
    pub fn first(&self) -> Option<Square> {
        self.moves.first().copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Square] {
        &self.moves
    }

    #[inline]
    pub fn iter(&self) -> std::iter::Copied<slice::Iter<'_, Square>> {
        self.moves.iter().copied()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = Square;
    type IntoIter = std::iter::Copied<slice::Iter<'a, Square>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_moves_black() {
        let move_list = MoveList::new(&Board::new(), Player::Black);
        assert_eq!(
            move_list.as_slice(),
            &[
                Square::new(2, 3),
                Square::new(3, 2),
                Square::new(4, 5),
                Square::new(5, 4),
            ]
        );
        assert_eq!(move_list.first(), Some(Square::new(2, 3)));
    }

    #[test]
    fn test_initial_moves_white() {
        let move_list = MoveList::new(&Board::new(), Player::White);
        assert_eq!(
            move_list.as_slice(),
            &[
                Square::new(2, 4),
                Square::new(3, 5),
                Square::new(4, 2),
                Square::new(5, 3),
            ]
        );
    }

    #[test]
    fn test_empty_board_has_no_moves() {
        let move_list = MoveList::new(&Board::empty(), Player::Black);
        assert!(move_list.is_empty());
        assert_eq!(move_list.count(), 0);
        assert_eq!(move_list.first(), None);
    }
}
