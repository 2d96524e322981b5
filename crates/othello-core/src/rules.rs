//! Game rules as pure functions over a [`Board`].
//!
//! Legality is decided by orthogonal sandwiching only (see [`crate::flip`]).
//! A side without a legal move must pass; the game ends when the board is
//! full or neither side can move.

use crate::board::Board;
use crate::disc::{Disc, Player};
use crate::flip;
use crate::move_list::MoveList;
use crate::square::Square;

/// Final result of a game, decided by disc count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    Black,
    White,
    Tie,
}

/// Checks if `player` may place a disc on `sq`.
///
/// The cell must be empty and at least one orthogonal direction must hold
/// one or more opponent discs closed off by a disc of `player`.
#[inline]
pub fn is_legal_move(board: &Board, sq: Square, player: Player) -> bool {
    board.is_square_empty(sq) && flip::has_flips(board, sq, player)
}

/// Places a disc for `player` on `sq` and flips every bracketed run.
///
/// # Returns
///
/// `true` if the move was applied. An illegal move returns `false` and
/// leaves the board untouched.
pub fn apply_move(board: &mut Board, sq: Square, player: Player) -> bool {
    if !board.is_square_empty(sq) {
        return false;
    }

    let flipped = flip::flipped(board, sq, player);
    if flipped.is_empty() {
        return false;
    }

    let disc = player.disc();
    board.set(sq, disc);
    for flip_sq in flipped {
        board.set(flip_sq, disc);
    }
    true
}

/// Applies a move to a copy of the board.
///
/// # Returns
///
/// `Some(Board)` with the position after the move, `None` if the move is
/// illegal. The input board is never modified.
#[inline]
pub fn make_move(board: &Board, sq: Square, player: Player) -> Option<Board> {
    let mut next = *board;
    apply_move(&mut next, sq, player).then_some(next)
}

/// Returns all legal moves for `player` in row-major order.
#[inline]
pub fn legal_moves(board: &Board, player: Player) -> MoveList {
    MoveList::new(board, player)
}

/// Checks if `player` has at least one legal move, stopping at the first.
#[inline]
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    Square::iter().any(|sq| is_legal_move(board, sq, player))
}

/// Returns `true` if the board is full or `player` cannot move.
pub fn has_no_legal_move(board: &Board, player: Player) -> bool {
    board.is_full() || !has_legal_move(board, player)
}

/// Checks whether the game has ended.
///
/// The game is over when the board is full or neither side can move. A side
/// that merely has no move passes, so `player` is tested first and then the
/// opponent.
pub fn is_terminal(board: &Board, player: Player) -> bool {
    if board.is_full() {
        return true;
    }
    !has_legal_move(board, player) && !has_legal_move(board, player.opponent())
}

/// Decides the winner by comparing disc counts.
pub fn winner(board: &Board) -> Winner {
    let black = board.count(Disc::Black);
    let white = board.count(Disc::White);
    match black.cmp(&white) {
        std::cmp::Ordering::Greater => Winner::Black,
        std::cmp::Ordering::Less => Winner::White,
        std::cmp::Ordering::Equal => Winner::Tie,
    }
}
