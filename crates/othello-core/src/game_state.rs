//! Game state management for Othello.
//!
//! This module provides the `GameState` struct which owns the authoritative
//! board and handles making moves, automatic passing when the next side has
//! no legal move, and game termination detection.

use crate::board::Board;
use crate::disc::{Disc, Player};
use crate::rules::{self, Winner};
use crate::square::Square;

/// Errors reported by [`GameState`] commands.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("Illegal move: {0}")]
    IllegalMove(Square),
    #[error("Cannot pass when legal moves are available")]
    PassNotAllowed,
    #[error("Game is over")]
    GameOver,
}

/// One history entry: the move (`None` for a pass), the board before it and
/// the side that was to move.
pub type HistoryEntry = (Option<Square>, Board, Player);

/// Represents the state of an Othello game.
#[derive(Clone, Debug)]
pub struct GameState {
    /// The current board position.
    board: Board,
    /// Which player's turn it is to move.
    side_to_move: Player,
    history: Vec<HistoryEntry>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a new game in the initial position with Black to move.
    pub fn new() -> Self {
        Self::from_board(Board::new(), Player::Black)
    }

    /// Creates a new game state from an existing board position.
    ///
    /// # Arguments
    ///
    /// * `board` - The board position to start from
    /// * `side_to_move` - Which player moves next
    pub fn from_board(board: Board, side_to_move: Player) -> Self {
        Self {
            board,
            side_to_move,
            history: Vec::new(),
        }
    }

    /// Returns a reference to the current board position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns which player's turn it is to move.
    pub fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    /// Checks if the side to move may play on `sq`.
    pub fn is_legal_move(&self, sq: Square) -> bool {
        rules::is_legal_move(&self.board, sq, self.side_to_move)
    }

    /// Checks if the side to move has any legal move.
    pub fn has_legal_move(&self) -> bool {
        !rules::has_no_legal_move(&self.board, self.side_to_move)
    }

    /// Executes a move for the side to move.
    ///
    /// After the move the turn passes to the opponent. If the opponent has no
    /// legal move but the game is not over, a pass is recorded and the turn
    /// comes straight back.
    ///
    /// # Errors
    ///
    /// Returns `GameError::IllegalMove` if the move is not legal; the board
    /// is left unchanged.
    pub fn make_move(&mut self, sq: Square) -> Result<(), GameError> {
        let mut next = self.board;
        if !rules::apply_move(&mut next, sq, self.side_to_move) {
            return Err(GameError::IllegalMove(sq));
        }

        self.history.push((Some(sq), self.board, self.side_to_move));
        self.board = next;
        self.side_to_move = self.side_to_move.opponent();

        if !self.has_legal_move() && !self.is_game_over() {
            self.handle_pass();
        }

        Ok(())
    }

    /// Executes a pass (switching sides without placing a disc).
    ///
    /// # Errors
    ///
    /// Returns `GameError::PassNotAllowed` if the side to move has a legal
    /// move, or `GameError::GameOver` if neither side can move.
    pub fn make_pass(&mut self) -> Result<(), GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        if self.has_legal_move() {
            return Err(GameError::PassNotAllowed);
        }

        self.handle_pass();
        Ok(())
    }

    fn handle_pass(&mut self) {
        self.history.push((None, self.board, self.side_to_move));
        self.side_to_move = self.side_to_move.opponent();
    }

    /// Checks if the game has ended: the board is full or neither side can move.
    pub fn is_game_over(&self) -> bool {
        rules::is_terminal(&self.board, self.side_to_move)
    }

    /// Returns the disc count for both players as `(black, white)`.
    pub fn score(&self) -> (u32, u32) {
        (self.board.count(Disc::Black), self.board.count(Disc::White))
    }

    /// Returns the winner once the game is over, `None` while it is running.
    pub fn winner(&self) -> Option<Winner> {
        self.is_game_over().then(|| rules::winner(&self.board))
    }

    /// Returns the last move played.
    ///
    /// # Returns
    ///
    /// `None` if the last entry was a pass or no moves have been played yet.
    pub fn last_move(&self) -> Option<Square> {
        self.history.last().and_then(|(sq, _, _)| *sq)
    }

    /// Returns the move history, oldest first. `None` entries are passes.
    pub fn move_history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Undoes the last history entry, a move or a pass.
    ///
    /// # Returns
    ///
    /// `true` if something was undone, `false` if the history is empty.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some((_, prev_board, prev_side)) => {
                self.board = prev_board;
                self.side_to_move = prev_side;
                true
            }
            None => false,
        }
    }
}
