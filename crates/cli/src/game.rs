//! Terminal rendering on top of the core game state.

use colored::Colorize;
use othello_core::board::Board;
use othello_core::disc::{Disc, Player};
use othello_core::game_state::{self, GameError};
use othello_core::rules::Winner;
use othello_core::square::Square;

/// A game with colored terminal display.
///
/// This is a thin wrapper around the core `GameState`; every rule decision
/// is delegated to it.
pub struct GameState {
    core: game_state::GameState,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            core: game_state::GameState::new(),
        }
    }

    pub fn board(&self) -> &Board {
        self.core.board()
    }

    /// Plays `sq` for the side to move.
    ///
    /// # Errors
    ///
    /// Returns `GameError::IllegalMove` and leaves the game untouched when
    /// `sq` is not legal.
    pub fn make_move(&mut self, sq: Square) -> Result<(), GameError> {
        self.core.make_move(sq)
    }

    pub fn make_pass(&mut self) -> Result<(), GameError> {
        self.core.make_pass()
    }

    pub fn side_to_move(&self) -> Player {
        self.core.side_to_move()
    }

    pub fn undo(&mut self) -> bool {
        self.core.undo()
    }

    pub fn is_game_over(&self) -> bool {
        self.core.is_game_over()
    }

    pub fn score(&self) -> (u32, u32) {
        self.core.score()
    }

    pub fn winner(&self) -> Option<Winner> {
        self.core.winner()
    }

    /// Returns the moves played so far, passes excluded.
    pub fn move_history(&self) -> Vec<Square> {
        self.core
            .move_history()
            .iter()
            .filter_map(|(sq, _, _)| *sq)
            .collect()
    }

    /// Prints a colored representation of the board to the terminal.
    ///
    /// Legal moves of the side to move are marked with a dot and the last
    /// move is highlighted.
    pub fn print(&self) {
        let board = self.core.board();
        let side_to_move = self.core.side_to_move();
        let last_move = self.core.last_move();
        let (black_count, white_count) = self.core.score();

        println!("      a   b   c   d   e   f   g   h");
        println!("    ┌───┬───┬───┬───┬───┬───┬───┬───┐");

        for row in 0..8 {
            print!("  {} │", row + 1);

            for col in 0..8 {
                let sq = Square::new(row, col);
                let is_last_move = Some(sq) == last_move;

                let symbol = match board.get(sq) {
                    Disc::Black if is_last_move => " X ".on_bright_black().bright_green(),
                    Disc::White if is_last_move => " O ".on_bright_black().bright_yellow(),
                    Disc::Black => " X ".bright_green(),
                    Disc::White => " O ".bright_yellow(),
                    Disc::Empty if self.core.is_legal_move(sq) => " · ".bright_cyan(),
                    Disc::Empty => "   ".black(),
                };
                print!("{symbol}│");
            }

            match row {
                2 => {
                    let player_info = match side_to_move {
                        Player::Black => "Black's turn (X)".bright_green(),
                        Player::White => "White's turn (O)".bright_yellow(),
                    };
                    println!("   {player_info}");
                }
                3 => println!("   Black: {}", format!("{black_count:2}").bright_green()),
                4 => println!("   White: {}", format!("{white_count:2}").bright_yellow()),
                6 => match self.core.winner() {
                    Some(Winner::Black) => println!("   {}", "Black wins!".bright_green()),
                    Some(Winner::White) => println!("   {}", "White wins!".bright_yellow()),
                    Some(Winner::Tie) => println!("   {}", "Draw".bright_cyan()),
                    None => println!(),
                },
                7 if self.core.is_game_over() => {
                    println!("   {}", "*** Game Over ***".bright_red())
                }
                _ => println!(),
            }

            if row < 7 {
                println!("    ├───┼───┼───┼───┼───┼───┼───┼───┤");
            }
        }

        println!("    └───┴───┴───┴───┴───┴───┴───┴───┘");
    }
}
