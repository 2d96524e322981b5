//! Othello rules engine and alpha-beta move selection.
//!
//! The crate is split the way the game is played: a [`board::Board`] stores
//! cells, [`rules`] derives legal moves and applies them, [`eval`] scores a
//! position and [`search`] walks the game tree to pick a move.

pub mod board;
pub mod constants;
pub mod disc;
pub mod eval;
pub mod flip;
pub mod game_state;
pub mod level;
pub mod move_list;
pub mod perft;
pub mod rules;
pub mod search;
pub mod square;
pub mod types;
