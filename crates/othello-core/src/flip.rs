//! Directional scanning for disc flips.
//!
//! Only the four orthogonal directions are scanned. Diagonals never
//! sandwich discs under this rule set.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::constants::BOARD_SIZE;
use crate::disc::Player;
use crate::square::Square;

/// Scan directions as (row, col) steps: up, down, left, right.
pub const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Upper bound on discs one placement can flip (a full run on each side).
pub const MAX_FLIPS: usize = DIRECTIONS.len() * (BOARD_SIZE - 2);

/// Cells flipped by a single placement.
pub type Flipped = ArrayVec<Square, MAX_FLIPS>;

/// Walks from `sq` in one direction over opponent discs.
///
/// # Returns
///
/// The number of opponent discs in the run if it is closed by a disc of
/// `player` before the edge or an empty cell, otherwise 0.
#[inline]
fn bracketed_run(
    board: &Board,
    sq: Square,
    (d_row, d_col): (isize, isize),
    player: Player,
) -> usize {
    let own = player.disc();
    let theirs = player.opponent().disc();

    let mut run = 0;
    let mut cur = sq.offset(d_row, d_col);
    while let Some(next) = cur {
        let disc = board.get(next);
        if disc == theirs {
            run += 1;
            cur = next.offset(d_row, d_col);
        } else if disc == own {
            return run;
        } else {
            return 0;
        }
    }
    0
}

/// Checks whether placing on `sq` would flip anything, without collecting.
#[inline]
pub fn has_flips(board: &Board, sq: Square, player: Player) -> bool {
    DIRECTIONS
        .iter()
        .any(|&dir| bracketed_run(board, sq, dir, player) > 0)
}

/// Computes the discs flipped by `player` placing on `sq`.
///
/// For each direction the maximal run of opponent discs adjacent to `sq` is
/// flipped only if a disc of `player` closes it. The occupancy of `sq`
/// itself is not checked here.
///
/// # Returns
///
/// The flipped squares, grouped by direction. Empty means the placement
/// does not sandwich anything.
pub fn flipped(board: &Board, sq: Square, player: Player) -> Flipped {
    let mut flipped = Flipped::new();
    for &(d_row, d_col) in &DIRECTIONS {
        let run = bracketed_run(board, sq, (d_row, d_col), player);
        let mut cur = sq;
        for _ in 0..run {
            // The run was bounded by an own disc, so each step stays on the board.
            match cur.offset(d_row, d_col) {
                Some(next) => {
                    flipped.push(next);
                    cur = next;
                }
                None => break,
            }
        }
    }
    flipped
}
