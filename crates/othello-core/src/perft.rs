use crate::board::Board;
use crate::disc::Player;
use crate::move_list::MoveList;
use crate::rules;

/// Executes a perft run starting from the standard initial position.
///
/// # Arguments
///
/// * `depth` - Number of plies to expand from the initial position. A depth of
///   `1` counts the immediate legal moves; larger values walk the tree
///   recursively.
///
/// # Returns
///
/// The total node count the search visits from the initial position.
pub fn perft_root(depth: u32) -> u64 {
    perft(&Board::new(), Player::Black, depth)
}

/// Counts leaf nodes `depth` plies below `board` with `side_to_move` to play.
///
/// A forced pass hands the turn over without using up depth. A position where
/// neither side can move counts as a single leaf.
pub fn perft(board: &Board, side_to_move: Player, depth: u32) -> u64 {
    let mut nodes = 0;
    let move_list = MoveList::new(board, side_to_move);

    if !move_list.is_empty() {
        for sq in move_list.iter() {
            if depth <= 1 {
                nodes += 1;
            } else if let Some(next) = rules::make_move(board, sq, side_to_move) {
                nodes += perft(&next, side_to_move.opponent(), depth - 1);
            }
        }
    } else if rules::has_legal_move(board, side_to_move.opponent()) {
        nodes += perft(board, side_to_move.opponent(), depth);
    } else {
        nodes += 1;
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perft_shallow() {
        assert_eq!(perft_root(1), 4);
        assert_eq!(perft_root(2), 8);
        assert_eq!(perft_root(3), 20);
        assert_eq!(perft_root(4), 44);
    }

    #[test]
    fn test_perft_finished_game_is_one_node() {
        assert_eq!(perft(&Board::empty(), Player::Black, 5), 1);
    }
}
