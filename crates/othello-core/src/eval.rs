//! Position evaluation.

use crate::board::Board;
use crate::disc::Player;
use crate::types::Score;

/// Scores `board` from `player`'s point of view.
///
/// The score is the disc difference: discs owned by `player` minus discs
/// owned by the opponent. No positional weighting is applied.
#[inline]
pub fn evaluate(board: &Board, player: Player) -> Score {
    let own = board.count(player.disc()) as Score;
    let theirs = board.count(player.opponent().disc()) as Score;
    own - theirs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{SCORE_MAX, SCORE_MIN};
    use crate::rules;
    use crate::square::Square;

    #[test]
    fn test_evaluate_initial() {
        let board = Board::new();
        assert_eq!(evaluate(&board, Player::Black), 0);
        assert_eq!(evaluate(&board, Player::White), 0);
    }

    #[test]
    fn test_evaluate_is_antisymmetric() {
        let board = rules::make_move(&Board::new(), Square::new(2, 3), Player::Black).unwrap();
        assert_eq!(evaluate(&board, Player::Black), 3);
        assert_eq!(evaluate(&board, Player::White), -3);
    }

    #[test]
    fn test_evaluate_bounds() {
        let black = Board::from_string(&"X".repeat(64)).unwrap();
        assert_eq!(evaluate(&black, Player::Black), SCORE_MAX);
        assert_eq!(evaluate(&black, Player::White), SCORE_MIN);
        assert_eq!(evaluate(&Board::empty(), Player::Black), 0);
    }
}
