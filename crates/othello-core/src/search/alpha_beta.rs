//! Depth-limited minimax with alpha-beta pruning.
//!
//! Every child is searched on its own copy of the board, so sibling
//! branches never observe each other's moves.

use tracing::debug;

use crate::board::Board;
use crate::constants::SCORE_INF;
use crate::disc::Player;
use crate::eval;
use crate::move_list::MoveList;
use crate::rules;
use crate::search::role::Role;
use crate::search::search_context::SearchContext;
use crate::search::search_result::{RootMoveScore, SearchResult};
use crate::square::Square;
use crate::types::{Depth, Score};

/// Searches every legal move of `ctx.root` and keeps the best.
///
/// Each root move gets a fresh `(-inf, +inf)` window; root moves are not
/// pruned against each other. Only a strictly greater value replaces the
/// current best, so ties go to the first move in row-major order.
///
/// # Arguments
///
/// * `ctx` - Search context. `ctx.root` is the side to move.
/// * `board` - Position to select a move in.
/// * `depth` - Total depth including the root move.
pub fn search_root(ctx: &mut SearchContext, board: &Board, depth: Depth) -> SearchResult {
    let side_to_move = ctx.root;
    ctx.n_nodes += 1;

    let move_list = MoveList::new(board, side_to_move);
    if move_list.is_empty() {
        return SearchResult::no_move(depth, ctx.n_nodes);
    }

    let mut root_moves = Vec::with_capacity(move_list.count());
    let mut best: Option<RootMoveScore> = None;

    for sq in &move_list {
        let next = play(board, sq, side_to_move);
        let score = search(
            ctx,
            &next,
            depth.saturating_sub(1),
            -SCORE_INF,
            SCORE_INF,
            side_to_move.opponent(),
            Role::Min,
        );
        debug!(%sq, score, "root move searched");

        let root_move = RootMoveScore { sq, score };
        root_moves.push(root_move);
        if best.is_none_or(|b| score > b.score) {
            best = Some(root_move);
        }
    }

    SearchResult {
        best_move: best.map(|b| b.sq),
        score: best.map(|b| b.score),
        depth,
        n_nodes: ctx.n_nodes,
        root_moves,
        aborted: ctx.is_aborted(),
    }
}

/// Recursive alpha-beta search.
///
/// A node is a leaf when the depth is exhausted, the deadline has passed, or
/// `turn` has no legal move. The last case covers a full board and a game
/// where neither side can move, and it also stops at a side that would have
/// to pass: a pass is not searched as an extra ply. Leaves are always scored
/// for `ctx.root`, whichever side is to move there.
///
/// # Returns
///
/// The minimax value of `board` within the `(alpha, beta)` window.
pub fn search(
    ctx: &mut SearchContext,
    board: &Board,
    depth: Depth,
    mut alpha: Score,
    mut beta: Score,
    turn: Player,
    role: Role,
) -> Score {
    ctx.n_nodes += 1;

    if depth == 0 || ctx.is_out_of_time() {
        return eval::evaluate(board, ctx.root);
    }

    let move_list = MoveList::new(board, turn);
    if move_list.is_empty() {
        return eval::evaluate(board, ctx.root);
    }

    match role {
        Role::Max => {
            let mut best_score = -SCORE_INF;
            for sq in &move_list {
                let next = play(board, sq, turn);
                let score = search(
                    ctx,
                    &next,
                    depth - 1,
                    alpha,
                    beta,
                    turn.opponent(),
                    role.next(),
                );
                best_score = best_score.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            best_score
        }
        Role::Min => {
            let mut best_score = SCORE_INF;
            for sq in &move_list {
                let next = play(board, sq, turn);
                let score = search(
                    ctx,
                    &next,
                    depth - 1,
                    alpha,
                    beta,
                    turn.opponent(),
                    role.next(),
                );
                best_score = best_score.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best_score
        }
    }
}

/// Plays a generated move on a copy of `board`.
#[inline]
fn play(board: &Board, sq: Square, player: Player) -> Board {
    let mut next = *board;
    let applied = rules::apply_move(&mut next, sq, player);
    debug_assert!(applied, "generated move {sq} must be legal");
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_root(board: &Board, depth: Depth, player: Player) -> SearchResult {
        let mut ctx = SearchContext::new(player, None);
        search_root(&mut ctx, board, depth)
    }

    #[test]
    fn test_leaf_scores_root_player() {
        // At depth 0 the node is a leaf scored for the root, not for `turn`.
        let board = rules::make_move(&Board::new(), Square::new(2, 3), Player::Black).unwrap();
        let mut ctx = SearchContext::new(Player::Black, None);
        let score = search(&mut ctx, &board, 0, -SCORE_INF, SCORE_INF, Player::White, Role::Min);
        assert_eq!(score, 3);
        assert_eq!(ctx.n_nodes, 1);
    }

    #[test]
    fn test_side_without_moves_is_leaf() {
        // Black cannot move; the node is scored immediately even with depth left.
        let board = Board::from_string(
            "OX------\
             --------\
             --------\
             --------\
             --------\
             --------\
             --------\
             --------",
        )
        .unwrap();
        let mut ctx = SearchContext::new(Player::White, None);
        let score = search(&mut ctx, &board, 4, -SCORE_INF, SCORE_INF, Player::Black, Role::Min);
        assert_eq!(score, 0);
        assert_eq!(ctx.n_nodes, 1);
    }

    #[test]
    fn test_search_root_no_move() {
        let result = run_root(&Board::empty(), 3, Player::Black);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, None);
        assert!(result.root_moves.is_empty());
    }

    #[test]
    fn test_search_root_records_every_move() {
        let result = run_root(&Board::new(), 1, Player::Black);
        let squares: Vec<Square> = result.root_moves.iter().map(|rm| rm.sq).collect();
        assert_eq!(
            squares,
            vec![
                Square::new(2, 3),
                Square::new(3, 2),
                Square::new(4, 5),
                Square::new(5, 4),
            ]
        );
        assert!(result.root_moves.iter().all(|rm| rm.score == 3));
        // All tied: the first in row-major order wins.
        assert_eq!(result.best_move, Some(Square::new(2, 3)));
        assert_eq!(result.score, Some(3));
        assert_eq!(result.n_nodes, 5);
    }

    #[test]
    fn test_depth_zero_is_clamped() {
        let at_zero = run_root(&Board::new(), 0, Player::Black);
        let at_one = run_root(&Board::new(), 1, Player::Black);
        assert_eq!(at_zero.best_move, at_one.best_move);
        assert_eq!(at_zero.score, at_one.score);
    }
}
