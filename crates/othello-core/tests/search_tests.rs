use othello_core::board::Board;
use othello_core::constants::SCORE_INF;
use othello_core::disc::Player;
use othello_core::eval;
use othello_core::level::Level;
use othello_core::rules;
use othello_core::search::options::SearchOptions;
use othello_core::search::{self, Role, Search, alpha_beta, select_best_move};
use othello_core::square::Square;
use othello_core::types::{Depth, Score};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

fn midgame() -> Board {
    Board::from_string(
        "--------\
         --------\
         --------\
         ---OX---\
         --XXX---\
         -OOOOO--\
         ---X----\
         ---X----",
    )
    .unwrap()
}

/// Plain minimax without pruning, scored for `root`.
fn minimax(board: &Board, depth: Depth, turn: Player, root: Player) -> Score {
    let moves = rules::legal_moves(board, turn);
    if depth == 0 || moves.is_empty() {
        return eval::evaluate(board, root);
    }

    let scores = moves.iter().map(|sq| {
        let next = rules::make_move(board, sq, turn).unwrap();
        minimax(&next, depth - 1, turn.opponent(), root)
    });
    if turn == root {
        scores.max().unwrap()
    } else {
        scores.min().unwrap()
    }
}

/// Plays `plies` random moves from the initial position.
fn random_position(rng: &mut StdRng, plies: usize) -> (Board, Player) {
    let mut board = Board::new();
    let mut player = Player::Black;
    for _ in 0..plies {
        if rules::is_terminal(&board, player) {
            break;
        }
        let moves = rules::legal_moves(&board, player);
        if let Some(&sq) = moves.as_slice().choose(rng) {
            assert!(rules::apply_move(&mut board, sq, player));
        }
        player = player.opponent();
    }
    (board, player)
}

#[test]
fn test_midgame_best_moves() {
    let board = midgame();
    let expected: [(Depth, (usize, usize), Score, [Score; 4]); 4] = [
        (1, (2, 3), 3, [3, 3, 3, 3]),
        (2, (6, 4), 0, [-4, -2, -2, 0]),
        (3, (6, 4), 7, [1, 1, 5, 7]),
        (4, (6, 4), 0, [-6, -4, -2, 0]),
    ];

    for (depth, (row, col), score, root_scores) in expected {
        let result = Search::new(&SearchOptions::with_depth(depth)).run(&board, Player::Black);
        assert_eq!(result.best_move, Some(Square::new(row, col)), "depth {depth}");
        assert_eq!(result.score, Some(score), "depth {depth}");

        let squares: Vec<Square> = result.root_moves.iter().map(|rm| rm.sq).collect();
        assert_eq!(
            squares,
            vec![
                Square::new(2, 3),
                Square::new(3, 2),
                Square::new(6, 2),
                Square::new(6, 4),
            ]
        );
        let scores: Vec<Score> = result.root_moves.iter().map(|rm| rm.score).collect();
        assert_eq!(scores, root_scores.to_vec(), "depth {depth}");
    }
}

#[test]
fn test_initial_position_all_levels() {
    let board = Board::new();
    for (depth, score) in [(1, 3), (2, 0), (3, 3), (4, 0), (5, 3)] {
        let result = Search::new(&SearchOptions::with_depth(depth)).run(&board, Player::Black);
        assert_eq!(result.best_move, Some(Square::new(2, 3)));
        assert_eq!(result.score, Some(score));
    }
}

#[test]
fn test_alpha_beta_matches_minimax() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..40 {
        let plies = rng.random_range(0..30);
        let (board, player) = random_position(&mut rng, plies);
        let depth = rng.random_range(1..=4);

        let result = Search::new(&SearchOptions::with_depth(depth)).run(&board, player);
        let moves = rules::legal_moves(&board, player);
        if moves.is_empty() {
            assert_eq!(result.best_move, None);
            continue;
        }

        assert_eq!(result.score, Some(minimax(&board, depth, player, player)));
        for rm in &result.root_moves {
            let next = rules::make_move(&board, rm.sq, player).unwrap();
            assert_eq!(rm.score, minimax(&next, depth - 1, player.opponent(), player));
        }

        let best = result.best_move.unwrap();
        assert!(rules::is_legal_move(&board, best, player));
        // The first move reaching the maximum wins ties.
        let first_best = result
            .root_moves
            .iter()
            .find(|rm| Some(rm.score) == result.score)
            .map(|rm| rm.sq);
        assert_eq!(Some(best), first_best);
    }
}

#[test]
fn test_alpha_beta_from_max_node_matches_minimax() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        let plies = rng.random_range(4..24);
        let (board, player) = random_position(&mut rng, plies);
        let depth = rng.random_range(1..=3);
        let full = alpha_beta(&board, depth, -SCORE_INF, SCORE_INF, player, Role::Max);
        assert_eq!(full, minimax(&board, depth, player, player));
    }
}

#[test]
fn test_search_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..10 {
        let plies = rng.random_range(0..20);
        let (board, player) = random_position(&mut rng, plies);
        for level in Level::ALL {
            let first = select_best_move(&board, level.depth(), player);
            let second = select_best_move(&board, level.depth(), player);
            assert_eq!(first, second);
        }
    }
}

#[test]
fn test_search_does_not_modify_board() {
    let board = midgame();
    let before = board;
    let _ = search::select_best_move(&board, 4, Player::Black);
    assert_eq!(board, before);
}
