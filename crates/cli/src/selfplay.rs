//! Engine against engine from the initial position.

use othello_core::disc::Player;
use othello_core::rules::Winner;
use othello_core::search::{Search, SearchOptions};
use tracing::{info, warn};

use crate::game::GameState;

/// Plays one game with separate engine settings for each side, printing
/// every move and the final result.
pub fn selfplay(black: &SearchOptions, white: &SearchOptions) {
    let engines = [Search::new(black), Search::new(white)];
    let mut game = GameState::new();

    while !game.is_game_over() {
        let side = game.side_to_move();
        let engine = match side {
            Player::Black => &engines[0],
            Player::White => &engines[1],
        };

        let result = engine.run(game.board(), side);
        match result.best_move {
            Some(sq) => {
                let ply = game.move_history().len() + 1;
                println!(
                    "{ply:>2}. {side:<5} {sq}  (score {:+}, nodes {})",
                    result.score.unwrap_or_default(),
                    result.n_nodes
                );
                if let Err(e) = game.make_move(sq) {
                    warn!(%e, "engine produced an unplayable move");
                    break;
                }
            }
            None => {
                println!("    {side:<5} passes");
                if let Err(e) = game.make_pass() {
                    warn!(%e, "engine could not pass");
                    break;
                }
            }
        }
    }

    println!();
    game.print();

    let (black_count, white_count) = game.score();
    let outcome = match game.winner() {
        Some(Winner::Black) => "Black wins",
        Some(Winner::White) => "White wins",
        Some(Winner::Tie) => "Draw",
        None => "Unfinished",
    };
    info!(black_count, white_count, outcome, "self-play finished");
    println!("\n{outcome} {black_count}-{white_count}");
}
