//! Interactive line-based game loop.

use anyhow::Context;
use othello_core::disc::Player;
use othello_core::level::Level;
use othello_core::search::{Search, SearchOptions};
use othello_core::square::Square;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::{info, warn};

use crate::game::GameState;

/// Who plays which side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameMode {
    BlackHumanWhiteAi,
    BlackAiWhiteHuman,
    AiVsAi,
    HumanVsHuman,
}

impl GameMode {
    fn from_index(index: usize) -> Option<GameMode> {
        match index {
            0 => Some(GameMode::BlackHumanWhiteAi),
            1 => Some(GameMode::BlackAiWhiteHuman),
            2 => Some(GameMode::AiVsAi),
            3 => Some(GameMode::HumanVsHuman),
            _ => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    fn has_human(self) -> bool {
        self != GameMode::AiVsAi
    }

    fn is_ai(self, side: Player) -> bool {
        matches!(
            (self, side),
            (GameMode::BlackHumanWhiteAi, Player::White)
                | (GameMode::BlackAiWhiteHuman, Player::Black)
                | (GameMode::AiVsAi, _)
        )
    }
}

/// Runs the interactive loop until `quit` or end of input.
///
/// The engine moves on its own whenever the current mode assigns it the side
/// to move.
pub fn ui_loop(options: &SearchOptions) -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new().context("failed to initialize line editor")?;
    let mut game = GameState::new();
    let mut search = Search::new(options);
    let mut game_mode = GameMode::BlackHumanWhiteAi;

    loop {
        game.print();
        println!();

        if game_mode.is_ai(game.side_to_move()) && !game.is_game_over() {
            engine_move(&mut game, &search, false);
            continue;
        }

        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("failed to read input"),
        };
        let _ = rl.add_history_entry(&line);

        let mut parts = line.split_whitespace();
        let Some(cmd) = parts.next() else {
            continue;
        };
        println!();

        match cmd {
            "new" | "n" => {
                game = GameState::new();
                info!("new game");
            }
            "undo" | "u" => {
                if !undo_to_human(&mut game, game_mode) {
                    println!("Cannot undo.");
                }
            }
            "pass" | "p" => {
                if let Err(e) = game.make_pass() {
                    println!("{e}\n");
                }
            }
            "go" => engine_move(&mut game, &search, true),
            "level" | "l" => match parts.next().map(str::parse::<Level>) {
                Some(Ok(level)) => {
                    search.set_level(level);
                    println!("Level changed to: {level} (depth {})", level.depth());
                }
                Some(Err(e)) => println!("{e}"),
                None => println!("Current depth: {}", search.options().depth),
            },
            "mode" | "m" => match parts.next() {
                Some(mode_str) => {
                    match mode_str.parse::<usize>().ok().and_then(GameMode::from_index) {
                        Some(mode) => {
                            game_mode = mode;
                            println!("Mode changed to: {}", mode.index());
                        }
                        None => {
                            println!("Invalid mode number. Please specify a value between 0-3.")
                        }
                    }
                }
                None => print_modes(game_mode),
            },
            "help" | "h" | "?" => print_help(),
            "quit" | "q" => break,
            _ => match cmd.parse::<Square>() {
                Ok(sq) => {
                    if game.make_move(sq).is_err() {
                        println!("Illegal move: {cmd}\n");
                    }
                }
                Err(_) => println!("Unknown command: {cmd}\n"),
            },
        }
    }

    Ok(())
}

/// Takes back the last entry, then keeps going until a human is to move.
///
/// Without the extra steps the engine would replay the move just undone.
fn undo_to_human(game: &mut GameState, mode: GameMode) -> bool {
    if !game.undo() {
        return false;
    }
    while mode.has_human() && mode.is_ai(game.side_to_move()) && game.undo() {}
    true
}

/// Lets the engine play for the side to move, passing when it has no move.
fn engine_move(game: &mut GameState, search: &Search, verbose: bool) {
    if game.is_game_over() {
        println!("Game is over.\n");
        return;
    }

    let result = search.run(game.board(), game.side_to_move());
    match result.best_move {
        Some(sq) => {
            if let Err(e) = game.make_move(sq) {
                warn!(%e, "engine produced an unplayable move");
                return;
            }
            if verbose {
                println!("depth | score | nodes ");
                println!("----------------------");
                println!(
                    "{:>5} | {:>5} | {}\n",
                    result.depth,
                    result.score.unwrap_or_default(),
                    result.n_nodes
                );
            }
            println!("Computer plays {sq}\n");
        }
        None => match game.make_pass() {
            Ok(()) => println!("Computer passes\n"),
            Err(e) => warn!(%e, "engine could not pass"),
        },
    }
}

fn print_modes(current: GameMode) {
    println!("Current mode: {}", current.index());
    println!("0: Black-Human, White-AI");
    println!("1: Black-AI, White-Human");
    println!("2: Black-AI, White-AI");
    println!("3: Black-Human, White-Human");
}

fn print_help() {
    println!("Commands:");
    println!("  <square>        play a move, e.g. d3");
    println!("  go              let the engine move for the side to move");
    println!("  pass            pass when no move is available");
    println!("  undo            take back the last move");
    println!("  new             start a new game");
    println!("  level <name>    easy, medium or hard");
    println!("  mode <0-3>      choose who plays which side");
    println!("  help            show this message");
    println!("  quit            exit");
}
