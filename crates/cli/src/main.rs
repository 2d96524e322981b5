mod analyze;
mod game;
mod selfplay;
mod ui;

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand};
use othello_core::level::Level;
use othello_core::search::SearchOptions;
use othello_core::types::Depth;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Clone)]
struct EngineParams {
    /// Difficulty level: easy, medium or hard
    #[arg(short, long, default_value = "medium")]
    level: Level,

    /// Fixed search depth in plies (overrides --level)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=60))]
    depth: Option<Depth>,

    /// Per-move time budget in milliseconds
    #[arg(long = "time-limit-ms", value_name = "MS")]
    time_limit_ms: Option<u64>,
}

impl EngineParams {
    fn search_options(&self) -> SearchOptions {
        let mut options = SearchOptions::with_level(self.level);
        if let Some(depth) = self.depth {
            options.depth = depth;
        }
        options.time_limit = self.time_limit_ms.map(Duration::from_millis);
        options
    }
}

#[derive(Parser, Debug)]
#[command(name = "othello", version, about = "Play Othello against an alpha-beta engine")]
struct Cli {
    #[command(subcommand)]
    command: Option<SubCommands>,

    #[command(flatten)]
    engine_params: EngineParams,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum SubCommands {
    /// Select a move for every position listed in a file
    Analyze {
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,
    },
    /// Let the engine play a full game against itself
    Selfplay {
        /// Level used for Black (defaults to --level)
        #[arg(long)]
        black: Option<Level>,

        /// Level used for White (defaults to --level)
        #[arg(long)]
        white: Option<Level>,
    },
}

fn init_logging(verbose: u8) {
    let default_directive = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose);

    let options = args.engine_params.search_options();
    match args.command {
        Some(SubCommands::Analyze { file }) => analyze::analyze(&file, &options),
        Some(SubCommands::Selfplay { black, white }) => {
            let black = black.map_or_else(|| options.clone(), |l| with_level(&options, l));
            let white = white.map_or_else(|| options.clone(), |l| with_level(&options, l));
            selfplay::selfplay(&black, &white);
            Ok(())
        }
        None => ui::ui_loop(&options),
    }
}

/// Replaces the depth of `options` with that of `level`, keeping the time limit.
fn with_level(options: &SearchOptions, level: Level) -> SearchOptions {
    SearchOptions {
        depth: level.depth(),
        ..options.clone()
    }
}
