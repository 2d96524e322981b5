use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, bail};
use othello_core::board::Board;
use othello_core::disc::Player;
use othello_core::search::{Search, SearchOptions};
use tracing::warn;

/// Runs a search on every position in `file_path` and prints one table row each.
///
/// Each non-empty line holds 64 board cells followed by the side to move
/// (`X` or `O`). Text after `%` is a comment.
pub fn analyze(file_path: &Path, options: &SearchOptions) -> anyhow::Result<()> {
    let file =
        File::open(file_path).with_context(|| format!("cannot open {}", file_path.display()))?;
    let reader = BufReader::new(file);
    let search = Search::new(options);

    println!(
        "| {:^3} | {:^5} | {:^5} | {:^9} | {:^11} | {:^10} | {:^4} |",
        "#", "Depth", "Score", "Time", "Nodes", "N/s", "Move"
    );
    println!("|-----|-------|-------|-----------|-------------|------------|------|");

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read line {}", line_num + 1))?;
        let line = match line.find('%') {
            Some(comment_pos) => &line[..comment_pos],
            None => &line,
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_position_line(line) {
            Ok((board, side_to_move)) => {
                analyze_position(&search, &board, side_to_move, line_num + 1);
            }
            Err(e) => {
                warn!(line = line_num + 1, "skipping position: {e:#}");
                eprintln!("Error parsing line {}: {e:#}", line_num + 1);
            }
        }
    }

    Ok(())
}

fn parse_position_line(line: &str) -> anyhow::Result<(Board, Player)> {
    let mut fields = line.split_whitespace();
    let (Some(board_field), Some(side_field)) = (fields.next(), fields.next()) else {
        bail!("expected '<64 cells> <X|O>'");
    };

    let board = Board::from_string(board_field)?;
    let side_to_move = match side_field {
        "X" | "x" => Player::Black,
        "O" | "o" => Player::White,
        _ => bail!("invalid side to move: {side_field}"),
    };

    Ok((board, side_to_move))
}

fn analyze_position(search: &Search, board: &Board, side_to_move: Player, position_num: usize) {
    let start_time = Instant::now();
    let result = search.run(board, side_to_move);
    let elapsed = start_time.elapsed();

    let nodes_per_sec = if elapsed.as_secs_f64() > 0.0 {
        result.n_nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };

    let depth = if result.aborted {
        format!("{}*", result.depth)
    } else {
        result.depth.to_string()
    };
    let score = result
        .score
        .map_or_else(|| "--".to_string(), |s| format!("{s:+}"));
    let best_move = result
        .best_move
        .map_or_else(|| "--".to_string(), |sq| sq.to_string());

    println!(
        "| {:^3} | {:^5} | {:^5} | {:>2}:{:06.3} | {:>11} | {:>10.0} | {:^4} |",
        position_num,
        depth,
        score,
        elapsed.as_secs() / 60,
        elapsed.as_secs_f64() % 60.0,
        result.n_nodes,
        nodes_per_sec,
        best_move,
    );
}
