//! Game tree search engine.

pub mod alpha_beta;
pub mod options;
pub mod role;
pub mod search_context;
pub mod search_result;
pub mod time_control;

use tracing::{debug, debug_span};

use crate::board::Board;
use crate::disc::Player;
use crate::level::Level;
use crate::search::search_context::SearchContext;
use crate::search::time_control::TimeManager;
use crate::square::Square;
use crate::types::{Depth, Score};

pub use options::SearchOptions;
pub use role::Role;
pub use search_result::{RootMoveScore, SearchResult};

/// Main search engine structure.
#[derive(Clone, Debug, Default)]
pub struct Search {
    options: SearchOptions,
}

impl Search {
    /// Creates a new search engine with the given options.
    pub fn new(options: &SearchOptions) -> Search {
        Search {
            options: options.clone(),
        }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Switches to the fixed depth of `level`.
    pub fn set_level(&mut self, level: Level) {
        self.options.depth = level.depth();
    }

    pub fn set_depth(&mut self, depth: Depth) {
        self.options.depth = depth;
    }

    /// Selects a move for `side_to_move`.
    ///
    /// # Returns
    ///
    /// A `SearchResult` whose `best_move` is `None` when the side has no
    /// legal move and must pass.
    pub fn run(&self, board: &Board, side_to_move: Player) -> SearchResult {
        let _span =
            debug_span!("search", depth = self.options.depth, side = %side_to_move).entered();

        let time_manager = self.options.time_limit.map(TimeManager::new);
        let mut ctx = SearchContext::new(side_to_move, time_manager);
        let result = alpha_beta::search_root(&mut ctx, board, self.options.depth);

        debug!(
            best_move = ?result.best_move.map(|sq| sq.to_string()),
            score = ?result.score,
            nodes = result.n_nodes,
            aborted = result.aborted,
            "search finished"
        );
        result
    }
}

/// Returns the best move for `player` searching `depth` plies, or `None`
/// if `player` has no legal move.
///
/// Deterministic: the same board, depth and player always give the same move.
pub fn select_best_move(board: &Board, depth: Depth, player: Player) -> Option<Square> {
    let mut ctx = SearchContext::new(player, None);
    alpha_beta::search_root(&mut ctx, board, depth).best_move
}

/// Runs alpha-beta from an arbitrary node.
///
/// The maximizing side is the player the values are reported for, so it is
/// `turn` for a [`Role::Max`] node and the opponent of `turn` for a
/// [`Role::Min`] node.
pub fn alpha_beta(
    board: &Board,
    depth: Depth,
    alpha: Score,
    beta: Score,
    turn: Player,
    role: Role,
) -> Score {
    let root = match role {
        Role::Max => turn,
        Role::Min => turn.opponent(),
    };
    let mut ctx = SearchContext::new(root, None);
    alpha_beta::search(&mut ctx, board, depth, alpha, beta, turn, role)
}
