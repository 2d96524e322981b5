//! Search result types.

use crate::square::Square;
use crate::types::{Depth, Score};

/// A root move and the value the move selector compared it by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RootMoveScore {
    pub sq: Square,
    pub score: Score,
}

/// Result of a search operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Selected move, `None` when the side to move must pass.
    pub best_move: Option<Square>,
    /// Value of the selected move from the searching side's point of view.
    pub score: Option<Score>,
    /// Depth the search was configured with.
    pub depth: Depth,
    /// Number of nodes visited, root included.
    pub n_nodes: u64,
    /// Every root move with its value, in row-major order.
    pub root_moves: Vec<RootMoveScore>,
    /// Whether the time limit cut the search short.
    pub aborted: bool,
}

impl SearchResult {
    /// Creates a result for a side with no legal move.
    pub fn no_move(depth: Depth, n_nodes: u64) -> Self {
        Self {
            best_move: None,
            score: None,
            depth,
            n_nodes,
            root_moves: Vec::new(),
            aborted: false,
        }
    }
}
