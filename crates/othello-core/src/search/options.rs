//! Search configuration.

use std::time::Duration;

use crate::level::Level;
use crate::types::Depth;

/// Options for a [`Search`](super::Search).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    /// Fixed search depth in plies, counting the root move.
    pub depth: Depth,
    /// Optional wall-clock budget. Once it runs out every remaining node is
    /// scored as a leaf; the search still returns a move.
    pub time_limit: Option<Duration>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions::with_level(Level::default())
    }
}

impl SearchOptions {
    /// Creates options searching at the depth of `level` with no time limit.
    pub fn with_level(level: Level) -> Self {
        SearchOptions::with_depth(level.depth())
    }

    /// Creates options searching at a fixed depth with no time limit.
    pub fn with_depth(depth: Depth) -> Self {
        SearchOptions {
            depth,
            time_limit: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_medium() {
        let options = SearchOptions::default();
        assert_eq!(options.depth, Level::Medium.depth());
        assert_eq!(options.time_limit, None);
    }

    #[test]
    fn test_with_level() {
        assert_eq!(SearchOptions::with_level(Level::Hard).depth, 5);
        assert_eq!(SearchOptions::with_depth(7).depth, 7);
    }
}
