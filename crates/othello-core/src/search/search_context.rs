//! Per-search state shared by every node of one tree walk.

use tracing::trace;

use crate::disc::Player;
use crate::search::time_control::TimeManager;

/// The deadline is polled once per this many nodes.
const TIME_CHECK_INTERVAL: u64 = 256;

/// Counters and limits for one search. Boards are never stored here; each
/// branch owns its own copy.
pub struct SearchContext {
    /// The side the search selects a move for. Leaves are scored for it.
    pub root: Player,
    /// Nodes visited so far.
    pub n_nodes: u64,
    time_manager: Option<TimeManager>,
    next_time_check: u64,
    aborted: bool,
}

impl SearchContext {
    pub fn new(root: Player, time_manager: Option<TimeManager>) -> Self {
        SearchContext {
            root,
            n_nodes: 0,
            time_manager,
            next_time_check: 0,
            aborted: false,
        }
    }

    /// Checks the deadline. Once expired, stays expired for the rest of the
    /// search so the remaining nodes all become leaves.
    #[inline]
    pub fn is_out_of_time(&mut self) -> bool {
        if self.aborted {
            return true;
        }
        if let Some(tm) = &self.time_manager
            && self.n_nodes >= self.next_time_check
        {
            self.next_time_check = self.n_nodes + TIME_CHECK_INTERVAL;
            if !tm.is_expired() {
                return false;
            }
            trace!(nodes = self.n_nodes, elapsed = ?tm.elapsed(), "search deadline reached");
            self.aborted = true;
        }
        self.aborted
    }

    /// Whether the deadline cut this search short.
    #[inline]
    pub fn is_aborted(&self) -> bool {
        self.aborted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_without_deadline_never_stops() {
        let mut ctx = SearchContext::new(Player::Black, None);
        for _ in 0..1000 {
            assert!(!ctx.is_out_of_time());
            ctx.n_nodes += 1;
        }
        assert!(!ctx.is_aborted());
    }

    #[test]
    fn test_expired_deadline_latches() {
        let mut ctx = SearchContext::new(Player::White, Some(TimeManager::new(Duration::ZERO)));
        assert!(ctx.is_out_of_time());
        ctx.n_nodes += 1;
        assert!(ctx.is_out_of_time());
        assert!(ctx.is_aborted());
    }
}
