//! Wall-clock deadline for a search.

use std::time::{Duration, Instant};

/// Tracks a single search deadline.
#[derive(Clone, Debug)]
pub struct TimeManager {
    start: Instant,
    deadline: Instant,
}

impl TimeManager {
    /// Starts the clock with `limit` to spend.
    pub fn new(limit: Duration) -> Self {
        let start = Instant::now();
        TimeManager {
            start,
            deadline: start + limit,
        }
    }

    /// Returns `true` once the deadline has passed.
    #[inline]
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.deadline
    }

    /// Time spent since the clock was started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
