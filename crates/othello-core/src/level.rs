//! Game difficulty levels and search depth configuration.

use std::fmt;
use std::str::FromStr;

use crate::types::Depth;

/// A difficulty level. Each level is a fixed search depth.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Level {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Level {
    /// All levels from weakest to strongest.
    pub const ALL: [Level; 3] = [Level::Easy, Level::Medium, Level::Hard];

    /// Returns the search depth in plies used at this level.
    pub const fn depth(self) -> Depth {
        match self {
            Level::Easy => 1,
            Level::Medium => 3,
            Level::Hard => 5,
        }
    }

    /// Returns the lowercase level name.
    pub const fn name(self) -> &'static str {
        match self {
            Level::Easy => "easy",
            Level::Medium => "medium",
            Level::Hard => "hard",
        }
    }
}

/// Error returned when a level name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid level '{0}': expected easy, medium or hard")]
pub struct LevelError(String);

impl FromStr for Level {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LevelError(s.to_string()))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
