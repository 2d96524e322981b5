//! Maximizing and minimizing roles of the alpha-beta search.

/// Which bound a node tightens.
///
/// Roles alternate with the side to move, so the maximizing side is always
/// the player the search was started for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Tracks the maximum and raises alpha.
    Max,
    /// Tracks the minimum and lowers beta.
    Min,
}

impl Role {
    /// Returns the role of the child nodes.
    #[inline]
    pub fn next(self) -> Role {
        match self {
            Role::Max => Role::Min,
            Role::Min => Role::Max,
        }
    }
}
