//! Error types.
//!
//! Gameplay itself never fails: rejected moves are reported through
//! `MoveOutcome::Ignored`. The only fallible step is building a game from
//! settings that break its preconditions.

/// Game settings that cannot start a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("grid must have at least one row and one column (got {rows}x{cols})")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("player count must be between 2 and 6 (got {0})")]
    PlayerCount(usize),

    #[error("cascade limit must be at least 1")]
    ZeroCascadeLimit,
}
