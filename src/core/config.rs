//! Game configuration types.
//!
//! A game is configured by `GameSettings`: grid dimensions, how many
//! players are seated, and how far a single move's cascade may run before
//! it is treated as runaway. The host builds settings (directly, from a
//! `GridPreset`, or deserialized from its own config format), validates
//! them, and hands them to the engine.

use serde::{Deserialize, Serialize};

use super::error::SettingsError;
use super::player::{MAX_PLAYERS, MIN_PLAYERS};

/// Standard grid sizes offered to players.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridPreset {
    /// 6 rows × 5 columns.
    Small,
    /// 9 rows × 6 columns.
    #[default]
    Standard,
    /// 12 rows × 8 columns.
    Large,
}

impl GridPreset {
    pub const ALL: [GridPreset; 3] = [GridPreset::Small, GridPreset::Standard, GridPreset::Large];

    /// `(rows, cols)` for this preset.
    #[must_use]
    pub const fn dimensions(self) -> (usize, usize) {
        match self {
            GridPreset::Small => (6, 5),
            GridPreset::Standard => (9, 6),
            GridPreset::Large => (12, 8),
        }
    }

    /// Preset matching `rows × cols`, if any.
    #[must_use]
    pub fn from_dimensions(rows: usize, cols: usize) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.dimensions() == (rows, cols))
    }
}

/// Upper bound on detonations a settling cascade can need on a
/// `rows × cols` grid.
///
/// Uses the chip-firing bound `2·V·E·D` (vertices, edges, diameter of the
/// grid graph). A cascade that fires more often than this is treated as
/// one that never settles.
#[must_use]
pub fn default_cascade_limit(rows: usize, cols: usize) -> usize {
    let vertices = rows.saturating_mul(cols);
    let edges = rows
        .saturating_mul(cols.saturating_sub(1))
        .saturating_add(cols.saturating_mul(rows.saturating_sub(1)));
    let diameter = rows.saturating_sub(1) + cols.saturating_sub(1);

    2usize
        .saturating_mul(vertices.max(1))
        .saturating_mul(edges.max(1))
        .saturating_mul(diameter.max(1))
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Grid height (at least 1).
    pub rows: usize,

    /// Grid width (at least 1).
    pub cols: usize,

    /// Seated players, 2 through 6.
    pub player_count: usize,

    /// Maximum detonations in a single move. `None` derives the bound from
    /// the grid size via [`default_cascade_limit`].
    pub cascade_limit: Option<usize>,
}

impl Default for GameSettings {
    fn default() -> Self {
        let (rows, cols) = GridPreset::default().dimensions();
        Self {
            rows,
            cols,
            player_count: MIN_PLAYERS,
            cascade_limit: None,
        }
    }
}

impl GameSettings {
    /// Settings for a `rows × cols` grid with `player_count` players.
    #[must_use]
    pub fn new(rows: usize, cols: usize, player_count: usize) -> Self {
        Self {
            rows,
            cols,
            player_count,
            cascade_limit: None,
        }
    }

    /// Settings for a preset grid with `player_count` players.
    #[must_use]
    pub fn from_preset(preset: GridPreset, player_count: usize) -> Self {
        let (rows, cols) = preset.dimensions();
        Self::new(rows, cols, player_count)
    }

    /// Set the grid dimensions.
    #[must_use]
    pub fn with_grid(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Set the grid dimensions from a preset.
    #[must_use]
    pub fn with_preset(self, preset: GridPreset) -> Self {
        let (rows, cols) = preset.dimensions();
        self.with_grid(rows, cols)
    }

    /// Set the number of seated players.
    #[must_use]
    pub fn with_player_count(mut self, player_count: usize) -> Self {
        self.player_count = player_count;
        self
    }

    /// Cap the detonations a single move may trigger.
    #[must_use]
    pub fn with_cascade_limit(mut self, limit: usize) -> Self {
        self.cascade_limit = Some(limit);
        self
    }

    /// Preset matching these dimensions, if any.
    #[must_use]
    pub fn preset(&self) -> Option<GridPreset> {
        GridPreset::from_dimensions(self.rows, self.cols)
    }

    /// Effective per-move detonation cap.
    #[must_use]
    pub fn detonation_limit(&self) -> usize {
        self.cascade_limit
            .unwrap_or_else(|| default_cascade_limit(self.rows, self.cols))
    }

    /// Check the preconditions for starting a game.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(SettingsError::EmptyGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(SettingsError::PlayerCount(self.player_count));
        }
        if self.cascade_limit == Some(0) {
            return Err(SettingsError::ZeroCascadeLimit);
        }
        Ok(())
    }
}
