//! # chain-reaction
//!
//! Rules engine for Chain Reaction, a grid game for 2 to 6 players.
//!
//! Players take turns dropping atoms into cells they own (or empty ones).
//! A cell holding as many atoms as it has orthogonal neighbors detonates:
//! it empties and throws one atom into each neighbor, capturing it for the
//! mover and possibly setting off further detonations. A player wins once
//! they are the only color left on the board.
//!
//! ## Design
//!
//! - **Single writer**: `GameEngine` owns the state. Readers get immutable
//!   snapshots or subscribe to `GameEvent`s.
//!
//! - **Copy, settle, publish**: every move settles on a clone of the board
//!   and is swapped in only once complete. Boards use `im` persistent
//!   vectors, so the clone is O(1).
//!
//! - **Silent rejection**: illegal clicks are ignored, not errors.
//!
//! ## Modules
//!
//! - `core`: Player colors, board, settings, errors, state snapshots
//! - `rules`: Cascade propagation, win detection, the engine
//! - `events`: Game events and observers

pub mod core;
pub mod rules;
pub mod events;

// Re-export commonly used types
pub use crate::core::{
    capacity, Board, Cell, GameSettings, GameState, GameStatus, GridPreset, MoveRecord,
    PlayerColor, PlayerMap, Position, SettingsError,
};

pub use crate::rules::{
    detect_winner, explode, BoardTally, CascadeOverflow, CascadeReport, GameEngine, IgnoreReason,
    MoveOutcome,
};

pub use crate::events::{EventBus, GameEvent, Observer, ObserverId};
