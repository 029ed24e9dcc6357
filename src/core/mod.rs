//! Core game types: players, board, configuration, errors, state.
//!
//! These are plain data. The rules that change them live in `rules`.

pub mod player;
pub mod board;
pub mod config;
pub mod error;
pub mod state;

pub use player::{PlayerColor, PlayerMap, MAX_PLAYERS, MIN_PLAYERS};
pub use board::{capacity, Board, Cell, Position};
pub use config::{default_cascade_limit, GameSettings, GridPreset};
pub use error::SettingsError;
pub use state::{GameState, GameStatus, MoveRecord};
