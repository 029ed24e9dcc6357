//! Game rules.
//!
//! - `cascade`: placing an atom and propagating detonations
//! - `win`: deciding whether a single player is left
//! - `engine`: the stateful engine tying moves, turns and winners together

pub mod cascade;
pub mod win;
pub mod engine;

pub use cascade::{explode, CascadeOverflow, CascadeReport};
pub use win::{detect_winner, BoardTally};
pub use engine::{GameEngine, IgnoreReason, MoveOutcome};
