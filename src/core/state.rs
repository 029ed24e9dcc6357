//! Game state snapshots.
//!
//! ## GameState
//!
//! Everything a reader can observe about a game in progress:
//! - Settings the game was started with
//! - The board
//! - Whose turn it is (an index into the active roster)
//! - Whether the game has been won
//! - The history of accepted moves
//!
//! Board and history use `im` persistent structures, so cloning a
//! `GameState` is O(1). The engine hands out clones as read-only snapshots
//! and replaces its own copy wholesale after every accepted move.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::board::{Board, Position};
use super::config::GameSettings;
use super::player::PlayerColor;

/// Game lifecycle. `Won` is terminal until the next game is started.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won(PlayerColor),
}

impl GameStatus {
    #[must_use]
    pub const fn winner(self) -> Option<PlayerColor> {
        match self {
            GameStatus::Won(winner) => Some(winner),
            GameStatus::InProgress => None,
        }
    }

    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Won(_))
    }
}

/// An accepted move, kept for replay and debugging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Player who placed the atom.
    pub player: PlayerColor,

    /// Where the atom was placed.
    pub position: Position,

    /// 1-based sequence number of this move within the game.
    pub move_number: usize,

    /// Cells that detonated while the move settled.
    pub detonations: usize,
}

/// Observable game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    settings: GameSettings,
    board: Board,
    turn_index: usize,
    status: GameStatus,
    history: Vector<MoveRecord>,
}

impl GameState {
    /// Fresh state for `settings`: empty board, first color to move.
    ///
    /// Settings are expected to be validated already.
    #[must_use]
    pub fn new(settings: GameSettings) -> Self {
        Self {
            board: Board::new(settings.rows, settings.cols),
            settings,
            turn_index: 0,
            status: GameStatus::InProgress,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.settings.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.settings.cols
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.settings.player_count
    }

    /// Seated colors in turn order.
    #[must_use]
    pub fn roster(&self) -> &'static [PlayerColor] {
        PlayerColor::roster(self.settings.player_count)
    }

    /// Index into the roster of the player to move.
    #[must_use]
    pub fn turn_index(&self) -> usize {
        self.turn_index
    }

    /// Color of the player to move.
    ///
    /// Still advances after the winning move, so once the game is won this
    /// names the player who would have moved next.
    #[must_use]
    pub fn turn(&self) -> PlayerColor {
        self.roster()
            .get(self.turn_index)
            .copied()
            .unwrap_or(PlayerColor::Red)
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerColor> {
        self.status.winner()
    }

    /// Accepted moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Number of accepted moves so far.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// State after an accepted move: the settled board replaces the old one,
    /// the move is recorded, the winner (if any) is fixed, and the turn
    /// passes to the next seat.
    #[must_use]
    pub(crate) fn advance(
        &self,
        board: Board,
        record: MoveRecord,
        winner: Option<PlayerColor>,
    ) -> Self {
        let mut history = self.history.clone();
        history.push_back(record);

        Self {
            settings: self.settings.clone(),
            board,
            turn_index: (self.turn_index + 1) % self.settings.player_count.max(1),
            status: winner.map_or(self.status, GameStatus::Won),
            history,
        }
    }
}
