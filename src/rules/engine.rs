//! The game engine.
//!
//! `GameEngine` owns the authoritative `GameState` and is the only thing
//! that changes it. Each accepted move:
//!
//! 1. clones the current board (O(1), structurally shared),
//! 2. runs the cascade on the clone,
//! 3. re-scans the settled board for a winner,
//! 4. swaps in the new state, then notifies observers.
//!
//! Readers holding an earlier snapshot never see a half-settled board.
//! Rejected clicks leave the state untouched and are reported as
//! `MoveOutcome::Ignored`, never as errors.

use log::{debug, info, trace, warn};
use serde::{Deserialize, Serialize};

use crate::core::{
    Board, GameSettings, GameState, GameStatus, MoveRecord, PlayerColor, PlayerMap, Position,
    SettingsError,
};
use crate::events::{EventBus, GameEvent, Observer, ObserverId};

use super::cascade::explode;
use super::win::{detect_winner, BoardTally};

/// Why a click had no effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// The game has already been won.
    GameOver,
    /// The coordinates are outside the grid.
    OutOfBounds,
    /// The cell belongs to another player.
    OpponentCell,
    /// The cascade never settled; the move was abandoned.
    CascadeOverflow,
}

impl std::fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            IgnoreReason::GameOver => "game is over",
            IgnoreReason::OutOfBounds => "outside the grid",
            IgnoreReason::OpponentCell => "cell owned by another player",
            IgnoreReason::CascadeOverflow => "cascade did not settle",
        };
        f.write_str(text)
    }
}

/// Result of a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The atom was placed and the board has settled.
    Applied {
        record: MoveRecord,
        /// Set when this move decided the game.
        winner: Option<PlayerColor>,
    },
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl MoveOutcome {
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }

    /// Record of the accepted move, if any.
    #[must_use]
    pub fn record(&self) -> Option<&MoveRecord> {
        match self {
            MoveOutcome::Applied { record, .. } => Some(record),
            MoveOutcome::Ignored(_) => None,
        }
    }
}

/// Chain Reaction game engine.
///
/// ## Example
///
/// ```
/// use chain_reaction::core::{Cell, PlayerColor, Position};
/// use chain_reaction::rules::GameEngine;
///
/// let mut engine = GameEngine::new();
/// engine.init_game(3, 3, 2).unwrap();
///
/// engine.handle_cell_click(0, 0); // RED
/// engine.handle_cell_click(2, 2); // GREEN
/// engine.handle_cell_click(0, 0); // RED again: the corner detonates
///
/// let board = engine.board();
/// assert_eq!(board.get(Position::new(0, 0)), Some(&Cell::EMPTY));
/// assert_eq!(board.get(Position::new(0, 1)), Some(&Cell::owned(PlayerColor::Red, 1)));
/// assert_eq!(board.get(Position::new(1, 0)), Some(&Cell::owned(PlayerColor::Red, 1)));
/// assert_eq!(engine.turn(), PlayerColor::Green);
/// ```
#[derive(Debug)]
pub struct GameEngine {
    state: GameState,
    events: EventBus,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Engine holding a fresh default game (9×6, two players).
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: GameState::new(GameSettings::default()),
            events: EventBus::new(),
        }
    }

    /// Engine holding a fresh game for `settings`.
    pub fn with_settings(settings: GameSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self {
            state: GameState::new(settings),
            events: EventBus::new(),
        })
    }

    // === Lifecycle ===

    /// Start a new `rows × cols` game for `player_count` players.
    ///
    /// Replaces the whole state: empty board, `RED` to move, no winner.
    /// A custom cascade limit carries over from the current settings.
    /// Fails only when the arguments break the game's preconditions, in
    /// which case the current game is kept.
    pub fn init_game(
        &mut self,
        rows: usize,
        cols: usize,
        player_count: usize,
    ) -> Result<(), SettingsError> {
        let settings = GameSettings {
            cascade_limit: self.state.settings().cascade_limit,
            ..GameSettings::new(rows, cols, player_count)
        };
        self.init_with(settings)
    }

    /// Start a new game from full settings.
    pub fn init_with(&mut self, settings: GameSettings) -> Result<(), SettingsError> {
        settings.validate()?;

        info!(
            "starting {}x{} game for {} players",
            settings.rows, settings.cols, settings.player_count
        );
        self.state = GameState::new(settings.clone());
        self.events.emit(&GameEvent::GameStarted { settings });
        Ok(())
    }

    /// Start over with the current settings.
    pub fn restart(&mut self) {
        let settings = self.state.settings().clone();
        info!("restarting game");
        self.state = GameState::new(settings.clone());
        self.events.emit(&GameEvent::GameStarted { settings });
    }

    // === Moves ===

    /// Place an atom for the player to move at `(row, col)`.
    ///
    /// Ignored when the game is over, the coordinates are off the grid, or
    /// the cell belongs to another player. The turn advances after every
    /// accepted move, including the one that wins.
    pub fn handle_cell_click(&mut self, row: usize, col: usize) -> MoveOutcome {
        self.place(Position::new(row, col))
    }

    /// [`handle_cell_click`](Self::handle_cell_click) taking a `Position`.
    pub fn place(&mut self, pos: Position) -> MoveOutcome {
        let player = self.state.turn();

        if self.state.status().is_over() {
            return self.ignore(pos, IgnoreReason::GameOver);
        }
        let Some(cell) = self.state.board().get(pos) else {
            return self.ignore(pos, IgnoreReason::OutOfBounds);
        };
        if !cell.accepts(player) {
            return self.ignore(pos, IgnoreReason::OpponentCell);
        }

        let mut board = self.state.board().clone();
        let limit = self.state.settings().detonation_limit();
        let report = match explode(&mut board, pos, player, limit) {
            Ok(report) => report,
            Err(overflow) => {
                warn!("{player} move abandoned: {overflow}");
                return self.ignore(pos, IgnoreReason::CascadeOverflow);
            }
        };

        let winner = detect_winner(&board, self.state.player_count());
        let record = MoveRecord {
            player,
            position: pos,
            move_number: self.state.move_count() + 1,
            detonations: report.detonations,
        };

        self.state = self.state.advance(board, record, winner);
        debug!(
            "move {}: {player} at {pos}, {} detonations, {} to move",
            record.move_number,
            report.detonations,
            self.state.turn()
        );

        self.events.emit(&GameEvent::MoveApplied {
            record,
            snapshot: self.state.clone(),
        });
        if let Some(winner) = winner {
            info!("{winner} wins on move {}", record.move_number);
            self.events.emit(&GameEvent::GameWon {
                winner,
                move_number: record.move_number,
            });
        }

        MoveOutcome::Applied { record, winner }
    }

    fn ignore(&mut self, position: Position, reason: IgnoreReason) -> MoveOutcome {
        trace!("click at {position} ignored: {reason}");
        self.events.emit(&GameEvent::MoveIgnored { position, reason });
        MoveOutcome::Ignored(reason)
    }

    // === Read access ===

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Color of the player to move.
    #[must_use]
    pub fn turn(&self) -> PlayerColor {
        self.state.turn()
    }

    #[must_use]
    pub fn turn_index(&self) -> usize {
        self.state.turn_index()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerColor> {
        self.state.winner()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.state.rows()
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.state.cols()
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.state.player_count()
    }

    /// Seated colors in turn order.
    #[must_use]
    pub fn roster(&self) -> &'static [PlayerColor] {
        self.state.roster()
    }

    /// Atoms each seated player holds on the current board.
    #[must_use]
    pub fn atom_counts(&self) -> PlayerMap<u64> {
        BoardTally::scan(self.board(), self.player_count()).atoms
    }

    #[must_use]
    pub fn settings(&self) -> &GameSettings {
        self.state.settings()
    }

    /// Accepted moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &im::Vector<MoveRecord> {
        self.state.history()
    }

    /// Borrow the current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the current state (O(1)). Later moves do not affect it.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    // === Observers ===

    /// Subscribe to game events.
    pub fn subscribe(&mut self, observer: impl Observer + 'static) -> ObserverId {
        self.events.subscribe(observer)
    }

    /// Remove a subscription. Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.events.unsubscribe(id)
    }
}
