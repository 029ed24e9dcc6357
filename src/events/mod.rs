//! Game events and observers.
//!
//! The engine is the only writer of game state. Everything else (a
//! renderer, a sound layer, a replay recorder) learns about changes by
//! subscribing an `Observer`. Events are emitted after the new state has
//! been published and carry it, so observers only ever see settled boards.
//!
//! ## Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use chain_reaction::events::GameEvent;
//! use chain_reaction::rules::GameEngine;
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//!
//! let mut engine = GameEngine::new();
//! engine.subscribe(move |event: &GameEvent| sink.borrow_mut().push(event.clone()));
//!
//! engine.handle_cell_click(0, 0);
//! assert!(matches!(seen.borrow()[0], GameEvent::MoveApplied { .. }));
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{GameSettings, GameState, MoveRecord, PlayerColor, Position};
use crate::rules::IgnoreReason;

/// Something that happened to the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new game began (fresh board, first color to move).
    GameStarted { settings: GameSettings },

    /// A move was accepted and has settled.
    MoveApplied {
        record: MoveRecord,
        /// State right after the move, winner and turn included.
        snapshot: GameState,
    },

    /// A click was ignored; state is unchanged.
    MoveIgnored {
        position: Position,
        reason: IgnoreReason,
    },

    /// The move numbered `move_number` left a single player on the board.
    GameWon {
        winner: PlayerColor,
        move_number: usize,
    },
}

/// Receives game events.
///
/// Implemented for any `FnMut(&GameEvent)` closure.
pub trait Observer {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> Observer for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event);
    }
}

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObserverId(pub u32);

impl std::fmt::Display for ObserverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Observer({})", self.0)
    }
}

/// Subscribed observers, notified in subscription order.
#[derive(Default)]
pub struct EventBus {
    observers: Vec<(ObserverId, Box<dyn Observer>)>,
    next_id: u32,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer.
    pub fn subscribe(&mut self, observer: impl Observer + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    /// Number of subscribed observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Deliver `event` to every observer.
    pub fn emit(&mut self, event: &GameEvent) {
        for (_, observer) in &mut self.observers {
            observer.on_event(event);
        }
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("observers", &self.observers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
