//! Structured match events for external tooling.
//!
//! The engine emits an event after each committed state change (selection,
//! move execution, chain continuation, turn change, game end). Subscribing is
//! optional and never required for correctness: a `Game` with no sink plays
//! identically. Each event is also traced at debug level via `tracing`.

use crate::types::{Color, Square};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameEvent {
    /// A piece of the side to move became the current selection.
    Selected { piece: Square },
    /// A move was executed on the board.
    MoveApplied {
        from: Square,
        to: Square,
        captured: Vec<Square>,
        promoted: bool,
    },
    /// The capturing piece must jump again; the turn has not passed.
    ChainContinued { piece: Square },
    /// The turn passed to the other side.
    TurnChanged { turn: Color },
    /// One side has no pieces or no legal moves left.
    GameOver { winner: Color },
}

/// Subscriber seam for the event stream.
///
/// Implemented for any `FnMut(&GameEvent)`, so a closure is enough:
///
/// ```
/// # use checkers_core::{Game, GameEvent};
/// let mut game = Game::new();
/// game.set_event_sink(Box::new(|event: &GameEvent| println!("{event:?}")));
/// ```
pub trait EventSink {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F: FnMut(&GameEvent)> EventSink for F {
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
