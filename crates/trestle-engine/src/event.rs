//! State-change notifications for the view layer.
//!
//! The session never calls into rendering. It publishes [`SessionEvent`]s
//! to every subscriber's channel; a view drains its receiver and animates
//! at its own pace, calling back into the session when a move has
//! finished playing out.

use crate::configuration::Configuration;
use crate::player::{MoveOutcome, PendingMove};
use crate::search::MoveList;
use crossbeam_channel::{Receiver, Sender};
use trestle_core::{Cell, ControlMode, Direction, Position};

/// Something observable changed in a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// A board cell was edited.
    CellChanged {
        /// Edited cell.
        position: Position,
        /// Its kind before the edit.
        previous: Cell,
        /// Its kind now.
        cell: Cell,
    },
    /// A player was placed on the board.
    PlayerPlaced {
        /// Start and respawn cell.
        start: Position,
    },
    /// The player was taken off the board because it no longer stands
    /// on legal ground.
    PlayerRemoved {
        /// Where it stood.
        configuration: Configuration,
    },
    /// The control mode changed.
    ModeChanged {
        /// New mode.
        mode: ControlMode,
    },
    /// A move began; the view should animate it and then finish it.
    MoveStarted(PendingMove),
    /// A move was committed.
    MoveFinished(MoveOutcome),
    /// An autopilot route was computed and queued.
    RoutePlanned {
        /// Requested destination cell.
        destination: Position,
        /// Queued moves.
        moves: MoveList,
    },
    /// No route reaches the requested destination.
    RouteUnreachable {
        /// Requested destination cell.
        destination: Position,
    },
    /// The route was dropped because its next move became illegal.
    RouteAborted {
        /// Where the player stood.
        at: Configuration,
        /// The move that was refused.
        direction: Direction,
        /// Moves left unplayed, including the refused one.
        remaining: usize,
    },
    /// Every queued move has been played.
    RouteCompleted {
        /// Where the player ended up.
        configuration: Configuration,
    },
}

/// Fan-out of session events to any number of channel subscribers.
///
/// Subscribers whose receiver has been dropped are pruned on the next
/// publish.
#[derive(Debug, Default)]
pub struct EventBus {
    subscribers: Vec<Sender<SessionEvent>>,
}

impl EventBus {
    /// A bus with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber and return its receiving end.
    pub fn subscribe(&mut self) -> Receiver<SessionEvent> {
        let (tx, rx) = crossbeam_channel::unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Deliver `event` to every live subscriber.
    pub fn publish(&mut self, event: SessionEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    /// Number of subscribers still registered.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
