//! Error types for path search and play sessions.

use crate::configuration::Configuration;
use std::error::Error;
use std::fmt;
use trestle_core::{Cell, ControlMode, Direction, Position};
use trestle_grid::GridError;

/// Errors from [`find_path`](crate::find_path) and
/// [`reachable`](crate::reachable).
///
/// An unreachable destination is not an error; it is reported as
/// [`SearchOutcome::NoPathFound`](crate::SearchOutcome::NoPathFound).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// The start configuration is not legal on the board.
    IllegalStart {
        /// The rejected start.
        start: Configuration,
    },
    /// A destination cell lies off the board.
    IllegalDestination {
        /// The rejected destination.
        destination: Configuration,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalStart { start } => {
                write!(f, "start configuration {start} is not legal")
            }
            Self::IllegalDestination { destination } => {
                write!(f, "destination {destination} is off the board")
            }
        }
    }
}

impl Error for SearchError {}

/// Errors from [`Session`](crate::Session) and [`Player`](crate::Player)
/// operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// No player has been placed on the board.
    NoPlayer,
    /// A player is already on the board.
    PlayerAlreadyPlaced,
    /// A move is still in flight.
    Busy,
    /// `finish_move` was called with no move in flight.
    NoMoveInFlight,
    /// The operation is not available in the current control mode.
    WrongMode {
        /// Mode the operation needs.
        expected: ControlMode,
        /// Mode the session is in.
        actual: ControlMode,
    },
    /// The player can only be placed on a solid cell.
    IllegalPlacement {
        /// Requested start cell.
        position: Position,
        /// What is actually there.
        cell: Cell,
    },
    /// Routes can only end on a solid cell.
    IllegalDestination {
        /// Requested destination cell.
        position: Position,
        /// What is actually there.
        cell: Cell,
    },
    /// An autopilot route is still being played back.
    RouteInProgress,
    /// No autopilot route is being played back.
    NoRoute,
    /// The next queued move is no longer legal; the route was abandoned.
    RouteInvalidated {
        /// Where the player stood.
        at: Configuration,
        /// The move that would have been illegal.
        direction: Direction,
    },
    /// A board query or edit failed.
    Grid(GridError),
    /// Path search rejected its inputs.
    Search(SearchError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPlayer => write!(f, "no player on the board"),
            Self::PlayerAlreadyPlaced => write!(f, "player already placed"),
            Self::Busy => write!(f, "a move is already in flight"),
            Self::NoMoveInFlight => write!(f, "no move in flight"),
            Self::WrongMode { expected, actual } => {
                write!(f, "operation needs {expected} mode, session is in {actual} mode")
            }
            Self::IllegalPlacement { position, cell } => {
                write!(f, "cannot place player on {cell} cell at {position}")
            }
            Self::IllegalDestination { position, cell } => {
                write!(f, "cannot route to {cell} cell at {position}")
            }
            Self::RouteInProgress => write!(f, "a route is already being played"),
            Self::NoRoute => write!(f, "no route is being played"),
            Self::RouteInvalidated { at, direction } => {
                write!(f, "route invalidated: moving {direction} from {at} is no longer legal")
            }
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Search(e) => write!(f, "search: {e}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Search(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for SessionError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<SearchError> for SessionError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}
