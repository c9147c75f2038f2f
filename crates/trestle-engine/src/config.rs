//! Session configuration, validation, and error types.
//!
//! [`SessionConfig`] is the builder-input for a [`Session`](crate::Session).
//! [`validate()`](SessionConfig::validate) lays out the board and checks
//! the optional start cell before the session is constructed.

use std::error::Error;
use std::fmt;

use trestle_core::{Cell, ControlMode, Position};
use trestle_grid::{Board, Grid, GridError};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SessionConfig::validate()`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// The board could not be built from the dimensions and map.
    Grid(GridError),
    /// The start cell is off the board.
    StartOutOfRange {
        /// The configured start.
        start: Position,
    },
    /// The start cell cannot hold a resting player.
    StartNotSolid {
        /// The configured start.
        start: Position,
        /// What the map puts there.
        cell: Cell,
    },
    /// Autopilot needs a player, but no start cell was given.
    AutopilotWithoutPlayer,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::StartOutOfRange { start } => {
                write!(f, "start {start} is off the board")
            }
            Self::StartNotSolid { start, cell } => {
                write!(f, "start {start} is a {cell} cell, expected solid")
            }
            Self::AutopilotWithoutPlayer => {
                write!(f, "autopilot mode requires a start position")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── SessionConfig ──────────────────────────────────────────────────

/// Everything needed to start a play session.
///
/// # Examples
///
/// ```
/// use trestle_core::{ControlMode, Position};
/// use trestle_engine::{Session, SessionConfig};
///
/// let config = SessionConfig {
///     rows: 3,
///     cols: 4,
///     map: vec!["#BB#".into()],
///     start: Some(Position::new(0, 0)),
///     ..Default::default()
/// };
/// let session = Session::new(config).unwrap();
/// assert_eq!(session.mode(), ControlMode::Manual);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Board rows. Default: 15.
    pub rows: u32,
    /// Board columns. Default: 20.
    pub cols: u32,
    /// Map lines laid onto the board with [`Grid::from_map`]. Default: empty.
    pub map: Vec<String>,
    /// Cell to place the player on, if any. Default: `None`.
    pub start: Option<Position>,
    /// Initial control mode. Default: [`ControlMode::Manual`].
    pub mode: ControlMode,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rows: 15,
            cols: 20,
            map: Vec::new(),
            start: None,
            mode: ControlMode::Manual,
        }
    }
}

impl SessionConfig {
    /// Check structural invariants and build the board.
    ///
    /// Returns the laid-out [`Grid`] on success.
    pub fn validate(&self) -> Result<Grid, ConfigError> {
        let grid = Grid::from_map(self.rows, self.cols, &self.map)?;
        match self.start {
            Some(start) => {
                if !grid.in_bounds(start) {
                    return Err(ConfigError::StartOutOfRange { start });
                }
                let cell = grid.cell_at(start)?;
                if !cell.supports_rest() {
                    return Err(ConfigError::StartNotSolid { start, cell });
                }
            }
            None if self.mode == ControlMode::Autopilot => {
                return Err(ConfigError::AutopilotWithoutPlayer);
            }
            None => {}
        }
        Ok(grid)
    }
}
