//! A play session: one board, at most one player, and a control mode.
//!
//! The session owns all mutable game state and is the only thing that
//! changes it. Each operation validates the current mode and phase,
//! applies its change, and publishes the matching [`SessionEvent`].
//!
//! # Move cycle
//!
//! ```text
//!   manual_move / advance_route        finish_move
//!   Idle ──────────────────────────► Moving ─────────► Idle
//! ```
//!
//! The time spent in `Moving` belongs to the view layer: it animates the
//! [`SessionEvent::MoveStarted`] it received and calls
//! [`finish_move`](Session::finish_move) when done. Headless callers can
//! finish immediately, or use [`play_route`](Session::play_route).

use std::collections::VecDeque;

use crossbeam_channel::Receiver;
use trestle_core::{Cell, ControlMode, Direction, Position};
use trestle_grid::{Board, Grid};

use crate::config::{ConfigError, SessionConfig};
use crate::configuration::Configuration;
use crate::error::SessionError;
use crate::event::{EventBus, SessionEvent};
use crate::metrics::SearchMetrics;
use crate::player::{MoveOutcome, PendingMove, Player};
use crate::search::{find_path_with_metrics, SearchOutcome};
use crate::transition::try_step;

/// Game state for one board.
#[derive(Debug)]
pub struct Session {
    grid: Grid,
    player: Option<Player>,
    mode: ControlMode,
    /// Moves still to be started, front first.
    route: VecDeque<Direction>,
    /// True from a planned non-empty route until it completes or aborts.
    routing: bool,
    bus: EventBus,
    last_search: SearchMetrics,
}

impl Session {
    /// Build a session from a validated configuration.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        let grid = config.validate()?;
        Ok(Self {
            grid,
            player: config.start.map(Player::new),
            mode: config.mode,
            route: VecDeque::new(),
            routing: false,
            bus: EventBus::new(),
            last_search: SearchMetrics::default(),
        })
    }

    // ── Accessors ──────────────────────────────────────────────────

    /// The board.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The player, if one is placed.
    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    /// Current control mode.
    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    /// Whether an autopilot route is being played back.
    pub fn is_routing(&self) -> bool {
        self.routing
    }

    /// Moves of the current route not yet started.
    pub fn remaining_route(&self) -> usize {
        self.route.len()
    }

    /// Metrics from the most recent route search.
    pub fn last_search_metrics(&self) -> &SearchMetrics {
        &self.last_search
    }

    /// Receive every event published from now on.
    pub fn subscribe(&mut self) -> Receiver<SessionEvent> {
        self.bus.subscribe()
    }

    // ── Board editing ──────────────────────────────────────────────

    /// Change one board cell, returning its previous kind.
    ///
    /// Only allowed in manual mode with no move in flight. If the edit
    /// leaves the player on illegal ground, the player is removed.
    pub fn set_cell(&mut self, position: Position, cell: Cell) -> Result<Cell, SessionError> {
        self.require_mode(ControlMode::Manual)?;
        if self.player.as_ref().is_some_and(|p| !p.is_idle()) {
            return Err(SessionError::Busy);
        }
        let previous = self.grid.set_cell(position, cell)?;
        if previous != cell {
            self.bus.publish(SessionEvent::CellChanged {
                position,
                previous,
                cell,
            });
            self.evict_stranded_player();
        }
        Ok(previous)
    }

    /// Put the player on `start`, which becomes its respawn point.
    ///
    /// Only allowed in manual mode, with no player yet, on a solid cell.
    pub fn place_player(&mut self, start: Position) -> Result<(), SessionError> {
        self.require_mode(ControlMode::Manual)?;
        if self.player.is_some() {
            return Err(SessionError::PlayerAlreadyPlaced);
        }
        let cell = self.grid.cell_at(start)?;
        if !cell.supports_rest() {
            return Err(SessionError::IllegalPlacement {
                position: start,
                cell,
            });
        }
        self.player = Some(Player::new(start));
        self.bus.publish(SessionEvent::PlayerPlaced { start });
        Ok(())
    }

    // ── Mode ───────────────────────────────────────────────────────

    /// Switch control mode.
    ///
    /// Autopilot needs a player; returning to manual is refused while a
    /// route is still playing.
    pub fn set_mode(&mut self, mode: ControlMode) -> Result<(), SessionError> {
        if mode == self.mode {
            return Ok(());
        }
        match mode {
            ControlMode::Autopilot if self.player.is_none() => {
                return Err(SessionError::NoPlayer);
            }
            ControlMode::Manual if self.routing => {
                return Err(SessionError::RouteInProgress);
            }
            _ => {}
        }
        self.mode = mode;
        log::debug!("control mode -> {mode}");
        self.bus.publish(SessionEvent::ModeChanged { mode });
        Ok(())
    }

    // ── Moves ──────────────────────────────────────────────────────

    /// Begin a user-directed move.
    pub fn manual_move(&mut self, direction: Direction) -> Result<PendingMove, SessionError> {
        self.require_mode(ControlMode::Manual)?;
        self.begin(direction)
    }

    /// Commit the move in flight.
    ///
    /// A fatal move respawns the player; if its start cell has since been
    /// edited away, the player is removed instead. When the last move of
    /// a route finishes, the route completes.
    pub fn finish_move(&mut self) -> Result<MoveOutcome, SessionError> {
        let player = self.player.as_mut().ok_or(SessionError::NoPlayer)?;
        let outcome = player.finish_move()?;
        if let MoveOutcome::Died { at, respawn } = outcome {
            log::info!("player died at {at}, respawning at {respawn}");
        }
        self.bus.publish(SessionEvent::MoveFinished(outcome));

        if matches!(outcome, MoveOutcome::Died { .. }) {
            self.evict_stranded_player();
        }
        if self.routing && self.route.is_empty() {
            self.complete_route();
        }
        Ok(outcome)
    }

    // ── Autopilot ──────────────────────────────────────────────────

    /// Plan a route from the player's configuration to rest on `destination`.
    ///
    /// Needs autopilot mode, an idle player, no route already playing,
    /// and a solid destination cell. A found path is queued for
    /// [`advance_route`](Session::advance_route); an empty path completes
    /// immediately.
    pub fn request_route(&mut self, destination: Position) -> Result<SearchOutcome, SessionError> {
        self.require_mode(ControlMode::Autopilot)?;
        if self.routing {
            return Err(SessionError::RouteInProgress);
        }
        let player = self.player.as_ref().ok_or(SessionError::NoPlayer)?;
        if !player.is_idle() {
            return Err(SessionError::Busy);
        }
        let cell = self.grid.cell_at(destination)?;
        if !cell.supports_rest() {
            return Err(SessionError::IllegalDestination {
                position: destination,
                cell,
            });
        }

        let start = player.configuration();
        let (outcome, metrics) =
            find_path_with_metrics(&self.grid, start, Configuration::single(destination))?;
        self.last_search = metrics;

        match &outcome {
            SearchOutcome::Found(moves) => {
                log::debug!("route to {destination}: {} moves", moves.len());
                self.bus.publish(SessionEvent::RoutePlanned {
                    destination,
                    moves: moves.clone(),
                });
                self.route = moves.iter().copied().collect();
                self.routing = true;
                if self.route.is_empty() {
                    self.complete_route();
                }
            }
            SearchOutcome::NoPathFound => {
                log::debug!("route to {destination}: unreachable from {start}");
                self.bus
                    .publish(SessionEvent::RouteUnreachable { destination });
            }
        }
        Ok(outcome)
    }

    /// Begin the next queued route move.
    ///
    /// The move is re-checked against the board as it stands now. If it
    /// has become illegal, the route is abandoned and
    /// [`SessionError::RouteInvalidated`] is returned; the player does
    /// not move.
    pub fn advance_route(&mut self) -> Result<PendingMove, SessionError> {
        if !self.routing {
            return Err(SessionError::NoRoute);
        }
        let player = self.player.as_ref().ok_or(SessionError::NoPlayer)?;
        if !player.is_idle() {
            return Err(SessionError::Busy);
        }
        let at = player.configuration();
        let Some(&direction) = self.route.front() else {
            self.complete_route();
            return Err(SessionError::NoRoute);
        };

        if try_step(&self.grid, at, direction).is_none() {
            let remaining = self.route.len();
            log::info!("route aborted: moving {direction} from {at} is no longer legal");
            self.route.clear();
            self.routing = false;
            self.bus.publish(SessionEvent::RouteAborted {
                at,
                direction,
                remaining,
            });
            return Err(SessionError::RouteInvalidated { at, direction });
        }

        self.route.pop_front();
        self.begin(direction)
    }

    /// Play the whole queued route, finishing each move immediately.
    ///
    /// Returns the number of moves played.
    pub fn play_route(&mut self) -> Result<usize, SessionError> {
        let mut played = 0;
        while self.routing {
            self.advance_route()?;
            self.finish_move()?;
            played += 1;
        }
        Ok(played)
    }

    // ── Internals ──────────────────────────────────────────────────

    fn require_mode(&self, expected: ControlMode) -> Result<(), SessionError> {
        if self.mode == expected {
            Ok(())
        } else {
            Err(SessionError::WrongMode {
                expected,
                actual: self.mode,
            })
        }
    }

    fn begin(&mut self, direction: Direction) -> Result<PendingMove, SessionError> {
        let player = self.player.as_mut().ok_or(SessionError::NoPlayer)?;
        let pending = player.begin_move(&self.grid, direction)?;
        self.bus.publish(SessionEvent::MoveStarted(pending));
        Ok(pending)
    }

    fn complete_route(&mut self) {
        self.routing = false;
        self.route.clear();
        if let Some(player) = &self.player {
            let configuration = player.configuration();
            log::info!("route completed at {configuration}");
            self.bus
                .publish(SessionEvent::RouteCompleted { configuration });
        }
    }

    /// Remove an idle player that no longer stands on legal ground.
    fn evict_stranded_player(&mut self) {
        let Some(player) = &self.player else {
            return;
        };
        if !player.is_idle() {
            return;
        }
        let configuration = player.configuration();
        if configuration.is_legal(&self.grid) {
            return;
        }
        log::info!("player at {configuration} no longer on legal ground, removing");
        self.player = None;
        if self.routing {
            self.routing = false;
            self.route.clear();
        }
        if self.mode == ControlMode::Autopilot {
            self.mode = ControlMode::Manual;
            self.bus.publish(SessionEvent::ModeChanged {
                mode: ControlMode::Manual,
            });
        }
        self.bus
            .publish(SessionEvent::PlayerRemoved { configuration });
    }
}
