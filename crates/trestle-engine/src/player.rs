//! Per-player movement state machine.
//!
//! A player is `Idle` until a move begins, then `Moving` until the view
//! layer reports the move has finished playing out. The rule engine
//! decides the move's result when it begins; finishing only commits it.

use crate::configuration::Configuration;
use crate::error::SessionError;
use crate::transition::step;
use trestle_core::{Direction, Position};
use trestle_grid::Board;

/// A move that has begun but not yet been committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingMove {
    /// Configuration before the move.
    pub from: Configuration,
    /// Configuration the move lands on, legal or not.
    pub to: Configuration,
    /// Direction of the move.
    pub direction: Direction,
    /// Whether `to` is illegal, so the move ends in a respawn.
    pub fatal: bool,
}

/// Where a player is in its move cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Ready for the next move.
    Idle,
    /// A move is playing out.
    Moving(PendingMove),
}

/// How a finished move ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player now occupies the move's target.
    Settled(Configuration),
    /// The target was illegal; the player is back on its start cell.
    Died {
        /// The illegal configuration the move landed on.
        at: Configuration,
        /// Where the player respawned.
        respawn: Configuration,
    },
}

/// The player: a start cell, a current configuration, and a move phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    start: Position,
    configuration: Configuration,
    phase: Phase,
}

impl Player {
    /// A player resting on `start`, which is also its respawn point.
    pub fn new(start: Position) -> Self {
        Self {
            start,
            configuration: Configuration::single(start),
            phase: Phase::Idle,
        }
    }

    /// Respawn point.
    pub fn start(&self) -> Position {
        self.start
    }

    /// The settled configuration. While moving, this is where the move began.
    pub fn configuration(&self) -> Configuration {
        self.configuration
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether no move is in flight.
    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// Start a move in `direction`.
    ///
    /// The result is computed against `board` now and flagged fatal if it
    /// is illegal. Fails with [`SessionError::Busy`] while another move is
    /// in flight.
    pub fn begin_move<B: Board + ?Sized>(
        &mut self,
        board: &B,
        direction: Direction,
    ) -> Result<PendingMove, SessionError> {
        if !self.is_idle() {
            return Err(SessionError::Busy);
        }
        let to = step(self.configuration, direction);
        let pending = PendingMove {
            from: self.configuration,
            to,
            direction,
            fatal: !to.is_legal(board),
        };
        log::trace!(
            "move {direction} from {} to {to}{}",
            pending.from,
            if pending.fatal { " (fatal)" } else { "" }
        );
        self.phase = Phase::Moving(pending);
        Ok(pending)
    }

    /// Commit the in-flight move and return to `Idle`.
    ///
    /// Fails with [`SessionError::NoMoveInFlight`] when idle.
    pub fn finish_move(&mut self) -> Result<MoveOutcome, SessionError> {
        let Phase::Moving(pending) = self.phase else {
            return Err(SessionError::NoMoveInFlight);
        };
        self.phase = Phase::Idle;
        if pending.fatal {
            self.respawn();
            Ok(MoveOutcome::Died {
                at: pending.to,
                respawn: self.configuration,
            })
        } else {
            self.configuration = pending.to;
            Ok(MoveOutcome::Settled(pending.to))
        }
    }

    /// Put the player back on its start cell, abandoning any move in flight.
    pub fn respawn(&mut self) {
        self.configuration = Configuration::single(self.start);
        self.phase = Phase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trestle_test_utils::grid_from_rows;

    fn p(r: i32, c: i32) -> Position {
        Position::new(r, c)
    }

    #[test]
    fn new_player_rests_on_start() {
        let player = Player::new(p(1, 2));
        assert_eq!(player.configuration(), Configuration::single(p(1, 2)));
        assert!(player.is_idle());
    }

    #[test]
    fn legal_move_settles() {
        let g = grid_from_rows(&["####"]);
        let mut player = Player::new(p(0, 0));
        let pending = player.begin_move(&g, Direction::East).unwrap();
        assert!(!pending.fatal);
        assert_eq!(player.phase(), Phase::Moving(pending));
        // Not committed until the move finishes.
        assert_eq!(player.configuration(), Configuration::single(p(0, 0)));

        let outcome = player.finish_move().unwrap();
        let span = Configuration::pair(p(0, 1), p(0, 2)).unwrap();
        assert_eq!(outcome, MoveOutcome::Settled(span));
        assert_eq!(player.configuration(), span);
        assert!(player.is_idle());
    }

    #[test]
    fn second_move_while_moving_is_busy() {
        let g = grid_from_rows(&["####"]);
        let mut player = Player::new(p(0, 0));
        player.begin_move(&g, Direction::East).unwrap();
        assert_eq!(
            player.begin_move(&g, Direction::East),
            Err(SessionError::Busy)
        );
    }

    #[test]
    fn finish_without_move_fails() {
        let mut player = Player::new(p(0, 0));
        assert_eq!(player.finish_move(), Err(SessionError::NoMoveInFlight));
    }

    #[test]
    fn fatal_move_respawns_at_start() {
        let g = grid_from_rows(&["####", "#-##"]);
        let mut player = Player::new(p(0, 0));
        player.begin_move(&g, Direction::East).unwrap();
        player.finish_move().unwrap();
        // Sliding the span south puts half of it on the hole.
        let pending = player.begin_move(&g, Direction::South).unwrap();
        assert!(pending.fatal);
        let outcome = player.finish_move().unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Died {
                at: Configuration::pair(p(1, 1), p(1, 2)).unwrap(),
                respawn: Configuration::single(p(0, 0)),
            }
        );
        assert_eq!(player.configuration(), Configuration::single(p(0, 0)));
    }

    #[test]
    fn stepping_off_the_board_is_fatal() {
        let g = grid_from_rows(&["##"]);
        let mut player = Player::new(p(0, 0));
        assert!(player.begin_move(&g, Direction::North).unwrap().fatal);
    }

    #[test]
    fn span_may_persist() {
        let g = grid_from_rows(&["###", "###"]);
        let mut player = Player::new(p(0, 0));
        player.begin_move(&g, Direction::East).unwrap();
        player.finish_move().unwrap();
        player.begin_move(&g, Direction::South).unwrap();
        let outcome = player.finish_move().unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Settled(Configuration::pair(p(1, 1), p(1, 2)).unwrap())
        );
    }
}
