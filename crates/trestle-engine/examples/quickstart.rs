//! Trestle Quickstart: a board, a player, and an autopilot route.
//!
//! Demonstrates:
//!   1. Building a session from a text map
//!   2. Moving the player by hand and watching it die and respawn
//!   3. Switching to autopilot and planning a route across weak cells
//!   4. Playing the route back move by move while draining events
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example quickstart

use trestle_core::{ControlMode, Direction, Position};
use trestle_engine::{MoveOutcome, SearchOutcome, Session, SessionConfig, SessionEvent};

// ─── Board ──────────────────────────────────────────────────────

// Weak bridges on the top and bottom rows, joined by a weak drop on
// the right. The column under the start is open, so unrolling south
// from the start falls through.
const MAP: [&str; 4] = [
    "#BB#BB#",
    "------B",
    "------B",
    "#BB#BB#",
];

const START: Position = Position::new(0, 0);
const GOAL: Position = Position::new(3, 0);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = SessionConfig {
        rows: MAP.len() as u32,
        cols: MAP[0].len() as u32,
        map: MAP.iter().map(|l| l.to_string()).collect(),
        start: Some(START),
        mode: ControlMode::Manual,
    };
    let mut session = Session::new(config)?;
    let events = session.subscribe();
    println!("{}", session.grid());

    // ─── Manual play ────────────────────────────────────────────

    // Unrolling south spans (1,0)-(2,0), both empty, so this is fatal.
    let pending = session.manual_move(Direction::South)?;
    println!(
        "moving {} from {} to {} (fatal: {})",
        pending.direction, pending.from, pending.to, pending.fatal
    );
    match session.finish_move()? {
        MoveOutcome::Settled(at) => println!("settled on {at}"),
        MoveOutcome::Died { at, respawn } => println!("died on {at}, back at {respawn}"),
    }

    // ─── Autopilot ──────────────────────────────────────────────

    session.set_mode(ControlMode::Autopilot)?;
    match session.request_route(GOAL)? {
        SearchOutcome::Found(moves) => {
            let names: Vec<_> = moves.iter().map(|d| d.name()).collect();
            println!("route to {GOAL}: {}", names.join(" "));
        }
        SearchOutcome::NoPathFound => return Err(format!("{GOAL} is unreachable").into()),
    }
    let metrics = session.last_search_metrics();
    println!(
        "search expanded {} and discovered {} configurations in {}us",
        metrics.expanded, metrics.discovered, metrics.elapsed_us
    );

    while session.is_routing() {
        let pending = session.advance_route()?;
        // A view layer would animate `pending` here before finishing it.
        session.finish_move()?;
        println!("  {} -> {}", pending.direction, pending.to);
    }

    for event in events.try_iter() {
        if let SessionEvent::RouteCompleted { configuration } = event {
            println!("arrived at {configuration}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use trestle_engine::{find_path, step, Configuration};
    use trestle_grid::Grid;

    fn grid() -> Grid {
        Grid::from_map(MAP.len() as u32, MAP[0].len() as u32, &MAP).unwrap()
    }

    #[test]
    fn first_move_is_fatal() {
        let start = Configuration::single(START);
        assert!(!step(start, Direction::South).is_legal(&grid()));
    }

    #[test]
    fn goal_is_reachable_over_weak_cells() {
        let outcome = find_path(
            &grid(),
            Configuration::single(START),
            Configuration::single(GOAL),
        )
        .unwrap();
        assert_eq!(outcome.moves().map(<[_]>::len), Some(10));
    }

    #[test]
    fn quickstart_runs() {
        main().unwrap();
    }
}
