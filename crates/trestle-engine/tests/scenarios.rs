//! Integration test: worked board scenarios and full session flows.

use trestle_core::{Cell, ControlMode, Direction, Position};
use trestle_engine::{
    find_path, reachable, step, Configuration, MoveOutcome, SearchError, SearchOutcome, Session,
    SessionConfig, SessionError, SessionEvent,
};
use trestle_test_utils::{grid_from_rows, replay_moves};

fn p(r: i32, c: i32) -> Position {
    Position::new(r, c)
}

fn single(r: i32, c: i32) -> Configuration {
    Configuration::single(p(r, c))
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ── Search scenarios ────────────────────────────────────────────

#[test]
fn ring_around_a_hole() {
    init_logging();
    let grid = grid_from_rows(&["###", "#-#", "###"]);
    let start = single(0, 0);

    let reached = reachable(&grid, start).unwrap();
    let mut configs: Vec<_> = reached.keys().copied().collect();
    configs.sort();
    assert_eq!(
        configs,
        vec![
            single(0, 0),
            Configuration::pair(p(0, 1), p(0, 2)).unwrap(),
            Configuration::pair(p(1, 0), p(2, 0)).unwrap(),
        ]
    );
    assert!(reached.keys().all(|c| !c.contains(p(1, 1))));
    assert_eq!(find_path(&grid, start, single(2, 2)), Ok(SearchOutcome::NoPathFound));
}

#[test]
fn weak_cells_carry_a_span_but_not_a_rest() {
    let grid = grid_from_rows(&["#B#"]);
    let start = single(0, 0);
    assert_eq!(find_path(&grid, start, single(0, 2)), Ok(SearchOutcome::NoPathFound));

    let bridge = Configuration::pair(p(0, 1), p(0, 2)).unwrap();
    assert_eq!(
        find_path(&grid, start, bridge),
        Ok(SearchOutcome::Found(vec![Direction::East]))
    );

    let grid = grid_from_rows(&["#BB#"]);
    assert_eq!(
        find_path(&grid, start, single(0, 3)),
        Ok(SearchOutcome::Found(vec![Direction::East, Direction::East]))
    );
}

#[test]
fn empty_corner_is_unreachable() {
    let grid = grid_from_rows(&["##", "#-"]);
    assert_eq!(
        find_path(&grid, single(0, 0), single(1, 1)),
        Ok(SearchOutcome::NoPathFound)
    );
}

#[test]
fn rejects_bad_endpoints() {
    let grid = grid_from_rows(&["#-"]);
    assert_eq!(
        find_path(&grid, single(0, 1), single(0, 0)),
        Err(SearchError::IllegalStart { start: single(0, 1) })
    );
    assert_eq!(
        find_path(&grid, single(0, 0), single(0, 5)),
        Err(SearchError::IllegalDestination {
            destination: single(0, 5)
        })
    );
}

#[test]
fn pair_order_does_not_matter() {
    let a = p(2, 3);
    let b = p(2, 4);
    let ab = Configuration::pair(a, b).unwrap();
    let ba = Configuration::pair(b, a).unwrap();
    assert_eq!(ab, ba);
    for d in Direction::SEARCH_ORDER {
        assert_eq!(step(ab, d), step(ba, d));
    }
}

#[test]
fn long_route_replays_cleanly() {
    // Each descent unrolls onto the weak column and collapses one row past it.
    let grid = grid_from_rows(&["#######", "------B", "------B", "#######"]);
    let start = single(0, 0);
    let goal = single(3, 0);
    let SearchOutcome::Found(moves) = find_path(&grid, start, goal).unwrap() else {
        panic!("switchback should be solvable");
    };
    assert_eq!(moves.len(), 10);
    assert_eq!(replay_moves(&grid, start, &moves), Ok(goal));
}

// ── Session flows ───────────────────────────────────────────────

fn config(map: &[&str]) -> SessionConfig {
    SessionConfig {
        rows: map.len() as u32,
        cols: map[0].len() as u32,
        map: map.iter().map(|l| l.to_string()).collect(),
        start: None,
        mode: ControlMode::Manual,
    }
}

#[test]
fn edit_place_play_and_route() {
    init_logging();
    let mut session = Session::new(config(&["----", "----"])).unwrap();
    let events = session.subscribe();

    for col in 0..4 {
        session.set_cell(p(0, col), Cell::Solid).unwrap();
    }
    session.set_cell(p(1, 3), Cell::Solid).unwrap();
    session.place_player(p(0, 0)).unwrap();

    // East unrolls onto (0,1)-(0,2); east again collapses onto (0,3).
    session.manual_move(Direction::East).unwrap();
    assert!(matches!(session.finish_move(), Ok(MoveOutcome::Settled(_))));
    session.manual_move(Direction::East).unwrap();
    assert_eq!(session.finish_move(), Ok(MoveOutcome::Settled(single(0, 3))));

    // South unrolls onto (1,3)-(2,3), off the board: fatal.
    session.manual_move(Direction::South).unwrap();
    assert_eq!(
        session.finish_move(),
        Ok(MoveOutcome::Died {
            at: Configuration::pair(p(1, 3), p(2, 3)).unwrap(),
            respawn: single(0, 0),
        })
    );

    session.set_mode(ControlMode::Autopilot).unwrap();
    let outcome = session.request_route(p(0, 3)).unwrap();
    assert_eq!(outcome.moves(), Some(&[Direction::East, Direction::East][..]));
    assert_eq!(session.play_route(), Ok(2));
    assert_eq!(session.player().unwrap().configuration(), single(0, 3));
    session.set_mode(ControlMode::Manual).unwrap();

    let kinds: Vec<&str> = events
        .try_iter()
        .map(|e| match e {
            SessionEvent::CellChanged { .. } => "cell",
            SessionEvent::PlayerPlaced { .. } => "placed",
            SessionEvent::PlayerRemoved { .. } => "removed",
            SessionEvent::ModeChanged { .. } => "mode",
            SessionEvent::MoveStarted(_) => "start",
            SessionEvent::MoveFinished(_) => "finish",
            SessionEvent::RoutePlanned { .. } => "planned",
            SessionEvent::RouteUnreachable { .. } => "unreachable",
            SessionEvent::RouteAborted { .. } => "aborted",
            SessionEvent::RouteCompleted { .. } => "completed",
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            "cell", "cell", "cell", "cell", "cell", "placed", //
            "start", "finish", "start", "finish", "start", "finish", //
            "mode", "planned", "start", "finish", "start", "finish", "completed", //
            "mode",
        ]
    );
}

#[test]
fn autopilot_lifecycle_errors() {
    let mut cfg = config(&["####"]);
    cfg.start = Some(p(0, 0));
    let mut session = Session::new(cfg).unwrap();

    assert_eq!(session.advance_route(), Err(SessionError::NoRoute));
    session.set_mode(ControlMode::Autopilot).unwrap();
    assert!(matches!(
        session.request_route(p(5, 5)),
        Err(SessionError::Grid(_))
    ));
    assert_eq!(
        session.request_route(p(0, 2)),
        Ok(SearchOutcome::NoPathFound)
    );
    assert!(!session.is_routing());
    session.request_route(p(0, 3)).unwrap();
    assert_eq!(session.remaining_route(), 2);
    session.play_route().unwrap();
    assert_eq!(session.player().unwrap().configuration(), single(0, 3));
}
