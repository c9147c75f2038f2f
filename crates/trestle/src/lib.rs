//! Trestle: grid puzzle rules and a shortest-path autopilot.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Trestle sub-crates. For most users, adding `trestle` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use trestle::prelude::*;
//!
//! // Solid ends, a weak bridge in between.
//! let grid = Grid::parse("#BB#").unwrap();
//! let start = Configuration::single(Position::new(0, 0));
//! let goal = Configuration::single(Position::new(0, 3));
//!
//! let outcome = find_path(&grid, start, goal).unwrap();
//! assert_eq!(outcome.moves(), Some(&[Direction::East, Direction::East][..]));
//!
//! // The same route, played through a session.
//! let config = SessionConfig {
//!     rows: 1,
//!     cols: 4,
//!     map: vec!["#BB#".into()],
//!     start: Some(Position::new(0, 0)),
//!     mode: ControlMode::Autopilot,
//! };
//! let mut session = Session::new(config).unwrap();
//! session.request_route(Position::new(0, 3)).unwrap();
//! assert_eq!(session.play_route(), Ok(2));
//! assert_eq!(session.player().unwrap().configuration(), goal);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `trestle-core` | Positions, directions, cell kinds, control mode |
//! | [`grid`] | `trestle-grid` | `Board` trait, `Grid`, map text format |
//! | [`engine`] | `trestle-engine` | Configurations, movement rule, path search, sessions |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Plain value types (`trestle-core`).
pub use trestle_core as types;

/// Boards and the map text format (`trestle-grid`).
///
/// [`grid::Board`] is the read-only seam every search runs over;
/// [`grid::Grid`] is the dense implementation.
pub use trestle_grid as grid;

/// Rules, search, and play sessions (`trestle-engine`).
///
/// [`engine::find_path`] for one-off searches, [`engine::Session`] for
/// stateful play with events.
pub use trestle_engine as engine;

/// Common imports for typical Trestle usage.
///
/// ```rust
/// use trestle::prelude::*;
/// ```
pub mod prelude {
    // Values
    pub use trestle_core::{Cell, ControlMode, Direction, Position};

    // Boards
    pub use trestle_grid::{Board, Grid};

    // Rules and search
    pub use trestle_engine::{
        find_path, is_legal_configuration, step, transitions, Configuration, SearchOutcome,
    };

    // Errors
    pub use trestle_engine::{ConfigError, SearchError, SessionError};
    pub use trestle_grid::GridError;

    // Sessions
    pub use trestle_engine::{MoveOutcome, Session, SessionConfig, SessionEvent};
}
