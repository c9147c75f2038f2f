//! Movement rules, path search, and play sessions for Trestle.
//!
//! The player occupies either one cell or two adjacent cells. Every move
//! either unrolls a single cell into a two-cell span, collapses a span
//! onto one cell beyond its end, or slides the span sideways. This crate
//! provides:
//!
//! - [`Configuration`]: the canonical value type for what the player
//!   occupies, with its legality rule
//! - [`step`] and [`transitions`]: the movement rule
//! - [`find_path`]: breadth-first search over configurations
//! - [`Player`] and [`Session`]: the `Idle -> Moving -> Idle` state
//!   machine, board editing, and autopilot route playback, reporting
//!   state changes as [`SessionEvent`]s

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod configuration;
pub mod error;
pub mod event;
pub mod metrics;
pub mod player;
pub mod search;
pub mod session;
pub mod transition;

pub use config::{ConfigError, SessionConfig};
pub use configuration::{is_legal_configuration, Configuration};
pub use error::{SearchError, SessionError};
pub use event::{EventBus, SessionEvent};
pub use metrics::SearchMetrics;
pub use player::{MoveOutcome, PendingMove, Phase, Player};
pub use search::{find_path, find_path_with_metrics, reachable, MoveList, SearchOutcome};
pub use session::Session;
pub use transition::{step, transitions, try_step, Transition};
