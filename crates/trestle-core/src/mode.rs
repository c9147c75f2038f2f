//! Who is driving the player.

use std::fmt;

/// Whether the player is steered by direct input or by the path finder.
///
/// Held by the session and passed to whatever needs it; there is no
/// process-wide mode flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ControlMode {
    /// Moves come one at a time from the user. Board editing is allowed.
    #[default]
    Manual,
    /// The user picks a destination cell and a computed route is played back.
    Autopilot,
}

impl fmt::Display for ControlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manual => write!(f, "manual"),
            Self::Autopilot => write!(f, "autopilot"),
        }
    }
}
