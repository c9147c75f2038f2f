//! Core value types for the Trestle grid puzzle.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! plain values every other crate in the workspace speaks in: board
//! positions, movement directions, cell kinds, and the control mode.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod coord;
pub mod mode;

pub use cell::Cell;
pub use coord::{Direction, Position};
pub use mode::ControlMode;
