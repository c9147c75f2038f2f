//! Boards for the Trestle grid puzzle.
//!
//! This crate defines the [`Board`] trait, the read-only view through which
//! legality checks and path search inspect cells, along with the dense
//! [`Grid`] backend and its text map format.
//!
//! # Map format
//!
//! One line per row, one character per cell: `-` empty, `#` solid,
//! `B` weak. See [`Grid::from_map`] for padding rules.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod error;
pub mod grid;
pub mod map;

#[cfg(test)]
pub(crate) mod compliance;

pub use board::Board;
pub use error::GridError;
pub use grid::Grid;
