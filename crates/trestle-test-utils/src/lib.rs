//! Test utilities and mock types for Trestle development.
//!
//! Provides a [`MockBoard`] implementation of [`Board`], board builders
//! in [`fixtures`], and brute-force reference checks in [`oracle`] for
//! validating the path search.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod oracle;

pub use fixtures::{grid_from_rows, random_grid};
pub use oracle::{exhaustive_distances, replay_moves, ReplayError};

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use trestle_core::{Cell, Position};
use trestle_grid::{Board, GridError};

/// Sparse mock implementation of [`Board`].
///
/// Backed by a `HashMap<Position, Cell>`; unset in-bounds cells read as
/// [`Cell::Empty`]. Counts every `cell_at` call so tests can check how
/// much of a board an algorithm touched.
pub struct MockBoard {
    rows: u32,
    cols: u32,
    cells: HashMap<Position, Cell>,
    queries: AtomicUsize,
}

impl MockBoard {
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            cells: HashMap::new(),
            queries: AtomicUsize::new(0),
        }
    }

    /// Set a cell. Positions outside the board are stored but never read.
    pub fn set(&mut self, position: Position, cell: Cell) -> &mut Self {
        self.cells.insert(position, cell);
        self
    }

    /// Number of `cell_at` calls so far, including out-of-range ones.
    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::Relaxed)
    }

    pub fn reset_queries(&self) {
        self.queries.store(0, Ordering::Relaxed);
    }
}

impl Board for MockBoard {
    fn rows(&self) -> u32 {
        self.rows
    }

    fn cols(&self) -> u32 {
        self.cols
    }

    fn cell_at(&self, position: Position) -> Result<Cell, GridError> {
        self.queries.fetch_add(1, Ordering::Relaxed);
        if !self.in_bounds(position) {
            return Err(GridError::OutOfRange {
                position,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.cells.get(&position).copied().unwrap_or_default())
    }
}
