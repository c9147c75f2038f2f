//! The `Board` trait.

use crate::error::GridError;
use trestle_core::{Cell, Position};

/// Read-only view of a rectangular board.
///
/// Legality checks and path search only ever read through this trait, so
/// any cell store can be searched. Implementations must answer
/// consistently for the duration of a search; callers that edit a board
/// do so between searches, never during one.
pub trait Board {
    /// Number of rows.
    fn rows(&self) -> u32;

    /// Number of columns.
    fn cols(&self) -> u32;

    /// The cell at `position`.
    ///
    /// Returns [`GridError::OutOfRange`] outside `[0, rows) x [0, cols)`.
    fn cell_at(&self, position: Position) -> Result<Cell, GridError>;

    /// Whether `position` lies on the board.
    fn in_bounds(&self, position: Position) -> bool {
        position.row >= 0
            && position.col >= 0
            && (position.row as i64) < self.rows() as i64
            && (position.col as i64) < self.cols() as i64
    }

    /// Total number of cells.
    fn cell_count(&self) -> usize {
        (self.rows() as usize).saturating_mul(self.cols() as usize)
    }

    /// Every position in row-major order.
    ///
    /// Positions are `i32`, so rows and columns past `i32::MAX` cannot be
    /// addressed and are not listed.
    fn positions(&self) -> Vec<Position> {
        let rows = addressable(self.rows());
        let cols = addressable(self.cols());
        let mut out = Vec::with_capacity((rows as usize).saturating_mul(cols as usize));
        for r in 0..rows {
            for c in 0..cols {
                out.push(Position::new(r, c));
            }
        }
        out
    }
}

/// Number of indices along an axis that an `i32` coordinate can reach.
fn addressable(len: u32) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX)
}

impl<B: Board + ?Sized> Board for &B {
    fn rows(&self) -> u32 {
        (**self).rows()
    }

    fn cols(&self) -> u32 {
        (**self).cols()
    }

    fn cell_at(&self, position: Position) -> Result<Cell, GridError> {
        (**self).cell_at(position)
    }

    fn in_bounds(&self, position: Position) -> bool {
        (**self).in_bounds(position)
    }
}
