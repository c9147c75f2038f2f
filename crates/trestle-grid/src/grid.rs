//! Dense row-major board storage.

use crate::board::Board;
use crate::error::GridError;
use std::fmt;
use trestle_core::{Cell, Position};

/// A rectangular board stored as a flat row-major cell vector.
///
/// Each cell has position `(row, col)` where `0 <= row < rows` and
/// `0 <= col < cols`. A fresh grid is all [`Cell::Empty`]; cells change
/// only through [`set_cell`](Grid::set_cell).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: u32,
    cols: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Maximum dimension size: positions use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Maximum total cell count (256 Mi cells, one byte each).
    pub const MAX_CELLS: usize = 1 << 28;

    /// Create an all-empty grid with `rows * cols` cells.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0,
    /// `Err(GridError::DimensionTooLarge)` if either exceeds `i32::MAX`, or
    /// `Err(GridError::TooManyCells)` if `rows * cols` exceeds
    /// [`MAX_CELLS`](Grid::MAX_CELLS).
    ///
    /// # Examples
    ///
    /// ```
    /// use trestle_grid::{Board, Grid};
    /// use trestle_core::{Cell, Position};
    ///
    /// let grid = Grid::new(15, 20).unwrap();
    /// assert_eq!(grid.cell_count(), 300);
    /// assert_eq!(grid.cell_at(Position::new(0, 0)), Ok(Cell::Empty));
    /// assert!(grid.cell_at(Position::new(15, 0)).is_err());
    /// ```
    pub fn new(rows: u32, cols: u32) -> Result<Self, GridError> {
        Self::filled(rows, cols, Cell::Empty)
    }

    /// Create a grid with every cell set to `cell`.
    pub fn filled(rows: u32, cols: u32, cell: Cell) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        if rows > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        let cell_count = (rows as usize)
            .checked_mul(cols as usize)
            .filter(|&n| n <= Self::MAX_CELLS)
            .ok_or(GridError::TooManyCells {
                rows,
                cols,
                max: Self::MAX_CELLS,
            })?;
        Ok(Self {
            rows,
            cols,
            cells: vec![cell; cell_count],
        })
    }

    /// Overwrite the cell at `position`, returning what was there before.
    pub fn set_cell(&mut self, position: Position, cell: Cell) -> Result<Cell, GridError> {
        let idx = self.index(position)?;
        Ok(std::mem::replace(&mut self.cells[idx], cell))
    }

    /// Number of cells of the given kind.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Iterate `(position, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        let cols = self.cols as usize;
        self.cells.iter().enumerate().map(move |(i, &cell)| {
            let pos = Position::new((i / cols) as i32, (i % cols) as i32);
            (pos, cell)
        })
    }

    /// Flat row-major index of an in-bounds position.
    fn index(&self, position: Position) -> Result<usize, GridError> {
        if !self.in_bounds(position) {
            return Err(GridError::OutOfRange {
                position,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok((position.row as usize) * (self.cols as usize) + (position.col as usize))
    }
}

impl Board for Grid {
    fn rows(&self) -> u32 {
        self.rows
    }

    fn cols(&self) -> u32 {
        self.cols
    }

    fn cell_at(&self, position: Position) -> Result<Cell, GridError> {
        let idx = self.index(position)?;
        Ok(self.cells[idx])
    }

    fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

/// Prints the board in map format, one line per row.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols as usize) {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
