//! Error types for board construction and cell queries.

use std::fmt;
use trestle_core::Position;

/// Errors arising from grid construction, map parsing, or cell queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A position lies outside the board.
    OutOfRange {
        /// The offending position.
        position: Position,
        /// Board row count.
        rows: u32,
        /// Board column count.
        cols: u32,
    },
    /// Attempted to construct a board with zero cells.
    EmptyGrid,
    /// A dimension exceeds what signed positions can address.
    DimensionTooLarge {
        /// Which dimension (`"rows"` or `"cols"`).
        name: &'static str,
        /// The requested size.
        value: u32,
        /// The largest accepted size.
        max: u32,
    },
    /// The board would hold more cells than a grid allocates.
    TooManyCells {
        /// Requested row count.
        rows: u32,
        /// Requested column count.
        cols: u32,
        /// The largest accepted cell count.
        max: usize,
    },
    /// A map contains a character that is not a cell symbol.
    UnknownSymbol {
        /// The unrecognised character.
        symbol: char,
        /// Map row of the character.
        row: usize,
        /// Map column of the character.
        col: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                position,
                rows,
                cols,
            } => {
                write!(f, "position {position} out of range: [0, {rows}) x [0, {cols})")
            }
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum of {max}")
            }
            Self::TooManyCells { rows, cols, max } => {
                write!(f, "{rows} x {cols} board exceeds maximum of {max} cells")
            }
            Self::UnknownSymbol { symbol, row, col } => {
                write!(f, "unknown map symbol {symbol:?} at line {row}, column {col}")
            }
        }
    }
}

impl std::error::Error for GridError {}
