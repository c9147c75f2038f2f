//! The set of cells the player occupies.

use smallvec::{smallvec, SmallVec};
use std::fmt;
use trestle_core::Position;
use trestle_grid::Board;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
enum Shape {
    Single(Position),
    /// Adjacent cells, first < second in row-major order.
    Pair(Position, Position),
}

/// The one or two cells occupied by the player.
///
/// Two-cell configurations are always adjacent and stored in row-major
/// order, so the derived `Eq` and `Hash` compare occupied sets regardless
/// of the order cells were supplied in. This makes configurations usable
/// directly as search keys.
///
/// # Examples
///
/// ```
/// use trestle_core::Position;
/// use trestle_engine::Configuration;
///
/// let a = Position::new(2, 3);
/// let b = Position::new(2, 4);
/// assert_eq!(Configuration::pair(a, b), Configuration::pair(b, a));
/// assert!(Configuration::pair(a, Position::new(3, 4)).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Configuration {
    shape: Shape,
}

impl Configuration {
    /// A player resting on one cell.
    pub fn single(position: Position) -> Self {
        Self {
            shape: Shape::Single(position),
        }
    }

    /// A player spread over two cells.
    ///
    /// Returns `None` unless `a` and `b` share an edge.
    pub fn pair(a: Position, b: Position) -> Option<Self> {
        if !a.is_adjacent(b) {
            return None;
        }
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        Some(Self {
            shape: Shape::Pair(first, second),
        })
    }

    /// Build from a list of occupied cells.
    ///
    /// Duplicates are merged, so `[p, p]` is the single cell `p`. Returns
    /// `None` for an empty list, more than two distinct cells, or two
    /// cells that are not adjacent.
    pub fn from_cells(cells: &[Position]) -> Option<Self> {
        let mut cells: SmallVec<[Position; 2]> = cells.iter().copied().collect();
        cells.sort();
        cells.dedup();
        match cells.as_slice() {
            [p] => Some(Self::single(*p)),
            [a, b] => Self::pair(*a, *b),
            _ => None,
        }
    }

    /// Number of occupied cells (1 or 2).
    pub fn len(&self) -> usize {
        match self.shape {
            Shape::Single(_) => 1,
            Shape::Pair(..) => 2,
        }
    }

    /// Always `false`: a configuration occupies at least one cell.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether the player rests on a single cell.
    pub fn is_single(&self) -> bool {
        matches!(self.shape, Shape::Single(_))
    }

    /// The occupied cell, if the player rests on exactly one.
    pub fn as_single(&self) -> Option<Position> {
        match self.shape {
            Shape::Single(p) => Some(p),
            Shape::Pair(..) => None,
        }
    }

    /// The two occupied cells in row-major order, if spread over two.
    pub fn as_pair(&self) -> Option<(Position, Position)> {
        match self.shape {
            Shape::Single(_) => None,
            Shape::Pair(a, b) => Some((a, b)),
        }
    }

    /// Occupied cells in row-major order.
    pub fn cells(&self) -> SmallVec<[Position; 2]> {
        match self.shape {
            Shape::Single(p) => smallvec![p],
            Shape::Pair(a, b) => smallvec![a, b],
        }
    }

    /// Whether `position` is occupied.
    pub fn contains(&self, position: Position) -> bool {
        match self.shape {
            Shape::Single(p) => p == position,
            Shape::Pair(a, b) => a == position || b == position,
        }
    }

    /// Top-left cell and `(rows, cols)` extent of the occupied rectangle.
    ///
    /// This is what a view needs to size and place the player sprite.
    pub fn bounds(&self) -> (Position, (u32, u32)) {
        match self.shape {
            Shape::Single(p) => (p, (1, 1)),
            Shape::Pair(a, b) => {
                let (dr, dc) = a.delta_to(b);
                (a, (dr as u32 + 1, dc as u32 + 1))
            }
        }
    }

    /// Whether the player may stand here on `board`.
    ///
    /// Every cell must be on the board. A single cell must be solid; a
    /// two-cell span may mix solid and weak cells but never touch an
    /// empty one.
    pub fn is_legal<B: Board + ?Sized>(&self, board: &B) -> bool {
        match self.shape {
            Shape::Single(p) => board.cell_at(p).is_ok_and(|c| c.supports_rest()),
            Shape::Pair(a, b) => [a, b]
                .into_iter()
                .all(|p| board.cell_at(p).is_ok_and(|c| c.supports_span())),
        }
    }
}

/// Free-function form of [`Configuration::is_legal`].
pub fn is_legal_configuration<B: Board + ?Sized>(board: &B, configuration: &Configuration) -> bool {
    configuration.is_legal(board)
}

impl From<Position> for Configuration {
    fn from(position: Position) -> Self {
        Self::single(position)
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.shape {
            Shape::Single(p) => write!(f, "{{{p}}}"),
            Shape::Pair(a, b) => write!(f, "{{{a}, {b}}}"),
        }
    }
}
