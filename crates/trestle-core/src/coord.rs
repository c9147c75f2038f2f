//! Board positions and cardinal directions.

use std::fmt;
use std::ops::Add;

/// A `(row, col)` coordinate on the board.
///
/// Positions are signed: stepping off the top or left edge produces
/// negative coordinates, which boards report as out of range rather
/// than clamping. Arithmetic saturates at the ends of the `i32` range,
/// and a saturated coordinate lies past the last row or column any
/// `i32`-addressed board can have. Ordering is row-major, which is the
/// canonical order used for two-cell configurations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Row index, growing downwards.
    pub row: i32,
    /// Column index, growing rightwards.
    pub col: i32,
}

impl Position {
    /// Create a position from its row and column.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The position `steps` cells away in direction `dir`, saturating.
    pub fn offset(self, dir: Direction, steps: i32) -> Self {
        let (dr, dc) = dir.offset_2d();
        Self::new(
            self.row.saturating_add(dr.saturating_mul(steps)),
            self.col.saturating_add(dc.saturating_mul(steps)),
        )
    }

    /// The `(row, col)` vector from `self` to `other`, saturating.
    pub fn delta_to(self, other: Position) -> (i32, i32) {
        (
            other.row.saturating_sub(self.row),
            other.col.saturating_sub(self.col),
        )
    }

    /// Whether `other` shares an edge with `self`.
    pub fn is_adjacent(self, other: Position) -> bool {
        let dr = (i64::from(other.row) - i64::from(self.row)).abs();
        let dc = (i64::from(other.col) - i64::from(self.col)).abs();
        dr + dc == 1
    }
}

impl Add<Direction> for Position {
    type Output = Position;

    fn add(self, dir: Direction) -> Position {
        self.offset(dir, 1)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four cardinal movement directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// One row up (row - 1).
    North,
    /// One row down (row + 1).
    South,
    /// One column right (col + 1).
    East,
    /// One column left (col - 1).
    West,
}

impl Direction {
    /// The fixed order in which searches expand directions.
    ///
    /// Breadth-first search visits neighbours in this order, so it decides
    /// which of several equally short paths is returned.
    pub const SEARCH_ORDER: [Direction; 4] = [
        Direction::South,
        Direction::North,
        Direction::East,
        Direction::West,
    ];

    /// Returns the (row_offset, col_offset) for this direction.
    pub fn offset_2d(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Dot product of this direction's offset with a `(row, col)` vector,
    /// saturating.
    pub fn dot(self, (vr, vc): (i32, i32)) -> i32 {
        let (dr, dc) = self.offset_2d();
        dr.saturating_mul(vr).saturating_add(dc.saturating_mul(vc))
    }

    /// Lower-case name, as used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn offsets_are_unit_vectors() {
        for dir in Direction::SEARCH_ORDER {
            let (dr, dc) = dir.offset_2d();
            assert_eq!(dr.abs() + dc.abs(), 1, "{dir} is not a unit step");
        }
    }

    #[test]
    fn search_order_covers_every_direction_once() {
        let order = Direction::SEARCH_ORDER;
        for dir in [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
        ] {
            assert_eq!(order.iter().filter(|&&d| d == dir).count(), 1);
        }
    }

    #[test]
    fn add_direction_moves_one_cell() {
        let p = Position::new(3, 3);
        assert_eq!(p + Direction::North, Position::new(2, 3));
        assert_eq!(p + Direction::South, Position::new(4, 3));
        assert_eq!(p + Direction::East, Position::new(3, 4));
        assert_eq!(p + Direction::West, Position::new(3, 2));
    }

    #[test]
    fn offset_can_leave_the_positive_quadrant() {
        let p = Position::new(0, 0).offset(Direction::West, 2);
        assert_eq!(p, Position::new(0, -2));
    }

    #[test]
    fn offset_saturates_at_the_range_edges() {
        let low = Position::new(i32::MIN + 1, i32::MIN);
        assert_eq!(low.offset(Direction::North, 2), Position::new(i32::MIN, i32::MIN));
        assert_eq!(low + Direction::West, low);
        let high = Position::new(i32::MAX - 1, i32::MAX);
        assert_eq!(high.offset(Direction::South, 2), Position::new(i32::MAX, i32::MAX));
        assert_eq!(high + Direction::East, high);
    }

    #[test]
    fn adjacency_across_the_whole_range() {
        let low = Position::new(i32::MIN, 0);
        let high = Position::new(i32::MAX, 0);
        assert!(!low.is_adjacent(high));
        assert!(!high.is_adjacent(low));
        assert!(high.is_adjacent(Position::new(i32::MAX - 1, 0)));
        assert_eq!(low.delta_to(high), (i32::MAX, 0));
        assert_eq!(Direction::North.dot(low.delta_to(high)), -i32::MAX);
        assert_eq!(Direction::South.dot((i32::MIN, 0)), i32::MIN);
        assert_eq!(Direction::North.dot((i32::MIN, 0)), i32::MAX);
    }

    #[test]
    fn ordering_is_row_major() {
        assert!(Position::new(0, 5) < Position::new(1, 0));
        assert!(Position::new(2, 1) < Position::new(2, 2));
    }

    #[test]
    fn adjacency() {
        let p = Position::new(1, 1);
        assert!(p.is_adjacent(Position::new(0, 1)));
        assert!(p.is_adjacent(Position::new(1, 2)));
        assert!(!p.is_adjacent(Position::new(2, 2)));
        assert!(!p.is_adjacent(p));
    }

    #[test]
    fn display_formats() {
        assert_eq!(Position::new(-1, 4).to_string(), "(-1, 4)");
        assert_eq!(Direction::East.to_string(), "east");
    }

    proptest! {
        #[test]
        fn opposite_is_an_involution_and_cancels(
            r in -50i32..50,
            c in -50i32..50,
            idx in 0usize..4,
        ) {
            let dir = Direction::SEARCH_ORDER[idx];
            let p = Position::new(r, c);
            prop_assert_eq!(dir.opposite().opposite(), dir);
            prop_assert_eq!(p + dir + dir.opposite(), p);
            prop_assert_eq!(dir.dot(dir.opposite().offset_2d()), -1);
        }
    }
}
