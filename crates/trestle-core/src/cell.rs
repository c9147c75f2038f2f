//! Cell kinds and their map symbols.

use std::fmt;

/// What occupies a single board cell.
///
/// Only [`Cell::Solid`] can hold a player resting on one cell. A player
/// spread over two cells may stand on any mix of solid and weak cells.
/// Nothing may ever stand on [`Cell::Empty`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    /// A hole. Never legally occupied.
    #[default]
    Empty,
    /// Firm ground.
    Solid,
    /// Ground that only bears a player spread over two cells.
    Weak,
}

impl Cell {
    /// All cell kinds, in symbol-table order.
    pub const ALL: [Cell; 3] = [Cell::Empty, Cell::Solid, Cell::Weak];

    /// The character used for this cell in board maps.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Solid => '#',
            Cell::Weak => 'B',
        }
    }

    /// Parse a map character.
    pub fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            '-' => Some(Cell::Empty),
            '#' => Some(Cell::Solid),
            'B' => Some(Cell::Weak),
            _ => None,
        }
    }

    /// Whether a single-cell player may rest here.
    pub fn supports_rest(self) -> bool {
        self == Cell::Solid
    }

    /// Whether this cell may be one half of a two-cell player.
    pub fn supports_span(self) -> bool {
        self != Cell::Empty
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cell::Empty => "empty",
            Cell::Solid => "solid",
            Cell::Weak => "weak",
        };
        f.write_str(name)
    }
}
