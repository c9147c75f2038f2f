//! Map text format.
//!
//! A map is a list of lines, one per board row, one character per cell
//! (`-` empty, `#` solid, `B` weak). When a map is laid onto a board of
//! fixed size, short or missing lines are padded with empty cells and
//! anything beyond the board edge is ignored.

use crate::error::GridError;
use crate::grid::Grid;
use trestle_core::{Cell, Position};

impl Grid {
    /// Lay `lines` onto a fresh `rows x cols` board.
    ///
    /// Line `i`, character `j` becomes cell `(i, j)`. Cells with no
    /// corresponding character stay [`Cell::Empty`]; characters past
    /// `cols` and lines past `rows` are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use trestle_grid::{Board, Grid};
    /// use trestle_core::{Cell, Position};
    ///
    /// let grid = Grid::from_map(2, 4, &["#B", "###########"]).unwrap();
    /// assert_eq!(grid.cell_at(Position::new(0, 1)), Ok(Cell::Weak));
    /// assert_eq!(grid.cell_at(Position::new(0, 3)), Ok(Cell::Empty));
    /// assert_eq!(grid.count(Cell::Solid), 5);
    /// ```
    pub fn from_map<S: AsRef<str>>(rows: u32, cols: u32, lines: &[S]) -> Result<Self, GridError> {
        let mut grid = Grid::new(rows, cols)?;
        for (r, line) in lines.iter().take(rows as usize).enumerate() {
            for (c, symbol) in line.as_ref().chars().take(cols as usize).enumerate() {
                let cell = Cell::from_symbol(symbol).ok_or(GridError::UnknownSymbol {
                    symbol,
                    row: r,
                    col: c,
                })?;
                if cell != Cell::Empty {
                    grid.set_cell(Position::new(r as i32, c as i32), cell)?;
                }
            }
        }
        Ok(grid)
    }

    /// Parse a whole map, sizing the board to fit it.
    ///
    /// Rows are the non-trailing lines of `text`; columns are the length
    /// of the longest line. Shorter lines are padded with empty cells.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = text.lines().map(|l| l.trim_end_matches('\r')).collect();
        let rows = lines.len();
        let cols = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let rows = u32::try_from(rows).map_err(|_| GridError::DimensionTooLarge {
            name: "rows",
            value: u32::MAX,
            max: Grid::MAX_DIM,
        })?;
        let cols = u32::try_from(cols).map_err(|_| GridError::DimensionTooLarge {
            name: "cols",
            value: u32::MAX,
            max: Grid::MAX_DIM,
        })?;
        Grid::from_map(rows, cols, &lines)
    }

    /// The board as map lines, the inverse of [`from_map`](Grid::from_map).
    pub fn to_map_lines(&self) -> Vec<String> {
        self.to_string().lines().map(str::to_owned).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    fn p(r: i32, c: i32) -> Position {
        Position::new(r, c)
    }

    #[test]
    fn missing_lines_are_padded_empty() {
        let g = Grid::from_map(3, 2, &["##"]).unwrap();
        assert_eq!(g.count(Cell::Solid), 2);
        assert_eq!(g.cell_at(p(1, 0)), Ok(Cell::Empty));
        assert_eq!(g.cell_at(p(2, 1)), Ok(Cell::Empty));
    }

    #[test]
    fn empty_map_gives_empty_board() {
        let lines: [&str; 0] = [];
        let g = Grid::from_map(15, 20, &lines).unwrap();
        assert_eq!(g.count(Cell::Empty), 300);
    }

    #[test]
    fn overflow_is_ignored() {
        let g = Grid::from_map(1, 2, &["#B#", "##"]).unwrap();
        assert_eq!(g.to_map_lines(), vec!["#B".to_string()]);
    }

    #[test]
    fn unknown_symbol_reports_location() {
        let err = Grid::from_map(2, 3, &["###", "#x#"]).unwrap_err();
        assert_eq!(
            err,
            GridError::UnknownSymbol {
                symbol: 'x',
                row: 1,
                col: 1,
            }
        );
    }

    #[test]
    fn symbols_past_the_edge_are_not_validated() {
        assert!(Grid::from_map(1, 1, &["#?"]).is_ok());
    }

    #[test]
    fn parse_infers_dimensions() {
        let g = Grid::parse("#B#\n#\n--#\n").unwrap();
        assert_eq!((g.rows(), g.cols()), (3, 3));
        assert_eq!(g.cell_at(p(0, 1)), Ok(Cell::Weak));
        assert_eq!(g.cell_at(p(1, 2)), Ok(Cell::Empty));
        assert_eq!(g.cell_at(p(2, 2)), Ok(Cell::Solid));
    }

    #[test]
    fn parse_accepts_crlf() {
        let g = Grid::parse("#B\r\n##\r\n").unwrap();
        assert_eq!((g.rows(), g.cols()), (2, 2));
    }

    #[test]
    fn parse_empty_text_is_an_empty_grid_error() {
        assert_eq!(Grid::parse(""), Err(GridError::EmptyGrid));
    }

    #[test]
    fn print_then_parse_restores_board() {
        let g = Grid::parse("#-B\nB#-\n").unwrap();
        assert_eq!(Grid::parse(&g.to_string()).unwrap(), g);
    }
}
