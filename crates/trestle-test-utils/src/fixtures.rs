//! Board builders for tests.
//!
//! - [`grid_from_rows`]: a grid from literal map rows, panicking on bad input.
//! - [`random_grid`]: a seeded pseudo-random grid, identical for equal seeds.

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use trestle_core::Cell;
use trestle_grid::Grid;

/// Build a grid from map rows such as `["##-", "#B#"]`.
///
/// Dimensions come from the row count and the longest row; short rows are
/// padded with empty cells.
///
/// # Panics
///
/// On an empty row list or an unknown symbol. Fixtures are only used
/// with literal maps, where either is a typo in the test.
pub fn grid_from_rows(rows: &[&str]) -> Grid {
    let cols = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
    Grid::from_map(rows.len() as u32, cols as u32, rows)
        .unwrap_or_else(|e| panic!("bad fixture map {rows:?}: {e}"))
}

/// A `rows x cols` grid with cells drawn from a seeded ChaCha8 stream.
///
/// Roughly half the cells are solid, a third weak, the rest empty, which
/// keeps reachable components large enough to be interesting.
///
/// # Panics
///
/// If either dimension is zero.
pub fn random_grid(rows: u32, cols: u32, seed: u64) -> Grid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut grid =
        Grid::new(rows, cols).unwrap_or_else(|e| panic!("bad fixture size {rows}x{cols}: {e}"));
    for position in trestle_grid::Board::positions(&grid) {
        let cell = match rng.next_u32() % 6 {
            0..=2 => Cell::Solid,
            3 | 4 => Cell::Weak,
            _ => Cell::Empty,
        };
        grid.set_cell(position, cell)
            .unwrap_or_else(|e| panic!("position from positions() rejected: {e}"));
    }
    grid
}
