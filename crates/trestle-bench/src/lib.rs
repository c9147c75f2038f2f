//! Benchmark profiles for the Trestle path search.
//!
//! Provides pre-built boards with a start and a destination:
//!
//! - [`open_field`]: an all-solid square board, start and goal in opposite corners
//! - [`weak_maze`]: a seeded mix of solid, weak, and empty cells
//! - [`stepping_stones`]: a single-row strip whose goal needs every move

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use trestle_core::{Cell, Position};
use trestle_engine::Configuration;
use trestle_grid::{Board, Grid, GridError};

/// A board plus the endpoints to search between.
#[derive(Clone, Debug)]
pub struct BenchProfile {
    pub grid: Grid,
    pub start: Configuration,
    pub destination: Configuration,
}

impl BenchProfile {
    fn corner_to_corner(grid: Grid) -> Self {
        let far = Position::new(grid.rows() as i32 - 1, grid.cols() as i32 - 1);
        Self {
            grid,
            start: Configuration::single(Position::new(0, 0)),
            destination: Configuration::single(far),
        }
    }
}

/// `size x size` all-solid board (size >= 3 keeps every cell reachable).
pub fn open_field(size: u32) -> Result<BenchProfile, GridError> {
    Ok(BenchProfile::corner_to_corner(Grid::filled(
        size,
        size,
        Cell::Solid,
    )?))
}

/// `size x size` board drawn from a ChaCha8 stream seeded with `seed`.
///
/// About 60% solid, 25% weak, 15% empty. The two corners are forced
/// solid so both endpoints are legal; whether the goal is reachable
/// depends on the seed.
pub fn weak_maze(size: u32, seed: u64) -> Result<BenchProfile, GridError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut grid = Grid::new(size, size)?;
    for position in grid.positions() {
        let cell = match rng.next_u32() % 20 {
            0..=11 => Cell::Solid,
            12..=16 => Cell::Weak,
            _ => Cell::Empty,
        };
        grid.set_cell(position, cell)?;
    }
    let profile = BenchProfile::corner_to_corner(grid);
    let mut grid = profile.grid;
    for end in [profile.start, profile.destination] {
        for p in end.cells() {
            grid.set_cell(p, Cell::Solid)?;
        }
    }
    Ok(BenchProfile { grid, ..profile })
}

/// `1 x len` strip, solid on every third column and weak between.
///
/// The player can only hop from stone to stone, two moves per hop, so
/// with `len = 3k + 1` the goal sits exactly `2k` moves away.
pub fn stepping_stones(len: u32) -> Result<BenchProfile, GridError> {
    let mut grid = Grid::filled(1, len, Cell::Weak)?;
    for col in (0..len as i32).step_by(3) {
        grid.set_cell(Position::new(0, col), Cell::Solid)?;
    }
    grid.set_cell(Position::new(0, len as i32 - 1), Cell::Solid)?;
    Ok(BenchProfile::corner_to_corner(grid))
}
