//! Board trait compliance test helpers.
//!
//! These functions verify that a Board implementation satisfies the
//! invariants required by the trait contract.

use crate::board::Board;
use crate::error::GridError;
use indexmap::IndexSet;
use trestle_core::Position;

/// Assert that every enumerated position is in bounds and readable.
pub fn assert_positions_readable(board: &dyn Board) {
    for pos in board.positions() {
        assert!(board.in_bounds(pos), "{pos} enumerated but not in bounds");
        assert!(
            board.cell_at(pos).is_ok(),
            "{pos} in bounds but cell_at failed"
        );
    }
}

/// Assert that `positions()` has `cell_count()` distinct, row-major entries.
pub fn assert_positions_unique_and_ordered(board: &dyn Board) {
    let positions = board.positions();
    assert_eq!(positions.len(), board.cell_count());
    let unique: IndexSet<Position> = positions.iter().copied().collect();
    assert_eq!(unique.len(), positions.len(), "duplicate positions");
    for pair in positions.windows(2) {
        assert!(pair[0] < pair[1], "{} not before {}", pair[0], pair[1]);
    }
}

/// Assert that positions just off each edge report `OutOfRange`.
pub fn assert_ring_out_of_range(board: &dyn Board) {
    let rows = board.rows() as i32;
    let cols = board.cols() as i32;
    let mut ring = Vec::new();
    for r in -1..=rows {
        ring.push(Position::new(r, -1));
        ring.push(Position::new(r, cols));
    }
    for c in 0..cols {
        ring.push(Position::new(-1, c));
        ring.push(Position::new(rows, c));
    }
    for pos in ring {
        assert!(!board.in_bounds(pos), "{pos} should be out of bounds");
        assert!(
            matches!(board.cell_at(pos), Err(GridError::OutOfRange { position, .. }) if position == pos),
            "{pos} should report OutOfRange"
        );
    }
}

/// Run all compliance checks.
pub fn run_full_compliance(board: &dyn Board) {
    assert_positions_readable(board);
    assert_positions_unique_and_ordered(board);
    assert_ring_out_of_range(board);
}
