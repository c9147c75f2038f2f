//! The movement rule.
//!
//! A single-cell player unrolls: it ends up on the next two cells in the
//! direction of travel. A two-cell player moving along its own axis
//! collapses onto the one cell just beyond the end it moves towards.
//! Moving across its axis slides both cells sideways.

use crate::configuration::Configuration;
use smallvec::SmallVec;
use std::cmp::Ordering;
use trestle_core::Direction;
use trestle_grid::Board;

/// A legal move out of a configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Transition {
    /// Direction taken.
    pub direction: Direction,
    /// Where the player ends up.
    pub to: Configuration,
}

/// Apply one move without looking at the board.
///
/// The result may be off the board or on empty cells; use
/// [`try_step`] or [`Configuration::is_legal`] to find out. Near the ends
/// of the `i32` range coordinates saturate, and an unroll that cannot fit
/// two distinct cells lands on the single saturated cell, which is off
/// the board either way.
///
/// # Examples
///
/// ```
/// use trestle_core::{Direction, Position};
/// use trestle_engine::{step, Configuration};
///
/// let start = Configuration::single(Position::new(0, 0));
/// let span = step(start, Direction::East);
/// assert_eq!(span, Configuration::pair(Position::new(0, 1), Position::new(0, 2)).unwrap());
/// assert_eq!(step(span, Direction::East), Configuration::single(Position::new(0, 3)));
/// assert_eq!(step(span, Direction::West), start);
/// ```
pub fn step(configuration: Configuration, direction: Direction) -> Configuration {
    match configuration.as_pair() {
        None => {
            let p = configuration.cells()[0];
            let far = p.offset(direction, 2);
            Configuration::pair(p.offset(direction, 1), far)
                .unwrap_or(Configuration::single(far))
        }
        Some((a, b)) => match direction.dot(a.delta_to(b)).cmp(&0) {
            Ordering::Less => Configuration::single(a + direction),
            Ordering::Greater => Configuration::single(b + direction),
            Ordering::Equal => Configuration::pair(a + direction, b + direction)
                .unwrap_or(Configuration::single(a + direction)),
        },
    }
}

/// Apply one move, keeping the result only if it is legal on `board`.
pub fn try_step<B: Board + ?Sized>(
    board: &B,
    configuration: Configuration,
    direction: Direction,
) -> Option<Configuration> {
    let next = step(configuration, direction);
    next.is_legal(board).then_some(next)
}

/// Every legal move out of `configuration`, in [`Direction::SEARCH_ORDER`].
pub fn transitions<B: Board + ?Sized>(
    board: &B,
    configuration: Configuration,
) -> SmallVec<[Transition; 4]> {
    Direction::SEARCH_ORDER
        .into_iter()
        .filter_map(|direction| {
            try_step(board, configuration, direction).map(|to| Transition { direction, to })
        })
        .collect()
}
