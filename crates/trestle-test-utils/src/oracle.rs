//! Brute-force references for checking path search results.
//!
//! [`exhaustive_distances`] enumerates every legal configuration on a
//! board and relaxes edges until nothing changes, with no queue and no
//! early exit. It is slow, and shares nothing with the breadth-first
//! search beyond the single-step rule, which makes it a useful oracle on
//! small boards.

use std::collections::HashMap;
use std::fmt;

use trestle_core::Direction;
use trestle_engine::{step, Configuration};
use trestle_grid::Board;

/// Every legal configuration on `board`, singles first, in row-major order.
pub fn legal_configurations<B: Board + ?Sized>(board: &B) -> Vec<Configuration> {
    let positions = board.positions();
    let mut out: Vec<Configuration> = positions
        .iter()
        .map(|&p| Configuration::single(p))
        .filter(|c| c.is_legal(board))
        .collect();
    for &p in &positions {
        for neighbour in [p + Direction::East, p + Direction::South] {
            if let Some(pair) = Configuration::pair(p, neighbour) {
                if pair.is_legal(board) {
                    out.push(pair);
                }
            }
        }
    }
    out
}

/// Shortest move counts from `start` to every configuration reachable
/// from it, by fixed-point relaxation over all legal configurations.
///
/// Returns an empty map when `start` is illegal.
pub fn exhaustive_distances<B: Board + ?Sized>(
    board: &B,
    start: Configuration,
) -> HashMap<Configuration, usize> {
    let mut dist = HashMap::new();
    if !start.is_legal(board) {
        return dist;
    }
    let all = legal_configurations(board);
    dist.insert(start, 0usize);

    let mut changed = true;
    while changed {
        changed = false;
        for &from in &all {
            let Some(&d) = dist.get(&from) else {
                continue;
            };
            for direction in Direction::SEARCH_ORDER {
                let to = step(from, direction);
                if !to.is_legal(board) {
                    continue;
                }
                let best = dist.entry(to).or_insert(usize::MAX);
                if d + 1 < *best {
                    *best = d + 1;
                    changed = true;
                }
            }
        }
    }
    dist
}

/// Why a replayed move list was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplayError {
    /// The start configuration is not legal.
    IllegalStart,
    /// Move `index` leads to an illegal configuration.
    IllegalMove {
        index: usize,
        from: Configuration,
        direction: Direction,
    },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalStart => write!(f, "replay starts on an illegal configuration"),
            Self::IllegalMove {
                index,
                from,
                direction,
            } => write!(f, "move {index} ({direction} from {from}) is illegal"),
        }
    }
}

impl std::error::Error for ReplayError {}

/// Apply `moves` from `start`, requiring every intermediate configuration
/// to be legal. Returns the final configuration.
pub fn replay_moves<B: Board + ?Sized>(
    board: &B,
    start: Configuration,
    moves: &[Direction],
) -> Result<Configuration, ReplayError> {
    if !start.is_legal(board) {
        return Err(ReplayError::IllegalStart);
    }
    let mut at = start;
    for (index, &direction) in moves.iter().enumerate() {
        let next = step(at, direction);
        if !next.is_legal(board) {
            return Err(ReplayError::IllegalMove {
                index,
                from: at,
                direction,
            });
        }
        at = next;
    }
    Ok(at)
}
