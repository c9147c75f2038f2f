//! Breadth-first search over player configurations.
//!
//! Graph nodes are legal [`Configuration`]s and edges are the legal moves
//! produced by [`transitions`]. Nodes are discovered lazily, so only the
//! component reachable from the start is ever visited.
//!
//! The visited set, predecessor links and FIFO frontier share one
//! insertion-ordered map: entries are appended as they are discovered and
//! expanded in index order, so the map's order *is* the queue.

use crate::configuration::Configuration;
use crate::error::SearchError;
use crate::metrics::SearchMetrics;
use crate::transition::transitions;
use indexmap::IndexMap;
use std::time::Instant;
use trestle_core::Direction;
use trestle_grid::Board;

/// Directions in the order they are played, first move first.
pub type MoveList = Vec<Direction>;

/// Result of a path search over valid inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A shortest path. Empty when start and destination coincide.
    Found(MoveList),
    /// The destination is not reachable from the start.
    NoPathFound,
}

impl SearchOutcome {
    /// The moves of a found path.
    pub fn moves(&self) -> Option<&[Direction]> {
        match self {
            Self::Found(moves) => Some(moves),
            Self::NoPathFound => None,
        }
    }

    /// Whether a path was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// How a discovered configuration was first reached.
#[derive(Clone, Copy, Debug)]
struct Link {
    /// Index of the predecessor in the node map.
    parent: usize,
    direction: Direction,
}

type NodeMap = IndexMap<Configuration, Option<Link>>;

/// Find a shortest move list from `start` to `destination`.
///
/// Among equally short paths, the one whose moves come earliest in
/// [`Direction::SEARCH_ORDER`] at the first point of difference is
/// returned.
///
/// # Errors
///
/// [`SearchError::IllegalStart`] if `start` is not legal on `board`, and
/// [`SearchError::IllegalDestination`] if a destination cell is off the
/// board. A destination that is on the board but can never be occupied
/// yields [`SearchOutcome::NoPathFound`].
///
/// # Examples
///
/// ```
/// use trestle_core::{Direction, Position};
/// use trestle_engine::{find_path, Configuration, SearchOutcome};
/// use trestle_grid::Grid;
///
/// let board = Grid::parse("#BB#").unwrap();
/// let start = Configuration::single(Position::new(0, 0));
/// let goal = Configuration::single(Position::new(0, 3));
/// assert_eq!(
///     find_path(&board, start, goal),
///     Ok(SearchOutcome::Found(vec![Direction::East, Direction::East])),
/// );
/// ```
pub fn find_path<B: Board + ?Sized>(
    board: &B,
    start: Configuration,
    destination: Configuration,
) -> Result<SearchOutcome, SearchError> {
    find_path_with_metrics(board, start, destination).map(|(outcome, _)| outcome)
}

/// [`find_path`], also reporting how much of the graph was explored.
pub fn find_path_with_metrics<B: Board + ?Sized>(
    board: &B,
    start: Configuration,
    destination: Configuration,
) -> Result<(SearchOutcome, SearchMetrics), SearchError> {
    validate_start(board, start)?;
    if !destination.cells().iter().all(|&p| board.in_bounds(p)) {
        return Err(SearchError::IllegalDestination { destination });
    }

    let started = Instant::now();
    let mut metrics = SearchMetrics::default();

    let mut nodes = NodeMap::new();
    nodes.insert(start, None);

    let reached = if start == destination {
        Some(0)
    } else {
        search(board, &mut nodes, &mut metrics, destination)
    };

    metrics.discovered = nodes.len();
    metrics.elapsed_us = started.elapsed().as_micros() as u64;

    let outcome = match reached {
        Some(index) => {
            let moves = reconstruct(&nodes, index);
            metrics.path_len = Some(moves.len());
            SearchOutcome::Found(moves)
        }
        None => SearchOutcome::NoPathFound,
    };

    log::debug!(
        "path search {start} -> {destination}: {} (expanded {}, discovered {}, {}us)",
        match metrics.path_len {
            Some(n) => format!("{n} moves"),
            None => "unreachable".to_string(),
        },
        metrics.expanded,
        metrics.discovered,
        metrics.elapsed_us,
    );

    Ok((outcome, metrics))
}

/// Shortest move counts to every configuration reachable from `start`.
///
/// Entries are in discovery order, so the start comes first with
/// distance 0 and distances never decrease.
pub fn reachable<B: Board + ?Sized>(
    board: &B,
    start: Configuration,
) -> Result<IndexMap<Configuration, usize>, SearchError> {
    validate_start(board, start)?;

    let mut distances = IndexMap::new();
    distances.insert(start, 0usize);
    let mut cursor = 0;
    while let Some((&current, &dist)) = distances.get_index(cursor) {
        cursor += 1;
        for t in transitions(board, current) {
            distances.entry(t.to).or_insert(dist + 1);
        }
    }
    Ok(distances)
}

fn validate_start<B: Board + ?Sized>(board: &B, start: Configuration) -> Result<(), SearchError> {
    if start.is_legal(board) {
        Ok(())
    } else {
        Err(SearchError::IllegalStart { start })
    }
}

/// Expand nodes in FIFO order until `destination` is discovered.
///
/// Returns the destination's index in `nodes`, or `None` once the
/// reachable component is exhausted.
fn search<B: Board + ?Sized>(
    board: &B,
    nodes: &mut NodeMap,
    metrics: &mut SearchMetrics,
    destination: Configuration,
) -> Option<usize> {
    let mut cursor = 0;
    while let Some((&current, _)) = nodes.get_index(cursor) {
        let parent = cursor;
        cursor += 1;
        metrics.expanded += 1;

        for t in transitions(board, current) {
            if nodes.contains_key(&t.to) {
                continue;
            }
            let link = Link {
                parent,
                direction: t.direction,
            };
            let (index, _) = nodes.insert_full(t.to, Some(link));
            log::trace!("discovered {} via {} from {current}", t.to, t.direction);
            if t.to == destination {
                return Some(index);
            }
        }
    }
    None
}

/// Walk predecessor links back from `index` to the start.
fn reconstruct(nodes: &NodeMap, mut index: usize) -> MoveList {
    let mut moves = Vec::new();
    while let Some((_, Some(link))) = nodes.get_index(index) {
        moves.push(link.direction);
        index = link.parent;
    }
    moves.reverse();
    moves
}
