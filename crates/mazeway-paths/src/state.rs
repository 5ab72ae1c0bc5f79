use std::fmt;

use mazeway_core::{Heading, Point, Range};

use crate::cost::Cost;

/// A search vertex: a cell together with the heading the walker faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State {
    pub pos: Point,
    pub heading: Heading,
}

impl State {
    #[inline]
    pub const fn new(pos: Point, heading: Heading) -> Self {
        Self { pos, heading }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pos, self.heading)
    }
}

// ---------------------------------------------------------------------------
// Flat state indexing
// ---------------------------------------------------------------------------

/// Bijection between the states of a [`Range`] and `0..4 * range.len()`.
///
/// Index layout is `cell_index * 4 + heading.index()`, so the four states
/// of a cell are contiguous.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StateSpace {
    rng: Range,
}

impl StateSpace {
    pub(crate) fn new(rng: Range) -> Self {
        Self { rng }
    }

    /// Number of states.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.rng.len() * 4
    }

    /// Convert a `State` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, s: State) -> Option<usize> {
        self.rng.index(s.pos).map(|c| c * 4 + s.heading.index())
    }

    /// Convert a flat index back to a `State`.
    #[inline]
    pub(crate) fn state(&self, idx: usize) -> State {
        State::new(self.rng.point(idx / 4), Heading::from_index(idx % 4))
    }
}

// ---------------------------------------------------------------------------
// Frontier entries
// ---------------------------------------------------------------------------

/// Reference into the state tables, ordered by `cost` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) cost: Cost,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest cost first; the
        // index breaks ties so pop order is deterministic.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
