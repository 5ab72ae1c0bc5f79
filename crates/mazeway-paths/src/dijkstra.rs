//! Tie-aware Dijkstra over (cell, heading) states.
//!
//! The frontier may hold several entries for the same state at different
//! costs; the cost table is authoritative and entries whose cost no longer
//! matches it are skipped when popped. Besides the minimum cost, every
//! state keeps the set of predecessors achieving that cost, which is what
//! [`StateRange::min_cost_cells`] walks backwards.

use std::collections::BinaryHeap;

use mazeway_core::{Heading, Point};

use crate::StateRange;
use crate::cost::Cost;
use crate::reconstruct::OptimalCells;
use crate::state::{NodeRef, State, StateSpace};
use crate::traits::StatePather;

/// Per-state search bookkeeping.
#[derive(Clone, Debug, Default)]
pub(crate) struct StateNode {
    /// Best known cost, `None` until first reached.
    pub(crate) cost: Option<Cost>,
    /// Distinct states from which `cost` is achieved.
    pub(crate) preds: Vec<usize>,
}

/// When the search loop may stop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Stop {
    /// At the first popped goal state; enough for the cost alone.
    FirstGoal,
    /// Once every entry costing at most the best goal cost is processed.
    AllOptimal,
}

/// Counters reported at debug level after each search.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct SearchStats {
    pub(crate) popped: usize,
    pub(crate) stale: usize,
    pub(crate) ties: usize,
}

/// The tables of one finished search. Owned by a single query.
pub(crate) struct Search {
    pub(crate) space: StateSpace,
    pub(crate) nodes: Vec<StateNode>,
    pub(crate) start: usize,
    pub(crate) goal: Point,
    pub(crate) stats: SearchStats,
}

impl Search {
    /// Run the search from `start` towards any state on cell `goal`.
    ///
    /// Returns `None` if `start` lies outside the range. Goal states are
    /// terminal: they are reached and recorded but never expanded.
    pub(crate) fn run<P: StatePather>(
        pather: &P,
        space: StateSpace,
        start: State,
        goal: Point,
        stop: Stop,
    ) -> Option<Self> {
        let si = space.idx(start)?;
        let mut search = Self {
            space,
            nodes: vec![StateNode::default(); space.len()],
            start: si,
            goal,
            stats: SearchStats::default(),
        };

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        search.nodes[si].cost = Some(0);
        open.push(NodeRef { idx: si, cost: 0 });

        let mut best: Option<Cost> = None;
        let mut nbuf = Vec::with_capacity(4);

        while let Some(current) = open.pop() {
            if best.is_some_and(|b| current.cost > b) {
                break;
            }
            let ci = current.idx;
            if search.nodes[ci].cost != Some(current.cost) {
                search.stats.stale += 1;
                continue;
            }
            search.stats.popped += 1;

            let cs = space.state(ci);
            if cs.pos == goal {
                log::trace!("goal state {cs} reached at cost {}", current.cost);
                best = Some(best.map_or(current.cost, |b| b.min(current.cost)));
                if stop == Stop::FirstGoal {
                    break;
                }
                continue;
            }

            nbuf.clear();
            pather.neighbors(cs, &mut nbuf);

            for t in nbuf.iter() {
                let Some(ni) = space.idx(t.to) else {
                    continue;
                };
                let total = current.cost + t.cost;
                let n = &mut search.nodes[ni];
                match n.cost {
                    Some(recorded) if total > recorded => {}
                    Some(recorded) if total == recorded => {
                        if !n.preds.contains(&ci) {
                            n.preds.push(ci);
                            search.stats.ties += 1;
                        }
                    }
                    _ => {
                        n.cost = Some(total);
                        n.preds.clear();
                        n.preds.push(ci);
                        open.push(NodeRef {
                            idx: ni,
                            cost: total,
                        });
                    }
                }
            }
        }

        log::debug!(
            "state search from {start} to {goal}: {} popped, {} stale, {} ties, goal cost {:?}",
            search.stats.popped,
            search.stats.stale,
            search.stats.ties,
            search.goal_cost(),
        );
        Some(search)
    }

    /// Flat indices of the four states on the goal cell.
    pub(crate) fn goal_states(&self) -> impl Iterator<Item = usize> + '_ {
        Heading::ALL
            .into_iter()
            .filter_map(|h| self.space.idx(State::new(self.goal, h)))
    }

    /// Smallest recorded cost over all goal states.
    pub(crate) fn goal_cost(&self) -> Option<Cost> {
        self.goal_states().filter_map(|i| self.nodes[i].cost).min()
    }

    /// Recorded cost of a state, if it was reached.
    #[cfg(test)]
    pub(crate) fn cost_at(&self, s: State) -> Option<Cost> {
        self.nodes[self.space.idx(s)?].cost
    }
}

impl StateRange {
    /// Minimum cost from `start` to any state on cell `goal`.
    ///
    /// Returns `None` if the goal is unreachable or `start` lies outside the
    /// range. Stops as soon as the first goal state is popped.
    pub fn min_cost<P: StatePather>(&self, pather: &P, start: State, goal: Point) -> Option<Cost> {
        Search::run(pather, self.space(), start, goal, Stop::FirstGoal)?.goal_cost()
    }

    /// Minimum cost to `goal` together with every cell lying on at least
    /// one path of that cost.
    ///
    /// Returns `None` if the goal is unreachable or `start` lies outside the
    /// range.
    pub fn min_cost_cells<P: StatePather>(
        &self,
        pather: &P,
        start: State,
        goal: Point,
    ) -> Option<OptimalCells> {
        Search::run(pather, self.space(), start, goal, Stop::AllOptimal)?.optimal_cells()
    }

    /// One minimum-cost path from `start` to `goal`, as the sequence of
    /// states visited (start first).
    pub fn best_path<P: StatePather>(
        &self,
        pather: &P,
        start: State,
        goal: Point,
    ) -> Option<Vec<State>> {
        Search::run(pather, self.space(), start, goal, Stop::FirstGoal)?.first_path()
    }
}
