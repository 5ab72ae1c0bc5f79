//! Backward walks over the predecessor tables of a finished search.

use std::collections::BTreeSet;

use mazeway_core::Point;

use crate::cost::Cost;
use crate::dijkstra::Search;
use crate::state::State;

/// The minimum cost to the goal and every cell on some path of that cost.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimalCells {
    pub cost: Cost,
    pub cells: BTreeSet<Point>,
}

impl OptimalCells {
    /// Number of distinct cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, p: Point) -> bool {
        self.cells.contains(&p)
    }
}

impl Search {
    /// Collect the cells of every minimum-cost path.
    ///
    /// Seeds the walk with each goal state whose cost equals the global
    /// minimum, so goal headings reached only at a higher cost contribute
    /// nothing. Each state is expanded at most once.
    pub(crate) fn optimal_cells(&self) -> Option<OptimalCells> {
        let cost = self.goal_cost()?;

        let mut visited = vec![false; self.nodes.len()];
        let mut stack: Vec<usize> = self
            .goal_states()
            .filter(|&i| self.nodes[i].cost == Some(cost))
            .collect();
        for &i in &stack {
            visited[i] = true;
        }

        let mut cells = BTreeSet::new();
        while let Some(ci) = stack.pop() {
            cells.insert(self.space.state(ci).pos);
            for &p in &self.nodes[ci].preds {
                if !visited[p] {
                    visited[p] = true;
                    stack.push(p);
                }
            }
        }

        log::debug!("{} cells on minimum-cost paths of cost {cost}", cells.len());
        Some(OptimalCells { cost, cells })
    }

    /// Follow first predecessors from a minimum-cost goal state back to the
    /// start, returning the states start first.
    pub(crate) fn first_path(&self) -> Option<Vec<State>> {
        let cost = self.goal_cost()?;
        let mut ci = self
            .goal_states()
            .find(|&i| self.nodes[i].cost == Some(cost))?;

        // A state's first predecessor is the one that set its final cost,
        // and was popped before it, so the chain reaches the start.
        let mut path = vec![self.space.state(ci)];
        while ci != self.start {
            ci = *self.nodes[ci].preds.first()?;
            path.push(self.space.state(ci));
        }
        path.reverse();
        Some(path)
    }
}
