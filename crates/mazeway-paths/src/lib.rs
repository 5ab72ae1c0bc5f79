//! Heading-aware shortest paths on grid mazes.
//!
//! Search states are (cell, heading) pairs: moving straight costs a step,
//! moving in any other heading costs a step plus a turn penalty. On top of
//! the minimum cost, the engine keeps every predecessor that achieves each
//! state's minimum, so it can report the cells of *all* optimal paths:
//!
//! - **Minimum cost** to the goal in any heading ([`StateRange::min_cost`])
//! - **Optimal cell set** over every minimum-cost path ([`StateRange::min_cost_cells`])
//! - **One optimal path** as a state sequence ([`StateRange::best_path`])
//! - **BFS** unweighted distance maps ([`bfs_map`])
//! - **First blocking obstacle** among falling walls ([`first_blocking`])
//!
//! [`MazeSolver`] bundles a [`Maze`](mazeway_core::Maze) and a [`CostConfig`]
//! for the common case.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`StatePather`] | every [`StateRange`] query |
//!
//! [`TurnGraph`] is the maze-backed implementation.

mod bfs;
mod blocking;
mod cost;
mod dijkstra;
mod graph;
mod reconstruct;
mod solver;
mod state;
mod staterange;
mod traits;

pub use bfs::{DistanceMap, PathNode, bfs_map, is_reachable};
pub use blocking::{Blocking, first_blocking};
pub use cost::{Cost, CostConfig};
pub use graph::TurnGraph;
pub use reconstruct::OptimalCells;
pub use solver::MazeSolver;
pub use state::State;
pub use staterange::StateRange;
pub use traits::{StatePather, Transition};
