//! The heading-aware state graph of a maze.

use mazeway_core::{Heading, Maze};

use crate::cost::CostConfig;
use crate::state::State;
use crate::traits::{StatePather, Transition};

/// A [`Maze`] seen as a graph over (cell, heading) states.
///
/// From any state the walker may move one cell in each of the four
/// headings, ending up facing the direction it moved. Moves into walls or
/// off the grid do not exist. A move costs `config.step`, plus
/// `config.turn` when its heading differs from the current one.
#[derive(Debug, Clone, Copy)]
pub struct TurnGraph<'a> {
    maze: &'a Maze,
    config: CostConfig,
}

impl<'a> TurnGraph<'a> {
    pub fn new(maze: &'a Maze, config: CostConfig) -> Self {
        Self { maze, config }
    }

    #[inline]
    pub fn maze(&self) -> &'a Maze {
        self.maze
    }

    #[inline]
    pub fn config(&self) -> CostConfig {
        self.config
    }

    /// The state every search over this graph starts from.
    #[inline]
    pub fn start_state(&self) -> State {
        State::new(self.maze.start(), self.config.initial_heading)
    }
}

impl StatePather for TurnGraph<'_> {
    fn neighbors(&self, s: State, buf: &mut Vec<Transition>) {
        for h in Heading::ALL {
            let to = s.pos + h.delta();
            if !self.maze.is_passable(to) {
                continue;
            }
            buf.push(Transition {
                to: State::new(to, h),
                cost: self.config.edge_cost(s.heading, h),
            });
        }
    }
}
