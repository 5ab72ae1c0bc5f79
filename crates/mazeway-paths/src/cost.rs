use mazeway_core::Heading;

/// Path cost. Wide enough for `4 × rows × cols × max(step, turn)` on any
/// grid that fits in memory.
pub type Cost = u64;

/// Edge costs and starting orientation for heading-aware search.
///
/// The initial heading affects the result whenever an optimal path's first
/// move is not straight ahead, so it is part of the configuration rather
/// than inferred from the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostConfig {
    /// Cost of every move into a neighbouring cell.
    pub step: Cost,
    /// Extra cost charged when a move changes heading.
    pub turn: Cost,
    /// Heading of the start state.
    pub initial_heading: Heading,
}

impl CostConfig {
    /// Unit steps, free turns: ordinary 4-directional shortest paths.
    pub const PLAIN: Self = Self {
        step: 1,
        turn: 0,
        initial_heading: Heading::East,
    };

    /// Unit steps, turns cost 1000, starting east.
    pub const DIRECTIONAL: Self = Self {
        step: 1,
        turn: 1000,
        initial_heading: Heading::East,
    };

    pub const fn with_step(mut self, step: Cost) -> Self {
        self.step = step;
        self
    }

    pub const fn with_turn(mut self, turn: Cost) -> Self {
        self.turn = turn;
        self
    }

    pub const fn with_initial_heading(mut self, heading: Heading) -> Self {
        self.initial_heading = heading;
        self
    }

    /// Cost of a move made in heading `to` by a walker facing `from`.
    #[inline]
    pub fn edge_cost(&self, from: Heading, to: Heading) -> Cost {
        if from == to {
            self.step
        } else {
            self.step + self.turn
        }
    }
}

impl Default for CostConfig {
    fn default() -> Self {
        Self::PLAIN
    }
}
