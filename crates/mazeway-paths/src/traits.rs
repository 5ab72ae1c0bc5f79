use crate::cost::Cost;
use crate::state::State;

/// A single outgoing edge of the state graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub to: State,
    pub cost: Cost,
}

/// State-graph interface — provides transition enumeration.
pub trait StatePather {
    /// Append the transitions leaving `s` into `buf`. The caller clears `buf`
    /// before calling. Edge costs must be non-negative.
    fn neighbors(&self, s: State, buf: &mut Vec<Transition>);
}
