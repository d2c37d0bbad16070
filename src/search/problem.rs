use std::fmt::Debug;
use std::hash::Hash;

/// Cost reported by [`SearchProblem::actions_cost`] for an action sequence
/// containing an illegal move.
pub const ILLEGAL_ACTIONS_COST: f64 = 999_999.0;

/// One outgoing edge of a search state: the state it leads to, the action
/// taken, and the step cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Successor<S, A> {
    pub state: S,
    pub action: A,
    pub cost: f64,
}

/// A search problem capability. The engine owns nothing beyond what this
/// trait exposes; states are opaque hashable values and may be composites
/// (position plus auxiliary flags, position plus remaining food).
pub trait SearchProblem {
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + PartialEq + Debug;

    fn start_state(&self) -> Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    fn successor_states(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>>;

    /// The cost of executing `actions` from the start state,
    /// [`ILLEGAL_ACTIONS_COST`] if any action is illegal along the way.
    fn actions_cost(&self, actions: &[Self::Action]) -> f64;
}
