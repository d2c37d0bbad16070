use std::fmt::Debug;
use std::hash::Hash;

/// A finite Markov decision process capability. States with no possible
/// actions are terminal.
pub trait MarkovDecisionProcess {
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + PartialEq + Debug;

    fn states(&self) -> Vec<Self::State>;

    fn possible_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The `(next_state, probability)` distribution of taking `action` in
    /// `state`. Probabilities over the returned states sum to one.
    fn transitions(
        &self,
        state: &Self::State,
        action: &Self::Action,
    ) -> Vec<(Self::State, f64)>;

    fn reward(&self, state: &Self::State, action: &Self::Action, next: &Self::State) -> f64;
}
