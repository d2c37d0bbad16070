//! Synchronous (Jacobi) value iteration over a finite MDP.

use crate::mdp::MarkovDecisionProcess;
use std::collections::HashMap;
use tracing::debug;

/// Runs a fixed number of synchronous Bellman passes at construction and is
/// read-only afterwards. During pass k every lookup reads the pass-(k-1)
/// snapshot, so updates never leak within a pass.
///
/// [`ValueIteration::q_value`] keeps the original agent's semantics: it
/// recomputes the Bellman sum from the last completed snapshot, i.e. the
/// values of pass N-1, one iteration behind the values [`ValueIteration::value`]
/// reports.
#[derive(Debug)]
pub struct ValueIteration<M: MarkovDecisionProcess> {
    mdp: M,
    discount: f64,
    /// V_N, the values after the final pass.
    values: HashMap<M::State, f64>,
    /// V_{N-1}, the snapshot the final pass read from.
    snapshot: HashMap<M::State, f64>,
}

impl<M: MarkovDecisionProcess> ValueIteration<M> {
    /// Run `iterations` synchronous passes with the given discount factor.
    /// The discount must lie in (0, 1]; that is a caller obligation.
    pub fn new(mdp: M, discount: f64, iterations: usize) -> Self {
        let states = mdp.states();
        let values: HashMap<M::State, f64> =
            states.iter().map(|state| (state.clone(), 0.0)).collect();

        let mut solver = Self {
            mdp,
            discount,
            snapshot: values.clone(),
            values,
        };

        for pass in 0..iterations {
            solver.snapshot = solver.values.clone();
            let mut next = HashMap::with_capacity(solver.snapshot.len());
            let mut residual = 0.0_f64;

            for state in &states {
                let actions = solver.mdp.possible_actions(state);
                let value = if actions.is_empty() {
                    // Terminal states keep their previous value.
                    solver.snapshot[state]
                } else {
                    actions
                        .iter()
                        .map(|action| solver.q_value(state, action))
                        .fold(f64::NEG_INFINITY, f64::max)
                };
                residual = residual.max((value - solver.snapshot[state]).abs());
                next.insert(state.clone(), value);
            }

            solver.values = next;
            debug!(pass, residual, "value iteration pass complete");
        }

        solver
    }

    /// The value of `state` after the final pass; 0.0 for unknown states.
    pub fn value(&self, state: &M::State) -> f64 {
        self.values.get(state).copied().unwrap_or(0.0)
    }

    /// The Bellman Q-value of `(state, action)` computed from the last
    /// completed snapshot:
    /// `Q(s, a) = Σ_s' P(s' | s, a) · (R(s, a, s') + γ · V(s'))`.
    pub fn q_value(&self, state: &M::State, action: &M::Action) -> f64 {
        let mut sum = 0.0;
        for (next, probability) in self.mdp.transitions(state, action) {
            let reward = self.mdp.reward(state, action, &next);
            let next_value = self.snapshot.get(&next).copied().unwrap_or(0.0);
            sum += probability * (reward + self.discount * next_value);
        }
        sum
    }

    /// The greedy action for `state`: the legal action with the best
    /// Q-value, first-encountered winning ties. `None` for terminal states.
    pub fn policy(&self, state: &M::State) -> Option<M::Action> {
        let mut best_value = f64::NEG_INFINITY;
        let mut best_action = None;
        for action in self.mdp.possible_actions(state) {
            let value = self.q_value(state, &action);
            if value > best_value || best_action.is_none() {
                best_value = value;
                best_action = Some(action);
            }
        }
        best_action
    }

    /// The policy at `state`; no exploration.
    pub fn action(&self, state: &M::State) -> Option<M::Action> {
        self.policy(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    /// Two states: A is terminal, B has one action looping into A with
    /// reward 10.
    #[derive(Debug)]
    struct TwoState;

    impl MarkovDecisionProcess for TwoState {
        type State = char;
        type Action = &'static str;

        fn states(&self) -> Vec<char> {
            vec!['A', 'B']
        }

        fn possible_actions(&self, state: &char) -> Vec<&'static str> {
            match state {
                'B' => vec!["go"],
                _ => vec![],
            }
        }

        fn transitions(&self, state: &char, _action: &&'static str) -> Vec<(char, f64)> {
            assert_eq!(*state, 'B');
            vec![('A', 1.0)]
        }

        fn reward(&self, _state: &char, _action: &&'static str, _next: &char) -> f64 {
            10.0
        }
    }

    #[test]
    fn terminal_states_never_change() {
        let after_one = ValueIteration::new(TwoState, 0.5, 1);
        assert_approx_eq!(after_one.value(&'B'), 10.0);
        assert_approx_eq!(after_one.value(&'A'), 0.0);

        // A stays at zero, so B's Bellman target never moves either.
        let after_two = ValueIteration::new(TwoState, 0.5, 2);
        assert_approx_eq!(after_two.value(&'B'), 10.0);
        assert_approx_eq!(after_two.value(&'A'), 0.0);
    }

    #[test]
    fn zero_iterations_leaves_everything_at_zero() {
        let solver = ValueIteration::new(TwoState, 0.9, 0);
        assert_approx_eq!(solver.value(&'B'), 0.0);
        assert_approx_eq!(solver.q_value(&'B', &"go"), 10.0);
    }

    #[test]
    fn q_values_lag_one_iteration_behind_values() {
        // With a self-loop the lag is observable: V after pass k uses the
        // pass k-1 table, and q_value re-reads exactly that table.
        #[derive(Debug)]
        struct Loop;

        impl MarkovDecisionProcess for Loop {
            type State = ();
            type Action = &'static str;

            fn states(&self) -> Vec<()> {
                vec![()]
            }
            fn possible_actions(&self, _state: &()) -> Vec<&'static str> {
                vec!["stay"]
            }
            fn transitions(&self, _state: &(), _action: &&'static str) -> Vec<((), f64)> {
                vec![((), 1.0)]
            }
            fn reward(&self, _state: &(), _action: &&'static str, _next: &()) -> f64 {
                1.0
            }
        }

        let solver = ValueIteration::new(Loop, 0.5, 2);
        // V_2 = 1 + 0.5 * V_1 = 1.5; q_value reads V_1 = 1.0.
        assert_approx_eq!(solver.value(&()), 1.5);
        assert_approx_eq!(solver.q_value(&(), &"stay"), 1.5);
    }

    #[test]
    fn policy_is_none_for_terminal_states() {
        let solver = ValueIteration::new(TwoState, 0.9, 5);
        assert_eq!(solver.policy(&'A'), None);
        assert_eq!(solver.policy(&'B'), Some("go"));
        assert_eq!(solver.action(&'B'), solver.policy(&'B'));
    }
}
