//! Tabular Q-learning with epsilon-greedy exploration.

use crate::rl::ActionSpace;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

/// A tabular Q-learning agent. The Q-table grows lazily; a pair that has
/// never been updated reads as 0.0. The agent exclusively owns its table;
/// nothing else mutates it.
#[derive(Debug)]
pub struct QLearningAgent<E: ActionSpace> {
    environment: E,
    /// Learning rate.
    alpha: f64,
    /// Discount rate.
    discount: f64,
    /// Exploration probability.
    epsilon: f64,
    q_values: HashMap<(E::State, E::Action), f64>,
    rng: ChaCha8Rng,
}

impl<E: ActionSpace> QLearningAgent<E> {
    pub fn new(environment: E, alpha: f64, discount: f64, epsilon: f64, seed: u64) -> Self {
        Self {
            environment,
            alpha,
            discount,
            epsilon,
            q_values: HashMap::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Q(state, action); 0.0 for never-updated pairs.
    pub fn q_value(&self, state: &E::State, action: &E::Action) -> f64 {
        self.q_values
            .get(&(state.clone(), action.clone()))
            .copied()
            .unwrap_or(0.0)
    }

    /// `max_action Q(state, action)` over legal actions; 0.0 for terminal
    /// states. Pairs with [`QLearningAgent::policy`], which returns the
    /// action itself.
    pub fn value(&self, state: &E::State) -> f64 {
        match self.policy(state) {
            Some(action) => self.q_value(state, &action),
            None => 0.0,
        }
    }

    /// The arg-max legal action by Q-value, first-encountered winning ties;
    /// `None` for terminal states.
    pub fn policy(&self, state: &E::State) -> Option<E::Action> {
        let mut best_value = f64::NEG_INFINITY;
        let mut best_action = None;
        for action in self.environment.legal_actions(state) {
            let value = self.q_value(state, &action);
            if value > best_value || best_action.is_none() {
                best_value = value;
                best_action = Some(action);
            }
        }
        best_action
    }

    /// Observe one transition and fold it into the table:
    /// `Q(s, a) ← (1 - α)·Q(s, a) + α·(r + γ·V(s'))`.
    pub fn update(&mut self, state: &E::State, action: &E::Action, next: &E::State, reward: f64) {
        let sample = reward + self.discount * self.value(next);
        let old = self.q_value(state, action);
        self.q_values.insert(
            (state.clone(), action.clone()),
            (1.0 - self.alpha) * old + self.alpha * sample,
        );
    }

    /// Epsilon-greedy: with probability epsilon a uniformly random legal
    /// action, otherwise the policy action. `None` for terminal states.
    pub fn choose_action(&mut self, state: &E::State) -> Option<E::Action> {
        let legal = self.environment.legal_actions(state);
        if legal.is_empty() {
            return None;
        }
        if self.rng.gen_bool(self.epsilon) {
            let index = self.rng.gen_range(0..legal.len());
            return Some(legal[index].clone());
        }
        self.policy(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    /// A two-cell corridor: move left or right, terminal at 'T'.
    #[derive(Debug)]
    struct Corridor;

    impl ActionSpace for Corridor {
        type State = char;
        type Action = &'static str;

        fn legal_actions(&self, state: &char) -> Vec<&'static str> {
            match state {
                'T' => vec![],
                _ => vec!["left", "right"],
            }
        }
    }

    #[test]
    fn repeated_updates_converge_to_the_reward() {
        // Discount zero means the fixed point is exactly the reward.
        let mut agent = QLearningAgent::new(Corridor, 0.5, 0.0, 0.0, 1);
        for _ in 0..50 {
            agent.update(&'A', &"right", &'T', 8.0);
        }
        assert_approx_eq!(agent.q_value(&'A', &"right"), 8.0, 1e-9);
    }

    #[test]
    fn untouched_pairs_read_zero() {
        let agent = QLearningAgent::new(Corridor, 0.5, 0.9, 0.0, 1);
        assert_eq!(agent.q_value(&'A', &"left"), 0.0);
        assert_eq!(agent.value(&'T'), 0.0);
        assert_eq!(agent.policy(&'T'), None);
    }

    #[test]
    fn greedy_policy_tracks_the_table() {
        let mut agent = QLearningAgent::new(Corridor, 1.0, 0.0, 0.0, 1);
        agent.update(&'A', &"left", &'T', 1.0);
        agent.update(&'A', &"right", &'T', 5.0);
        assert_eq!(agent.policy(&'A'), Some("right"));
        assert_approx_eq!(agent.value(&'A'), 5.0);
        // Epsilon is zero, so choose_action is the policy action.
        assert_eq!(agent.choose_action(&'A'), Some("right"));
    }

    #[test]
    fn ties_break_toward_the_first_legal_action() {
        let agent = QLearningAgent::new(Corridor, 0.5, 0.9, 0.0, 1);
        assert_eq!(agent.policy(&'A'), Some("left"));
    }

    #[test]
    fn full_exploration_still_returns_legal_actions() {
        let mut agent = QLearningAgent::new(Corridor, 0.5, 0.9, 1.0, 42);
        for _ in 0..20 {
            let action = agent.choose_action(&'A').expect("state is not terminal");
            assert!(["left", "right"].contains(&action));
        }
    }
}
