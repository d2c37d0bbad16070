//! Approximate Q-learning over a linear feature model.

use crate::rl::{ActionSpace, FeatureExtractor};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

/// Q-learning with `Q(s, a) = Σ_f w[f] · φ[f](s, a)`. The weight vector is
/// shared across all states, which is what lets the agent generalize across
/// the state space instead of memorizing it.
#[derive(Debug)]
pub struct ApproximateQAgent<E, F>
where
    E: ActionSpace,
    F: FeatureExtractor<E::State, E::Action>,
{
    environment: E,
    extractor: F,
    alpha: f64,
    discount: f64,
    epsilon: f64,
    weights: HashMap<F::Feature, f64>,
    rng: ChaCha8Rng,
}

impl<E, F> ApproximateQAgent<E, F>
where
    E: ActionSpace,
    F: FeatureExtractor<E::State, E::Action>,
{
    pub fn new(
        environment: E,
        extractor: F,
        alpha: f64,
        discount: f64,
        epsilon: f64,
        seed: u64,
    ) -> Self {
        Self {
            environment,
            extractor,
            alpha,
            discount,
            epsilon,
            weights: HashMap::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn weight(&self, feature: &F::Feature) -> f64 {
        self.weights.get(feature).copied().unwrap_or(0.0)
    }

    /// The dot product of the weight vector with the pair's active features.
    pub fn q_value(&self, state: &E::State, action: &E::Action) -> f64 {
        self.extractor
            .features(state, action)
            .into_iter()
            .filter(|(_, value)| *value != 0.0)
            .map(|(feature, value)| value * self.weight(&feature))
            .sum()
    }

    pub fn value(&self, state: &E::State) -> f64 {
        match self.policy(state) {
            Some(action) => self.q_value(state, &action),
            None => 0.0,
        }
    }

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

    /// Nudge every active feature's weight along the TD error:
    /// `w[f] ← w[f] + α · (r + γ·V(s') − Q(s, a)) · φ[f]`. The correction is
    /// computed once, before any weight moves.
    pub fn update(&mut self, state: &E::State, action: &E::Action, next: &E::State, reward: f64) {
        let correction = reward + self.discount * self.value(next) - self.q_value(state, action);
        for (feature, value) in self.extractor.features(state, action) {
            let weight = self.weight(&feature);
            self.weights
                .insert(feature, weight + self.alpha * correction * value);
        }
    }

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
