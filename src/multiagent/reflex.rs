//! A reflex agent: one-step lookahead through an action evaluation function.

use crate::grid::{manhattan, Direction};
use crate::multiagent::{Agent, GameState, PacmanPerception};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Scores every legal action by evaluating the successor state and picks
/// uniformly at random among the best-scoring ones. All legal actions are
/// considered, including stop, which the evaluation itself penalizes.
#[derive(Debug)]
pub struct ReflexAgent {
    rng: ChaCha8Rng,
}

impl ReflexAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn evaluate_action<S>(&self, state: &S, action: Direction) -> f64
    where
        S: GameState<Action = Direction> + PacmanPerception,
    {
        let successor = state.successor(0, &action);
        let position = successor.pacman_position();
        let mut score = 0.0;

        // A ghost about to be on top of us dominates everything else.
        for ghost in successor.ghost_positions() {
            let distance = manhattan(ghost, position) / 2.0;
            if distance < 2.0 {
                score -= distance * distance * distance;
            }
        }

        if action == Direction::Stop {
            score -= 900.0;
        }

        // Food distances are measured against the pre-move food layout, so
        // eating a food this step still counts it at distance zero.
        for food in state.food_positions() {
            let distance = manhattan(food, position) / 2.0;
            if distance != 0.0 {
                score += 1.0 / distance;
            }
        }

        successor.score() + score
    }
}

impl<S> Agent<S> for ReflexAgent
where
    S: GameState<Action = Direction> + PacmanPerception,
{
    fn choose_action(&mut self, state: &S) -> Option<S::Action> {
        let legal = state.legal_actions(0);
        if legal.is_empty() {
            return None;
        }

        let scores: Vec<f64> = legal
            .iter()
            .map(|&action| self.evaluate_action(state, action))
            .collect();
        let best = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let best_indices: Vec<usize> = (0..scores.len())
            .filter(|&index| scores[index] == best)
            .collect();
        let chosen = best_indices[self.rng.gen_range(0..best_indices.len())];

        Some(legal[chosen])
    }
}
