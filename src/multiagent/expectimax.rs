//! Expectimax tree search: adversaries modelled as uniform chance movers.

use crate::multiagent::{non_stop_actions, Agent, Evaluator, GameState};

/// Depth-bounded expectimax. Identical to minimax except at the non-max
/// plies, which average uniformly over the mover's legal actions instead of
/// minimizing.
#[derive(Debug)]
pub struct ExpectimaxAgent<E> {
    depth: usize,
    evaluator: E,
}

impl<E> ExpectimaxAgent<E> {
    pub fn new(depth: usize, evaluator: E) -> Self {
        Self { depth, evaluator }
    }

    fn value<S: GameState>(&mut self, state: &S, depth: usize, agent: usize) -> f64
    where
        E: Evaluator<S>,
    {
        if state.is_win() || state.is_lose() || depth == self.depth {
            return self.evaluator.evaluate(state);
        }
        if agent == 0 {
            self.max_value(state, depth)
        } else {
            self.chance_value(state, depth, agent)
        }
    }

    fn max_value<S: GameState>(&mut self, state: &S, depth: usize) -> f64
    where
        E: Evaluator<S>,
    {
        let depth = depth + 1;
        let next_agent = 1 % state.num_agents();
        let mut best = f64::NEG_INFINITY;
        for action in non_stop_actions(state, 0) {
            let value = self.value(&state.successor(0, &action), depth, next_agent);
            if value > best {
                best = value;
            }
        }
        best
    }

    fn chance_value<S: GameState>(&mut self, state: &S, depth: usize, agent: usize) -> f64
    where
        E: Evaluator<S>,
    {
        let next_agent = (agent + 1) % state.num_agents();
        let actions = non_stop_actions(state, agent);
        if actions.is_empty() {
            return self.evaluator.evaluate(state);
        }
        let total: f64 = actions
            .iter()
            .map(|action| self.value(&state.successor(agent, action), depth, next_agent))
            .sum();
        total / actions.len() as f64
    }
}

impl<S: GameState, E: Evaluator<S>> Agent<S> for ExpectimaxAgent<E> {
    fn choose_action(&mut self, state: &S) -> Option<S::Action> {
        let next_agent = 1 % state.num_agents();
        let mut best_value = f64::NEG_INFINITY;
        let mut best_action = None;
        for action in non_stop_actions(state, 0) {
            let value = self.value(&state.successor(0, &action), 0, next_agent);
            if value > best_value {
                best_value = value;
                best_action = Some(action);
            }
        }
        best_action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::multiagent::{MinimaxAgent, ScoreEvaluator};
    use crate::test_utils::tiny_game;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn chance_node_averages_uniformly() {
        // A ghost choosing between leaves worth 0 and 10 is worth exactly 5.
        let state = tiny_game()
            .max_node(&[("a", 1)])
            .min_node(1, &[("x", 2), ("y", 3)])
            .leaf(2, 0.0)
            .leaf(3, 10.0)
            .state(2, 0);
        let mut agent = ExpectimaxAgent::new(1, ScoreEvaluator);
        let value = agent.value(&state.successor(0, &"a"), 0, 1);
        assert_approx_eq!(value, 5.0);
    }

    #[test]
    fn gambles_where_minimax_plays_safe() {
        // "a": ghost picks between 0 and 10 (expectation 5, minimax 0).
        // "b": a certain 4. Expectimax gambles on "a", minimax takes "b".
        let builder = || {
            tiny_game()
                .max_node(&[("a", 1), ("b", 2)])
                .min_node(1, &[("x", 3), ("y", 4)])
                .leaf(2, 4.0)
                .leaf(3, 0.0)
                .leaf(4, 10.0)
                .state(2, 0)
        };
        let mut expectimax = ExpectimaxAgent::new(1, ScoreEvaluator);
        let mut minimax = MinimaxAgent::new(1, ScoreEvaluator);
        assert_eq!(expectimax.choose_action(&builder()), Some("a"));
        assert_eq!(minimax.choose_action(&builder()), Some("b"));
    }
}
