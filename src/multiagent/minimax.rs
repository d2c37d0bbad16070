//! Minimax tree search over a multi-agent game.

use crate::multiagent::{non_stop_actions, Agent, Evaluator, GameState};

/// Depth-bounded minimax. The depth counter increments once per full agent
/// cycle (on entry to the maximizing role), so `depth` bounds the number of
/// maximizing-agent moves looked ahead, not the number of plies.
#[derive(Debug)]
pub struct MinimaxAgent<E> {
    depth: usize,
    evaluator: E,
}

impl<E> MinimaxAgent<E> {
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
            self.min_value(state, depth, agent)
        }
    }

    fn max_value<S: GameState>(&mut self, state: &S, depth: usize) -> f64
    where
        E: Evaluator<S>,
    {
        // Control is back with agent 0: one more full cycle consumed.
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

    fn min_value<S: GameState>(&mut self, state: &S, depth: usize, agent: usize) -> f64
    where
        E: Evaluator<S>,
    {
        let next_agent = (agent + 1) % state.num_agents();
        let mut worst = f64::INFINITY;
        for action in non_stop_actions(state, agent) {
            let value = self.value(&state.successor(agent, &action), depth, next_agent);
            if value < worst {
                worst = value;
            }
        }
        worst
    }
}

impl<S: GameState, E: Evaluator<S>> Agent<S> for MinimaxAgent<E> {
    fn choose_action(&mut self, state: &S) -> Option<S::Action> {
        let next_agent = 1 % state.num_agents();
        let mut best_value = f64::NEG_INFINITY;
        let mut best_action = None;
        for action in non_stop_actions(state, 0) {
            let value = self.value(&state.successor(0, &action), 0, next_agent);
            // Strict comparison: the first maximal action wins ties.
            if value > best_value {
                best_value = value;
                best_action = Some(action);
            }
        }
        best_action
    }
}
