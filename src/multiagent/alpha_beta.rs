//! Minimax with alpha-beta pruning.

use crate::multiagent::{non_stop_actions, Agent, Evaluator, GameState};

/// Depth-bounded minimax with alpha-beta pruning. `alpha` is the best value
/// the maximizer can already guarantee on the current path, `beta` the best
/// the minimizer can; a node whose value crosses the opposing bound stops
/// expanding. Pruning never changes the action chosen at the root, only the
/// amount of tree visited.
#[derive(Debug)]
pub struct AlphaBetaAgent<E> {
    depth: usize,
    evaluator: E,
}

impl<E> AlphaBetaAgent<E> {
    pub fn new(depth: usize, evaluator: E) -> Self {
        Self { depth, evaluator }
    }

    fn value<S: GameState>(
        &mut self,
        state: &S,
        depth: usize,
        agent: usize,
        alpha: f64,
        beta: f64,
    ) -> f64
    where
        E: Evaluator<S>,
    {
        if state.is_win() || state.is_lose() || depth == self.depth {
            return self.evaluator.evaluate(state);
        }
        if agent == 0 {
            self.max_value(state, depth, alpha, beta)
        } else {
            self.min_value(state, depth, agent, alpha, beta)
        }
    }

    fn max_value<S: GameState>(&mut self, state: &S, depth: usize, mut alpha: f64, beta: f64) -> f64
    where
        E: Evaluator<S>,
    {
        let depth = depth + 1;
        let next_agent = 1 % state.num_agents();
        let mut best = f64::NEG_INFINITY;
        for action in non_stop_actions(state, 0) {
            let value = self.value(&state.successor(0, &action), depth, next_agent, alpha, beta);
            if value > best {
                best = value;
            }
            if best > beta {
                return best;
            }
            alpha = alpha.max(best);
        }
        best
    }

    fn min_value<S: GameState>(
        &mut self,
        state: &S,
        depth: usize,
        agent: usize,
        alpha: f64,
        mut beta: f64,
    ) -> f64
    where
        E: Evaluator<S>,
    {
        let next_agent = (agent + 1) % state.num_agents();
        let mut worst = f64::INFINITY;
        for action in non_stop_actions(state, agent) {
            let value = self.value(
                &state.successor(agent, &action),
                depth,
                next_agent,
                alpha,
                beta,
            );
            if value < worst {
                worst = value;
            }
            if worst < alpha {
                return worst;
            }
            beta = beta.min(worst);
        }
        worst
    }
}

impl<S: GameState, E: Evaluator<S>> Agent<S> for AlphaBetaAgent<E> {
    fn choose_action(&mut self, state: &S) -> Option<S::Action> {
        let next_agent = 1 % state.num_agents();
        let mut best_value = f64::NEG_INFINITY;
        let mut best_action = None;
        for action in non_stop_actions(state, 0) {
            let value = self.value(
                &state.successor(0, &action),
                0,
                next_agent,
                best_value,
                f64::INFINITY,
            );
            if value > best_value {
                best_value = value;
                best_action = Some(action);
            }
        }
        best_action
    }
}
