mod alpha_beta;
mod evaluate;
mod expectimax;
mod game;
mod minimax;
mod reflex;

pub use alpha_beta::AlphaBetaAgent;
pub use evaluate::{Evaluator, PacmanEvaluator, PacmanPerception, ScoreEvaluator};
pub use expectimax::ExpectimaxAgent;
pub use game::{non_stop_actions, Agent, GameState};
pub use minimax::MinimaxAgent;
pub use reflex::ReflexAgent;
