mod gridworld;
mod markov;
mod value_iteration;

pub use gridworld::{GridworldAction, GridworldMdp, GridworldState};
pub use markov::MarkovDecisionProcess;
pub use value_iteration::ValueIteration;
