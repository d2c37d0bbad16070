mod approximate;
mod features;
mod q_learning;

pub use approximate::ApproximateQAgent;
pub use features::{FeatureExtractor, IdentityExtractor};
pub use q_learning::QLearningAgent;

use std::fmt::Debug;
use std::hash::Hash;

/// What a learning agent needs from its environment: the legal actions of a
/// state. Transitions and rewards arrive through `update` observations, not
/// through this capability.
pub trait ActionSpace {
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + Eq + Hash + Debug;

    fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action>;
}
