use std::fmt::Debug;
use std::hash::Hash;

/// Extracts the active features of a `(state, action)` pair for linear
/// Q-value approximation. Features absent from the returned vector are
/// implicitly zero.
pub trait FeatureExtractor<S, A> {
    type Feature: Clone + Eq + Hash + Debug;

    fn features(&self, state: &S, action: &A) -> Vec<(Self::Feature, f64)>;
}

/// One indicator feature per `(state, action)` pair. Degenerates linear
/// approximation into a plain Q-table; useful as a correctness baseline.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityExtractor;

impl<S, A> FeatureExtractor<S, A> for IdentityExtractor
where
    S: Clone + Eq + Hash + Debug,
    A: Clone + Eq + Hash + Debug,
{
    type Feature = (S, A);

    fn features(&self, state: &S, action: &A) -> Vec<((S, A), f64)> {
        vec![((state.clone(), action.clone()), 1.0)]
    }
}
