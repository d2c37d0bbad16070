use crate::search::{Heuristic, HeuristicValue, SearchProblem};

/// The trivially admissible heuristic; turns A* into uniform-cost search.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroHeuristic;

impl<P: SearchProblem> Heuristic<P> for ZeroHeuristic {
    fn evaluate(&mut self, _state: &P::State, _problem: &P) -> HeuristicValue {
        (0.).into()
    }
}
