use crate::search::SearchProblem;
use ordered_float::OrderedFloat;

pub type HeuristicValue = OrderedFloat<f64>;

/// An estimate of the remaining cost from a state to the nearest goal of a
/// problem. A* is only optimal when the estimate never overestimates
/// (admissible); that property is the implementor's responsibility.
pub trait Heuristic<P: SearchProblem> {
    fn evaluate(&mut self, state: &P::State, problem: &P) -> HeuristicValue;
}
