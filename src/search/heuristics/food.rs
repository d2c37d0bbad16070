use crate::grid::{euclidean, manhattan};
use crate::search::problems::{FoodSearchProblem, FoodState};
use crate::search::{Heuristic, HeuristicValue};

/// Heuristic for [`FoodSearchProblem`]: the largest mean of Manhattan and
/// Euclidean distance from the current position to any remaining food. Any
/// plan must at least walk to the furthest food, so this never overestimates.
#[derive(Clone, Copy, Debug, Default)]
pub struct FoodHeuristic;

impl Heuristic<FoodSearchProblem> for FoodHeuristic {
    fn evaluate(&mut self, state: &FoodState, _problem: &FoodSearchProblem) -> HeuristicValue {
        let mut furthest = 0.0_f64;
        for &food in &state.food {
            let estimate = (manhattan(state.position, food) + euclidean(state.position, food)) / 2.0;
            if estimate > furthest {
                furthest = estimate;
            }
        }
        furthest.into()
    }
}
