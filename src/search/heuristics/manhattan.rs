use crate::grid::manhattan;
use crate::search::problems::PositionSearchProblem;
use crate::search::{Heuristic, HeuristicValue};

/// Manhattan distance to the goal position. Admissible and consistent on a
/// unit-cost grid.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManhattanHeuristic;

impl Heuristic<PositionSearchProblem> for ManhattanHeuristic {
    fn evaluate(
        &mut self,
        state: &crate::grid::Position,
        problem: &PositionSearchProblem,
    ) -> HeuristicValue {
        manhattan(*state, problem.goal()).into()
    }
}
