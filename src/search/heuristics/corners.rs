use crate::grid::euclidean;
use crate::search::problems::{CornersProblem, CornersState};
use crate::search::{Heuristic, HeuristicValue};

/// Heuristic for [`CornersProblem`]: chain greedily through the unvisited
/// corners, always hopping to the nearest one by Euclidean distance, and sum
/// the hop lengths. Straight-line distances never overestimate grid paths,
/// so the estimate is admissible.
#[derive(Clone, Copy, Debug, Default)]
pub struct CornersHeuristic;

impl Heuristic<CornersProblem> for CornersHeuristic {
    fn evaluate(&mut self, state: &CornersState, problem: &CornersProblem) -> HeuristicValue {
        let mut remaining: Vec<_> = problem
            .corners()
            .iter()
            .zip(state.visited.iter())
            .filter(|(_, &visited)| !visited)
            .map(|(&corner, _)| corner)
            .collect();

        let mut current = state.position;
        let mut estimate = 0.0;
        while !remaining.is_empty() {
            let mut nearest = 0;
            let mut nearest_distance = f64::INFINITY;
            for (index, &corner) in remaining.iter().enumerate() {
                let distance = euclidean(current, corner);
                if distance < nearest_distance {
                    nearest = index;
                    nearest_distance = distance;
                }
            }
            current = remaining.swap_remove(nearest);
            estimate += nearest_distance;
        }

        estimate.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Layout;
    use crate::search::SearchProblem;
    use crate::test_utils::CORNERS_MAZE_TEXT;

    #[test]
    fn all_corners_visited_estimates_zero() {
        let layout = Layout::from_text(CORNERS_MAZE_TEXT);
        let problem = CornersProblem::new(&layout);
        let state = CornersState {
            position: layout.start,
            visited: [true; 4],
        };
        assert_eq!(
            CornersHeuristic.evaluate(&state, &problem).into_inner(),
            0.0
        );
    }

    #[test]
    fn estimate_is_a_lower_bound_at_the_start() {
        let layout = Layout::from_text(CORNERS_MAZE_TEXT);
        let problem = CornersProblem::new(&layout);
        let start = problem.start_state();
        let estimate = CornersHeuristic.evaluate(&start, &problem).into_inner();
        // Visiting the three remaining corners of the 6x6 box takes at least
        // two full side lengths of walking.
        assert!(estimate > 0.0);
        assert!(estimate <= 9.0);
    }
}
