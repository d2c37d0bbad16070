//! Breadth-first graph search.

use crate::search::{
    engines::SearchResult, frontier::FifoQueue, SearchNode, SearchProblem, SearchStatistics,
};
use std::collections::HashSet;

/// Search the shallowest nodes first. The goal test is applied to children
/// as they are generated (look-ahead goal test): the first time a goal state
/// is generated it is at minimal depth, so the returned path has minimal
/// action count in an unweighted graph.
pub fn breadth_first_search<P: SearchProblem>(problem: &P) -> SearchResult<P::Action> {
    let start = problem.start_state();
    if problem.is_goal(&start) {
        return SearchResult::Solved(vec![]);
    }

    let mut statistics = SearchStatistics::new();
    let mut frontier = FifoQueue::new();
    let mut visited = HashSet::new();

    for successor in problem.successor_states(&start) {
        if problem.is_goal(&successor.state) {
            return SearchResult::Solved(vec![successor.action]);
        }
        visited.insert(successor.state.clone());
        frontier.push(SearchNode::seed(successor));
        statistics.increment_generated_nodes();
    }

    while let Some(node) = frontier.pop() {
        statistics.increment_expanded_nodes();
        for successor in problem.successor_states(&node.state) {
            if problem.is_goal(&successor.state) {
                let goal_node = node.child(successor);
                statistics.finalise();
                return SearchResult::Solved(goal_node.path);
            }

            if visited.insert(successor.state.clone()) {
                frontier.push(node.child(successor));
                statistics.increment_generated_nodes();
            }
        }
    }

    statistics.finalise();
    SearchResult::Unsolvable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Layout;
    use crate::search::problems::PositionSearchProblem;
    use crate::search::validate;
    use crate::test_utils::MEDIUM_MAZE_TEXT;

    #[test]
    fn bfs_finds_a_shortest_path() {
        let layout = Layout::from_text(MEDIUM_MAZE_TEXT);
        let problem = PositionSearchProblem::to_food(&layout);
        let path = breadth_first_search(&problem)
            .path()
            .expect("maze is solvable");
        assert!(validate(&path, &problem).is_ok());

        // No path found by any other strategy may be shorter.
        let dfs_path = depth_first_search_len(&problem);
        assert!(path.len() <= dfs_path);
    }

    fn depth_first_search_len(
        problem: &PositionSearchProblem,
    ) -> usize {
        crate::search::engines::depth_first_search(problem)
            .path()
            .expect("maze is solvable")
            .len()
    }

    #[test]
    fn bfs_finds_depth_one_goal() {
        let layout = Layout::from_text(
            r#"
            %%%%
            %P.%
            %%%%
            "#,
        );
        let problem = PositionSearchProblem::to_food(&layout);
        let path = breadth_first_search(&problem)
            .path()
            .expect("goal is adjacent");
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn bfs_is_idempotent() {
        let layout = Layout::from_text(MEDIUM_MAZE_TEXT);
        let problem = PositionSearchProblem::to_food(&layout);
        let first = breadth_first_search(&problem);
        let second = breadth_first_search(&problem);
        assert_eq!(first, second);
    }
}
