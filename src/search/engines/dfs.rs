//! Depth-first graph search.

use crate::search::{
    engines::SearchResult, frontier::Stack, SearchNode, SearchProblem, SearchStatistics,
};
use std::collections::HashSet;

/// Search the deepest nodes first. Returns some goal-reaching path, with no
/// optimality guarantee and no cost accounting. The goal test happens on the
/// popped node, before expansion.
pub fn depth_first_search<P: SearchProblem>(problem: &P) -> SearchResult<P::Action> {
    let start = problem.start_state();
    if problem.is_goal(&start) {
        return SearchResult::Solved(vec![]);
    }

    let mut statistics = SearchStatistics::new();
    let mut frontier = Stack::new();
    let mut visited = HashSet::new();

    for successor in problem.successor_states(&start) {
        visited.insert(successor.state.clone());
        frontier.push(SearchNode::seed(successor));
        statistics.increment_generated_nodes();
    }

    while let Some(node) = frontier.pop() {
        if problem.is_goal(&node.state) {
            statistics.finalise();
            return SearchResult::Solved(node.path);
        }

        statistics.increment_expanded_nodes();
        for successor in problem.successor_states(&node.state) {
            // Discovery-time dedup: revisits are pruned here, not at
            // expansion time.
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
    fn dfs_path_replays_to_the_goal() {
        let layout = Layout::from_text(MEDIUM_MAZE_TEXT);
        let problem = PositionSearchProblem::to_food(&layout);
        let path = depth_first_search(&problem).path().expect("maze is solvable");
        assert!(validate(&path, &problem).is_ok());
    }

    #[test]
    fn dfs_at_goal_returns_empty_path() {
        let layout = Layout::from_text(MEDIUM_MAZE_TEXT);
        let problem = PositionSearchProblem::new(&layout, layout.start);
        assert_eq!(depth_first_search(&problem), SearchResult::Solved(vec![]));
    }

    #[test]
    fn dfs_reports_unreachable_goal() {
        let layout = Layout::from_text(
            r#"
            %%%%%%%
            %P%  .%
            %%%%%%%
            "#,
        );
        let problem = PositionSearchProblem::to_food(&layout);
        assert_eq!(depth_first_search(&problem), SearchResult::Unsolvable);
    }
}
