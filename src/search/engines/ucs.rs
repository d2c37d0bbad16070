//! Uniform-cost graph search.

use crate::search::{
    engines::SearchResult, frontier::MinPriorityFrontier, SearchNode, SearchProblem,
    SearchStatistics,
};
use std::collections::HashSet;

/// Search the node of least total path cost first. The goal test happens on
/// the popped node, so the first goal popped carries a minimum-cost path.
pub fn uniform_cost_search<P: SearchProblem>(problem: &P) -> SearchResult<P::Action> {
    let start = problem.start_state();
    if problem.is_goal(&start) {
        return SearchResult::Solved(vec![]);
    }

    let mut statistics = SearchStatistics::new();
    let mut frontier = MinPriorityFrontier::new();
    let mut visited = HashSet::new();

    for successor in problem.successor_states(&start) {
        visited.insert(successor.state.clone());
        let node = SearchNode::seed(successor);
        let priority = node.g;
        frontier.push(node, priority);
        statistics.increment_generated_nodes();
    }

    while let Some(node) = frontier.pop() {
        if problem.is_goal(&node.state) {
            statistics.finalise();
            return SearchResult::Solved(node.path);
        }

        statistics.increment_expanded_nodes();
        for successor in problem.successor_states(&node.state) {
            if visited.insert(successor.state.clone()) {
                let child = node.child(successor);
                let priority = child.g;
                frontier.push(child, priority);
                statistics.increment_generated_nodes();
            }
        }
    }

    statistics.finalise();
    SearchResult::Unsolvable
}
