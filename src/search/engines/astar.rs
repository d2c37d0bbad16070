//! A* graph search.

use crate::search::{
    engines::SearchResult, frontier::MinPriorityFrontier, Heuristic, SearchNode, SearchProblem,
    SearchStatistics,
};
use std::collections::HashSet;

/// Search the node with the lowest combined path cost and heuristic first.
/// Optimality requires the caller-supplied heuristic to be admissible; the
/// engine does not enforce that precondition.
pub fn astar_search<P: SearchProblem>(
    problem: &P,
    heuristic: &mut impl Heuristic<P>,
) -> SearchResult<P::Action> {
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
        let priority = node.g + heuristic.evaluate(&node.state, problem).into_inner();
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
                let priority = child.g + heuristic.evaluate(&child.state, problem).into_inner();
                frontier.push(child, priority);
                statistics.increment_generated_nodes();
            }
        }
    }

    statistics.finalise();
    SearchResult::Unsolvable
}
