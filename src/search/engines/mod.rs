mod astar;
mod bfs;
mod dfs;
mod ucs;

pub use astar::astar_search;
pub use bfs::breadth_first_search;
pub use dfs::depth_first_search;
pub use ucs::uniform_cost_search;

use crate::search::{Heuristic, SearchProblem};
use clap;

/// Outcome of a graph search. An empty `Solved` path means the start state
/// was already a goal, which is distinct from `Unsolvable` (the frontier
/// emptied without reaching a goal).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult<A> {
    Solved(Vec<A>),
    Unsolvable,
}

impl<A> SearchResult<A> {
    pub fn path(self) -> Option<Vec<A>> {
        match self {
            SearchResult::Solved(path) => Some(path),
            SearchResult::Unsolvable => None,
        }
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    Dfs,
    Bfs,
    Ucs,
    Astar,
}

impl SearchEngineName {
    /// Dispatch to the named strategy. The heuristic is only consulted by
    /// A*; the uninformed strategies ignore it.
    pub fn search<P: SearchProblem>(
        &self,
        problem: &P,
        heuristic: &mut impl Heuristic<P>,
    ) -> SearchResult<P::Action> {
        match self {
            SearchEngineName::Dfs => depth_first_search(problem),
            SearchEngineName::Bfs => breadth_first_search(problem),
            SearchEngineName::Ucs => uniform_cost_search(problem),
            SearchEngineName::Astar => astar_search(problem, heuristic),
        }
    }
}
