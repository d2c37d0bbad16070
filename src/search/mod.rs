pub mod engines;
pub mod heuristics;
pub mod problems;

mod frontier;
mod problem;
mod search_node;
mod search_statistics;
mod validate;

pub use engines::{SearchEngineName, SearchResult};
pub use frontier::{FifoQueue, MinPriorityFrontier, Stack};
pub use heuristics::{Heuristic, HeuristicValue};
pub use problem::{SearchProblem, Successor, ILLEGAL_ACTIONS_COST};
pub use search_node::SearchNode;
pub use search_statistics::SearchStatistics;
pub use validate::{validate, ValidationError};
