mod corners;
mod food;
mod heuristic;
mod manhattan;
mod zero;

pub use corners::CornersHeuristic;
pub use food::FoodHeuristic;
pub use heuristic::{Heuristic, HeuristicValue};
pub use manhattan::ManhattanHeuristic;
pub use zero::ZeroHeuristic;
