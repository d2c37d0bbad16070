mod corners;
mod food;
mod position;

pub use corners::{CornersProblem, CornersState};
pub use food::{eat_all_food, AnyFoodSearchProblem, FoodSearchProblem, FoodState, ReplayError};
pub use position::PositionSearchProblem;
