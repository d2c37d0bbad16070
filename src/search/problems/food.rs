use crate::grid::{Direction, Grid, Layout, Position};
use crate::search::engines::uniform_cost_search;
use crate::search::problems::position::{grid_successors, walk_cost};
use crate::search::{SearchProblem, Successor};
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::info;

/// Composite search state for [`FoodSearchProblem`]: the position plus the
/// set of food still uneaten. A `BTreeSet` keeps hashing and enumeration
/// order deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FoodState {
    pub position: Position,
    pub food: BTreeSet<Position>,
}

/// Find a path that eats every food cell in a layout.
#[derive(Debug, Clone)]
pub struct FoodSearchProblem {
    walls: Grid,
    start: Position,
    food: BTreeSet<Position>,
}

impl FoodSearchProblem {
    pub fn new(layout: &Layout) -> Self {
        Self {
            walls: layout.walls.clone(),
            start: layout.start,
            food: layout.food.positions().into_iter().collect(),
        }
    }
}

impl SearchProblem for FoodSearchProblem {
    type State = FoodState;
    type Action = Direction;

    fn start_state(&self) -> FoodState {
        let mut food = self.food.clone();
        food.remove(&self.start);
        FoodState {
            position: self.start,
            food,
        }
    }

    fn is_goal(&self, state: &FoodState) -> bool {
        state.food.is_empty()
    }

    fn successor_states(&self, state: &FoodState) -> Vec<Successor<FoodState, Direction>> {
        grid_successors(&self.walls, state.position)
            .into_iter()
            .map(|successor| {
                let mut food = state.food.clone();
                food.remove(&successor.state);
                Successor {
                    state: FoodState {
                        position: successor.state,
                        food,
                    },
                    action: successor.action,
                    cost: successor.cost,
                }
            })
            .collect()
    }

    fn actions_cost(&self, actions: &[Direction]) -> f64 {
        walk_cost(&self.walls, self.start, actions)
    }
}

/// Position search whose goal is reaching any cell that still has food.
#[derive(Debug, Clone)]
pub struct AnyFoodSearchProblem {
    walls: Grid,
    start: Position,
    food: Grid,
}

impl AnyFoodSearchProblem {
    pub fn new(walls: Grid, start: Position, food: Grid) -> Self {
        Self { walls, start, food }
    }
}

impl SearchProblem for AnyFoodSearchProblem {
    type State = Position;
    type Action = Direction;

    fn start_state(&self) -> Position {
        self.start
    }

    fn is_goal(&self, state: &Position) -> bool {
        self.food.get(*state)
    }

    fn successor_states(&self, state: &Position) -> Vec<Successor<Position, Direction>> {
        grid_successors(&self.walls, *state)
    }

    fn actions_cost(&self, actions: &[Direction]) -> f64 {
        walk_cost(&self.walls, self.start, actions)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReplayError {
    #[error("planned action {action} is illegal at {position:?}")]
    IllegalMove { action: Direction, position: Position },
    #[error("no path to any remaining food from {position:?}")]
    FoodUnreachable { position: Position },
}

/// Eat all food by greedily walking to the closest food over and over, the
/// way the closest-dot agent plans. Each segment is found with uniform-cost
/// search and replayed step by step; a segment action that walks into a wall
/// is fatal rather than silently skipped.
pub fn eat_all_food(layout: &Layout) -> Result<Vec<Direction>, ReplayError> {
    let mut position = layout.start;
    let mut food = layout.food.clone();
    let mut actions = vec![];

    // Standing on food eats it, so the start cell is cleared up front.
    food.set(position, false);

    while food.count() > 0 {
        let problem = AnyFoodSearchProblem::new(layout.walls.clone(), position, food.clone());
        let segment = match uniform_cost_search(&problem).path() {
            Some(segment) => segment,
            None => return Err(ReplayError::FoodUnreachable { position }),
        };

        for action in segment {
            let next = action.apply(position);
            if layout.walls.get(next) {
                return Err(ReplayError::IllegalMove { action, position });
            }
            position = next;
            food.set(position, false);
            actions.push(action);
        }
    }

    info!(path_cost = actions.len(), "path found");
    Ok(actions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::engines::astar_search;
    use crate::search::heuristics::FoodHeuristic;
    use crate::search::validate;
    use crate::test_utils::FOOD_MAZE_TEXT;

    #[test]
    fn astar_eats_everything() {
        let layout = Layout::from_text(FOOD_MAZE_TEXT);
        let problem = FoodSearchProblem::new(&layout);
        let path = astar_search(&problem, &mut FoodHeuristic)
            .path()
            .expect("solvable");
        assert!(validate(&path, &problem).is_ok());
    }

    #[test]
    fn greedy_closest_dot_plan_eats_everything() {
        let layout = Layout::from_text(FOOD_MAZE_TEXT);
        let plan = eat_all_food(&layout).expect("plan exists");

        // Replay independently: every food cell must be walked over.
        let mut position = layout.start;
        let mut food = layout.food.clone();
        food.set(position, false);
        for action in plan {
            position = action.apply(position);
            assert!(!layout.walls.get(position));
            food.set(position, false);
        }
        assert_eq!(food.count(), 0);
    }

    #[test]
    fn unreachable_food_is_an_error() {
        let layout = Layout::from_text(
            r#"
            %%%%%%
            %P % %
            %  %.%
            %%%%%%
            "#,
        );
        assert!(matches!(
            eat_all_food(&layout),
            Err(ReplayError::FoodUnreachable { .. })
        ));
    }
}
