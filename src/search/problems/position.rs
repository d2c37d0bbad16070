use crate::grid::{Direction, Grid, Layout, Position};
use crate::search::{SearchProblem, Successor, ILLEGAL_ACTIONS_COST};

/// Navigate from a start position to a single goal position. Every step
/// costs one.
#[derive(Debug, Clone)]
pub struct PositionSearchProblem {
    walls: Grid,
    start: Position,
    goal: Position,
}

impl PositionSearchProblem {
    pub fn new(layout: &Layout, goal: Position) -> Self {
        Self {
            walls: layout.walls.clone(),
            start: layout.start,
            goal,
        }
    }

    /// Target the layout's first food cell; convenient for demos and tests.
    pub fn to_food(layout: &Layout) -> Self {
        let goal = *layout
            .food
            .positions()
            .first()
            .expect("layout has no food to target");
        Self::new(layout, goal)
    }

    pub fn goal(&self) -> Position {
        self.goal
    }
}

impl SearchProblem for PositionSearchProblem {
    type State = Position;
    type Action = Direction;

    fn start_state(&self) -> Position {
        self.start
    }

    fn is_goal(&self, state: &Position) -> bool {
        *state == self.goal
    }

    fn successor_states(&self, state: &Position) -> Vec<Successor<Position, Direction>> {
        grid_successors(&self.walls, *state)
    }

    fn actions_cost(&self, actions: &[Direction]) -> f64 {
        walk_cost(&self.walls, self.start, actions)
    }
}

/// The legal unit-cost moves from `position` on a wall grid, in cardinal
/// enumeration order.
pub(crate) fn grid_successors(
    walls: &Grid,
    position: Position,
) -> Vec<Successor<Position, Direction>> {
    let mut successors = vec![];
    for action in Direction::CARDINAL {
        let next = action.apply(position);
        if !walls.get(next) {
            successors.push(Successor {
                state: next,
                action,
                cost: 1.0,
            });
        }
    }
    successors
}

/// Replay `actions` from `start`; a move into a wall makes the whole
/// sequence cost [`ILLEGAL_ACTIONS_COST`].
pub(crate) fn walk_cost(walls: &Grid, start: Position, actions: &[Direction]) -> f64 {
    let mut position = start;
    for &action in actions {
        position = action.apply(position);
        if walls.get(position) {
            return ILLEGAL_ACTIONS_COST;
        }
    }
    actions.len() as f64
}
