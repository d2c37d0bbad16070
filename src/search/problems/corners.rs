use crate::grid::{Direction, Grid, Layout, Position};
use crate::search::problems::position::{grid_successors, walk_cost};
use crate::search::{SearchProblem, Successor};
use tracing::warn;

/// Composite search state for [`CornersProblem`]: the position plus one
/// visited flag per corner. Equality and hashing cover the whole composite,
/// so the visited set deduplicates on (position, flags) pairs rather than
/// position alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CornersState {
    pub position: Position,
    pub visited: [bool; 4],
}

/// Find a path through all four corners of a layout.
#[derive(Debug, Clone)]
pub struct CornersProblem {
    walls: Grid,
    start: Position,
    corners: [Position; 4],
}

impl CornersProblem {
    pub fn new(layout: &Layout) -> Self {
        let top = layout.walls.height() as i32 - 2;
        let right = layout.walls.width() as i32 - 2;
        let corners = [
            Position::new(1, 1),
            Position::new(1, top),
            Position::new(right, 1),
            Position::new(right, top),
        ];
        for corner in corners {
            if !layout.food.get(corner) {
                warn!("no food in corner {:?}", corner);
            }
        }
        Self {
            walls: layout.walls.clone(),
            start: layout.start,
            corners,
        }
    }

    pub fn corners(&self) -> &[Position; 4] {
        &self.corners
    }

    /// Flags with the corner at `position` (if any) marked on top of
    /// `visited`.
    fn mark(&self, mut visited: [bool; 4], position: Position) -> [bool; 4] {
        if let Some(index) = self.corners.iter().position(|&corner| corner == position) {
            visited[index] = true;
        }
        visited
    }
}

impl SearchProblem for CornersProblem {
    type State = CornersState;
    type Action = Direction;

    fn start_state(&self) -> CornersState {
        CornersState {
            position: self.start,
            visited: self.mark([false; 4], self.start),
        }
    }

    fn is_goal(&self, state: &CornersState) -> bool {
        state.visited == [true; 4]
    }

    fn successor_states(&self, state: &CornersState) -> Vec<Successor<CornersState, Direction>> {
        grid_successors(&self.walls, state.position)
            .into_iter()
            .map(|successor| Successor {
                // Corners are marked on arrival.
                state: CornersState {
                    position: successor.state,
                    visited: self.mark(state.visited, successor.state),
                },
                action: successor.action,
                cost: successor.cost,
            })
            .collect()
    }

    fn actions_cost(&self, actions: &[Direction]) -> f64 {
        walk_cost(&self.walls, self.start, actions)
    }
}
