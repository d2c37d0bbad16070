//! The book-style stochastic gridworld, used as an MDP fixture by the demo
//! binary and the learning tests.

use crate::grid::{Grid, Position};
use crate::mdp::MarkovDecisionProcess;
use crate::rl::ActionSpace;
use itertools::Itertools;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridworldState {
    At(Position),
    /// The single absorbing state every exit action leads to.
    Terminal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridworldAction {
    North,
    South,
    East,
    West,
    Exit,
}

impl GridworldAction {
    const MOVES: [GridworldAction; 4] = [
        GridworldAction::North,
        GridworldAction::South,
        GridworldAction::East,
        GridworldAction::West,
    ];

    fn delta(self) -> (i32, i32) {
        match self {
            GridworldAction::North => (0, 1),
            GridworldAction::South => (0, -1),
            GridworldAction::East => (1, 0),
            GridworldAction::West => (-1, 0),
            GridworldAction::Exit => (0, 0),
        }
    }

    /// The two moves perpendicular to this one; where the noise mass goes.
    fn perpendicular(self) -> [GridworldAction; 2] {
        match self {
            GridworldAction::North | GridworldAction::South => {
                [GridworldAction::East, GridworldAction::West]
            }
            GridworldAction::East | GridworldAction::West => {
                [GridworldAction::North, GridworldAction::South]
            }
            GridworldAction::Exit => [GridworldAction::Exit, GridworldAction::Exit],
        }
    }
}

/// A gridworld MDP: the agent moves in the intended direction with
/// probability `1 - noise` and slips sideways with `noise / 2` each; moves
/// into walls or off the board bounce back. Exit cells offer only the exit
/// action, which pays the cell's reward and ends the episode; every other
/// move pays the living reward.
#[derive(Debug, Clone)]
pub struct GridworldMdp {
    walls: Grid,
    exits: HashMap<Position, f64>,
    noise: f64,
    living_reward: f64,
}

impl GridworldMdp {
    pub fn new(walls: Grid, exits: HashMap<Position, f64>, noise: f64, living_reward: f64) -> Self {
        Self {
            walls,
            exits,
            noise,
            living_reward,
        }
    }

    /// The classic 4x3 world: +1 and -1 exits next to each other and one
    /// interior wall.
    pub fn book_grid(noise: f64, living_reward: f64) -> Self {
        let mut walls = Grid::new(4, 3, false);
        walls.set(Position::new(1, 1), true);
        let exits = HashMap::from([
            (Position::new(3, 2), 1.0),
            (Position::new(3, 1), -1.0),
        ]);
        Self::new(walls, exits, noise, living_reward)
    }

    fn step(&self, from: Position, action: GridworldAction) -> Position {
        let (dx, dy) = action.delta();
        let next = Position::new(from.x + dx, from.y + dy);
        let out_of_bounds = next.x < 0
            || next.y < 0
            || next.x as usize >= self.walls.width()
            || next.y as usize >= self.walls.height();
        if out_of_bounds || self.walls.get(next) {
            from
        } else {
            next
        }
    }
}

impl MarkovDecisionProcess for GridworldMdp {
    type State = GridworldState;
    type Action = GridworldAction;

    fn states(&self) -> Vec<GridworldState> {
        let cells = (0..self.walls.width() as i32)
            .cartesian_product(0..self.walls.height() as i32)
            .map(|(x, y)| Position::new(x, y))
            .filter(|&position| !self.walls.get(position))
            .map(GridworldState::At);
        std::iter::once(GridworldState::Terminal).chain(cells).collect()
    }

    fn possible_actions(&self, state: &GridworldState) -> Vec<GridworldAction> {
        match state {
            GridworldState::Terminal => vec![],
            GridworldState::At(position) if self.exits.contains_key(position) => {
                vec![GridworldAction::Exit]
            }
            GridworldState::At(_) => GridworldAction::MOVES.to_vec(),
        }
    }

    fn transitions(
        &self,
        state: &GridworldState,
        action: &GridworldAction,
    ) -> Vec<(GridworldState, f64)> {
        let position = match state {
            GridworldState::Terminal => return vec![],
            GridworldState::At(position) => *position,
        };

        if *action == GridworldAction::Exit {
            return vec![(GridworldState::Terminal, 1.0)];
        }

        // Slips landing on the intended cell merge into one entry so the
        // probabilities the caller sees always sum to one.
        let mut distribution: Vec<(GridworldState, f64)> = vec![];
        let mut add = |next: Position, probability: f64| {
            if probability == 0.0 {
                return;
            }
            let next = GridworldState::At(next);
            match distribution.iter_mut().find(|(state, _)| *state == next) {
                Some((_, mass)) => *mass += probability,
                None => distribution.push((next, probability)),
            }
        };

        add(self.step(position, *action), 1.0 - self.noise);
        for slip in action.perpendicular() {
            add(self.step(position, slip), self.noise / 2.0);
        }
        distribution
    }

    fn reward(
        &self,
        state: &GridworldState,
        action: &GridworldAction,
        _next: &GridworldState,
    ) -> f64 {
        match (state, action) {
            (GridworldState::At(position), GridworldAction::Exit) => self.exits[position],
            _ => self.living_reward,
        }
    }
}

/// Lets learning agents run episodes in the gridworld without seeing its
/// transition model.
impl ActionSpace for GridworldMdp {
    type State = GridworldState;
    type Action = GridworldAction;

    fn legal_actions(&self, state: &GridworldState) -> Vec<GridworldAction> {
        self.possible_actions(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mdp::ValueIteration;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn transition_probabilities_sum_to_one() {
        let mdp = GridworldMdp::book_grid(0.2, 0.0);
        for state in mdp.states() {
            for action in mdp.possible_actions(&state) {
                let total: f64 = mdp
                    .transitions(&state, &action)
                    .into_iter()
                    .map(|(_, probability)| probability)
                    .sum();
                assert_approx_eq!(total, 1.0);
            }
        }
    }

    #[test]
    fn bumping_into_the_interior_wall_bounces_back() {
        let mdp = GridworldMdp::book_grid(0.0, 0.0);
        let transitions = mdp.transitions(
            &GridworldState::At(Position::new(1, 0)),
            &GridworldAction::North,
        );
        assert_eq!(
            transitions,
            vec![(GridworldState::At(Position::new(1, 0)), 1.0)]
        );
    }

    #[test]
    fn noiseless_agent_walks_to_the_good_exit() {
        // With no noise and no living cost the optimal policy from the cell
        // below the +1 exit's neighbour heads toward the +1.
        let mdp = GridworldMdp::book_grid(0.0, 0.0);
        let solver = ValueIteration::new(mdp, 0.9, 100);

        let good_exit = GridworldState::At(Position::new(3, 2));
        assert_approx_eq!(solver.value(&good_exit), 1.0);
        let bad_exit = GridworldState::At(Position::new(3, 1));
        assert_approx_eq!(solver.value(&bad_exit), -1.0);

        // The neighbour of the +1 exit moves into it.
        let neighbour = GridworldState::At(Position::new(2, 2));
        assert_eq!(solver.policy(&neighbour), Some(GridworldAction::East));
    }
}
