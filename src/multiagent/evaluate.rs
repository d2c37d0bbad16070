use crate::grid::{manhattan, Position};

/// A static evaluation of a game state from the maximizing agent's point of
/// view; higher is better.
pub trait Evaluator<S> {
    fn evaluate(&mut self, state: &S) -> f64;
}

/// What the evaluation functions need to see of a Pacman-like state.
pub trait PacmanPerception {
    fn pacman_position(&self) -> Position;
    fn food_positions(&self) -> Vec<Position>;
    fn ghost_positions(&self) -> Vec<Position>;
    fn score(&self) -> f64;
}

/// The zero-effort baseline: the game's own score.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScoreEvaluator;

impl<S: PacmanPerception> Evaluator<S> for ScoreEvaluator {
    fn evaluate(&mut self, state: &S) -> f64 {
        state.score()
    }
}

/// Distance-feature evaluation: the game score, minus a penalty for each
/// ghost closer than two half-Manhattan steps, plus a reciprocal-distance
/// bonus for every food.
#[derive(Clone, Copy, Debug, Default)]
pub struct PacmanEvaluator;

impl<S: PacmanPerception> Evaluator<S> for PacmanEvaluator {
    fn evaluate(&mut self, state: &S) -> f64 {
        let position = state.pacman_position();
        let mut score = 0.0;

        for ghost in state.ghost_positions() {
            let distance = manhattan(ghost, position) / 2.0;
            if distance < 2.0 {
                score -= distance;
            }
        }

        for food in state.food_positions() {
            let distance = manhattan(food, position) / 2.0;
            if distance != 0.0 {
                score += 1.0 / distance;
            }
        }

        state.score() + score
    }
}
