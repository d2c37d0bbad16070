use crate::search::{SearchProblem, Successor};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("action {action} is not legal in state {state}")]
    IllegalAction { action: String, state: String },
    #[error("path does not reach a goal, final state is {state}")]
    GoalNotReached { state: String },
}

/// Replay `path` from the problem's start state, following only edges the
/// problem itself generates. Fails on the first action absent from the
/// current state's successors, or if the final state is not a goal.
pub fn validate<P: SearchProblem>(
    path: &[P::Action],
    problem: &P,
) -> Result<(), ValidationError> {
    let mut current = problem.start_state();
    for action in path {
        let successor = problem
            .successor_states(&current)
            .into_iter()
            .find(|successor: &Successor<P::State, P::Action>| successor.action == *action);
        match successor {
            Some(successor) => current = successor.state,
            None => {
                return Err(ValidationError::IllegalAction {
                    action: format!("{:?}", action),
                    state: format!("{:?}", current),
                })
            }
        }
    }

    if !problem.is_goal(&current) {
        return Err(ValidationError::GoalNotReached {
            state: format!("{:?}", current),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Direction, Layout};
    use crate::search::problems::PositionSearchProblem;

    fn problem() -> PositionSearchProblem {
        let layout = Layout::from_text(
            r#"
            %%%%%
            %P .%
            %%%%%
            "#,
        );
        PositionSearchProblem::to_food(&layout)
    }

    #[test]
    fn good_path_validates() {
        let path = [Direction::East, Direction::East];
        assert!(validate(&path, &problem()).is_ok());
    }

    #[test]
    fn walking_into_a_wall_is_illegal() {
        let path = [Direction::North];
        assert!(matches!(
            validate(&path, &problem()),
            Err(ValidationError::IllegalAction { .. })
        ));
    }

    #[test]
    fn stopping_short_misses_the_goal() {
        let path = [Direction::East];
        assert!(matches!(
            validate(&path, &problem()),
            Err(ValidationError::GoalNotReached { .. })
        ));
    }
}
