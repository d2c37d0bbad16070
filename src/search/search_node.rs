use crate::search::Successor;

/// A frontier entry: a discovered state together with the action sequence
/// that reached it and the accumulated path cost. Immutable once pushed;
/// consumed when popped and either expanded or discarded.
#[derive(Debug, Clone)]
pub struct SearchNode<S, A> {
    pub state: S,
    pub path: Vec<A>,
    pub g: f64,
}

impl<S, A: Clone> SearchNode<S, A> {
    /// A node for an immediate successor of the start state.
    pub fn seed(successor: Successor<S, A>) -> Self {
        Self {
            state: successor.state,
            path: vec![successor.action],
            g: successor.cost,
        }
    }

    /// Extend this node's path by one edge.
    pub fn child(&self, successor: Successor<S, A>) -> Self {
        let mut path = self.path.clone();
        path.push(successor.action);
        Self {
            state: successor.state,
            path,
            g: self.g + successor.cost,
        }
    }
}
