//! Shared fixtures: ASCII mazes for the graph search tests and a scripted
//! game tree for the adversarial search tests.

use crate::grid::Position;
use crate::multiagent::{GameState, PacmanPerception};
use std::collections::HashMap;
use std::rc::Rc;

pub const TINY_MAZE_TEXT: &str = r#"
    %%%%%%%
    %    P%
    %  %% %
    %.    %
    %%%%%%%
"#;

pub const MEDIUM_MAZE_TEXT: &str = r#"
    %%%%%%%%%%%%
    %P   %     %
    % %% % %%% %
    % %  %   % %
    % % %%%% % %
    % %      % %
    % %%%%%% % %
    %.       % %
    %%%%%%%%%%%%
"#;

pub const CORNERS_MAZE_TEXT: &str = r#"
    %%%%%%
    %.  P%
    %    %
    %    %
    %.  .%
    %%%%%%
"#;

pub const FOOD_MAZE_TEXT: &str = r#"
    %%%%%%%
    %. P .%
    %  %  %
    % .%. %
    %%%%%%%
"#;

#[derive(Debug, Clone)]
struct TestNode {
    edges: Vec<(&'static str, usize)>,
    value: f64,
    terminal: bool,
}

#[derive(Debug)]
struct TestTree {
    nodes: HashMap<usize, TestNode>,
}

/// Builder for a scripted game tree. Node 0 is the root; every node is
/// declared with the actions leading out of it or as a valued leaf.
#[derive(Debug, Default)]
pub struct GameBuilder {
    nodes: HashMap<usize, TestNode>,
}

pub fn tiny_game() -> GameBuilder {
    GameBuilder::default()
}

impl GameBuilder {
    fn node(mut self, id: usize, edges: &[(&'static str, usize)], value: f64, terminal: bool) -> Self {
        self.nodes.insert(
            id,
            TestNode {
                edges: edges.to_vec(),
                value,
                terminal,
            },
        );
        self
    }

    /// Declare the root, where the maximizing agent moves.
    pub fn max_node(self, edges: &[(&'static str, usize)]) -> Self {
        self.node(0, edges, 0.0, false)
    }

    /// Declare an interior node where an adversary (or chance) moves.
    pub fn min_node(self, id: usize, edges: &[(&'static str, usize)]) -> Self {
        self.node(id, edges, 0.0, false)
    }

    /// Declare a terminal leaf with a fixed evaluation value.
    pub fn leaf(self, id: usize, value: f64) -> Self {
        self.node(id, &[], value, true)
    }

    pub fn state(self, num_agents: usize, start: usize) -> TestState {
        TestState {
            tree: Rc::new(TestTree { nodes: self.nodes }),
            node: start,
            num_agents,
        }
    }
}

/// A position in a scripted game tree. Actions are string labels; the agent
/// index never affects which edges exist, which keeps the fixtures small.
#[derive(Debug, Clone)]
pub struct TestState {
    tree: Rc<TestTree>,
    node: usize,
    num_agents: usize,
}

impl TestState {
    fn current(&self) -> &TestNode {
        &self.tree.nodes[&self.node]
    }
}

impl GameState for TestState {
    type Action = &'static str;

    fn legal_actions(&self, _agent: usize) -> Vec<&'static str> {
        self.current().edges.iter().map(|&(label, _)| label).collect()
    }

    fn successor(&self, _agent: usize, action: &&'static str) -> Self {
        let (_, target) = self
            .current()
            .edges
            .iter()
            .find(|&&(label, _)| label == *action)
            .expect("action not scripted for this node");
        Self {
            tree: self.tree.clone(),
            node: *target,
            num_agents: self.num_agents,
        }
    }

    fn num_agents(&self) -> usize {
        self.num_agents
    }

    fn is_win(&self) -> bool {
        self.current().terminal && self.current().value >= 0.0
    }

    fn is_lose(&self) -> bool {
        self.current().terminal && self.current().value < 0.0
    }

    fn is_stop(&self, action: &&'static str) -> bool {
        *action == "stop"
    }
}

impl PacmanPerception for TestState {
    fn pacman_position(&self) -> Position {
        Position::new(0, 0)
    }

    fn food_positions(&self) -> Vec<Position> {
        vec![]
    }

    fn ghost_positions(&self) -> Vec<Position> {
        vec![]
    }

    fn score(&self) -> f64 {
        self.current().value
    }
}
