use std::fmt::Debug;

/// A multi-agent, turn-based game state capability. Agent 0 is the
/// maximizing agent; agents `1..num_agents()` are adversaries (or chance
/// movers, depending on the engine), cycled as `(agent + 1) % num_agents()`.
pub trait GameState: Clone + Debug {
    type Action: Clone + PartialEq + Debug;

    fn legal_actions(&self, agent: usize) -> Vec<Self::Action>;

    fn successor(&self, agent: usize, action: &Self::Action) -> Self;

    fn num_agents(&self) -> usize;

    fn is_win(&self) -> bool;

    fn is_lose(&self) -> bool;

    /// Whether `action` is the in-place "stop" move. The tree search engines
    /// never explore or choose it.
    fn is_stop(&self, action: &Self::Action) -> bool;
}

/// The legal actions of `agent` with the stop move filtered out; the action
/// set every tree search ply considers.
pub fn non_stop_actions<S: GameState>(state: &S, agent: usize) -> Vec<S::Action> {
    state
        .legal_actions(agent)
        .into_iter()
        .filter(|action| !state.is_stop(action))
        .collect()
}

/// An agent strategy: one action per query, `None` when the state offers no
/// action to take.
pub trait Agent<S: GameState> {
    fn choose_action(&mut self, state: &S) -> Option<S::Action>;
}
