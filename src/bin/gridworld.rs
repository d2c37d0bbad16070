use clap::Parser;
use gridmind::grid::Position;
use gridmind::mdp::{
    GridworldAction, GridworldMdp, GridworldState, MarkovDecisionProcess, ValueIteration,
};
use gridmind::rl::QLearningAgent;
use gridmind::Verbosity;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

#[derive(Parser)]
#[command(version)]
/// Solve the classic 4x3 stochastic gridworld, either offline with value
/// iteration or online with Q-learning episodes.
struct Cli {
    #[arg(
        value_enum,
        help = "The solver to run",
        short = 's',
        long = "solver",
        id = "SOLVER",
        default_value_t = SolverName::ValueIteration
    )]
    solver_name: SolverName,
    #[arg(help = "The discount factor", long = "discount", default_value_t = 0.9)]
    discount: f64,
    #[arg(help = "The action noise", long = "noise", default_value_t = 0.2)]
    noise: f64,
    #[arg(
        help = "The reward paid by every non-exit move",
        long = "living-reward",
        default_value_t = 0.0
    )]
    living_reward: f64,
    #[arg(
        help = "The number of value iteration passes",
        short = 'i',
        long = "iterations",
        default_value_t = 100
    )]
    iterations: usize,
    #[arg(
        help = "The number of Q-learning episodes",
        short = 'n',
        long = "episodes",
        default_value_t = 1000
    )]
    episodes: usize,
    #[arg(help = "The learning rate", long = "alpha", default_value_t = 0.5)]
    alpha: f64,
    #[arg(
        help = "The exploration rate",
        long = "epsilon",
        default_value_t = 0.3
    )]
    epsilon: f64,
    #[arg(help = "The RNG seed", long = "seed", default_value_t = 0)]
    seed: u64,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[clap(rename_all = "kebab-case")]
enum SolverName {
    ValueIteration,
    QLearning,
}

fn main() {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let mdp = GridworldMdp::book_grid(cli.noise, cli.living_reward);

    match cli.solver_name {
        SolverName::ValueIteration => {
            let solver = ValueIteration::new(mdp.clone(), cli.discount, cli.iterations);
            info!(iterations = cli.iterations, "value iteration finished");
            report(&mdp, |state| solver.value(state), |state| solver.policy(state));
        }
        SolverName::QLearning => {
            let mut agent = QLearningAgent::new(
                mdp.clone(),
                cli.alpha,
                cli.discount,
                cli.epsilon,
                cli.seed,
            );
            let mut rng = ChaCha8Rng::seed_from_u64(cli.seed);
            for _ in 0..cli.episodes {
                run_episode(&mdp, &mut agent, &mut rng);
            }
            info!(episodes = cli.episodes, "training finished");
            report(&mdp, |state| agent.value(state), |state| agent.policy(state));
        }
    }
}

/// One episode from the bottom-left cell until the agent exits. The episode
/// is driven by the true model here, but the agent only ever sees the
/// sampled transitions.
fn run_episode(
    mdp: &GridworldMdp,
    agent: &mut QLearningAgent<GridworldMdp>,
    rng: &mut ChaCha8Rng,
) {
    let mut state = GridworldState::At(Position::new(0, 0));
    while let Some(action) = agent.choose_action(&state) {
        let next = sample(rng, &mdp.transitions(&state, &action));
        let reward = mdp.reward(&state, &action, &next);
        agent.update(&state, &action, &next, reward);
        state = next;
    }
}

fn sample(rng: &mut ChaCha8Rng, transitions: &[(GridworldState, f64)]) -> GridworldState {
    let mut draw: f64 = rng.gen();
    for (state, probability) in transitions {
        draw -= probability;
        if draw <= 0.0 {
            return *state;
        }
    }
    // Rounding can leave a sliver of the unit interval unclaimed.
    transitions.last().expect("empty transition distribution").0
}

fn report(
    mdp: &GridworldMdp,
    value: impl Fn(&GridworldState) -> f64,
    policy: impl Fn(&GridworldState) -> Option<GridworldAction>,
) {
    let mut cells: Vec<Position> = mdp
        .states()
        .into_iter()
        .filter_map(|state| match state {
            GridworldState::At(position) => Some(position),
            GridworldState::Terminal => None,
        })
        .collect();
    // Top row first, west to east, matching how the grid is drawn on paper.
    cells.sort_by_key(|position| (-position.y, position.x));

    for position in cells {
        let state = GridworldState::At(position);
        match policy(&state) {
            Some(action) => println!(
                "({}, {}): value {:+.4}, policy {:?}",
                position.x,
                position.y,
                value(&state),
                action
            ),
            None => println!(
                "({}, {}): value {:+.4}",
                position.x,
                position.y,
                value(&state)
            ),
        }
    }
}
