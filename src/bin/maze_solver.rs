use clap::Parser;
use gridmind::grid::{Direction, Layout};
use gridmind::search::{
    heuristics::{CornersHeuristic, FoodHeuristic, ManhattanHeuristic},
    problems::{eat_all_food, CornersProblem, FoodSearchProblem, PositionSearchProblem},
    validate, Heuristic, SearchEngineName, SearchProblem, SearchResult,
};
use gridmind::Verbosity;
use itertools::Itertools;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(version)]
/// Solve an ASCII maze with a graph search strategy.
struct Cli {
    #[arg(help = "The maze layout file (% wall, . food, P start)")]
    maze: PathBuf,
    #[arg(
        value_enum,
        help = "The search engine to use",
        short = 'e',
        long = "engine",
        id = "ENGINE",
        default_value_t = SearchEngineName::Astar
    )]
    search_engine_name: SearchEngineName,
    #[arg(
        value_enum,
        help = "The problem to solve on the maze",
        short = 'p',
        long = "problem",
        id = "PROBLEM",
        default_value_t = ProblemName::Position
    )]
    problem_name: ProblemName,
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
enum ProblemName {
    /// Reach the first food cell.
    Position,
    /// Touch all four corners.
    Corners,
    /// Eat every food cell, planned as a single search.
    Food,
    /// Eat every food cell, replanning towards the closest one each time.
    EatAll,
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

    let text = std::fs::read_to_string(&cli.maze).expect("Failed to read maze file");
    let layout = Layout::from_text(&text);

    let path = match cli.problem_name {
        ProblemName::Position => {
            let problem = PositionSearchProblem::to_food(&layout);
            solve(cli.search_engine_name, &problem, &mut ManhattanHeuristic)
        }
        ProblemName::Corners => {
            let problem = CornersProblem::new(&layout);
            solve(cli.search_engine_name, &problem, &mut CornersHeuristic)
        }
        ProblemName::Food => {
            let problem = FoodSearchProblem::new(&layout);
            solve(cli.search_engine_name, &problem, &mut FoodHeuristic)
        }
        ProblemName::EatAll => match eat_all_food(&layout) {
            Ok(path) => Some(path),
            Err(e) => {
                info!("replanning failed: {}", e);
                None
            }
        },
    };

    match path {
        Some(path) => {
            println!("Path found:");
            println!("{}", path.iter().join(", "));
            println!("Path length: {}", path.len());
        }
        None => println!("No path found"),
    }
}

fn solve<P>(
    engine: SearchEngineName,
    problem: &P,
    heuristic: &mut impl Heuristic<P>,
) -> Option<Vec<Direction>>
where
    P: SearchProblem<Action = Direction>,
{
    match engine.search(problem, heuristic) {
        SearchResult::Solved(path) => {
            match validate(&path, problem) {
                Ok(()) => info!("path is valid"),
                Err(e) => {
                    info!("path is invalid: {}", e);
                    return None;
                }
            }
            info!(path_length = path.len());
            Some(path)
        }
        SearchResult::Unsolvable => {
            info!("search exhausted the reachable states");
            None
        }
    }
}
