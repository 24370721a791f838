use anyhow::{anyhow, bail};
use clap::Parser;

use crate::common::{Position, Strategy};
use crate::heuristic::Heuristic;

#[derive(Parser, Debug)]
#[command(
    name = "Rust Pathfind",
    about = "Compares DFS, BFS and best-first search over grids and weighted graphs.",
    version = "1.0"
)]
pub struct Cli {
    #[arg(long, help = "Path to a grid text file (symbols S G X .)")]
    pub grid_path: Option<String>,

    #[arg(long, help = "Path to a weighted graph YAML file")]
    pub graph_path: Option<String>,

    #[arg(
        long,
        help = "Start cell override as row,column",
        use_value_delimiter = true
    )]
    pub start: Vec<usize>,

    #[arg(
        long,
        help = "Goal cell override as row,column",
        use_value_delimiter = true
    )]
    pub goal: Vec<usize>,

    #[arg(long, help = "Start node id for graph mode", default_value = "A")]
    pub graph_start: String,

    #[arg(long, help = "Goal node id for graph mode", default_value = "G")]
    pub graph_goal: String,

    #[arg(
        long,
        help = "Solver to use: dfs, bfs, bestfirst or all",
        default_value = "all"
    )]
    pub solver: String,

    #[arg(
        long,
        help = "Heuristic for the best-first solver: manhattan or euclidean",
        default_value = "manhattan"
    )]
    pub heuristic: String,

    #[arg(
        long,
        help = "Seed for the random number generator",
        default_value_t = 0
    )]
    pub seed: usize,

    #[arg(long, help = "Height of a randomly generated grid")]
    pub random_height: Option<usize>,

    #[arg(long, help = "Width of a randomly generated grid")]
    pub random_width: Option<usize>,

    #[arg(
        long,
        help = "Obstacle density of a randomly generated grid",
        default_value_t = 0.25
    )]
    pub obstacle_density: f64,

    #[arg(long, help = "Path to a JSON results file")]
    pub output_path: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub grid_path: Option<String>,
    pub graph_path: Option<String>,
    pub start: Vec<usize>,
    pub goal: Vec<usize>,
    pub graph_start: String,
    pub graph_goal: String,
    pub solver: String,
    pub heuristic: String,
    pub seed: usize,
    pub random_height: Option<usize>,
    pub random_width: Option<usize>,
    pub obstacle_density: f64,
    pub output_path: Option<String>,
}

impl Config {
    pub fn new(cli: &Cli) -> Self {
        Self {
            grid_path: cli.grid_path.clone(),
            graph_path: cli.graph_path.clone(),
            start: cli.start.clone(),
            goal: cli.goal.clone(),
            graph_start: cli.graph_start.clone(),
            graph_goal: cli.graph_goal.clone(),
            solver: cli.solver.clone(),
            heuristic: cli.heuristic.clone(),
            seed: cli.seed,
            random_height: cli.random_height,
            random_width: cli.random_width,
            obstacle_density: cli.obstacle_density,
            output_path: cli.output_path.clone(),
        }
    }

    /// The strategies one run compares; "all" expands to the full set.
    pub fn strategies(&self) -> anyhow::Result<Vec<Strategy>> {
        if self.solver == "all" {
            return Ok(vec![Strategy::Dfs, Strategy::Bfs, Strategy::BestFirst]);
        }
        Ok(vec![self.solver.parse()?])
    }

    pub fn heuristic(&self) -> anyhow::Result<Heuristic> {
        Ok(self.heuristic.parse()?)
    }

    fn endpoint(pair: &[usize], which: &str) -> anyhow::Result<Option<Position>> {
        match pair {
            [] => Ok(None),
            [row, column] => Ok(Some((*row, *column))),
            other => Err(anyhow!(
                "{which} override must be row,column, got {other:?}"
            )),
        }
    }

    pub fn start_override(&self) -> anyhow::Result<Option<Position>> {
        Self::endpoint(&self.start, "start")
    }

    pub fn goal_override(&self) -> anyhow::Result<Option<Position>> {
        Self::endpoint(&self.goal, "goal")
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        self.strategies()?;
        self.heuristic()?;
        self.start_override()?;
        self.goal_override()?;

        if self.grid_path.is_some() && self.graph_path.is_some() {
            bail!("grid-path and graph-path are mutually exclusive");
        }
        if self.random_height.is_some() != self.random_width.is_some() {
            bail!("random-height and random-width must be given together");
        }
        if !(0.0..=1.0).contains(&self.obstacle_density) {
            bail!(
                "obstacle density must lie in [0, 1], got {}",
                self.obstacle_density
            );
        }
        Ok(())
    }
}
