use pathfind_rust::config::{Cli, Config};
use pathfind_rust::graph::WeightedGraph;
use pathfind_rust::grid::Grid;
use pathfind_rust::solver::{search, search_grid};
use pathfind_rust::stat::Stats;

use std::fs::File;
use std::io::BufWriter;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{info, Level};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();
    let cli = Cli::parse();

    let config = Config::new(&cli);
    config.validate()?;

    if config.graph_path.is_some() {
        run_graph(&config)
    } else {
        run_grid(&config)
    }
}

fn run_grid(config: &Config) -> anyhow::Result<()> {
    let grid = if let Some(path) = &config.grid_path {
        Grid::from_file(path)?
    } else if let (Some(height), Some(width)) = (config.random_height, config.random_width) {
        let mut rng = StdRng::seed_from_u64(config.seed as u64);
        Grid::random(height, width, config.obstacle_density, &mut rng)?
    } else {
        info!("No grid specified, using the built-in demo grid");
        Grid::demo()
    };

    let start = match config.start_override()? {
        Some(position) => position,
        None => grid
            .start()
            .context("grid has no S cell and no --start override")?,
    };
    let goal = match config.goal_override()? {
        Some(position) => position,
        None => grid
            .goal()
            .context("grid has no G cell and no --goal override")?,
    };

    println!("{}", grid.render_with_path(&[]));

    let heuristic = config.heuristic()?;
    let mut reports = Vec::new();
    for strategy in config.strategies()? {
        let begin = Instant::now();
        let result = search_grid(&grid, start, goal, strategy, heuristic)?;
        let time_us = begin.elapsed().as_micros();

        let cost = if result.is_found() {
            (result.path.len() - 1) as f64
        } else {
            0.0
        };
        let stats = Stats::from_result(strategy, &result, cost, time_us);
        stats.print();
        if result.is_found() {
            println!("{}", grid.render_with_path(&result.path));
        }
        reports.push(stats);
    }

    write_reports(config, &reports)
}

fn run_graph(config: &Config) -> anyhow::Result<()> {
    let path = config.graph_path.as_ref().unwrap();
    let graph = WeightedGraph::from_file(path)?;
    let start = config.graph_start.clone();
    let goal = config.graph_goal.clone();

    let mut reports = Vec::new();
    for strategy in config.strategies()? {
        let begin = Instant::now();
        // No coordinate heuristic exists for an explicit graph; h = 0 keeps
        // the best-first strategy admissible (uniform-cost search).
        let result = search(&graph, &start, &goal, strategy, |_| 0.0)?;
        let time_us = begin.elapsed().as_micros();

        let cost = graph.path_cost(&result.path).unwrap_or(0.0);
        let stats = Stats::from_result(strategy, &result, cost, time_us);
        stats.print();
        reports.push(stats);
    }

    write_reports(config, &reports)
}

fn write_reports<N: Serialize>(config: &Config, reports: &[Stats<N>]) -> anyhow::Result<()> {
    if let Some(path) = &config.output_path {
        let file =
            File::create(path).with_context(|| format!("failed to create output file {path}"))?;
        serde_json::to_writer_pretty(BufWriter::new(file), reports)
            .with_context(|| format!("failed to write results to {path}"))?;
        info!("Wrote results to {path}");
    }
    Ok(())
}
