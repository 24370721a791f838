mod frontier;
mod path;

use std::collections::{HashMap, HashSet};

use tracing::{debug, instrument};

use crate::common::{Environment, Position, SearchError, SearchResult, SearchStatus, Strategy};
use crate::grid::Grid;
use crate::heuristic::Heuristic;

use frontier::{Frontier, PriorityFrontier, QueueFrontier, StackFrontier};
use path::reconstruct_path;

/// Runs one search over `env` from `start` to `goal`.
///
/// One traversal skeleton drives all three strategies; the frontier pop
/// order is the only structural difference. DFS/BFS record a node's parent
/// at first discovery and never revisit an expanded node. Best-first
/// relaxes neighbors on strictly better tentative cost, so an expanded
/// node can be reopened when a cheaper route to it appears.
///
/// `heuristic` is consulted only by the best-first strategy.
#[instrument(skip_all, name = "search", fields(strategy = ?strategy), level = "debug")]
pub fn search<E, H>(
    env: &E,
    start: &E::Node,
    goal: &E::Node,
    strategy: Strategy,
    heuristic: H,
) -> Result<SearchResult<E::Node>, SearchError>
where
    E: Environment,
    H: Fn(&E::Node) -> f64,
{
    if !env.contains(start) {
        return Err(SearchError::InvalidEndpoint(format!(
            "start {start:?} is missing or blocked"
        )));
    }
    if !env.contains(goal) {
        return Err(SearchError::InvalidEndpoint(format!(
            "goal {goal:?} is missing or blocked"
        )));
    }

    // Degenerate case: nothing to explore.
    if start == goal {
        return Ok(SearchResult {
            status: SearchStatus::Found,
            path: vec![start.clone()],
            nodes_expanded: 0,
        });
    }

    let mut open: Box<dyn Frontier<E::Node>> = match strategy {
        Strategy::Dfs => Box::new(StackFrontier::new()),
        Strategy::Bfs => Box::new(QueueFrontier::new()),
        Strategy::BestFirst => Box::new(PriorityFrontier::new()),
    };
    let informed = strategy == Strategy::BestFirst;

    let mut visited: HashSet<E::Node> = HashSet::new();
    let mut parent: HashMap<E::Node, E::Node> = HashMap::new();
    let mut discovered: HashSet<E::Node> = HashSet::new();
    let mut g_cost: HashMap<E::Node, f64> = HashMap::new();
    let mut nodes_expanded = 0;
    let mut found = false;

    open.push(start.clone(), heuristic(start));
    discovered.insert(start.clone());
    g_cost.insert(start.clone(), 0.0);

    while let Some(current) = open.pop_next() {
        // Stale frontier entries: already expanded with an equal-or-better
        // cost, so skip. Relaxation removes a reopened node from the
        // visited set before re-pushing it.
        if visited.contains(&current) {
            continue;
        }
        visited.insert(current.clone());

        if current == *goal {
            found = true;
            break;
        }

        nodes_expanded += 1;
        debug!("expand node: {current:?}");

        for (neighbor, weight) in env.neighbors(&current)? {
            if informed {
                let tentative = g_cost[&current] + weight;
                let known = g_cost.get(&neighbor).copied().unwrap_or(f64::INFINITY);
                if tentative < known {
                    g_cost.insert(neighbor.clone(), tentative);
                    parent.insert(neighbor.clone(), current.clone());
                    visited.remove(&neighbor);
                    let f_cost = tentative + heuristic(&neighbor);
                    open.push(neighbor, f_cost);
                }
            } else if !visited.contains(&neighbor) && discovered.insert(neighbor.clone()) {
                parent.insert(neighbor.clone(), current.clone());
                open.push(neighbor, 0.0);
            }
        }
    }

    if found {
        Ok(SearchResult {
            status: SearchStatus::Found,
            path: reconstruct_path(&parent, start, goal),
            nodes_expanded,
        })
    } else {
        Ok(SearchResult {
            status: SearchStatus::Unreachable,
            path: Vec::new(),
            nodes_expanded,
        })
    }
}

/// Grid convenience wrapper binding the configured heuristic to the goal.
pub fn search_grid(
    grid: &Grid,
    start: Position,
    goal: Position,
    strategy: Strategy,
    heuristic: Heuristic,
) -> Result<SearchResult<Position>, SearchError> {
    search(grid, &start, &goal, strategy, |node| {
        heuristic.estimate(*node, goal)
    })
}
