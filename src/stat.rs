use serde::Serialize;
use tracing::info;

use crate::common::{SearchResult, SearchStatus, Strategy};

/// Diagnostics for one strategy run. Wall-clock time is captured by the
/// caller around the search call; the core only reports expansion work.
#[derive(Debug, Clone, Serialize)]
pub struct Stats<N> {
    pub strategy: Strategy,
    pub status: SearchStatus,
    pub path: Vec<N>,
    pub cost: f64,
    pub nodes_expanded: usize,
    pub time_us: u128,
}

impl<N: Clone> Stats<N> {
    pub fn from_result(
        strategy: Strategy,
        result: &SearchResult<N>,
        cost: f64,
        time_us: u128,
    ) -> Self {
        Stats {
            strategy,
            status: result.status,
            path: result.path.clone(),
            cost,
            nodes_expanded: result.nodes_expanded,
            time_us,
        }
    }

    pub fn print(&self) {
        info!(
            "{:?}: status {:?} cost {:?} path length {:?} nodes expanded {:?} time(microseconds) {:?}",
            self.strategy,
            self.status,
            self.cost,
            self.path.len(),
            self.nodes_expanded,
            self.time_us
        );
    }
}
