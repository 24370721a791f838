use serde::Serialize;
use std::fmt::Debug;
use std::hash::Hash;
use std::str::FromStr;
use thiserror::Error;

/// Grid coordinate as (row, column).
pub type Position = (usize, usize);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("invalid node: {0}")]
    InvalidNode(String),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Searchable space. Implementors answer neighbor queries in a
/// deterministic order and stay immutable for the duration of a search.
pub trait Environment {
    type Node: Clone + Eq + Hash + Ord + Debug;

    fn contains(&self, node: &Self::Node) -> bool;

    /// Accessible neighbors of `node` with their edge costs.
    ///
    /// Edge costs are non-negative. Grid environments treat out-of-range
    /// nodes as having no neighbors; explicit graphs return `InvalidNode`
    /// for nodes they have never seen.
    fn neighbors(&self, node: &Self::Node) -> Result<Vec<(Self::Node, f64)>, SearchError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Strategy {
    Dfs,
    Bfs,
    BestFirst,
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dfs" => Ok(Strategy::Dfs),
            "bfs" => Ok(Strategy::Bfs),
            "bestfirst" => Ok(Strategy::BestFirst),
            other => Err(SearchError::InvalidConfiguration(format!(
                "unknown solver {other:?}, expected dfs, bfs or bestfirst"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SearchStatus {
    Found,
    Unreachable,
}

/// Outcome of one search invocation. Immutable after return; timing and
/// memory capture belong to the caller wrapping the search call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult<N> {
    pub status: SearchStatus,
    pub path: Vec<N>,
    pub nodes_expanded: usize,
}

impl<N> SearchResult<N> {
    pub fn is_found(&self) -> bool {
        self.status == SearchStatus::Found
    }
}
