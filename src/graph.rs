use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;

use anyhow::Context;
use serde::Deserialize;

use crate::common::{Environment, SearchError};

#[derive(Debug, Deserialize)]
struct GraphYaml {
    edges: Vec<EdgeYaml>,
}

#[derive(Debug, Deserialize)]
struct EdgeYaml {
    from: String,
    to: String,
    weight: f64,
}

/// Explicit weighted adjacency structure keyed by string node ids.
/// Neighbor lists keep their insertion order so traversal is deterministic.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    adjacency: HashMap<String, Vec<(String, f64)>>,
}

impl WeightedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, id: &str) {
        self.adjacency.entry(id.to_string()).or_default();
    }

    /// Adds a directed edge, registering both endpoints. Negative weights
    /// violate the environment invariant and are rejected.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> Result<(), SearchError> {
        if weight < 0.0 {
            return Err(SearchError::InvalidConfiguration(format!(
                "negative edge weight {weight} on {from} -> {to}"
            )));
        }
        self.add_node(to);
        self.adjacency
            .entry(from.to_string())
            .or_default()
            .push((to.to_string(), weight));
        Ok(())
    }

    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let file =
            File::open(path).with_context(|| format!("failed to open graph file {path}"))?;
        let reader = BufReader::new(file);
        let parsed: GraphYaml =
            serde_yaml::from_reader(reader).with_context(|| format!("bad graph yaml {path}"))?;

        let mut graph = WeightedGraph::new();
        for edge in &parsed.edges {
            graph
                .add_edge(&edge.from, &edge.to, edge.weight)
                .with_context(|| format!("bad edge {} -> {}", edge.from, edge.to))?;
        }
        Ok(graph)
    }

    /// Total edge cost along `path`, or None if some hop is not an edge.
    pub fn path_cost(&self, path: &[String]) -> Option<f64> {
        let mut total = 0.0;
        for pair in path.windows(2) {
            let weight = self
                .adjacency
                .get(&pair[0])?
                .iter()
                .find(|(neighbor, _)| *neighbor == pair[1])
                .map(|(_, weight)| *weight)?;
            total += weight;
        }
        Some(total)
    }

    /// The 5-node demonstration graph used for weighted comparison runs.
    pub fn demo() -> Self {
        let mut graph = WeightedGraph::new();
        graph.add_edge("A", "B", 2.0).unwrap();
        graph.add_edge("A", "C", 4.0).unwrap();
        graph.add_edge("B", "D", 3.0).unwrap();
        graph.add_edge("C", "D", 1.0).unwrap();
        graph.add_edge("C", "G", 6.0).unwrap();
        graph.add_edge("D", "G", 5.0).unwrap();
        graph
    }
}

impl Environment for WeightedGraph {
    type Node = String;

    fn contains(&self, node: &String) -> bool {
        self.adjacency.contains_key(node)
    }

    fn neighbors(&self, node: &String) -> Result<Vec<(String, f64)>, SearchError> {
        self.adjacency
            .get(node)
            .cloned()
            .ok_or_else(|| SearchError::InvalidNode(node.clone()))
    }
}
