use std::collections::HashMap;
use std::hash::Hash;

/// Walks backward from goal through the parent map and reverses.
///
/// Fails closed: a goal the parent map never reached, or a chain that
/// cycles or dead-ends before start, yields an empty path. An empty path
/// always means "no path"; a goal adjacent to start is a 2-element path
/// and start == goal is the single-element path.
pub(crate) fn reconstruct_path<N: Clone + Eq + Hash>(
    parent: &HashMap<N, N>,
    start: &N,
    goal: &N,
) -> Vec<N> {
    if start == goal {
        return vec![start.clone()];
    }

    let mut path = vec![goal.clone()];
    let mut current = goal.clone();
    while let Some(prev) = parent.get(&current) {
        path.push(prev.clone());
        if prev == start {
            path.reverse();
            return path;
        }
        // A well-formed parent map is cycle-free; a longer walk means a cycle.
        if path.len() > parent.len() + 1 {
            break;
        }
        current = prev.clone();
    }

    Vec::new()
}
