use std::str::FromStr;

use serde::Serialize;

use crate::common::{Position, SearchError};

/// Cost-to-goal estimators for the best-first strategy. Both are
/// admissible and consistent on unit-cost 4-connected grids, so
/// best-first search stays cost-optimal with either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Heuristic {
    Manhattan,
    Euclidean,
}

impl Heuristic {
    pub fn estimate(&self, node: Position, goal: Position) -> f64 {
        let dx = node.0.abs_diff(goal.0) as f64;
        let dy = node.1.abs_diff(goal.1) as f64;
        match self {
            Heuristic::Manhattan => dx + dy,
            Heuristic::Euclidean => (dx * dx + dy * dy).sqrt(),
        }
    }
}

impl FromStr for Heuristic {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manhattan" => Ok(Heuristic::Manhattan),
            "euclidean" => Ok(Heuristic::Euclidean),
            other => Err(SearchError::InvalidConfiguration(format!(
                "unknown heuristic {other:?}, expected manhattan or euclidean"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance() {
        assert_eq!(Heuristic::Manhattan.estimate((0, 0), (3, 4)), 7.0);
        assert_eq!(Heuristic::Manhattan.estimate((2, 5), (2, 5)), 0.0);
    }

    #[test]
    fn test_euclidean_distance() {
        assert_eq!(Heuristic::Euclidean.estimate((0, 0), (3, 4)), 5.0);
        assert_eq!(Heuristic::Euclidean.estimate((1, 1), (1, 1)), 0.0);
    }

    #[test]
    fn test_unknown_heuristic_name() {
        let err = "chebyshev".parse::<Heuristic>().unwrap_err();
        assert!(matches!(err, SearchError::InvalidConfiguration(_)));
    }
}
