use itertools::Itertools;
use serde::Serialize;

use crate::routing::{Graph, UNREACHABLE, WeightMode};

/// Outcome of one shortest-path query.
///
/// An unreachable destination is a normal result: empty path and an
/// infinite total cost.
#[derive(Clone, Debug, PartialEq)]
pub struct PathResult {
    path: Vec<String>,
    total_cost: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Segment {
    pub from: String,
    pub to: String,
    /// `None` when either name no longer resolves in the graph.
    pub cost: Option<f64>,
    pub cumulative: f64,
}

impl PathResult {
    pub(crate) fn found(path: Vec<String>, total_cost: f64) -> Self {
        Self { path, total_cost }
    }

    pub(crate) fn unreachable() -> Self {
        Self {
            path: Vec::new(),
            total_cost: UNREACHABLE,
        }
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn has_path(&self) -> bool {
        !self.path.is_empty() && self.total_cost.is_finite()
    }

    /// Per-hop costs looked up through [`Graph::edge_weight`], with a running sum.
    pub fn segments(&self, graph: &Graph, mode: WeightMode) -> Vec<Segment> {
        let mut cumulative = 0.0;
        self.path
            .iter()
            .tuple_windows()
            .map(|(from, to)| {
                let cost = graph
                    .node_index(from)
                    .zip(graph.node_index(to))
                    .map(|(u, v)| graph.edge_weight(u, v, mode));
                if let Some(w) = cost {
                    cumulative += w;
                }
                Segment {
                    from: from.clone(),
                    to: to.clone(),
                    cost,
                    cumulative,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_path_is_derived_from_both_fields() {
        assert!(PathResult::found(vec!["A".into()], 0.0).has_path());
        assert!(!PathResult::unreachable().has_path());
        assert!(!PathResult::found(vec![], 3.0).has_path());
        assert!(!PathResult::found(vec!["A".into()], UNREACHABLE).has_path());
    }

    #[test]
    fn segments_accumulate_first_edge_weights() {
        let mut g = Graph::new();
        g.add_undirected_edge("A", "B", 5.0, 10.0);
        g.add_undirected_edge("B", "C", 3.0, 4.0);
        g.add_undirected_edge("B", "C", 1.0, 1.0);

        let result = PathResult::found(vec!["A".into(), "B".into(), "C".into()], 8.0);
        let segments = result.segments(&g, WeightMode::ByDistance);

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].cost, Some(5.0));
        assert_eq!(segments[1].cost, Some(3.0));
        assert_eq!(segments[1].cumulative, 8.0);

        let by_time = result.segments(&g, WeightMode::ByTime);
        assert_eq!(by_time[1].cumulative, 14.0);
    }

    #[test]
    fn segments_of_single_node_path_are_empty() {
        let mut g = Graph::new();
        g.ensure_node("A");
        let result = PathResult::found(vec!["A".into()], 0.0);
        assert!(result.segments(&g, WeightMode::ByTime).is_empty());
    }
}
