use itertools::Itertools;
use serde::Serialize;

use crate::routing::{Graph, PathResult, Segment, WeightMode};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryReport {
    pub mode: WeightMode,
    pub found: bool,
    pub path: Vec<String>,
    pub segments: Vec<Segment>,
    /// `None` (serialized as `null`) when the destination is unreachable.
    pub total_cost: Option<f64>,
}

impl QueryReport {
    pub fn new(result: &PathResult, graph: &Graph, mode: WeightMode) -> Self {
        let found = result.has_path();
        Self {
            mode,
            found,
            path: result.path().to_vec(),
            segments: result.segments(graph, mode),
            total_cost: found.then(|| result.total_cost()),
        }
    }
}

pub fn render_text(title: &str, result: &PathResult, graph: &Graph, mode: WeightMode) -> String {
    let mut out = format!("=== {title} Result ===\n");

    if !result.has_path() {
        out.push_str("No path found.\n");
        return out;
    }

    out.push_str(&format!("Path: {}\n", result.path().iter().join(" -> ")));
    out.push_str("Segments:\n");
    for s in result.segments(graph, mode) {
        let line = match s.cost {
            Some(cost) => format!(
                "  {} -> {} : {cost:.3} | cumulative={:.3}\n",
                s.from, s.to, s.cumulative
            ),
            None => format!("  {} -> {} : (node not found)\n", s.from, s.to),
        };
        out.push_str(&line);
    }
    out.push_str(&format!("Total {title}: {:.3}\n", result.total_cost()));
    out
}

/// One text block per solved mode, separated by a blank line.
pub fn render_all(outcomes: &[(WeightMode, PathResult)], graph: &Graph) -> String {
    outcomes
        .iter()
        .map(|(mode, result)| render_text(mode.label(), result, graph, *mode))
        .join("\n")
}
