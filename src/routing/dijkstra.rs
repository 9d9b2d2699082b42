//! Single-source shortest paths over a [`Graph`].
//!
//! Uses a binary heap with lazy deletion: improved costs push a fresh
//! frontier entry and stale ones are dropped when popped. Weights selected
//! by the mode are assumed non-negative; negative weights are not rejected
//! and give unspecified results.

use tracing::{debug, trace};

use crate::routing::{
    Endpoint, Graph, NodeId, PathResult, RoutingError, WeightMode, search_state::SearchState,
};

pub fn solve(
    graph: &Graph,
    source: &str,
    destination: &str,
    mode: WeightMode,
) -> Result<PathResult, RoutingError> {
    let src = resolve(graph, source, Endpoint::Source)?;
    let dst = resolve(graph, destination, Endpoint::Destination)?;

    debug!(source, destination, %mode, "solving shortest path");

    let mut state = SearchState::new(graph.size(), src);

    while let Some(u) = state.settle_next() {
        if u == dst {
            trace!(node = u.index(), "destination finalized, stopping early");
            break;
        }

        let cost_u = state.cost(u);
        for edge in graph.neighbors(u) {
            if state.is_finalized(edge.target) {
                continue;
            }
            state.relax(edge.target, u, cost_u + edge.weight(mode));
        }
    }

    let total_cost = state.cost(dst);
    if !total_cost.is_finite() {
        debug!(source, destination, "destination unreachable");
        return Ok(PathResult::unreachable());
    }

    let path = state
        .path_to(dst)
        .into_iter()
        .map(|id| graph.node_name(id).map(str::to_owned))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(hops = path.len() - 1, total_cost, "path found");
    Ok(PathResult::found(path, total_cost))
}

fn resolve(graph: &Graph, name: &str, endpoint: Endpoint) -> Result<NodeId, RoutingError> {
    graph
        .node_index(name)
        .ok_or_else(|| RoutingError::NodeNotFound {
            endpoint,
            name: name.to_owned(),
        })
}
