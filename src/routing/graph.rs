use std::collections::HashMap;

use tracing::debug;

use crate::routing::{
    Edge, NodeId, RoutingError, UNREACHABLE, WeightMode,
    adapters::{EdgeRecord, EdgeSource},
};

/// Undirected graph over named nodes.
///
/// Names get dense ids in first-seen order; `names[id]` is the inverse of
/// `ids`. Each undirected edge is stored as a pair of mirrored adjacency
/// entries carrying the same weights. Parallel edges are kept as-is.
#[derive(Debug, Default)]
pub struct Graph {
    ids: HashMap<String, NodeId>,
    names: Vec<String>,
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl Graph {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn from_source<S: EdgeSource>(source: &S) -> Result<Self, S::Error> {
        let records = source.edges()?;

        let mut graph = Self::new();
        for EdgeRecord {
            from,
            to,
            distance,
            time,
        } in records
        {
            graph.add_undirected_edge(from, to, *distance, *time);
        }

        debug!(
            nodes = graph.size(),
            edges = graph.edge_count(),
            "built graph from edge source"
        );
        Ok(graph)
    }

    /// Returns the id for `name`, allocating the next one if it is new.
    pub fn ensure_node(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }

        let id = NodeId::new(self.names.len());
        self.ids.insert(name.to_owned(), id);
        self.names.push(name.to_owned());
        self.adjacency.push(Vec::new());
        id
    }

    /// Weights are stored as given; sign is not checked here.
    pub fn add_undirected_edge(&mut self, a: &str, b: &str, distance: f64, time: f64) {
        let u = self.ensure_node(a);
        let v = self.ensure_node(b);

        self.adjacency[u.index()].push(Edge::new(v, distance, time));
        self.adjacency[v.index()].push(Edge::new(u, distance, time));
        self.edge_count += 1;
    }

    pub fn size(&self) -> usize {
        self.names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn neighbors(&self, id: NodeId) -> &[Edge] {
        self.adjacency
            .get(id.index())
            .map(|edges| edges.as_slice())
            .unwrap_or(&[])
    }

    pub fn node_index(&self, name: &str) -> Option<NodeId> {
        self.ids.get(name).copied()
    }

    pub fn node_name(&self, id: NodeId) -> Result<&str, RoutingError> {
        self.names
            .get(id.index())
            .map(String::as_str)
            .ok_or(RoutingError::NodeOutOfRange(id.index()))
    }

    #[allow(unused)]
    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Weight of the first edge from `from` to `to` in insertion order, or
    /// [`UNREACHABLE`] if there is none. Not the minimum over parallel edges.
    pub fn edge_weight(&self, from: NodeId, to: NodeId, mode: WeightMode) -> f64 {
        self.neighbors(from)
            .iter()
            .find(|e| e.target == to)
            .map(|e| e.weight(mode))
            .unwrap_or(UNREACHABLE)
    }
}
