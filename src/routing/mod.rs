use std::fmt;

use thiserror::Error;

pub mod adapters;
pub mod dijkstra;
mod edge;
pub mod graph;
mod path_result;
mod search_state;

pub use edge::{Edge, WeightMode};
pub use graph::Graph;
pub use path_result::{PathResult, Segment};

/// Cost reported for a node that cannot be reached.
pub const UNREACHABLE: f64 = f64::INFINITY;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn new(idx: usize) -> Self {
        Self(idx)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Source => f.write_str("source"),
            Endpoint::Destination => f.write_str("destination"),
        }
    }
}

#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("{endpoint} node not found: {name}")]
    NodeNotFound { endpoint: Endpoint, name: String },

    #[error("invalid weight mode: {0:?} (expected distance or time)")]
    InvalidMode(String),

    #[error("node index {0} is out of range")]
    NodeOutOfRange(usize),
}
