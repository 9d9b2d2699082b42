use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::routing::{NodeId, RoutingError};

/// Which of an edge's two weights counts as its traversal cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum WeightMode {
    #[serde(rename = "distance")]
    ByDistance,
    #[serde(rename = "time")]
    ByTime,
}

impl WeightMode {
    pub fn label(self) -> &'static str {
        match self {
            WeightMode::ByDistance => "Distance",
            WeightMode::ByTime => "Time",
        }
    }
}

impl fmt::Display for WeightMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WeightMode {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "distance" | "1" => WeightMode::ByDistance,
            "time" | "2" => WeightMode::ByTime,
            _ => return Err(RoutingError::InvalidMode(s.to_owned())),
        })
    }
}

/// One directed adjacency entry. An undirected edge is stored as two of these.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub target: NodeId,
    pub distance: f64,
    pub time: f64,
}

impl Edge {
    pub fn new(target: NodeId, distance: f64, time: f64) -> Self {
        Self {
            target,
            distance,
            time,
        }
    }

    #[inline]
    pub fn weight(&self, mode: WeightMode) -> f64 {
        match mode {
            WeightMode::ByDistance => self.distance,
            WeightMode::ByTime => self.time,
        }
    }
}
