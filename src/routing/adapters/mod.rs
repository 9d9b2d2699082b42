pub mod edgelist;

/// One undirected edge as produced by an input format, before ids are assigned.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    pub distance: f64,
    pub time: f64,
}

pub trait EdgeSource {
    type Error;

    /// Returns every edge in input order; the builder inserts them in that order.
    fn edges(&self) -> Result<impl Iterator<Item = &EdgeRecord>, Self::Error>;
}
