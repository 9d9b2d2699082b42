use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

use crate::routing::{NodeId, UNREACHABLE};

/// Frontier entry ordered by `(cost, node)`; equal costs pop the lower index first.
#[derive(Clone, Copy, Debug)]
pub struct Candidate {
    pub cost: f64,
    pub node: NodeId,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Working tables for one query. Allocated per call and never shared.
#[derive(Debug)]
pub struct SearchState {
    costs: Vec<f64>,
    predecessors: Vec<Option<NodeId>>,
    finalized: Vec<bool>,
    frontier: BinaryHeap<Reverse<Candidate>>,
}

impl SearchState {
    pub fn new(node_count: usize, source: NodeId) -> Self {
        let mut state = Self {
            costs: vec![UNREACHABLE; node_count],
            predecessors: vec![None; node_count],
            finalized: vec![false; node_count],
            frontier: BinaryHeap::new(),
        };
        state.costs[source.index()] = 0.0;
        state.frontier.push(Reverse(Candidate {
            cost: 0.0,
            node: source,
        }));
        state
    }

    /// Pops the cheapest entry whose node is not yet finalized and finalizes
    /// it. Stale entries left behind by earlier relaxations are discarded.
    pub fn settle_next(&mut self) -> Option<NodeId> {
        while let Some(Reverse(Candidate { node, .. })) = self.frontier.pop() {
            if self.finalized[node.index()] {
                continue;
            }
            self.finalized[node.index()] = true;
            return Some(node);
        }
        None
    }

    pub fn is_finalized(&self, node: NodeId) -> bool {
        self.finalized[node.index()]
    }

    pub fn cost(&self, node: NodeId) -> f64 {
        self.costs[node.index()]
    }

    /// Records `via` as the predecessor of `node` if `cost` improves on the
    /// best known cost. Returns whether it did.
    pub fn relax(&mut self, node: NodeId, via: NodeId, cost: f64) -> bool {
        if cost >= self.costs[node.index()] {
            return false;
        }
        self.costs[node.index()] = cost;
        self.predecessors[node.index()] = Some(via);
        self.frontier.push(Reverse(Candidate { cost, node }));
        true
    }

    /// Node ids from the source to `target`, following predecessors.
    pub fn path_to(&self, target: NodeId) -> Vec<NodeId> {
        let mut path = vec![target];
        let mut current = target;
        while let Some(prev) = self.predecessors[current.index()] {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        path
    }
}
