use std::hash::Hash;

/// Path cost. Edge costs must be non-negative.
pub type Cost = i64;

/// Minimal search interface: unweighted neighbor enumeration.
///
/// Used by BFS and connected components. Neighbor relations are expected
/// to be symmetric for connectivity queries.
pub trait Pather {
    /// Search state. Two states are the same node iff they compare equal.
    type Node: Clone + Eq + Hash;

    /// Append neighbors of `node` into `buf`. The caller clears `buf` before
    /// calling.
    fn neighbors(&self, node: &Self::Node, buf: &mut Vec<Self::Node>);
}

/// Search interface with weighted edges.
pub trait WeightedPather {
    type Node: Clone + Eq + Hash;

    /// Append `(successor, edge cost)` pairs of `node` into `buf`. The caller
    /// clears `buf` before calling. Costs must be `>= 0`.
    fn successors(&self, node: &Self::Node, buf: &mut Vec<(Self::Node, Cost)>);
}

/// Weighted pather with a heuristic, for A*.
pub trait AstarPather: WeightedPather {
    /// Estimate of the remaining cost from `node` to the nearest goal.
    ///
    /// Must never overestimate (admissible). Optimal-path enumeration also
    /// needs it to be consistent: `estimate(a) <= cost(a, b) + estimate(b)`
    /// for every edge. The default `0` turns A* into uniform-cost search.
    fn estimate(&self, _node: &Self::Node) -> Cost {
        0
    }
}
