//! Closure-based searches.
//!
//! For one-off queries it is often simpler to describe the graph with a
//! closure than to implement [`WeightedPather`] on a new type. [`FnPather`]
//! adapts such closures, and the free functions here run a whole search in
//! one call.

use std::hash::Hash;
use std::marker::PhantomData;

use crate::Search;
use crate::cc::Components;
use crate::traits::{AstarPather, Cost, Pather, WeightedPather};

/// A pather built from a successor closure and an optional heuristic.
pub struct FnPather<N, F, H = fn(&N) -> Cost> {
    successors: F,
    heuristic: H,
    _node: PhantomData<fn(&N)>,
}

fn no_estimate<N>(_: &N) -> Cost {
    0
}

impl<N, F> FnPather<N, F>
where
    F: Fn(&N, &mut Vec<(N, Cost)>),
{
    /// A pather with a zero heuristic.
    pub fn new(successors: F) -> Self {
        Self {
            successors,
            heuristic: no_estimate::<N>,
            _node: PhantomData,
        }
    }
}

impl<N, F, H> FnPather<N, F, H> {
    /// Replace the heuristic. It must never overestimate.
    pub fn with_heuristic<H2>(self, heuristic: H2) -> FnPather<N, F, H2>
    where
        H2: Fn(&N) -> Cost,
    {
        FnPather {
            successors: self.successors,
            heuristic,
            _node: PhantomData,
        }
    }
}

impl<N, F, H> WeightedPather for FnPather<N, F, H>
where
    N: Clone + Eq + Hash,
    F: Fn(&N, &mut Vec<(N, Cost)>),
{
    type Node = N;

    fn successors(&self, node: &N, buf: &mut Vec<(N, Cost)>) {
        (self.successors)(node, buf);
    }
}

impl<N, F, H> AstarPather for FnPather<N, F, H>
where
    N: Clone + Eq + Hash,
    F: Fn(&N, &mut Vec<(N, Cost)>),
    H: Fn(&N) -> Cost,
{
    fn estimate(&self, node: &N) -> Cost {
        (self.heuristic)(node)
    }
}

struct FnNeighbors<N, F> {
    neighbors: F,
    _node: PhantomData<fn(&N)>,
}

impl<N, F> Pather for FnNeighbors<N, F>
where
    N: Clone + Eq + Hash,
    F: Fn(&N, &mut Vec<N>),
{
    type Node = N;

    fn neighbors(&self, node: &N, buf: &mut Vec<N>) {
        (self.neighbors)(node, buf);
    }
}

/// Cheapest cost from `start` to any state satisfying `goal`, or
/// [`UNREACHABLE`](crate::UNREACHABLE).
///
/// `successors` appends `(next, cost)` pairs to the buffer it is given.
pub fn astar<N, F, H, G>(start: N, successors: F, heuristic: H, goal: G) -> Cost
where
    N: Clone + Eq + Hash,
    F: Fn(&N, &mut Vec<(N, Cost)>),
    H: Fn(&N) -> Cost,
    G: FnMut(&N) -> bool,
{
    let pather = FnPather::new(successors).with_heuristic(heuristic);
    Search::new().astar_cost(&pather, start, goal)
}

/// [`astar`] without a heuristic.
pub fn dijkstra<N, F, G>(start: N, successors: F, goal: G) -> Cost
where
    N: Clone + Eq + Hash,
    F: Fn(&N, &mut Vec<(N, Cost)>),
    G: FnMut(&N) -> bool,
{
    Search::new().astar_cost(&FnPather::new(successors), start, goal)
}

/// Partition `nodes` into connected regions under the `neighbors` relation.
pub fn components<N, I, F>(nodes: I, neighbors: F) -> Components<N>
where
    N: Clone + Eq + Hash,
    I: IntoIterator<Item = N>,
    F: Fn(&N, &mut Vec<N>),
{
    let pather = FnNeighbors {
        neighbors,
        _node: PhantomData,
    };
    Search::new().components(&pather, nodes)
}

/// Every state reachable from `seed`, `seed` first.
pub fn region<N, F>(seed: N, neighbors: F) -> Vec<N>
where
    N: Clone + Eq + Hash,
    F: Fn(&N, &mut Vec<N>),
{
    let pather = FnNeighbors {
        neighbors,
        _node: PhantomData,
    };
    Search::new().region(&pather, seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UNREACHABLE;

    /// Collatz-like graph over integers: n -> n + 1 costs 1, n -> 2n costs 1.
    fn grow(n: &u64, buf: &mut Vec<(u64, Cost)>) {
        buf.push((n + 1, 1));
        buf.push((n * 2, 1));
    }

    #[test]
    fn closure_dijkstra() {
        // 1 -> 2 -> 3 -> 6 -> 12 -> 24 -> 25 -> 50 -> 100
        assert_eq!(dijkstra(1u64, grow, |&n| n == 100), 8);
        assert_eq!(dijkstra(5u64, grow, |&n| n == 5), 0);
    }

    #[test]
    fn closure_astar_matches_dijkstra() {
        // Moves on a line, each step costs 1; |d| is exact.
        let line = |n: &i32, buf: &mut Vec<(i32, Cost)>| {
            buf.push((n - 1, 1));
            buf.push((n + 1, 1));
        };
        let target = 17;
        let h = |n: &i32| Cost::from((target - n).abs());
        assert_eq!(astar(-3, line, h, |&n| n == target), 20);
        assert_eq!(dijkstra(-3, line, |&n| n == target), 20);
    }

    #[test]
    fn closure_unreachable() {
        let bounded = |n: &u8, buf: &mut Vec<(u8, Cost)>| {
            if *n < 10 {
                buf.push((n + 1, 2));
            }
        };
        assert_eq!(dijkstra(0u8, bounded, |&n| n == 11), UNREACHABLE);
        assert_eq!(dijkstra(0u8, bounded, |&n| n == 10), 20);
    }

    #[test]
    fn closure_components() {
        // Numbers are linked when they differ by 1.
        let cc = components([1, 2, 3, 7, 8, 20], |n: &i32, buf: &mut Vec<i32>| {
            buf.push(n - 1);
            buf.push(n + 1);
        });
        let sizes: Vec<usize> = cc.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![3, 2, 1]);
        assert!(cc.connected(&1, &3));
    }

    #[test]
    fn closure_region() {
        let r = region(0u32, |n: &u32, buf: &mut Vec<u32>| buf.push((n + 3) % 12));
        assert_eq!(r, vec![0, 3, 6, 9]);
    }
}
