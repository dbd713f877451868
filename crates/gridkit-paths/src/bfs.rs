use std::collections::VecDeque;
use std::collections::hash_map::Entry;
use std::hash::Hash;

use crate::Search;
use crate::search::{PathNode, UNREACHABLE};
use crate::traits::{Cost, Pather};

impl<N: Clone + Eq + Hash> Search<N> {
    /// Compute a multi-source breadth-first search distance map.
    ///
    /// Each step has cost 1. Expansion stops when the distance exceeds
    /// `max_dist`. Returns all reached states in order of increasing
    /// distance, sources first.
    pub fn bfs_map<P>(&mut self, pather: &P, sources: &[N], max_dist: Cost) -> &[PathNode<N>]
    where
        P: Pather<Node = N>,
    {
        self.bfs_map.clear();
        self.bfs_results.clear();

        let mut queue: VecDeque<(N, Cost)> = VecDeque::new();

        for src in sources {
            if let Entry::Vacant(e) = self.bfs_map.entry(src.clone()) {
                e.insert(0);
                queue.push_back((src.clone(), 0));
                self.bfs_results.push(PathNode {
                    node: src.clone(),
                    cost: 0,
                });
            }
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some((current, dist)) = queue.pop_front() {
            if dist >= max_dist {
                continue;
            }
            nbuf.clear();
            pather.neighbors(&current, &mut nbuf);

            let nd = dist + 1;
            for next in nbuf.drain(..) {
                if let Entry::Vacant(e) = self.bfs_map.entry(next.clone()) {
                    e.insert(nd);
                    self.bfs_results.push(PathNode {
                        node: next.clone(),
                        cost: nd,
                    });
                    queue.push_back((next, nd));
                }
            }
        }

        self.nbuf = nbuf;
        log::trace!("bfs: reached {} states", self.bfs_results.len());
        &self.bfs_results
    }

    /// Query the BFS distance of a state.
    ///
    /// Returns [`UNREACHABLE`] if the state was not reached by the last
    /// `bfs_map` call.
    pub fn bfs_at(&self, node: &N) -> Cost {
        self.bfs_map.get(node).copied().unwrap_or(UNREACHABLE)
    }
}
