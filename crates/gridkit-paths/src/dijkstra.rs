use std::hash::Hash;

use indexmap::map::Entry;

use crate::Search;
use crate::search::{NO_PARENT, Node, PathNode, UNREACHABLE, add_cost};
use crate::traits::{Cost, WeightedPather};

impl<N: Clone + Eq + Hash> Search<N> {
    /// Compute a multi-source Dijkstra distance map.
    ///
    /// Every source starts at cost 0. Expansion stops when the cumulative
    /// cost exceeds `max_cost`, which also makes the query finite on
    /// unbounded graphs. Returns all reached states in order of increasing
    /// cost.
    pub fn dijkstra_map<P>(&mut self, pather: &P, sources: &[N], max_cost: Cost) -> &[PathNode<N>]
    where
        P: WeightedPather<Node = N>,
    {
        self.dijkstra_nodes.clear();
        self.dijkstra_results.clear();
        self.frontier.clear();
        self.expanded = 0;

        // Seed sources.
        for src in sources {
            if self.dijkstra_nodes.contains_key(src) {
                continue;
            }
            let (si, _) = self
                .dijkstra_nodes
                .insert_full(src.clone(), Node::new(0, NO_PARENT, false));
            self.frontier.push(si, 0, 0);
        }

        let mut sbuf = std::mem::take(&mut self.sbuf);

        while let Some(current) = self.frontier.pop() {
            let ci = current.idx;
            let Some((node, info)) = self.dijkstra_nodes.get_index_mut(ci) else {
                continue;
            };
            if info.closed || current.g > info.g {
                continue;
            }
            info.closed = true;
            let current_g = info.g;
            let current_node = node.clone();
            self.expanded += 1;

            sbuf.clear();
            pather.successors(&current_node, &mut sbuf);
            self.dijkstra_results.push(PathNode {
                node: current_node,
                cost: current_g,
            });

            for (next, edge) in sbuf.drain(..) {
                assert!(edge >= 0, "negative edge cost {edge}");
                let tentative = add_cost(current_g, edge);
                if tentative > max_cost {
                    continue;
                }
                match self.dijkstra_nodes.entry(next) {
                    Entry::Vacant(e) => {
                        let ni = e.index();
                        e.insert(Node::new(tentative, ci, false));
                        self.frontier.push(ni, tentative, tentative);
                    }
                    Entry::Occupied(mut e) => {
                        if tentative < e.get().g {
                            let ni = e.index();
                            e.get_mut().improve(tentative, ci, false);
                            self.frontier.push(ni, tentative, tentative);
                        }
                    }
                }
            }
        }

        self.sbuf = sbuf;
        log::debug!(
            "dijkstra: settled {} states from {} sources",
            self.dijkstra_results.len(),
            sources.len()
        );
        &self.dijkstra_results
    }

    /// Query the Dijkstra cost of a state.
    ///
    /// Returns [`UNREACHABLE`] if the state was not reached by the last
    /// `dijkstra_map` call.
    pub fn dijkstra_at(&self, node: &N) -> Cost {
        match self.dijkstra_nodes.get(node) {
            Some(info) if info.closed => info.g,
            _ => UNREACHABLE,
        }
    }
}
