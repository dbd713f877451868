use std::hash::Hash;

use indexmap::map::Entry;

use crate::Search;
use crate::search::{NO_PARENT, Node, OptimalPaths, Path, UNREACHABLE, add_cost};
use crate::traits::{AstarPather, Cost};

impl<N: Clone + Eq + Hash> Search<N> {
    /// Compute a cheapest path from `start` to the first state satisfying
    /// `goal`, using A*.
    ///
    /// Returns the full path (including both endpoints) or `None` if the
    /// frontier is exhausted without reaching a goal.
    pub fn astar_path<P>(
        &mut self,
        pather: &P,
        start: N,
        goal: impl FnMut(&N) -> bool,
    ) -> Option<Path<N>>
    where
        P: AstarPather<Node = N>,
    {
        let (goals, cost) = self.astar_run(pather, start, goal, false)?;
        let &goal_idx = goals.first()?;

        // Reconstruct path.
        let mut nodes = Vec::new();
        let mut ci = goal_idx;
        while ci != NO_PARENT {
            let (node, info) = self.astar_nodes.get_index(ci)?;
            nodes.push(node.clone());
            ci = info.parent;
        }
        nodes.reverse();
        Some(Path { cost, nodes })
    }

    /// Cost of a cheapest path from `start` to a goal, or [`UNREACHABLE`].
    pub fn astar_cost<P>(&mut self, pather: &P, start: N, goal: impl FnMut(&N) -> bool) -> Cost
    where
        P: AstarPather<Node = N>,
    {
        self.astar_run(pather, start, goal, false)
            .map_or(UNREACHABLE, |(_, cost)| cost)
    }

    /// Find every state lying on at least one cheapest path from `start` to
    /// a goal.
    ///
    /// Unlike [`astar_path`](Self::astar_path) the search keeps going after
    /// the first goal until no frontier entry can tie the optimal cost, so
    /// all goal states reached at that cost are included. The heuristic
    /// must be consistent.
    pub fn astar_all<P>(
        &mut self,
        pather: &P,
        start: N,
        goal: impl FnMut(&N) -> bool,
    ) -> Option<OptimalPaths<N>>
    where
        P: AstarPather<Node = N>,
    {
        let (goal_idxs, cost) = self.astar_run(pather, start, goal, true)?;

        let mut seen = vec![false; self.astar_nodes.len()];
        let mut stack = goal_idxs.clone();
        for &gi in &goal_idxs {
            seen[gi] = true;
        }
        let mut nodes = Vec::new();
        while let Some(ci) = stack.pop() {
            let Some((node, info)) = self.astar_nodes.get_index(ci) else {
                continue;
            };
            nodes.push(node.clone());
            for &pi in &info.preds {
                if !seen[pi] {
                    seen[pi] = true;
                    stack.push(pi);
                }
            }
        }

        let goals = goal_idxs
            .iter()
            .filter_map(|&gi| self.astar_nodes.get_index(gi))
            .map(|(node, _)| node.clone())
            .collect();
        Some(OptimalPaths { cost, goals, nodes })
    }

    /// Core A* loop. Returns the indices of the goal states reached at the
    /// optimal cost, and that cost.
    fn astar_run<P>(
        &mut self,
        pather: &P,
        start: N,
        mut goal: impl FnMut(&N) -> bool,
        all: bool,
    ) -> Option<(Vec<usize>, Cost)>
    where
        P: AstarPather<Node = N>,
    {
        self.astar_nodes.clear();
        self.frontier.clear();
        self.expanded = 0;

        let h = pather.estimate(&start);
        let (start_idx, _) = self
            .astar_nodes
            .insert_full(start, Node::new(0, NO_PARENT, all));
        self.frontier.push(start_idx, 0, h);

        let mut sbuf = std::mem::take(&mut self.sbuf);
        let mut best: Option<Cost> = None;
        let mut goals = Vec::new();

        while let Some(current) = self.frontier.pop() {
            if best.is_some_and(|b| current.f > b) {
                break;
            }
            let ci = current.idx;
            let Some((node, info)) = self.astar_nodes.get_index_mut(ci) else {
                continue;
            };
            // Skip stale entries.
            if info.closed || current.g > info.g {
                continue;
            }
            info.closed = true;
            let current_g = info.g;
            let current_node = node.clone();
            self.expanded += 1;

            if goal(&current_node) {
                log::trace!("astar: goal reached at cost {current_g}");
                best = Some(current_g);
                goals.push(ci);
                // Zero-cost edges can lead from one goal to another at the
                // same cost, so enumeration keeps expanding goals.
                if !all {
                    break;
                }
            }

            sbuf.clear();
            pather.successors(&current_node, &mut sbuf);

            for (next, edge) in sbuf.drain(..) {
                assert!(edge >= 0, "negative edge cost {edge}");
                let tentative_g = add_cost(current_g, edge);
                match self.astar_nodes.entry(next) {
                    Entry::Vacant(e) => {
                        let h = pather.estimate(e.key());
                        let ni = e.index();
                        e.insert(Node::new(tentative_g, ci, all));
                        self.frontier.push(ni, tentative_g, add_cost(tentative_g, h));
                    }
                    Entry::Occupied(mut e) => {
                        let ni = e.index();
                        if tentative_g < e.get().g {
                            let h = pather.estimate(e.key());
                            e.get_mut().improve(tentative_g, ci, all);
                            self.frontier.push(ni, tentative_g, add_cost(tentative_g, h));
                        } else if all && tentative_g == e.get().g {
                            let n = e.get_mut();
                            if !n.preds.contains(&ci) {
                                n.preds.push(ci);
                            }
                        }
                    }
                }
            }
        }

        self.sbuf = sbuf;
        log::debug!(
            "astar: expanded {} of {} states, cost {:?}",
            self.expanded,
            self.astar_nodes.len(),
            best
        );

        let cost = best?;
        Some((goals, cost))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GridPather;
    use crate::traits::WeightedPather;
    use gridkit_core::{BooleanMap, Point};
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    /// Open grid without obstacles.
    fn open(n: i32) -> BooleanMap {
        BooleanMap::new(n, n)
    }

    #[test]
    fn open_grid_costs_manhattan() {
        let g = open(12);
        let mut search = Search::new();
        for n in [0, 1, 5, 11] {
            let to = Point::new(n, n);
            let pather = GridPather::new(&g, |wall| !wall).with_target(to);
            let cost = search.astar_cost(&pather, Point::ZERO, |&p| p == to);
            assert_eq!(cost, 2 * n as Cost);

            let zero = GridPather::new(&g, |wall| !wall);
            let cost = search.astar_cost(&zero, Point::ZERO, |&p| p == to);
            assert_eq!(cost, 2 * n as Cost);
        }
    }

    #[test]
    fn heuristic_expands_fewer_states() {
        let g = open(30);
        let to = Point::new(29, 0);
        let mut search = Search::new();

        let guided = GridPather::new(&g, |wall| !wall).with_target(to);
        search.astar_cost(&guided, Point::ZERO, |&p| p == to);
        let with_h = search.expanded();

        let blind = GridPather::new(&g, |wall| !wall);
        search.astar_cost(&blind, Point::ZERO, |&p| p == to);
        let without_h = search.expanded();

        assert!(with_h < without_h, "{with_h} >= {without_h}");
    }

    #[test]
    fn path_endpoints_and_length() {
        let g = BooleanMap::parse_bool(
            "\
.....
####.
.....
.####
.....",
            |c| c == '#',
        )
        .unwrap();
        let to = Point::new(4, 4);
        let pather = GridPather::new(&g, |wall| !wall).with_target(to);
        let mut search = Search::new();
        let path = search
            .astar_path(&pather, Point::ZERO, |&p| p == to)
            .unwrap();
        assert_eq!(path.cost, 16);
        assert_eq!(path.nodes.len(), 17);
        assert_eq!(path.nodes.first(), Some(&Point::ZERO));
        assert_eq!(path.nodes.last(), Some(&to));
        for w in path.nodes.windows(2) {
            assert_eq!(w[0].manhattan_distance(w[1]), 1);
            assert!(!g.get(w[1]));
        }
    }

    #[test]
    fn start_is_goal() {
        let g = open(3);
        let pather = GridPather::new(&g, |wall| !wall);
        let mut search = Search::new();
        let path = search
            .astar_path(&pather, Point::new(1, 1), |_| true)
            .unwrap();
        assert_eq!(path.cost, 0);
        assert_eq!(path.nodes, vec![Point::new(1, 1)]);
    }

    #[test]
    fn enclosed_goal_is_unreachable() {
        let g = BooleanMap::parse_bool(
            "\
.....
.###.
.#.#.
.###.
.....",
            |c| c == '#',
        )
        .unwrap();
        let to = Point::new(2, 2);
        let pather = GridPather::new(&g, |wall| !wall).with_target(to);
        let mut search = Search::new();
        assert_eq!(
            search.astar_cost(&pather, Point::ZERO, |&p| p == to),
            UNREACHABLE
        );
        assert!(search.astar_path(&pather, Point::ZERO, |&p| p == to).is_none());
        assert!(search.astar_all(&pather, Point::ZERO, |&p| p == to).is_none());
    }

    /// Two parallel corridors of equal length between `from` and `to`.
    #[test]
    fn all_optimal_paths_union() {
        let g = BooleanMap::parse_bool(
            "\
.....
.###.
.....",
            |c| c == '#',
        )
        .unwrap();
        let from = Point::new(0, 1);
        let to = Point::new(4, 1);
        let pather = GridPather::new(&g, |wall| !wall).with_target(to);
        let mut search = Search::new();
        let all = search.astar_all(&pather, from, |&p| p == to).unwrap();
        assert_eq!(all.cost, 6);
        assert_eq!(all.goals, vec![to]);
        // Both corridors (5 + 5) plus the two end cells in the middle row.
        assert_eq!(all.nodes.len(), 12);
        assert!(all.nodes.contains(&Point::new(2, 0)));
        assert!(all.nodes.contains(&Point::new(2, 2)));
    }

    struct Weighted;

    impl WeightedPather for Weighted {
        type Node = u32;

        fn successors(&self, node: &u32, buf: &mut Vec<(u32, Cost)>) {
            match node {
                0 => buf.extend([(1, 10), (2, 1)]),
                2 => buf.extend([(3, 1)]),
                3 => buf.extend([(1, 1)]),
                _ => {}
            }
        }
    }

    impl AstarPather for Weighted {}

    #[test]
    fn weighted_edges_prefer_cheaper_detour() {
        let mut search = Search::new();
        let path = search.astar_path(&Weighted, 0, |&n| n == 1).unwrap();
        assert_eq!(path.cost, 3);
        assert_eq!(path.nodes, vec![0, 2, 3, 1]);
    }

    struct Negative;

    impl WeightedPather for Negative {
        type Node = u8;

        fn successors(&self, _: &u8, buf: &mut Vec<(u8, Cost)>) {
            buf.push((1, -1));
        }
    }

    impl AstarPather for Negative {}

    #[test]
    #[should_panic(expected = "negative edge cost")]
    fn negative_costs_panic() {
        Search::new().astar_cost(&Negative, 0, |&n| n == 1);
    }

    /// `0 -1-> 1 -0-> 2`: both 1 and 2 are goals at cost 1.
    struct FreeStep;

    impl WeightedPather for FreeStep {
        type Node = u8;

        fn successors(&self, node: &u8, buf: &mut Vec<(u8, Cost)>) {
            match node {
                0 => buf.push((1, 1)),
                1 => buf.push((2, 0)),
                _ => {}
            }
        }
    }

    impl AstarPather for FreeStep {}

    #[test]
    fn all_optimal_paths_reach_goals_behind_goals() {
        let mut search = Search::new();
        let all = search.astar_all(&FreeStep, 0, |&n| n >= 1).unwrap();
        assert_eq!(all.cost, 1);
        assert_eq!(all.goals, vec![1, 2]);
        let mut nodes = all.nodes.clone();
        nodes.sort();
        assert_eq!(nodes, vec![0, 1, 2]);
        // A single path still stops at the first goal.
        let path = search.astar_path(&FreeStep, 0, |&n| n >= 1).unwrap();
        assert_eq!(path.nodes, vec![0, 1]);
    }

    /// Two edges whose sum does not fit in a `Cost`.
    struct Huge;

    impl WeightedPather for Huge {
        type Node = u8;

        fn successors(&self, node: &u8, buf: &mut Vec<(u8, Cost)>) {
            if *node < 2 {
                buf.push((node + 1, Cost::MAX / 2 + 1));
            }
        }
    }

    impl AstarPather for Huge {}

    #[test]
    #[should_panic(expected = "path cost overflow")]
    fn overflowing_costs_panic() {
        Search::new().astar_cost(&Huge, 0, |&n| n == 2);
    }

    /// Walk through an unbounded plane; the goal predicate bounds the search.
    struct Plane;

    impl WeightedPather for Plane {
        type Node = Point;

        fn successors(&self, p: &Point, buf: &mut Vec<(Point, Cost)>) {
            buf.extend(p.neighbors_4().map(|q| (q, 1)));
        }
    }

    impl AstarPather for Plane {
        fn estimate(&self, p: &Point) -> Cost {
            p.manhattan_distance(Point::new(40, -25)) as Cost
        }
    }

    #[test]
    fn unbounded_graph_with_heuristic() {
        let to = Point::new(40, -25);
        let mut search = Search::new();
        assert_eq!(search.astar_cost(&Plane, Point::ZERO, |&p| p == to), 65);
    }

    #[test]
    fn random_grids_match_bfs() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut search = Search::new();
        for _ in 0..40 {
            let mut g = BooleanMap::from_fn(20, 20, |_| rng.random_range(0..100) < 30);
            let from = Point::ZERO;
            let to = Point::new(19, 19);
            g.reset(from);
            g.reset(to);

            let guided = GridPather::new(&g, |wall| !wall).with_target(to);
            let blind = GridPather::new(&g, |wall| !wall);
            let a = search.astar_cost(&guided, from, |&p| p == to);
            let d = search.astar_cost(&blind, from, |&p| p == to);
            search.bfs_map(&blind, &[from], UNREACHABLE);
            let b = search.bfs_at(&to);
            assert_eq!(a, d);
            assert_eq!(a, b);
        }
    }
}
