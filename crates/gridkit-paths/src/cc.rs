//! Connected-component labelling.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

use indexmap::IndexSet;

use crate::Search;
use crate::traits::Pather;

/// A partition of a node set into connected regions.
///
/// Regions are numbered in the order their first member appeared in the
/// input; members within a region are listed in BFS order from that member.
#[derive(Clone, Debug)]
pub struct Components<N> {
    members: IndexSet<N>,
    labels: Vec<usize>,
    regions: Vec<Vec<N>>,
}

impl<N: Eq + Hash> Components<N> {
    /// Number of regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Region number of `node`, or `None` if it was not in the input set.
    pub fn label_of(&self, node: &N) -> Option<usize> {
        self.members.get_index_of(node).map(|i| self.labels[i])
    }

    /// The region containing `node`.
    pub fn region_of(&self, node: &N) -> Option<&[N]> {
        self.label_of(node).map(|l| self.regions[l].as_slice())
    }

    /// Whether two nodes belong to the same region.
    pub fn connected(&self, a: &N, b: &N) -> bool {
        match (self.label_of(a), self.label_of(b)) {
            (Some(la), Some(lb)) => la == lb,
            _ => false,
        }
    }

    pub fn regions(&self) -> &[Vec<N>] {
        &self.regions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec<N>> {
        self.regions.iter()
    }

    pub fn into_regions(self) -> Vec<Vec<N>> {
        self.regions
    }
}

impl<'a, N> IntoIterator for &'a Components<N> {
    type Item = &'a Vec<N>;
    type IntoIter = std::slice::Iter<'a, Vec<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}

impl<N: Clone + Eq + Hash> Search<N> {
    /// Partition `nodes` into connected regions.
    ///
    /// Two nodes are connected if a chain of neighbours (as defined by
    /// `pather`) links them without leaving the input set. Neighbours
    /// outside the set are ignored, so the pather does not need to know
    /// which nodes are part of the query. Duplicate input nodes are counted
    /// once.
    pub fn components<P, I>(&mut self, pather: &P, nodes: I) -> Components<N>
    where
        P: Pather<Node = N>,
        I: IntoIterator<Item = N>,
    {
        let members: IndexSet<N> = nodes.into_iter().collect();
        let mut labels = vec![usize::MAX; members.len()];
        let mut regions: Vec<Vec<N>> = Vec::new();
        let mut queue: VecDeque<usize> = VecDeque::new();
        let mut nbuf = std::mem::take(&mut self.nbuf);

        for start in 0..members.len() {
            if labels[start] != usize::MAX {
                continue;
            }
            let label = regions.len();
            let mut region = Vec::new();
            labels[start] = label;
            queue.push_back(start);

            while let Some(ci) = queue.pop_front() {
                let Some(current) = members.get_index(ci) else {
                    continue;
                };
                region.push(current.clone());
                nbuf.clear();
                pather.neighbors(current, &mut nbuf);
                for next in nbuf.iter() {
                    if let Some(ni) = members.get_index_of(next) {
                        if labels[ni] == usize::MAX {
                            labels[ni] = label;
                            queue.push_back(ni);
                        }
                    }
                }
            }
            regions.push(region);
        }

        self.nbuf = nbuf;
        log::debug!(
            "components: {} nodes in {} regions",
            members.len(),
            regions.len()
        );
        Components {
            members,
            labels,
            regions,
        }
    }

    /// Flood-fill from `seed` and return every node reachable from it,
    /// `seed` first.
    pub fn region<P: Pather<Node = N>>(&mut self, pather: &P, seed: N) -> Vec<N> {
        let mut seen: HashSet<N> = HashSet::new();
        let mut result = Vec::new();
        let mut queue: VecDeque<N> = VecDeque::new();
        let mut nbuf = std::mem::take(&mut self.nbuf);

        seen.insert(seed.clone());
        queue.push_back(seed);

        while let Some(current) = queue.pop_front() {
            nbuf.clear();
            pather.neighbors(&current, &mut nbuf);
            for next in nbuf.drain(..) {
                if seen.insert(next.clone()) {
                    queue.push_back(next);
                }
            }
            result.push(current);
        }

        self.nbuf = nbuf;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GridPather;
    use gridkit_core::{CharMap, Point};

    /// Plain 4-neighbourhood with no bounds.
    struct Plane;

    impl Pather for Plane {
        type Node = Point;

        fn neighbors(&self, p: &Point, buf: &mut Vec<Point>) {
            buf.extend(p.neighbors_4());
        }
    }

    #[test]
    fn two_squares() {
        let a = (0..3).flat_map(|y| (0..3).map(move |x| Point::new(x, y)));
        let b = (0..3).flat_map(|y| (0..3).map(move |x| Point::new(x + 10, y)));
        let cc = Search::new().components(&Plane, a.chain(b));
        assert_eq!(cc.len(), 2);
        assert!(cc.iter().all(|r| r.len() == 9));
        assert_eq!(cc.label_of(&Point::new(2, 2)), Some(0));
        assert_eq!(cc.label_of(&Point::new(10, 0)), Some(1));
        assert_eq!(cc.label_of(&Point::new(5, 0)), None);
        assert!(cc.connected(&Point::ZERO, &Point::new(2, 1)));
        assert!(!cc.connected(&Point::ZERO, &Point::new(11, 1)));
        assert_eq!(cc.region_of(&Point::new(12, 2)).map(<[_]>::len), Some(9));
    }

    #[test]
    fn empty_input() {
        let cc = Search::new().components(&Plane, Vec::new());
        assert!(cc.is_empty());
        assert!(cc.into_regions().is_empty());
    }

    #[test]
    fn plant_regions() {
        let g: CharMap = "\
AAAA
BBCD
BBCC
EEEC"
            .parse()
            .unwrap();
        let mut search = Search::new();
        let mut sizes: Vec<(char, usize)> = Vec::new();
        for plant in ['A', 'B', 'C', 'D', 'E'] {
            let pather = GridPather::new(&g, move |c| c == plant);
            let cells = g.entries().filter(|&(_, c)| c == plant).map(|(p, _)| p);
            let cc = search.components(&pather, cells);
            sizes.extend(cc.iter().map(|r| (plant, r.len())));
        }
        assert_eq!(sizes, vec![('A', 4), ('B', 4), ('C', 4), ('D', 1), ('E', 3)]);
    }

    #[test]
    fn region_flows_around_walls() {
        let g: CharMap = "\
..#..
..#..
.###.
....."
            .parse()
            .unwrap();
        let pather = GridPather::new(&g, |c| c == '.');
        let mut search = Search::new();
        let open = search.region(&pather, Point::new(3, 0));
        assert_eq!(open.len(), 15);
        assert_eq!(open[0], Point::new(3, 0));
        let mut dedup = open.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), open.len());
    }
}
