use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

use indexmap::IndexMap;

use crate::traits::Cost;

/// Sentinel cost meaning "unreachable": no path exists, or the state was
/// not reached by the last query.
pub const UNREACHABLE: Cost = Cost::MAX;

/// A state with an associated cost, returned from Dijkstra / BFS map queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode<N> {
    pub node: N,
    pub cost: Cost,
}

/// A path found by A*, from the start state to a goal state inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<N> {
    pub cost: Cost,
    pub nodes: Vec<N>,
}

/// Every state lying on at least one optimal path.
#[derive(Debug, Clone)]
pub struct OptimalPaths<N> {
    /// Cost shared by all optimal paths.
    pub cost: Cost,
    /// Goal states reached at the optimal cost.
    pub goals: Vec<N>,
    /// The union of all optimal paths, goals and start included. Each state
    /// appears once.
    pub nodes: Vec<N>,
}

// ---------------------------------------------------------------------------
// Internal node for A*/Dijkstra priority-queue searches
// ---------------------------------------------------------------------------

pub(crate) const NO_PARENT: usize = usize::MAX;

/// Sum two costs, panicking instead of wrapping past [`Cost::MAX`].
#[inline]
pub(crate) fn add_cost(a: Cost, b: Cost) -> Cost {
    let Some(sum) = a.checked_add(b) else {
        panic!("path cost overflow: {a} + {b}");
    };
    sum
}

#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) g: Cost,
    pub(crate) parent: usize,
    /// All predecessors reaching this node at cost `g`. Only filled when
    /// enumerating every optimal path.
    pub(crate) preds: Vec<usize>,
    pub(crate) closed: bool,
}

impl Node {
    pub(crate) fn new(g: Cost, parent: usize, track_preds: bool) -> Self {
        let preds = if track_preds && parent != NO_PARENT {
            vec![parent]
        } else {
            Vec::new()
        };
        Self {
            g,
            parent,
            preds,
            closed: false,
        }
    }

    /// Record a strictly better way to reach this node.
    pub(crate) fn improve(&mut self, g: Cost, parent: usize, track_preds: bool) {
        self.g = g;
        self.parent = parent;
        self.preds.clear();
        if track_preds {
            self.preds.push(parent);
        }
        self.closed = false;
    }
}

/// Reference into the node map, ordered by `f` then insertion sequence for
/// use in `BinaryHeap`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) g: Cost,
    pub(crate) f: Cost,
    seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, and the
        // earliest push among equal f.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority frontier with FIFO tie-breaking.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<NodeRef>,
    seq: u64,
}

impl Frontier {
    pub(crate) fn push(&mut self, idx: usize, g: Cost, f: Cost) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(NodeRef { idx, g, f, seq });
    }

    pub(crate) fn pop(&mut self) -> Option<NodeRef> {
        self.heap.pop()
    }

    pub(crate) fn clear(&mut self) {
        self.heap.clear();
        self.seq = 0;
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Central coordinator for searches over states of type `N`.
///
/// `Search` owns all internal caches (frontier, node maps, BFS distances,
/// scratch buffers) so that repeated queries reuse their allocations.
/// Results of the last map query stay available through
/// [`dijkstra_at`](Self::dijkstra_at) and [`bfs_at`](Self::bfs_at) until
/// the next query of the same kind.
pub struct Search<N> {
    // A* caches
    pub(crate) astar_nodes: IndexMap<N, Node>,
    // Dijkstra caches
    pub(crate) dijkstra_nodes: IndexMap<N, Node>,
    pub(crate) dijkstra_results: Vec<PathNode<N>>,
    // BFS caches
    pub(crate) bfs_map: HashMap<N, Cost>,
    pub(crate) bfs_results: Vec<PathNode<N>>,
    // shared by the priority-queue searches
    pub(crate) frontier: Frontier,
    pub(crate) expanded: usize,
    // scratch buffers for neighbor queries
    pub(crate) sbuf: Vec<(N, Cost)>,
    pub(crate) nbuf: Vec<N>,
}

impl<N: Clone + Eq + Hash> Search<N> {
    /// Create a search with empty caches.
    pub fn new() -> Self {
        Self {
            astar_nodes: IndexMap::new(),
            dijkstra_nodes: IndexMap::new(),
            dijkstra_results: Vec::new(),
            bfs_map: HashMap::new(),
            bfs_results: Vec::new(),
            frontier: Frontier::default(),
            expanded: 0,
            sbuf: Vec::new(),
            nbuf: Vec::new(),
        }
    }

    /// Number of states expanded by the last A* or Dijkstra query.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Drop every cached result and release the memory held by the caches.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl<N: Clone + Eq + Hash> Default for Search<N> {
    fn default() -> Self {
        Self::new()
    }
}
