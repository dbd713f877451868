//! Generic graph search for puzzle grids and state spaces.
//!
//! Every search runs over an arbitrary hashable state type, so the same
//! algorithms handle plain grid positions, `(position, facing)` pairs or
//! whole robot configurations:
//!
//! - **A\*** cheapest cost and path ([`Search::astar_cost`], [`Search::astar_path`])
//! - **All optimal paths** union of every cheapest path ([`Search::astar_all`])
//! - **Dijkstra** multi-source cost maps ([`Search::dijkstra_map`])
//! - **BFS** unweighted distance maps ([`Search::bfs_map`])
//! - **Connected components** partitions and flood fills
//!   ([`Search::components`], [`Search::region`])
//!
//! All algorithms operate through [`Search`], which owns and reuses internal
//! caches between queries. [`GridPather`] covers the common case of moving
//! around a [`Grid`](gridkit_core::Grid); closures work through [`FnPather`]
//! and the one-call helpers [`astar`], [`dijkstra`], [`components`] and
//! [`region`].
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS, connected components |
//! | [`WeightedPather`] | Dijkstra |
//! | [`AstarPather`] : [`WeightedPather`] | A* |

mod astar;
mod bfs;
mod cc;
mod dijkstra;
mod distance;
mod func;
mod gridpather;
mod neighbors;
mod search;
mod traits;

pub use cc::Components;
pub use distance::{chebyshev, manhattan};
pub use func::{FnPather, astar, components, dijkstra, region};
pub use gridpather::GridPather;
pub use neighbors::Neighbors;
pub use search::{OptimalPaths, Path, PathNode, Search, UNREACHABLE};
pub use traits::{AstarPather, Cost, Pather, WeightedPather};
