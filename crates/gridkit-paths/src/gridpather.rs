use gridkit_core::{Direction, Grid, Point, Tile};

use crate::traits::{AstarPather, Cost, Pather, WeightedPather};

/// Ready-made pather over the cells of a [`Grid`].
///
/// Moves one cell in any of the four [`Direction`]s at cost 1, onto cells
/// for which `passable` returns `true`. With a target set, the A* estimate
/// is the Manhattan distance to it.
///
/// In [`wrapping`](Self::wrapping) mode the grid tiles the whole plane:
/// nodes are unbounded points and passability is read through
/// [`Grid::get_wrapping`].
///
/// ```
/// use gridkit_core::{CharMap, Point};
/// use gridkit_paths::{GridPather, Search};
///
/// let map: CharMap = "..#\n...\n#..".parse().unwrap();
/// let pather = GridPather::new(&map, |c| c == '.').with_target(Point::new(2, 2));
/// let path = Search::new().astar_path(&pather, Point::ZERO, |&p| p == Point::new(2, 2));
/// assert_eq!(path.map(|p| p.cost), Some(4));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct GridPather<'a, T, F> {
    grid: &'a Grid<T>,
    passable: F,
    target: Option<Point>,
    wrapping: bool,
}

impl<'a, T: Tile, F: Fn(T) -> bool> GridPather<'a, T, F> {
    pub fn new(grid: &'a Grid<T>, passable: F) -> Self {
        Self {
            grid,
            passable,
            target: None,
            wrapping: false,
        }
    }

    /// Use the Manhattan distance to `target` as the A* estimate.
    pub fn with_target(mut self, target: Point) -> Self {
        self.target = Some(target);
        self
    }

    /// Treat the grid as an infinite tiling of the plane.
    pub fn wrapping(mut self) -> Self {
        self.wrapping = true;
        self
    }

    /// Whether `p` can be entered.
    pub fn is_passable(&self, p: Point) -> bool {
        if self.wrapping {
            (self.passable)(self.grid.get_wrapping(p))
        } else {
            self.grid.at(p).is_some_and(&self.passable)
        }
    }
}

impl<T: Tile, F: Fn(T) -> bool> Pather for GridPather<'_, T, F> {
    type Node = Point;

    fn neighbors(&self, p: &Point, buf: &mut Vec<Point>) {
        for d in Direction::ALL {
            let q = p.step(d);
            if self.is_passable(q) {
                buf.push(q);
            }
        }
    }
}

impl<T: Tile, F: Fn(T) -> bool> WeightedPather for GridPather<'_, T, F> {
    type Node = Point;

    fn successors(&self, p: &Point, buf: &mut Vec<(Point, Cost)>) {
        for d in Direction::ALL {
            let q = p.step(d);
            if self.is_passable(q) {
                buf.push((q, 1));
            }
        }
    }
}

impl<T: Tile, F: Fn(T) -> bool> AstarPather for GridPather<'_, T, F> {
    fn estimate(&self, p: &Point) -> Cost {
        self.target.map_or(0, |t| Cost::from(p.manhattan_distance(t)))
    }
}
