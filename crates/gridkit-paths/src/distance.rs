use gridkit_core::Point;

use crate::traits::Cost;

/// Manhattan (L1) distance as a path cost. Admissible for 4-way unit moves.
#[inline]
pub fn manhattan(a: Point, b: Point) -> Cost {
    Cost::from(a.manhattan_distance(b))
}

/// Chebyshev (L∞) distance as a path cost. Admissible for 8-way unit moves.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> Cost {
    Cost::from(a.chebyshev_distance(b))
}
