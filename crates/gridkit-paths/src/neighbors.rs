use gridkit_core::{Compass, Direction, Point};

/// Reusable buffer for filtered neighbor enumeration.
///
/// Handy inside hand-written [`Pather`](crate::Pather) impls and simulation
/// steps that look at the cells around a point many times.
#[derive(Debug, Default)]
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Neighbors {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// The 4 cardinal neighbors of `p` in [`Direction::ALL`] order, keeping
    /// only those for which `keep` returns `true`.
    pub fn cardinal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        self.buf
            .extend(Direction::ALL.iter().map(|&d| p.step(d)).filter(|&q| keep(q)));
        &self.buf
    }

    /// The 8 surrounding neighbors of `p` in [`Compass::ALL`] order, keeping
    /// only those for which `keep` returns `true`.
    pub fn all(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        self.buf.extend(
            Compass::ALL
                .iter()
                .map(|&c| p.step_compass(c))
                .filter(|&q| keep(q)),
        );
        &self.buf
    }
}
