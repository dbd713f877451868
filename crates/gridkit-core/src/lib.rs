//! **gridkit-core**: grids, points and directions for grid puzzles.
//!
//! This crate provides the spatial types shared across the *gridkit*
//! workspace: a 4-way [`Direction`] and 8-way [`Compass`], the [`Point`]
//! vector type with toroidal stepping, half-open [`Range`] rectangles, the
//! dense [`Grid`] (with the [`CharMap`] and [`BooleanMap`] aliases), and
//! [`cycle`] detection for simulations over hashable states.

pub mod cycle;
pub mod direction;
pub mod error;
pub mod geom;
pub mod grid;

pub use cycle::Cycle;
pub use direction::{Compass, Direction};
pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::{BooleanMap, CharMap, Grid, Tile};
