//! Errors raised while reading grids from text.

use std::fmt;

use crate::geom::Point;

/// Errors that can occur when parsing a grid or locating markers in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A line's width differs from the first line's width.
    Ragged {
        /// Zero-based line number within the grid block.
        line: usize,
        expected: usize,
        found: usize,
    },
    /// The input contained no lines before the end or a blank line.
    Empty,
    /// A required marker character does not occur in the grid.
    MissingMarker(char),
    /// A marker expected exactly once occurs more than once.
    DuplicateMarker {
        marker: char,
        first: Point,
        second: Point,
    },
    /// Stored cells do not fill the declared dimensions.
    Shape {
        width: i32,
        height: i32,
        cells: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ragged {
                line,
                expected,
                found,
            } => write!(
                f,
                "grid: line {line} has width {found}, expected {expected}"
            ),
            Self::Empty => write!(f, "grid: no lines to read"),
            Self::MissingMarker(ch) => write!(f, "grid: marker \u{201c}{ch}\u{201d} not found"),
            Self::DuplicateMarker {
                marker,
                first,
                second,
            } => write!(
                f,
                "grid: marker \u{201c}{marker}\u{201d} found at both {first} and {second}"
            ),
            Self::Shape {
                width,
                height,
                cells,
            } => write!(f, "grid: {cells} cells do not fill a {width}x{height} grid"),
        }
    }
}

impl std::error::Error for GridError {}
