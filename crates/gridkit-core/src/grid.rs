//! The [`Grid`] type: a mutable rectangular map from [`Point`] to a tile.
//!
//! Two instances cover nearly every text puzzle: [`CharMap`] stores each
//! input character verbatim and [`BooleanMap`] records which cells satisfy
//! a predicate (walls, rocks, galaxies...). Cells are stored densely in
//! row-major order, so [`entries`](Grid::entries) and
//! [`points`](Grid::points) always visit cells top-to-bottom, left-to-right.
//!
//! Reading or writing outside the grid's bounds through [`get`](Grid::get)
//! or [`set`](Grid::set) panics; use [`at`](Grid::at) for a checked read or
//! [`get_wrapping`](Grid::get_wrapping) for toroidal lookups.

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;
use crate::geom::{Point, Range, RangeIter};

// ---------------------------------------------------------------------------
// Tile
// ---------------------------------------------------------------------------

/// A cell value with a distinguished "empty" sentinel and a one-character
/// text form.
pub trait Tile: Copy + Eq {
    /// Value of unset cells.
    const EMPTY: Self;

    /// Character used when rendering the grid.
    fn to_char(self) -> char;
}

impl Tile for char {
    const EMPTY: char = ' ';

    #[inline]
    fn to_char(self) -> char {
        self
    }
}

impl Tile for bool {
    const EMPTY: bool = false;

    #[inline]
    fn to_char(self) -> char {
        if self { '#' } else { '.' }
    }
}

/// A grid of characters, stored verbatim.
pub type CharMap = Grid<char>;

/// A grid of occupied (`true`) / free (`false`) cells.
pub type BooleanMap = Grid<bool>;

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A dense 2D grid of tiles with bounds `[0, width) × [0, height)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridData<T>"))]
pub struct Grid<T> {
    cells: Vec<T>,
    width: i32,
    height: i32,
}

/// Unchecked serialized form of a [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridData<T> {
    cells: Vec<T>,
    width: i32,
    height: i32,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<GridData<T>> for Grid<T> {
    type Error = GridError;

    fn try_from(data: GridData<T>) -> Result<Self, GridError> {
        let GridData {
            cells,
            width,
            height,
        } = data;
        let fits = width >= 0
            && height >= 0
            && (width as usize).checked_mul(height as usize) == Some(cells.len());
        if !fits {
            return Err(GridError::Shape {
                width,
                height,
                cells: cells.len(),
            });
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }
}

impl<T: Tile> Grid<T> {
    /// Create a grid of the given dimensions filled with [`Tile::EMPTY`].
    pub fn new(width: i32, height: i32) -> Self {
        Self::filled(width, height, T::EMPTY)
    }

    /// Create a grid of the given dimensions filled with `value`.
    pub fn filled(width: i32, height: i32, value: T) -> Self {
        assert!(
            width >= 0 && height >= 0,
            "invalid grid size {width}x{height}"
        );
        Self {
            cells: vec![value; (width as usize) * (height as usize)],
            width,
            height,
        }
    }

    /// Create a grid by evaluating `f` at every point, in row-major order.
    pub fn from_fn(width: i32, height: i32, f: impl FnMut(Point) -> T) -> Self {
        assert!(
            width >= 0 && height >= 0,
            "invalid grid size {width}x{height}"
        );
        Self {
            cells: Range::new(0, 0, width, height).iter().map(f).collect(),
            width,
            height,
        }
    }

    /// Read a grid from a stream of lines, mapping each character with `f`.
    ///
    /// Blank lines before the first row are skipped. When
    /// `stop_on_blank_line` is set, the first blank line after a row ends
    /// the grid; that line is consumed, so `lines` is left positioned at
    /// the next record. Otherwise all remaining lines are read: trailing
    /// blank lines are ignored and a blank line between rows is a
    /// zero-width [`Ragged`](GridError::Ragged) row.
    pub fn read<I, S>(
        lines: &mut I,
        stop_on_blank_line: bool,
        mut f: impl FnMut(char) -> T,
    ) -> Result<Self, GridError>
    where
        I: Iterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells = Vec::new();
        let mut width: Option<usize> = None;
        let mut height = 0usize;
        let mut gap = false;

        for line in lines.by_ref() {
            let line = line.as_ref().trim_end_matches('\r');
            if line.is_empty() {
                if width.is_none() {
                    continue;
                }
                if stop_on_blank_line {
                    break;
                }
                gap = true;
                continue;
            }
            if let (true, Some(expected)) = (gap, width) {
                return Err(GridError::Ragged {
                    line: height,
                    expected,
                    found: 0,
                });
            }
            let before = cells.len();
            cells.extend(line.chars().map(&mut f));
            let found = cells.len() - before;
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(GridError::Ragged {
                        line: height,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let Some(width) = width else {
            return Err(GridError::Empty);
        };
        log::trace!("read {width}x{height} grid");
        Ok(Self {
            cells,
            width: width as i32,
            height: height as i32,
        })
    }

    /// Parse a whole text block, mapping each character with `f`.
    pub fn parse_with(text: &str, f: impl FnMut(char) -> T) -> Result<Self, GridError> {
        Self::read(&mut text.lines(), false, f)
    }

    // -----------------------------------------------------------------------
    // Bounds
    // -----------------------------------------------------------------------

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size as a `Point` (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// The declared bounds `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Smallest range containing every non-empty cell.
    pub fn occupied_bounds(&self) -> Range {
        Range::bounding(self.points())
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        assert!(
            self.contains(p),
            "point {p} outside grid bounds {}",
            self.bounds()
        );
        (p.y as usize) * (self.width as usize) + (p.x as usize)
    }

    // -----------------------------------------------------------------------
    // Cell access
    // -----------------------------------------------------------------------

    /// The cell at `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside the grid.
    #[inline]
    pub fn get(&self, p: Point) -> T {
        self.cells[self.index(p)]
    }

    /// The cell at `p`, or `None` outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<T> {
        if self.contains(p) {
            Some(self.cells[self.index(p)])
        } else {
            None
        }
    }

    /// The cell at `p` with both coordinates wrapped into the grid, as if
    /// the grid tiled the plane.
    #[inline]
    pub fn get_wrapping(&self, p: Point) -> T {
        self.get(p.wrap(self.width, self.height))
    }

    /// Replace the cell at `p`, returning the previous value.
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside the grid.
    #[inline]
    pub fn set(&mut self, p: Point, value: T) -> T {
        let i = self.index(p);
        std::mem::replace(&mut self.cells[i], value)
    }

    /// Restore the cell at `p` to [`Tile::EMPTY`], returning the previous
    /// value.
    #[inline]
    pub fn reset(&mut self, p: Point) -> T {
        self.set(p, T::EMPTY)
    }

    /// Fill every cell with `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }

    /// Row `y` as a slice.
    pub fn row(&self, y: i32) -> &[T] {
        assert!(
            (0..self.height).contains(&y),
            "row {y} outside grid of height {}",
            self.height
        );
        let w = self.width as usize;
        let start = (y as usize) * w;
        &self.cells[start..start + w]
    }

    /// Column `x`, top to bottom.
    pub fn column(&self, x: i32) -> impl Iterator<Item = T> + '_ {
        assert!(
            (0..self.width).contains(&x),
            "column {x} outside grid of width {}",
            self.width
        );
        (0..self.height).map(move |y| self.get(Point::new(x, y)))
    }

    /// Iterator over all rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    // -----------------------------------------------------------------------
    // Structural edits
    // -----------------------------------------------------------------------

    /// Insert a row filled with `value` before row `index`; rows at or after
    /// `index` move down by one. `index == height` appends.
    pub fn insert_row(&mut self, index: i32, value: T) {
        assert!(
            (0..=self.height).contains(&index),
            "cannot insert row at {index} in grid of height {}",
            self.height
        );
        let w = self.width as usize;
        let at = (index as usize) * w;
        let tail = self.cells.split_off(at);
        self.cells.extend(std::iter::repeat_n(value, w));
        self.cells.extend(tail);
        self.height += 1;
    }

    /// Insert a column filled with `value` before column `index`; columns at
    /// or after `index` move right by one. `index == width` appends.
    pub fn insert_column(&mut self, index: i32, value: T) {
        assert!(
            (0..=self.width).contains(&index),
            "cannot insert column at {index} in grid of width {}",
            self.width
        );
        let w = self.width as usize;
        let h = self.height as usize;
        let mut cells = Vec::with_capacity((w + 1) * h);
        for y in 0..h {
            let row = &self.cells[y * w..(y + 1) * w];
            cells.extend_from_slice(&row[..index as usize]);
            cells.push(value);
            cells.extend_from_slice(&row[index as usize..]);
        }
        self.cells = cells;
        self.width += 1;
    }

    /// Remove row `index`, returning its cells. Later rows move up.
    pub fn remove_row(&mut self, index: i32) -> Vec<T> {
        assert!(
            (0..self.height).contains(&index),
            "cannot remove row {index} from grid of height {}",
            self.height
        );
        let w = self.width as usize;
        let at = (index as usize) * w;
        let removed = self.cells.drain(at..at + w).collect();
        self.height -= 1;
        removed
    }

    /// Remove column `index`, returning its cells top to bottom. Later
    /// columns move left.
    pub fn remove_column(&mut self, index: i32) -> Vec<T> {
        assert!(
            (0..self.width).contains(&index),
            "cannot remove column {index} from grid of width {}",
            self.width
        );
        let w = self.width as usize;
        let x = index as usize;
        let mut removed = Vec::with_capacity(self.height as usize);
        let mut cells = Vec::with_capacity(self.cells.len() - self.height as usize);
        for (i, &v) in self.cells.iter().enumerate() {
            if i % w == x {
                removed.push(v);
            } else {
                cells.push(v);
            }
        }
        self.cells = cells;
        self.width -= 1;
        removed
    }

    // -----------------------------------------------------------------------
    // Whole-grid transforms
    // -----------------------------------------------------------------------

    /// Apply `f` to every cell, producing a grid of another tile type.
    pub fn map<U: Tile>(&self, mut f: impl FnMut(Point, T) -> U) -> Grid<U> {
        Grid {
            cells: self.entries().map(|(p, v)| f(p, v)).collect(),
            width: self.width,
            height: self.height,
        }
    }

    /// Swap rows and columns.
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.height, self.width, |p| self.get(Point::new(p.y, p.x)))
    }

    /// Rotate 90° clockwise as drawn on screen.
    pub fn rotate_clockwise(&self) -> Self {
        let h = self.height;
        Self::from_fn(self.height, self.width, |p| {
            self.get(Point::new(p.y, h - 1 - p.x))
        })
    }

    /// Rotate 90° counter-clockwise as drawn on screen.
    pub fn rotate_counter_clockwise(&self) -> Self {
        let w = self.width;
        Self::from_fn(self.height, self.width, |p| {
            self.get(Point::new(w - 1 - p.y, p.x))
        })
    }

    /// Mirror left to right.
    pub fn flip_horizontal(&self) -> Self {
        let w = self.width;
        Self::from_fn(self.width, self.height, |p| {
            self.get(Point::new(w - 1 - p.x, p.y))
        })
    }

    /// Mirror top to bottom.
    pub fn flip_vertical(&self) -> Self {
        let h = self.height;
        Self::from_fn(self.width, self.height, |p| {
            self.get(Point::new(p.x, h - 1 - p.y))
        })
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Row-major iterator over every `(Point, value)` pair.
    pub fn entries(&self) -> Entries<'_, T> {
        Entries {
            cells: self.cells.iter(),
            points: self.bounds().iter(),
        }
    }

    /// Row-major iterator over the points of non-empty cells.
    pub fn points(&self) -> Points<'_, T> {
        Points {
            inner: self.entries(),
        }
    }

    /// Number of cells equal to `value`.
    pub fn count(&self, value: T) -> usize {
        self.cells.iter().filter(|&&v| v == value).count()
    }

    /// First point (row-major) holding `value`.
    pub fn find(&self, value: T) -> Option<Point> {
        self.entries().find(|&(_, v)| v == value).map(|(p, _)| p)
    }

    /// The single point holding `value`, for start/goal style markers.
    pub fn find_unique(&self, value: T) -> Result<Point, GridError> {
        let mut found = self.entries().filter(|&(_, v)| v == value).map(|(p, _)| p);
        let first = found
            .next()
            .ok_or(GridError::MissingMarker(value.to_char()))?;
        match found.next() {
            Some(second) => Err(GridError::DuplicateMarker {
                marker: value.to_char(),
                first,
                second,
            }),
            None => Ok(first),
        }
    }
}

// ---------------------------------------------------------------------------
// CharMap / BooleanMap constructors
// ---------------------------------------------------------------------------

impl Grid<char> {
    /// Read a character grid, storing every character verbatim.
    pub fn read_chars<I, S>(lines: &mut I, stop_on_blank_line: bool) -> Result<Self, GridError>
    where
        I: Iterator<Item = S>,
        S: AsRef<str>,
    {
        Self::read(lines, stop_on_blank_line, |c| c)
    }
}

impl FromStr for Grid<char> {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, GridError> {
        Self::parse_with(s, |c| c)
    }
}

impl Grid<bool> {
    /// Read a boolean grid; a cell is occupied when `occupied(ch)` holds.
    pub fn read_bool<I, S>(
        lines: &mut I,
        stop_on_blank_line: bool,
        occupied: impl Fn(char) -> bool,
    ) -> Result<Self, GridError>
    where
        I: Iterator<Item = S>,
        S: AsRef<str>,
    {
        Self::read(lines, stop_on_blank_line, occupied)
    }

    /// Parse a whole text block into a boolean grid.
    pub fn parse_bool(text: &str, occupied: impl Fn(char) -> bool) -> Result<Self, GridError> {
        Self::parse_with(text, occupied)
    }

    /// One bit mask per row; bit `x` is set when `(x, y)` is occupied.
    ///
    /// # Panics
    ///
    /// Panics if the grid is wider than 64 cells.
    pub fn row_masks(&self) -> Vec<u64> {
        assert!(self.width <= 64, "row masks need width <= 64");
        self.rows()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|&(_, &b)| b)
                    .fold(0u64, |m, (x, _)| m | (1 << x))
            })
            .collect()
    }

    /// One bit mask per column; bit `y` is set when `(x, y)` is occupied.
    ///
    /// # Panics
    ///
    /// Panics if the grid is taller than 64 cells.
    pub fn column_masks(&self) -> Vec<u64> {
        assert!(self.height <= 64, "column masks need height <= 64");
        self.transpose().row_masks()
    }
}

impl<T: Tile> fmt::Display for Grid<T> {
    /// Renders one text line per row, without a trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for &v in row {
                write!(f, "{}", v.to_char())?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Iterators
// ---------------------------------------------------------------------------

/// Row-major iterator over `(Point, value)` pairs of a [`Grid`].
#[derive(Clone)]
pub struct Entries<'a, T> {
    cells: std::slice::Iter<'a, T>,
    points: RangeIter,
}

impl<T: Copy> Iterator for Entries<'_, T> {
    type Item = (Point, T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let v = *self.cells.next()?;
        let p = self.points.next()?;
        Some((p, v))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cells.size_hint()
    }
}

impl<T: Copy> ExactSizeIterator for Entries<'_, T> {}

/// Row-major iterator over the points of non-empty cells of a [`Grid`].
#[derive(Clone)]
pub struct Points<'a, T> {
    inner: Entries<'a, T>,
}

impl<T: Tile> Iterator for Points<'_, T> {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        self.inner
            .by_ref()
            .find(|&(_, v)| v != T::EMPTY)
            .map(|(p, _)| p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, T: Tile> IntoIterator for &'a Grid<T> {
    type Item = (Point, T);
    type IntoIter = Entries<'a, T>;

    fn into_iter(self) -> Entries<'a, T> {
        self.entries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
#####
#S..#
#.#E#
#####";

    #[test]
    fn parse_and_size() {
        let g: CharMap = ROOM.parse().unwrap();
        assert_eq!(g.size(), Point::new(5, 4));
        assert_eq!(g.get(Point::new(1, 1)), 'S');
        assert_eq!(g.at(Point::new(5, 0)), None);
    }

    #[test]
    fn display_round_trip() {
        let g: CharMap = ROOM.parse().unwrap();
        assert_eq!(g.to_string(), ROOM);
        let b = BooleanMap::parse_bool(ROOM, |c| c == '#').unwrap();
        let expected = ROOM.replace(['S', 'E'], ".");
        assert_eq!(b.to_string(), expected);
    }

    #[test]
    fn ragged_input_is_rejected() {
        let err = CharMap::from_str("abc\nab").unwrap_err();
        assert_eq!(
            err,
            GridError::Ragged {
                line: 1,
                expected: 3,
                found: 2
            }
        );
        assert_eq!(CharMap::from_str(""), Err(GridError::Empty));
    }

    #[test]
    fn read_stops_on_blank_line() {
        let text = "#.\n.#\n\n\n##\n##\n";
        let mut lines = text.lines();
        let a = BooleanMap::read_bool(&mut lines, true, |c| c == '#').unwrap();
        let b = BooleanMap::read_bool(&mut lines, true, |c| c == '#').unwrap();
        assert_eq!(a.to_string(), "#.\n.#");
        assert_eq!(b.count(true), 4);
        assert_eq!(lines.next(), None);
        assert_eq!(
            BooleanMap::read_bool(&mut lines, true, |c| c == '#'),
            Err(GridError::Empty)
        );
    }

    #[test]
    fn read_all_ignores_trailing_blanks() {
        let g = CharMap::read_chars(&mut "\nab\ncd\n\n\n".lines(), false).unwrap();
        assert_eq!(g.size(), Point::new(2, 2));
        assert_eq!(
            CharMap::read_chars(&mut "ab\n\ncd".lines(), false),
            Err(GridError::Ragged {
                line: 1,
                expected: 2,
                found: 0
            })
        );
    }

    #[test]
    fn read_strips_carriage_returns() {
        let mut lines = ["ab\r", "cd\r"].into_iter();
        let g = CharMap::read_chars(&mut lines, false).unwrap();
        assert_eq!(g.to_string(), "ab\ncd");
    }

    #[test]
    #[should_panic(expected = "outside grid bounds")]
    fn get_out_of_bounds_panics() {
        let g = CharMap::new(3, 3);
        g.get(Point::new(3, 0));
    }

    #[test]
    fn set_and_reset() {
        let mut g = CharMap::new(3, 2);
        assert_eq!(g.get(Point::new(2, 1)), ' ');
        assert_eq!(g.set(Point::new(2, 1), 'x'), ' ');
        assert_eq!(g.get(Point::new(2, 1)), 'x');
        assert_eq!(g.reset(Point::new(2, 1)), 'x');
        assert_eq!(g.get(Point::new(2, 1)), ' ');
    }

    #[test]
    fn wrapping_reads() {
        let g: CharMap = "ab\ncd".parse().unwrap();
        assert_eq!(g.get_wrapping(Point::new(-1, 0)), 'b');
        assert_eq!(g.get_wrapping(Point::new(2, -1)), 'c');
        assert_eq!(g.get_wrapping(Point::new(5, 7)), 'd');
    }

    #[test]
    fn points_are_row_major() {
        let g = BooleanMap::parse_bool(".#.\n#..\n..#", |c| c == '#').unwrap();
        let pts: Vec<_> = g.points().collect();
        assert_eq!(
            pts,
            vec![Point::new(1, 0), Point::new(0, 1), Point::new(2, 2)]
        );
        // Restartable: a second call yields the same sequence.
        assert_eq!(g.points().count(), 3);
        assert_eq!(g.entries().len(), 9);
        assert_eq!(g.occupied_bounds(), Range::new(0, 0, 3, 3));
    }

    #[test]
    fn insert_rows_and_columns() {
        let mut g: CharMap = "ab\ncd".parse().unwrap();
        g.insert_row(1, '.');
        assert_eq!(g.to_string(), "ab\n..\ncd");
        g.insert_column(0, '|');
        assert_eq!(g.to_string(), "|ab\n|..\n|cd");
        g.insert_column(3, '|');
        assert_eq!(g.to_string(), "|ab|\n|..|\n|cd|");
        g.insert_row(3, '-');
        assert_eq!(g.size(), Point::new(4, 4));
        assert_eq!(g.row(3), &['-'; 4]);
    }

    #[test]
    fn remove_rows_and_columns() {
        let mut g: CharMap = "abc\ndef\nghi".parse().unwrap();
        assert_eq!(g.remove_column(1), vec!['b', 'e', 'h']);
        assert_eq!(g.to_string(), "ac\ndf\ngi");
        assert_eq!(g.remove_row(0), vec!['a', 'c']);
        assert_eq!(g.to_string(), "df\ngi");
        assert_eq!(g.size(), Point::new(2, 2));
    }

    #[test]
    fn expansion_of_empty_rows_and_columns() {
        let mut g = BooleanMap::parse_bool("#..\n...\n..#", |c| c == '#').unwrap();
        let empty_rows: Vec<i32> = (0..g.height())
            .filter(|&y| g.row(y).iter().all(|&b| !b))
            .collect();
        let empty_cols: Vec<i32> = (0..g.width())
            .filter(|&x| g.column(x).all(|b| !b))
            .collect();
        for &y in empty_rows.iter().rev() {
            g.insert_row(y, false);
        }
        for &x in empty_cols.iter().rev() {
            g.insert_column(x, false);
        }
        let pts: Vec<_> = g.points().collect();
        assert_eq!(pts, vec![Point::new(0, 0), Point::new(3, 3)]);
    }

    #[test]
    fn rotations_and_flips() {
        let g: CharMap = "AB\nCD".parse().unwrap();
        assert_eq!(g.rotate_clockwise().to_string(), "CA\nDB");
        assert_eq!(g.rotate_counter_clockwise().to_string(), "BD\nAC");
        assert_eq!(g.transpose().to_string(), "AC\nBD");
        assert_eq!(g.flip_horizontal().to_string(), "BA\nDC");
        assert_eq!(g.flip_vertical().to_string(), "CD\nAB");

        let tall: CharMap = "abc\ndef".parse().unwrap();
        let r = tall.rotate_clockwise();
        assert_eq!(r.size(), Point::new(2, 3));
        assert_eq!(r.to_string(), "da\neb\nfc");
        let mut full = tall.clone();
        for _ in 0..4 {
            full = full.rotate_clockwise();
        }
        assert_eq!(full, tall);
    }

    #[test]
    fn find_markers() {
        let g: CharMap = ROOM.parse().unwrap();
        assert_eq!(g.find('E'), Some(Point::new(3, 2)));
        assert_eq!(g.find_unique('S'), Ok(Point::new(1, 1)));
        assert_eq!(g.find_unique('X'), Err(GridError::MissingMarker('X')));
        assert!(matches!(
            g.find_unique('#'),
            Err(GridError::DuplicateMarker { marker: '#', .. })
        ));
    }

    #[test]
    fn bit_masks() {
        let g = BooleanMap::parse_bool("#.#\n.##", |c| c == '#').unwrap();
        assert_eq!(g.row_masks(), vec![0b101, 0b110]);
        assert_eq!(g.column_masks(), vec![0b01, 0b10, 0b11]);
    }

    #[test]
    fn map_changes_tile_type() {
        let g: CharMap = ROOM.parse().unwrap();
        let walls = g.map(|_, c| c == '#');
        assert_eq!(walls.count(true), 15);
    }

    #[test]
    fn equal_grids_hash_equal() {
        use std::collections::HashSet;
        let a: CharMap = ROOM.parse().unwrap();
        let b: CharMap = ROOM.parse().unwrap();
        let mut seen = HashSet::new();
        seen.insert(a);
        assert!(seen.contains(&b));
    }
}
