//! Compass directions: 4-way [`Direction`] and 8-way [`Compass`].
//!
//! Both use screen coordinates: X grows right, Y grows down. Turning
//! [`right`](Direction::right) is clockwise *as drawn on screen*, so
//! `Up.right() == Right` and `Right.right() == Down`.

use std::fmt;

use crate::geom::Point;

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the four cardinal directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All four directions in clockwise order, starting with `Up`.
    pub const ALL: [Direction; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Unit vector for this direction.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Self::Up => Point::new(0, -1),
            Self::Right => Point::new(1, 0),
            Self::Down => Point::new(0, 1),
            Self::Left => Point::new(-1, 0),
        }
    }

    /// Rotate 90° counter-clockwise on screen.
    #[inline]
    pub const fn left(self) -> Self {
        match self {
            Self::Up => Self::Left,
            Self::Left => Self::Down,
            Self::Down => Self::Right,
            Self::Right => Self::Up,
        }
    }

    /// Rotate 90° clockwise on screen.
    #[inline]
    pub const fn right(self) -> Self {
        match self {
            Self::Up => Self::Right,
            Self::Right => Self::Down,
            Self::Down => Self::Left,
            Self::Left => Self::Up,
        }
    }

    /// The reverse direction.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }

    /// Whether this direction moves along the X axis.
    #[inline]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Parse the usual puzzle notations: arrows (`^ > v <`), initials
    /// (`U R D L`) and compass letters (`N E S W`), case-insensitive.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            '^' | 'U' | 'N' => Some(Self::Up),
            '>' | 'R' | 'E' => Some(Self::Right),
            'V' | 'D' | 'S' => Some(Self::Down),
            '<' | 'L' | 'W' => Some(Self::Left),
            _ => None,
        }
    }

    /// Arrow glyph for this direction.
    #[inline]
    pub const fn arrow(self) -> char {
        match self {
            Self::Up => '^',
            Self::Right => '>',
            Self::Down => 'v',
            Self::Left => '<',
        }
    }

    /// The direction pointing from `from` to an orthogonally adjacent `to`.
    pub fn between(from: Point, to: Point) -> Option<Self> {
        let d = to - from;
        Self::ALL.into_iter().find(|dir| dir.delta() == d)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.arrow())
    }
}

// ---------------------------------------------------------------------------
// Compass
// ---------------------------------------------------------------------------

/// One of the eight compass points. `North` is screen-up.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Compass {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Compass {
    /// All eight points in clockwise order, starting with `North`.
    pub const ALL: [Compass; 8] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }

    /// Unit vector (diagonals have both components set).
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Self::North => Point::new(0, -1),
            Self::NorthEast => Point::new(1, -1),
            Self::East => Point::new(1, 0),
            Self::SouthEast => Point::new(1, 1),
            Self::South => Point::new(0, 1),
            Self::SouthWest => Point::new(-1, 1),
            Self::West => Point::new(-1, 0),
            Self::NorthWest => Point::new(-1, -1),
        }
    }

    /// Rotate 45° counter-clockwise on screen.
    #[inline]
    pub const fn left(self) -> Self {
        Self::ALL[(self.index() + 7) % 8]
    }

    /// Rotate 45° clockwise on screen.
    #[inline]
    pub const fn right(self) -> Self {
        Self::ALL[(self.index() + 1) % 8]
    }

    /// The reverse direction.
    #[inline]
    pub const fn opposite(self) -> Self {
        Self::ALL[(self.index() + 4) % 8]
    }

    /// Whether this is one of the four diagonal points.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self.index() % 2 == 1
    }
}

impl From<Direction> for Compass {
    fn from(d: Direction) -> Self {
        match d {
            Direction::Up => Self::North,
            Direction::Right => Self::East,
            Direction::Down => Self::South,
            Direction::Left => Self::West,
        }
    }
}

impl TryFrom<Compass> for Direction {
    type Error = Compass;

    /// Fails with the compass point itself when it is diagonal.
    fn try_from(c: Compass) -> Result<Self, Compass> {
        match c {
            Compass::North => Ok(Self::Up),
            Compass::East => Ok(Self::Right),
            Compass::South => Ok(Self::Down),
            Compass::West => Ok(Self::Left),
            other => Err(other),
        }
    }
}
