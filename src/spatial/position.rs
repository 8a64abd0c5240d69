//! Integer board coordinates with unit steps and rectangle containment

use std::fmt;
use std::ops::{Add, Sub};

/// An immutable `(x, y)` position on the plane
///
/// Positions may be negative; only `[0, n) x [0, n)` is on a board of side `n`.
/// The y axis grows upward, so [`Position::up`] increases `y`. A position names
/// the unit square whose bottom-left corner it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    /// Horizontal component
    pub x: i32,
    /// Vertical component
    pub y: i32,
}

impl Position {
    /// The board origin `(0, 0)`
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a position from its components
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position one unit above
    #[must_use]
    pub const fn up(self) -> Self {
        Self::new(self.x, self.y + 1)
    }

    /// The position one unit below
    #[must_use]
    pub const fn down(self) -> Self {
        Self::new(self.x, self.y - 1)
    }

    /// The position one unit to the left
    #[must_use]
    pub const fn left(self) -> Self {
        Self::new(self.x - 1, self.y)
    }

    /// The position one unit to the right
    #[must_use]
    pub const fn right(self) -> Self {
        Self::new(self.x + 1, self.y)
    }

    /// Test whether this position lies in the rectangle spanned by two corners
    ///
    /// The corners may be given in any order. The rectangle includes its low
    /// corner and excludes its high corner on both axes, so adjacent rectangles
    /// sharing an edge never both contain a square on that edge.
    ///
    /// ```
    /// use trominotile::spatial::Position;
    ///
    /// let p = Position::new(0, 0);
    /// assert!(p.between(Position::new(0, 0), Position::new(4, 4)));
    /// assert!(p.between(Position::new(4, 0), Position::new(0, 4)));
    /// assert!(!Position::new(4, 4).between(Position::new(0, 0), Position::new(4, 4)));
    /// ```
    pub fn between(self, a: Self, b: Self) -> bool {
        let low = Self::new(a.x.min(b.x), a.y.min(b.y));
        let high = Self::new(a.x.max(b.x), a.y.max(b.y));

        low.x <= self.x && self.x < high.x && low.y <= self.y && self.y < high.y
    }
}

impl Add for Position {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
