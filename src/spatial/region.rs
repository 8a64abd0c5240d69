//! Axis-aligned board regions and their four-way split

use crate::spatial::position::Position;
use std::fmt;

/// One of the four equal squares a region splits into
///
/// Naming follows a board whose y axis grows upward: "top" is higher `y`,
/// "right" is higher `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Low `x`, high `y`
    TopLeft,
    /// High `x`, high `y`
    TopRight,
    /// Low `x`, low `y`
    BottomLeft,
    /// High `x`, low `y`
    BottomRight,
}

impl Quadrant {
    /// Every quadrant, in the order the engine probes them for a deficiency
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];
}

/// A rectangle of unit squares spanning `[start, end)` on both axes
///
/// The corners are normalized on construction so `start` is always the low
/// corner. During tiling every region is a square whose side is a power of two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    start: Position,
    end: Position,
}

impl Region {
    /// Create the region spanned by two opposite corners, given in any order
    pub fn new(a: Position, b: Position) -> Self {
        Self {
            start: Position::new(a.x.min(b.x), a.y.min(b.y)),
            end: Position::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// The square region of side `side` whose low corner is `start`
    pub const fn square(start: Position, side: i32) -> Self {
        Self {
            start,
            end: Position::new(start.x + side, start.y + side),
        }
    }

    /// Low corner (inclusive)
    pub const fn start(&self) -> Position {
        self.start
    }

    /// High corner (exclusive)
    pub const fn end(&self) -> Position {
        self.end
    }

    /// Extent along the x axis
    pub const fn width(&self) -> i32 {
        self.end.x - self.start.x
    }

    /// Extent along the y axis
    pub const fn height(&self) -> i32 {
        self.end.y - self.start.y
    }

    /// Side length when the region is square
    pub const fn side(&self) -> Option<i32> {
        if self.width() == self.height() {
            Some(self.width())
        } else {
            None
        }
    }

    /// Number of unit squares in the region
    pub const fn area(&self) -> i64 {
        self.width() as i64 * self.height() as i64
    }

    /// Test whether the region is exactly two squares on each side
    pub const fn is_two_by_two(&self) -> bool {
        self.width() == 2 && self.height() == 2
    }

    /// The interior corner shared by all four quadrants
    pub const fn middle(&self) -> Position {
        Position::new(
            (self.start.x + self.end.x) / 2,
            (self.start.y + self.end.y) / 2,
        )
    }

    /// The sub-region covering one quadrant
    pub const fn quadrant(&self, quadrant: Quadrant) -> Self {
        let middle = self.middle();
        let (start, end) = match quadrant {
            Quadrant::TopLeft => (
                Position::new(self.start.x, middle.y),
                Position::new(middle.x, self.end.y),
            ),
            Quadrant::TopRight => (middle, self.end),
            Quadrant::BottomLeft => (self.start, middle),
            Quadrant::BottomRight => (
                Position::new(middle.x, self.start.y),
                Position::new(self.end.x, middle.y),
            ),
        };
        Self { start, end }
    }

    /// All four quadrants, in [`Quadrant::ALL`] order
    pub const fn quadrants(&self) -> [(Quadrant, Self); 4] {
        [
            (Quadrant::TopLeft, self.quadrant(Quadrant::TopLeft)),
            (Quadrant::TopRight, self.quadrant(Quadrant::TopRight)),
            (Quadrant::BottomLeft, self.quadrant(Quadrant::BottomLeft)),
            (Quadrant::BottomRight, self.quadrant(Quadrant::BottomRight)),
        ]
    }

    /// Test whether a square lies inside the region
    pub fn contains(&self, position: Position) -> bool {
        position.between(self.start, self.end)
    }

    /// Test whether another region lies entirely inside this one
    pub const fn encloses(&self, other: &Self) -> bool {
        self.start.x <= other.start.x
            && self.start.y <= other.start.y
            && other.end.x <= self.end.x
            && other.end.y <= self.end.y
    }

    /// Every unit square in the region, row by row from the bottom
    pub fn squares(&self) -> impl Iterator<Item = Position> + use<> {
        let (start, end) = (self.start, self.end);
        (start.y..end.y).flat_map(move |y| (start.x..end.x).map(move |x| Position::new(x, y)))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
