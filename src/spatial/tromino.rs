//! The four L-shaped tromino orientations
//!
//! A tromino is anchored at a center: the interior corner shared by the four
//! unit squares around it. Each orientation covers three of those squares and
//! leaves the fourth, the one diagonally opposite its corner, uncovered.
//!
//! ```text
//!   UpperRight     UpperLeft      LowerRight     LowerLeft
//!   [a][b]         [a][c]            [a]         [a]
//!      [c]         [b]            [c][b]         [b][c]
//! ```
//!
//! The letters give the fixed order in which [`Tromino::squares`] lists them.

use crate::spatial::position::Position;
use crate::spatial::region::Quadrant;
use std::fmt;

/// Tromino orientation, named after the corner its elbow points to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tromino {
    /// Covers the upper-left, upper-right and lower-right squares
    UpperRight,
    /// Covers the upper-left, lower-left and upper-right squares
    UpperLeft,
    /// Covers the upper-right, lower-right and lower-left squares
    LowerRight,
    /// Covers the upper-left, lower-left and lower-right squares
    LowerLeft,
}

impl Tromino {
    /// Every orientation, in the order placement searches try them
    pub const ALL: [Self; 4] = [
        Self::UpperRight,
        Self::UpperLeft,
        Self::LowerRight,
        Self::LowerLeft,
    ];

    /// The three unit squares covered when centered at `center`
    pub const fn squares(self, center: Position) -> [Position; 3] {
        let (cx, cy) = (center.x, center.y);
        match self {
            Self::UpperRight => [
                Position::new(cx - 1, cy),
                Position::new(cx, cy),
                Position::new(cx, cy - 1),
            ],
            Self::UpperLeft => [
                Position::new(cx - 1, cy),
                Position::new(cx - 1, cy - 1),
                Position::new(cx, cy),
            ],
            Self::LowerRight => [
                Position::new(cx, cy),
                Position::new(cx, cy - 1),
                Position::new(cx - 1, cy - 1),
            ],
            Self::LowerLeft => [
                Position::new(cx - 1, cy),
                Position::new(cx - 1, cy - 1),
                Position::new(cx, cy - 1),
            ],
        }
    }

    /// The square around `center` this orientation leaves uncovered
    pub const fn uncovered(self, center: Position) -> Position {
        let (cx, cy) = (center.x, center.y);
        match self {
            Self::UpperRight => Position::new(cx - 1, cy - 1),
            Self::UpperLeft => Position::new(cx, cy - 1),
            Self::LowerRight => Position::new(cx - 1, cy),
            Self::LowerLeft => Position::new(cx, cy),
        }
    }

    /// The orientation whose uncovered square lies in `quadrant`
    ///
    /// Placed at the middle of a region, it covers the inner corner square of
    /// every other quadrant.
    pub const fn facing(quadrant: Quadrant) -> Self {
        match quadrant {
            Quadrant::TopLeft => Self::LowerRight,
            Quadrant::TopRight => Self::LowerLeft,
            Quadrant::BottomLeft => Self::UpperRight,
            Quadrant::BottomRight => Self::UpperLeft,
        }
    }

    /// Test whether this orientation covers `square` when centered at `center`
    pub fn covers(self, center: Position, square: Position) -> bool {
        self.squares(center).contains(&square)
    }
}

impl fmt::Display for Tromino {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::UpperRight => "UpperRight",
            Self::UpperLeft => "UpperLeft",
            Self::LowerRight => "LowerRight",
            Self::LowerLeft => "LowerLeft",
        };
        f.write_str(name)
    }
}
