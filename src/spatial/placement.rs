//! A tromino orientation paired with the center it is placed at

use crate::spatial::position::Position;
use crate::spatial::tromino::Tromino;
use std::fmt;

/// Placement decision: which orientation goes at which center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Interior corner the tromino is anchored at
    pub center: Position,
    /// Orientation placed there
    pub tromino: Tromino,
}

impl Placement {
    /// Pair a center with an orientation
    pub const fn new(center: Position, tromino: Tromino) -> Self {
        Self { center, tromino }
    }

    /// The three unit squares this placement covers
    pub const fn squares(&self) -> [Position; 3] {
        self.tromino.squares(self.center)
    }
}

impl From<(Position, Tromino)> for Placement {
    fn from((center, tromino): (Position, Tromino)) -> Self {
        Self::new(center, tromino)
    }
}

impl From<Placement> for (Position, Tromino) {
    fn from(placement: Placement) -> Self {
        (placement.center, placement.tromino)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.center, self.tromino)
    }
}
