//! Error types for board construction, placement and tiling

use crate::spatial::{Position, Region, Tromino};
use std::fmt;
use std::path::PathBuf;

/// Main error type for all tiling operations
///
/// Every variant except [`TilingError::InvariantViolation`] describes bad
/// caller input and is reported before any board state changes.
#[derive(Debug)]
pub enum TilingError {
    /// Board side length is not a positive power of two within limits
    InvalidBoardSize {
        /// Requested side length
        size: i64,
        /// Explanation of why the size is rejected
        reason: String,
    },

    /// Deficient square lies outside `[0, size) x [0, size)`
    DeficientOutOfBounds {
        /// The requested deficient square
        position: Position,
        /// Board side length
        size: i32,
    },

    /// Region argument does not fit the operation
    InvalidRegion {
        /// The offending region
        region: Region,
        /// Explanation of why the region is rejected
        reason: String,
    },

    /// A tromino square would fall off the board
    PlacementOutOfBounds {
        /// Orientation being placed
        tromino: Tromino,
        /// Center it was placed at
        center: Position,
        /// First square outside the board
        square: Position,
    },

    /// A tromino square is the deficient square or is already covered
    Overlap {
        /// Orientation being placed
        tromino: Tromino,
        /// Center it was placed at
        center: Position,
        /// First conflicting square
        square: Position,
    },

    /// Internal tiling invariant broken
    ///
    /// Occurs when:
    /// - A region the recursion reaches has no deficient square
    /// - No orientation fits a 2x2 region
    /// - A finished board is not a perfect partition
    InvariantViolation {
        /// Operation that detected the violation
        operation: &'static str,
        /// Description of the violation
        reason: String,
    },

    /// Writing the placement listing failed
    Output {
        /// Destination of the listing
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl TilingError {
    /// Test whether this error signals a defect rather than bad input
    pub const fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::InvariantViolation { .. })
    }
}

impl fmt::Display for TilingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBoardSize { size, reason } => {
                write!(f, "Invalid board size {size}: {reason}")
            }
            Self::DeficientOutOfBounds { position, size } => {
                write!(
                    f,
                    "Missing square {position} must be within the {size}x{size} board"
                )
            }
            Self::InvalidRegion { region, reason } => {
                write!(f, "Invalid region {region}: {reason}")
            }
            Self::PlacementOutOfBounds {
                tromino,
                center,
                square,
            } => {
                write!(
                    f,
                    "{tromino} at {center} leaves the board at square {square}"
                )
            }
            Self::Overlap {
                tromino,
                center,
                square,
            } => {
                write!(f, "{tromino} at {center} overlaps covered square {square}")
            }
            Self::InvariantViolation { operation, reason } => {
                write!(f, "Tiling invariant violated in {operation}: {reason}")
            }
            Self::Output { path, source } => {
                write!(
                    f,
                    "Failed to write placements to '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for TilingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Output { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TilingError {
    fn from(err: std::io::Error) -> Self {
        Self::Output {
            path: PathBuf::from("<stdout>"),
            source: err,
        }
    }
}

/// Convenience type alias for tiling results
pub type Result<T> = std::result::Result<T, TilingError>;

/// Create an invalid region error
pub fn invalid_region(region: Region, reason: &impl ToString) -> TilingError {
    TilingError::InvalidRegion {
        region,
        reason: reason.to_string(),
    }
}

/// Create an invariant violation error
pub fn invariant_violation(operation: &'static str, reason: &impl ToString) -> TilingError {
    TilingError::InvariantViolation {
        operation,
        reason: reason.to_string(),
    }
}
