//! Board size and deficient square validation

use crate::io::configuration::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::io::error::{Result, TilingError};
use crate::spatial::Position;

/// Test whether `n` is a power of two greater than zero
pub const fn is_positive_power_of_two(n: i64) -> bool {
    n > 0 && (n & (n - 1)) == 0
}

/// Test whether `position` lies on a board of side `size`
pub fn within_bounds(position: Position, size: i32) -> bool {
    position.between(Position::ORIGIN, Position::new(size, size))
}

/// Check a requested board side length and narrow it to board coordinates
///
/// # Errors
///
/// Returns [`TilingError::InvalidBoardSize`] if `size` is not a positive power
/// of two or lies outside `[MIN_BOARD_SIZE, MAX_BOARD_SIZE]`
pub fn validate_board_size(size: i64) -> Result<i32> {
    if !is_positive_power_of_two(size) {
        return Err(TilingError::InvalidBoardSize {
            size,
            reason: "board size must be a positive power of two".to_string(),
        });
    }

    if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        return Err(TilingError::InvalidBoardSize {
            size,
            reason: format!("board size must be between {MIN_BOARD_SIZE} and {MAX_BOARD_SIZE}"),
        });
    }

    i32::try_from(size).map_err(|error| TilingError::InvalidBoardSize {
        size,
        reason: error.to_string(),
    })
}

/// Check that the deficient square lies on a board of side `size`
///
/// # Errors
///
/// Returns [`TilingError::DeficientOutOfBounds`] if it does not
pub fn validate_deficient(position: Position, size: i32) -> Result<()> {
    if within_bounds(position, size) {
        Ok(())
    } else {
        Err(TilingError::DeficientOutOfBounds { position, size })
    }
}
