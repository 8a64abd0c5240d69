//! Divide-and-conquer tiling of deficient boards with L-shaped trominoes
//!
//! A board of side `2^k` with one square removed can always be covered by
//! `(4^k - 1) / 3` trominoes. The engine splits the board into quadrants,
//! places one tromino at the center so each quadrant is missing exactly one
//! square, and recurses down to 2x2 regions.

#![forbid(unsafe_code)]

/// Board state and the recursive tiling engine
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Positions, tromino shapes and board regions
pub mod spatial;

pub use algorithm::board::Board;
pub use algorithm::engine::TilingEngine;
pub use io::error::{Result, TilingError};
