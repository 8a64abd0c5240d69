//! Board geometry: positions, tromino shapes and square regions
//!
//! This module contains the geometric primitives the tiling engine relies on:
//! - Integer board positions and half-open containment
//! - The four tromino orientations and the squares they cover
//! - Square regions and their quadrant split
//! - The (center, orientation) placement pair

/// Tromino placement pairs
pub mod placement;
/// Integer board coordinates
pub mod position;
/// Square board regions and quadrants
pub mod region;
/// Tromino orientations and their occupied squares
pub mod tromino;

pub use placement::Placement;
pub use position::Position;
pub use region::{Quadrant, Region};
pub use tromino::Tromino;
