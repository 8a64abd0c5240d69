//! Deficient board state with validated tromino placement
//!
//! The board owns the single missing square, the side length and the map from
//! tromino centers to orientations. An occupancy index records which center
//! covers each square so overlap checks and deficiency lookups never scan the
//! whole placement map.
//!
//! Placement mutates the board in place. A board being tiled is exclusively
//! borrowed by the engine, so nothing else can observe it until tiling returns.

use crate::algorithm::validation::{validate_board_size, validate_deficient, within_bounds};
use crate::io::error::{Result, TilingError, invalid_region, invariant_violation};
use crate::spatial::{Placement, Position, Region, Tromino};
use ndarray::Array2;
use std::collections::BTreeMap;

/// A square board of power-of-two side with one deficient square
#[derive(Debug, Clone)]
pub struct Board {
    /// Externally imposed missing square, fixed for the board's lifetime
    deficient: Position,
    /// Side length
    size: i32,
    /// Orientation placed at each center
    placements: BTreeMap<Position, Tromino>,
    /// Center of the tromino covering each square (indexed by `y`, `x`)
    owners: Array2<Option<Position>>,
}

impl Board {
    /// Create an empty board of side `size` missing the square `deficient`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `size` is not a positive power of two within the supported range
    /// - `deficient` lies outside `[0, size) x [0, size)`
    pub fn new(size: i64, deficient: Position) -> Result<Self> {
        let size = validate_board_size(size)?;
        validate_deficient(deficient, size)?;

        let side = size as usize;
        Ok(Self {
            deficient,
            size,
            placements: BTreeMap::new(),
            owners: Array2::from_elem((side, side), None),
        })
    }

    /// Side length of the board
    pub const fn size(&self) -> i32 {
        self.size
    }

    /// The externally imposed missing square
    pub const fn deficient(&self) -> Position {
        self.deficient
    }

    /// The region covering the whole board
    pub const fn region(&self) -> Region {
        Region::square(Position::ORIGIN, self.size)
    }

    /// Map from tromino center to placed orientation
    pub const fn placements(&self) -> &BTreeMap<Position, Tromino> {
        &self.placements
    }

    /// Placed trominoes in center order
    pub fn iter(&self) -> impl Iterator<Item = Placement> + '_ {
        self.placements
            .iter()
            .map(|(&center, &tromino)| Placement::new(center, tromino))
    }

    /// Number of trominoes placed so far
    pub fn placement_count(&self) -> usize {
        self.placements.len()
    }

    /// Number of trominoes a complete tiling holds: `(size² - 1) / 3`
    pub const fn expected_placements(&self) -> usize {
        let side = self.size as usize;
        (side * side - 1) / 3
    }

    /// Orientation placed at `center`, if any
    pub fn tromino_at(&self, center: Position) -> Option<Tromino> {
        self.placements.get(&center).copied()
    }

    /// Center of the tromino covering `square`, if any
    pub fn occupant(&self, square: Position) -> Option<Position> {
        self.index(square)
            .and_then(|index| self.owners.get(index).copied().flatten())
    }

    /// Test whether `square` is the deficient square or covered by a tromino
    pub fn is_covered(&self, square: Position) -> bool {
        square == self.deficient || self.occupant(square).is_some()
    }

    /// Place `tromino` at `center`
    ///
    /// Validation happens before any mutation; a rejected placement leaves the
    /// board untouched. Every earlier placement survives a successful one.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A covered square falls off the board
    /// - A covered square is the deficient square or already covered
    pub fn add_placement(&mut self, tromino: Tromino, center: Position) -> Result<()> {
        let squares = tromino.squares(center);

        if let Some(&square) = squares.iter().find(|&&s| !within_bounds(s, self.size)) {
            log::debug!("rejected {tromino} at {center}: {square} is off the board");
            return Err(TilingError::PlacementOutOfBounds {
                tromino,
                center,
                square,
            });
        }

        if let Some(&square) = squares.iter().find(|&&s| self.is_covered(s)) {
            log::debug!("rejected {tromino} at {center}: {square} is already covered");
            return Err(TilingError::Overlap {
                tromino,
                center,
                square,
            });
        }

        for square in squares {
            if let Some(owner) = self.index(square).and_then(|index| self.owners.get_mut(index)) {
                *owner = Some(center);
            }
        }
        self.placements.insert(center, tromino);

        Ok(())
    }

    /// Record a placement pair
    ///
    /// # Errors
    ///
    /// Same conditions as [`Board::add_placement`]
    pub fn place(&mut self, placement: Placement) -> Result<()> {
        self.add_placement(placement.tromino, placement.center)
    }

    /// Find the square that is unavailable inside `region`
    ///
    /// Returns the board's deficient square when the region contains it.
    /// Otherwise returns the first covered square in the region, taking
    /// placements in center order and each placement's squares in
    /// [`Tromino::squares`] order. Returns `None` when the region is untouched.
    pub fn find_deficient_square(&self, region: Region) -> Option<Position> {
        if region.contains(self.deficient) {
            return Some(self.deficient);
        }

        region
            .squares()
            .filter_map(|square| {
                let center = self.occupant(square)?;
                let tromino = self.tromino_at(center)?;
                let slot = tromino.squares(center).iter().position(|&s| s == square)?;
                Some((center, slot, square))
            })
            .min()
            .map(|(_, _, square)| square)
    }

    /// Test whether `region` contains an unavailable square
    pub fn has_deficient_square(&self, region: Region) -> bool {
        self.find_deficient_square(region).is_some()
    }

    /// Choose the tromino that completes a 2x2 region
    ///
    /// The center is always the region's interior corner. The orientation is
    /// the first of [`Tromino::ALL`] that covers neither the region's deficient
    /// square nor any covered square. The board is not modified; the caller
    /// records the returned placement.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The region is not exactly 2x2 or does not lie on the board
    /// - The region has no deficient square (invariant violation)
    /// - No orientation fits (invariant violation)
    pub fn tile_two_by_two(&self, region: Region) -> Result<Placement> {
        if !region.is_two_by_two() {
            return Err(invalid_region(region, &"region is not 2x2"));
        }
        if !self.region().encloses(&region) {
            return Err(invalid_region(region, &"region lies outside the board"));
        }

        let deficient = self.find_deficient_square(region).ok_or_else(|| {
            invariant_violation("tile_two_by_two", &format!("{region} has no deficient square"))
        })?;

        let center = region.start() + Position::new(1, 1);
        let tromino = self.no_overlap(deficient, center).ok_or_else(|| {
            invariant_violation(
                "tile_two_by_two",
                &format!("no tromino at {center} avoids deficient square {deficient}"),
            )
        })?;

        Ok(Placement::new(center, tromino))
    }

    /// First orientation at `center` that avoids `deficient` and covered squares
    pub fn no_overlap(&self, deficient: Position, center: Position) -> Option<Tromino> {
        Tromino::ALL.into_iter().find(|tromino| {
            tromino
                .squares(center)
                .iter()
                .all(|&square| square != deficient && !self.is_covered(square))
        })
    }

    /// Count how often each square is covered (indexed by `y`, `x`)
    ///
    /// The deficient square counts as one cover. A complete tiling has a count
    /// of exactly one everywhere.
    pub fn coverage(&self) -> Array2<u8> {
        let side = self.size as usize;
        let mut counts = Array2::<u8>::zeros((side, side));

        let covered = self
            .iter()
            .flat_map(|placement| placement.squares())
            .chain(std::iter::once(self.deficient));
        for square in covered {
            if let Some(count) = self.index(square).and_then(|index| counts.get_mut(index)) {
                *count = count.saturating_add(1);
            }
        }

        counts
    }

    /// Check that the board is a perfect partition of its squares
    ///
    /// # Errors
    ///
    /// Returns an invariant violation naming the first square (bottom row
    /// first) that is left uncovered or covered more than once
    pub fn verify(&self) -> Result<()> {
        let coverage = self.coverage();

        if let Some(((y, x), count)) = coverage.indexed_iter().find(|(_, count)| **count != 1) {
            let square = Position::new(x as i32, y as i32);
            let reason = if *count == 0 {
                format!("square {square} is not covered")
            } else {
                format!("square {square} is covered {count} times")
            };
            return Err(invariant_violation("verify", &reason));
        }

        Ok(())
    }

    /// Test whether every square is covered exactly once
    pub fn is_complete(&self) -> bool {
        self.placement_count() == self.expected_placements() && self.verify().is_ok()
    }

    fn index(&self, square: Position) -> Option<(usize, usize)> {
        within_bounds(square, self.size).then(|| (square.y as usize, square.x as usize))
    }
}
