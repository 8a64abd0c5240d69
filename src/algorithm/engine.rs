//! Divide-and-conquer tiling of a deficient board
//!
//! Each square region with one unavailable square is split into four
//! quadrants. A single tromino at the region's middle covers the inner corner
//! of the three quadrants that have no unavailable square, so every quadrant
//! ends up with exactly one and the same argument applies to it. 2x2 regions
//! are finished by [`Board::tile_two_by_two`].

use crate::algorithm::board::Board;
use crate::io::error::{Result, invalid_region, invariant_violation};
use crate::spatial::{Placement, Position, Quadrant, Region, Tromino};

/// Tiling executor owning the board it fills
#[derive(Debug, Clone)]
pub struct TilingEngine {
    /// Board being tiled
    board: Board,
}

impl TilingEngine {
    /// Wrap a board for tiling
    pub const fn new(board: Board) -> Self {
        Self { board }
    }

    /// Validate a board size and deficient square and wrap the resulting board
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Board::new`]
    pub fn with_board(size: i64, deficient: Position) -> Result<Self> {
        Board::new(size, deficient).map(Self::new)
    }

    /// The board in its current state
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Release the board
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Tile the whole board
    ///
    /// A board of side 1 is its own deficient square and needs no tromino.
    ///
    /// # Errors
    ///
    /// Returns an error if a placement is rejected or a tiling invariant breaks,
    /// which only happens when the board already held inconsistent placements
    pub fn tile(&mut self) -> Result<()> {
        self.tile_with(|_| {})
    }

    /// Tile the whole board, reporting every placement as it is recorded
    ///
    /// # Errors
    ///
    /// Same conditions as [`TilingEngine::tile`]
    pub fn tile_with<F>(&mut self, mut on_place: F) -> Result<()>
    where
        F: FnMut(Placement),
    {
        let region = self.board.region();
        log::debug!(
            "tiling {0}x{0} board missing {1}",
            self.board.size(),
            self.board.deficient()
        );

        if self.board.size() > 1 {
            self.tile_region_with(region, &mut on_place)?;
        }

        log::debug!("placed {} trominoes", self.board.placement_count());
        Ok(())
    }

    /// Tile one square region that holds exactly one unavailable square
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The region is not a square of power-of-two side of at least 2
    /// - The region does not lie on the board
    /// - The region, or a region reached from it, has no unavailable square
    /// - A placement is rejected by the board
    pub fn tile_region(&mut self, region: Region) -> Result<()> {
        self.tile_region_with(region, &mut |_: Placement| {})
    }

    fn tile_region_with<F>(&mut self, region: Region, on_place: &mut F) -> Result<()>
    where
        F: FnMut(Placement),
    {
        match region.side() {
            Some(side) if side >= 2 && side & (side - 1) == 0 => {}
            _ => {
                return Err(invalid_region(
                    region,
                    &"region must be a square with a power-of-two side of at least 2",
                ));
            }
        }
        if !self.board.region().encloses(&region) {
            return Err(invalid_region(region, &"region lies outside the board"));
        }

        self.split(region, on_place)
    }

    fn split<F>(&mut self, region: Region, on_place: &mut F) -> Result<()>
    where
        F: FnMut(Placement),
    {
        if region.is_two_by_two() {
            let placement = self.board.tile_two_by_two(region)?;
            return self.record(placement, on_place);
        }

        let quadrant = self.deficient_quadrant(region)?;
        let placement = Placement::new(region.middle(), Tromino::facing(quadrant));
        self.record(placement, on_place)?;

        for (_, sub_region) in region.quadrants() {
            self.split(sub_region, on_place)?;
        }

        Ok(())
    }

    /// First quadrant, in [`Quadrant::ALL`] order, holding an unavailable square
    fn deficient_quadrant(&self, region: Region) -> Result<Quadrant> {
        region
            .quadrants()
            .into_iter()
            .find(|(_, sub_region)| self.board.has_deficient_square(*sub_region))
            .map(|(quadrant, _)| quadrant)
            .ok_or_else(|| {
                invariant_violation("tile_region", &format!("{region} has no deficient square"))
            })
    }

    fn record<F>(&mut self, placement: Placement, on_place: &mut F) -> Result<()>
    where
        F: FnMut(Placement),
    {
        self.board.place(placement)?;
        log::trace!("placed {placement}");
        on_place(placement);
        Ok(())
    }
}
