use std::ops::RangeInclusive;

use crate::{bounds::LatLngBounds, constants::MAX_ZOOM, error::GeometryError};

use super::{CanonicalTileId, TileCover};

/// A geographic area together with a range of zoom levels, for example
/// the area of a map that should be available offline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePyramidRegion {
    bounds: LatLngBounds,
    min_zoom: u8,
    max_zoom: u8,
}

impl TilePyramidRegion {
    /// Creates a new region. The zoom range is inclusive and must satisfy
    /// `min_zoom <= max_zoom <= 32`.
    pub fn new(bounds: LatLngBounds, min_zoom: u8, max_zoom: u8) -> Result<Self, GeometryError> {
        if min_zoom > max_zoom || max_zoom > MAX_ZOOM {
            return Err(GeometryError::InvalidZoomRange {
                min: min_zoom,
                max: max_zoom,
            });
        }
        Ok(Self {
            bounds,
            min_zoom,
            max_zoom,
        })
    }

    pub fn bounds(&self) -> &LatLngBounds {
        &self.bounds
    }

    pub fn min_zoom(&self) -> u8 {
        self.min_zoom
    }

    pub fn max_zoom(&self) -> u8 {
        self.max_zoom
    }

    pub fn zoom_levels(&self) -> RangeInclusive<u8> {
        self.min_zoom..=self.max_zoom
    }

    fn covers(&self) -> impl Iterator<Item = TileCover> + '_ {
        self.zoom_levels().map(|z| TileCover::new(&self.bounds, z))
    }

    /// Iterates over the tiles of all zoom levels, lowest zoom level first
    pub fn tiles(&self) -> impl Iterator<Item = CanonicalTileId> + '_ {
        self.covers().flatten()
    }

    /// Total number of tiles in this region
    pub fn tile_count(&self) -> u128 {
        self.covers().map(|cover| cover.remaining()).sum()
    }
}

#[cfg(test)]
mod tests {
    use assertor::{assert_that, EqualityAssertion, ResultAssertion};
    use pretty_assertions::assert_eq;

    use crate::{bounds::LatLngBounds, error::GeometryError, tile::CanonicalTileId};

    use super::TilePyramidRegion;

    #[test]
    fn validates_zoom_range() {
        let world = LatLngBounds::world();
        assert_that!(TilePyramidRegion::new(world, 0, 32)).is_ok();
        assert_that!(TilePyramidRegion::new(world, 5, 5)).is_ok();
        assert_eq!(
            TilePyramidRegion::new(world, 6, 5),
            Err(GeometryError::InvalidZoomRange { min: 6, max: 5 })
        );
        assert_eq!(
            TilePyramidRegion::new(world, 0, 33),
            Err(GeometryError::InvalidZoomRange { min: 0, max: 33 })
        );
    }

    #[test]
    fn world_pyramid() {
        let region = TilePyramidRegion::new(LatLngBounds::world(), 0, 2).unwrap();
        assert_that!(region.tile_count()).is_equal_to(21);
        let tiles = region.tiles().collect::<Vec<_>>();
        assert_eq!(tiles.len(), 21);
        assert_eq!(tiles[0], CanonicalTileId::new(0, 0, 0).unwrap());
        assert_eq!(tiles[20], CanonicalTileId::new(2, 3, 3).unwrap());
    }

    #[test]
    fn deeper_tiles_are_children() {
        let bounds = LatLngBounds::from_tile(10, 288, 385).unwrap();
        let region = TilePyramidRegion::new(bounds, 10, 12).unwrap();
        let root = CanonicalTileId::new(10, 288, 385).unwrap();
        for tile in region.tiles().filter(|t| t.z() > 10) {
            // neighbouring tiles only share an edge with the root
            if root.bounds().contains_bounds(&tile.bounds()) {
                assert!(tile.is_child_of(&root));
            }
        }
        assert!(region.tiles().any(|t| t == root));
    }
}
