//! Web Mercator tile addressing

use std::{
    f64::consts::PI,
    fmt::{Display, Formatter},
};

use crate::{
    bounds::LatLngBounds,
    constants::{
        LONGITUDE_SPAN, MAX_MERCATOR_LATITUDE, MAX_WRAP_LONGITUDE, MAX_ZOOM,
        MIN_MERCATOR_LATITUDE,
    },
    error::GeometryError,
};

pub use self::cover::TileCover;
pub use self::region::TilePyramidRegion;

mod cover;
mod region;

/// Number of tile rows and columns at zoom level `z`
pub(crate) fn dimension(z: u8) -> u64 {
    1u64 << z
}

/// Longitude of the west edge of tile column `x`
fn tile_longitude(z: u8, x: u64) -> f64 {
    x as f64 / dimension(z) as f64 * LONGITUDE_SPAN - MAX_WRAP_LONGITUDE
}

/// Latitude of the north edge of tile row `y`
fn tile_latitude(z: u8, y: u64) -> f64 {
    let n = PI - 2.0 * PI * y as f64 / dimension(z) as f64;
    n.sinh()
        .atan()
        .to_degrees()
        .clamp(MIN_MERCATOR_LATITUDE, MAX_MERCATOR_LATITUDE)
}

/// A tile from the main tile pyramid with integer `z/x/y` coordinates.
/// Row 0 is the northernmost row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalTileId {
    z: u8,
    x: u32,
    y: u32,
}

impl CanonicalTileId {
    /// Creates a tile address. `z` must not exceed [`MAX_ZOOM`] and `x`
    /// and `y` must be less than `2^z`.
    pub fn new(z: u8, x: u32, y: u32) -> Result<Self, GeometryError> {
        if z > MAX_ZOOM || u64::from(x) >= dimension(z) || u64::from(y) >= dimension(z) {
            return Err(GeometryError::InvalidTile { z, x, y });
        }
        Ok(Self { z, x, y })
    }

    pub fn z(&self) -> u8 {
        self.z
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }

    /// The geographic bounds of this tile
    pub fn bounds(&self) -> LatLngBounds {
        let (x, y) = (u64::from(self.x), u64::from(self.y));
        LatLngBounds::new_unchecked(
            tile_latitude(self.z, y),
            tile_longitude(self.z, x + 1),
            tile_latitude(self.z, y + 1),
            tile_longitude(self.z, x),
        )
    }

    /// The tile one level up that contains this one
    pub fn parent(&self) -> Option<Self> {
        (self.z > 0).then(|| Self {
            z: self.z - 1,
            x: self.x >> 1,
            y: self.y >> 1,
        })
    }

    /// The four tiles one level down, or `None` at the maximum zoom level
    pub fn children(&self) -> Option<[Self; 4]> {
        if self.z >= MAX_ZOOM {
            return None;
        }
        let (z, x, y) = (self.z + 1, self.x * 2, self.y * 2);
        Some([
            Self { z, x, y },
            Self { z, x, y: y + 1 },
            Self { z, x: x + 1, y },
            Self {
                z,
                x: x + 1,
                y: y + 1,
            },
        ])
    }

    /// Returns the ancestor of this tile at zoom level `z` or, if `z` is
    /// greater than this tile's zoom level, its north west descendant
    pub fn scaled_to(&self, z: u8) -> Result<Self, GeometryError> {
        if z > MAX_ZOOM {
            return Err(GeometryError::InvalidTile {
                z,
                x: self.x,
                y: self.y,
            });
        }
        let (x, y) = (u64::from(self.x), u64::from(self.y));
        let (x, y) = if z <= self.z {
            let d = self.z - z;
            (x >> d, y >> d)
        } else {
            let d = z - self.z;
            (x << d, y << d)
        };
        // both fit into u32 because they are less than 2^z with z <= 32
        Ok(Self {
            z,
            x: x as u32,
            y: y as u32,
        })
    }

    /// True if `parent` is a proper ancestor of this tile
    pub fn is_child_of(&self, parent: &Self) -> bool {
        parent.z < self.z
            && self
                .scaled_to(parent.z)
                .is_ok_and(|ancestor| ancestor == *parent)
    }

    /// Iterates over all tiles at zoom level `z` that overlap `bounds`
    pub fn covering(bounds: &LatLngBounds, z: u8) -> Result<TileCover, GeometryError> {
        if z > MAX_ZOOM {
            return Err(GeometryError::InvalidZoomRange { min: z, max: z });
        }
        Ok(TileCover::new(bounds, z))
    }
}

impl Display for CanonicalTileId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.z, self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use assertor::{assert_that, BooleanAssertion, OptionAssertion};

    use crate::{constants::MAX_ZOOM, error::GeometryError};

    use super::CanonicalTileId;

    fn tile(z: u8, x: u32, y: u32) -> CanonicalTileId {
        CanonicalTileId::new(z, x, y).unwrap()
    }

    #[test]
    fn validates_coordinates() {
        assert!(CanonicalTileId::new(0, 0, 0).is_ok());
        assert!(CanonicalTileId::new(32, u32::MAX, u32::MAX).is_ok());
        assert_eq!(
            CanonicalTileId::new(2, 4, 0),
            Err(GeometryError::InvalidTile { z: 2, x: 4, y: 0 })
        );
        assert_eq!(
            CanonicalTileId::new(2, 0, 4),
            Err(GeometryError::InvalidTile { z: 2, x: 0, y: 4 })
        );
        assert_eq!(
            CanonicalTileId::new(33, 0, 0),
            Err(GeometryError::InvalidTile { z: 33, x: 0, y: 0 })
        );
    }

    #[test]
    fn parent_and_children() {
        let t = tile(3, 5, 2);
        assert_eq!(t.parent(), Some(tile(2, 2, 1)));
        assert_that!(tile(0, 0, 0).parent()).is_none();

        let children = t.children().unwrap();
        assert_eq!(
            children,
            [tile(4, 10, 4), tile(4, 10, 5), tile(4, 11, 4), tile(4, 11, 5)]
        );
        for child in children {
            assert_that!(child.is_child_of(&t)).is_true();
            assert_eq!(child.parent(), Some(t));
        }
        assert_that!(tile(MAX_ZOOM, 0, 0).children()).is_none();
    }

    #[test]
    fn is_child_of() {
        assert_that!(tile(5, 17, 9).is_child_of(&tile(1, 1, 0))).is_true();
        assert_that!(tile(5, 17, 9).is_child_of(&tile(1, 0, 0))).is_false();
        assert_that!(tile(1, 1, 0).is_child_of(&tile(1, 1, 0))).is_false();
        assert_that!(tile(1, 1, 0).is_child_of(&tile(5, 17, 9))).is_false();
    }

    #[test]
    fn scaled_to() {
        assert_eq!(tile(4, 11, 5).scaled_to(2), Ok(tile(2, 2, 1)));
        assert_eq!(tile(2, 2, 1).scaled_to(4), Ok(tile(4, 8, 4)));
        assert_eq!(tile(0, 0, 0).scaled_to(32), Ok(tile(32, 0, 0)));
        assert!(tile(0, 0, 0).scaled_to(33).is_err());
    }

    #[test]
    fn children_share_parent_bounds() {
        let t = tile(10, 288, 385);
        let bounds = t.bounds();
        for child in t.children().unwrap() {
            assert_that!(bounds.contains_bounds(&child.bounds())).is_true();
        }
    }

    #[test]
    fn display() {
        assert_eq!(tile(10, 288, 385).to_string(), "10/288/385");
    }
}
