//! Latitude/longitude aligned rectangles that may cross the antimeridian.
//!
//! Longitudes of a [`LatLngBounds`] are stored unwrapped: `lon_east` is
//! never less than `lon_west` and either may lie outside `[-180, 180]`. A
//! box spanning 20 degrees across the antimeridian is expressed as
//! `lon_west = 170, lon_east = 190` (or `-190` and `-170`).
//!
//! ```rust
//! use geobounds_core::{Builder, LatLng, LatLngBounds, LatLngSpan};
//!
//! let bounds = LatLngBounds::new(10.0, 190.0, -10.0, 170.0).unwrap();
//! assert_eq!(bounds.span(), LatLngSpan::new(20.0, 20.0));
//! assert!(bounds.contains(&LatLng::new(0.0, -175.0).unwrap()));
//!
//! let bounds = Builder::new()
//!     .include(LatLng::new(0.0, 0.0).unwrap())
//!     .include(LatLng::new(2.0, 2.0).unwrap())
//!     .build()
//!     .unwrap();
//! assert_eq!(bounds.to_string(), "N:2.0; E:2.0; S:0.0; W:0.0");
//! ```

use std::fmt::{Display, Formatter};

use geo::{coord, Rect};

use crate::{
    constants::{MAX_LATITUDE, MAX_WRAP_LONGITUDE, MIN_LATITUDE, MIN_WRAP_LONGITUDE},
    error::GeometryError,
    lat_lng::LatLng,
    tile::CanonicalTileId,
    util::wrap::wrap_longitude,
};

pub use self::builder::Builder;

mod builder;
mod longitude;

/// The latitude and longitude extent of a [`LatLngBounds`] in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLngSpan {
    pub latitude_span: f64,
    pub longitude_span: f64,
}

impl LatLngSpan {
    pub fn new(latitude_span: f64, longitude_span: f64) -> Self {
        Self {
            latitude_span,
            longitude_span,
        }
    }
}

/// A geographical area represented by a latitude/longitude aligned
/// rectangle. Values are not wrapped to the world bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLngBounds {
    lat_north: f64,
    lon_east: f64,
    lat_south: f64,
    lon_west: f64,
}

/// Validates four bounds scalars given in NESW order
fn check_params(
    lat_north: f64,
    lon_east: f64,
    lat_south: f64,
    lon_west: f64,
) -> Result<(), GeometryError> {
    if lat_north.is_nan() || lat_south.is_nan() {
        return Err(GeometryError::LatitudeNaN);
    }
    if lon_east.is_nan() || lon_west.is_nan() {
        return Err(GeometryError::LongitudeNaN);
    }
    if lon_east.is_infinite() || lon_west.is_infinite() {
        return Err(GeometryError::LongitudeInfinite);
    }
    let in_range = |lat: f64| (MIN_LATITUDE..=MAX_LATITUDE).contains(&lat);
    if !in_range(lat_north) || !in_range(lat_south) {
        return Err(GeometryError::LatitudeOutOfRange);
    }
    if lat_north < lat_south {
        return Err(GeometryError::LatitudeInverted);
    }
    if lon_east < lon_west {
        return Err(GeometryError::LongitudeInverted);
    }
    Ok(())
}

impl LatLngBounds {
    /// Constructs bounds from their corners given in NESW order.
    ///
    /// `lon_east` must not be less than `lon_west`. To represent bounds
    /// crossing the antimeridian pass an unwrapped longitude, e.g.
    /// `lon_west = 170` and `lon_east = 190`.
    pub fn new(
        lat_north: f64,
        lon_east: f64,
        lat_south: f64,
        lon_west: f64,
    ) -> Result<Self, GeometryError> {
        check_params(lat_north, lon_east, lat_south, lon_west)?;
        Ok(Self {
            lat_north,
            lon_east,
            lat_south,
            lon_west,
        })
    }

    /// Constructs the bounds of a Web Mercator tile. Latitudes are within
    /// the Mercator range.
    pub fn from_tile(z: u8, x: u32, y: u32) -> Result<Self, GeometryError> {
        Ok(CanonicalTileId::new(z, x, y)?.bounds())
    }

    /// Bounds covering the whole world
    pub fn world() -> Self {
        Self {
            lat_north: MAX_LATITUDE,
            lon_east: MAX_WRAP_LONGITUDE,
            lat_south: MIN_LATITUDE,
            lon_west: MIN_WRAP_LONGITUDE,
        }
    }

    /// Degenerate bounds around a single location
    pub(crate) fn from_point(point: &LatLng) -> Self {
        Self {
            lat_north: point.latitude(),
            lon_east: point.longitude(),
            lat_south: point.latitude(),
            lon_west: point.longitude(),
        }
    }

    /// Creates bounds from values that are already known to be valid
    pub(crate) fn new_unchecked(
        lat_north: f64,
        lon_east: f64,
        lat_south: f64,
        lon_west: f64,
    ) -> Self {
        debug_assert!(check_params(lat_north, lon_east, lat_south, lon_west).is_ok());
        Self {
            lat_north,
            lon_east,
            lat_south,
            lon_west,
        }
    }

    pub fn lat_north(&self) -> f64 {
        self.lat_north
    }

    pub fn lon_east(&self) -> f64 {
        self.lon_east
    }

    pub fn lat_south(&self) -> f64 {
        self.lat_south
    }

    pub fn lon_west(&self) -> f64 {
        self.lon_west
    }

    fn longitudes(&self) -> (f64, f64) {
        (self.lon_west, self.lon_east)
    }

    /// Distance in degrees between the north and south boundaries
    pub fn latitude_span(&self) -> f64 {
        self.lat_north - self.lat_south
    }

    /// Distance in degrees between the west and east boundaries
    pub fn longitude_span(&self) -> f64 {
        self.lon_east - self.lon_west
    }

    pub fn span(&self) -> LatLngSpan {
        LatLngSpan::new(self.latitude_span(), self.longitude_span())
    }

    /// True if both spans are zero
    pub fn is_empty_span(&self) -> bool {
        self.latitude_span() == 0.0 && self.longitude_span() == 0.0
    }

    /// The midpoint of both spans. This is a simple interpolation and not
    /// the geodesic center. The longitude is averaged over the stored
    /// values and therefore lies in the same frame as the bounds; use
    /// [`LatLng::wrap`] to bring it into `[-180, 180]`.
    pub fn center(&self) -> LatLng {
        LatLng::new_unchecked(
            self.lat_north / 2.0 + self.lat_south / 2.0,
            self.lon_east / 2.0 + self.lon_west / 2.0,
        )
    }

    pub fn north_west(&self) -> LatLng {
        LatLng::new_unchecked(self.lat_north, self.lon_west)
    }

    pub fn north_east(&self) -> LatLng {
        LatLng::new_unchecked(self.lat_north, self.lon_east)
    }

    pub fn south_west(&self) -> LatLng {
        LatLng::new_unchecked(self.lat_south, self.lon_west)
    }

    pub fn south_east(&self) -> LatLng {
        LatLng::new_unchecked(self.lat_south, self.lon_east)
    }

    /// The north east and south west corners
    pub fn to_lat_lngs(&self) -> [LatLng; 2] {
        [self.north_east(), self.south_west()]
    }

    /// True if the west boundary lies east of the east boundary once both
    /// are wrapped into `[-180, 180]`
    pub fn crosses_antimeridian(&self) -> bool {
        wrap_longitude(self.lon_west) > wrap_longitude(self.lon_east)
    }

    fn contains_latitude(&self, latitude: f64) -> bool {
        latitude <= self.lat_north && latitude >= self.lat_south
    }

    /// Tests if a location lies within these bounds. The location's
    /// longitude is compared in every frame, so `185` and `-175` are both
    /// inside bounds stored as `170..190`.
    pub fn contains(&self, point: &LatLng) -> bool {
        self.contains_latitude(point.latitude())
            && longitude::contains(self.longitudes(), point.longitude())
    }

    /// Tests if `other` lies completely within these bounds
    pub fn contains_bounds(&self, other: &LatLngBounds) -> bool {
        self.contains_latitude(other.lat_north)
            && self.contains_latitude(other.lat_south)
            && longitude::contains_interval(self.longitudes(), other.longitudes())
    }

    /// Tests if a tile lies completely within these bounds
    pub fn contains_tile(&self, tile: &CanonicalTileId) -> bool {
        self.contains_bounds(&tile.bounds())
    }

    /// Tests if these bounds and `other` overlap
    pub fn intersects(&self, other: &LatLngBounds) -> bool {
        self.intersect(other).is_some()
    }

    /// Returns the intersection of these bounds with `other` or `None` if
    /// they do not overlap. If `other` is stored in a different frame it is
    /// shifted by a full turn; the result is expressed in the frame of
    /// `self`. Bounds spanning a full turn leave the other bounds' longitudes
    /// untouched.
    pub fn intersect(&self, other: &LatLngBounds) -> Option<LatLngBounds> {
        let lat_north = self.lat_north.min(other.lat_north);
        let lat_south = self.lat_south.max(other.lat_south);
        if lat_north < lat_south {
            return None;
        }
        let (lon_west, lon_east) = longitude::intersect(self.longitudes(), other.longitudes())?;
        Some(Self::new_unchecked(lat_north, lon_east, lat_south, lon_west))
    }

    /// Like [`intersect`](Self::intersect) but takes the other bounds as
    /// four scalars in NESW order, validating them first
    pub fn intersect_with(
        &self,
        lat_north: f64,
        lon_east: f64,
        lat_south: f64,
        lon_west: f64,
    ) -> Result<Option<LatLngBounds>, GeometryError> {
        let other = Self::new(lat_north, lon_east, lat_south, lon_west)?;
        Ok(self.intersect(&other))
    }

    /// Returns the smallest bounds containing both these bounds and
    /// `other`. The operation is symmetric and the resulting longitude
    /// span never exceeds a full turn. The stored longitudes are kept if
    /// their hull fits into a full turn, so the span is only minimised for
    /// wider hulls.
    pub fn union(&self, other: &LatLngBounds) -> LatLngBounds {
        let (lon_west, lon_east) = longitude::union(self.longitudes(), other.longitudes());
        Self::new_unchecked(
            self.lat_north.max(other.lat_north),
            lon_east,
            self.lat_south.min(other.lat_south),
            lon_west,
        )
    }

    /// Like [`union`](Self::union) but takes the other bounds as four
    /// scalars in NESW order, validating them first
    pub fn union_with(
        &self,
        lat_north: f64,
        lon_east: f64,
        lat_south: f64,
        lon_west: f64,
    ) -> Result<LatLngBounds, GeometryError> {
        let other = Self::new(lat_north, lon_east, lat_south, lon_west)?;
        Ok(self.union(&other))
    }

    /// Clamps `point` into these bounds. A longitude that lies within the
    /// bounds in any frame is kept as is, otherwise it is moved to the
    /// nearer of the west and east boundaries.
    pub fn constrain(&self, point: &LatLng) -> LatLng {
        let latitude = point.latitude().clamp(self.lat_south, self.lat_north);
        let longitude = longitude::constrain(self.longitudes(), point.longitude());
        point.moved_to(latitude, longitude)
    }

    /// Returns new bounds extended to include `point`
    pub fn include(&self, point: &LatLng) -> LatLngBounds {
        self.union(&Self::from_point(point))
    }
}

impl Display for LatLngBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "N:{:?}; E:{:?}; S:{:?}; W:{:?}",
            self.lat_north, self.lon_east, self.lat_south, self.lon_west
        )
    }
}

impl From<&LatLngBounds> for Rect {
    fn from(value: &LatLngBounds) -> Self {
        Rect::new(
            coord! { x: value.lon_west, y: value.lat_south },
            coord! { x: value.lon_east, y: value.lat_north },
        )
    }
}
