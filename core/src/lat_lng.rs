use std::fmt::{Display, Formatter};

use geo::{Coord, Point};

use crate::{
    constants::{EARTH_RADIUS_METERS, LONGITUDE_SPAN, MAX_LATITUDE, MAX_WRAP_LONGITUDE},
    error::GeometryError,
    util::wrap::wrap_longitude,
};

/// Checks that `latitude` is a number within `[-90, 90]`
pub fn validate_latitude(latitude: f64) -> Result<(), GeometryError> {
    if latitude.is_nan() {
        return Err(GeometryError::LatitudeNaN);
    }
    if latitude.abs() > MAX_LATITUDE {
        return Err(GeometryError::LatitudeOutOfRange);
    }
    Ok(())
}

/// Checks that `longitude` is finite. Longitudes are not range-restricted
/// so that positions east or west of the antimeridian can be expressed
/// without wrapping.
pub fn validate_longitude(longitude: f64) -> Result<(), GeometryError> {
    if longitude.is_nan() {
        return Err(GeometryError::LongitudeNaN);
    }
    if longitude.is_infinite() {
        return Err(GeometryError::LongitudeInfinite);
    }
    Ok(())
}

/// A geographical location in decimal degrees (WGS84) with an optional
/// altitude in meters
///
/// # Examples
///
/// ```rust
/// use geobounds_core::LatLng;
///
/// let p = LatLng::new(45.0, -185.0).unwrap();
/// assert_eq!(p.longitude(), -185.0);
/// assert_eq!(p.wrap().longitude(), 175.0);
///
/// assert!(LatLng::new(95.0, 0.0).is_err());
/// assert!(LatLng::new(0.0, f64::INFINITY).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LatLng {
    latitude: f64,
    longitude: f64,
    altitude: f64,
}

impl LatLng {
    /// Creates a new location at sea level
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeometryError> {
        Self::with_altitude(latitude, longitude, 0.0)
    }

    /// Creates a new location with the given altitude
    pub fn with_altitude(
        latitude: f64,
        longitude: f64,
        altitude: f64,
    ) -> Result<Self, GeometryError> {
        validate_latitude(latitude)?;
        validate_longitude(longitude)?;
        Ok(Self {
            latitude,
            longitude,
            altitude,
        })
    }

    /// Creates a location from values that are already known to be valid
    pub(crate) fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        debug_assert!(validate_latitude(latitude).is_ok());
        debug_assert!(validate_longitude(longitude).is_ok());
        Self {
            latitude,
            longitude,
            altitude: 0.0,
        }
    }

    /// The same altitude at another position
    pub(crate) fn moved_to(&self, latitude: f64, longitude: f64) -> Self {
        Self {
            altitude: self.altitude,
            ..Self::new_unchecked(latitude, longitude)
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Returns a copy with the longitude wrapped into `[-180, 180]`
    pub fn wrap(&self) -> Self {
        Self {
            longitude: wrap_longitude(self.longitude),
            ..*self
        }
    }

    /// Great-circle distance to `other` in meters (haversine formula)
    pub fn distance_to(&self, other: &LatLng) -> f64 {
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + (d_lon / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        c * EARTH_RADIUS_METERS
    }

    /// If the longitude distance to `end` is between half and a full turn,
    /// returns a copy shifted by a full turn so that a path from this
    /// location to `end` takes the short way around the globe
    pub fn unwrap_for_shortest_path(&self, end: &LatLng) -> Self {
        let delta = (end.longitude - self.longitude).abs();
        if delta <= MAX_WRAP_LONGITUDE || delta >= LONGITUDE_SPAN {
            return *self;
        }

        let longitude = if self.longitude > 0.0 && end.longitude < 0.0 {
            self.longitude - LONGITUDE_SPAN
        } else if self.longitude < 0.0 && end.longitude > 0.0 {
            self.longitude + LONGITUDE_SPAN
        } else {
            self.longitude
        };

        Self { longitude, ..*self }
    }
}

impl Display for LatLng {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LatLng [latitude={:?}, longitude={:?}, altitude={:?}]",
            self.latitude, self.longitude, self.altitude
        )
    }
}

impl From<LatLng> for Coord {
    fn from(value: LatLng) -> Self {
        Coord {
            x: value.longitude,
            y: value.latitude,
        }
    }
}

impl From<LatLng> for Point {
    fn from(value: LatLng) -> Self {
        Point::new(value.longitude, value.latitude)
    }
}

impl TryFrom<Coord> for LatLng {
    type Error = GeometryError;

    fn try_from(value: Coord) -> Result<Self, Self::Error> {
        LatLng::new(value.y, value.x)
    }
}

#[cfg(test)]
mod tests {
    use assertor::{assert_that, EqualityAssertion};
    use geo::{coord, Point};

    use crate::error::GeometryError;

    use super::LatLng;

    fn assert_close(actual: f64, expected: f64, delta: f64) {
        assert!(
            (actual - expected).abs() <= delta,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn defaults() {
        let p = LatLng::default();
        assert_eq!(p.latitude(), 0.0);
        assert_eq!(p.longitude(), 0.0);
        assert_eq!(p.altitude(), 0.0);
    }

    #[test]
    fn altitude() {
        assert_eq!(LatLng::new(1.2, 3.4).unwrap().altitude(), 0.0);
        assert_eq!(
            LatLng::with_altitude(1.2, 3.4, 5.6).unwrap().altitude(),
            5.6
        );
    }

    #[test]
    fn rejects_invalid_values() {
        assert_eq!(LatLng::new(f64::NAN, 0.0), Err(GeometryError::LatitudeNaN));
        assert_eq!(LatLng::new(0.0, f64::NAN), Err(GeometryError::LongitudeNaN));
        assert_eq!(
            LatLng::new(95.0, 0.0),
            Err(GeometryError::LatitudeOutOfRange)
        );
        assert_eq!(
            LatLng::new(-95.0, 0.0),
            Err(GeometryError::LatitudeOutOfRange)
        );
        assert_eq!(
            LatLng::new(0.0, f64::NEG_INFINITY),
            Err(GeometryError::LongitudeInfinite)
        );
    }

    #[test]
    fn accepts_unwrapped_longitude() {
        let p = LatLng::new(45.0, -185.0).unwrap();
        assert_eq!(p.longitude(), -185.0);
    }

    #[test]
    fn wrap() {
        let original = LatLng::new(45.0, -185.0).unwrap();
        let wrapped = original.wrap();
        assert_eq!(original.longitude(), -185.0);
        assert_eq!(wrapped.longitude(), 175.0);
        assert_eq!(LatLng::new(45.0, 180.0).unwrap().wrap().longitude(), 180.0);
        assert_eq!(
            LatLng::new(45.0, -180.0).unwrap().wrap().longitude(),
            -180.0
        );
        assert_eq!(LatLng::new(45.0, 50.0).unwrap().wrap().longitude(), 50.0);
    }

    #[test]
    fn distance() {
        let a = LatLng::new(0.0, 0.0).unwrap();
        let b = LatLng::new(1.0, 1.0).unwrap();
        assert_close(a.distance_to(&b), 157_298.745_384_727_5, 1e-6);
    }

    #[test]
    fn distance_to_same_point() {
        let a = LatLng::new(40.71199035644531, -74.0081).unwrap();
        assert_eq!(a.distance_to(&a), 0.0);
    }

    /// Nearly identical points must not produce NaN
    #[test]
    fn distance_to_close_point() {
        let a = LatLng::new(40.00599, -105.29261).unwrap();
        let b = LatLng::new(40.005990000000025, -105.29260999999997).unwrap();
        assert!(!a.distance_to(&b).is_nan());
    }

    #[test]
    fn shortest_path() {
        let start = LatLng::new(0.0, 170.0).unwrap();
        let end = LatLng::new(0.0, -170.0).unwrap();
        assert_eq!(start.unwrap_for_shortest_path(&end).longitude(), -190.0);
        assert_eq!(end.unwrap_for_shortest_path(&start).longitude(), 190.0);

        let near = LatLng::new(0.0, 10.0).unwrap();
        assert_eq!(start.unwrap_for_shortest_path(&near), start);
    }

    #[test]
    fn display() {
        let p = LatLng::with_altitude(1.2, 3.4, 5.6).unwrap();
        assert_that!(p.to_string())
            .is_equal_to("LatLng [latitude=1.2, longitude=3.4, altitude=5.6]".to_string());
    }

    #[test]
    fn geo_interop() {
        let p = LatLng::new(52.5, 13.4).unwrap();
        let point: Point = p.into();
        assert_eq!(point.x(), 13.4);
        assert_eq!(point.y(), 52.5);

        let back = LatLng::try_from(coord! { x: 13.4, y: 52.5 }).unwrap();
        assert_eq!(back, p);
        assert_eq!(
            LatLng::try_from(coord! { x: 0.0, y: 100.0 }),
            Err(GeometryError::LatitudeOutOfRange)
        );
    }
}
