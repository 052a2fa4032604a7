//! Geometry constants shared by all modules (degrees unless noted)

/// Smallest valid latitude
pub const MIN_LATITUDE: f64 = -90.0;

/// Largest valid latitude
pub const MAX_LATITUDE: f64 = 90.0;

/// Lower bound of the canonical longitude range used by [`wrap`](crate::util::wrap::wrap)
pub const MIN_WRAP_LONGITUDE: f64 = -180.0;

/// Upper bound of the canonical longitude range used by [`wrap`](crate::util::wrap::wrap)
pub const MAX_WRAP_LONGITUDE: f64 = 180.0;

/// Southernmost latitude representable in Web Mercator
pub const MIN_MERCATOR_LATITUDE: f64 = -85.051_128_779_806_59;

/// Northernmost latitude representable in Web Mercator
pub const MAX_MERCATOR_LATITUDE: f64 = 85.051_128_779_806_59;

/// Latitude span of the world
pub const LATITUDE_SPAN: f64 = 180.0;

/// Longitude span of the world (one full turn)
pub const LONGITUDE_SPAN: f64 = 360.0;

/// Earth radius in meters used for distance calculations
pub const EARTH_RADIUS_METERS: f64 = 6_373_000.0;

/// Highest zoom level a [`CanonicalTileId`](crate::tile::CanonicalTileId)
/// can address
pub const MAX_ZOOM: u8 = 32;
