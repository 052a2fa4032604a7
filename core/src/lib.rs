//! Geographic bounding boxes that can cross the antimeridian, together
//! with Web Mercator tile addressing

pub mod bounds;
pub mod codec;
pub mod constants;
pub mod error;
pub mod lat_lng;
pub mod tile;
pub mod util;

pub use bounds::{Builder, LatLngBounds, LatLngSpan};
pub use codec::BinaryCodec;
pub use error::GeometryError;
pub use lat_lng::LatLng;
pub use tile::{CanonicalTileId, TileCover, TilePyramidRegion};
