use thiserror::Error;

/// An invalid geographic value or a failed geometry operation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("latitude must not be NaN")]
    LatitudeNaN,

    #[error("longitude must not be NaN")]
    LongitudeNaN,

    #[error("longitude must not be infinite")]
    LongitudeInfinite,

    #[error("latitude must be between -90 and 90")]
    LatitudeOutOfRange,

    #[error("latNorth cannot be less than latSouth")]
    LatitudeInverted,

    #[error("lonEast cannot be less than lonWest")]
    LongitudeInverted,

    /// A [`Builder`](crate::bounds::Builder) needs at least two points
    #[error("invalid bounds: insufficient points ({count} included, at least 2 required)")]
    InsufficientPoints { count: usize },

    /// The tile address lies outside the tile pyramid
    #[error("tile {z}/{x}/{y} is outside the tile pyramid")]
    InvalidTile { z: u8, x: u32, y: u32 },

    /// A zoom range with `min > max` or a zoom level above the maximum
    #[error("invalid zoom range {min}..={max}")]
    InvalidZoomRange { min: u8, max: u8 },

    #[error("unable to encode value: {0}")]
    Encode(String),

    #[error("unable to decode value: {0}")]
    Decode(String),
}
