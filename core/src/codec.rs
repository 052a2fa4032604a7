//! Compact binary representation of geometry values based on `bincode`.
//! Decoded values go through the same validation as values created with
//! the regular constructors.

use bincode::{config, Decode, Encode};

use crate::{
    bounds::LatLngBounds, error::GeometryError, lat_lng::LatLng, tile::CanonicalTileId,
};

/// A value that can be stored as bytes and read back
pub trait BinaryCodec: Sized {
    /// Encodes this value
    fn to_bytes(&self) -> Result<Vec<u8>, GeometryError>;

    /// Decodes and validates a value. The whole slice must be consumed.
    fn from_bytes(bytes: &[u8]) -> Result<Self, GeometryError>;
}

fn encode<T: Encode>(value: T) -> Result<Vec<u8>, GeometryError> {
    bincode::encode_to_vec(value, config::standard())
        .map_err(|e| GeometryError::Encode(e.to_string()))
}

fn decode<T: Decode>(bytes: &[u8]) -> Result<T, GeometryError> {
    let (value, read) = bincode::decode_from_slice(bytes, config::standard())
        .map_err(|e| GeometryError::Decode(e.to_string()))?;
    if read != bytes.len() {
        return Err(GeometryError::Decode(format!(
            "{} trailing bytes",
            bytes.len() - read
        )));
    }
    Ok(value)
}

#[derive(Encode, Decode)]
struct RawLatLng {
    latitude: f64,
    longitude: f64,
    altitude: f64,
}

#[derive(Encode, Decode)]
struct RawBounds {
    lat_north: f64,
    lon_east: f64,
    lat_south: f64,
    lon_west: f64,
}

#[derive(Encode, Decode)]
struct RawTile {
    z: u8,
    x: u32,
    y: u32,
}

impl BinaryCodec for LatLng {
    fn to_bytes(&self) -> Result<Vec<u8>, GeometryError> {
        encode(RawLatLng {
            latitude: self.latitude(),
            longitude: self.longitude(),
            altitude: self.altitude(),
        })
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, GeometryError> {
        let raw: RawLatLng = decode(bytes)?;
        LatLng::with_altitude(raw.latitude, raw.longitude, raw.altitude)
    }
}

impl BinaryCodec for LatLngBounds {
    fn to_bytes(&self) -> Result<Vec<u8>, GeometryError> {
        encode(RawBounds {
            lat_north: self.lat_north(),
            lon_east: self.lon_east(),
            lat_south: self.lat_south(),
            lon_west: self.lon_west(),
        })
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, GeometryError> {
        let raw: RawBounds = decode(bytes)?;
        LatLngBounds::new(raw.lat_north, raw.lon_east, raw.lat_south, raw.lon_west)
    }
}

impl BinaryCodec for CanonicalTileId {
    fn to_bytes(&self) -> Result<Vec<u8>, GeometryError> {
        encode(RawTile {
            z: self.z(),
            x: self.x(),
            y: self.y(),
        })
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, GeometryError> {
        let raw: RawTile = decode(bytes)?;
        CanonicalTileId::new(raw.z, raw.x, raw.y)
    }
}
