use std::f64::consts::PI;

use crate::{
    bounds::LatLngBounds,
    constants::{LONGITUDE_SPAN, MAX_MERCATOR_LATITUDE, MAX_WRAP_LONGITUDE, MIN_MERCATOR_LATITUDE},
};

use super::{dimension, CanonicalTileId};

/// Fractional tile column of `longitude`. Unwrapped longitudes give
/// columns outside `[0, 2^z)`.
fn column(longitude: f64, dim: f64) -> f64 {
    (longitude + MAX_WRAP_LONGITUDE) / LONGITUDE_SPAN * dim
}

/// Fractional tile row of `latitude` in the Web Mercator projection
fn row(latitude: f64, dim: f64) -> f64 {
    let lat = latitude
        .clamp(MIN_MERCATOR_LATITUDE, MAX_MERCATOR_LATITUDE)
        .to_radians();
    let merc = (lat.tan() + 1.0 / lat.cos()).ln();
    (1.0 - merc / PI) / 2.0 * dim
}

/// Iterator over all tiles of one zoom level that overlap a bounds.
/// Tiles are yielded column by column from west to east, each column from
/// north to south. Columns wrap around the antimeridian and are visited
/// at most once.
#[derive(Debug, Clone)]
pub struct TileCover {
    z: u8,
    x_start: u64,
    columns: u64,
    y_start: u64,
    rows: u64,
    column: u64,
    row: u64,
}

impl TileCover {
    pub(super) fn new(bounds: &LatLngBounds, z: u8) -> Self {
        let dim = dimension(z);
        let fdim = dim as f64;
        let max_index = (dim - 1) as f64;

        let west = column(bounds.lon_west(), fdim).floor();
        let east = (column(bounds.lon_east(), fdim).ceil() - 1.0).max(west);
        // the float to int cast saturates, more than `dim` columns are
        // truncated to one full turn anyway
        let columns = ((east - west + 1.0) as u64).min(dim);
        let x_start = (west as i64).rem_euclid(dim as i64) as u64;

        let north = row(bounds.lat_north(), fdim).floor().clamp(0.0, max_index);
        let south = (row(bounds.lat_south(), fdim).ceil() - 1.0)
            .max(north)
            .min(max_index);

        Self {
            z,
            x_start,
            columns,
            y_start: north as u64,
            rows: (south - north) as u64 + 1,
            column: 0,
            row: 0,
        }
    }

    pub fn zoom(&self) -> u8 {
        self.z
    }

    /// Number of tiles not yet yielded
    pub fn remaining(&self) -> u128 {
        if self.column >= self.columns {
            return 0;
        }
        let rows = u128::from(self.rows);
        u128::from(self.columns - self.column) * rows - u128::from(self.row)
    }
}

impl Iterator for TileCover {
    type Item = CanonicalTileId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.column >= self.columns {
            return None;
        }

        let x = (self.x_start + self.column) % dimension(self.z);
        let y = self.y_start + self.row;

        self.row += 1;
        if self.row >= self.rows {
            self.row = 0;
            self.column += 1;
        }

        // x and y are below 2^z, so they fit into u32
        Some(CanonicalTileId {
            z: self.z,
            x: x as u32,
            y: y as u32,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}
