use crate::constants::{LONGITUDE_SPAN, MAX_WRAP_LONGITUDE, MIN_WRAP_LONGITUDE};

/// Constrains `value` to the range `[min, max]` via modular arithmetic.
/// Multiples of `max` are wrapped to `max` and not to `min`, so both ends of
/// the range are preserved.
///
/// # Examples
///
/// ```rust
/// use geobounds_core::util::wrap::wrap;
///
/// assert_eq!(wrap(-185.0, -180.0, 180.0), 175.0);
/// assert_eq!(wrap(180.0, -180.0, 180.0), 180.0);
/// assert_eq!(wrap(-180.0, -180.0, 180.0), -180.0);
/// assert_eq!(wrap(540.0, -180.0, 180.0), 180.0);
/// ```
pub fn wrap(value: f64, min: f64, max: f64) -> f64 {
    let delta = max - min;
    let first_mod = (value - min) % delta;
    let second_mod = (first_mod + delta) % delta;
    if value >= max && second_mod == 0.0 {
        max
    } else {
        second_mod + min
    }
}

/// Wraps a longitude into `[-180, 180]`
pub fn wrap_longitude(longitude: f64) -> f64 {
    wrap(longitude, MIN_WRAP_LONGITUDE, MAX_WRAP_LONGITUDE)
}

/// Returns the number of full turns `k` such that `longitude - 360 * k`
/// lies in `[-180, 180)`. Unlike [`wrap_longitude`] this is strictly
/// periodic: `longitude` and `longitude + 360` always land on the same
/// value.
pub(crate) fn turns(longitude: f64) -> f64 {
    ((longitude - MIN_WRAP_LONGITUDE) / LONGITUDE_SPAN).floor()
}

/// Maps a longitude into `[-180, 180)`, see [`turns`]
pub(crate) fn normalize_longitude(longitude: f64) -> f64 {
    longitude - turns(longitude) * LONGITUDE_SPAN
}
