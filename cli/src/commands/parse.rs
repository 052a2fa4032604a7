use std::ops::Range;

use geobounds_core::{LatLng, LatLngBounds};

use super::input_error::InputError;

/// Splits a comma-separated argument and parses each component as a
/// number. Exactly `N` components are required.
fn parse_numbers<const N: usize>(input: &str, expected: &str) -> Result<[f64; N], InputError> {
    let mut values = [0.0; N];
    let mut start = 0;
    let mut count = 0;
    for part in input.split(',') {
        let span = start..start + part.len();
        start = span.end + 1;
        if count == N {
            return Err(InputError::at(input, span, &format!("Expected {expected}.")));
        }
        values[count] = parse_number(input, part, span)?;
        count += 1;
    }
    if count < N {
        return Err(InputError::at(
            input,
            input.len()..input.len(),
            &format!("Expected {expected}."),
        ));
    }
    Ok(values)
}

fn parse_number(input: &str, part: &str, span: Range<usize>) -> Result<f64, InputError> {
    let trimmed = part.trim();
    if trimmed.is_empty() {
        return Err(InputError::at(input, span, "Expected a number."));
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| InputError::at(input, span, "Invalid number."))
}

/// Parses bounds given as `north,east,south,west`
pub fn parse_bounds(input: &str) -> Result<LatLngBounds, InputError> {
    let [north, east, south, west] =
        parse_numbers::<4>(input, "4 comma-separated values (north,east,south,west)")?;
    LatLngBounds::new(north, east, south, west)
        .map_err(|err| InputError::at(input, 0..input.len(), &format!("Invalid bounds: {err}.")))
}

/// Parses a location given as `latitude,longitude`
pub fn parse_lat_lng(input: &str) -> Result<LatLng, InputError> {
    let [latitude, longitude] =
        parse_numbers::<2>(input, "2 comma-separated values (latitude,longitude)")?;
    LatLng::new(latitude, longitude)
        .map_err(|err| InputError::at(input, 0..input.len(), &format!("Invalid location: {err}.")))
}
