use itertools::Itertools;

use crate::{
    constants::LONGITUDE_SPAN, error::GeometryError, lat_lng::LatLng,
    util::wrap::normalize_longitude,
};

use super::LatLngBounds;

/// Creates [`LatLngBounds`] in an iterative fashion by including points as
/// they become available. At least two points have to be included before
/// the bounds can be built.
///
/// Besides the running extremes the builder remembers the wrapped
/// longitude of every included point. Repeated longitudes are merged from
/// time to time, so memory grows with the number of distinct longitudes.
///
/// ```rust
/// use geobounds_core::{Builder, GeometryError, LatLng, LatLngSpan};
///
/// let bounds = Builder::new()
///     .include(LatLng::new(10.0, -170.0).unwrap())
///     .include(LatLng::new(-10.0, 170.0).unwrap())
///     .build()
///     .unwrap();
/// assert_eq!(bounds.span(), LatLngSpan::new(20.0, 340.0));
///
/// let single = Builder::new().include(LatLng::default()).build();
/// assert_eq!(single, Err(GeometryError::InsufficientPoints { count: 1 }));
/// ```
#[derive(Debug, Default)]
pub struct Builder {
    inner: Inner,
}

/// Number of stored longitudes after which duplicates are merged for the
/// first time
const COMPACT_AT: usize = 64;

#[derive(Debug, Default)]
enum Inner {
    #[default]
    Uninitialized,
    Point {
        latitude: f64,
        longitude: f64,
    },
    Hull {
        lat_north: f64,
        lon_east: f64,
        lat_south: f64,
        lon_west: f64,
        longitudes: Vec<f64>,
        compact_at: usize,
    },
}

impl Inner {
    fn add_point(self, latitude: f64, longitude: f64) -> Self {
        match self {
            Self::Uninitialized => Self::Point {
                latitude,
                longitude,
            },
            Self::Point {
                latitude: plat,
                longitude: plon,
            } => Self::Hull {
                lat_north: plat.max(latitude),
                lon_east: plon.max(longitude),
                lat_south: plat.min(latitude),
                lon_west: plon.min(longitude),
                longitudes: vec![normalize_longitude(plon), normalize_longitude(longitude)],
                compact_at: COMPACT_AT,
            },
            Self::Hull {
                lat_north,
                lon_east,
                lat_south,
                lon_west,
                mut longitudes,
                mut compact_at,
            } => {
                longitudes.push(normalize_longitude(longitude));
                if longitudes.len() >= compact_at {
                    longitudes.sort_by(f64::total_cmp);
                    longitudes.dedup();
                    compact_at = (longitudes.len() * 2).max(COMPACT_AT);
                }
                Self::Hull {
                    lat_north: lat_north.max(latitude),
                    lon_east: lon_east.max(longitude),
                    lat_south: lat_south.min(latitude),
                    lon_west: lon_west.min(longitude),
                    longitudes,
                    compact_at,
                }
            }
        }
    }
}

/// The narrowest arc enclosing all wrapped `longitudes`, found by cutting
/// the circle at the widest gap between neighbouring longitudes. Only
/// depends on the set of longitudes and not on their order.
fn minimal_arc(longitudes: &[f64]) -> Option<(f64, f64)> {
    let sorted = longitudes
        .iter()
        .copied()
        .sorted_by(f64::total_cmp)
        .collect::<Vec<_>>();
    let (&first, &last) = (sorted.first()?, sorted.last()?);

    let around = first + LONGITUDE_SPAN - last;
    let widest = sorted
        .iter()
        .tuple_windows()
        .map(|(&a, &b)| (b - a, a, b))
        .max_by(|x, y| x.0.total_cmp(&y.0));

    Some(match widest {
        Some((gap, before, after)) if gap > around => (after, before + LONGITUDE_SPAN),
        _ => (first, last),
    })
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a point
    pub fn include(self, point: LatLng) -> Self {
        Self {
            inner: self.inner.add_point(point.latitude(), point.longitude()),
        }
    }

    /// Adds all given points
    pub fn includes(self, points: impl IntoIterator<Item = LatLng>) -> Self {
        points.into_iter().fold(self, Self::include)
    }

    /// Adds the north east and south west corners of `bounds`
    pub fn include_bounds(self, bounds: &LatLngBounds) -> Self {
        self.includes(bounds.to_lat_lngs())
    }

    /// Builds the smallest bounds containing all included points.
    ///
    /// Longitudes are taken as given, so points at `-170` and `170` span
    /// 340 degrees. Only if the included longitudes lie more than a full
    /// turn apart are they wrapped and the narrowest enclosing arc is used.
    ///
    /// # Errors
    /// Returns [`GeometryError::InsufficientPoints`] if fewer than two
    /// points have been included.
    pub fn build(self) -> Result<LatLngBounds, GeometryError> {
        match self.inner {
            Inner::Uninitialized => Err(GeometryError::InsufficientPoints { count: 0 }),
            Inner::Point { .. } => Err(GeometryError::InsufficientPoints { count: 1 }),
            Inner::Hull {
                lat_north,
                lon_east,
                lat_south,
                lon_west,
                longitudes,
                ..
            } => {
                let (lon_west, lon_east) = if lon_east - lon_west <= LONGITUDE_SPAN {
                    (lon_west, lon_east)
                } else {
                    minimal_arc(&longitudes).ok_or(GeometryError::InsufficientPoints {
                        count: longitudes.len(),
                    })?
                };
                Ok(LatLngBounds::new_unchecked(
                    lat_north, lon_east, lat_south, lon_west,
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use assertor::{assert_that, EqualityAssertion};
    use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

    use crate::{
        bounds::{LatLngBounds, LatLngSpan},
        error::GeometryError,
        lat_lng::LatLng,
    };

    use super::{Builder, Inner};

    fn p(latitude: f64, longitude: f64) -> LatLng {
        LatLng::new(latitude, longitude).unwrap()
    }

    #[test]
    fn no_points() {
        assert_eq!(
            Builder::new().build(),
            Err(GeometryError::InsufficientPoints { count: 0 })
        );
    }

    #[test]
    fn one_point() {
        assert_eq!(
            Builder::new().include(p(0.0, 0.0)).build(),
            Err(GeometryError::InsufficientPoints { count: 1 })
        );
    }

    #[test]
    fn insufficient_points_message() {
        let err = Builder::new().build().unwrap_err();
        assert!(err.to_string().starts_with("invalid bounds: insufficient points"));
    }

    #[test]
    fn includes_matches_include() {
        let by_list = Builder::new()
            .includes(vec![p(0.0, 0.0), p(2.0, 2.0)])
            .build()
            .unwrap();
        let one_by_one = Builder::new()
            .include(p(0.0, 0.0))
            .include(p(2.0, 2.0))
            .build()
            .unwrap();
        assert_eq!(by_list, one_by_one);
    }

    #[test]
    fn same_points() {
        let bounds = Builder::new()
            .include(p(2.0, 2.0))
            .include(p(2.0, 2.0))
            .include(p(0.0, 0.0))
            .include(p(0.0, 0.0))
            .build()
            .unwrap();
        assert_eq!(bounds.north_east(), p(2.0, 2.0));
        assert_eq!(bounds.south_west(), p(0.0, 0.0));
    }

    #[test]
    fn date_line_span() {
        let bounds = Builder::new()
            .include(p(10.0, -170.0))
            .include(p(-10.0, 170.0))
            .build()
            .unwrap();
        assert_that!(bounds.span()).is_equal_to(LatLngSpan::new(20.0, 340.0));

        let bounds = Builder::new()
            .include(p(-10.0, -170.0))
            .include(p(10.0, 170.0))
            .build()
            .unwrap();
        assert_that!(bounds.span()).is_equal_to(LatLngSpan::new(20.0, 340.0));
    }

    #[test]
    fn includes_over_date_line() {
        let cases: [&[(f64, f64)]; 3] = [
            &[(10.0, -170.0), (-10.0, -175.0), (0.0, -190.0)],
            &[(10.0, 170.0), (-10.0, 175.0), (0.0, 190.0)],
            &[(10.0, -190.0), (-10.0, -170.0), (0.0, -180.0), (5.0, -180.0)],
        ];
        for points in cases {
            let bounds = Builder::new()
                .includes(points.iter().map(|&(lat, lon)| p(lat, lon)))
                .build()
                .unwrap();
            assert_eq!(bounds.span(), LatLngSpan::new(20.0, 20.0));
        }
    }

    #[test]
    fn include_bounds() {
        let inner = LatLngBounds::new(5.0, 5.0, -5.0, -5.0).unwrap();
        let bounds = Builder::new()
            .include_bounds(&inner)
            .include(p(10.0, 10.0))
            .build()
            .unwrap();
        assert_eq!(bounds, LatLngBounds::new(10.0, 10.0, -5.0, -5.0).unwrap());
    }

    #[test]
    fn order_does_not_matter() {
        let same_longitude_first = Builder::new()
            .include(p(50.0, 10.0))
            .include(p(60.0, 10.0))
            .include(p(60.0, 20.0))
            .include(p(50.0, 20.0))
            .include(p(50.0, 10.0))
            .build()
            .unwrap();
        let same_latitude_first = Builder::new()
            .include(p(50.0, 20.0))
            .include(p(50.0, 10.0))
            .include(p(60.0, 10.0))
            .include(p(60.0, 20.0))
            .include(p(50.0, 20.0))
            .build()
            .unwrap();
        assert_eq!(same_latitude_first, same_longitude_first);
    }

    #[test]
    fn shuffled_points() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut points = vec![
            p(10.0, -170.0),
            p(-10.0, 170.0),
            p(45.0, 3.5),
            p(-80.0, -120.25),
            p(0.0, 185.0),
        ];
        let expected = Builder::new().includes(points.clone()).build().unwrap();
        for _ in 0..20 {
            points.shuffle(&mut rng);
            let bounds = Builder::new().includes(points.clone()).build().unwrap();
            assert_eq!(bounds, expected);
        }
    }

    /// Longitudes more than a full turn apart are wrapped and enclosed by
    /// the narrowest arc, whatever order they come in
    #[test]
    fn wider_than_full_turn() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut points = vec![p(0.0, 170.0), p(5.0, -200.0), p(-5.0, 175.0)];
        for _ in 0..10 {
            points.shuffle(&mut rng);
            let bounds = Builder::new().includes(points.clone()).build().unwrap();
            assert_eq!(bounds, LatLngBounds::new(5.0, 175.0, -5.0, 160.0).unwrap());
        }
    }

    #[test]
    fn repeated_longitudes_are_merged() {
        let points = (0..10_000).map(|i| p(0.0, f64::from(i % 3) * 360.0 + 10.0));
        let builder = Builder::new().include(p(0.0, -100.0)).includes(points);
        let Inner::Hull { ref longitudes, .. } = builder.inner else {
            panic!("expected a hull, got {:?}", builder.inner);
        };
        assert!(longitudes.len() <= 64, "{} longitudes", longitudes.len());

        let bounds = builder.build().unwrap();
        assert_eq!(bounds.lon_west(), -100.0);
        assert_eq!(bounds.lon_east(), 10.0);
    }

    #[test]
    fn narrowest_arc_crossing_antimeridian() {
        let bounds = Builder::new()
            .include(p(0.0, -400.0))
            .include(p(0.0, 170.0))
            .include(p(0.0, -175.0))
            .build()
            .unwrap();
        assert_eq!(bounds.lon_west(), 170.0);
        assert_eq!(bounds.lon_east(), 320.0);
        assert!(bounds.longitude_span() <= 360.0);
    }
}
