//! Interval arithmetic on unwrapped longitudes. An interval `(west, east)`
//! always satisfies `west <= east`. Shifting an interval by a full turn
//! describes the same arc on the globe in a different frame.
//!
//! Results are built from the input endpoints with exactly one shift per
//! endpoint, so the same arc always yields bit-identical values.

use std::cmp::Ordering;

use crate::{constants::LONGITUDE_SPAN, util::wrap::turns};

pub(super) type Interval = (f64, f64);

/// Intervals this close to a full turn are treated as covering the whole
/// circle. `west + 360 - west` is not always exactly 360.
const FULL_TURN_TOLERANCE: f64 = 1e-9;

fn shift((west, east): Interval, turn: f64) -> Interval {
    let by = turn * LONGITUDE_SPAN;
    (west + by, east + by)
}

fn span((west, east): Interval) -> f64 {
    east - west
}

fn hull(a: Interval, b: Interval) -> Interval {
    (a.0.min(b.0), a.1.max(b.1))
}

fn is_full_turn(interval: Interval) -> bool {
    span(interval) >= LONGITUDE_SPAN - FULL_TURN_TOLERANCE
}

/// Whole turns `value` has to be moved by so that it lies in
/// `[west, west + 360)`. Rounding may make this off by one, callers test
/// the neighbouring turns as well.
fn alignment(value: f64, west: f64) -> f64 {
    -((value - west) / LONGITUDE_SPAN).floor()
}

/// The turns worth testing when moving `value` next to `west`
fn candidate_turns(value: f64, west: f64) -> [f64; 3] {
    let turn = alignment(value, west);
    [turn, turn - 1.0, turn + 1.0]
}

/// Tests if `longitude`, in any frame, lies within `outer`
pub(super) fn contains(outer: Interval, longitude: f64) -> bool {
    if is_full_turn(outer) {
        return true;
    }
    candidate_turns(longitude, outer.0)
        .into_iter()
        .map(|turn| longitude + turn * LONGITUDE_SPAN)
        .any(|lon| lon >= outer.0 && lon <= outer.1)
}

/// Tests if `inner`, in any frame, is nested within `outer`
pub(super) fn contains_interval(outer: Interval, inner: Interval) -> bool {
    if is_full_turn(outer) {
        return true;
    }
    candidate_turns(inner.0, outer.0)
        .into_iter()
        .map(|turn| shift(inner, turn))
        .any(|(west, east)| west >= outer.0 && east <= outer.1)
}

/// Moves `longitude` to the nearest end of `outer` unless it already lies
/// within `outer` in some frame. The result is in the frame of `outer`.
pub(super) fn constrain(outer: Interval, longitude: f64) -> f64 {
    if contains(outer, longitude) {
        return longitude;
    }
    let aligned = longitude + alignment(longitude, outer.0) * LONGITUDE_SPAN;
    let past_east = aligned - outer.1;
    let before_west = outer.0 + LONGITUDE_SPAN - aligned;
    if past_east <= before_west {
        outer.1
    } else {
        outer.0
    }
}

/// Overlap of two intervals. `b` is tried in its own frame and shifted
/// east and west by a full turn, and the largest overlap wins (the
/// unshifted one on ties). The result is expressed in the frame of `a`.
/// If either interval covers a full turn the other one is returned as is.
pub(super) fn intersect(a: Interval, b: Interval) -> Option<Interval> {
    if is_full_turn(b) {
        return Some(a);
    }
    if is_full_turn(a) {
        return Some(b);
    }
    [0.0, 1.0, -1.0]
        .into_iter()
        .filter_map(|turn| {
            let (west, east) = shift(b, turn);
            let west = a.0.max(west);
            let east = a.1.min(east);
            (east >= west).then_some((west, east))
        })
        .fold(None, |best: Option<Interval>, candidate| match best {
            Some(best) if span(best) >= span(candidate) => Some(best),
            _ => Some(candidate),
        })
}

/// Hull of `p` and `q` shifted by `relative_turn`, moved as a whole so that
/// its midpoint lies in `[-180, 180)`
fn canonical_hull(p: Interval, q: Interval, relative_turn: f64) -> Interval {
    let (west, east) = hull(p, shift(q, relative_turn));
    let frame = -turns(west / 2.0 + east / 2.0);
    hull(shift(p, frame), shift(q, relative_turn + frame))
}

fn total_order(a: Interval, b: Interval) -> Ordering {
    a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1))
}

/// Smallest interval enclosing `a` and `b`, never wider than a full turn.
///
/// The plain hull in the stored frame is kept whenever it fits into a full
/// turn, even if another alignment would be narrower. Only a hull wider
/// than a full turn is replaced by the narrowest alignment with one input
/// shifted by a turn. If none fits, `a` and `b` together cover the whole
/// circle and the hull is cut down to one turn.
pub(super) fn union(a: Interval, b: Interval) -> Interval {
    let raw = hull(a, b);
    if span(raw) <= LONGITUDE_SPAN {
        return raw;
    }

    // evaluate in a fixed order of the inputs so that the result is the
    // same for `union(a, b)` and `union(b, a)`
    let (p, q) = match total_order(a, b) {
        Ordering::Greater => (b, a),
        _ => (a, b),
    };

    let narrowest = [1.0, -1.0]
        .into_iter()
        .map(|turn| canonical_hull(p, q, turn))
        .min_by(|x, y| span(*x).total_cmp(&span(*y)).then(x.0.total_cmp(&y.0)));

    match narrowest {
        Some(candidate) if span(candidate) <= LONGITUDE_SPAN => candidate,
        _ => (raw.0, raw.0 + LONGITUDE_SPAN),
    }
}
