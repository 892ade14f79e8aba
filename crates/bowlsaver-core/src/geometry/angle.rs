//! Angle conversion, normalization and angular-range membership.
//!
//! Angles are plain `f64` degrees. Rotations accumulate without bound while
//! the cutter is dragged, so every comparison goes through
//! [`normalize_angle`] first: -30° and 330° are the same direction.

use std::f64::consts::PI;

/// Degrees in one full turn.
pub const FULL_TURN: f64 = 360.0;

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Maps any finite angle into `[0, 360)`.
///
/// Idempotent, and `normalize_angle(a) == normalize_angle(a + 360k)` for any
/// integer `k`. NaN and infinities propagate as NaN.
pub fn normalize_angle(degrees: f64) -> f64 {
    let rem = degrees % FULL_TURN;
    let wrapped = if rem < 0.0 { rem + FULL_TURN } else { rem };
    // A tiny negative remainder can round up to a full turn
    if wrapped >= FULL_TURN {
        0.0
    } else {
        wrapped
    }
}

/// Degrees subtended by an arc of `length` on a circle of `radius`.
///
/// A zero radius yields an infinite or NaN angle; callers guard against it.
pub fn angle_from_arc_length(radius: f64, length: f64) -> f64 {
    (length / radius) * (180.0 / PI)
}

/// Whether `angle` lies on the arc running counter-clockwise from `start`
/// to `end`, boundaries included.
///
/// All three inputs are normalized first. When `start > end` after
/// normalization the range crosses the 0°/360° seam and membership becomes
/// `angle >= start || angle <= end`.
pub fn is_angle_between(angle: f64, start: f64, end: f64) -> bool {
    let angle = normalize_angle(angle);
    let start = normalize_angle(start);
    let end = normalize_angle(end);

    if start <= end {
        angle >= start && angle <= end
    } else {
        angle >= start || angle <= end
    }
}

/// Presentation-facing name for [`is_angle_between`].
pub fn is_angle_within_arc(angle: f64, start: f64, end: f64) -> bool {
    is_angle_between(angle, start, end)
}
