use serde::{Deserialize, Serialize};

use super::angle::{angle_from_arc_length, degrees_to_radians, is_angle_between, FULL_TURN};
use super::vector::{polar_to_cartesian_drawing, polar_to_cartesian_math, Vector};

/// A segment of a circle, swept counter-clockwise from `start_angle` to
/// `end_angle` (math convention, degrees).
///
/// Angles are stored as given; membership checks normalize them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub center: Vector,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Arc {
    pub fn new(center: Vector, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self {
            center,
            radius,
            start_angle,
            end_angle,
        }
    }

    /// The whole circle, `0..360`.
    pub fn full_circle(center: Vector, radius: f64) -> Self {
        Self::new(center, radius, 0.0, FULL_TURN)
    }

    /// Arc starting at `start_angle` whose length along the circle is `length`.
    pub fn from_arc_length(center: Vector, radius: f64, start_angle: f64, length: f64) -> Self {
        let span = angle_from_arc_length(radius, length);
        Self::new(center, radius, start_angle, start_angle + span)
    }

    /// Swept angle in degrees, as stored.
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn arc_length(&self) -> f64 {
        degrees_to_radians(self.span().abs()) * self.radius
    }

    /// A zero or negative radius, or a non-finite value anywhere, describes
    /// no arc at all.
    pub fn is_degenerate(&self) -> bool {
        !(self.radius.is_finite()
            && self.radius > 0.0
            && self.center.is_finite()
            && self.start_angle.is_finite()
            && self.end_angle.is_finite())
    }

    /// Whether a direction (degrees, math convention) seen from the center
    /// falls on this arc.
    ///
    /// A span of a full turn or more would normalize to a zero-width range,
    /// so it is treated as the whole circle.
    pub fn contains_angle(&self, degrees: f64) -> bool {
        if self.span().abs() >= FULL_TURN {
            return true;
        }
        is_angle_between(degrees, self.start_angle, self.end_angle)
    }

    /// Whether `point` lies in this arc's angular span, ignoring its distance
    /// from the center.
    pub fn contains_direction_of(&self, point: Vector) -> bool {
        self.contains_angle((point - self.center).argument())
    }

    pub fn start_point(&self) -> Vector {
        polar_to_cartesian_math(self.center, self.radius, self.start_angle)
    }

    pub fn end_point(&self) -> Vector {
        polar_to_cartesian_math(self.center, self.radius, self.end_angle)
    }
}

/// What a renderer needs to stroke an arc path: both endpoints and the flags
/// of an elliptical-arc segment.
///
/// Built from angles in the drawing convention (see
/// [`polar_to_cartesian_drawing`]); no path text is produced here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcOutline {
    pub start: Vector,
    pub end: Vector,
    pub radius: f64,
    /// Swept angle in degrees, always in `[0, 360]`.
    pub sweep: f64,
    pub large_arc: bool,
}

impl ArcOutline {
    /// Outline of the arc drawn from `start_deg` to `end_deg` (drawing
    /// convention).
    pub fn drawing(center: Vector, radius: f64, start_deg: f64, end_deg: f64) -> Self {
        let sweep = (end_deg - start_deg).abs().min(FULL_TURN);
        Self {
            start: polar_to_cartesian_drawing(center, radius, start_deg),
            end: polar_to_cartesian_drawing(center, radius, end_deg),
            radius,
            sweep,
            large_arc: sweep > 180.0,
        }
    }
}
