//! Plane geometry for the jig: angles, vectors, arcs and line–arc
//! intersection.
//!
//! Everything here is a pure function over `f64` millimeters and degrees.

mod angle;
mod arc;
mod intersection;
mod vector;

pub use angle::{
    angle_from_arc_length, degrees_to_radians, is_angle_between, is_angle_within_arc,
    normalize_angle, radians_to_degrees, FULL_TURN,
};
pub use arc::{Arc, ArcOutline};
pub use intersection::{
    compute_intersections, intersect_horizontal, intersect_sloped, intersect_vertical,
    Intersections, Line,
};
pub use vector::{polar_to_cartesian_drawing, polar_to_cartesian_math, Vector};
