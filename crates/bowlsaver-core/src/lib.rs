//! # Bowlsaver Core
//!
//! Geometry primitives and the line–arc solver behind the bowl-saver jig.
//!
//! - **Angles**: degree/radian conversion, normalization to `[0, 360)`, and
//!   angular-range membership that handles spans crossing the 0° seam
//! - **Vectors**: immutable 2D values with both polar conventions spelled out
//! - **Arcs**: circle segments; intersections are filtered to the live span
//! - **Intersection**: vertical, horizontal and sloped lines against an arc
//!
//! ```rust
//! use bowlsaver_core::geometry::{compute_intersections, Arc, Line, Vector};
//!
//! let arc = Arc::new(Vector::ZERO, 10.0, 0.0, 90.0);
//! let hits = compute_intersections(&arc, &Line::Horizontal { y: 0.0 });
//! assert_eq!(hits.len(), 1);
//! ```

pub mod error;
pub mod geometry;

pub use error::{Error, GeometryError, Result};

pub use geometry::{
    compute_intersections, is_angle_between, is_angle_within_arc, normalize_angle, Arc,
    ArcOutline, Intersections, Line, Vector,
};
