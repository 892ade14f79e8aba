//! Two-dimensional vectors in millimeters.
//!
//! Two polar conversions exist and they are deliberately kept apart:
//!
//! - [`polar_to_cartesian_math`]: 0° on +x, counter-clockwise. Every circle
//!   computation (intersections, arc membership) uses this one.
//! - [`polar_to_cartesian_drawing`]: the arc-path convention, offset by -90°
//!   so that 0° points "up" on a y-down drawing surface.

use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use super::angle::{degrees_to_radians, radians_to_degrees};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(self, other: Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(self, other: Vector) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y)
    }

    pub fn scale(self, factor: f64) -> Vector {
        Vector::new(self.x * factor, self.y * factor)
    }

    pub fn magnitude(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Direction of the vector in degrees, in `(-180, 180]`.
    ///
    /// The zero vector has no direction; `atan2(0, 0)` gives 0.
    pub fn argument(self) -> f64 {
        radians_to_degrees(self.y.atan2(self.x))
    }

    /// Rotates counter-clockwise about the origin.
    pub fn rotate(self, degrees: f64) -> Vector {
        let (sin_a, cos_a) = degrees_to_radians(degrees).sin_cos();
        Vector::new(
            self.x * cos_a - self.y * sin_a,
            self.x * sin_a + self.y * cos_a,
        )
    }

    /// Rotates counter-clockwise about `pivot`.
    pub fn rotate_about(self, degrees: f64, pivot: Vector) -> Vector {
        self.subtract(pivot).rotate(degrees).add(pivot)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::add(self, rhs)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        self.subtract(rhs)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.scale(rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.scale(-1.0)
    }
}

/// Point at `radius` and `degrees` around `center`, standard math convention.
pub fn polar_to_cartesian_math(center: Vector, radius: f64, degrees: f64) -> Vector {
    let (sin_a, cos_a) = degrees_to_radians(degrees).sin_cos();
    Vector::new(center.x + radius * cos_a, center.y + radius * sin_a)
}

/// Point at `radius` and `degrees` around `center`, arc-drawing convention.
///
/// Equivalent to `polar_to_cartesian_math(center, radius, degrees - 90.0)`.
pub fn polar_to_cartesian_drawing(center: Vector, radius: f64, degrees: f64) -> Vector {
    polar_to_cartesian_math(center, radius, degrees - 90.0)
}
