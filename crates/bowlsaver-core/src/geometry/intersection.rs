//! Line–arc intersection.
//!
//! Each line form reduces the circle equation to a quadratic in one variable.
//! Up to two raw candidates come out of it; only those whose direction from
//! the center lies on the arc's live span are returned. A point on the far
//! side of the circle that the arc never sweeps is not a real intersection.
//!
//! No-intersection is a normal outcome and is an empty result, never an error.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::arc::Arc;
use super::vector::Vector;

/// At most two points, kept inline.
pub type Intersections = SmallVec<[Vector; 2]>;

/// An infinite straight line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Line {
    /// The line `x = x₀`
    Vertical { x: f64 },
    /// The line `y = y₀`
    Horizontal { y: f64 },
    /// `y = slope * x + intercept`
    Sloped { slope: f64, intercept: f64 },
}

impl Line {
    /// The line through two points. Coincident points give a vertical line
    /// through them.
    pub fn through(a: Vector, b: Vector) -> Line {
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        if dx == 0.0 {
            Line::Vertical { x: a.x }
        } else if dy == 0.0 {
            Line::Horizontal { y: a.y }
        } else {
            let slope = dy / dx;
            Line::Sloped {
                slope,
                intercept: a.y - slope * a.x,
            }
        }
    }
}

/// Intersections of `arc` with `line`, restricted to the arc's span.
///
/// Candidates come out in solver order: the `+√D` branch first, then the
/// `-√D` branch. A tangent line yields its single point once.
pub fn compute_intersections(arc: &Arc, line: &Line) -> Intersections {
    if arc.is_degenerate() {
        tracing::trace!(radius = arc.radius, ?line, "degenerate arc, no intersections");
        return Intersections::new();
    }

    let candidates = match *line {
        Line::Vertical { x } => circle_vertical(arc.center, arc.radius, x),
        Line::Horizontal { y } => circle_horizontal(arc.center, arc.radius, y),
        Line::Sloped { slope, intercept } => circle_sloped(arc.center, arc.radius, slope, intercept),
    };

    candidates
        .into_iter()
        .filter(|p| arc.contains_direction_of(*p))
        .collect()
}

pub fn intersect_vertical(arc: &Arc, x: f64) -> Intersections {
    compute_intersections(arc, &Line::Vertical { x })
}

pub fn intersect_horizontal(arc: &Arc, y: f64) -> Intersections {
    compute_intersections(arc, &Line::Horizontal { y })
}

pub fn intersect_sloped(arc: &Arc, slope: f64, intercept: f64) -> Intersections {
    compute_intersections(arc, &Line::Sloped { slope, intercept })
}

fn circle_vertical(center: Vector, radius: f64, x: f64) -> Intersections {
    let dx = x - center.x;
    let d = radius * radius - dx * dx;
    branches(d, |root| Vector::new(x, center.y + root))
}

fn circle_horizontal(center: Vector, radius: f64, y: f64) -> Intersections {
    let dy = y - center.y;
    let d = radius * radius - dy * dy;
    branches(d, |root| Vector::new(center.x + root, y))
}

fn circle_sloped(center: Vector, radius: f64, slope: f64, intercept: f64) -> Intersections {
    let (h, k) = (center.x, center.y);
    let offset = intercept - k;

    let a = 1.0 + slope * slope;
    let b = -2.0 * h + 2.0 * slope * offset;
    let c = h * h + offset * offset - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    branches(discriminant, |root| {
        let x = (-b + root) / (2.0 * a);
        Vector::new(x, slope * x + intercept)
    })
}

/// Expands a discriminant into its solution points; `at` maps `+√D` and
/// `-√D` to a point.
fn branches(discriminant: f64, at: impl Fn(f64) -> Vector) -> Intersections {
    let mut out = Intersections::new();
    if discriminant.is_nan() || discriminant < 0.0 {
        return out;
    }
    if discriminant == 0.0 {
        out.push(at(0.0));
        return out;
    }
    let root = discriminant.sqrt();
    out.push(at(root));
    out.push(at(-root));
    out
}
