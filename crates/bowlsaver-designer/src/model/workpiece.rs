use serde::{Deserialize, Serialize};

use bowlsaver_core::{GeometryError, Result, Vector};

/// The blank on the lathe, seen from above.
///
/// Occupies `x ∈ [0, width]` (x = 0 is the headstock face, x = width the
/// front face) and `y ∈ [-height/2, height/2]`; the lathe centerline is
/// `y = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Workpiece {
    pub width: f64,
    pub height: f64,
}

impl Workpiece {
    /// Checked constructor for values coming from outside the solver.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        Ok(Self {
            width: GeometryError::check_positive("workpiece width", width)?,
            height: GeometryError::check_positive("workpiece height", height)?,
        })
    }

    pub fn half_height(&self) -> f64 {
        self.height / 2.0
    }

    /// X of the front face, where the cutter enters.
    pub fn front_face_x(&self) -> f64 {
        self.width
    }

    /// Whether `x` lies strictly between the two faces.
    pub fn spans_x(&self, x: f64) -> bool {
        x > 0.0 && x < self.width
    }
}

impl Default for Workpiece {
    fn default() -> Self {
        Self {
            width: 80.0,
            height: 300.0,
        }
    }
}

impl From<Vector> for Workpiece {
    fn from(extent: Vector) -> Self {
        Self {
            width: extent.x,
            height: extent.y,
        }
    }
}
