use serde::{Deserialize, Serialize};

use bowlsaver_core::Vector;

/// One cutter placement: pivot center, arm rotation (degrees) and cut
/// radius (mm).
///
/// The live cut is edited in place by [`crate::JigState`]; committed cuts
/// are copies and never alias it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Cut {
    pub center: Vector,
    pub rotation: f64,
    pub radius: f64,
    /// Set while the live cut holds the contents of a selected history entry.
    #[serde(default)]
    pub from_history: bool,
}

impl Cut {
    pub fn new(center: Vector, rotation: f64, radius: f64) -> Self {
        Self {
            center,
            rotation,
            radius,
            from_history: false,
        }
    }

    /// Independent copy suitable for the history list.
    pub fn snapshot(&self) -> Cut {
        Cut {
            from_history: false,
            ..*self
        }
    }

    /// X coordinate of the cutter's leftmost edge.
    pub fn leftmost_x(&self) -> f64 {
        self.center.x - self.radius
    }

    /// A cut can be committed once it has a real, positive radius.
    pub fn is_committable(&self) -> bool {
        self.radius.is_finite() && self.radius > 0.0 && self.center.is_finite()
    }

    /// Same placement, ignoring the history marker.
    pub fn same_pose(&self, other: &Cut) -> bool {
        self.center == other.center && self.rotation == other.rotation && self.radius == other.radius
    }
}
