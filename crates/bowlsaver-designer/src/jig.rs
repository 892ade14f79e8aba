//! Fixed mechanical description of the jig.
//!
//! Angles are in the math convention (0° on +x, counter-clockwise) and are
//! measured about the cutter pivot. Each moving arc sweeps
//! `inherent_rotation + rotation .. + arc_angle`.

use serde::{Deserialize, Serialize};

use bowlsaver_core::{Arc, GeometryError, Result};

use crate::model::{Cut, Workpiece};

/// Blade arc carried by the cutter arm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CutterGeometry {
    pub inherent_rotation: f64,
    pub arc_angle: f64,
}

impl CutterGeometry {
    /// Absolute `(start, end)` of the blade for an arm at `rotation`.
    pub fn span_at(&self, rotation: f64) -> (f64, f64) {
        let start = self.inherent_rotation + rotation;
        (start, start + self.arc_angle)
    }

    /// Path of the kerf's outer edge: the cut radius grown by half the kerf.
    pub fn kerf_arc(&self, cut: &Cut, kerf_width: f64) -> Arc {
        let (start, end) = self.span_at(cut.rotation);
        Arc::new(cut.center, cut.radius + kerf_width / 2.0, start, end)
    }
}

impl Default for CutterGeometry {
    fn default() -> Self {
        Self {
            inherent_rotation: 90.0,
            arc_angle: 90.0,
        }
    }
}

/// Range over which the tailstock support can be clamped, on a fixed
/// radius around the cutter pivot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TailstockGeometry {
    pub radius: f64,
    pub inherent_rotation: f64,
    pub arc_angle: f64,
}

impl TailstockGeometry {
    pub fn span_at(&self, rotation: f64) -> (f64, f64) {
        let start = self.inherent_rotation + rotation;
        (start, start + self.arc_angle)
    }

    pub fn range_arc(&self, cut: &Cut) -> Arc {
        let (start, end) = self.span_at(cut.rotation);
        Arc::new(cut.center, self.radius, start, end)
    }
}

impl Default for TailstockGeometry {
    fn default() -> Self {
        Self {
            radius: 120.0,
            inherent_rotation: 180.0,
            arc_angle: 60.0,
        }
    }
}

/// Everything about the setup that does not change while the arm is dragged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JigGeometry {
    pub cutter: CutterGeometry,
    pub tailstock: TailstockGeometry,
    pub kerf_width: f64,
    pub workpiece: Workpiece,
}

impl JigGeometry {
    pub const DEFAULT_KERF_WIDTH: f64 = 3.0;

    pub fn new(workpiece: Workpiece) -> Self {
        Self {
            workpiece,
            ..Self::default()
        }
    }

    /// Rejects setups no physical jig can have.
    pub fn validate(&self) -> Result<()> {
        GeometryError::check_positive("workpiece width", self.workpiece.width)?;
        GeometryError::check_positive("workpiece height", self.workpiece.height)?;
        GeometryError::check_positive("tailstock radius", self.tailstock.radius)?;
        GeometryError::check_finite("cutter inherent rotation", self.cutter.inherent_rotation)?;
        GeometryError::check_finite(
            "tailstock inherent rotation",
            self.tailstock.inherent_rotation,
        )?;

        if !self.kerf_width.is_finite() || self.kerf_width < 0.0 {
            return Err(GeometryError::NonPositive {
                name: "kerf width".to_string(),
                value: self.kerf_width,
            }
            .into());
        }

        for span in [self.cutter.arc_angle, self.tailstock.arc_angle] {
            if !(0.0..=360.0).contains(&span) {
                return Err(GeometryError::InvalidSpan { span }.into());
            }
        }
        Ok(())
    }
}

impl Default for JigGeometry {
    fn default() -> Self {
        Self {
            cutter: CutterGeometry::default(),
            tailstock: TailstockGeometry::default(),
            kerf_width: Self::DEFAULT_KERF_WIDTH,
            workpiece: Workpiece::default(),
        }
    }
}
