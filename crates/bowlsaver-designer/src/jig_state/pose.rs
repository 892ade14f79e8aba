//! Pose mutations for jig state. Each one edits the live cut in place and
//! runs a full recompute.

use bowlsaver_core::Vector;

use super::JigState;
use crate::model::Workpiece;

impl JigState {
    /// Moves the cutter pivot.
    pub fn move_to(&mut self, center: Vector) {
        self.cut.center = center;
        self.recompute();
    }

    /// Sets the arm rotation in degrees.
    ///
    /// Stored as `degrees % 360`: the sign is kept and only whole turns are
    /// dropped. Arc spans are re-derived from it on every recompute.
    pub fn rotate(&mut self, degrees: f64) {
        self.cut.rotation = degrees % 360.0;
        self.recompute();
    }

    /// Sets the cut radius in millimeters.
    pub fn set_radius(&mut self, radius: f64) {
        self.cut.radius = radius;
        self.recompute();
    }

    /// Replaces the workpiece extent.
    pub fn set_workpiece(&mut self, workpiece: Workpiece) {
        self.geometry.workpiece = workpiece;
        self.recompute();
    }

    pub fn set_kerf_width(&mut self, kerf_width: f64) {
        self.geometry.kerf_width = kerf_width;
        self.recompute();
    }
}
