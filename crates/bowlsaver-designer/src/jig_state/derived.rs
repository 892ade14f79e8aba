//! Derived state: dimensions, tailstock reach and the entry point.
//!
//! Every value here is recomputed from the current pose alone; nothing
//! remembers a previous pass.

use bowlsaver_core::geometry::{intersect_horizontal, intersect_vertical};

use super::JigState;
use crate::readout::{Dimension, EntryPoint};

/// The lathe centerline.
const CENTERLINE_Y: f64 = 0.0;

impl JigState {
    /// Runs one full pass over the derived state.
    pub fn recompute(&mut self) {
        self.update_dimensions();
        self.tailstock_reachable = self.check_tailstock_reach();
        self.entry_point = self.find_entry_point();
        self.revision += 1;

        tracing::debug!(
            revision = self.revision,
            x = self.cut.center.x,
            y = self.cut.center.y,
            rotation = self.cut.rotation,
            radius = self.cut.radius,
            tailstock_reachable = self.tailstock_reachable,
            entry_point = self.entry_point.is_some(),
            "jig state recomputed"
        );
    }

    /// Edge distance and centerline offset are only meaningful while the
    /// cutter's leftmost edge is inside the workpiece.
    fn update_dimensions(&mut self) {
        let leftmost = self.cut.leftmost_x();
        let visible = self.geometry.workpiece.spans_x(leftmost);

        let edge = leftmost;
        let offset = self.cut.center.y - CENTERLINE_Y;

        self.edge_distance = if visible {
            Dimension::shown(edge)
        } else {
            Dimension::hidden(edge)
        };
        self.centerline_offset = if visible {
            Dimension::shown(offset)
        } else {
            Dimension::hidden(offset)
        };
    }

    /// The tailstock can be set iff its range arc crosses the centerline.
    fn check_tailstock_reach(&self) -> bool {
        !intersect_horizontal(&self.tailstock_arc(), CENTERLINE_Y).is_empty()
    }

    /// Where the kerf-offset blade crosses the front face.
    ///
    /// Two crossings are ambiguous and hide the measurement rather than
    /// picking one.
    fn find_entry_point(&self) -> Option<EntryPoint> {
        if !self.cut.is_committable() {
            return None;
        }

        let workpiece = &self.geometry.workpiece;
        let hits = intersect_vertical(&self.cutter_arc(), workpiece.front_face_x());
        if hits.len() != 1 {
            if hits.len() > 1 {
                tracing::trace!(count = hits.len(), "ambiguous entry point suppressed");
            }
            return None;
        }

        let point = hits[0];
        let half_height = workpiece.half_height();
        let distance = half_height - point.y;
        (distance > 0.0 && distance < half_height).then_some(EntryPoint { point, distance })
    }
}
