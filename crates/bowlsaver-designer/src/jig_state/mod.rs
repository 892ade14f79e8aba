//! Jig state manager for UI integration.
//!
//! Owns the live cut, the committed history and every derived flag. Pose
//! changes mutate the live cut in place and then run one full recompute, so
//! the readout is always consistent with the pose. Observers hold no
//! references into the state; they re-read it and compare
//! [`JigState::revision`].
//!
//! This module is split into submodules:
//! - `pose`: move, rotate, resize and external inputs
//! - `derived`: tailstock reach, entry point and dimensions
//! - `history`: commit and select cuts

mod derived;
mod history;
mod pose;

use bowlsaver_core::{Arc, ArcOutline, Vector};

use crate::jig::JigGeometry;
use crate::model::{Cut, CutHistory};
use crate::readout::{Dimension, EntryPoint, JigReadout};

/// Jig state for UI integration
#[derive(Debug, Clone)]
pub struct JigState {
    geometry: JigGeometry,
    cut: Cut,
    history: CutHistory,
    revision: u64,
    tailstock_reachable: bool,
    entry_point: Option<EntryPoint>,
    edge_distance: Dimension,
    centerline_offset: Dimension,
}

impl JigState {
    /// Creates a state with a zeroed live cut.
    pub fn new(geometry: JigGeometry) -> Self {
        let mut state = Self {
            geometry,
            cut: Cut::default(),
            history: CutHistory::new(),
            revision: 0,
            tailstock_reachable: false,
            entry_point: None,
            edge_distance: Dimension::default(),
            centerline_offset: Dimension::default(),
        };
        state.recompute();
        state
    }

    pub fn geometry(&self) -> &JigGeometry {
        &self.geometry
    }

    /// The live cut.
    pub fn cut(&self) -> &Cut {
        &self.cut
    }

    pub fn history(&self) -> &CutHistory {
        &self.history
    }

    /// Bumped on every recompute.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn tailstock_reachable(&self) -> bool {
        self.tailstock_reachable
    }

    pub fn entry_point(&self) -> Option<EntryPoint> {
        self.entry_point
    }

    pub fn edge_distance(&self) -> Dimension {
        self.edge_distance
    }

    pub fn centerline_offset(&self) -> Dimension {
        self.centerline_offset
    }

    pub fn readout(&self) -> JigReadout {
        JigReadout {
            revision: self.revision,
            tailstock_reachable: self.tailstock_reachable,
            entry_point: self.entry_point,
            edge_distance: self.edge_distance,
            centerline_offset: self.centerline_offset,
        }
    }

    /// Kerf-offset blade arc at the current pose.
    pub fn cutter_arc(&self) -> Arc {
        self.geometry
            .cutter
            .kerf_arc(&self.cut, self.geometry.kerf_width)
    }

    /// Tailstock range arc at the current pose.
    pub fn tailstock_arc(&self) -> Arc {
        self.geometry.tailstock.range_arc(&self.cut)
    }

    /// Blade arc (no kerf offset) as a renderer strokes it.
    pub fn cutter_outline(&self) -> ArcOutline {
        let (start, end) = self.geometry.cutter.span_at(self.cut.rotation);
        drawing_outline(self.cut.center, self.cut.radius, start, end)
    }

    pub fn tailstock_outline(&self) -> ArcOutline {
        let arc = self.tailstock_arc();
        drawing_outline(arc.center, arc.radius, arc.start_angle, arc.end_angle)
    }
}

/// Drawing angles sit a quarter turn ahead of math angles for the same point.
fn drawing_outline(center: Vector, radius: f64, start: f64, end: f64) -> ArcOutline {
    ArcOutline::drawing(center, radius, start + 90.0, end + 90.0)
}

impl Default for JigState {
    fn default() -> Self {
        Self::new(JigGeometry::default())
    }
}
