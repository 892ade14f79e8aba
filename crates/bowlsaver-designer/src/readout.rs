//! Derived measurements handed to the presentation layer.

use serde::{Deserialize, Serialize};

use bowlsaver_core::Vector;

/// A measurement with its visibility flag. Hidden dimensions still carry
/// their last computed value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimension {
    pub value: f64,
    pub visible: bool,
}

impl Dimension {
    pub fn shown(value: f64) -> Self {
        Self {
            value,
            visible: true,
        }
    }

    pub fn hidden(value: f64) -> Self {
        Self {
            value,
            visible: false,
        }
    }

    /// The value, if visible.
    pub fn visible_value(&self) -> Option<f64> {
        self.visible.then_some(self.value)
    }
}

/// Where the kerf-offset cutter path crosses the front face, and how far
/// below the top face that is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntryPoint {
    pub point: Vector,
    pub distance: f64,
}

/// Snapshot of all derived state after a recompute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JigReadout {
    pub revision: u64,
    pub tailstock_reachable: bool,
    pub entry_point: Option<EntryPoint>,
    /// Cutter leftmost edge to the headstock face.
    pub edge_distance: Dimension,
    /// Cutter pivot height above the centerline.
    pub centerline_offset: Dimension,
}
