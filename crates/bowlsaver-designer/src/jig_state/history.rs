//! Committing and re-selecting cuts.
//!
//! At most one history entry is being edited at a time: selecting an entry
//! takes it out of the list, and the live cut goes back in before the next
//! one comes out.

use super::JigState;
use crate::model::Cut;

impl JigState {
    /// Appends a copy of the live cut to the history and returns its index.
    ///
    /// A cut without a positive radius is not committed.
    pub fn add_current_cut(&mut self) -> Option<usize> {
        if !self.cut.is_committable() {
            tracing::warn!(radius = self.cut.radius, "refusing to commit cut without a radius");
            return None;
        }
        let index = self.history.push(&self.cut);
        self.cut.from_history = false;
        tracing::debug!(index, "committed cut");
        Some(index)
    }

    /// Takes entry `index` out of the history and loads it into the live cut.
    ///
    /// If the live cut was itself loaded from history, its current state is
    /// appended back first. Returns the selected snapshot, or `None` (with
    /// nothing changed) when `index` is out of range.
    pub fn select_cut(&mut self, index: usize) -> Option<Cut> {
        let Some(selected) = self.history.take(index) else {
            tracing::warn!(index, len = self.history.len(), "cut index out of range");
            return None;
        };

        if self.cut.from_history {
            self.history.push(&self.cut);
        }

        self.cut.center = selected.center;
        self.cut.rotation = selected.rotation % 360.0;
        self.cut.radius = selected.radius;
        self.cut.from_history = true;
        self.recompute();

        tracing::debug!(index, remaining = self.history.len(), "selected cut");
        Some(selected)
    }

    /// Drops a history entry without loading it.
    pub fn remove_cut(&mut self, index: usize) -> Option<Cut> {
        self.history.take(index)
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
