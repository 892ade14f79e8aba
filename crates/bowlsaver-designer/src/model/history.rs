use serde::{Deserialize, Serialize};

use super::Cut;

/// Committed cuts in commit order. Order is the display and selection order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CutHistory {
    cuts: Vec<Cut>,
}

impl CutHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a snapshot of `cut` and returns its index.
    pub fn push(&mut self, cut: &Cut) -> usize {
        self.cuts.push(cut.snapshot());
        self.cuts.len() - 1
    }

    /// Removes and returns the entry at `index`, shifting later entries down.
    pub fn take(&mut self, index: usize) -> Option<Cut> {
        if index < self.cuts.len() {
            Some(self.cuts.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&Cut> {
        self.cuts.get(index)
    }

    pub fn len(&self) -> usize {
        self.cuts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }

    pub fn clear(&mut self) {
        self.cuts.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cut> {
        self.cuts.iter()
    }

    pub fn as_slice(&self) -> &[Cut] {
        &self.cuts
    }
}
