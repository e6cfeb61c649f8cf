use serde::Serialize;
use tracing::trace;

use crate::core::MultiScaleData;

/// Back/forward history of display scales.
///
/// Entry 0 is the unzoomed view and survives every operation. The stack is
/// built from that entry, so it is never empty and `current_index` always
/// points at a valid entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoomStack {
    entries: Vec<MultiScaleData>,
    current_index: usize,
}

impl ZoomStack {
    #[must_use]
    pub fn new(base: MultiScaleData) -> Self {
        Self {
            entries: vec![base],
            current_index: 0,
        }
    }

    /// Drops any redo history past the current entry, then appends `entry` as current.
    pub fn push(&mut self, entry: MultiScaleData) {
        let discarded = self.entries.len() - self.current_index - 1;
        self.entries.truncate(self.current_index + 1);
        self.entries.push(entry);
        self.current_index = self.entries.len() - 1;
        trace!(
            current_index = self.current_index,
            discarded, "pushed zoom entry"
        );
    }

    pub fn step_back(&mut self) -> Option<&MultiScaleData> {
        if self.current_index == 0 {
            return None;
        }
        self.current_index -= 1;
        trace!(current_index = self.current_index, "zoom step back");
        Some(&self.entries[self.current_index])
    }

    pub fn step_forward(&mut self) -> Option<&MultiScaleData> {
        if self.current_index + 1 >= self.entries.len() {
            return None;
        }
        self.current_index += 1;
        trace!(current_index = self.current_index, "zoom step forward");
        Some(&self.entries[self.current_index])
    }

    /// Makes the base entry current while keeping the forward history.
    pub fn reset_to_base(&mut self) -> &MultiScaleData {
        self.current_index = 0;
        &self.entries[0]
    }

    /// Discards every entry except the base one.
    pub fn clear_to_base(&mut self) {
        self.entries.truncate(1);
        self.current_index = 0;
    }

    #[must_use]
    pub fn current(&self) -> &MultiScaleData {
        &self.entries[self.current_index]
    }

    #[must_use]
    pub fn base(&self) -> &MultiScaleData {
        &self.entries[0]
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn entries(&self) -> &[MultiScaleData] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.current_index > 0
    }

    #[must_use]
    pub fn can_step_back(&self) -> bool {
        self.current_index > 0
    }

    #[must_use]
    pub fn can_step_forward(&self) -> bool {
        self.current_index + 1 < self.entries.len()
    }
}
