use std::{
    sync::{Arc, RwLock},
    time::Duration,
};

/// The summary of a completed selection pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SelectionResult {
    /// The number of points inside the region.
    pub selected_count: usize,
    /// The number of points tested.
    pub total_count: usize,
    /// The wall-clock time of the pass in milliseconds.
    pub elapsed_ms: f64,
}

impl SelectionResult {
    /// Create a new selection result.
    pub fn new(selected_count: usize, total_count: usize, elapsed: Duration) -> Self {
        Self {
            selected_count,
            total_count,
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
        }
    }

    /// The number of points outside the region.
    pub fn unselected_count(&self) -> usize {
        self.total_count - self.selected_count
    }
}

#[derive(Debug, Default)]
struct Slot {
    result: Option<SelectionResult>,
    version: u64,
}

/// A single-slot mailbox holding the latest [`SelectionResult`].
///
/// Clones share the same slot, so the selection side publishes through one handle and any
/// number of display consumers read through theirs. Each publish replaces the previous result
/// wholesale and bumps [`SelectionResultStore::version`].
#[derive(Debug, Clone, Default)]
pub struct SelectionResultStore(Arc<RwLock<Slot>>);

impl SelectionResultStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the latest result.
    pub fn publish(&self, result: SelectionResult) {
        let mut slot = self.0.write().unwrap_or_else(|e| e.into_inner());
        slot.result = Some(result);
        slot.version += 1;
    }

    /// Get the latest result.
    pub fn latest(&self) -> Option<SelectionResult> {
        self.0.read().unwrap_or_else(|e| e.into_inner()).result
    }

    /// Get the number of results published so far.
    pub fn version(&self) -> u64 {
        self.0.read().unwrap_or_else(|e| e.into_inner()).version
    }
}
