/// Active set for the sweep.
///
/// Holds the indices of occluders whose x-interval contains the current
/// sweep position. Unordered: push to add, swap-remove to evict.

use crate::error::Result;
use crate::engine_bail;

#[derive(Debug, Default, Clone)]
pub struct ActiveSet {
    ids: Vec<u32>,
}

impl ActiveSet {
    pub fn new() -> Self {
        Self { ids: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { ids: Vec::with_capacity(capacity) }
    }

    pub fn add(&mut self, id: u32) {
        self.ids.push(id);
    }

    /// Evict exactly one occurrence of `id`.
    ///
    /// Searches from the back: the most recently opened occluders are the
    /// most likely to close next.
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` if `id` is not active. That means an
    /// occluder closed without opening, so the event stream is corrupt.
    pub fn remove(&mut self, id: u32) -> Result<()> {
        match self.ids.iter().rposition(|&active| active == id) {
            Some(index) => {
                self.ids.swap_remove(index);
                Ok(())
            }
            None => {
                engine_bail!("galaxy3d::ActiveSet", InvariantViolation,
                    "occluder {} closed while not active ({} active)", id, self.ids.len());
            }
        }
    }

    /// Currently active occluder indices (unordered)
    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

#[cfg(test)]
#[path = "active_set_tests.rs"]
mod tests;
