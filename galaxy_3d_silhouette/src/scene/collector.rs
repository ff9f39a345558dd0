/// Downstream draw-submission sink.
///
/// After `compute_submissions`, the silhouette renderer pushes its
/// visible sets into a SceneCollector, one call per element, in
/// submission order.

use super::model::{ModelKey, PatchKey};

/// Receives the geometry found relevant for the silhouette pass.
pub trait SceneCollector {
    /// Submit a terrain patch.
    fn submit(&mut self, patch: PatchKey);

    /// Submit a model without its attached children (props, decals, ...).
    fn submit_non_recursive(&mut self, model: ModelKey);
}

/// A collector that simply records what it receives, in order.
///
/// Handy when the caller wants the visible sets as plain lists.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CollectedSubmissions {
    pub patches: Vec<PatchKey>,
    pub models: Vec<ModelKey>,
}

impl CollectedSubmissions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.patches.is_empty() && self.models.is_empty()
    }

    pub fn clear(&mut self) {
        self.patches.clear();
        self.models.clear();
    }
}

impl SceneCollector for CollectedSubmissions {
    fn submit(&mut self, patch: PatchKey) {
        self.patches.push(patch);
    }

    fn submit_non_recursive(&mut self, model: ModelKey) {
        self.models.push(model);
    }
}
