/// Model handles and the model table.
///
/// The silhouette pass never owns models. It stores `ModelKey`/`PatchKey`
/// handles for one frame and resolves them through a `ModelSource`
/// when projecting. Keys stay valid until their own model is removed.

use glam::{Mat4, Vec3};
use slotmap::{new_key_type, SlotMap};
use super::aabb::AABB;

// ===== SLOT MAP KEYS =====

new_key_type! {
    /// Stable handle to a model owned by the caller's model table.
    pub struct ModelKey;

    /// Stable handle to a terrain patch owned by the caller.
    ///
    /// Patches are forwarded to the collector as-is and never resolved.
    pub struct PatchKey;
}

// ===== MODEL SOURCE =====

/// Read access to externally owned models.
///
/// `None` means the handle no longer refers to a live model; the
/// silhouette pass skips such handles for the current frame.
pub trait ModelSource {
    /// World-space bounding box of the model.
    fn world_bounds(&self, model: ModelKey) -> Option<AABB>;

    /// Translation part of the model's world transform.
    fn translation(&self, model: ModelKey) -> Option<Vec3>;
}

// ===== MODEL =====

/// A model as seen by the silhouette pass: a world transform and a local-space AABB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Model {
    world_matrix: Mat4,
    bounding_box: AABB,
}

impl Model {
    pub fn new(world_matrix: Mat4, bounding_box: AABB) -> Self {
        Self { world_matrix, bounding_box }
    }

    pub fn world_matrix(&self) -> &Mat4 {
        &self.world_matrix
    }

    /// Local-space bounding box
    pub fn bounding_box(&self) -> &AABB {
        &self.bounding_box
    }

    pub fn set_world_matrix(&mut self, matrix: Mat4) {
        self.world_matrix = matrix;
    }

    pub fn set_bounding_box(&mut self, bounding_box: AABB) {
        self.bounding_box = bounding_box;
    }

    /// Bounding box transformed into world space
    pub fn world_bounds(&self) -> AABB {
        self.bounding_box.transformed(&self.world_matrix)
    }

    /// World-space anchor point (translation column of the world matrix)
    pub fn translation(&self) -> Vec3 {
        self.world_matrix.w_axis.truncate()
    }
}

// ===== MODEL TABLE =====

/// Default `ModelSource`: models stored in a slot map for O(1) insert/remove.
#[derive(Debug, Default)]
pub struct ModelTable {
    models: SlotMap<ModelKey, Model>,
}

impl ModelTable {
    pub fn new() -> Self {
        Self {
            models: SlotMap::with_key(),
        }
    }

    /// Add a model and return its stable key
    pub fn insert(&mut self, model: Model) -> ModelKey {
        self.models.insert(model)
    }

    /// Remove a model. Outstanding keys to it become stale.
    pub fn remove(&mut self, key: ModelKey) -> Option<Model> {
        self.models.remove(key)
    }

    pub fn get(&self, key: ModelKey) -> Option<&Model> {
        self.models.get(key)
    }

    pub fn get_mut(&mut self, key: ModelKey) -> Option<&mut Model> {
        self.models.get_mut(key)
    }

    pub fn contains(&self, key: ModelKey) -> bool {
        self.models.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Iterate over all (key, model) pairs
    pub fn iter(&self) -> impl Iterator<Item = (ModelKey, &Model)> + '_ {
        self.models.iter()
    }
}

impl ModelSource for ModelTable {
    fn world_bounds(&self, model: ModelKey) -> Option<AABB> {
        self.models.get(model).map(Model::world_bounds)
    }

    fn translation(&self, model: ModelKey) -> Option<Vec3> {
        self.models.get(model).map(Model::translation)
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
