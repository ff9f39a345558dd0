//! Scene-side types consumed by the silhouette pass
//!
//! Bounding boxes, model handles and the lookup/collector seams the
//! caller implements.

mod aabb;
mod model;
mod collector;

pub use aabb::AABB;
pub use model::{Model, ModelKey, PatchKey, ModelSource, ModelTable};
pub use collector::{SceneCollector, CollectedSubmissions};
