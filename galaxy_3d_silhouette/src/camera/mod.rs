//! Camera module: passive camera data consumed by the silhouette pass.
//!
//! The engine does NOT store or manage cameras. They are owned and
//! driven by the caller; the silhouette renderer only reads the
//! combined view-projection matrix.

mod camera;

pub use camera::Camera;
